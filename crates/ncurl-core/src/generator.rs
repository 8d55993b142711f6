//! Public URL builders.
//!
//! [`UrlGenerator`] pairs the path logic with a [`HostConfigProvider`]. Every
//! method takes exactly one configuration snapshot, so a single result never
//! mixes values from two different host states.

use crate::file_path::file_path;
use crate::host::{HostConfig, HostConfigProvider};
use crate::options::UrlOptions;
use crate::root;
use crate::template::{substitute, Params};

#[derive(Debug, Clone, Default)]
pub struct UrlGenerator<P> {
    provider: P,
}

impl<P: HostConfigProvider> UrlGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn snapshot(&self) -> HostConfig {
        self.provider.current_value()
    }

    /// Web root path, e.g. `/nextcloud`.
    pub fn root_url(&self) -> String {
        root::root_url(&self.snapshot())
    }

    /// Origin plus web root, e.g. `https://example.com/nextcloud`.
    pub fn base_url(&self) -> String {
        root::base_url(&self.snapshot())
    }

    pub fn app_root_url(&self, app: &str) -> String {
        root::app_root_url(&self.snapshot(), app)
    }

    /// Path with web root to a file of an app.
    pub fn link_to(&self, app: &str, file: &str) -> String {
        self.generate_file_path(app, "", file)
    }

    pub fn generate_file_path(&self, app: &str, file_type: &str, file: &str) -> String {
        file_path(&self.snapshot(), app, file_type, file)
    }

    /// Path to an image of an app; names without an extension get `.svg`.
    pub fn image_path(&self, app: &str, file: &str) -> String {
        if file.contains('.') {
            self.generate_file_path(app, "img", file)
        } else {
            self.generate_file_path(app, "img", &format!("{file}.svg"))
        }
    }

    /// Absolute URL of a remote (WebDAV-style) service, e.g. `dav`.
    pub fn generate_remote_url(&self, service: &str, options: &UrlOptions) -> String {
        let base = self.base_or(options, root::base_url);
        let url = format!("{base}/remote.php/{service}");
        tracing::trace!(service, url = %url, "generated remote url");
        url
    }

    /// Absolute URL of an OCS API endpoint.
    pub fn generate_ocs_url(&self, path: &str, params: &Params, options: &UrlOptions) -> String {
        let base = self.base_or(options, root::base_url);
        let url = format!(
            "{}/ocs/v{}.php{}",
            base,
            options.ocs_version.as_number(),
            substitute(path, params, options)
        );
        tracing::trace!(path, url = %url, "generated ocs url");
        url
    }

    /// URL with web root (or `options.base_url`) for a front-controller route.
    ///
    /// `/index.php` is inserted unless the host reports working rewrites and
    /// the caller did not ask for `no_rewrite`.
    pub fn generate_url(&self, path: &str, params: &Params, options: &UrlOptions) -> String {
        let host = self.snapshot();
        let prefix = match &options.base_url {
            Some(base) => base.clone(),
            None => root::root_url(&host),
        };
        let route = substitute(path, params, options);
        let url = if host.mod_rewrite_working && !options.no_rewrite {
            format!("{prefix}{route}")
        } else {
            format!("{prefix}/index.php{route}")
        };
        tracing::trace!(path, url = %url, "generated url");
        url
    }

    fn base_or(&self, options: &UrlOptions, fallback: fn(&HostConfig) -> String) -> String {
        match &options.base_url {
            Some(base) => base.clone(),
            None => fallback(&self.snapshot()),
        }
    }
}
