//! Paths to files inside apps.
//!
//! Three shapes are produced:
//! - PHP files of installed apps are routed through the front controller:
//!   `{root}/index.php/apps/{app}[/{type}][/{file}]`
//! - Static files of installed apps live under the app's own web root:
//!   `{app_root}[/{type}]/{file}`
//! - Core files sit directly under the web root, with `/index.php` only for
//!   the ajax endpoints of `settings`, `core` and `search`.

use crate::encode::encode_uri;
use crate::host::HostConfig;
use crate::root::{app_root_url, root_url};

/// Core apps whose `ajax` folder is served through the front controller.
const AJAX_VIA_FRONT_CONTROLLER: &[&str] = &["settings", "core", "search"];

/// Which of the three path shapes a file resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    AppScript,
    AppAsset,
    Core,
}

impl FileKind {
    /// Classify by core membership and a plain `php` name suffix.
    ///
    /// The suffix check is not extension aware: `graphp` counts as PHP.
    pub fn classify(host: &HostConfig, app: &str, file: &str) -> Self {
        if host.is_core_app(app) {
            FileKind::Core
        } else if file.ends_with("php") {
            FileKind::AppScript
        } else {
            FileKind::AppAsset
        }
    }
}

/// Path with web root to `file` of type `file_type` (e.g. `css`, `img`,
/// `ajax`, `templates`) in `app`.
pub fn file_path(host: &HostConfig, app: &str, file_type: &str, file: &str) -> String {
    let kind = FileKind::classify(host, app, file);
    let link = match kind {
        FileKind::AppScript => app_script_path(host, app, file_type, file),
        FileKind::AppAsset => app_asset_path(host, app, file_type, file),
        FileKind::Core => core_path(host, app, file_type, file),
    };
    tracing::trace!(app, file_type, file, ?kind, link = %link, "built file path");
    link
}

fn app_script_path(host: &HostConfig, app: &str, file_type: &str, file: &str) -> String {
    let mut link = format!("{}/index.php/apps/{}", root_url(host), app);
    if !file_type.is_empty() {
        link.push('/');
        link.push_str(&encode_uri(file_type));
    }
    if file != "index.php" {
        link.push('/');
        link.push_str(file);
    }
    link
}

fn app_asset_path(host: &HostConfig, app: &str, file_type: &str, file: &str) -> String {
    let mut link = app_root_url(host, app);
    if !file_type.is_empty() {
        link.push('/');
        link.push_str(file_type);
        link.push('/');
    }
    if !link.ends_with('/') {
        link.push('/');
    }
    link.push_str(file);
    link
}

fn core_path(host: &HostConfig, app: &str, file_type: &str, file: &str) -> String {
    let mut link = root_url(host);
    if file_type == "ajax" && AJAX_VIA_FRONT_CONTROLLER.contains(&app) {
        link.push_str("/index.php");
    }
    if !app.is_empty() {
        link.push('/');
        link.push_str(app);
    }
    if !file_type.is_empty() {
        link.push('/');
        link.push_str(file_type);
    }
    link.push('/');
    link.push_str(file);
    link
}
