//! Host configuration: the read-only values a hosting page supplies.
//!
//! URL generation never owns this state. It asks a [`HostConfigProvider`] for a
//! snapshot at the start of every call, so a host that changes its
//! configuration between calls is always observed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::HostConfigError;

/// Core apps used when no explicit list is configured.
pub const DEFAULT_CORE_APPS: &[&str] = &["", "admin", "log", "core/search", "core", "3rdparty"];

/// Current navigation location of the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr")]
pub struct Location {
    /// `scheme://host[:port]`, no trailing slash.
    pub origin: String,
    /// Path component, e.g. `/nextcloud/index.php/apps/files`.
    pub pathname: String,
    /// Full URL.
    pub href: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            origin: "http://localhost".to_string(),
            pathname: "/".to_string(),
            href: "http://localhost/".to_string(),
        }
    }
}

impl Location {
    /// Split an absolute URL into origin and pathname.
    ///
    /// Default ports are dropped from the origin, matching what browsers
    /// report for `location.origin`.
    pub fn from_href(href: &str) -> Result<Self, HostConfigError> {
        let parsed = url::Url::parse(href).map_err(|source| HostConfigError::InvalidHref {
            href: href.to_string(),
            source,
        })?;

        let host = parsed
            .host_str()
            .ok_or_else(|| HostConfigError::MissingHost(href.to_string()))?;
        let origin = match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
            None => format!("{}://{}", parsed.scheme(), host),
        };

        Ok(Self {
            origin,
            pathname: parsed.path().to_string(),
            href: parsed.as_str().to_string(),
        })
    }
}

/// On-disk form of [`Location`]: any field may be omitted, and a lone `href`
/// is enough to derive the other two.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocationRepr {
    origin: Option<String>,
    pathname: Option<String>,
    href: Option<String>,
}

impl TryFrom<LocationRepr> for Location {
    type Error = HostConfigError;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        let base = match repr.href.as_deref() {
            Some(href) => Location::from_href(href)?,
            None => Location::default(),
        };
        let origin = repr.origin.unwrap_or(base.origin);
        let pathname = repr.pathname.unwrap_or(base.pathname);
        let href = match repr.href {
            Some(_) => base.href,
            None => format!("{origin}{pathname}"),
        };
        Ok(Self {
            origin,
            pathname,
            href,
        })
    }
}

/// Snapshot of everything URL generation reads from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Explicit deployment web root. `None` means "derive from location";
    /// `Some("")` is a configured empty root.
    pub webroot: Option<String>,
    /// Apps shipped with the platform, addressed without `/apps/`.
    pub core_apps: Vec<String>,
    /// Whether the web server rewrites clean URLs (no `/index.php`).
    pub mod_rewrite_working: bool,
    /// Per-app web roots for apps installed outside the default app folder.
    pub app_webroots: Option<HashMap<String, String>>,
    pub location: Location,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            webroot: None,
            core_apps: DEFAULT_CORE_APPS.iter().map(|s| s.to_string()).collect(),
            mod_rewrite_working: false,
            app_webroots: None,
            location: Location::default(),
        }
    }
}

impl HostConfig {
    pub fn with_webroot(mut self, webroot: impl Into<String>) -> Self {
        self.webroot = Some(webroot.into());
        self
    }

    pub fn with_app_webroot(mut self, app: impl Into<String>, root: impl Into<String>) -> Self {
        self.app_webroots
            .get_or_insert_with(HashMap::new)
            .insert(app.into(), root.into());
        self
    }

    pub fn with_core_apps<I, S>(mut self, apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_apps = apps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mod_rewrite(mut self, working: bool) -> Self {
        self.mod_rewrite_working = working;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn is_core_app(&self, app: &str) -> bool {
        self.core_apps.iter().any(|core| core == app)
    }
}

/// Source of host configuration, read once per URL operation.
pub trait HostConfigProvider {
    fn current_value(&self) -> HostConfig;
}

impl HostConfigProvider for HostConfig {
    fn current_value(&self) -> HostConfig {
        self.clone()
    }
}

impl HostConfigProvider for RwLock<HostConfig> {
    fn current_value(&self) -> HostConfig {
        // A poisoned lock still holds the last complete configuration.
        match self.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<P: HostConfigProvider + ?Sized> HostConfigProvider for Arc<P> {
    fn current_value(&self) -> HostConfig {
        (**self).current_value()
    }
}

impl<P: HostConfigProvider + ?Sized> HostConfigProvider for &P {
    fn current_value(&self) -> HostConfig {
        (**self).current_value()
    }
}

/// Provider backed by a closure, for hosts that assemble config on demand.
pub struct FnProvider<F>(pub F);

impl<F> HostConfigProvider for FnProvider<F>
where
    F: Fn() -> HostConfig,
{
    fn current_value(&self) -> HostConfig {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_from_href_drops_default_port() {
        let loc = Location::from_href("https://cloud.example.com/nextcloud/index.php/apps/files")
            .unwrap();
        assert_eq!(loc.origin, "https://cloud.example.com");
        assert_eq!(loc.pathname, "/nextcloud/index.php/apps/files");
    }

    #[test]
    fn location_from_href_keeps_custom_port() {
        let loc = Location::from_href("http://localhost:8080/").unwrap();
        assert_eq!(loc.origin, "http://localhost:8080");
        assert_eq!(loc.pathname, "/");
        assert_eq!(loc.href, "http://localhost:8080/");
    }

    #[test]
    fn location_from_href_rejects_relative() {
        assert!(matches!(
            Location::from_href("/index.php"),
            Err(HostConfigError::InvalidHref { .. })
        ));
    }

    #[test]
    fn core_app_lookup_accepts_empty_id() {
        let cfg = HostConfig::default();
        assert!(cfg.is_core_app(""));
        assert!(cfg.is_core_app("core"));
        assert!(!cfg.is_core_app("forms"));
    }

    #[test]
    fn rwlock_provider_sees_updates() {
        let shared = RwLock::new(HostConfig::default().with_webroot("/a"));
        assert_eq!(shared.current_value().webroot.as_deref(), Some("/a"));
        shared.write().unwrap().webroot = Some("/b".to_string());
        assert_eq!(shared.current_value().webroot.as_deref(), Some("/b"));
    }

    #[test]
    fn fn_provider_is_called_per_snapshot() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = AtomicUsize::new(0);
        let provider = FnProvider(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            HostConfig::default()
        });
        provider.current_value();
        provider.current_value();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
