//! Shared host fixtures for integration tests.

#![allow(dead_code)]

use ncurl_core::{HostConfig, Location, UrlGenerator};

pub const ORIGIN: &str = "https://cloud.example.com";

pub fn location(pathname: &str) -> Location {
    Location {
        origin: ORIGIN.to_string(),
        pathname: pathname.to_string(),
        href: format!("{ORIGIN}{pathname}"),
    }
}

/// Empty web root, a small core set and one app in a custom apps folder.
pub fn forms_host() -> HostConfig {
    HostConfig::default()
        .with_webroot("")
        .with_core_apps(["", "admin", "core"])
        .with_app_webroot("forms", "/apps-extra/forms")
        .with_location(location("/index.php/apps/files"))
}

pub fn generator(host: HostConfig) -> UrlGenerator<HostConfig> {
    UrlGenerator::new(host)
}
