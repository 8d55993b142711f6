//! Web root resolution.

use crate::host::HostConfig;

const FRONT_CONTROLLER_SEGMENT: &str = "/index.php/";

/// Web root path of the instance, e.g. `/nextcloud`, or `""` at the domain root.
///
/// A configured web root wins, even when empty. Without one, the root is
/// guessed from the current pathname: everything before `/index.php/`, or
/// else the first path segment (the whole pathname when it has only one).
pub fn root_url(host: &HostConfig) -> String {
    if let Some(webroot) = &host.webroot {
        return webroot.clone();
    }

    let pathname = host.location.pathname.as_str();
    let derived = match pathname.find(FRONT_CONTROLLER_SEGMENT) {
        Some(pos) => &pathname[..pos],
        None => match pathname.get(1..).and_then(|rest| rest.find('/')) {
            Some(pos) => &pathname[..pos + 1],
            None => pathname,
        },
    };

    tracing::debug!(pathname, webroot = derived, "derived web root from location");
    derived.to_string()
}

/// Web root of an app installed in a custom apps folder, or `""`.
pub fn app_root_url(host: &HostConfig, app: &str) -> String {
    host.app_webroots
        .as_ref()
        .and_then(|roots| roots.get(app))
        .cloned()
        .unwrap_or_default()
}

/// Absolute base URL: origin plus web root, e.g. `https://example.com/nextcloud`.
pub fn base_url(host: &HostConfig) -> String {
    format!("{}{}", host.location.origin, root_url(host))
}
