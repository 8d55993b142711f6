//! Avatar URLs.

use crate::generator::UrlGenerator;
use crate::host::HostConfigProvider;
use crate::options::UrlOptions;
use crate::template::Params;

/// The backend only renders these two sizes.
const SMALL_SIZE: i64 = 64;
const LARGE_SIZE: i64 = 512;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Requested size in pixels; snapped to 64 or 512.
    pub size: Option<i64>,
    /// Guest users are served from a separate endpoint.
    pub is_guest_user: bool,
    pub is_dark_theme: bool,
}

impl AvatarOptions {
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn guest(mut self) -> Self {
        self.is_guest_user = true;
        self
    }

    pub fn dark(mut self) -> Self {
        self.is_dark_theme = true;
        self
    }

    /// Size actually requested from the backend.
    pub fn effective_size(&self) -> i64 {
        match self.size {
            Some(size) if size > SMALL_SIZE => LARGE_SIZE,
            _ => SMALL_SIZE,
        }
    }
}

impl<P: HostConfigProvider> UrlGenerator<P> {
    /// Relative URL of a user's avatar image.
    pub fn generate_avatar_url(&self, user: &str, options: &AvatarOptions) -> String {
        let guest = if options.is_guest_user { "/guest" } else { "" };
        let theme = if options.is_dark_theme { "/dark" } else { "" };
        let template = format!("/avatar{guest}/{{user}}/{{size}}{theme}");

        let params = Params::new()
            .with("user", user)
            .with("size", options.effective_size());
        self.generate_url(&template, &params, &UrlOptions::default())
    }
}
