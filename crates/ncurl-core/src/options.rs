//! Per-call options for URL generation.

/// OCS API version used in the `/ocs/v{N}.php` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcsVersion {
    V1,
    #[default]
    V2,
}

impl OcsVersion {
    /// Version 1 only when exactly `1` is requested; anything else is version 2.
    pub fn from_number(n: i64) -> Self {
        if n == 1 {
            OcsVersion::V1
        } else {
            OcsVersion::V2
        }
    }

    pub fn as_number(self) -> u8 {
        match self {
            OcsVersion::V1 => 1,
            OcsVersion::V2 => 2,
        }
    }
}

/// Options for parameter replacement and URL prefixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOptions {
    /// Percent-encode substituted parameters.
    pub escape: bool,
    /// Always insert `/index.php`, even in rewrite mode.
    pub no_rewrite: bool,
    pub ocs_version: OcsVersion,
    /// Absolute URL replacing the current instance (e.g. a remote server).
    pub base_url: Option<String>,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            escape: true,
            no_rewrite: false,
            ocs_version: OcsVersion::V2,
            base_url: None,
        }
    }
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_no_rewrite(mut self, no_rewrite: bool) -> Self {
        self.no_rewrite = no_rewrite;
        self
    }

    pub fn with_ocs_version(mut self, version: OcsVersion) -> Self {
        self.ocs_version = version;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = UrlOptions::default();
        assert!(opts.escape);
        assert!(!opts.no_rewrite);
        assert_eq!(opts.ocs_version, OcsVersion::V2);
        assert!(opts.base_url.is_none());
    }

    #[test]
    fn ocs_version_only_one_selects_v1() {
        assert_eq!(OcsVersion::from_number(1), OcsVersion::V1);
        assert_eq!(OcsVersion::from_number(2), OcsVersion::V2);
        assert_eq!(OcsVersion::from_number(3), OcsVersion::V2);
        assert_eq!(OcsVersion::from_number(0), OcsVersion::V2);
        assert_eq!(OcsVersion::V1.as_number(), 1);
    }
}
