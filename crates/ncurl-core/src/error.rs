//! Errors raised while loading host configuration.
//!
//! URL generation itself has no error path; these only occur at the edges
//! where configuration is read from disk or parsed from a URL.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error("cannot locate config directory")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid host config in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize default host config")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid location href: {href}")]
    InvalidHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("location href has no host: {0}")]
    MissingHost(String),
}
