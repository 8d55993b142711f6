//! Web-root aware construction of paths and URLs into a Nextcloud-style
//! server: app file paths, front-controller routes, OCS and remote endpoints,
//! and avatar URLs.
//!
//! ```
//! use ncurl_core::{HostConfig, Params, UrlGenerator, UrlOptions};
//!
//! let urls = UrlGenerator::new(HostConfig::default().with_webroot("/nextcloud"));
//! let url = urls.generate_url(
//!     "/foo/{bar}",
//!     &Params::new().with("bar", "hello world"),
//!     &UrlOptions::default(),
//! );
//! assert_eq!(url, "/nextcloud/index.php/foo/hello%20world");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logging;

pub mod avatar;
pub mod encode;
pub mod file_path;
pub mod generator;
pub mod options;
pub mod root;
pub mod template;

pub use avatar::AvatarOptions;
pub use error::HostConfigError;
pub use generator::UrlGenerator;
pub use host::{FnProvider, HostConfig, HostConfigProvider, Location};
pub use options::{OcsVersion, UrlOptions};
pub use template::{ParamValue, Params};
