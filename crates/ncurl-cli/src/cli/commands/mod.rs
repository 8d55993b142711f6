//! CLI command handlers, grouped by the kind of string they print.

mod avatar;
mod docs;
mod files;
mod roots;
mod urls;

pub use avatar::run_avatar;
pub use docs::{run_completions, run_man};
pub use files::{run_file_path, run_image_path, run_link_to};
pub use roots::{run_app_root, run_base, run_root};
pub use urls::{run_ocs_url, run_remote_url, run_url};

#[cfg(test)]
pub(crate) use urls::template_inputs;
