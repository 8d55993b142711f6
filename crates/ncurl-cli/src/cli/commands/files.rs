//! `ncurl link-to`, `ncurl file-path`, `ncurl image-path`.

use anyhow::Result;
use ncurl_core::{HostConfigProvider, UrlGenerator};

pub fn run_link_to<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    app: &str,
    file: &str,
) -> Result<()> {
    println!("{}", urls.link_to(app, file));
    Ok(())
}

pub fn run_file_path<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    app: &str,
    file_type: &str,
    file: &str,
) -> Result<()> {
    println!("{}", urls.generate_file_path(app, file_type, file));
    Ok(())
}

pub fn run_image_path<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    app: &str,
    file: &str,
) -> Result<()> {
    println!("{}", urls.image_path(app, file));
    Ok(())
}
