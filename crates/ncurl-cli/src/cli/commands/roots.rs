//! `ncurl root`, `ncurl base`, `ncurl app-root <app>`.

use anyhow::Result;
use ncurl_core::{HostConfigProvider, UrlGenerator};

pub fn run_root<P: HostConfigProvider>(urls: &UrlGenerator<P>) -> Result<()> {
    println!("{}", urls.root_url());
    Ok(())
}

pub fn run_base<P: HostConfigProvider>(urls: &UrlGenerator<P>) -> Result<()> {
    println!("{}", urls.base_url());
    Ok(())
}

/// Prints an empty line when the app has no custom web root.
pub fn run_app_root<P: HostConfigProvider>(urls: &UrlGenerator<P>, app: &str) -> Result<()> {
    println!("{}", urls.app_root_url(app));
    Ok(())
}
