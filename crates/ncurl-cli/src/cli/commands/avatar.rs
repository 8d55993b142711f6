//! `ncurl avatar <user>`.

use anyhow::Result;
use ncurl_core::{AvatarOptions, HostConfigProvider, UrlGenerator};

pub fn run_avatar<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    user: &str,
    size: Option<i64>,
    guest: bool,
    dark: bool,
) -> Result<()> {
    let options = AvatarOptions {
        size,
        is_guest_user: guest,
        is_dark_theme: dark,
    };
    println!("{}", urls.generate_avatar_url(user, &options));
    Ok(())
}
