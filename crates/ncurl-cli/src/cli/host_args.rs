//! Global flags describing the host, layered over the config file.

use anyhow::{Context, Result};
use clap::Args;
use ncurl_core::{config, HostConfig, Location};
use std::path::PathBuf;

use super::parse_key_val;

#[derive(Debug, Clone, Default, Args)]
pub struct HostArgs {
    /// Host config file (default: ~/.config/ncurl/host.toml, created if missing).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files and start from built-in defaults.
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Explicit web root, e.g. `/nextcloud` (may be empty).
    #[arg(long, global = true, value_name = "PATH")]
    pub webroot: Option<String>,

    /// Current page URL; sets origin and pathname at once.
    #[arg(long, global = true, value_name = "URL")]
    pub href: Option<String>,

    /// Current origin, e.g. `https://cloud.example.com`.
    #[arg(long, global = true, value_name = "URL")]
    pub origin: Option<String>,

    /// Current pathname, used to guess the web root when none is set.
    #[arg(long, global = true, value_name = "PATH")]
    pub pathname: Option<String>,

    /// Core app id (repeatable; replaces the configured list).
    #[arg(long = "core-app", global = true, value_name = "ID")]
    pub core_apps: Vec<String>,

    /// Web root of an app in a custom apps folder (repeatable).
    #[arg(long = "app-webroot", global = true, value_name = "ID=PATH", value_parser = parse_key_val)]
    pub app_webroots: Vec<(String, String)>,

    /// The web server rewrites clean URLs (omit `/index.php`).
    #[arg(long, global = true)]
    pub mod_rewrite: bool,
}

impl HostArgs {
    /// Load the config file (unless disabled) and apply flag overrides.
    pub fn resolve(&self) -> Result<HostConfig> {
        let base = if self.no_config {
            HostConfig::default()
        } else if let Some(path) = &self.config {
            config::load_from_path(path)
                .with_context(|| format!("loading host config {}", path.display()))?
        } else {
            config::load_or_init().context("loading default host config")?
        };
        self.apply(base)
    }

    /// Apply flag overrides on top of `host`.
    pub fn apply(&self, mut host: HostConfig) -> Result<HostConfig> {
        if let Some(href) = &self.href {
            host.location = Location::from_href(href)?;
        }
        if let Some(origin) = &self.origin {
            host.location.origin = origin.trim_end_matches('/').to_string();
        }
        if let Some(pathname) = &self.pathname {
            host.location.pathname = pathname.clone();
        }
        if self.origin.is_some() || self.pathname.is_some() {
            host.location.href = format!("{}{}", host.location.origin, host.location.pathname);
        }
        if let Some(webroot) = &self.webroot {
            host.webroot = Some(webroot.clone());
        }
        if !self.core_apps.is_empty() {
            host.core_apps = self.core_apps.clone();
        }
        for (app, root) in &self.app_webroots {
            host = host.with_app_webroot(app.as_str(), root.as_str());
        }
        if self.mod_rewrite {
            host.mod_rewrite_working = true;
        }
        Ok(host)
    }
}
