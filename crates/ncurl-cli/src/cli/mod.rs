//! CLI for the ncurl path and URL builders.

mod commands;
mod host_args;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ncurl_core::UrlGenerator;

pub use host_args::HostArgs;

use commands::{
    run_app_root, run_avatar, run_base, run_completions, run_file_path, run_image_path,
    run_link_to, run_man, run_ocs_url, run_remote_url, run_root, run_url,
};

/// Top-level CLI for ncurl.
#[derive(Debug, Parser)]
#[command(name = "ncurl")]
#[command(about = "ncurl: build web-root aware paths and URLs for a Nextcloud-style server", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub host: HostArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Placeholder substitution flags shared by `url` and `ocs-url`.
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Value for a `{KEY}` placeholder (repeatable).
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Insert parameter values without percent-encoding.
    #[arg(long)]
    pub no_escape: bool,

    /// Absolute URL to use instead of the configured instance.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the web root path (e.g. `/nextcloud`).
    Root,

    /// Print the absolute base URL (origin plus web root).
    Base,

    /// Print the web root of an app in a custom apps folder.
    AppRoot {
        /// App id.
        app: String,
    },

    /// Path with web root to a file in an app.
    LinkTo {
        /// App id (empty for the server root).
        app: String,
        /// File path relative to the app folder.
        file: String,
    },

    /// Path with web root to a typed file (css, img, ajax, templates, ...) in an app.
    FilePath {
        /// App id (empty for the server root).
        app: String,
        /// File type folder; may be empty.
        file_type: String,
        /// File name.
        file: String,
    },

    /// Path to an app image; `.svg` is added when the name has no extension.
    ImagePath {
        /// App id.
        app: String,
        /// Image name.
        file: String,
    },

    /// URL with web root for a front-controller route such as `/apps/files/{dir}`.
    Url {
        /// Route template with `{KEY}` placeholders.
        template: String,

        #[command(flatten)]
        args: TemplateArgs,

        /// Always insert `/index.php`, even when rewrites work.
        #[arg(long)]
        no_rewrite: bool,
    },

    /// Absolute URL of a remote service (e.g. `dav`).
    RemoteUrl {
        /// Service id.
        service: String,

        /// Absolute URL to use instead of the configured instance.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Absolute URL of an OCS API endpoint.
    OcsUrl {
        /// Endpoint template with `{KEY}` placeholders.
        template: String,

        #[command(flatten)]
        args: TemplateArgs,

        /// OCS API version; only `1` selects v1.
        #[arg(long, default_value = "2", value_name = "N")]
        ocs_version: i64,
    },

    /// Relative URL of a user's avatar.
    Avatar {
        /// User id.
        user: String,

        /// Requested size in pixels (snapped to 64 or 512).
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Use the guest avatar endpoint.
        #[arg(long)]
        guest: bool,

        /// Request the dark theme variant.
        #[arg(long)]
        dark: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

/// Parse `KEY=VALUE`; the value may be empty or contain further `=`.
pub(crate) fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Commands that don't need a host config.
        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let host = cli.host.resolve()?;
        tracing::debug!("resolved host config: {:?}", host);
        let urls = UrlGenerator::new(host);

        match cli.command {
            CliCommand::Root => run_root(&urls),
            CliCommand::Base => run_base(&urls),
            CliCommand::AppRoot { app } => run_app_root(&urls, &app),
            CliCommand::LinkTo { app, file } => run_link_to(&urls, &app, &file),
            CliCommand::FilePath {
                app,
                file_type,
                file,
            } => run_file_path(&urls, &app, &file_type, &file),
            CliCommand::ImagePath { app, file } => run_image_path(&urls, &app, &file),
            CliCommand::Url {
                template,
                args,
                no_rewrite,
            } => run_url(&urls, &template, &args, no_rewrite),
            CliCommand::RemoteUrl { service, base_url } => {
                run_remote_url(&urls, &service, base_url)
            }
            CliCommand::OcsUrl {
                template,
                args,
                ocs_version,
            } => run_ocs_url(&urls, &template, &args, ocs_version),
            CliCommand::Avatar {
                user,
                size,
                guest,
                dark,
            } => run_avatar(&urls, &user, size, guest, dark),
            CliCommand::Completions { .. } | CliCommand::Man => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
