//! `ncurl url`, `ncurl remote-url`, `ncurl ocs-url`.

use anyhow::Result;
use ncurl_core::{HostConfigProvider, OcsVersion, Params, UrlGenerator, UrlOptions};

use crate::cli::TemplateArgs;

/// Options and parameters from the shared template flags.
pub(crate) fn template_inputs(args: &TemplateArgs) -> (Params, UrlOptions) {
    let params: Params = args.params.iter().cloned().collect();
    let mut options = UrlOptions::default().with_escape(!args.no_escape);
    if let Some(base) = &args.base_url {
        options = options.with_base_url(base.as_str());
    }
    (params, options)
}

pub fn run_url<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    template: &str,
    args: &TemplateArgs,
    no_rewrite: bool,
) -> Result<()> {
    let (params, options) = template_inputs(args);
    let options = options.with_no_rewrite(no_rewrite);
    println!("{}", urls.generate_url(template, &params, &options));
    Ok(())
}

pub fn run_remote_url<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    service: &str,
    base_url: Option<String>,
) -> Result<()> {
    let options = UrlOptions {
        base_url,
        ..UrlOptions::default()
    };
    println!("{}", urls.generate_remote_url(service, &options));
    Ok(())
}

pub fn run_ocs_url<P: HostConfigProvider>(
    urls: &UrlGenerator<P>,
    template: &str,
    args: &TemplateArgs,
    ocs_version: i64,
) -> Result<()> {
    let (params, options) = template_inputs(args);
    let options = options.with_ocs_version(OcsVersion::from_number(ocs_version));
    println!("{}", urls.generate_ocs_url(template, &params, &options));
    Ok(())
}
