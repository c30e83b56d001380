use std::path::Path;

use crate::{
    cli::context::ProvisionContext,
    constants::{defaults, HOSTS_FILE},
    error::Result,
    ioutils::ensure_empty_dir,
    params::EnvironmentTarget,
    prompt::collect_parameters,
    steps::{self, report},
};

/// Orchestrates the complete provisioning pipeline.
///
/// Only the emptiness precondition is fatal; every step after it follows the
/// degraded-continue policy and reports its own outcome.
pub fn run() -> Result<()> {
    let dest = std::env::current_dir()?;

    // Enforced strictly before any question is asked or side effect happens.
    ensure_empty_dir(&dest)?;

    let dir_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(defaults::PROJECT)
        .to_string();
    let params = collect_parameters(&dir_name)?;
    let target = EnvironmentTarget::resolve(params.server);

    let (fetch_outcome, layout) = steps::fetch::run(&params, &dest);
    report("Cloning git repo", &fetch_outcome);

    let ctx = ProvisionContext::new(params, target, dest, layout);

    report("Generating local.xml file", &steps::local_config::run(&ctx));

    report("Downloading media folder", &steps::media::run(&ctx));

    let import_outcome = steps::database::run(&ctx);
    report("Creating and importing database", &import_outcome);
    if import_outcome.is_completed() {
        report("Updating base URLs", &steps::database::update_base_url(&ctx));
    }

    // Always eligible: skipping this silently breaks the generated local URL.
    report("Updating hosts file", &steps::hosts::run(&ctx, Path::new(HOSTS_FILE)));

    Ok(())
}
