//! Host registration step: map the database host to the generated dev domain.

use std::path::Path;

use crate::cli::context::ProvisionContext;
use crate::hostsfile;
use crate::progress::step_spinner;
use crate::steps::StepOutcome;

/// Registers the local development domain in the hosts file at `hosts_path`.
///
/// Runs at the end of every pipeline regardless of earlier outcomes; a
/// missing entry would silently break the generated local URL.
pub fn run(ctx: &ProvisionContext, hosts_path: &Path) -> StepOutcome {
    let domain = ctx.dev_domain();

    let spinner = step_spinner("Updating hosts file...");
    let result = hostsfile::register(hosts_path, &ctx.params().db_host, &domain);
    spinner.finish_and_clear();

    match result {
        Ok(()) => StepOutcome::Completed,
        Err(e) => StepOutcome::failed(format!(
            "could not update '{}': {e}",
            hosts_path.display()
        )),
    }
}
