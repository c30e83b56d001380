//! Repository fetch step: clone the project and detect the checkout layout.

use std::ffi::OsStr;
use std::path::Path;

use crate::exec;
use crate::params::{Layout, ProvisioningParameters};
use crate::progress::step_spinner;
use crate::steps::StepOutcome;

/// Clones the project repository into `dest` and probes the layout.
///
/// A failed clone is reported but does not stop the pipeline; later steps
/// fail individually when the checkout is missing. The layout probe runs
/// either way so the rest of the run has a resolved application root.
pub fn run(params: &ProvisioningParameters, dest: &Path) -> (StepOutcome, Layout) {
    let url = params.clone_url();
    log::debug!("Cloning '{url}' into '{}'", dest.display());

    let spinner = step_spinner("Cloning git repo...");
    let args = [OsStr::new("clone"), OsStr::new(url.as_str()), dest.as_os_str()];
    let result = exec::run_tool("git", args, None);
    spinner.finish_and_clear();

    let outcome = match result {
        Ok(output) if output.success => StepOutcome::Completed,
        Ok(output) => StepOutcome::failed(format!(
            "git clone failed: {}",
            output.stderr.trim()
        )),
        Err(e) => StepOutcome::failed(format!("failed to launch git: {e}")),
    };

    let layout = Layout::detect(dest);
    log::debug!("Detected {layout:?} layout at '{}'", dest.display());

    (outcome, layout)
}
