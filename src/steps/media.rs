//! Media fetch step: one-way, non-deleting mirror of the remote media tree.

use std::ffi::OsStr;

use crate::cli::context::ProvisionContext;
use crate::exec;
use crate::progress::step_spinner;
use crate::steps::StepOutcome;

/// Mirrors the source environment's media directory into the local checkout.
///
/// Fixed policy: archive mode, never overwrite a locally existing file, and
/// never transfer any path containing `cache`. Files removed remotely are not
/// removed locally.
pub fn run(ctx: &ProvisionContext) -> StepOutcome {
    let remote_media = format!("{}/media", ctx.remote_project_root());
    let local_media = ctx.app_root().join("media");

    // Operator feedback only; the sync does not depend on it.
    let message = match remote_media_size(ctx.target().ssh_alias, &remote_media) {
        Some(size) => format!("Downloading media folder ({size})..."),
        None => "Downloading media folder...".to_string(),
    };

    let spinner = step_spinner(message);
    let source = format!("{}:{remote_media}/", ctx.target().ssh_alias);
    let mut args: Vec<&OsStr> =
        SYNC_FLAGS.iter().map(|flag| OsStr::new(*flag)).collect();
    args.push(OsStr::new(source.as_str()));
    args.push(local_media.as_os_str());
    let result = exec::run_tool("rsync", args, None);
    spinner.finish_and_clear();

    match result {
        Ok(output) if output.success => StepOutcome::Completed,
        Ok(output) => {
            StepOutcome::failed(format!("rsync failed: {}", output.stderr.trim()))
        }
        Err(e) => StepOutcome::failed(format!("failed to launch rsync: {e}")),
    }
}

/// The fixed rsync policy flags, ahead of the source and destination operands.
const SYNC_FLAGS: [&str; 3] = ["-az", "--ignore-existing", "--exclude=*cache*"];

/// Asks the remote host for a human-readable size of the media tree.
fn remote_media_size(ssh_alias: &str, remote_media: &str) -> Option<String> {
    let remote_command = format!("du -hs {remote_media} | cut -f1");
    match exec::run_tool("ssh", [ssh_alias, remote_command.as_str()], None) {
        Ok(output) if output.success => {
            let size = output.stdout.trim();
            (!size.is_empty()).then(|| size.to_string())
        }
        Ok(output) => {
            log::debug!("remote media size probe failed: {}", output.stderr.trim());
            None
        }
        Err(e) => {
            log::debug!("failed to launch ssh: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_policy_never_overwrites_and_skips_cache_paths() {
        assert!(SYNC_FLAGS.contains(&"--ignore-existing"));
        assert!(SYNC_FLAGS.contains(&"--exclude=*cache*"));
        assert!(SYNC_FLAGS.contains(&"-az"));
        // No --delete: the mirror is non-deleting.
        assert!(!SYNC_FLAGS.iter().any(|f| f.starts_with("--delete")));
    }
}
