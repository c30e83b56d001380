//! Invocation of the external tools the pipeline orchestrates.
//!
//! Every collaborator (git, ssh, rsync, mysql, magedbm, n98-magerun) is a
//! black box: one invocation, captured output, no retries.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Captured result of one external tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs an external tool to completion and captures its output.
///
/// Stdin is closed so a tool that unexpectedly prompts fails instead of
/// hanging the pipeline.
pub fn run_tool<I, S>(
    program: &str,
    args: I,
    cwd: Option<&Path>,
) -> std::io::Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    command.output().map(ToolOutput::from)
}
