//! Local config generation step: produce `app/etc/local.xml` and splice in
//! the table prefix used on the source environment.

use std::path::Path;

use regex::Regex;

use crate::cli::context::ProvisionContext;
use crate::constants::{
    EMPTY_CDATA_MARKER, EMPTY_TABLE_PREFIX_NODE, LOCAL_CONFIG_RELATIVE_PATH,
    TABLE_PREFIX_PATTERN,
};
use crate::progress::step_spinner;
use crate::steps::StepOutcome;
use crate::{exec, ioutils};

/// Generates the local configuration file and patches its table prefix.
///
/// Every external failure in this step is logged and swallowed: a partially
/// generated file is still more useful to the operator than none, so the step
/// always reports completion.
pub fn run(ctx: &ProvisionContext) -> StepOutcome {
    let app_root = ctx.app_root();
    let local_config = app_root.join(LOCAL_CONFIG_RELATIVE_PATH);

    let spinner = step_spinner("Generating local.xml file...");

    if let Err(e) = ioutils::remove_file_if_exists(&local_config) {
        log::warn!("Could not remove stale '{}': {e}", local_config.display());
    }

    generate_local_config(ctx, &app_root);

    let prefix = fetch_remote_table_prefix(ctx);

    if let Err(e) = splice_table_prefix(&local_config, &prefix) {
        log::warn!(
            "Could not splice table prefix into '{}': {e}",
            local_config.display()
        );
    }

    spinner.finish_and_clear();
    StepOutcome::Completed
}

/// Runs the external configuration generator at the application root.
fn generate_local_config(ctx: &ProvisionContext, app_root: &Path) {
    let params = ctx.params();
    let result = exec::run_tool(
        "n98-magerun",
        [
            "local-config:generate",
            params.db_host.as_str(),
            params.db_user.as_str(),
            params.db_password.as_str(),
            params.db_name.as_str(),
            "files",
            "admin",
        ],
        Some(app_root),
    );

    match result {
        Ok(output) if output.success => {}
        Ok(output) => log::warn!(
            "local-config:generate exited with an error: {}",
            output.stderr.trim()
        ),
        Err(e) => log::warn!("failed to launch n98-magerun: {e}"),
    }
}

/// Reads the source environment's configuration file over SSH and extracts
/// its table prefix. Any failure falls back to the empty marker.
fn fetch_remote_table_prefix(ctx: &ProvisionContext) -> String {
    let remote_config =
        format!("{}/{LOCAL_CONFIG_RELATIVE_PATH}", ctx.remote_project_root());
    let remote_command = format!("cat {remote_config}");

    match exec::run_tool("ssh", [ctx.target().ssh_alias, remote_command.as_str()], None)
    {
        Ok(output) if output.success => extract_table_prefix(&output.stdout),
        Ok(output) => {
            log::warn!(
                "could not read '{remote_config}' on {}: {}",
                ctx.target().ssh_alias,
                output.stderr.trim()
            );
            EMPTY_CDATA_MARKER.to_string()
        }
        Err(e) => {
            log::warn!("failed to launch ssh: {e}");
            EMPTY_CDATA_MARKER.to_string()
        }
    }
}

/// Pulls the table prefix out of a configuration document, substituting the
/// empty marker when the tag is absent.
fn extract_table_prefix(remote_xml: &str) -> String {
    match Regex::new(TABLE_PREFIX_PATTERN) {
        Ok(re) => re
            .captures(remote_xml)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMPTY_CDATA_MARKER.to_string()),
        Err(err) => {
            log::warn!("Invalid table prefix pattern: {err}");
            EMPTY_CDATA_MARKER.to_string()
        }
    }
}

/// Replaces the generator's empty prefix placeholder with the extracted value
/// and rewrites the file in place.
fn splice_table_prefix(local_config: &Path, prefix: &str) -> std::io::Result<()> {
    let data = std::fs::read_to_string(local_config)?;
    let patched = data.replacen(
        EMPTY_TABLE_PREFIX_NODE,
        &format!("<table_prefix>{prefix}</table_prefix>"),
        1,
    );
    std::fs::write(local_config, patched)
}
