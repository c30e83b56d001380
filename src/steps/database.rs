//! Database provisioning step: create the database, import the latest
//! snapshot and point the store at the local development URL.

use crate::cli::context::ProvisionContext;
use crate::constants::{DB_CHARSET, DB_COLLATION, IMPORT_FINISHED_MARKER};
use crate::exec;
use crate::progress::step_spinner;
use crate::steps::StepOutcome;

/// Creates the database (idempotently) and imports the latest snapshot.
///
/// Import success is determined by scanning magedbm's output for its
/// completion marker, not by its exit status; the exit status only reaches
/// the log. An import without the marker means the database exists but holds
/// no data, which the operator must resolve by hand.
pub fn run(ctx: &ProvisionContext) -> StepOutcome {
    let spinner = step_spinner("Creating and importing database...");

    create_database(ctx);

    let import = exec::run_tool(
        "magedbm",
        ["get", ctx.params().project.as_str(), "-f"],
        Some(&ctx.app_root()),
    );

    spinner.finish_and_clear();

    let imported = match import {
        Ok(output) => {
            if !output.success {
                log::warn!("magedbm exited with an error: {}", output.stderr.trim());
            }
            import_finished(&output.stdout)
        }
        Err(e) => {
            log::warn!("failed to launch magedbm: {e}");
            false
        }
    };

    if imported {
        StepOutcome::Completed
    } else {
        StepOutcome::manual(
            "database created but no import file found, please import manually",
        )
    }
}

/// Points the store's base URL at the generated local development domain.
///
/// Only eligible after a confirmed import; failure means the operator updates
/// the URL manually.
pub fn update_base_url(ctx: &ProvisionContext) -> StepOutcome {
    let url = format!("http://{}/", ctx.dev_domain());

    let spinner = step_spinner("Updating base URLs...");
    let result = exec::run_tool(
        "n98-magerun",
        ["sys:store:config:base-url:set", "-b", url.as_str()],
        Some(&ctx.app_root()),
    );
    spinner.finish_and_clear();

    match result {
        Ok(output) if output.success => StepOutcome::Completed,
        Ok(output) => {
            log::debug!("base-url:set stderr: {}", output.stderr.trim());
            StepOutcome::failed("could not update base URLs, please update manually")
        }
        Err(e) => {
            log::debug!("failed to launch n98-magerun: {e}");
            StepOutcome::failed("could not update base URLs, please update manually")
        }
    }
}

/// Issues the idempotent create statement through the database client.
/// Logged either way; the import is attempted regardless.
fn create_database(ctx: &ProvisionContext) {
    let params = ctx.params();
    let statement = create_database_statement(&params.db_name);
    let password_flag = format!("-p{}", params.db_password);

    let result = exec::run_tool(
        "mysql",
        [
            "-h",
            params.db_host.as_str(),
            "-u",
            params.db_user.as_str(),
            password_flag.as_str(),
            "-e",
            statement.as_str(),
        ],
        None,
    );

    match result {
        Ok(output) if output.success => {
            log::debug!("database '{}' is present", params.db_name)
        }
        Ok(output) => log::warn!("create database failed: {}", output.stderr.trim()),
        Err(e) => log::warn!("failed to launch mysql: {e}"),
    }
}

fn create_database_statement(db_name: &str) -> String {
    format!(
        "CREATE DATABASE IF NOT EXISTS {db_name} CHARACTER SET {DB_CHARSET} COLLATE {DB_COLLATION}"
    )
}

/// magedbm reports success in its output text, not its exit status.
fn import_finished(stdout: &str) -> bool {
    stdout.contains(IMPORT_FINISHED_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_statement_is_idempotent_with_fixed_charset() {
        assert_eq!(
            create_database_statement("mg_acme"),
            "CREATE DATABASE IF NOT EXISTS mg_acme CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci"
        );
    }

    #[test]
    fn import_is_confirmed_only_by_the_completion_marker() {
        assert!(import_finished("Downloaded backup\nFinished import\n"));
        assert!(!import_finished("Downloaded backup\nerror: no backup found\n"));
        assert!(!import_finished(""));
    }
}
