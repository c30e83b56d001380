//! Interactive collection of the provisioning parameters.
//!
//! One fixed, ordered question set. Answers are accepted as given; validating
//! them is the operator's responsibility, not the tool's.

use dialoguer::{Input, Select};

use crate::constants::defaults;
use crate::error::Result;
use crate::params::{ProvisioningParameters, SourceServer};

/// Asks the fixed question set and returns the collected answers.
///
/// `dir_name` seeds the project-name default with the current directory name.
pub fn collect_parameters(dir_name: &str) -> Result<ProvisioningParameters> {
    let project: String = Input::new()
        .with_prompt("Project name (repository under bitbucket.org/medialounge_repo)")
        .default(dir_name.to_string())
        .interact_text()?;

    let db_host: String = Input::new()
        .with_prompt("Database host")
        .default(defaults::DB_HOST.to_string())
        .interact_text()?;

    let db_name: String = Input::new()
        .with_prompt("Database name")
        .default(format!("{}{project}", defaults::DB_NAME_PREFIX))
        .interact_text()?;

    let db_user: String = Input::new()
        .with_prompt("Database user")
        .default(defaults::DB_USER.to_string())
        .interact_text()?;

    let db_password: String = Input::new()
        .with_prompt("Database password")
        .default(defaults::DB_PASSWORD.to_string())
        .interact_text()?;

    let selection = Select::new()
        .with_prompt("Source server")
        .items(&SourceServer::ALL)
        .default(0)
        .interact()?;
    let server = SourceServer::ALL[selection];

    Ok(ProvisioningParameters { project, db_host, db_name, db_user, db_password, server })
}
