//! The immutable parameter set collected at the start of a run, and the
//! values resolved from it: the source-environment target, the checkout
//! layout and the generated development domain.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEV_DOMAIN_SUFFIX, MAIN_QUALIFIER, NESTED_APP_DIR, REPO_URL_PREFIX, REPO_URL_SUFFIX,
};

/// Named source environments a project can be provisioned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceServer {
    Demo,
    Demo2,
}

impl SourceServer {
    /// Order matters: this is the order the selection prompt lists them in.
    pub const ALL: [SourceServer; 2] = [SourceServer::Demo, SourceServer::Demo2];
}

impl Display for SourceServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceServer::Demo => "ML Demo",
            SourceServer::Demo2 => "ML Demo 2",
        };
        write!(f, "{s}")
    }
}

/// Answers collected once by the interactive prompts; read-only for the
/// remainder of the run.
#[derive(Debug, Clone)]
pub struct ProvisioningParameters {
    pub project: String,
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub server: SourceServer,
}

impl ProvisioningParameters {
    /// Remote URL the project repository is cloned from.
    pub fn clone_url(&self) -> String {
        format!("{REPO_URL_PREFIX}{}{REPO_URL_SUFFIX}", self.project)
    }
}

/// Remote-shell alias and path-prefix convention of a source environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentTarget {
    pub ssh_alias: &'static str,
    pub path_prefix: &'static str,
}

impl EnvironmentTarget {
    pub fn resolve(server: SourceServer) -> Self {
        match server {
            SourceServer::Demo => Self { ssh_alias: "mldemo", path_prefix: "" },
            SourceServer::Demo2 => {
                Self { ssh_alias: "mldemo2", path_prefix: "/httpdocs" }
            }
        }
    }

    /// Home-relative path of the project's application root on the remote
    /// host, following the same subfolder convention the clone uses locally.
    pub fn remote_project_root(&self, project: &str, layout: Layout) -> String {
        let subdir = match layout {
            Layout::Root => "",
            Layout::Nested => "/httpdocs",
        };
        format!("~{}/projects/{project}{subdir}", self.path_prefix)
    }
}

/// Where the application root actually lives inside the clone destination.
///
/// Some source repositories wrap the application in a container folder and
/// some do not; both layouts are supported transparently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Application code sits directly at the destination root.
    Root,
    /// Application code is wrapped in an `httpdocs/` container folder.
    Nested,
}

impl Layout {
    /// Probes a freshly cloned destination for the container folder.
    pub fn detect(dest: &Path) -> Self {
        if dest.join(NESTED_APP_DIR).is_dir() {
            Layout::Nested
        } else {
            Layout::Root
        }
    }

    /// Resolves the local application root for this layout.
    pub fn app_root(&self, dest: &Path) -> PathBuf {
        match self {
            Layout::Root => dest.to_path_buf(),
            Layout::Nested => dest.join(NESTED_APP_DIR),
        }
    }
}

/// Local development domain generated for a project.
///
/// The nested layout gets the extra `main` label so the primary store of a
/// multi-site checkout resolves separately.
pub fn dev_domain(project: &str, layout: Layout) -> String {
    match layout {
        Layout::Root => format!("{project}{DEV_DOMAIN_SUFFIX}"),
        Layout::Nested => format!("{project}{DEV_DOMAIN_SUFFIX}.{MAIN_QUALIFIER}"),
    }
}
