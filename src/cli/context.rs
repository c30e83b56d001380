use std::path::{Path, PathBuf};

use crate::params::{dev_domain, EnvironmentTarget, Layout, ProvisioningParameters};

/// Shared state describing a single provisioning run.
///
/// Built once the repository fetch has resolved the checkout layout;
/// read-only for every later step.
pub struct ProvisionContext {
    params: ProvisioningParameters,
    target: EnvironmentTarget,
    dest: PathBuf,
    layout: Layout,
}

impl ProvisionContext {
    pub fn new(
        params: ProvisioningParameters,
        target: EnvironmentTarget,
        dest: PathBuf,
        layout: Layout,
    ) -> Self {
        Self { params, target, dest, layout }
    }

    pub fn params(&self) -> &ProvisioningParameters {
        &self.params
    }

    pub fn target(&self) -> &EnvironmentTarget {
        &self.target
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Local directory the application actually lives in.
    pub fn app_root(&self) -> PathBuf {
        self.layout.app_root(&self.dest)
    }

    /// Home-relative application root on the selected source server.
    pub fn remote_project_root(&self) -> String {
        self.target.remote_project_root(&self.params.project, self.layout)
    }

    /// Local development domain generated for this project.
    pub fn dev_domain(&self) -> String {
        dev_domain(&self.params.project, self.layout)
    }
}
