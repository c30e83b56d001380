//! The ordered provisioning pipeline.
//!
//! Steps run strictly sequentially and never abort the run: failures are
//! carried as data so later steps still get their chance and the operator can
//! finish whatever was left by hand.

pub mod database;
pub mod fetch;
pub mod hosts;
pub mod local_config;
pub mod media;

/// How a single pipeline step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    /// The step failed; the pipeline continues with best-effort assumptions.
    Failed { reason: String },
    /// The step left state the operator must finish manually.
    ManualFollowUp { reason: String },
}

impl StepOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        StepOutcome::Failed { reason: reason.into() }
    }

    pub fn manual(reason: impl Into<String>) -> Self {
        StepOutcome::ManualFollowUp { reason: reason.into() }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}

/// Logs a step's outcome. Callers must have cleared the step's spinner first.
pub fn report(step: &str, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Completed => println!("✔ {step}"),
        StepOutcome::Failed { reason } => log::error!("{step}: {reason}"),
        StepOutcome::ManualFollowUp { reason } => log::error!("{step}: {reason}"),
    }
}
