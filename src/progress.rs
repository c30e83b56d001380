//! Spinner shown while a step's external operation is outstanding.
//!
//! Purely cosmetic; callers must clear it before logging the step outcome.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

pub fn step_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} {msg}").unwrap(),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}
