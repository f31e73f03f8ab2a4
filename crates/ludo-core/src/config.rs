//! Run configuration

use crate::consts::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIALS};
use crate::error::SimError;
use crate::tally::TrialCount;

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of two-dice trials. Must be positive.
    pub trials: u64,
    /// Fixed seed for a reproducible run; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Print a progress line after this many trials (0 disables).
    pub progress_interval: u64,
    /// Skip the preamble and progress lines.
    pub quiet: bool,
}

impl SimConfig {
    /// Validated trial count.
    pub fn trial_count(&self) -> Result<TrialCount, SimError> {
        TrialCount::new(self.trials)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            quiet: false,
        }
    }
}
