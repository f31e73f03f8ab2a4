//! Simulation errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("trial count must be a positive integer, got 0")]
    NoTrials,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
