//! ludo-core: Two-dice distribution analyzer
//!
//! Rolls two dice many times, tallies every sum from 2 to 12 and compares
//! the result with the 36-outcome theoretical distribution.
//!
//! This crate contains all logic and writes reports into any
//! `std::io::Write`; the `ludo` binary only parses arguments and sets up
//! logging.

mod config;
mod consts;
mod error;
pub mod report;
mod sim;
pub mod stats;
mod tally;
pub mod theory;

pub use config::SimConfig;
pub use consts::*;
pub use error::SimError;
pub use sim::{RunOutcome, run, run_with};
pub use stats::{ComparisonRow, SumFrequency, Summary};
pub use tally::{SumCountTable, TrialCount, roll_pair, run_trials, run_trials_with_progress};
