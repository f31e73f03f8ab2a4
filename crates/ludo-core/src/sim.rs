//! The full pipeline: validate, roll, tally, report.

use std::io::Write;

use ludo_rng::{DieSource, SimRng};
use tracing::info;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::report;
use crate::tally::{SumCountTable, run_trials_with_progress};

/// What a finished run produced, besides its report.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Seed the [`SimRng`] was built from; rerun with it to reproduce.
    pub seed: u64,
    pub table: SumCountTable,
}

/// Run a simulation with a [`SimRng`] seeded from `config` (or entropy) and
/// write every report to `out`.
pub fn run<W: Write>(config: &SimConfig, out: &mut W) -> Result<RunOutcome, SimError> {
    // Validate before seeding so a bad config never touches the generator.
    config.trial_count()?;

    let mut rng = match config.seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    info!(
        seed = rng.seed(),
        fixed = config.seed.is_some(),
        "seeded generator"
    );

    let table = run_with(config, &mut rng, out)?;
    Ok(RunOutcome {
        seed: rng.seed(),
        table,
    })
}

/// Run a simulation drawing dice from `rng`.
pub fn run_with<R, W>(
    config: &SimConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<SumCountTable, SimError>
where
    R: DieSource,
    W: Write,
{
    let trials = config.trial_count()?;
    info!(trials = trials.get(), "running simulation");

    let interval = if config.quiet {
        0
    } else {
        config.progress_interval
    };
    if !config.quiet {
        report::write_preamble(out, trials)?;
    }

    let mut progress_err = None;
    let table = run_trials_with_progress(rng, trials, interval, |done| {
        if progress_err.is_none() {
            if let Err(e) = report::write_progress(out, done) {
                progress_err = Some(e);
            }
        }
    });
    if let Some(e) = progress_err {
        return Err(e.into());
    }

    if !config.quiet {
        report::write_completion(out)?;
    }
    report::write_report(out, &table, trials)?;
    out.flush()?;
    Ok(table)
}
