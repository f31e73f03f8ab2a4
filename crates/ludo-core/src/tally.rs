//! Trial accumulation
//!
//! Rolls two dice per trial and counts how often each sum comes up.

use std::num::NonZeroU64;
use std::time::Instant;

use ludo_rng::DieSource;
use tracing::debug;

use crate::consts::{MAX_SUM, MIN_SUM, NUM_SUMS};
use crate::error::SimError;

/// A validated, strictly positive number of trials.
///
/// Every percentage divides by this, so it can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrialCount(NonZeroU64);

impl TrialCount {
    pub fn new(trials: u64) -> Result<Self, SimError> {
        NonZeroU64::new(trials).map(Self).ok_or(SimError::NoTrials)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// `part` as a percentage of this many trials.
    pub fn percent_of(self, part: u64) -> f64 {
        part as f64 * 100.0 / self.get() as f64
    }
}

/// Occurrences of each sum 2..=12.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumCountTable {
    counts: [u64; NUM_SUMS],
}

impl SumCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one trial that produced `sum`.
    ///
    /// # Panics
    ///
    /// Panics if `sum` is outside 2..=12, which means a die source returned
    /// a face outside 1..=6.
    pub fn record(&mut self, sum: u8) {
        assert!(
            (MIN_SUM..=MAX_SUM).contains(&sum),
            "sum {sum} out of range for two dice"
        );
        self.counts[(sum - MIN_SUM) as usize] += 1;
    }

    /// Occurrences of `sum`; 0 for sums two dice cannot produce.
    pub fn count(&self, sum: u8) -> u64 {
        if (MIN_SUM..=MAX_SUM).contains(&sum) {
            self.counts[(sum - MIN_SUM) as usize]
        } else {
            0
        }
    }

    /// Total trials recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(sum, count)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        (MIN_SUM..=MAX_SUM).zip(self.counts.iter().copied())
    }

    /// Share of `trials` that produced `sum`, in percent.
    pub fn percent(&self, sum: u8, trials: TrialCount) -> f64 {
        trials.percent_of(self.count(sum))
    }
}

/// Roll two dice and return their sum.
pub fn roll_pair<R: DieSource>(rng: &mut R) -> u8 {
    let first = rng.roll_die();
    let second = rng.roll_die();
    first + second
}

/// Run `trials` two-dice trials and tally the sums.
pub fn run_trials<R: DieSource>(rng: &mut R, trials: TrialCount) -> SumCountTable {
    run_trials_with_progress(rng, trials, 0, |_| {})
}

/// Like [`run_trials`], calling `on_progress(completed)` after every
/// `interval` completed trials. An interval of 0 disables the callback.
pub fn run_trials_with_progress<R, F>(
    rng: &mut R,
    trials: TrialCount,
    interval: u64,
    mut on_progress: F,
) -> SumCountTable
where
    R: DieSource,
    F: FnMut(u64),
{
    let started = Instant::now();
    debug!(trials = trials.get(), interval, "starting accumulation");

    let mut table = SumCountTable::new();
    for done in 1..=trials.get() {
        table.record(roll_pair(rng));
        if interval != 0 && done % interval == 0 {
            on_progress(done);
        }
    }

    debug!(
        trials = trials.get(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "accumulation finished"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludo_rng::{ScriptedDice, SimRng};

    #[test]
    fn test_zero_trials_rejected() {
        assert!(matches!(TrialCount::new(0), Err(SimError::NoTrials)));
        assert_eq!(TrialCount::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_percent_of() {
        let trials = TrialCount::new(200).unwrap();
        assert_eq!(trials.percent_of(50), 25.0);
        assert_eq!(trials.percent_of(0), 0.0);
    }

    #[test]
    fn test_record_and_count() {
        let mut table = SumCountTable::new();
        table.record(7);
        table.record(7);
        table.record(12);
        assert_eq!(table.count(7), 2);
        assert_eq!(table.count(12), 1);
        assert_eq!(table.count(2), 0);
        assert_eq!(table.count(1), 0);
        assert_eq!(table.count(13), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_record_rejects_impossible_sum() {
        SumCountTable::new().record(13);
    }

    #[test]
    fn test_iter_is_ascending_and_complete() {
        let table = SumCountTable::new();
        let sums: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(sums, (2..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_single_snake_eyes() {
        let mut dice = ScriptedDice::from_pairs(&[(1, 1)]);
        let table = run_trials(&mut dice, TrialCount::new(1).unwrap());
        assert_eq!(table.count(2), 1);
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn test_counts_total_trials() {
        let mut rng = SimRng::new(42);
        let table = run_trials(&mut rng, TrialCount::new(10_000).unwrap());
        assert_eq!(table.total(), 10_000);
        assert!(table.iter().all(|(_, c)| c <= 10_000));
    }

    #[test]
    fn test_progress_every_interval() {
        let mut rng = SimRng::new(1);
        let mut seen = Vec::new();
        let table =
            run_trials_with_progress(&mut rng, TrialCount::new(25).unwrap(), 10, |d| seen.push(d));
        assert_eq!(seen, vec![10, 20]);
        assert_eq!(table.total(), 25);
    }

    #[test]
    fn test_progress_disabled() {
        let mut rng = SimRng::new(1);
        let mut calls = 0;
        run_trials_with_progress(&mut rng, TrialCount::new(100).unwrap(), 0, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_progress_does_not_change_counts() {
        let trials = TrialCount::new(5_000).unwrap();
        let plain = run_trials(&mut SimRng::new(9), trials);
        let observed = run_trials_with_progress(&mut SimRng::new(9), trials, 7, |_| {});
        assert_eq!(plain, observed);
    }
}
