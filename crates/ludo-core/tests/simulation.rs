//! End-to-end checks of the accumulate-and-report pipeline.

use ludo_core::theory;
use ludo_core::{SimConfig, SimError, Summary, TrialCount, run_trials, run_with};
use ludo_rng::{ScriptedDice, SimRng};
use proptest::prelude::*;

/// Every ordered pair exactly once reproduces the ways table.
#[test]
fn test_all_pairs_match_theory_exactly() {
    let trials = TrialCount::new(36).unwrap();
    let table = run_trials(&mut ScriptedDice::all_pairs(), trials);

    for (sum, count) in table.iter() {
        assert_eq!(count, u64::from(theory::ways(sum)), "sum {sum}");
        assert_eq!(table.percent(sum, trials), theory::percent(sum));
    }

    let summary = Summary::new(&table, trials);
    assert_eq!(summary.most_common.sum, 7);
    assert_eq!(summary.least_common.sum, 2);
    assert_eq!(summary.mean, 7.0);
}

#[test]
fn test_all_pairs_report_has_zero_differences() {
    let config = SimConfig {
        trials: 36,
        quiet: true,
        ..SimConfig::default()
    };
    let mut out = Vec::new();
    let mut dice = ScriptedDice::all_pairs();
    run_with(&config, &mut dice, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let rows: Vec<&str> = text
        .lines()
        .filter(|l| l.matches('|').count() == 5 && !l.contains("Sum"))
        .collect();
    assert_eq!(rows.len(), 11);
    for row in rows {
        assert!(row.ends_with("+0.0000"), "row: {row}");
    }
}

#[test]
fn test_single_snake_eyes_scenario() {
    let trials = TrialCount::new(1).unwrap();
    let table = run_trials(&mut ScriptedDice::from_pairs(&[(1, 1)]), trials);
    assert_eq!(table.count(2), 1);
    assert!((3..=12).all(|s| table.count(s) == 0));

    let summary = Summary::new(&table, trials);
    assert_eq!(summary.most_common.sum, 2);
    assert_eq!(summary.least_common.sum, 2);
}

#[test]
fn test_zero_trials_rejected_before_output() {
    let config = SimConfig {
        trials: 0,
        ..SimConfig::default()
    };
    let mut out = Vec::new();
    let mut rng = SimRng::new(1);
    let err = run_with(&config, &mut rng, &mut out).unwrap_err();
    assert!(matches!(err, SimError::NoTrials));
    assert!(err.to_string().contains("positive integer"));
    assert!(out.is_empty());
}

/// A million trials land within one percentage point of theory.
#[test]
fn test_million_trials_converge() {
    let trials = TrialCount::new(1_000_000).unwrap();
    let table = run_trials(&mut SimRng::new(20240917), trials);
    assert_eq!(table.total(), 1_000_000);
    for sum in theory::sums() {
        let diff = table.percent(sum, trials) - theory::percent(sum);
        assert!(diff.abs() < 1.0, "sum {sum} off by {diff}");
    }
    let summary = Summary::new(&table, trials);
    assert_eq!(summary.most_common.sum, 7);
    assert!((summary.mean - 7.0).abs() < 0.05);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Counts always add up to the number of trials, each within [0, N].
    #[test]
    fn counts_sum_to_trials(seed in any::<u64>(), n in 1u64..5_000) {
        let table = run_trials(&mut SimRng::new(seed), TrialCount::new(n).unwrap());
        prop_assert_eq!(table.total(), n);
        for (_, count) in table.iter() {
            prop_assert!(count <= n);
        }
    }

    /// Scripted pairs give exactly the tally you would count by hand.
    #[test]
    fn scripted_pairs_tally_exactly(pairs in prop::collection::vec((1u8..=6, 1u8..=6), 1..100)) {
        let n = pairs.len() as u64;
        let trials = TrialCount::new(n).unwrap();
        let table = run_trials(&mut ScriptedDice::from_pairs(&pairs), trials);
        for sum in theory::sums() {
            let expected = pairs.iter().filter(|(a, b)| a + b == sum).count() as u64;
            prop_assert_eq!(table.count(sum), expected);
        }
    }

    /// The mode is never rarer than any other sum, and ties go to the smaller sum.
    #[test]
    fn mode_is_first_maximum(seed in any::<u64>(), n in 1u64..2_000) {
        let trials = TrialCount::new(n).unwrap();
        let table = run_trials(&mut SimRng::new(seed), trials);
        let summary = Summary::new(&table, trials);
        let mode = summary.most_common;
        for (sum, count) in table.iter() {
            prop_assert!(count <= mode.count);
            if count == mode.count {
                prop_assert!(sum >= mode.sum);
            }
        }
    }
}
