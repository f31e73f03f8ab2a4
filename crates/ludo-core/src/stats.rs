//! Simulated vs theoretical statistics over a finished tally.

use crate::tally::{SumCountTable, TrialCount};
use crate::theory;

/// One line of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub sum: u8,
    pub count: u64,
    pub simulated_pct: f64,
    pub theoretical_pct: f64,
    pub ways: u32,
}

impl ComparisonRow {
    /// Simulated minus theoretical, in percentage points.
    pub fn difference(&self) -> f64 {
        self.simulated_pct - self.theoretical_pct
    }
}

/// Comparison rows for every sum, ascending.
pub fn compare(table: &SumCountTable, trials: TrialCount) -> Vec<ComparisonRow> {
    table
        .iter()
        .map(|(sum, count)| ComparisonRow {
            sum,
            count,
            simulated_pct: trials.percent_of(count),
            theoretical_pct: theory::percent(sum),
            ways: theory::ways(sum),
        })
        .collect()
}

/// A sum together with how often it came up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumFrequency {
    pub sum: u8,
    pub count: u64,
    pub pct: f64,
}

/// Descriptive summary of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trials: TrialCount,
    pub most_common: SumFrequency,
    /// Rarest sum among those rolled at least once.
    pub least_common: SumFrequency,
    /// Sums that never came up, ascending.
    pub unobserved: Vec<u8>,
    pub mean: f64,
    pub theoretical_mean: f64,
    /// The row whose simulated share strays furthest from theory.
    pub largest_deviation: ComparisonRow,
}

impl Summary {
    pub fn new(table: &SumCountTable, trials: TrialCount) -> Self {
        let rows = compare(table, trials);

        // Strict comparisons keep the first (smallest) sum on ties.
        let mut most = rows[0];
        let mut least: Option<ComparisonRow> = None;
        let mut deviation = rows[0];
        for row in &rows {
            if row.count > most.count {
                most = *row;
            }
            if row.count > 0 && least.is_none_or(|l| row.count < l.count) {
                least = Some(*row);
            }
            if row.difference().abs() > deviation.difference().abs() {
                deviation = *row;
            }
        }
        // At least one trial ran, so the mode was observed.
        let least = least.unwrap_or(most);

        let weighted: u64 = table.iter().map(|(s, c)| u64::from(s) * c).sum();

        Self {
            trials,
            most_common: frequency(&most),
            least_common: frequency(&least),
            unobserved: rows
                .iter()
                .filter(|r| r.count == 0)
                .map(|r| r.sum)
                .collect(),
            mean: weighted as f64 / trials.get() as f64,
            theoretical_mean: theory::theoretical_mean(),
            largest_deviation: deviation,
        }
    }
}

fn frequency(row: &ComparisonRow) -> SumFrequency {
    SumFrequency {
        sum: row.sum,
        count: row.count,
        pct: row.simulated_pct,
    }
}
