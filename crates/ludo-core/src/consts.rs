//! Core constants for the two-dice analyzer

/// Smallest and largest possible sum of two dice
pub const MIN_SUM: u8 = 2;
pub const MAX_SUM: u8 = 12;

/// Number of distinct sums (2 through 12)
pub const NUM_SUMS: usize = (MAX_SUM - MIN_SUM + 1) as usize;

/// Equally likely ordered outcomes of two six-sided dice
pub const OUTCOMES: u32 = 36;

/// Run defaults
pub const DEFAULT_TRIALS: u64 = 1_000_000;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Width of the `=` banners framing each report
pub const BANNER_WIDTH: usize = 78;

/// Combinations listed per sum in the explanation table before eliding
pub const MAX_LISTED_COMBINATIONS: usize = 5;
