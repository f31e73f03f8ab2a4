//! Theoretical distribution of the sum of two fair dice.
//!
//! Of the 36 equally likely ordered outcomes, `ways(s)` produce the sum `s`.

use ludo_rng::DIE_FACES;

use crate::consts::{MAX_SUM, MIN_SUM, NUM_SUMS, OUTCOMES};

/// Ordered (die1, die2) pairs per sum, indexed from sum 2.
pub const WAYS: [u32; NUM_SUMS] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Every possible sum in ascending order.
pub fn sums() -> impl Iterator<Item = u8> {
    MIN_SUM..=MAX_SUM
}

/// Number of ordered pairs summing to `sum`; 0 outside 2..=12.
pub fn ways(sum: u8) -> u32 {
    if (MIN_SUM..=MAX_SUM).contains(&sum) {
        WAYS[(sum - MIN_SUM) as usize]
    } else {
        0
    }
}

/// Probability of rolling `sum`, as a fraction in [0, 1].
pub fn probability(sum: u8) -> f64 {
    f64::from(ways(sum)) / f64::from(OUTCOMES)
}

/// Probability of rolling `sum`, in percent.
pub fn percent(sum: u8) -> f64 {
    f64::from(ways(sum)) * 100.0 / f64::from(OUTCOMES)
}

/// The ordered pairs producing `sum`, ascending by the first die.
pub fn combinations(sum: u8) -> Vec<(u8, u8)> {
    (1..=DIE_FACES)
        .filter_map(|a| {
            let b = sum.checked_sub(a)?;
            (1..=DIE_FACES).contains(&b).then_some((a, b))
        })
        .collect()
}

/// Expected sum of two fair dice (7.0).
pub fn theoretical_mean() -> f64 {
    let weighted: u32 = sums().map(|s| u32::from(s) * ways(s)).sum();
    f64::from(weighted) / f64::from(OUTCOMES)
}
