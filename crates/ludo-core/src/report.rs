//! Text reports
//!
//! Three fixed-width reports are written, in this order:
//! 1. the theoretical explanation (static, independent of the run),
//! 2. the simulated vs theoretical comparison table,
//! 3. summary statistics.
//!
//! Every writer takes any [`Write`] so the binary can hand in a buffered
//! stdout and tests can hand in a `Vec<u8>`.

use std::io::{self, Write};

use crate::consts::{BANNER_WIDTH, MAX_LISTED_COMBINATIONS, OUTCOMES};
use crate::stats::{Summary, compare};
use crate::tally::{SumCountTable, TrialCount};
use crate::theory;

fn rule<W: Write>(w: &mut W, ch: char) -> io::Result<()> {
    writeln!(w, "{}", ch.to_string().repeat(BANNER_WIDTH))
}

fn titled_banner<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w)?;
    rule(w, '=')?;
    writeln!(w, "{:^width$}", title, width = BANNER_WIDTH)?;
    rule(w, '=')
}

/// Lists up to five pairs, eliding the rest.
fn combinations_cell(sum: u8) -> String {
    let pairs = theory::combinations(sum);
    let mut cell = pairs
        .iter()
        .take(MAX_LISTED_COMBINATIONS)
        .map(|(a, b)| format!("({a},{b})"))
        .collect::<Vec<_>>()
        .join(", ");
    if pairs.len() > MAX_LISTED_COMBINATIONS {
        cell.push_str(", ...");
    }
    cell
}

pub fn write_preamble<W: Write>(w: &mut W, trials: TrialCount) -> io::Result<()> {
    writeln!(w, "Starting Monte Carlo Simulation...")?;
    writeln!(w, "Simulating {} rolls of two dice...", trials.get())
}

pub fn write_progress<W: Write>(w: &mut W, completed: u64) -> io::Result<()> {
    writeln!(w, "Progress: {completed} rolls completed...")
}

pub fn write_completion<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Simulation complete!")
}

/// Combinatorics behind the distribution. Does not depend on the run.
pub fn write_explanation<W: Write>(w: &mut W) -> io::Result<()> {
    titled_banner(w, "THEORETICAL PROBABILITY EXPLANATION")?;
    writeln!(
        w,
        "When rolling two 6-sided dice, there are 6 x 6 = {OUTCOMES} possible outcomes."
    )?;
    writeln!(w, "Each outcome is equally likely if the dice are fair.")?;
    writeln!(w)?;
    writeln!(w, "Sum | {:<38} | Ways | Probability", "Combinations")?;
    writeln!(w, "----+{}+------+-----------------", "-".repeat(40))?;
    for sum in theory::sums() {
        let ways = theory::ways(sum);
        writeln!(
            w,
            "{:>3} | {:<38} | {:>3}  | {:>2}/{OUTCOMES} = {:.4}%",
            sum,
            combinations_cell(sum),
            ways,
            ways,
            theory::percent(sum)
        )?;
    }
    rule(w, '=')?;
    writeln!(
        w,
        "KEY INSIGHT: Sum of 7 is most common (6 ways), while 2 and 12 are rarest"
    )?;
    writeln!(
        w,
        "             (only 1 way each). The distribution is symmetric around 7."
    )?;
    rule(w, '=')
}

/// Per-sum simulated share against the theoretical one.
pub fn write_comparison<W: Write>(
    w: &mut W,
    table: &SumCountTable,
    trials: TrialCount,
) -> io::Result<()> {
    titled_banner(w, "PROBABILITY DISTRIBUTION REPORT")?;
    writeln!(w, "Total Simulations: {}", trials.get())?;
    rule(w, '-')?;
    writeln!(
        w,
        "  Sum  |  Count   | Simulated % | Theoretical % |  Ways  | Difference"
    )?;
    rule(w, '-')?;
    for row in compare(table, trials) {
        writeln!(
            w,
            "  {:>2}   | {:>8} |   {:>7.4}   |    {:>7.4}    |   {:>2}   |  {:>+8.4}",
            row.sum,
            row.count,
            row.simulated_pct,
            row.theoretical_pct,
            row.ways,
            row.difference()
        )?;
    }
    rule(w, '-')?;
    writeln!(
        w,
        "Note: Theoretical probabilities are based on {OUTCOMES} equally likely outcomes"
    )?;
    writeln!(w, "      when rolling two fair 6-sided dice.")?;
    rule(w, '=')
}

pub fn write_summary<W: Write>(w: &mut W, summary: &Summary) -> io::Result<()> {
    titled_banner(w, "STATISTICAL ANALYSIS")?;
    let most = &summary.most_common;
    let least = &summary.least_common;
    writeln!(
        w,
        "Most common sum: {} (appeared {} times, {:.4}%)",
        most.sum, most.count, most.pct
    )?;
    writeln!(
        w,
        "Least common sum: {} (appeared {} times, {:.4}%)",
        least.sum, least.count, least.pct
    )?;
    writeln!(
        w,
        "Average sum per roll: {:.4} (Theoretical: {:.1})",
        summary.mean, summary.theoretical_mean
    )?;
    if !summary.unobserved.is_empty() {
        let sums: Vec<String> = summary.unobserved.iter().map(u8::to_string).collect();
        writeln!(w, "Sums never rolled: {}", sums.join(", "))?;
    }
    let dev = &summary.largest_deviation;
    writeln!(
        w,
        "Largest deviation: sum {} ({:+.4} percentage points)",
        dev.sum,
        dev.difference()
    )?;
    rule(w, '=')?;
    writeln!(w)?;
    writeln!(
        w,
        "CONCLUSION: This simulation demonstrates the Law of Large Numbers."
    )?;
    writeln!(
        w,
        "With {} trials, the simulated probabilities converge towards",
        summary.trials.get()
    )?;
    writeln!(w, "the theoretical values as the trial count grows.")?;
    rule(w, '=')
}

/// All three reports for a finished run.
pub fn write_report<W: Write>(
    w: &mut W,
    table: &SumCountTable,
    trials: TrialCount,
) -> io::Result<()> {
    write_explanation(w)?;
    write_comparison(w, table, trials)?;
    write_summary(w, &Summary::new(table, trials))
}
