//! Two-dice distribution analyzer
//!
//! Rolls two dice many times and prints how the simulated distribution of
//! their sum compares with the theoretical one.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use ludo_core::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIALS, SimConfig};

/// Monte Carlo simulation of two six-sided dice
#[derive(Parser, Debug)]
#[command(name = "ludo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of two-dice rolls to simulate
    #[arg(short = 'n', long = "trials", default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// Seed for a reproducible run (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print a progress line every this many rolls (0 disables)
    #[arg(long = "progress-every", default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: u64,

    /// Only print the reports
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            trials: self.trials,
            seed: self.seed,
            progress_interval: self.progress_every,
            quiet: self.quiet,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match ludo_core::run(&args.config(), &mut out) {
        Ok(outcome) => {
            if !args.quiet {
                eprintln!(
                    "Seed: {} (pass --seed {} to repeat this run)",
                    outcome.seed, outcome.seed
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "simulation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
