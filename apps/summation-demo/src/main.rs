use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use summation::{Strategy, parse_input};
use tracing_subscriber::EnvFilter;

/// Smallest and largest n picked when `--n` is omitted.
const RANDOM_RANGE: std::ops::RangeInclusive<i64> = 1..=1000;

/// Summation demo - sums 1..n iteratively, by formula and recursively
#[derive(Parser)]
#[command(name = "summation-demo")]
#[command(about = "Summation demo - sums 1..n iteratively, by formula and recursively")]
#[command(version)]
struct Cli {
    /// Upper bound n; a random value in [1, 1000] when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    n: Option<String>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();
    match run(cli.n.as_deref(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = stdout.flush();
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Prints one line per variant, stopping at the first failure.
fn run(raw: Option<&str>, out: &mut impl Write) -> Result<()> {
    let n = match raw {
        Some(raw) => parse_input(raw)?,
        None => rand::rng().random_range(RANDOM_RANGE),
    };
    tracing::info!(n, "summing");

    for strategy in Strategy::ALL {
        let sum = strategy.apply(n)?;
        let label = format!("({})", strategy.name());
        writeln!(out, "Sum of 1 to {n} {label:<11}: {sum}")?;
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn output_for(raw: Option<&str>) -> (Result<()>, String) {
        let mut buf = Vec::new();
        let result = run(raw, &mut buf);
        (result, String::from_utf8_lossy(&buf).into_owned())
    }

    #[test]
    fn prints_all_three_variants() {
        let (result, out) = output_for(Some("100"));
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Sum of 1 to 100 (Iterative): 5050\n\
             Sum of 1 to 100 (Formula)  : 5050\n\
             Sum of 1 to 100 (Recursive): 5050\n"
        );
    }

    #[test]
    fn random_n_stays_in_range() {
        let (result, out) = output_for(None);
        assert!(result.is_ok());
        let n: i64 = out
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("Sum of 1 to "))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap_or_default();
        assert!(RANDOM_RANGE.contains(&n), "n = {n}");
    }

    #[test]
    fn invalid_input_prints_nothing() {
        for raw in ["0", "-5", "3.5", "abc"] {
            let (result, out) = output_for(Some(raw));
            let err = result.err().map(|e| e.to_string());
            assert_eq!(err.as_deref(), Some("n must be a positive integer"), "{raw}");
            assert!(out.is_empty(), "{raw}");
        }
    }

    #[test]
    fn recursion_limit_stops_after_the_first_two_lines() {
        let (result, out) = output_for(Some("20000"));
        assert!(result.is_err());
        assert_eq!(out.lines().count(), 2);
    }
}
