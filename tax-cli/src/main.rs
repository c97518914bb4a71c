use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tax_cli::{input, report};
use tax_core::format::baht;
use tax_core::models::thai_schedule;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Thai personal income tax estimator.
///
/// Loads a completed wizard input file, walks it through the eight-step
/// wizard session, and prints the resulting tax summary. Amounts in the
/// file are free-text strings; anything malformed counts as zero.
#[derive(Debug, Parser)]
struct Cli {
    /// Wizard input file (TOML, one table per step).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the progressive rate schedule and exit.
    #[arg(long)]
    brackets: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.brackets {
        print_schedule();
        return Ok(());
    }

    let Some(path) = cli.input else {
        anyhow::bail!("--input is required unless --brackets is given");
    };

    debug!(path = %path.display(), "running wizard file");
    let file = input::WizardFile::load(&path)?;
    let summary = input::run(file)?;
    print!("{}", report::render(&summary));

    Ok(())
}

fn print_schedule() {
    let mut lower = Decimal::ZERO;
    for bracket in thai_schedule() {
        let rate = (bracket.tax_rate * Decimal::ONE_HUNDRED).normalize();
        match bracket.max_income {
            Some(upper) => {
                println!("{:>11} – {:>11}  {rate:>3}%", baht(lower), baht(upper));
                lower = upper;
            }
            None => println!("{:>11} and above    {rate:>3}%", baht(lower)),
        }
    }
}
