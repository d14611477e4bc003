// Reads one benchmark run from stdin, prints the initStart / resp / initEnd medians (one per line).
// Sections without a median are skipped silently.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use pake_bench::cli::{init_logging, LogArgs};
use pake_bench::median_extract::extract_medians;

#[derive(Parser)]
#[command(name = "extract_medians")]
#[command(about = "Extract per-phase median cycle counts from benchmark output", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    let medians = extract_medians(io::stdin().lock()).context("reading benchmark output")?;
    if !medians.is_complete() {
        tracing::info!(found = medians.values().len(), "some sections had no median");
    }

    let mut out = io::stdout().lock();
    medians.write_to(&mut out).context("writing medians")?;
    out.flush()?;
    Ok(())
}
