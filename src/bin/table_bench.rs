// Reads 12 medians (4 executables x initStart/resp/initEnd) from stdin and prints a LaTeX table.
// Typical use:
//   for exe in ...; do ./$exe | extract_medians; done | table_bench > table.tex

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use pake_bench::cli::{init_logging, LogArgs};
use pake_bench::table_format::format_table;

#[derive(Parser)]
#[command(name = "table_bench")]
#[command(about = "Format PAKE median cycle counts as a LaTeX table", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log);

    // whole table is built before anything reaches stdout
    let latex = format_table(io::stdin().lock()).context("building median table")?;

    let mut out = io::stdout().lock();
    out.write_all(latex.as_bytes())?;
    out.flush()?;
    Ok(())
}
