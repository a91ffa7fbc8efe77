//! Line-chart fixture generator binary
//!
//! Writes `public/line_chart_test.xlsx` (Date, Value1, Value2, Category; 10 rows)
//! and prints a preview. Any failure, such as a missing `public/` directory,
//! aborts with a non-zero exit status.

use clap::Parser;
use sheet_fixtures::cli;
use sheet_fixtures::generator::defaults;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-test-excel")]
#[command(version)]
#[command(about = "Generate the line-chart test spreadsheet")]
struct Args {
    /// Output spreadsheet path (overwritten if it exists)
    #[arg(default_value = defaults::OUTPUT_PATH)]
    output: PathBuf,

    /// Number of data rows
    #[arg(short, long, default_value_t = defaults::ROWS)]
    rows: usize,

    /// Seed for reproducible values (unseeded by default)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli::init_tracing();

    cli::create_test_excel(&args.output, args.rows, args.seed)?;
    Ok(())
}
