//! Spreadsheet inspector binary
//!
//! Prints a structural report for the first worksheet of a spreadsheet file.
//! Load failures are reported on stdout and the process still exits 0.

use clap::Parser;
use sheet_fixtures::cli;
use sheet_fixtures::generator::defaults;
use sheet_fixtures::inspector::InspectMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspect-excel")]
#[command(version)]
#[command(about = "Print diagnostic information about a spreadsheet file")]
#[command(long_about = "Print diagnostic information about a spreadsheet file.

REPORT:
  1. Path, existence and size on disk
  2. Shape, per-column non-null counts and types
  3. First 5 rows and the column names
  4. Headers containing Chinese characters (U+4E00..U+9FFF)
  5. Value and runtime type of the first 5 cells of each column

Use --basic to stop after step 3.")]
struct Args {
    /// Spreadsheet to inspect (xlsx, xlsm, xlsb, xls, ods)
    #[arg(default_value = defaults::OUTPUT_PATH)]
    file: PathBuf,

    /// Skip the Chinese header scan and per-cell type dump
    #[arg(long)]
    basic: bool,
}

fn main() {
    let args = Args::parse();
    cli::init_tracing();

    let mode = if args.basic {
        InspectMode::Basic
    } else {
        InspectMode::Extended
    };
    cli::inspect(&args.file, mode);
}
