use crate::error::FixtureResult;
use crate::generator::{self, GeneratorConfig};
use crate::inspector::{InspectMode, Inspection, ReportLine, PREVIEW_ROWS};
use colored::Colorize;
use std::path::Path;

/// Log to stderr so stdout only carries the report. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the create-test-excel command
pub fn create_test_excel(output: &Path, rows: usize, seed: Option<u64>) -> FixtureResult<()> {
    let config = GeneratorConfig::default().with_rows(rows).with_seed(seed);
    let dataset = generator::write_fixture(&config, output)?;

    println!("Created test Excel file: {}", output.display());

    println!("\n{}", "Data Preview:".bold().cyan());
    for line in dataset.head(PREVIEW_ROWS) {
        println!("{}", line);
    }

    println!("\n{}", "Column Types:".bold().cyan());
    let name_width = dataset
        .column_names()
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0);
    for (name, dtype) in dataset.dtypes() {
        println!("{:<width$}  {}", name, dtype, width = name_width);
    }

    Ok(())
}

/// Execute the inspect command. Load failures are part of the report, not errors.
pub fn inspect(file: &Path, mode: InspectMode) {
    let inspection = Inspection::run(file);

    for line in inspection.render(mode) {
        match line {
            ReportLine::Heading(text) => println!("{}", text.bold().cyan()),
            ReportLine::Text(text) => println!("{}", text),
            ReportLine::Error(text) => println!("{}", text.red()),
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
