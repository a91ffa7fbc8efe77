//! Line-chart fixture generator
//!
//! Builds the `Date, Value1, Value2, Category` dataset used to exercise the
//! line-chart upload path by hand. Dates are written as `YYYY-MM-DD` text,
//! not date cells, so readers see a string-typed date column.

use crate::error::{FixtureError, FixtureResult};
use crate::excel::ExcelExporter;
use crate::types::{Column, Dataset};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::path::Path;
use tracing::info;

/// Fixed fixture parameters
pub mod defaults {
    use std::ops::Range;

    pub const OUTPUT_PATH: &str = "public/line_chart_test.xlsx";
    pub const START_DATE: (i32, u32, u32) = (2024, 1, 1);
    pub const ROWS: usize = 10;
    pub const VALUE1_RANGE: Range<i64> = 100..1000;
    pub const VALUE2_RANGE: Range<i64> = 500..1500;
    pub const CATEGORY_PATTERN: [&str; 10] = ["A", "B", "A", "C", "B", "A", "C", "B", "A", "C"];
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const COLUMN_NAMES: [&str; 4] = ["Date", "Value1", "Value2", "Category"];

/// Generator parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub rows: usize,
    pub value1_range: Range<i64>,
    pub value2_range: Range<i64>,
    /// Cycled to fill the `Category` column
    pub category_pattern: Vec<String>,
    /// `None` draws from the thread RNG; runs are then not reproducible
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let (y, m, d) = defaults::START_DATE;
        Self {
            start_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            rows: defaults::ROWS,
            value1_range: defaults::VALUE1_RANGE,
            value2_range: defaults::VALUE2_RANGE,
            category_pattern: defaults::CATEGORY_PATTERN
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> FixtureResult<()> {
        for (name, range) in [
            ("Value1", &self.value1_range),
            ("Value2", &self.value2_range),
        ] {
            if range.is_empty() {
                return Err(FixtureError::Validation(format!(
                    "{} range {}..{} is empty",
                    name, range.start, range.end
                )));
            }
        }
        if self.category_pattern.is_empty() {
            return Err(FixtureError::Validation(
                "Category pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Build the fixture dataset
pub fn generate(config: &GeneratorConfig) -> FixtureResult<Dataset> {
    config.validate()?;

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let dates = date_sequence(config.start_date, config.rows)?;
    let value1: Vec<i64> = (0..config.rows)
        .map(|_| rng.random_range(config.value1_range.clone()))
        .collect();
    let value2: Vec<i64> = (0..config.rows)
        .map(|_| rng.random_range(config.value2_range.clone()))
        .collect();
    let categories: Vec<String> = config
        .category_pattern
        .iter()
        .cycle()
        .take(config.rows)
        .cloned()
        .collect();

    let mut dataset = Dataset::new();
    dataset.add_column(Column::text(COLUMN_NAMES[0], dates));
    dataset.add_column(Column::ints(COLUMN_NAMES[1], value1));
    dataset.add_column(Column::ints(COLUMN_NAMES[2], value2));
    dataset.add_column(Column::text(COLUMN_NAMES[3], categories));
    dataset.validate_lengths()?;

    info!(rows = config.rows, seeded = config.seed.is_some(), "generated fixture dataset");
    Ok(dataset)
}

/// Generate and write the fixture in one step, returning the dataset written
pub fn write_fixture(config: &GeneratorConfig, output: &Path) -> FixtureResult<Dataset> {
    let dataset = generate(config)?;
    ExcelExporter::new(&dataset).export(output)?;
    info!(path = %output.display(), "wrote fixture workbook");
    Ok(dataset)
}

/// Consecutive daily dates formatted `YYYY-MM-DD`
fn date_sequence(start: NaiveDate, rows: usize) -> FixtureResult<Vec<String>> {
    (0..rows)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset as u64))
                .map(|date| date.format(DATE_FORMAT).to_string())
                .ok_or_else(|| {
                    FixtureError::Validation(format!(
                        "Date out of range {} days after {}",
                        offset, start
                    ))
                })
        })
        .collect()
}
