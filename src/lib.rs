//! Sheet Fixtures - line-chart test spreadsheet generator and inspector
//!
//! Two independent utilities built on one tabular model:
//!
//! - [`generator`] builds the `Date, Value1, Value2, Category` fixture and
//!   writes it as an `.xlsx` worksheet.
//! - [`inspector`] loads the first worksheet of a spreadsheet and reports its
//!   shape, column types, sample rows and header quirks.
//!
//! # Example
//!
//! ```no_run
//! use sheet_fixtures::generator::{write_fixture, GeneratorConfig};
//! use sheet_fixtures::inspector::{InspectMode, Inspection};
//! use std::path::Path;
//!
//! let path = Path::new("public/line_chart_test.xlsx");
//! write_fixture(&GeneratorConfig::default().with_seed(Some(7)), path)?;
//!
//! let inspection = Inspection::run(path);
//! for line in inspection.render_text(InspectMode::Extended) {
//!     println!("{}", line);
//! }
//! # Ok::<(), sheet_fixtures::error::FixtureError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod generator;
pub mod inspector;
pub mod types;

// Re-export commonly used types
pub use error::{FixtureError, FixtureResult};
pub use types::{CellValue, Column, Dataset, Dtype};
