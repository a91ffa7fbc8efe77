//! Excel read/write module
//!
//! - Export: Dataset → Excel (.xlsx), single worksheet
//! - Import: first worksheet of .xlsx/.xlsm/.xlsb/.xls/.ods → Dataset

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::ExcelImporter;
