//! Excel exporter implementation

use crate::error::{FixtureError, FixtureResult};
use crate::types::{CellValue, Dataset};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Excel exporter writing a dataset as a single worksheet
pub struct ExcelExporter<'a> {
    dataset: &'a Dataset,
    sheet_name: String,
}

impl<'a> ExcelExporter<'a> {
    /// Create a new Excel exporter
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    /// Use a custom worksheet name
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Export the dataset to an Excel .xlsx file, replacing any existing file
    pub fn export(&self, output_path: &Path) -> FixtureResult<()> {
        self.dataset.validate_lengths()?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.sheet_name)
            .map_err(|e| FixtureError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_sheet(worksheet)?;

        workbook
            .save(output_path)
            .map_err(|e| FixtureError::Export(format!("Failed to save Excel file: {}", e)))?;

        debug!(
            path = %output_path.display(),
            rows = self.dataset.row_count(),
            columns = self.dataset.column_count(),
            "wrote workbook"
        );
        Ok(())
    }

    /// Header row (bold) followed by one row per record
    fn write_sheet(&self, worksheet: &mut Worksheet) -> FixtureResult<()> {
        let header_format = Format::new().set_bold();

        for (col_idx, column) in self.dataset.columns.iter().enumerate() {
            let col = Self::column_index(col_idx)?;
            worksheet
                .write_string_with_format(0, col, &column.name, &header_format)
                .map_err(|e| FixtureError::Export(format!("Failed to write header: {}", e)))?;

            for (row_idx, cell) in column.cells.iter().enumerate() {
                let row = u32::try_from(row_idx + 1).map_err(|_| {
                    FixtureError::Export(format!("Row {} exceeds worksheet limits", row_idx))
                })?;
                Self::write_cell(worksheet, row, col, cell)?;
            }
        }

        Ok(())
    }

    fn write_cell(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        cell: &CellValue,
    ) -> FixtureResult<()> {
        let result = match cell {
            CellValue::Empty => return Ok(()),
            CellValue::Int(i) => worksheet.write_number(row, col, *i as f64),
            CellValue::Float(f) => worksheet.write_number(row, col, *f),
            CellValue::Text(s) => worksheet.write_string(row, col, s),
            CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
            CellValue::DateTime(dt) => {
                let format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
                worksheet.write_datetime_with_format(row, col, dt, &format)
            }
            CellValue::Error(e) => worksheet.write_string(row, col, e),
        };

        result
            .map(|_| ())
            .map_err(|e| FixtureError::Export(format!("Failed to write cell: {}", e)))
    }

    fn column_index(idx: usize) -> FixtureResult<u16> {
        u16::try_from(idx)
            .map_err(|_| FixtureError::Export(format!("Column {} exceeds worksheet limits", idx)))
    }
}
