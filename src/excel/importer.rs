//! Excel importer implementation - first worksheet → Dataset

use crate::error::{FixtureError, FixtureResult};
use crate::types::{CellValue, Column, Dataset};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Largest float magnitude that still converts to `i64` without loss
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Excel importer reading the first (default) worksheet of a workbook
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the first worksheet. The header row becomes the column names.
    pub fn import(&self) -> FixtureResult<Dataset> {
        // Format is picked from the extension (xlsx, xlsm, xlsb, xls, ods)
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| FixtureError::Import(format!("Failed to open workbook: {}", e)))?;

        let sheet_name = workbook.sheet_names().first().cloned();

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| FixtureError::Import("Workbook has no worksheets".to_string()))?
            .map_err(|e| FixtureError::Import(format!("Failed to read first worksheet: {}", e)))?;

        let dataset = self.range_to_dataset(&range);
        debug!(
            path = %self.path.display(),
            sheet = sheet_name.as_deref().unwrap_or(""),
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "loaded worksheet"
        );
        Ok(dataset)
    }

    /// Convert a worksheet range to a dataset (row 0 = header)
    fn range_to_dataset(&self, range: &Range<Data>) -> Dataset {
        let mut rows = range.rows();
        let header = match rows.next() {
            Some(header) => header,
            None => return Dataset::new(),
        };

        let names = self.header_names(header);
        let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];

        for row in rows {
            for (col, column_cells) in cells.iter_mut().enumerate() {
                let cell = row.get(col).map_or(CellValue::Empty, Self::convert_cell);
                column_cells.push(cell);
            }
        }

        let mut dataset = Dataset::new();
        for (name, column_cells) in names.into_iter().zip(cells) {
            dataset.add_column(Column::new(name, column_cells));
        }
        dataset
    }

    /// Column names from the header row.
    ///
    /// Blank headers become `Unnamed: <idx>`, repeats get a `.1`, `.2`... suffix.
    fn header_names(&self, header: &[Data]) -> Vec<String> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        header
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let base = match cell {
                    Data::Empty => format!("Unnamed: {}", idx),
                    Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", idx),
                    Data::Float(f) if Self::is_integral(*f) => (*f as i64).to_string(),
                    other => other.to_string(),
                };

                let count = seen.entry(base.clone()).or_insert(0);
                let name = if *count == 0 {
                    base
                } else {
                    format!("{}.{}", base, count)
                };
                *count += 1;
                name
            })
            .collect()
    }

    /// Convert a calamine cell to a CellValue
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Int(*i),
            // xlsx stores every number as a double; whole values read back as ints
            Data::Float(f) if Self::is_integral(*f) => CellValue::Int(*f as i64),
            Data::Float(f) => CellValue::Float(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => {
                let serial = dt.as_f64();
                excel_serial_to_datetime(serial)
                    .map_or(CellValue::Float(serial), CellValue::DateTime)
            }
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map_or_else(|| CellValue::Text(s.clone()), CellValue::DateTime),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }

    fn is_integral(f: f64) -> bool {
        f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INT
    }
}

/// Excel serial date (days since 1899-12-30) to a date-time
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_importer() -> ExcelImporter {
        ExcelImporter::new("test.xlsx")
    }

    #[test]
    fn test_header_names_plain() {
        let importer = create_test_importer();
        let header = vec![
            Data::String("Date".to_string()),
            Data::String("Value1".to_string()),
        ];
        assert_eq!(importer.header_names(&header), vec!["Date", "Value1"]);
    }

    #[test]
    fn test_header_names_blank_and_duplicate() {
        let importer = create_test_importer();
        let header = vec![
            Data::String("Value".to_string()),
            Data::Empty,
            Data::String("Value".to_string()),
            Data::String("  ".to_string()),
            Data::String("Value".to_string()),
            Data::Float(2024.0),
        ];
        assert_eq!(
            importer.header_names(&header),
            vec![
                "Value",
                "Unnamed: 1",
                "Value.1",
                "Unnamed: 3",
                "Value.2",
                "2024"
            ]
        );
    }

    #[test]
    fn test_convert_cell_numbers() {
        assert_eq!(
            ExcelImporter::convert_cell(&Data::Float(512.0)),
            CellValue::Int(512)
        );
        assert_eq!(
            ExcelImporter::convert_cell(&Data::Float(2.5)),
            CellValue::Float(2.5)
        );
        assert_eq!(ExcelImporter::convert_cell(&Data::Int(7)), CellValue::Int(7));
    }

    #[test]
    fn test_convert_cell_text_bool_empty() {
        assert_eq!(
            ExcelImporter::convert_cell(&Data::String("A".to_string())),
            CellValue::Text("A".to_string())
        );
        assert_eq!(
            ExcelImporter::convert_cell(&Data::Bool(true)),
            CellValue::Bool(true)
        );
        assert_eq!(ExcelImporter::convert_cell(&Data::Empty), CellValue::Empty);
    }

    #[test]
    fn test_convert_cell_iso_datetime() {
        let cell = Data::DateTimeIso("2024-01-02T03:04:05".to_string());
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(
            ExcelImporter::convert_cell(&cell),
            CellValue::DateTime(expected)
        );
    }

    #[test]
    fn test_excel_serial_to_datetime() {
        // 45292 = 2024-01-01
        let dt = excel_serial_to_datetime(45292.5).unwrap();
        assert_eq!(dt.to_string(), "2024-01-01 12:00:00");
        assert!(excel_serial_to_datetime(-1.0).is_none());
    }

    #[test]
    fn test_import_missing_file_is_error() {
        let importer = ExcelImporter::new("definitely/not/here.xlsx");
        assert!(matches!(importer.import(), Err(FixtureError::Import(_))));
    }
}
