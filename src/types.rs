use crate::error::{FixtureError, FixtureResult};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

//==============================================================================
// Cell Values
//==============================================================================

/// A single cell as generated or as loaded from a worksheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value (blank cell)
    Empty,
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text string
    Text(String),
    /// Boolean
    Bool(bool),
    /// Date or date-time (date-formatted numeric cell)
    DateTime(NaiveDateTime),
    /// Spreadsheet error value such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Concrete type name of the value once materialised.
    ///
    /// A missing value is a float (`NaN`), which is how gaps in numeric
    /// columns end up turning integers into floats.
    pub fn runtime_type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "float",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "str",
            CellValue::Bool(_) => "bool",
            CellValue::DateTime(_) => "datetime",
            CellValue::Error(_) => "error",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, "NaN"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", format_float(*v)),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Format a float so whole values keep a trailing `.0` (`100.0`, not `100`)
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

//==============================================================================
// Column Types
//==============================================================================

/// Inferred column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dtype {
    Int64,
    Float64,
    Bool,
    DateTime,
    Object,
}

impl Dtype {
    /// Infer the column type from its cells.
    ///
    /// Integers only stay `Int64` when the column has no gaps; a single
    /// missing value promotes the whole column to `Float64`.
    pub fn infer(cells: &[CellValue]) -> Self {
        if cells.is_empty() {
            return Dtype::Object;
        }

        let mut empty = 0;
        let mut ints = 0;
        let mut floats = 0;
        let mut bools = 0;
        let mut dates = 0;
        let mut other = 0;

        for cell in cells {
            match cell {
                CellValue::Empty => empty += 1,
                CellValue::Int(_) => ints += 1,
                CellValue::Float(_) => floats += 1,
                CellValue::Bool(_) => bools += 1,
                CellValue::DateTime(_) => dates += 1,
                CellValue::Text(_) | CellValue::Error(_) => other += 1,
            }
        }

        let filled = cells.len() - empty;
        if filled == 0 {
            // Header-only column: all NaN
            return Dtype::Float64;
        }
        if other > 0 {
            return Dtype::Object;
        }
        if ints + floats == filled {
            if floats > 0 || empty > 0 {
                return Dtype::Float64;
            }
            return Dtype::Int64;
        }
        if bools == filled && empty == 0 {
            return Dtype::Bool;
        }
        if dates == filled {
            return Dtype::DateTime;
        }
        Dtype::Object
    }

    /// Convert a cell to the representation it has inside a column of this type
    pub fn coerce(&self, cell: &CellValue) -> CellValue {
        match (self, cell) {
            (Dtype::Float64, CellValue::Int(i)) => CellValue::Float(*i as f64),
            (Dtype::Float64, CellValue::Empty) => CellValue::Float(f64::NAN),
            _ => cell.clone(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dtype::Int64 => "int64",
            Dtype::Float64 => "float64",
            Dtype::Bool => "bool",
            Dtype::DateTime => "datetime64[ns]",
            Dtype::Object => "object",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Tabular Dataset
//==============================================================================

/// A named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Build a text column
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self::new(
            name,
            values
                .into_iter()
                .map(|v| CellValue::Text(v.into()))
                .collect(),
        )
    }

    /// Build an integer column
    pub fn ints(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, values.into_iter().map(CellValue::Int).collect())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn dtype(&self) -> Dtype {
        Dtype::infer(&self.cells)
    }

    pub fn non_null_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Cell at `row` after coercion to the column type
    pub fn coerced(&self, row: usize) -> Option<CellValue> {
        let dtype = self.dtype();
        self.cells.get(row).map(|cell| dtype.coerce(cell))
    }
}

/// Ordered collection of equal-length columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows (length of first column, all should be same)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Validate all columns have the same length
    pub fn validate_lengths(&self) -> FixtureResult<()> {
        let row_count = self.row_count();
        for column in &self.columns {
            if column.len() != row_count {
                return Err(FixtureError::Validation(format!(
                    "Column '{}' has {} rows, expected {} rows",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
        }
        Ok(())
    }

    pub fn dtypes(&self) -> Vec<(&str, Dtype)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.dtype()))
            .collect()
    }

    /// Dtype tally in the form `float64(1), int64(2), object(2)`
    pub fn dtype_summary(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for column in &self.columns {
            *counts.entry(column.dtype().as_str()).or_default() += 1;
        }
        counts
            .iter()
            .map(|(name, count)| format!("{}({})", name, count))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the first `n` rows as right-aligned text lines, header first
    pub fn head(&self, n: usize) -> Vec<String> {
        if self.columns.is_empty() {
            return vec!["Empty dataset (no columns)".to_string()];
        }

        let rows = self.row_count().min(n);
        let index_width = rows.saturating_sub(1).to_string().len();

        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|column| {
                (0..rows)
                    .map(|row| {
                        column
                            .coerced(row)
                            .map(|cell| cell.to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(column, values)| {
                values
                    .iter()
                    .map(|v| v.chars().count())
                    .chain(std::iter::once(column.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows + 1);

        let mut header = " ".repeat(index_width);
        for (column, width) in self.columns.iter().zip(&widths) {
            header.push_str(&format!("  {:>width$}", column.name, width = width));
        }
        lines.push(header);

        for row in 0..rows {
            let mut line = format!("{:<width$}", row, width = index_width);
            for (values, width) in rendered.iter().zip(&widths) {
                line.push_str(&format!("  {:>width$}", values[row], width = width));
            }
            lines.push(line);
        }

        if rows == 0 {
            lines.push("(no rows)".to_string());
        }

        lines
    }
}
