//! Spreadsheet inspector
//!
//! Loads the first worksheet of a file and describes its structure: existence,
//! size, shape, column types, sample rows, header names. The extended report
//! also flags headers with Chinese characters and dumps per-cell runtime types,
//! which is where integer columns silently turning into floats show up.
//!
//! Inspection never fails. A load error is captured as text and ends the
//! report early.

use crate::excel::ExcelImporter;
use crate::types::Dataset;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rows shown in previews and per-cell dumps
pub const PREVIEW_ROWS: usize = 5;

/// CJK Unified Ideographs block
const CJK_UNIFIED_IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// True if any character falls in the CJK Unified Ideographs block
pub fn contains_cjk(s: &str) -> bool {
    s.chars().any(|c| CJK_UNIFIED_IDEOGRAPHS.contains(&c))
}

/// How much of the report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectMode {
    /// File checks, summary, preview and column names
    Basic,
    /// Basic plus CJK header scan and per-cell type dump
    #[default]
    Extended,
}

/// Outcome of the single load attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loaded(Dataset),
    Failed(String),
}

/// One line of the inspection report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Heading(String),
    Text(String),
    Error(String),
}

impl ReportLine {
    fn text(s: impl Into<String>) -> Self {
        ReportLine::Text(s.into())
    }

    fn blank() -> Self {
        ReportLine::Text(String::new())
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Heading(s) | ReportLine::Text(s) | ReportLine::Error(s) => f.write_str(s),
        }
    }
}

/// Result of inspecting one file
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub path: PathBuf,
    pub exists: bool,
    /// Only known when the path exists
    pub size_bytes: Option<u64>,
    pub load: LoadState,
}

impl Inspection {
    /// Inspect a file. Existence and size are checked before parsing.
    pub fn run<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let exists = path.exists();
        let size_bytes = if exists {
            fs::metadata(&path).ok().map(|m| m.len())
        } else {
            None
        };

        let load = match ExcelImporter::new(&path).import() {
            Ok(dataset) => {
                debug!(path = %path.display(), "inspection load succeeded");
                LoadState::Loaded(dataset)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "inspection load failed");
                LoadState::Failed(e.to_string())
            }
        };

        Self {
            path,
            exists,
            size_bytes,
            load,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.load {
            LoadState::Loaded(dataset) => Some(dataset),
            LoadState::Failed(_) => None,
        }
    }

    /// Column names containing CJK ideographs, in column order
    pub fn cjk_columns(&self) -> Vec<&str> {
        self.dataset()
            .map(|dataset| {
                dataset
                    .column_names()
                    .into_iter()
                    .filter(|name| contains_cjk(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Build the ordered report
    pub fn render(&self, mode: InspectMode) -> Vec<ReportLine> {
        let mut lines = vec![
            ReportLine::Heading(format!("Inspecting Excel file: {}", self.path.display())),
            ReportLine::text(format!("File exists: {}", self.exists)),
            ReportLine::text(match self.size_bytes {
                Some(size) => format!("File size: {} bytes", size),
                None if self.exists => "File size: unavailable".to_string(),
                None => "File size: unavailable (file not found)".to_string(),
            }),
        ];

        let dataset = match &self.load {
            LoadState::Loaded(dataset) => dataset,
            LoadState::Failed(message) => {
                lines.push(ReportLine::Error(format!(
                    "Error reading Excel file: {}",
                    message
                )));
                return lines;
            }
        };

        lines.push(ReportLine::blank());
        lines.push(ReportLine::Heading("Dataset Info:".to_string()));
        lines.extend(Self::summary(dataset));

        lines.push(ReportLine::blank());
        lines.push(ReportLine::Heading("First few rows:".to_string()));
        lines.extend(dataset.head(PREVIEW_ROWS).into_iter().map(ReportLine::Text));

        lines.push(ReportLine::blank());
        lines.push(ReportLine::Heading("Column names:".to_string()));
        lines.push(ReportLine::text(format!("{:?}", dataset.column_names())));

        if mode == InspectMode::Extended {
            lines.push(ReportLine::blank());
            lines.push(ReportLine::Heading(
                "Columns with Chinese characters:".to_string(),
            ));
            let cjk = self.cjk_columns();
            if cjk.is_empty() {
                lines.push(ReportLine::text("none"));
            } else {
                lines.extend(cjk.into_iter().map(ReportLine::text));
            }

            lines.push(ReportLine::blank());
            lines.push(ReportLine::Heading("Column type details:".to_string()));
            lines.extend(Self::cell_types(dataset));
        }

        lines
    }

    /// Report as plain text lines
    pub fn render_text(&self, mode: InspectMode) -> Vec<String> {
        self.render(mode).iter().map(ToString::to_string).collect()
    }

    /// Shape, per-column non-null counts and dtypes
    fn summary(dataset: &Dataset) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::text(format!(
            "Shape: {} rows x {} columns",
            dataset.row_count(),
            dataset.column_count()
        ))];

        if dataset.column_count() == 0 {
            return lines;
        }

        let index_width = (dataset.column_count() - 1).to_string().len().max(3);
        let name_width = dataset
            .columns
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        lines.push(ReportLine::text(format!(
            " {:<iw$}  {:<nw$}  {:<14}  {}",
            "#",
            "Column",
            "Non-Null Count",
            "Dtype",
            iw = index_width,
            nw = name_width
        )));
        lines.push(ReportLine::text(format!(
            " {:<iw$}  {:<nw$}  {:<14}  {}",
            "-".repeat(index_width),
            "-".repeat("Column".len()),
            "-".repeat("Non-Null Count".len()),
            "-----",
            iw = index_width,
            nw = name_width
        )));

        for (idx, column) in dataset.columns.iter().enumerate() {
            lines.push(ReportLine::text(format!(
                " {:<iw$}  {:<nw$}  {:<14}  {}",
                idx,
                column.name,
                format!("{} non-null", column.non_null_count()),
                column.dtype(),
                iw = index_width,
                nw = name_width
            )));
        }

        lines.push(ReportLine::text(format!(
            "dtypes: {}",
            dataset.dtype_summary()
        )));
        lines
    }

    /// Per column: dtype, then value and runtime type of the first rows
    fn cell_types(dataset: &Dataset) -> Vec<ReportLine> {
        let mut lines = Vec::new();
        for column in &dataset.columns {
            lines.push(ReportLine::text(format!(
                "Column '{}' (dtype: {})",
                column.name,
                column.dtype()
            )));
            for row in 0..column.len().min(PREVIEW_ROWS) {
                if let Some(cell) = column.coerced(row) {
                    lines.push(ReportLine::text(format!(
                        "  Row {}: {} (type: {})",
                        row,
                        cell,
                        cell.runtime_type_name()
                    )));
                }
            }
        }
        lines
    }
}
