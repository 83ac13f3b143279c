//! Format selection and the common loading capability.

use std::fmt;
use std::path::Path;

use roster_model::Frame;
use tracing::{debug, info_span};

use crate::csv::CsvLoader;
use crate::error::{IngestError, Result};
use crate::guard::check_file_size;
use crate::json::JsonLoader;
use crate::spreadsheet::SpreadsheetLoader;
use crate::sql::SqlLoader;

/// Loads one source encoding into a [`Frame`].
pub trait FrameLoader {
    fn load(&self, path: &Path) -> Result<Frame>;
}

/// Source encodings, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Delimited,
    Spreadsheet,
    Json,
    Sql,
}

impl SourceFormat {
    /// Picks the format from the extension (case-insensitive); content is never sniffed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Delimited),
            "xlsx" | "xls" | "xlsm" | "ods" => Ok(Self::Spreadsheet),
            "json" => Ok(Self::Json),
            "sql" => Ok(Self::Sql),
            _ => Err(IngestError::UnsupportedFormat {
                extension: if extension.is_empty() {
                    extension
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }

    pub fn loader(self) -> &'static dyn FrameLoader {
        match self {
            Self::Delimited => &CsvLoader,
            Self::Spreadsheet => &SpreadsheetLoader,
            Self::Json => &JsonLoader,
            Self::Sql => &SqlLoader,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Spreadsheet => "spreadsheet",
            Self::Json => "json",
            Self::Sql => "sql",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Loads any supported file into a frame, dispatching on its extension.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let format = SourceFormat::from_path(path)?;
    let span = info_span!("load", format = %format);
    let _guard = span.enter();

    check_file_size(path)?;
    let frame = format.loader().load(path)?;

    debug!(
        rows = frame.height(),
        columns = frame.width(),
        skipped = frame.skipped.len(),
        "source loaded"
    );
    Ok(frame)
}
