//! Source adapters for roster imports.
//!
//! Every supported file encoding is loaded into the same
//! [`Frame`](roster_model::Frame): ordered column names plus rows of cells.
//! The adapter is chosen from the file extension alone.
//!
//! | Extension                        | Adapter                          |
//! |----------------------------------|----------------------------------|
//! | `.csv`                           | delimited text (polars)          |
//! | `.xlsx`, `.xls`, `.xlsm`, `.ods` | spreadsheet, first sheet         |
//! | `.json`                          | row arrays or nested objects     |
//! | `.sql`                           | `INSERT INTO usuarios` literals  |
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::load_frame;
//!
//! let frame = load_frame(Path::new("uploads/turma.csv"))?;
//! println!("{} rows, columns: {:?}", frame.height(), frame.columns);
//! ```

mod csv;
mod error;
mod guard;
mod json;
mod source;
mod spreadsheet;
mod sql;

// === Error Types ===
pub use error::{IngestError, Result};

// === Dispatch ===
pub use source::{FrameLoader, SourceFormat, load_frame};

// === Adapters ===
pub use csv::CsvLoader;
pub use json::{JsonLoader, frame_from_json};
pub use spreadsheet::{SpreadsheetLoader, frame_from_range};
pub use sql::{SQL_COLUMNS, SqlLoader, frame_from_sql};

// === File Guards ===
pub use guard::{MAX_SOURCE_FILE_SIZE, check_file_size, check_file_size_with_limit};
