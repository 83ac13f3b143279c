//! Workbook adapter: reads the first sheet with calamine.

use std::collections::BTreeMap;
use std::path::Path;

use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use chrono::NaiveTime;
use roster_model::{CellValue, Frame, Row};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::FrameLoader;

/// Loads `.xlsx`, `.xls`, `.xlsm` and `.ods` workbooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetLoader;

impl FrameLoader for SpreadsheetLoader {
    fn load(&self, path: &Path) -> Result<Frame> {
        let spreadsheet_error = |message: String| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptySpreadsheet {
                path: path.to_path_buf(),
            })?;
        debug!(sheet = %sheet, "reading first sheet");

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| spreadsheet_error(e.to_string()))?;

        frame_from_range(&range).ok_or_else(|| IngestError::EmptySpreadsheet {
            path: path.to_path_buf(),
        })
    }
}

/// Builds a frame from a sheet range whose first row is the header.
///
/// Blank header cells are named `Unnamed: <index>`, and repeated names get a
/// `.1`, `.2`, ... suffix. Rows whose cells are all empty are dropped
/// and take no frame row number.
/// Returns `None` when the range has no header row.
pub fn frame_from_range(range: &Range<Data>) -> Option<Frame> {
    let mut rows = range.rows();
    let header = rows.next()?;
    let columns = header_names(header);

    let mut frame = Frame::new(columns.clone());
    for cells in rows {
        let row: Row = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = cells.get(idx).map_or(CellValue::Missing, cell_value);
                (name.clone(), value)
            })
            .collect();
        if !row.is_blank() {
            frame.push_row(row);
        }
    }
    Some(frame)
}

fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = cell
                .as_string()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .or_else(|| match cell {
                    Data::Empty => None,
                    other => cell_value(other).as_text(),
                })
                .unwrap_or_else(|| format!("Unnamed: {idx}"));

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => CellValue::Date(dt.date()),
            Some(dt) => CellValue::DateTime(dt),
            None => cell
                .as_string()
                .map_or(CellValue::Missing, CellValue::Text),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Missing,
    }
}
