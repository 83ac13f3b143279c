//! Delimited-text adapter backed by Polars.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use roster_model::{CellValue, Frame, Row};

use crate::error::{IngestError, Result};
use crate::guard::{open_error, validate_encoding};
use crate::source::FrameLoader;

/// Separators tried when sniffing the header line, in tie-break order.
const CANDIDATE_SEPARATORS: [u8; 3] = [b',', b';', b'\t'];

/// Loads `.csv` files. The first line is the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLoader;

impl FrameLoader for CsvLoader {
    fn load(&self, path: &Path) -> Result<Frame> {
        validate_encoding(path)?;
        let header = read_header_line(path)?;
        let separator = sniff_separator(&header);

        // Every column is read as text so identifiers keep their leading zeros.
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|opts| opts.with_separator(separator))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .finish()
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(frame_from_dataframe(&df))
    }
}

/// Reads the first line, without a UTF-8 BOM.
fn read_header_line(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(line
        .strip_prefix('\u{feff}')
        .unwrap_or(&line)
        .trim_end()
        .to_string())
}

/// Picks the separator that occurs most often outside quotes; comma wins ties.
fn sniff_separator(header: &str) -> u8 {
    let mut counts = [0usize; CANDIDATE_SEPARATORS.len()];
    let mut in_quotes = false;
    for byte in header.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = CANDIDATE_SEPARATORS.iter().position(|sep| *sep == byte) {
            counts[idx] += 1;
        }
    }

    let mut best = 0;
    for idx in 1..CANDIDATE_SEPARATORS.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    CANDIDATE_SEPARATORS[best]
}

fn frame_from_dataframe(df: &DataFrame) -> Frame {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut frame = Frame::new(columns.clone());
    for idx in 0..df.height() {
        let row: Row = columns
            .iter()
            .zip(df.get_columns())
            .map(|(name, column)| {
                let value = column.get(idx).unwrap_or(AnyValue::Null);
                (name.clone(), cell_from_any(value))
            })
            .collect();
        frame.push_row(row);
    }
    frame
}

fn cell_from_any(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        other => {
            let s = other.to_string();
            // Strip surrounding quotes that might come from formatting
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                CellValue::Text(s[1..s.len() - 1].to_string())
            } else {
                CellValue::Text(s)
            }
        }
    }
}
