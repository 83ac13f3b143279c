//! JSON adapter.
//!
//! Accepted layouts:
//!
//! - `[{...}, {...}]`: one row per object;
//! - `{"usuarios": [{...}, ...]}`: the first key holding an array of objects;
//! - `{"col": {"0": v, "1": v}}` or `{"col": [v, v]}`: column-oriented tables;
//! - any other object: a single row.
//!
//! Nested objects are flattened to dotted column names (`contato.email`).

use std::collections::BTreeSet;
use std::path::Path;

use roster_model::{CellValue, Frame, Row};
use serde_json::{Map, Value};

use crate::error::{IngestError, Result};
use crate::guard::{read_text, validate_encoding};
use crate::source::FrameLoader;

/// Loads `.json` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl FrameLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<Frame> {
        validate_encoding(path)?;
        let text = read_text(path)?;
        let value: Value = serde_json::from_str(&text).map_err(|e| IngestError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        frame_from_json(&value).map_err(|reason| IngestError::JsonShape {
            path: path.to_path_buf(),
            reason,
        })
    }
}

/// Converts a parsed JSON document into a frame.
///
/// The error is a human-readable description of the unsupported layout.
pub fn frame_from_json(value: &Value) -> std::result::Result<Frame, String> {
    match value {
        Value::Array(items) => frame_from_records(items),
        Value::Object(map) if map.is_empty() => Ok(Frame::new(Vec::new())),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = wrapped_records(map) {
                return frame_from_records(items);
            }
            if let Some(frame) = frame_from_columns(map) {
                return Ok(frame);
            }
            let mut frame = Frame::new(Vec::new());
            push_record(&mut frame, map);
            Ok(frame)
        }
        other => Err(format!(
            "expected an array or object at the top level, found {}",
            kind_name(other)
        )),
    }
}

fn frame_from_records(items: &[Value]) -> std::result::Result<Frame, String> {
    let mut frame = Frame::new(Vec::new());
    for (idx, item) in items.iter().enumerate() {
        match item {
            Value::Object(map) => push_record(&mut frame, map),
            other => {
                return Err(format!(
                    "element {} of the record array is {}, expected an object",
                    idx + 1,
                    kind_name(other)
                ));
            }
        }
    }
    Ok(frame)
}

fn push_record(frame: &mut Frame, map: &Map<String, Value>) {
    let mut cells = Vec::new();
    flatten("", map, &mut cells);
    let mut row = Row::new();
    for (column, cell) in cells {
        frame.ensure_column(&column);
        row.insert(column, cell);
    }
    frame.push_row(row);
}

fn flatten(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, CellValue)>) {
    for (key, value) in map {
        let column = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => flatten(&column, inner, out),
            scalar => out.push((column, cell_from_json(scalar))),
        }
    }
}

fn wrapped_records(map: &Map<String, Value>) -> Option<&Value> {
    map.values().find(|value| match value {
        Value::Array(items) => !items.is_empty() && items.iter().all(Value::is_object),
        _ => false,
    })
}

/// Transposes `{"col": {"0": v}}` and `{"col": [v]}` layouts.
fn frame_from_columns(map: &Map<String, Value>) -> Option<Frame> {
    if map.is_empty() {
        return None;
    }

    let indexed = map.values().all(|value| match value {
        Value::Object(inner) => {
            !inner.is_empty() && inner.keys().all(|k| k.parse::<u64>().is_ok())
        }
        _ => false,
    });
    if indexed {
        let mut index = BTreeSet::new();
        for value in map.values() {
            if let Value::Object(inner) = value {
                index.extend(inner.keys().filter_map(|k| k.parse::<u64>().ok()));
            }
        }

        let mut frame = Frame::new(map.keys().cloned().collect());
        for position in index {
            let key = position.to_string();
            let row: Row = map
                .iter()
                .map(|(column, value)| {
                    let cell = value
                        .get(key.as_str())
                        .map_or(CellValue::Missing, cell_from_json);
                    (column.clone(), cell)
                })
                .collect();
            frame.push_row(row);
        }
        return Some(frame);
    }

    let mut lengths = map.values().map(|value| match value {
        Value::Array(items) if items.iter().all(is_scalar) => Some(items.len()),
        _ => None,
    });
    let height = lengths.next()??;
    if !lengths.all(|len| len == Some(height)) {
        return None;
    }

    let mut frame = Frame::new(map.keys().cloned().collect());
    for idx in 0..height {
        let row: Row = map
            .iter()
            .map(|(column, value)| {
                let cell = value.get(idx).map_or(CellValue::Missing, cell_from_json);
                (column.clone(), cell)
            })
            .collect();
        frame.push_row(row);
    }
    Some(frame)
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Missing,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if n.is_u64() {
                CellValue::Text(n.to_string())
            } else {
                n.as_f64()
                    .map_or_else(|| CellValue::Text(n.to_string()), CellValue::Float)
            }
        }
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
