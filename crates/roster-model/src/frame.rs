use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CellValue;

/// One data row, keyed by column name. Absent keys read as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Trimmed text of a cell, `None` when the cell is absent, missing, or blank.
    pub fn text(&self, column: &str) -> Option<String> {
        let value = self.get(column)?.as_text()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells
            .values()
            .all(|cell| cell.as_text().is_none_or(|text| text.trim().is_empty()))
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A source record an adapter dropped instead of turning it into a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 1-based position of the record in the source (e.g. statement number).
    pub ordinal: usize,
    /// Number of values found.
    pub found: usize,
    /// Number of values required.
    pub expected: usize,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {} skipped: expected {} values, found {}",
            self.ordinal, self.expected, self.found
        )
    }
}

/// Uniform in-memory table every source adapter converges to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Column names in source order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Records the adapter could not turn into rows.
    pub skipped: Vec<SkippedRecord>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Adds a column name unless it is already present.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_trims_and_blanks_to_none() {
        let row: Row = [
            ("Nome", CellValue::from("  Ana  ")),
            ("Email", CellValue::from("   ")),
            ("CPF", CellValue::Missing),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.text("Nome").as_deref(), Some("Ana"));
        assert_eq!(row.text("Email"), None);
        assert_eq!(row.text("CPF"), None);
        assert_eq!(row.text("Other"), None);
        assert!(!row.is_blank());
    }

    #[test]
    fn ensure_column_keeps_first_seen_order() {
        let mut frame = Frame::new(vec!["a".to_string()]);
        frame.ensure_column("b");
        frame.ensure_column("a");
        assert_eq!(frame.columns, vec!["a", "b"]);
        assert_eq!(frame.width(), 2);
        assert!(frame.is_empty());
    }
}
