//! Adapter for SQL dumps made of `INSERT INTO usuarios ... VALUES (...);` statements.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use roster_model::{CellValue, Frame, Row, SkippedRecord};
use tracing::warn;

use crate::error::Result;
use crate::guard::{read_text, validate_encoding};
use crate::source::FrameLoader;

/// Column names given to the five literals of each statement, in order.
pub const SQL_COLUMNS: [&str; 5] = ["name", "email", "nationalId", "role", "birthDate"];

static INSERT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)INSERT\s+INTO\s+usuarios.*?VALUES\s*\((.*?)\);")
        .expect("Invalid insert statement regex")
});

static QUOTED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'((?:[^']|'')*)'").expect("Invalid quoted literal regex"));

/// Loads `.sql` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlLoader;

impl FrameLoader for SqlLoader {
    fn load(&self, path: &Path) -> Result<Frame> {
        validate_encoding(path)?;
        let text = read_text(path)?;
        Ok(frame_from_sql(&text))
    }
}

/// Extracts one row per well-formed insert statement.
///
/// Statements that do not carry exactly five quoted literals are recorded in
/// [`Frame::skipped`] and never become rows.
pub fn frame_from_sql(text: &str) -> Frame {
    let mut frame = Frame::new(SQL_COLUMNS.iter().map(|c| (*c).to_string()).collect());

    for (idx, statement) in INSERT_STATEMENT.captures_iter(text).enumerate() {
        let literals: Vec<String> = QUOTED_LITERAL
            .captures_iter(&statement[1])
            .map(|caps| caps[1].replace("''", "'").trim().to_string())
            .collect();

        if literals.len() != SQL_COLUMNS.len() {
            let skipped = SkippedRecord {
                ordinal: idx + 1,
                found: literals.len(),
                expected: SQL_COLUMNS.len(),
            };
            warn!(
                statement = skipped.ordinal,
                found = skipped.found,
                expected = skipped.expected,
                "skipping insert statement with wrong number of values"
            );
            frame.skipped.push(skipped);
            continue;
        }

        let row: Row = SQL_COLUMNS
            .iter()
            .zip(literals)
            .map(|(column, literal)| (*column, CellValue::Text(literal)))
            .collect();
        frame.push_row(row);
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_and_short_statements() {
        let dump = "\
INSERT INTO usuarios (nome, email, cpf, tipo, nascimento) VALUES ('Ana Silva', 'ana@x.com', '12345678900', 'aluno', '15/03/2000');
INSERT INTO usuarios VALUES ('Bia', 'bia@x.com', '1');
";
        let frame = frame_from_sql(dump);

        assert_eq!(frame.columns, SQL_COLUMNS);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.rows[0].text("name").as_deref(), Some("Ana Silva"));
        assert_eq!(frame.rows[0].text("birthDate").as_deref(), Some("15/03/2000"));
        assert_eq!(
            frame.skipped,
            vec![SkippedRecord {
                ordinal: 2,
                found: 3,
                expected: 5
            }]
        );
    }

    #[test]
    fn test_case_insensitive_multiline_and_escapes() {
        let dump = "insert into USUARIOS\n  values (\n 'D''Ávila, João ', 'j@x.com',\n '1', 'professor', '1980-01-02'\n);";
        let frame = frame_from_sql(dump);

        assert_eq!(frame.height(), 1);
        assert_eq!(frame.rows[0].text("name").as_deref(), Some("D'Ávila, João"));
        assert_eq!(frame.rows[0].text("role").as_deref(), Some("professor"));
    }

    #[test]
    fn test_other_tables_and_empty_text() {
        let frame = frame_from_sql("INSERT INTO cursos VALUES ('a', 'b', 'c', 'd', 'e');");
        assert!(frame.is_empty());
        assert!(frame.skipped.is_empty());

        let frame = frame_from_sql("");
        assert!(frame.is_empty());
    }
}
