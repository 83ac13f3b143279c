//! Row-to-record building and validation.

use chrono::NaiveDate;
use roster_map::ColumnMapping;
use roster_model::{
    CandidateRecord, CanonicalField, CellValue, Frame, RejectedRecord, ResultSet, Row,
};
use roster_normalize::{RoleVocabulary, parse_birth_date};
use tracing::debug;

/// Builds and validates one record per frame row.
///
/// Accepted and rejected records keep the frame's row order. Rejected rows
/// carry their 1-based row number and one reason per missing field.
pub fn build_records(
    frame: &Frame,
    mapping: &ColumnMapping,
    roles: &RoleVocabulary,
) -> ResultSet {
    let mut result = ResultSet::default();

    for (idx, row) in frame.rows.iter().enumerate() {
        let number = idx + 1;
        match candidate_from_row(row, mapping, roles).validate() {
            Ok(record) => result.accepted.push(record),
            Err((record, reasons)) => {
                let missing: Vec<&str> = reasons.iter().map(|r| r.field.as_str()).collect();
                debug!(row = number, missing = ?missing, "row rejected");
                result.rejected.push(RejectedRecord {
                    row: number,
                    record,
                    reasons,
                });
            }
        }
    }

    result
}

fn candidate_from_row(
    row: &Row,
    mapping: &ColumnMapping,
    roles: &RoleVocabulary,
) -> CandidateRecord {
    let text = |field: CanonicalField| {
        mapping
            .column_for(field)
            .and_then(|column| row.text(column))
    };

    CandidateRecord {
        full_name: text(CanonicalField::FullName),
        email: text(CanonicalField::Email),
        national_id: text(CanonicalField::NationalId),
        role: text(CanonicalField::Role).and_then(|label| roles.normalize(&label)),
        birth_date: mapping
            .column_for(CanonicalField::BirthDate)
            .and_then(|column| row.get(column))
            .and_then(birth_date_from_cell),
    }
}

/// Native date cells are used as-is; everything else goes through the text parser.
fn birth_date_from_cell(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(date) => Some(*date),
        CellValue::DateTime(datetime) => Some(datetime.date()),
        other => parse_birth_date(&other.as_text()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use roster_map::{SynonymCatalog, resolve};
    use roster_model::Role;

    const HEADERS: [&str; 5] = ["Nome", "Email", "CPF", "Tipo", "Nascimento"];

    fn frame(rows: &[[Option<&str>; 5]]) -> Frame {
        let mut frame = Frame::new(HEADERS.iter().map(ToString::to_string).collect());
        for values in rows {
            let row: Row = HEADERS
                .iter()
                .zip(values)
                .map(|(header, value)| (*header, CellValue::from(*value)))
                .collect();
            frame.push_row(row);
        }
        frame
    }

    fn build(frame: &Frame) -> ResultSet {
        let mapping = resolve(&frame.columns, &SynonymCatalog::default());
        build_records(frame, &mapping, &RoleVocabulary::default())
    }

    #[test]
    fn complete_row_is_accepted() {
        let frame = frame(&[[
            Some(" Ana Silva "),
            Some("ana@x.com"),
            Some("12345678900"),
            Some("Aluno"),
            Some("15/03/2000"),
        ]]);
        let result = build(&frame);

        assert!(result.rejected.is_empty());
        let record = &result.accepted[0];
        assert_eq!(record.full_name, "Ana Silva");
        assert_eq!(record.role, Role::Student);
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(2000, 3, 15).unwrap());
    }

    #[test]
    fn invalid_values_are_reported_per_field() {
        let frame = frame(&[
            [Some("Ana"), Some("a@x.com"), Some("1"), Some("gerente"), Some("ontem")],
            [Some("Bia"), Some("b@x.com"), Some("2"), Some("professor"), Some("2001-02-03")],
        ]);
        let result = build(&frame);

        assert_eq!(result.accepted.len(), 1);
        assert_eq!(result.accepted[0].full_name, "Bia");
        let rejected = &result.rejected[0];
        assert_eq!(rejected.row, 1);
        let reasons: Vec<String> = rejected.reasons.iter().map(ToString::to_string).collect();
        assert_eq!(
            reasons,
            vec![
                "Field 'role' missing or invalid",
                "Field 'birthDate' missing or invalid"
            ]
        );
    }

    #[test]
    fn unresolved_column_rejects_every_row() {
        let mut frame = Frame::new(vec!["Nome".to_string()]);
        frame.push_row([("Nome", CellValue::from("Ana"))].into_iter().collect());
        let result = build(&frame);

        assert!(result.accepted.is_empty());
        assert_eq!(result.rejected[0].reasons.len(), 4);
    }

    #[test]
    fn native_date_cells_skip_text_parsing() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(birth_date_from_cell(&CellValue::Date(date)), Some(date));
        assert_eq!(
            birth_date_from_cell(&CellValue::DateTime(date.and_hms_opt(10, 0, 0).unwrap())),
            Some(date)
        );
        assert_eq!(birth_date_from_cell(&CellValue::Missing), None);
    }

    fn optional(value: &'static str) -> impl Strategy<Value = Option<&'static str>> {
        prop_oneof![Just(None), Just(Some("")), Just(Some(value))]
    }

    proptest! {
        #[test]
        fn partition_is_consistent(
            rows in proptest::collection::vec(
                (
                    optional("Ana"),
                    optional("ana@x.com"),
                    optional("123"),
                    prop_oneof![Just(None), Just(Some("aluno")), Just(Some("gerente"))],
                    prop_oneof![Just(None), Just(Some("15/03/2000")), Just(Some("xx"))],
                ),
                0..8,
            )
        ) {
            let rows: Vec<[Option<&str>; 5]> = rows
                .into_iter()
                .map(|(a, b, c, d, e)| [a, b, c, d, e])
                .collect();
            let frame = frame(&rows);
            let result = build(&frame);

            prop_assert_eq!(result.total(), rows.len());
            let mut previous = 0;
            for rejected in &result.rejected {
                prop_assert!(rejected.row > previous);
                previous = rejected.row;
                prop_assert!(!rejected.reasons.is_empty());
                for reason in &rejected.reasons {
                    prop_assert!(!rejected.record.has(reason.field));
                }
            }
        }
    }
}
