//! Per-row records and the accepted/rejected partition.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CanonicalField, Role};

/// One row's extracted and normalized values, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub national_id: Option<String>,
    pub role: Option<Role>,
    pub birth_date: Option<NaiveDate>,
}

impl CandidateRecord {
    /// Whether the field holds a value.
    pub fn has(&self, field: CanonicalField) -> bool {
        match field {
            CanonicalField::FullName => self.full_name.is_some(),
            CanonicalField::Email => self.email.is_some(),
            CanonicalField::NationalId => self.national_id.is_some(),
            CanonicalField::Role => self.role.is_some(),
            CanonicalField::BirthDate => self.birth_date.is_some(),
        }
    }

    /// Fields without a value, in resolution order.
    pub fn missing_fields(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Promotes the candidate to a complete record, or explains why it cannot be.
    pub fn validate(self) -> Result<UserRecord, (Self, Vec<RejectionReason>)> {
        match self {
            Self {
                full_name: Some(full_name),
                email: Some(email),
                national_id: Some(national_id),
                role: Some(role),
                birth_date: Some(birth_date),
            } => Ok(UserRecord {
                full_name,
                email,
                national_id,
                role,
                birth_date,
            }),
            incomplete => {
                let reasons = incomplete
                    .missing_fields()
                    .into_iter()
                    .map(RejectionReason::missing)
                    .collect();
                Err((incomplete, reasons))
            }
        }
    }
}

/// A record with every canonical field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub full_name: String,
    pub email: String,
    pub national_id: String,
    pub role: Role,
    pub birth_date: NaiveDate,
}

/// Why a row was rejected. Serialized as its human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionReason {
    pub field: CanonicalField,
}

impl RejectionReason {
    pub fn missing(field: CanonicalField) -> Self {
        Self { field }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}' missing or invalid", self.field)
    }
}

impl Serialize for RejectionReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A rejected row together with the reasons it failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// 1-based position among the frame's data rows.
    ///
    /// Workbook loading drops fully empty sheet rows, so for spreadsheets
    /// this counts non-empty data rows, not sheet row numbers.
    pub row: usize,
    pub record: CandidateRecord,
    pub reasons: Vec<RejectionReason>,
}

/// Accepted and rejected rows of one conversion, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub accepted: Vec<UserRecord>,
    pub rejected: Vec<RejectedRecord>,
}

impl ResultSet {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CandidateRecord {
        CandidateRecord {
            full_name: Some("Ana Silva".to_string()),
            email: Some("ana@x.com".to_string()),
            national_id: Some("12345678900".to_string()),
            role: Some(Role::Student),
            birth_date: NaiveDate::from_ymd_opt(2000, 3, 15),
        }
    }

    #[test]
    fn complete_candidate_validates() {
        let record = complete().validate().unwrap();
        assert_eq!(record.full_name, "Ana Silva");
        assert_eq!(record.role, Role::Student);
    }

    #[test]
    fn incomplete_candidate_lists_missing_fields_in_order() {
        let candidate = CandidateRecord {
            role: None,
            full_name: None,
            ..complete()
        };
        let (record, reasons) = candidate.validate().unwrap_err();
        assert_eq!(record.email.as_deref(), Some("ana@x.com"));
        let messages: Vec<String> = reasons.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Field 'fullName' missing or invalid",
                "Field 'role' missing or invalid"
            ]
        );
    }

    #[test]
    fn user_record_serializes_canonical_shape() {
        let json = serde_json::to_value(complete().validate().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Ana Silva",
                "email": "ana@x.com",
                "nationalId": "12345678900",
                "role": "STUDENT",
                "birthDate": "2000-03-15"
            })
        );
    }

    #[test]
    fn rejected_record_serializes_reasons_as_text() {
        let rejected = RejectedRecord {
            row: 2,
            record: CandidateRecord::default(),
            reasons: vec![RejectionReason::missing(CanonicalField::Email)],
        };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["reasons"][0], "Field 'email' missing or invalid");
        assert_eq!(json["record"]["fullName"], serde_json::Value::Null);
    }
}
