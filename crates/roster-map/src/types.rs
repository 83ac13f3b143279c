//! Resolved field-to-column assignments.

use std::collections::BTreeMap;

use roster_model::CanonicalField;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Canonical field to physical column assignment for one file.
///
/// A column appears at most once. Serializes as an object with all five
/// fields, unresolved ones as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: BTreeMap<CanonicalField, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn assign(&mut self, field: CanonicalField, column: String) {
        self.columns.insert(field, column);
    }

    pub fn column_for(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    /// Fields without a column, in resolution order.
    pub fn unresolved(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.columns.len() == CanonicalField::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolved pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.columns
            .iter()
            .map(|(field, column)| (*field, column.as_str()))
    }
}

impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CanonicalField::ALL.len()))?;
        for field in CanonicalField::ALL {
            map.serialize_entry(field.as_str(), &self.column_for(field))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_every_field() {
        let mut mapping = ColumnMapping::new();
        mapping.assign(CanonicalField::Email, "E-mail".to_string());

        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(
            json,
            r#"{"fullName":null,"email":"E-mail","nationalId":null,"role":null,"birthDate":null}"#
        );
        assert_eq!(mapping.unresolved().len(), 4);
        assert!(!mapping.is_complete());
    }
}
