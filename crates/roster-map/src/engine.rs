//! Column resolver.

use std::collections::BTreeSet;

use roster_model::CanonicalField;
use roster_normalize::normalize_key;
use tracing::{debug, info};

use crate::catalog::SynonymCatalog;
use crate::types::ColumnMapping;

/// Assigns physical columns to canonical fields using a synonym catalog.
///
/// Fields are resolved in [`CanonicalField::ALL`] order. For each field the
/// synonyms are tried in catalog order, and for each synonym the columns in
/// source order; the first unreserved column with an equal normalized key
/// wins and is reserved for the rest of the pass.
///
/// # Example
///
/// ```
/// use roster_map::{ColumnResolver, SynonymCatalog};
/// use roster_model::CanonicalField;
///
/// let resolver = ColumnResolver::new(&SynonymCatalog::default());
/// let columns = vec!["Nome Completo".to_string(), "E-mail".to_string()];
/// let mapping = resolver.resolve(&columns);
///
/// assert_eq!(mapping.column_for(CanonicalField::FullName), Some("Nome Completo"));
/// assert_eq!(mapping.column_for(CanonicalField::Email), Some("E-mail"));
/// assert_eq!(mapping.column_for(CanonicalField::Role), None);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    /// Normalized synonym keys per field, in resolution order. Empty keys are dropped.
    keys: Vec<(CanonicalField, Vec<String>)>,
}

impl ColumnResolver {
    pub fn new(catalog: &SynonymCatalog) -> Self {
        let keys = CanonicalField::ALL
            .into_iter()
            .map(|field| {
                let keys = catalog
                    .synonyms(field)
                    .iter()
                    .map(|synonym| normalize_key(synonym))
                    .filter(|key| !key.is_empty())
                    .collect();
                (field, keys)
            })
            .collect();
        Self { keys }
    }

    pub fn resolve(&self, columns: &[String]) -> ColumnMapping {
        let column_keys: Vec<String> = columns.iter().map(|c| normalize_key(c)).collect();
        let mut reserved: BTreeSet<usize> = BTreeSet::new();
        let mut mapping = ColumnMapping::new();

        for (field, synonyms) in &self.keys {
            let found = synonyms.iter().find_map(|synonym| {
                column_keys
                    .iter()
                    .enumerate()
                    .find(|(idx, key)| !reserved.contains(idx) && *key == synonym)
                    .map(|(idx, _)| idx)
            });

            match found {
                Some(idx) => {
                    reserved.insert(idx);
                    debug!(field = %field, column = %columns[idx], "resolved column");
                    mapping.assign(*field, columns[idx].clone());
                }
                None => info!(field = %field, "no column matches any synonym"),
            }
        }

        mapping
    }
}

/// Resolves `columns` against `catalog` in one call.
pub fn resolve(columns: &[String], catalog: &SynonymCatalog) -> ColumnMapping {
    ColumnResolver::new(catalog).resolve(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_portuguese_headers() {
        let columns = cols(&["Nome", "Email", "CPF", "Tipo", "Nascimento"]);
        let mapping = resolve(&columns, &SynonymCatalog::default());

        assert!(mapping.is_complete());
        assert_eq!(mapping.column_for(CanonicalField::NationalId), Some("CPF"));
        assert_eq!(mapping.column_for(CanonicalField::BirthDate), Some("Nascimento"));
    }

    #[test]
    fn matching_ignores_case_accents_and_punctuation() {
        let columns = cols(&["  FUNÇÃO ", "Data de Nascimento", "Tipo-Usuario"]);
        let mapping = resolve(&columns, &SynonymCatalog::default());

        // "tipo_usuario" is listed before "função".
        assert_eq!(mapping.column_for(CanonicalField::Role), Some("Tipo-Usuario"));
        assert_eq!(
            mapping.column_for(CanonicalField::BirthDate),
            Some("Data de Nascimento")
        );
    }

    #[test]
    fn earlier_synonym_wins_over_earlier_column() {
        let columns = cols(&["Contato", "Email"]);
        let mapping = resolve(&columns, &SynonymCatalog::default());
        assert_eq!(mapping.column_for(CanonicalField::Email), Some("Email"));
    }

    #[test]
    fn duplicate_headers_take_the_first() {
        let columns = cols(&["Nome", "nome"]);
        let mapping = resolve(&columns, &SynonymCatalog::default());
        assert_eq!(mapping.column_for(CanonicalField::FullName), Some("Nome"));
    }

    #[test]
    fn reserved_column_is_not_reused() {
        let mut catalog = SynonymCatalog::empty();
        catalog.push(CanonicalField::FullName, "id");
        catalog.push(CanonicalField::NationalId, "id");

        let mapping = resolve(&cols(&["ID"]), &catalog);
        assert_eq!(mapping.column_for(CanonicalField::FullName), Some("ID"));
        assert_eq!(mapping.column_for(CanonicalField::NationalId), None);
    }

    #[test]
    fn blank_keys_never_match() {
        let mut catalog = SynonymCatalog::empty();
        catalog.push(CanonicalField::Email, "---");

        let mapping = resolve(&cols(&["???", ""]), &catalog);
        assert!(mapping.is_empty());
    }
}
