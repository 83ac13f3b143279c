//! Header labels recognized for each canonical field.

use std::collections::BTreeMap;

use roster_model::CanonicalField;
use serde::{Deserialize, Serialize};

const FULL_NAME: &[&str] = &[
    "nome",
    "nome completo",
    "nome_completo",
    "nomecompleto",
    "nome do aluno",
    "name",
    "full name",
    "student name",
];

const EMAIL: &[&str] = &["email", "e-mail", "contato", "mail", "email address"];

const NATIONAL_ID: &[&str] = &[
    "cpf",
    "documento",
    "doc",
    "cpf_usuario",
    "nationalId",
    "national id",
    "document",
];

const ROLE: &[&str] = &[
    "role",
    "tipo",
    "tipo_usuario",
    "perfil",
    "categoria",
    "função",
    "type",
    "user type",
];

const BIRTH_DATE: &[&str] = &[
    "data_nascimento",
    "nascimento",
    "data de nascimento",
    "dt_nascimento",
    "dn",
    "birthDate",
    "birth date",
    "date of birth",
    "dob",
];

/// Ordered header synonyms per canonical field.
///
/// Within a field, earlier synonyms take precedence over later ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymCatalog {
    entries: BTreeMap<CanonicalField, Vec<String>>,
}

impl Default for SynonymCatalog {
    fn default() -> Self {
        let entries = CanonicalField::ALL
            .into_iter()
            .map(|field| {
                let labels = builtin_labels(field)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                (field, labels)
            })
            .collect();
        Self { entries }
    }
}

fn builtin_labels(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::FullName => FULL_NAME,
        CanonicalField::Email => EMAIL,
        CanonicalField::NationalId => NATIONAL_ID,
        CanonicalField::Role => ROLE,
        CanonicalField::BirthDate => BIRTH_DATE,
    }
}

impl SynonymCatalog {
    /// A catalog with no synonyms at all; nothing resolves against it.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn synonyms(&self, field: CanonicalField) -> &[String] {
        self.entries.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Appends a synonym after the existing ones for `field`.
    pub fn push(&mut self, field: CanonicalField, label: impl Into<String>) {
        self.entries.entry(field).or_default().push(label.into());
    }

    /// Appends every label of `extra`, keeping existing synonyms first.
    pub fn extend(&mut self, extra: BTreeMap<CanonicalField, Vec<String>>) {
        for (field, labels) in extra {
            self.entries.entry(field).or_default().extend(labels);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &[String])> {
        self.entries
            .iter()
            .map(|(field, labels)| (*field, labels.as_slice()))
    }
}
