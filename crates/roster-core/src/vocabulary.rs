//! User-supplied vocabulary overrides.
//!
//! The file is JSON:
//!
//! ```json
//! {
//!   "fields": { "fullName": ["nome do participante"], "role": ["vinculo"] },
//!   "roles": { "student": ["bolsista"], "instructor": ["tutor"] }
//! }
//! ```
//!
//! Both sections are optional. Labels are appended after the built-in ones,
//! so built-ins keep precedence.

use std::collections::BTreeMap;
use std::path::Path;

use roster_model::CanonicalField;
use roster_normalize::RoleVocabulary;
use serde::Deserialize;
use tracing::debug;

use crate::error::VocabularyError;

/// Extra header synonyms and role labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyOverrides {
    #[serde(default)]
    pub fields: BTreeMap<CanonicalField, Vec<String>>,
    #[serde(default = "empty_roles")]
    pub roles: RoleVocabulary,
}

impl Default for VocabularyOverrides {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            roles: empty_roles(),
        }
    }
}

fn empty_roles() -> RoleVocabulary {
    RoleVocabulary {
        student: Vec::new(),
        instructor: Vec::new(),
    }
}

/// Reads and parses an override file.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyOverrides, VocabularyError> {
    let text = std::fs::read_to_string(path).map_err(|e| VocabularyError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let overrides: VocabularyOverrides =
        serde_json::from_str(&text).map_err(|e| VocabularyError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(
        path = %path.display(),
        fields = overrides.fields.values().map(Vec::len).sum::<usize>(),
        roles = overrides.roles.student.len() + overrides.roles.instructor.len(),
        "loaded vocabulary overrides"
    );
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_both_sections() {
        let file = file_with(
            r#"{"fields": {"nationalId": ["rg"]}, "roles": {"instructor": ["tutor"]}}"#,
        );
        let overrides = load_vocabulary(file.path()).unwrap();

        assert_eq!(
            overrides.fields.get(&CanonicalField::NationalId),
            Some(&vec!["rg".to_string()])
        );
        assert!(overrides.roles.student.is_empty());
        assert_eq!(overrides.roles.instructor, vec!["tutor"]);
    }

    #[test]
    fn missing_sections_are_empty() {
        let overrides = load_vocabulary(file_with("{}").path()).unwrap();
        assert_eq!(overrides, VocabularyOverrides::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let file = file_with(r#"{"fields": {"phone": ["tel"]}}"#);
        assert!(matches!(
            load_vocabulary(file.path()),
            Err(VocabularyError::Parse { .. })
        ));

        let file = file_with(r#"{"synonyms": {}}"#);
        assert!(load_vocabulary(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            load_vocabulary(Path::new("/nonexistent/vocabulary.json")),
            Err(VocabularyError::Read { .. })
        ));
    }
}
