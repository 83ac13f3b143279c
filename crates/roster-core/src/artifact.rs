//! Persisting accepted records.

use std::fs;
use std::path::Path;

use roster_model::UserRecord;
use tracing::info;

use crate::error::{ConvertError, Result};

/// Writes `records` as a pretty-printed JSON array (two-space indent, UTF-8,
/// non-ASCII kept as-is), creating parent directories as needed.
pub fn write_artifact(path: &Path, records: &[UserRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::ArtifactWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let mut json =
        serde_json::to_string_pretty(records).map_err(ConvertError::ArtifactSerialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| ConvertError::ArtifactWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), records = records.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roster_model::Role;
    use tempfile::TempDir;

    #[test]
    fn writes_nested_path_with_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/nested/converted.json");
        let records = vec![UserRecord {
            full_name: "João Ávila".to_string(),
            email: "joao@x.com".to_string(),
            national_id: "1".to_string(),
            role: Role::Instructor,
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 2).unwrap(),
        }];

        write_artifact(&path, &records).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.contains("\"fullName\": \"João Ávila\""));
        assert!(text.contains("\n    \"role\": \"INSTRUCTOR\""));
        assert!(text.contains("\"birthDate\": \"1980-01-02\""));
    }

    #[test]
    fn empty_set_is_an_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        write_artifact(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
