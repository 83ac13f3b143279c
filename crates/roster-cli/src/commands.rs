//! The convert command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use roster_core::{ArtifactTarget, Conversion, ConvertOptions, convert_file, load_vocabulary};
use roster_model::RejectedRecord;
use tracing::trace;

use crate::logging::redact_value;

/// Artifact written when no output option is given.
pub const DEFAULT_ARTIFACT: &str = "converted_users.json";

/// Everything the convert command needs, independent of argument parsing.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub artifact: ArtifactTarget,
    pub vocabulary: Option<PathBuf>,
}

impl ConvertRequest {
    /// A request that writes the default artifact in the working directory.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            artifact: ArtifactTarget::Path(PathBuf::from(DEFAULT_ARTIFACT)),
            vocabulary: None,
        }
    }
}

pub fn run_convert(request: &ConvertRequest) -> Result<Conversion> {
    let mut options = ConvertOptions::default().with_artifact(request.artifact.clone());
    if let Some(path) = &request.vocabulary {
        let overrides = load_vocabulary(path)
            .with_context(|| format!("load vocabulary {}", path.display()))?;
        options = options.with_vocabulary(overrides);
    }

    let conversion = convert_file(&request.input, &options)?;
    for rejected in &conversion.result.rejected {
        trace_rejected(rejected);
    }
    Ok(conversion)
}

fn trace_rejected(rejected: &RejectedRecord) {
    let record = &rejected.record;
    trace!(
        row = rejected.row,
        full_name = redact_value(record.full_name.as_deref().unwrap_or_default()),
        email = redact_value(record.email.as_deref().unwrap_or_default()),
        national_id = redact_value(record.national_id.as_deref().unwrap_or_default()),
        reasons = rejected.reasons.len(),
        "rejected row values"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn vocabulary_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("turma.csv");
        fs::write(&input, "Nome\nAna\n").unwrap();

        let request = ConvertRequest {
            input,
            artifact: ArtifactTarget::Disabled,
            vocabulary: Some(dir.path().join("missing.json")),
        };
        let message = format!("{:#}", run_convert(&request).unwrap_err());

        assert!(message.starts_with("load vocabulary"));
        assert!(message.contains("missing.json"));
    }

    #[test]
    fn default_request_targets_fixed_artifact() {
        let request = ConvertRequest::new("turma.csv");
        assert_eq!(
            request.artifact,
            ArtifactTarget::Path(PathBuf::from(DEFAULT_ARTIFACT))
        );
        assert!(request.vocabulary.is_none());
    }
}
