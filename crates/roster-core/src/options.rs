//! Per-call conversion settings.

use std::path::PathBuf;

use roster_map::SynonymCatalog;
use roster_normalize::RoleVocabulary;
use uuid::Uuid;

use crate::vocabulary::VocabularyOverrides;

/// Where the accepted records are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ArtifactTarget {
    /// Nothing is written.
    #[default]
    Disabled,
    /// Write to exactly this path, replacing any existing file.
    Path(PathBuf),
    /// Write a fresh `converted-<uuid>.json` inside this directory.
    UniqueIn(PathBuf),
}

impl ArtifactTarget {
    /// The concrete file to write, or `None` when disabled.
    ///
    /// Each call for [`ArtifactTarget::UniqueIn`] yields a new name.
    pub fn resolve(&self) -> Option<PathBuf> {
        match self {
            Self::Disabled => None,
            Self::Path(path) => Some(path.clone()),
            Self::UniqueIn(dir) => Some(dir.join(format!("converted-{}.json", Uuid::new_v4()))),
        }
    }
}

/// Settings for one conversion: vocabularies and artifact target.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub catalog: SynonymCatalog,
    pub roles: RoleVocabulary,
    pub artifact: ArtifactTarget,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the synonym catalog.
    pub fn with_catalog(mut self, catalog: SynonymCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the role vocabulary.
    pub fn with_roles(mut self, roles: RoleVocabulary) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_artifact(mut self, artifact: ArtifactTarget) -> Self {
        self.artifact = artifact;
        self
    }

    /// Appends override labels after the current synonyms and role labels.
    pub fn with_vocabulary(mut self, overrides: VocabularyOverrides) -> Self {
        self.catalog.extend(overrides.fields);
        self.roles.extend(overrides.roles);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_targets_differ_per_call() {
        let target = ArtifactTarget::UniqueIn(PathBuf::from("out"));
        let first = target.resolve().unwrap();
        let second = target.resolve().unwrap();

        assert_ne!(first, second);
        assert_eq!(first.parent(), Some(std::path::Path::new("out")));
        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("converted-") && name.ends_with(".json"));
    }

    #[test]
    fn default_writes_nothing() {
        assert_eq!(ConvertOptions::default().artifact.resolve(), None);
        let fixed = ArtifactTarget::Path(PathBuf::from("a/b.json"));
        assert_eq!(fixed.resolve(), Some(PathBuf::from("a/b.json")));
    }
}
