//! Role label normalization.

use std::sync::LazyLock;

use roster_model::Role;
use serde::{Deserialize, Serialize};

const STUDENT_LABELS: &[&str] = &[
    "aluno",
    "estudante",
    "discente",
    "aprendiz",
    "student",
    "pupil",
    "learner",
];

const INSTRUCTOR_LABELS: &[&str] = &[
    "professor",
    "docente",
    "instrutor",
    "educador",
    "instructor",
    "teacher",
    "lecturer",
];

static DEFAULT_VOCABULARY: LazyLock<RoleVocabulary> = LazyLock::new(RoleVocabulary::default);

/// Lower-case label sets recognized for each role.
///
/// Labels are compared after trimming and lower-casing the input; diacritics
/// are significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleVocabulary {
    #[serde(default)]
    pub student: Vec<String>,
    #[serde(default)]
    pub instructor: Vec<String>,
}

impl Default for RoleVocabulary {
    fn default() -> Self {
        Self {
            student: STUDENT_LABELS.iter().map(ToString::to_string).collect(),
            instructor: INSTRUCTOR_LABELS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl RoleVocabulary {
    /// Appends labels from `other` after the existing ones.
    pub fn extend(&mut self, other: RoleVocabulary) {
        self.student
            .extend(other.student.into_iter().map(|label| label.trim().to_lowercase()));
        self.instructor
            .extend(other.instructor.into_iter().map(|label| label.trim().to_lowercase()));
    }

    /// Maps a free-form label to a role, `None` when it is in neither set.
    pub fn normalize(&self, value: &str) -> Option<Role> {
        let label = value.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }
        if self.student.iter().any(|s| *s == label) {
            Some(Role::Student)
        } else if self.instructor.iter().any(|s| *s == label) {
            Some(Role::Instructor)
        } else {
            None
        }
    }
}

/// Normalizes a role label with the built-in vocabulary.
pub fn normalize_role(value: &str) -> Option<Role> {
    DEFAULT_VOCABULARY.normalize(value)
}
