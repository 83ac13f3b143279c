use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five semantic fields every imported record exposes.
///
/// Declaration order is significant: the column resolver walks fields in
/// this order, so an earlier field wins a contested column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    FullName,
    Email,
    NationalId,
    Role,
    BirthDate,
}

impl CanonicalField {
    /// All fields in resolution order.
    pub const ALL: [CanonicalField; 5] = [
        Self::FullName,
        Self::Email,
        Self::NationalId,
        Self::Role,
        Self::BirthDate,
    ];

    /// The serialized (camelCase) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::NationalId => "nationalId",
            Self::Role => "role",
            Self::BirthDate => "birthDate",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of roles a person can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Instructor => "INSTRUCTOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
