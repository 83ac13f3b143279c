//! Value normalizers.
//!
//! - [`normalize_key`]: case, accent, and punctuation-insensitive keys for
//!   header matching
//! - [`normalize_role`]: role labels to [`Role`](roster_model::Role)
//! - [`normalize_birth_date`]: heterogeneous date strings to `YYYY-MM-DD`

pub mod date;
pub mod role;
pub mod text;

pub use date::{normalize_birth_date, parse_birth_date};
pub use role::{RoleVocabulary, normalize_role};
pub use text::{fold_diacritics, normalize_key};
