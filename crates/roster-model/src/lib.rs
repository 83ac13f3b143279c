#![deny(unsafe_code)]

//! Data model shared by the roster crates.
//!
//! Every adapter produces a [`Frame`], the resolver maps its columns onto
//! [`CanonicalField`]s, and the record builder turns rows into a
//! [`ResultSet`].

pub mod cell;
pub mod field;
pub mod frame;
pub mod record;

pub use cell::{CellValue, format_numeric};
pub use field::{CanonicalField, Role};
pub use frame::{Frame, Row, SkippedRecord};
pub use record::{CandidateRecord, RejectedRecord, RejectionReason, ResultSet, UserRecord};
