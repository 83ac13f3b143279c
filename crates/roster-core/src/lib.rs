#![deny(unsafe_code)]

//! Conversion pipeline: load a people file, resolve its columns, normalize
//! and validate every row, and persist the accepted records.
//!
//! ```ignore
//! use std::path::Path;
//! use roster_core::{ArtifactTarget, ConvertOptions, convert_file};
//!
//! let options = ConvertOptions::default()
//!     .with_artifact(ArtifactTarget::UniqueIn("out".into()));
//! let conversion = convert_file(Path::new("turma.xlsx"), &options)?;
//! println!("{} accepted", conversion.result.accepted.len());
//! ```

pub mod artifact;
pub mod convert;
pub mod error;
pub mod options;
pub mod records;
pub mod vocabulary;

pub use artifact::write_artifact;
pub use convert::{Conversion, convert_file};
pub use error::{ConvertError, ErrorKind, Result, VocabularyError};
pub use options::{ArtifactTarget, ConvertOptions};
pub use records::build_records;
pub use vocabulary::{VocabularyOverrides, load_vocabulary};
