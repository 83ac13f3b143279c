#![deny(unsafe_code)]

//! Column discovery: which physical column holds each canonical field.
//!
//! Matching is exact on normalized keys (see
//! [`normalize_key`](roster_normalize::normalize_key)); there is no fuzzy
//! scoring. The [`SynonymCatalog`] is plain data and can be extended from
//! configuration.

pub mod catalog;
pub mod engine;
pub mod types;

pub use catalog::SynonymCatalog;
pub use engine::{ColumnResolver, resolve};
pub use types::ColumnMapping;
