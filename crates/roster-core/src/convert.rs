//! The file conversion pipeline.

use std::path::{Path, PathBuf};

use roster_ingest::load_frame;
use roster_map::{ColumnMapping, ColumnResolver};
use roster_model::{ResultSet, SkippedRecord};
use serde::Serialize;
use tracing::{info, info_span};

use crate::artifact::write_artifact;
use crate::error::Result;
use crate::options::ConvertOptions;
use crate::records::build_records;

/// Outcome of converting one file.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub result: ResultSet,
    /// Columns chosen for each canonical field.
    pub mapping: ColumnMapping,
    /// Source records the adapter dropped (malformed insert statements).
    pub skipped: Vec<SkippedRecord>,
    /// Where the accepted records were written, if anywhere.
    pub artifact: Option<PathBuf>,
}

/// Converts a people file into accepted and rejected records.
///
/// Steps: load the frame by extension, resolve columns against the catalog,
/// build and validate records, then write the accepted set to the configured
/// artifact target.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let span = info_span!("convert", file = %path.display());
    let _guard = span.enter();

    let mut frame = load_frame(path)?;
    let mapping = ColumnResolver::new(&options.catalog).resolve(&frame.columns);
    let result = build_records(&frame, &mapping, &options.roles);
    let skipped = std::mem::take(&mut frame.skipped);

    let artifact = match options.artifact.resolve() {
        Some(target) => {
            write_artifact(&target, &result.accepted)?;
            Some(target)
        }
        None => None,
    };

    info!(
        rows = frame.height(),
        accepted = result.accepted.len(),
        rejected = result.rejected.len(),
        skipped = skipped.len(),
        "conversion complete"
    );

    Ok(Conversion {
        result,
        mapping,
        skipped,
        artifact,
    })
}
