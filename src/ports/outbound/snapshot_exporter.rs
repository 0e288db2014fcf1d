use crate::scan_simulation::domain::ScanSnapshot;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Paths of the three artifacts produced by one snapshot export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifacts {
    pub assets_file: PathBuf,
    pub vulnerabilities_file: PathBuf,
    pub metadata_file: PathBuf,
}

/// SnapshotExporter port for persisting snapshots as files
///
/// This port abstracts the export boundary: an asset table, a findings
/// table and a metadata record written to a caller-specified directory.
pub trait SnapshotExporter {
    /// Writes the snapshot's tables and metadata to `output_dir`
    ///
    /// The directory is created if absent. Export is best-effort: on
    /// failure, artifacts already written remain on disk.
    ///
    /// # Returns
    /// The paths of the three written artifacts
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or any
    /// artifact cannot be written
    fn export(&self, snapshot: &ScanSnapshot, output_dir: &Path) -> Result<ExportArtifacts>;
}
