use crate::ports::outbound::{ExportArtifacts, SnapshotExporter};
use crate::scan_simulation::domain::ScanSnapshot;
use crate::shared::error::TenableSimError;
use crate::shared::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Column headers of the asset table, in serialization order.
const ASSET_HEADERS: [&str; 6] = [
    "asset_id",
    "ip_address",
    "hostname",
    "operating_system",
    "last_scanned",
    "status",
];

/// Column headers of the findings table, in serialization order.
const FINDING_HEADERS: [&str; 8] = [
    "asset_id",
    "cve_id",
    "severity",
    "cvss_score",
    "plugin_id",
    "description",
    "discovery_date",
    "remediated",
];

/// CsvExportWriter adapter for persisting snapshots as CSV/JSON artifacts
///
/// Implements the SnapshotExporter port: one CSV per table plus a JSON
/// metadata record, all timestamp-qualified. Export is best-effort - on a
/// mid-export failure, artifacts already written stay on disk.
pub struct CsvExportWriter;

impl CsvExportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serializes rows to a CSV file with a header line.
    ///
    /// The csv writer only emits headers alongside the first record, so an
    /// empty table gets its header written explicitly.
    fn write_table<T: Serialize>(path: &Path, rows: &[T], headers: &[&str]) -> Result<()> {
        let map_err = |e: csv::Error| TenableSimError::ExportError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        let mut writer = csv::Writer::from_path(path).map_err(map_err)?;
        if rows.is_empty() {
            writer.write_record(headers).map_err(map_err)?;
        } else {
            for row in rows {
                writer.serialize(row).map_err(map_err)?;
            }
        }
        writer.flush().map_err(|e| TenableSimError::ExportError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for CsvExportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotExporter for CsvExportWriter {
    fn export(&self, snapshot: &ScanSnapshot, output_dir: &Path) -> Result<ExportArtifacts> {
        fs::create_dir_all(output_dir).map_err(|e| TenableSimError::ExportError {
            path: output_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");

        let assets_file = output_dir.join(format!("tenable_assets_{}.csv", timestamp));
        Self::write_table(&assets_file, snapshot.assets(), &ASSET_HEADERS)?;

        let vulnerabilities_file =
            output_dir.join(format!("tenable_vulnerabilities_{}.csv", timestamp));
        Self::write_table(
            &vulnerabilities_file,
            snapshot.vulnerabilities(),
            &FINDING_HEADERS,
        )?;

        let metadata_file = output_dir.join(format!("tenable_metadata_{}.json", timestamp));
        let metadata_json = serde_json::to_string_pretty(snapshot.metadata())?;
        fs::write(&metadata_file, metadata_json).map_err(|e| TenableSimError::ExportError {
            path: metadata_file.clone(),
            details: e.to_string(),
        })?;

        Ok(ExportArtifacts {
            assets_file,
            vulnerabilities_file,
            metadata_file,
        })
    }
}
