use serde::{Deserialize, Serialize};

/// Metadata describing one simulated scan run.
///
/// The counts are populated from the generated tables, never recomputed
/// through a separate path, so they always match the rows they describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    /// Unique identifier for this scan run (urn:uuid form)
    pub scan_id: String,
    /// Wall-clock timestamp of the scan (YYYY-MM-DD HH:MM:SS)
    pub scan_date: String,
    /// Number of assets in the snapshot
    pub total_assets: usize,
    /// Number of findings across all assets
    pub total_vulnerabilities: usize,
    /// Number of findings with Critical severity
    pub critical_count: usize,
}
