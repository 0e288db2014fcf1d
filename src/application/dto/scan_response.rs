use crate::scan_simulation::domain::{ConnectionInfo, ScanReport, ScanSnapshot};

/// ScanResponse - Internal response DTO from the scan simulation use case
///
/// Contains the rich structures produced by the use case, which adapters
/// then format into the requested output.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// The generated snapshot (assets, findings, metadata)
    pub snapshot: ScanSnapshot,
    /// The analysis report derived from the snapshot
    pub report: ScanReport,
    /// Connection details when a handshake was requested
    pub connection: Option<ConnectionInfo>,
}

impl ScanResponse {
    pub fn new(
        snapshot: ScanSnapshot,
        report: ScanReport,
        connection: Option<ConnectionInfo>,
    ) -> Self {
        Self {
            snapshot,
            report,
            connection,
        }
    }
}
