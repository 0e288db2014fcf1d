/// Credentials for a Tenable API connection.
///
/// Both keys are required; the URL defaults to the cloud endpoint at the
/// CLI layer.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub url: String,
}

impl ApiCredentials {
    pub fn new(access_key: String, secret_key: String, url: String) -> Self {
        Self {
            access_key,
            secret_key,
            url,
        }
    }
}

/// Result of a (simulated) connection handshake with the scanner platform.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionInfo {
    /// Normalized endpoint the connector attached to
    pub endpoint: String,
    /// Version string reported by the connector
    pub connector_version: String,
    /// Whether the handshake completed
    pub connected: bool,
}

/// Fabricated statistics for one processed import.
///
/// The simulated platform reports fixed figures for every upload; the file
/// name and timestamp are the only per-import values.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportStats {
    /// Name of the processed file
    pub file_name: String,
    /// Size of the processed file in bytes
    pub size_bytes: u64,
    /// Records ingested from the file
    pub records_imported: u64,
    /// Distinct vulnerabilities among the ingested records
    pub unique_vulnerabilities: u64,
    /// Assets seen for the first time
    pub new_assets: u64,
    /// Critical findings among the ingested records
    pub critical_detected: u64,
    /// Wall-clock timestamp of the import (YYYY-MM-DD HH:MM:SS)
    pub imported_at: String,
}
