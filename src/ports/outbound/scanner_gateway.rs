use crate::scan_simulation::domain::{ApiCredentials, ConnectionInfo, ImportStats};
use crate::shared::Result;
use async_trait::async_trait;

/// ScannerGateway port for talking to the scanning platform
///
/// This port abstracts the Tenable connector. The shipped adapter is a
/// simulation that validates inputs, performs a handshake delay and
/// fabricates its responses; a real connector would implement the same
/// surface.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync`.
#[async_trait]
pub trait ScannerGateway: Send + Sync {
    /// Establishes a connection to the platform
    ///
    /// # Arguments
    /// * `credentials` - Access key, secret key and endpoint URL
    ///
    /// # Returns
    /// Connection details reported by the connector
    ///
    /// # Errors
    /// Returns an error if the credentials are incomplete or the endpoint
    /// URL does not parse
    async fn connect(&self, credentials: &ApiCredentials) -> Result<ConnectionInfo>;

    /// Processes an uploaded export file and returns import statistics
    ///
    /// # Arguments
    /// * `file_name` - Name of the uploaded file
    /// * `size_bytes` - Size of the uploaded file in bytes
    ///
    /// # Returns
    /// Statistics for the processed import
    async fn import_summary(&self, file_name: &str, size_bytes: u64) -> Result<ImportStats>;
}

/// Unit implementation for offline runs that configure no gateway.
///
/// Lets callers write `SimulateScanUseCase::<(), _>::new(None, ...)`; the
/// methods are never reached because the use case skips the handshake when
/// no gateway is present.
#[async_trait]
impl ScannerGateway for () {
    async fn connect(&self, _credentials: &ApiCredentials) -> Result<ConnectionInfo> {
        anyhow::bail!("no scanner gateway configured")
    }

    async fn import_summary(&self, _file_name: &str, _size_bytes: u64) -> Result<ImportStats> {
        anyhow::bail!("no scanner gateway configured")
    }
}
