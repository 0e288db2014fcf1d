use crate::application::dto::{ScanRequest, ScanResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// ScanSimulationPort - Inbound port for the scan simulation use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger a simulated scan. It represents the application's public
/// API. Declared `?Send` because console adapters (progress bars) are not
/// required to be thread-safe.
#[async_trait(?Send)]
pub trait ScanSimulationPort {
    /// Runs a simulated scan and derives its analysis report
    ///
    /// # Arguments
    /// * `request` - Request parameters: window, asset count, seed and
    ///   optional connection credentials
    ///
    /// # Returns
    /// A response containing the generated snapshot and its report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scan parameters fail validation
    /// - The (simulated) connection handshake fails
    async fn simulate(&self, request: ScanRequest) -> Result<ScanResponse>;
}
