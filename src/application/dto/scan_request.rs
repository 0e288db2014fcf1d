use crate::scan_simulation::domain::ApiCredentials;

/// ScanRequest - Internal request DTO for the scan simulation use case
///
/// Carries all per-invocation state; the application holds no session or
/// process-wide state between requests.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Look-back window in days
    pub days_back: u32,
    /// Number of assets to simulate
    pub num_assets: u32,
    /// PRNG seed; the generator reseeds from this value on every call
    pub seed: u64,
    /// Optional API credentials; when present, a (simulated) connection
    /// handshake runs before generation
    pub credentials: Option<ApiCredentials>,
}

impl ScanRequest {
    pub fn new(
        days_back: u32,
        num_assets: u32,
        seed: u64,
        credentials: Option<ApiCredentials>,
    ) -> Self {
        Self {
            days_back,
            num_assets,
            seed,
            credentials,
        }
    }
}
