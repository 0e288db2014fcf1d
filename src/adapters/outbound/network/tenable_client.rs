use crate::ports::outbound::ScannerGateway;
use crate::scan_simulation::domain::{ApiCredentials, ConnectionInfo, ImportStats};
use crate::shared::error::TenableSimError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Simulated Tenable connector
///
/// Stands in for the real Tenable.io / Tenable.sc client: it validates the
/// credentials and endpoint the way the real connector would, waits for a
/// simulated handshake, then fabricates its responses. No request ever
/// leaves the process.
pub struct SimulatedTenableClient {
    handshake_delay: Duration,
}

impl SimulatedTenableClient {
    /// Version string the simulated connector reports.
    const CONNECTOR_VERSION: &'static str = "v2.1.4";
    /// Simulated handshake latency.
    const HANDSHAKE_DELAY_MS: u64 = 250;

    /// Fabricated import statistics; the platform reports the same figures
    /// for every processed upload.
    const RECORDS_IMPORTED: u64 = 1245;
    const UNIQUE_VULNERABILITIES: u64 = 89;
    const NEW_ASSETS: u64 = 12;
    const CRITICAL_DETECTED: u64 = 3;

    pub fn new() -> Self {
        Self {
            handshake_delay: Duration::from_millis(Self::HANDSHAKE_DELAY_MS),
        }
    }

    /// Overrides the handshake delay (tests use Duration::ZERO).
    pub fn with_handshake_delay(mut self, handshake_delay: Duration) -> Self {
        self.handshake_delay = handshake_delay;
        self
    }

    /// Validates the endpoint URL without dispatching anything to it.
    fn validate_endpoint(url: &str) -> Result<reqwest::Url> {
        let endpoint =
            reqwest::Url::parse(url).map_err(|e| TenableSimError::ConnectionError {
                url: url.to_string(),
                details: format!("invalid endpoint URL: {}", e),
            })?;

        if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
            return Err(TenableSimError::ConnectionError {
                url: url.to_string(),
                details: format!("unsupported URL scheme '{}'", endpoint.scheme()),
            }
            .into());
        }

        Ok(endpoint)
    }

    async fn simulate_latency(&self) {
        if !self.handshake_delay.is_zero() {
            tokio::time::sleep(self.handshake_delay).await;
        }
    }
}

impl Default for SimulatedTenableClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScannerGateway for SimulatedTenableClient {
    async fn connect(&self, credentials: &ApiCredentials) -> Result<ConnectionInfo> {
        if credentials.access_key.trim().is_empty() {
            return Err(TenableSimError::ConnectionError {
                url: credentials.url.clone(),
                details: "access key is empty".to_string(),
            }
            .into());
        }
        if credentials.secret_key.trim().is_empty() {
            return Err(TenableSimError::ConnectionError {
                url: credentials.url.clone(),
                details: "secret key is empty".to_string(),
            }
            .into());
        }

        let endpoint = Self::validate_endpoint(&credentials.url)?;

        self.simulate_latency().await;

        Ok(ConnectionInfo {
            endpoint: endpoint.to_string(),
            connector_version: Self::CONNECTOR_VERSION.to_string(),
            connected: true,
        })
    }

    async fn import_summary(&self, file_name: &str, size_bytes: u64) -> Result<ImportStats> {
        self.simulate_latency().await;

        Ok(ImportStats {
            file_name: file_name.to_string(),
            size_bytes,
            records_imported: Self::RECORDS_IMPORTED,
            unique_vulnerabilities: Self::UNIQUE_VULNERABILITIES,
            new_assets: Self::NEW_ASSETS,
            critical_detected: Self::CRITICAL_DETECTED,
            imported_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
