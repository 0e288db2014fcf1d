use async_trait::async_trait;
use tenable_sim::prelude::{
    ApiCredentials, ConnectionInfo, ImportStats, Result, ScannerGateway,
};

/// Mock scanner gateway with scriptable success or failure.
#[derive(Clone)]
pub struct MockScannerGateway {
    fail: bool,
}

impl MockScannerGateway {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn with_failure() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ScannerGateway for MockScannerGateway {
    async fn connect(&self, credentials: &ApiCredentials) -> Result<ConnectionInfo> {
        if self.fail {
            anyhow::bail!("mock gateway: connection refused");
        }
        Ok(ConnectionInfo {
            endpoint: credentials.url.clone(),
            connector_version: "v0.0.0-mock".to_string(),
            connected: true,
        })
    }

    async fn import_summary(&self, file_name: &str, size_bytes: u64) -> Result<ImportStats> {
        if self.fail {
            anyhow::bail!("mock gateway: import refused");
        }
        Ok(ImportStats {
            file_name: file_name.to_string(),
            size_bytes,
            records_imported: 1245,
            unique_vulnerabilities: 89,
            new_assets: 12,
            critical_detected: 3,
            imported_at: "2024-04-15 10:30:00".to_string(),
        })
    }
}
