use super::*;
use crate::scan_simulation::domain::{ApiCredentials, ImportStats};
use crate::scan_simulation::services::DEFAULT_SEED;
use std::sync::Mutex;

struct MockScannerGateway {
    connect_calls: Mutex<usize>,
}

impl MockScannerGateway {
    fn new() -> Self {
        Self {
            connect_calls: Mutex::new(0),
        }
    }

    fn connect_count(&self) -> usize {
        *self.connect_calls.lock().unwrap()
    }
}

#[async_trait]
impl ScannerGateway for &MockScannerGateway {
    async fn connect(&self, credentials: &ApiCredentials) -> Result<ConnectionInfo> {
        *self.connect_calls.lock().unwrap() += 1;
        Ok(ConnectionInfo {
            endpoint: credentials.url.clone(),
            connector_version: "v0.0.0-test".to_string(),
            connected: true,
        })
    }

    async fn import_summary(&self, file_name: &str, size_bytes: u64) -> Result<ImportStats> {
        Ok(ImportStats {
            file_name: file_name.to_string(),
            size_bytes,
            records_imported: 1,
            unique_vulnerabilities: 1,
            new_assets: 1,
            critical_detected: 0,
            imported_at: "2024-04-15 10:30:00".to_string(),
        })
    }
}

struct MockProgressReporter {
    messages: Mutex<Vec<String>>,
}

impl MockProgressReporter {
    fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn request(num_assets: u32, credentials: Option<ApiCredentials>) -> ScanRequest {
    ScanRequest::new(30, num_assets, DEFAULT_SEED, credentials)
}

fn credentials() -> ApiCredentials {
    ApiCredentials::new(
        "access".to_string(),
        "secret".to_string(),
        "https://cloud.tenable.com".to_string(),
    )
}

#[tokio::test]
async fn test_execute_offline_happy_path() {
    let reporter = MockProgressReporter::new();
    let use_case: SimulateScanUseCase<(), _> = SimulateScanUseCase::new(None, &reporter);

    let response = use_case.execute(request(10, None)).await.unwrap();

    assert_eq!(response.snapshot.assets().len(), 10);
    assert_eq!(response.report.summary.total_assets, 10);
    assert!(response.connection.is_none());
    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.contains("Simulating Tenable scan")));
}

#[tokio::test]
async fn test_execute_rejects_zero_assets() {
    let reporter = MockProgressReporter::new();
    let use_case: SimulateScanUseCase<(), _> = SimulateScanUseCase::new(None, &reporter);

    let result = use_case.execute(request(0, None)).await;

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("num_assets"));
}

#[tokio::test]
async fn test_execute_with_credentials_runs_handshake() {
    let gateway = MockScannerGateway::new();
    let reporter = MockProgressReporter::new();
    let use_case = SimulateScanUseCase::new(Some(&gateway), &reporter);

    let response = use_case
        .execute(request(5, Some(credentials())))
        .await
        .unwrap();

    assert_eq!(gateway.connect_count(), 1);
    let connection = response.connection.unwrap();
    assert!(connection.connected);
    assert_eq!(connection.endpoint, "https://cloud.tenable.com");
}

#[tokio::test]
async fn test_execute_credentials_without_gateway_stays_offline() {
    let reporter = MockProgressReporter::new();
    let use_case: SimulateScanUseCase<(), _> = SimulateScanUseCase::new(None, &reporter);

    let response = use_case
        .execute(request(5, Some(credentials())))
        .await
        .unwrap();

    assert!(response.connection.is_none());
}

#[tokio::test]
async fn test_inbound_port_delegates_to_execute() {
    let reporter = MockProgressReporter::new();
    let use_case: SimulateScanUseCase<(), _> = SimulateScanUseCase::new(None, &reporter);
    let port: &dyn ScanSimulationPort = &use_case;

    let response = port.simulate(request(3, None)).await.unwrap();

    assert_eq!(response.snapshot.assets().len(), 3);
}
