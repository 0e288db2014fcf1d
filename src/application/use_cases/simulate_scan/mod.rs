use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::inbound::ScanSimulationPort;
use crate::ports::outbound::{ProgressReporter, ScannerGateway};
use crate::scan_simulation::domain::ConnectionInfo;
use crate::scan_simulation::services::{ScanDataGenerator, ScanReporter};
use crate::shared::Result;
use async_trait::async_trait;

/// SimulateScanUseCase - Core use case for scan simulation
///
/// Orchestrates the simulation workflow using generic dependency injection
/// for all infrastructure dependencies: optional connection handshake,
/// snapshot generation, report derivation.
///
/// # Type Parameters
/// * `SG` - ScannerGateway implementation (optional)
/// * `PR` - ProgressReporter implementation
pub struct SimulateScanUseCase<SG, PR> {
    scanner_gateway: Option<SG>,
    progress_reporter: PR,
}

impl<SG, PR> SimulateScanUseCase<SG, PR>
where
    SG: ScannerGateway,
    PR: ProgressReporter,
{
    /// Creates a new SimulateScanUseCase with injected dependencies
    pub fn new(scanner_gateway: Option<SG>, progress_reporter: PR) -> Self {
        Self {
            scanner_gateway,
            progress_reporter,
        }
    }

    /// Executes the scan simulation use case
    ///
    /// # Arguments
    /// * `request` - Scan request containing window, asset count, seed and
    ///   optional credentials
    ///
    /// # Returns
    /// ScanResponse containing the snapshot, its report and the connection
    /// details when a handshake ran
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Connection handshake, when credentials were provided
        let connection = self.connect_if_requested(&request).await?;

        // Step 2: Generate the snapshot
        self.progress_reporter.report(&format!(
            "🛰️  Simulating Tenable scan: {} asset(s) over a {}-day window",
            request.num_assets, request.days_back
        ));

        let generator = ScanDataGenerator::new(request.seed);
        let snapshot = generator.simulate(request.days_back, request.num_assets)?;

        self.progress_reporter.report(&format!(
            "✅ Generated {} asset(s) and {} finding(s)",
            snapshot.assets().len(),
            snapshot.vulnerabilities().len()
        ));

        // Step 3: Derive the analysis report
        let report = ScanReporter::build(&snapshot);

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} critical finding(s) on {} asset(s), remediation rate {}",
            snapshot.metadata().critical_count,
            report.summary.critical_assets,
            report.summary.remediation_rate
        ));

        Ok(ScanResponse::new(snapshot, report, connection))
    }

    /// Runs the connection handshake when the request carries credentials
    /// and a gateway is configured.
    async fn connect_if_requested(&self, request: &ScanRequest) -> Result<Option<ConnectionInfo>> {
        let Some(credentials) = &request.credentials else {
            return Ok(None);
        };
        let Some(gateway) = &self.scanner_gateway else {
            // Credentials without a gateway - offline run, nothing to do
            return Ok(None);
        };

        self.progress_reporter
            .report(&format!("🔗 Connecting to {}...", credentials.url));

        let info = gateway.connect(credentials).await?;

        self.progress_reporter.report(&format!(
            "✅ Connected to {} (connector {})",
            info.endpoint, info.connector_version
        ));

        Ok(Some(info))
    }
}

#[async_trait(?Send)]
impl<SG, PR> ScanSimulationPort for SimulateScanUseCase<SG, PR>
where
    SG: ScannerGateway,
    PR: ProgressReporter,
{
    async fn simulate(&self, request: ScanRequest) -> Result<ScanResponse> {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests;
