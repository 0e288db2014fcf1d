use crate::ports::outbound::{ProgressReporter, ScannerGateway};
use crate::scan_simulation::domain::ImportStats;
use crate::shared::error::TenableSimError;
use crate::shared::{security, Result};
use std::path::Path;
use std::time::Duration;

/// Number of progress ticks emitted while a file is "processed".
const PROCESSING_STEPS: usize = 100;

/// Delay between processing ticks; the platform this simulates takes about
/// two seconds per upload.
const STEP_DELAY: Duration = Duration::from_millis(20);

/// ImportDataUseCase - Simulated import of a Tenable export file
///
/// Validates the uploaded file, animates the processing phase, then asks
/// the gateway for the (fabricated) import statistics.
///
/// # Type Parameters
/// * `SG` - ScannerGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct ImportDataUseCase<SG, PR> {
    scanner_gateway: SG,
    progress_reporter: PR,
    step_delay: Duration,
}

impl<SG, PR> ImportDataUseCase<SG, PR>
where
    SG: ScannerGateway,
    PR: ProgressReporter,
{
    pub fn new(scanner_gateway: SG, progress_reporter: PR) -> Self {
        Self {
            scanner_gateway,
            progress_reporter,
            step_delay: STEP_DELAY,
        }
    }

    /// Overrides the per-tick delay (tests use Duration::ZERO).
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Executes the import use case
    ///
    /// # Arguments
    /// * `file_path` - Path to the export file to import
    ///
    /// # Returns
    /// Import statistics reported by the (simulated) platform
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// or exceeds the import size limit
    pub async fn execute(&self, file_path: &Path) -> Result<ImportStats> {
        security::validate_regular_file(file_path, "import file")?;

        let size_bytes = std::fs::metadata(file_path)
            .map_err(|e| TenableSimError::ImportError {
                path: file_path.to_path_buf(),
                details: e.to_string(),
            })?
            .len();
        security::validate_file_size(size_bytes, file_path, security::MAX_IMPORT_FILE_SIZE)?;

        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| TenableSimError::ImportError {
                path: file_path.to_path_buf(),
                details: "path has no file name".to_string(),
            })?;

        self.progress_reporter.report(&format!(
            "📤 Processing {} ({:.1} KB)...",
            file_name,
            size_bytes as f64 / 1024.0
        ));

        for step in 1..=PROCESSING_STEPS {
            self.progress_reporter
                .report_progress(step, PROCESSING_STEPS, Some("Processing file..."));
            if !self.step_delay.is_zero() {
                tokio::time::sleep(self.step_delay).await;
            }
        }

        let stats = self
            .scanner_gateway
            .import_summary(&file_name, size_bytes)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ File processed: {} record(s) imported, {} unique vulnerabilities, {} new asset(s), {} critical",
            stats.records_imported,
            stats.unique_vulnerabilities,
            stats.new_assets,
            stats.critical_detected
        ));

        Ok(stats)
    }
}
