//! tenable-sim - Simulated Tenable Security Center scan data
//!
//! This library generates internally-consistent, reproducible snapshots of
//! assets and vulnerability findings, derives analysis reports from them,
//! and exports both as files, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_simulation`): Pure generation and aggregation logic
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tenable_sim::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case (offline: no scanner gateway)
//! let use_case: SimulateScanUseCase<(), _> =
//!     SimulateScanUseCase::new(None, progress_reporter);
//!
//! // Execute
//! let request = ScanRequest::new(30, 100, 42, None);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let view = ReportViewBuilder::build(response.snapshot.metadata(), &response.report);
//! let formatter = JsonReportFormatter::new();
//! let output = formatter.format(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan_simulation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvExportWriter, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownSummaryFormatter};
    pub use crate::adapters::outbound::network::SimulatedTenableClient;
    pub use crate::application::dto::{ScanRequest, ScanResponse};
    pub use crate::application::read_models::{ReportView, ReportViewBuilder};
    pub use crate::application::use_cases::{ImportDataUseCase, SimulateScanUseCase};
    pub use crate::ports::inbound::ScanSimulationPort;
    pub use crate::ports::outbound::{
        ExportArtifacts, OutputPresenter, ProgressReporter, ReportFormatter, ScannerGateway,
        SnapshotExporter,
    };
    pub use crate::scan_simulation::domain::{
        ApiCredentials, Asset, AssetStatus, ConnectionInfo, Finding, ImportStats,
        OperatingSystem, ScanMetadata, ScanReport, ScanSnapshot, Severity,
    };
    pub use crate::scan_simulation::services::{ScanDataGenerator, ScanReporter, DEFAULT_SEED};
    pub use crate::shared::Result;
}
