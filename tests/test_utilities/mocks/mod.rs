mod mock_progress_reporter;
mod mock_scanner_gateway;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scanner_gateway::MockScannerGateway;
