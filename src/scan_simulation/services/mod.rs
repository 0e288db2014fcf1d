pub mod generator;
pub mod reporter;

pub use generator::{ScanDataGenerator, DEFAULT_SEED};
pub use reporter::ScanReporter;
