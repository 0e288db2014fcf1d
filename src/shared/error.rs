use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - scan completed, no critical findings (or gating disabled)
    Success = 0,
    /// Critical findings were detected while --fail-on-critical was set
    CriticalFindingsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid parameters, export failure, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CriticalFindingsDetected => write!(f, "Critical Findings Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for scan simulation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TenableSimError {
    #[error("Invalid scan parameter: {parameter} must be a positive integer (got {value})\n\n💡 Hint: Pass a value of 1 or greater, e.g. --assets 100 --days-back 30")]
    InvalidScanParameters { parameter: &'static str, value: u64 },

    #[error("Failed to connect to scanner at {url}\nDetails: {details}\n\n💡 Hint: Verify the endpoint URL and that both the access key and secret key are set")]
    ConnectionError { url: String, details: String },

    #[error("Failed to export snapshot artifact: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the export directory is writable and has free space")]
    ExportError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to import file: {path}\nDetails: {details}\n\n💡 Hint: Supported import formats are CSV, JSON and Nessus exports from Tenable")]
    ImportError { path: PathBuf, details: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
