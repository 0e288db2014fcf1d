use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::scan_simulation::services::DEFAULT_SEED;
use crate::shared::error::TenableSimError;
use crate::shared::Result;

/// Default look-back window when neither the CLI nor the config sets one.
pub const DEFAULT_DAYS_BACK: u32 = 30;

/// Default asset count when neither the CLI nor the config sets one.
pub const DEFAULT_NUM_ASSETS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

/// Simulate Tenable Security Center scan data
#[derive(Parser, Debug)]
#[command(name = "tenable-sim")]
#[command(version)]
#[command(about = "Simulate, analyze and export Tenable scan data", long_about = None)]
pub struct Args {
    /// Look-back window in days (default: 30)
    #[arg(short, long = "days-back")]
    pub days_back: Option<u32>,

    /// Number of assets to simulate (default: 100)
    #[arg(short = 'n', long = "assets")]
    pub assets: Option<u32>,

    /// PRNG seed; identical seeds reproduce identical snapshots (default: 42)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format: json or markdown (default: json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory to export the snapshot tables and metadata into
    #[arg(short, long = "export-dir")]
    pub export_dir: Option<String>,

    /// Tenable API access key (runs the simulated connection handshake)
    #[arg(long = "access-key", requires = "secret_key")]
    pub access_key: Option<String>,

    /// Tenable API secret key
    #[arg(long = "secret-key", requires = "access_key")]
    pub secret_key: Option<String>,

    /// Tenable endpoint URL
    #[arg(long, default_value = "https://cloud.tenable.com")]
    pub url: String,

    /// Tenable export file to import before the scan (simulated processing)
    #[arg(long = "import-file")]
    pub import_file: Option<String>,

    /// Exit with code 1 when the snapshot contains critical findings
    #[arg(long = "fail-on-critical")]
    pub fail_on_critical: bool,

    /// Path to a YAML config file (default: auto-discover tenable-sim.config.yml)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings after merging CLI arguments over the config file.
///
/// CLI flags take precedence; config values fill the gaps; hard-coded
/// defaults apply last.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub days_back: u32,
    pub num_assets: u32,
    pub seed: u64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub fail_on_critical: bool,
}

impl ResolvedSettings {
    pub fn from_args_and_config(args: &Args, config: &ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => match config.format.as_deref() {
                Some(value) => value.parse().map_err(|message: String| {
                    TenableSimError::Validation { message }
                })?,
                None => OutputFormat::Json,
            },
        };

        Ok(Self {
            days_back: args
                .days_back
                .or(config.days_back)
                .unwrap_or(DEFAULT_DAYS_BACK),
            num_assets: args
                .assets
                .or(config.num_assets)
                .unwrap_or(DEFAULT_NUM_ASSETS),
            seed: args.seed.or(config.seed).unwrap_or(DEFAULT_SEED),
            format,
            output: args.output.as_ref().map(PathBuf::from),
            export_dir: args
                .export_dir
                .clone()
                .or_else(|| config.export_dir.clone())
                .map(PathBuf::from),
            fail_on_critical: args.fail_on_critical || config.fail_on_critical.unwrap_or(false),
        })
    }
}
