mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod scan_simulation;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::CsvExportWriter;
use adapters::outbound::network::SimulatedTenableClient;
use application::dto::{OutputFormat as FormatterType, ScanRequest};
use application::factories::{FormatterFactory, PresenterFactory};
use application::read_models::ReportViewBuilder;
use application::use_cases::{ImportDataUseCase, SimulateScanUseCase};
use cli::{Args, OutputFormat, ResolvedSettings};
use owo_colors::OwoColorize;
use ports::outbound::SnapshotExporter;
use scan_simulation::domain::ApiCredentials;
use shared::error::ExitCode;
use shared::{security, Result};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration: an explicit path wins, otherwise auto-discover
    // in the working directory
    let config = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let settings = ResolvedSettings::from_args_and_config(&args, &config)?;

    // Simulated import, when an export file was provided
    if let Some(import_file) = &args.import_file {
        let import_use_case = ImportDataUseCase::new(
            SimulatedTenableClient::new(),
            StderrProgressReporter::new(),
        );
        import_use_case.execute(Path::new(import_file)).await?;
    }

    // Credentials trigger the simulated connection handshake before generation
    let credentials = match (&args.access_key, &args.secret_key) {
        (Some(access_key), Some(secret_key)) => Some(ApiCredentials::new(
            access_key.clone(),
            secret_key.clone(),
            args.url.clone(),
        )),
        _ => None,
    };
    let scanner_gateway = credentials.is_some().then(SimulatedTenableClient::new);

    // Create use case with injected dependencies
    let progress_reporter = StderrProgressReporter::new();
    let use_case = SimulateScanUseCase::new(scanner_gateway, progress_reporter);

    // Execute use case
    let request = ScanRequest::new(
        settings.days_back,
        settings.num_assets,
        settings.seed,
        credentials,
    );
    let response = use_case.execute(request).await?;

    // Convert CLI format to application layer format type
    let formatter_type = match settings.format {
        OutputFormat::Json => FormatterType::Json,
        OutputFormat::Markdown => FormatterType::Markdown,
    };

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    // Render the report through the factory-selected formatter
    let formatter = FormatterFactory::create(formatter_type);
    let view = ReportViewBuilder::build(response.snapshot.metadata(), &response.report);
    let formatted_output = formatter.format(&view)?;

    // Present output
    let presenter = PresenterFactory::create(settings.output.clone());
    presenter.present(&formatted_output)?;

    // Export the snapshot tables and metadata, when requested
    if let Some(export_dir) = &settings.export_dir {
        if export_dir.exists() {
            security::validate_not_symlink(export_dir, "export")?;
        }
        let artifacts = CsvExportWriter::new().export(&response.snapshot, export_dir)?;
        eprintln!("✅ Export complete:");
        eprintln!("   - {}", artifacts.assets_file.display());
        eprintln!("   - {}", artifacts.vulnerabilities_file.display());
        eprintln!("   - {}", artifacts.metadata_file.display());
    }

    // CI gating on critical findings
    if settings.fail_on_critical && response.snapshot.has_critical_findings() {
        eprintln!(
            "⚠️  {} critical finding(s) detected",
            response
                .snapshot
                .metadata()
                .critical_count
                .red()
                .bold()
        );
        return Ok(ExitCode::CriticalFindingsDetected);
    }

    Ok(ExitCode::Success)
}
