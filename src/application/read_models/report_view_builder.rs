use crate::application::read_models::{
    CveCountView, ReportView, ScanMetadataView, SeverityCountView, SummaryView,
};
use crate::scan_simulation::domain::{ScanMetadata, ScanReport};

/// Builds the report read model from the domain structures.
///
/// The builder flattens severities to their display names and stamps the
/// tool identity from the crate metadata, so formatters never touch the
/// domain layer directly.
pub struct ReportViewBuilder;

impl ReportViewBuilder {
    pub fn build(metadata: &ScanMetadata, report: &ScanReport) -> ReportView {
        ReportView {
            scan: ScanMetadataView {
                scan_id: metadata.scan_id.clone(),
                scan_date: metadata.scan_date.clone(),
                tool_name: "tenable-sim".to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: SummaryView {
                total_assets: report.summary.total_assets,
                total_vulnerabilities: report.summary.total_vulnerabilities,
                critical_assets: report.summary.critical_assets,
                remediation_rate: report.summary.remediation_rate.clone(),
            },
            severity_distribution: report
                .severity_distribution
                .iter()
                .map(|entry| SeverityCountView {
                    severity: entry.severity.to_string(),
                    count: entry.count,
                })
                .collect(),
            top_vulnerabilities: report
                .top_vulnerabilities
                .iter()
                .map(|entry| CveCountView {
                    cve_id: entry.cve_id.clone(),
                    count: entry.count,
                })
                .collect(),
            assets_at_risk: report.assets_at_risk,
        }
    }
}
