//! Report read model for rendering operations
//!
//! This module provides the denormalized view that formatters consume,
//! following the CQRS-lite pattern: domain structures in, flat
//! presentation-ready fields out.

/// Main read model for a rendered report
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Scan run metadata
    pub scan: ScanMetadataView,
    /// Headline counters
    pub summary: SummaryView,
    /// Severity counts, descending, only severities present
    pub severity_distribution: Vec<SeverityCountView>,
    /// Most frequent CVE identifiers, descending, at most ten
    pub top_vulnerabilities: Vec<CveCountView>,
    /// Number of Active assets
    pub assets_at_risk: usize,
}

/// View representation of scan run metadata
#[derive(Debug, Clone)]
pub struct ScanMetadataView {
    /// urn:uuid identifier of the scan run
    pub scan_id: String,
    /// Wall-clock timestamp of the scan
    pub scan_date: String,
    /// Name of the tool that produced the report
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
}

/// View representation of the report summary
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub total_assets: usize,
    pub total_vulnerabilities: usize,
    pub critical_assets: usize,
    pub remediation_rate: String,
}

/// One row of the severity distribution
#[derive(Debug, Clone)]
pub struct SeverityCountView {
    /// Severity name (e.g. "Critical")
    pub severity: String,
    pub count: usize,
}

/// One row of the top-vulnerabilities ranking
#[derive(Debug, Clone)]
pub struct CveCountView {
    pub cve_id: String,
    pub count: usize,
}
