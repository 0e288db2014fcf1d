use crate::scan_simulation::domain::Severity;
use serde::Serialize;

/// Headline counters of an analysis report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of assets in the analyzed snapshot
    pub total_assets: usize,
    /// Number of findings in the analyzed snapshot
    pub total_vulnerabilities: usize,
    /// Number of distinct assets with at least one Critical finding
    pub critical_assets: usize,
    /// Fraction of findings marked remediated, formatted as "NN.N%"
    pub remediation_rate: String,
}

/// Occurrence count for one severity level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

/// Occurrence count for one CVE identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveCount {
    pub cve_id: String,
    pub count: usize,
}

/// Derived read-only aggregate statistics over one snapshot.
///
/// The report holds no reference back to the snapshot it was computed from.
/// `severity_distribution` covers only severities actually present, and both
/// distributions are ordered by descending count with ties in
/// first-encountered order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub summary: ReportSummary,
    pub severity_distribution: Vec<SeverityCount>,
    /// The 10 most frequent CVE identifiers (all of them if fewer exist)
    pub top_vulnerabilities: Vec<CveCount>,
    /// Number of assets whose status is Active, regardless of findings
    pub assets_at_risk: usize,
}
