use crate::application::read_models::ReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
struct ReportDocument {
    scan: ScanSection,
    summary: SummarySection,
    /// Severity name -> occurrence count, descending by count
    severity_distribution: Map<String, Value>,
    /// CVE id -> occurrence count, descending by count, at most ten
    top_vulnerabilities: Map<String, Value>,
    assets_at_risk: usize,
}

#[derive(Debug, Serialize)]
struct ScanSection {
    scan_id: String,
    scan_date: String,
    tool_name: String,
    tool_version: String,
}

#[derive(Debug, Serialize)]
struct SummarySection {
    total_assets: usize,
    total_vulnerabilities: usize,
    critical_assets: usize,
    remediation_rate: String,
}

/// JsonReportFormatter adapter for rendering the analysis report as JSON
///
/// This adapter implements the ReportFormatter port for JSON output. The
/// distributions are emitted as ordered JSON objects so readers see the
/// ranking without re-sorting.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut severity_distribution = Map::new();
        for entry in &view.severity_distribution {
            severity_distribution.insert(entry.severity.clone(), Value::from(entry.count));
        }

        let mut top_vulnerabilities = Map::new();
        for entry in &view.top_vulnerabilities {
            top_vulnerabilities.insert(entry.cve_id.clone(), Value::from(entry.count));
        }

        let document = ReportDocument {
            scan: ScanSection {
                scan_id: view.scan.scan_id.clone(),
                scan_date: view.scan.scan_date.clone(),
                tool_name: view.scan.tool_name.clone(),
                tool_version: view.scan.tool_version.clone(),
            },
            summary: SummarySection {
                total_assets: view.summary.total_assets,
                total_vulnerabilities: view.summary.total_vulnerabilities,
                critical_assets: view.summary.critical_assets,
                remediation_rate: view.summary.remediation_rate.clone(),
            },
            severity_distribution,
            top_vulnerabilities,
            assets_at_risk: view.assets_at_risk,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        CveCountView, ScanMetadataView, SeverityCountView, SummaryView,
    };

    fn sample_view() -> ReportView {
        ReportView {
            scan: ScanMetadataView {
                scan_id: "urn:uuid:abc".to_string(),
                scan_date: "2024-04-15 10:30:00".to_string(),
                tool_name: "tenable-sim".to_string(),
                tool_version: "1.2.0".to_string(),
            },
            summary: SummaryView {
                total_assets: 100,
                total_vulnerabilities: 2431,
                critical_assets: 58,
                remediation_rate: "29.7%".to_string(),
            },
            severity_distribution: vec![
                SeverityCountView {
                    severity: "Low".to_string(),
                    count: 960,
                },
                SeverityCountView {
                    severity: "Medium".to_string(),
                    count: 731,
                },
            ],
            top_vulnerabilities: vec![
                CveCountView {
                    cve_id: "CVE-2024-5555".to_string(),
                    count: 4,
                },
                CveCountView {
                    cve_id: "CVE-2023-1111".to_string(),
                    count: 3,
                },
            ],
            assets_at_risk: 81,
        }
    }

    #[test]
    fn test_format_emits_expected_fields() {
        let formatter = JsonReportFormatter::new();
        let output = formatter.format(&sample_view()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["total_assets"], 100);
        assert_eq!(value["summary"]["remediation_rate"], "29.7%");
        assert_eq!(value["severity_distribution"]["Low"], 960);
        assert_eq!(value["top_vulnerabilities"]["CVE-2024-5555"], 4);
        assert_eq!(value["assets_at_risk"], 81);
        assert_eq!(value["scan"]["tool_name"], "tenable-sim");
    }

    #[test]
    fn test_format_preserves_ranking_order() {
        let formatter = JsonReportFormatter::new();
        let output = formatter.format(&sample_view()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let keys: Vec<&str> = value["severity_distribution"]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["Low", "Medium"]);
    }

    #[test]
    fn test_format_empty_distributions() {
        let mut view = sample_view();
        view.severity_distribution.clear();
        view.top_vulnerabilities.clear();

        let formatter = JsonReportFormatter::new();
        let output = formatter.format(&view).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["severity_distribution"].as_object().unwrap().is_empty());
        assert!(value["top_vulnerabilities"].as_object().unwrap().is_empty());
    }
}
