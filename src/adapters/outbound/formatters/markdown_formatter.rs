use crate::application::read_models::ReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the key metrics section
const METRICS_TABLE_HEADER: &str = "| Metric | Value |\n";
const METRICS_TABLE_SEPARATOR: &str = "|--------|-------|\n";

/// Markdown table header for the severity distribution section
const SEVERITY_TABLE_HEADER: &str = "| Severity | Findings |\n";
const SEVERITY_TABLE_SEPARATOR: &str = "|----------|----------|\n";

/// Markdown table header for the top vulnerabilities section
const TOP_VULNS_TABLE_HEADER: &str = "| CVE | Occurrences |\n";
const TOP_VULNS_TABLE_SEPARATOR: &str = "|-----|-------------|\n";

/// MarkdownSummaryFormatter adapter for rendering an executive summary
///
/// This adapter implements the ReportFormatter port for Markdown format,
/// rendering the report the way the dashboard's executive summary page
/// presents it.
pub struct MarkdownSummaryFormatter;

impl MarkdownSummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownSummaryFormatter {
    fn render_header(&self, output: &mut String, view: &ReportView) {
        output.push_str("# Tenable Scan Executive Summary\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {}.\n\n",
            view.scan.tool_name, view.scan.tool_version, view.scan.scan_date
        ));
        output.push_str(&format!("Scan ID: `{}`\n\n", view.scan.scan_id));
    }

    fn render_key_metrics(&self, output: &mut String, view: &ReportView) {
        output.push_str("## Key Metrics\n\n");
        output.push_str(METRICS_TABLE_HEADER);
        output.push_str(METRICS_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Total assets | {} |\n",
            view.summary.total_assets
        ));
        output.push_str(&format!(
            "| Total vulnerabilities | {} |\n",
            view.summary.total_vulnerabilities
        ));
        output.push_str(&format!(
            "| Assets with critical findings | {} |\n",
            view.summary.critical_assets
        ));
        output.push_str(&format!(
            "| Remediation rate | {} |\n",
            view.summary.remediation_rate
        ));
        output.push_str(&format!("| Active assets at risk | {} |\n", view.assets_at_risk));
        output.push('\n');
    }

    fn render_severity_distribution(&self, output: &mut String, view: &ReportView) {
        output.push_str("## Severity Distribution\n\n");

        if view.severity_distribution.is_empty() {
            output.push_str("No findings were detected in this scan window.\n\n");
            return;
        }

        output.push_str(SEVERITY_TABLE_HEADER);
        output.push_str(SEVERITY_TABLE_SEPARATOR);
        for entry in &view.severity_distribution {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.severity),
                entry.count
            ));
        }
        output.push('\n');
    }

    fn render_top_vulnerabilities(&self, output: &mut String, view: &ReportView) {
        output.push_str("## Top Vulnerabilities\n\n");

        if view.top_vulnerabilities.is_empty() {
            output.push_str("No recurring CVEs to rank.\n");
            return;
        }

        output.push_str(
            "The most frequently detected CVE identifiers across all assets.\n\n",
        );
        output.push_str(TOP_VULNS_TABLE_HEADER);
        output.push_str(TOP_VULNS_TABLE_SEPARATOR);
        for entry in &view.top_vulnerabilities {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.cve_id),
                entry.count
            ));
        }
    }
}

impl ReportFormatter for MarkdownSummaryFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);
        self.render_key_metrics(&mut output, view);
        self.render_severity_distribution(&mut output, view);
        self.render_top_vulnerabilities(&mut output, view);
        Ok(output)
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
            severity_distribution: vec![SeverityCountView {
                severity: "Low".to_string(),
                count: 960,
            }],
            top_vulnerabilities: vec![CveCountView {
                cve_id: "CVE-2024-5555".to_string(),
                count: 4,
            }],
            assets_at_risk: 81,
        }
    }

    #[test]
    fn test_format_renders_all_sections() {
        let formatter = MarkdownSummaryFormatter::new();
        let output = formatter.format(&sample_view()).unwrap();

        assert!(output.starts_with("# Tenable Scan Executive Summary"));
        assert!(output.contains("## Key Metrics"));
        assert!(output.contains("## Severity Distribution"));
        assert!(output.contains("## Top Vulnerabilities"));
        assert!(output.contains("| Total assets | 100 |"));
        assert!(output.contains("| Remediation rate | 29.7% |"));
        assert!(output.contains("| Low | 960 |"));
        assert!(output.contains("| CVE-2024-5555 | 4 |"));
    }

    #[test]
    fn test_format_empty_findings_renders_placeholders() {
        let mut view = sample_view();
        view.severity_distribution.clear();
        view.top_vulnerabilities.clear();

        let formatter = MarkdownSummaryFormatter::new();
        let output = formatter.format(&view).unwrap();

        assert!(output.contains("No findings were detected"));
        assert!(output.contains("No recurring CVEs to rank."));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownSummaryFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
