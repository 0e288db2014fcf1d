use crate::scan_simulation::domain::{
    AssetStatus, CveCount, ReportSummary, ScanReport, ScanSnapshot, Severity, SeverityCount,
};
use std::collections::{HashMap, HashSet};

/// Number of CVE identifiers retained in the top-vulnerabilities ranking.
const TOP_VULNERABILITIES_LIMIT: usize = 10;

/// ScanReporter service computing an analysis report from a snapshot.
///
/// Pure aggregation over a fully-constructed snapshot: the input is never
/// mutated and the resulting report keeps no reference to it. Distributions
/// are ordered by descending count, ties broken by first-encountered order
/// in the snapshot's emission order.
pub struct ScanReporter;

impl ScanReporter {
    pub fn build(snapshot: &ScanSnapshot) -> ScanReport {
        let findings = snapshot.vulnerabilities();

        let critical_assets: HashSet<&str> = findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .map(|f| f.asset_id.as_str())
            .collect();

        let summary = ReportSummary {
            total_assets: snapshot.assets().len(),
            total_vulnerabilities: findings.len(),
            critical_assets: critical_assets.len(),
            remediation_rate: Self::remediation_rate(findings.iter().map(|f| f.remediated)),
        };

        let assets_at_risk = snapshot
            .assets()
            .iter()
            .filter(|a| a.status == AssetStatus::Active)
            .count();

        ScanReport {
            summary,
            severity_distribution: Self::severity_distribution(snapshot),
            top_vulnerabilities: Self::top_vulnerabilities(snapshot),
            assets_at_risk,
        }
    }

    /// Mean of the remediated flags as a percentage string to one decimal.
    /// An empty findings table reports "0.0%" rather than a division error.
    fn remediation_rate(remediated: impl Iterator<Item = bool>) -> String {
        let (mut total, mut done) = (0usize, 0usize);
        for flag in remediated {
            total += 1;
            if flag {
                done += 1;
            }
        }
        if total == 0 {
            return "0.0%".to_string();
        }
        format!("{:.1}%", done as f64 / total as f64 * 100.0)
    }

    /// Counts per severity actually present; absent severities are omitted.
    fn severity_distribution(snapshot: &ScanSnapshot) -> Vec<SeverityCount> {
        let mut counts: HashMap<Severity, (usize, usize)> = HashMap::new();
        for (idx, finding) in snapshot.vulnerabilities().iter().enumerate() {
            let entry = counts.entry(finding.severity).or_insert((0, idx));
            entry.0 += 1;
        }

        let mut distribution: Vec<(Severity, usize, usize)> = counts
            .into_iter()
            .map(|(severity, (count, first_seen))| (severity, count, first_seen))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        distribution
            .into_iter()
            .map(|(severity, count, _)| SeverityCount { severity, count })
            .collect()
    }

    /// The most frequent CVE identifiers with their counts, capped at ten.
    fn top_vulnerabilities(snapshot: &ScanSnapshot) -> Vec<CveCount> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (idx, finding) in snapshot.vulnerabilities().iter().enumerate() {
            let entry = counts.entry(finding.cve_id.as_str()).or_insert((0, idx));
            entry.0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .into_iter()
            .map(|(cve_id, (count, first_seen))| (cve_id, count, first_seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(TOP_VULNERABILITIES_LIMIT);

        ranked
            .into_iter()
            .map(|(cve_id, count, _)| CveCount {
                cve_id: cve_id.to_string(),
                count,
            })
            .collect()
    }
}
