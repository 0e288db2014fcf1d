use serde::{Deserialize, Serialize};

/// Categorical risk level assigned to a finding by the scanner.
///
/// Variants are ordered most to least severe so that `Ord` sorting puts
/// Critical findings first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// All severity levels in scanner emission order.
    pub fn all() -> [Severity; 5] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Info,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A simulated vulnerability detection attached to one asset.
///
/// One row of the findings table. The `asset_id` references exactly one
/// asset in the same snapshot; the severity and CVSS score are drawn
/// independently of each other, matching the scanner feed this simulates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the asset this finding was detected on
    pub asset_id: String,
    /// Synthetic CVE identifier (not validated against any registry)
    pub cve_id: String,
    /// Categorical risk level
    pub severity: Severity,
    /// CVSS base score in [0.0, 10.0], one decimal place
    pub cvss_score: f64,
    /// Synthetic scanner-plugin reference
    pub plugin_id: String,
    /// Human-readable description generated from a fixed template set
    pub description: String,
    /// Date the finding was discovered (YYYY-MM-DD), within the scan window
    pub discovery_date: String,
    /// Whether the finding has already been remediated
    pub remediated: bool,
}
