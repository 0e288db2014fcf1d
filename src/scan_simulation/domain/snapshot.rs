use crate::scan_simulation::domain::{Asset, Finding, ScanMetadata};

/// One immutable generated dataset: assets, findings and scan metadata.
///
/// A snapshot is created once per generation call and never mutated after
/// construction. Every finding's `asset_id` refers to exactly one asset in
/// the same snapshot, and the metadata counts match the tables exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSnapshot {
    assets: Vec<Asset>,
    vulnerabilities: Vec<Finding>,
    metadata: ScanMetadata,
}

impl ScanSnapshot {
    pub fn new(assets: Vec<Asset>, vulnerabilities: Vec<Finding>, metadata: ScanMetadata) -> Self {
        Self {
            assets,
            vulnerabilities,
            metadata,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn vulnerabilities(&self) -> &[Finding] {
        &self.vulnerabilities
    }

    pub fn metadata(&self) -> &ScanMetadata {
        &self.metadata
    }

    /// Whether any finding in the snapshot carries Critical severity.
    pub fn has_critical_findings(&self) -> bool {
        self.metadata.critical_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_simulation::domain::{AssetStatus, OperatingSystem, Severity};

    fn sample_snapshot() -> ScanSnapshot {
        let assets = vec![Asset {
            asset_id: "ASSET-0000".to_string(),
            ip_address: "172.22.1.1".to_string(),
            hostname: "SVR-WEB-000".to_string(),
            operating_system: OperatingSystem::Ubuntu2204,
            last_scanned: "2024-04-01".to_string(),
            status: AssetStatus::Active,
        }];
        let vulnerabilities = vec![Finding {
            asset_id: "ASSET-0000".to_string(),
            cve_id: "CVE-2023-1111".to_string(),
            severity: Severity::Critical,
            cvss_score: 9.8,
            plugin_id: "PLUGIN-10001".to_string(),
            description: "Buffer Overflow in SSH component".to_string(),
            discovery_date: "2024-04-02".to_string(),
            remediated: false,
        }];
        let metadata = ScanMetadata {
            scan_id: "urn:uuid:0".to_string(),
            scan_date: "2024-04-15 10:30:00".to_string(),
            total_assets: 1,
            total_vulnerabilities: 1,
            critical_count: 1,
        };
        ScanSnapshot::new(assets, vulnerabilities, metadata)
    }

    #[test]
    fn test_accessors_expose_tables() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.assets().len(), 1);
        assert_eq!(snapshot.vulnerabilities().len(), 1);
        assert_eq!(snapshot.metadata().total_assets, 1);
    }

    #[test]
    fn test_has_critical_findings() {
        let snapshot = sample_snapshot();
        assert!(snapshot.has_critical_findings());
    }
}
