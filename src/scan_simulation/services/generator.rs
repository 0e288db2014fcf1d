use crate::scan_simulation::domain::{
    Asset, AssetStatus, Finding, OperatingSystem, ScanMetadata, ScanSnapshot, Severity,
};
use crate::shared::error::TenableSimError;
use crate::shared::Result;
use chrono::{DateTime, Duration, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Default PRNG seed. Every simulation call reseeds from this value unless
/// the caller overrides it, so repeated calls with identical inputs produce
/// identical tables.
pub const DEFAULT_SEED: u64 = 42;

/// First two octets of the simulated scanned network.
const NETWORK_PREFIX: &str = "172.22";

/// Exclusive upper bound on findings drawn per asset.
const MAX_FINDINGS_PER_ASSET: u32 = 50;

/// Host roles embedded in generated hostnames.
const HOST_ROLES: [&str; 4] = ["DB", "WEB", "APP", "FILE"];

const OPERATING_SYSTEMS: [OperatingSystem; 4] = [
    OperatingSystem::WindowsServer2022,
    OperatingSystem::Ubuntu2204,
    OperatingSystem::CentOs7,
    OperatingSystem::Windows11,
];

const STATUS_CHOICES: [AssetStatus; 3] = [
    AssetStatus::Active,
    AssetStatus::Inactive,
    AssetStatus::Quarantined,
];
const STATUS_WEIGHTS: [f64; 3] = [0.80, 0.15, 0.05];

const SEVERITY_WEIGHTS: [f64; 5] = [0.05, 0.15, 0.30, 0.40, 0.10];

/// Probability that a generated finding is already remediated.
const REMEDIATED_PROBABILITY: f64 = 0.30;

const DESCRIPTION_TEMPLATES: [&str; 7] = [
    "Remote Code Execution vulnerability in {} service",
    "Privilege Escalation via {}",
    "SQL Injection in {} endpoint",
    "Cross-Site Scripting (XSS) in {}",
    "Buffer Overflow in {} component",
    "Information Disclosure via {}",
    "Denial of Service in {} service",
];

const AFFECTED_COMPONENTS: [&str; 7] = [
    "HTTP",
    "SSH",
    "Database",
    "Web Application",
    "API",
    "File System",
    "Network",
];

/// ScanDataGenerator service producing simulated scan snapshots.
///
/// This service contains pure generation logic: given a look-back window and
/// an asset count, it assembles an internally-consistent snapshot of assets,
/// findings and metadata. It performs no I/O.
///
/// The generator reseeds its PRNG on every call, so distinct calls replay
/// the same pseudo-random sequence rather than continuing it.
pub struct ScanDataGenerator {
    seed: u64,
}

impl ScanDataGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Simulates a scan ending now.
    ///
    /// # Arguments
    /// * `days_back` - Look-back window in days (must be positive)
    /// * `num_assets` - Number of assets to generate (must be positive)
    ///
    /// # Errors
    /// Returns a parameter-validation error if either argument is zero,
    /// before any partial snapshot is built.
    pub fn simulate(&self, days_back: u32, num_assets: u32) -> Result<ScanSnapshot> {
        self.simulate_at(Utc::now(), days_back, num_assets)
    }

    /// Simulates a scan ending at an explicit reference time.
    ///
    /// With the reference time pinned, output is a pure function of the
    /// inputs and the configured seed; tests rely on this to compare
    /// snapshots field-for-field.
    pub fn simulate_at(
        &self,
        end_date: DateTime<Utc>,
        days_back: u32,
        num_assets: u32,
    ) -> Result<ScanSnapshot> {
        validate_positive("days_back", days_back)?;
        validate_positive("num_assets", num_assets)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let status_dist = WeightedIndex::new(STATUS_WEIGHTS)
            .expect("status weights are positive and finite");
        let severity_dist = WeightedIndex::new(SEVERITY_WEIGHTS)
            .expect("severity weights are positive and finite");

        let mut assets = Vec::with_capacity(num_assets as usize);
        let mut vulnerabilities = Vec::new();

        for i in 0..num_assets {
            let asset_id = format!("ASSET-{:04}", i);
            let role = HOST_ROLES[rng.gen_range(0..HOST_ROLES.len())];

            assets.push(Asset {
                asset_id: asset_id.clone(),
                ip_address: format!(
                    "{}.{}.{}",
                    NETWORK_PREFIX,
                    rng.gen_range(1..200),
                    rng.gen_range(1..255)
                ),
                hostname: format!("SVR-{}-{:03}", role, i),
                operating_system: OPERATING_SYSTEMS[rng.gen_range(0..OPERATING_SYSTEMS.len())],
                last_scanned: window_date(end_date, days_back, &mut rng),
                status: STATUS_CHOICES[status_dist.sample(&mut rng)],
            });

            let num_findings = rng.gen_range(0..MAX_FINDINGS_PER_ASSET);
            for _ in 0..num_findings {
                let severity = Severity::all()[severity_dist.sample(&mut rng)];
                vulnerabilities.push(Finding {
                    asset_id: asset_id.clone(),
                    cve_id: format!(
                        "CVE-202{}-{}",
                        rng.gen_range(3..5),
                        rng.gen_range(1000..9999)
                    ),
                    severity,
                    cvss_score: (rng.gen_range(0.0..10.0_f64) * 10.0).round() / 10.0,
                    plugin_id: format!("PLUGIN-{}", rng.gen_range(10000..99999)),
                    description: generate_description(&mut rng),
                    discovery_date: window_date(end_date, days_back, &mut rng),
                    remediated: rng.gen_bool(REMEDIATED_PROBABILITY),
                });
            }
        }

        let critical_count = vulnerabilities
            .iter()
            .filter(|v| v.severity == Severity::Critical)
            .count();

        let metadata = ScanMetadata {
            scan_id: format!("urn:uuid:{}", Uuid::new_v4()),
            scan_date: end_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            total_assets: assets.len(),
            total_vulnerabilities: vulnerabilities.len(),
            critical_count,
        };

        Ok(ScanSnapshot::new(assets, vulnerabilities, metadata))
    }
}

impl Default for ScanDataGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

fn validate_positive(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(TenableSimError::InvalidScanParameters {
            parameter,
            value: value as u64,
        }
        .into());
    }
    Ok(())
}

/// Draws a date uniformly over the look-back window, formatted YYYY-MM-DD.
fn window_date(end_date: DateTime<Utc>, days_back: u32, rng: &mut ChaCha8Rng) -> String {
    let offset = rng.gen_range(0..days_back);
    (end_date - Duration::days(offset as i64))
        .format("%Y-%m-%d")
        .to_string()
}

/// Generates a finding description from the fixed template and component
/// sets; template and component are drawn independently.
fn generate_description(rng: &mut ChaCha8Rng) -> String {
    let template = DESCRIPTION_TEMPLATES[rng.gen_range(0..DESCRIPTION_TEMPLATES.len())];
    let component = AFFECTED_COMPONENTS[rng.gen_range(0..AFFECTED_COMPONENTS.len())];
    template.replace("{}", component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_end_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_simulate_generates_requested_asset_count() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate(30, 100).unwrap();

        assert_eq!(snapshot.assets().len(), 100);
        assert_eq!(snapshot.metadata().total_assets, 100);
    }

    #[test]
    fn test_simulate_metadata_matches_tables() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate_at(fixed_end_date(), 30, 100).unwrap();

        assert_eq!(
            snapshot.metadata().total_vulnerabilities,
            snapshot.vulnerabilities().len()
        );
        let critical = snapshot
            .vulnerabilities()
            .iter()
            .filter(|v| v.severity == Severity::Critical)
            .count();
        assert_eq!(snapshot.metadata().critical_count, critical);
    }

    #[test]
    fn test_simulate_is_deterministic_for_identical_inputs() {
        let generator = ScanDataGenerator::default();
        let first = generator.simulate_at(fixed_end_date(), 30, 50).unwrap();
        let second = generator.simulate_at(fixed_end_date(), 30, 50).unwrap();

        assert_eq!(first.assets(), second.assets());
        assert_eq!(first.vulnerabilities(), second.vulnerabilities());
    }

    #[test]
    fn test_simulate_different_seeds_diverge() {
        let first = ScanDataGenerator::new(42)
            .simulate_at(fixed_end_date(), 30, 50)
            .unwrap();
        let second = ScanDataGenerator::new(7)
            .simulate_at(fixed_end_date(), 30, 50)
            .unwrap();

        assert_ne!(first.assets(), second.assets());
    }

    #[test]
    fn test_simulate_referential_integrity() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate_at(fixed_end_date(), 30, 80).unwrap();

        let asset_ids: HashSet<&str> = snapshot
            .assets()
            .iter()
            .map(|a| a.asset_id.as_str())
            .collect();
        for finding in snapshot.vulnerabilities() {
            assert!(asset_ids.contains(finding.asset_id.as_str()));
        }
    }

    #[test]
    fn test_simulate_zero_assets_is_rejected() {
        let generator = ScanDataGenerator::default();
        let result = generator.simulate(30, 0);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("num_assets"));
        assert!(err.contains("positive integer"));
    }

    #[test]
    fn test_simulate_zero_days_back_is_rejected() {
        let generator = ScanDataGenerator::default();
        let result = generator.simulate(0, 10);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("days_back"));
    }

    #[test]
    fn test_asset_fields_follow_generation_rules() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate_at(fixed_end_date(), 30, 40).unwrap();

        for (i, asset) in snapshot.assets().iter().enumerate() {
            assert_eq!(asset.asset_id, format!("ASSET-{:04}", i));
            assert!(asset.ip_address.starts_with("172.22."));

            let octets: Vec<u32> = asset
                .ip_address
                .split('.')
                .map(|o| o.parse().unwrap())
                .collect();
            assert_eq!(octets.len(), 4);
            assert!((1u32..200).contains(&octets[2]));
            assert!((1u32..255).contains(&octets[3]));

            assert!(asset.hostname.starts_with("SVR-"));
            assert!(asset.hostname.ends_with(&format!("-{:03}", i)));
        }
    }

    #[test]
    fn test_finding_fields_follow_generation_rules() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate_at(fixed_end_date(), 30, 40).unwrap();

        assert!(!snapshot.vulnerabilities().is_empty());
        for finding in snapshot.vulnerabilities() {
            assert!(finding.cve_id.starts_with("CVE-202"));
            assert!(finding.plugin_id.starts_with("PLUGIN-"));
            assert!((0.0..=10.0).contains(&finding.cvss_score));
            // one decimal place
            let scaled = finding.cvss_score * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            assert!(!finding.description.contains("{}"));
        }
    }

    #[test]
    fn test_dates_fall_within_window() {
        let generator = ScanDataGenerator::default();
        let end = fixed_end_date();
        let snapshot = generator.simulate_at(end, 30, 40).unwrap();

        let earliest = (end - Duration::days(29)).format("%Y-%m-%d").to_string();
        let latest = end.format("%Y-%m-%d").to_string();
        for asset in snapshot.assets() {
            assert!(asset.last_scanned.as_str() >= earliest.as_str());
            assert!(asset.last_scanned.as_str() <= latest.as_str());
        }
        for finding in snapshot.vulnerabilities() {
            assert!(finding.discovery_date.as_str() >= earliest.as_str());
            assert!(finding.discovery_date.as_str() <= latest.as_str());
        }
    }

    #[test]
    fn test_statuses_and_severities_come_from_fixed_sets() {
        let generator = ScanDataGenerator::default();
        let snapshot = generator.simulate_at(fixed_end_date(), 30, 60).unwrap();

        for asset in snapshot.assets() {
            assert!(STATUS_CHOICES.contains(&asset.status));
        }
        for finding in snapshot.vulnerabilities() {
            assert!(Severity::all().contains(&finding.severity));
        }
    }
}
