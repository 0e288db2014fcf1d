use serde::{Deserialize, Serialize};

/// Lifecycle state of a monitored host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    Inactive,
    Quarantined,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Inactive => "Inactive",
            AssetStatus::Quarantined => "Quarantined",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operating systems the simulated scanner reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatingSystem {
    #[serde(rename = "Windows Server 2022")]
    WindowsServer2022,
    #[serde(rename = "Ubuntu 22.04")]
    Ubuntu2204,
    #[serde(rename = "CentOS 7")]
    CentOs7,
    #[serde(rename = "Windows 11")]
    Windows11,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::WindowsServer2022 => "Windows Server 2022",
            OperatingSystem::Ubuntu2204 => "Ubuntu 22.04",
            OperatingSystem::CentOs7 => "CentOS 7",
            OperatingSystem::Windows11 => "Windows 11",
        }
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A simulated monitored host record.
///
/// One row of the assets table. `asset_id` is sequentially assigned and
/// unique within a snapshot; `ip_address` carries no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Zero-padded sequential identifier, unique within the snapshot
    pub asset_id: String,
    /// Synthetic dotted-quad address inside the scanned network
    pub ip_address: String,
    /// Role-tagged hostname (e.g. SVR-DB-042)
    pub hostname: String,
    /// Reported operating system
    pub operating_system: OperatingSystem,
    /// Date of the last scan touching this host (YYYY-MM-DD)
    pub last_scanned: String,
    /// Lifecycle state
    pub status: AssetStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_status_display() {
        assert_eq!(format!("{}", AssetStatus::Active), "Active");
        assert_eq!(format!("{}", AssetStatus::Inactive), "Inactive");
        assert_eq!(format!("{}", AssetStatus::Quarantined), "Quarantined");
    }

    #[test]
    fn test_operating_system_serializes_with_product_name() {
        let json = serde_json::to_string(&OperatingSystem::WindowsServer2022).unwrap();
        assert_eq!(json, "\"Windows Server 2022\"");
        let json = serde_json::to_string(&OperatingSystem::Ubuntu2204).unwrap();
        assert_eq!(json, "\"Ubuntu 22.04\"");
    }

    #[test]
    fn test_asset_roundtrip() {
        let asset = Asset {
            asset_id: "ASSET-0042".to_string(),
            ip_address: "172.22.134.12".to_string(),
            hostname: "SVR-DB-042".to_string(),
            operating_system: OperatingSystem::CentOs7,
            last_scanned: "2024-04-15".to_string(),
            status: AssetStatus::Active,
        };

        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);
    }
}
