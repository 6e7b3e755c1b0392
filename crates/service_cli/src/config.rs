//! CLI configuration file handling.

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration read from `mrio.toml`.
///
/// All fields have defaults, so a missing config file is not an error; a
/// present but unparsable one is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Root directory containing one subdirectory per dataset year.
    pub data_dir: PathBuf,

    /// Number of regions R in the datasets.
    pub regions: usize,

    /// Number of sectors per region S (N = R × S).
    pub sectors_per_region: usize,

    /// Condition-number limit for the Leontief system.
    pub condition_limit: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            regions: 31,
            sectors_per_region: 3,
            condition_limit: 1e12,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::load(&dir.path().join("mrio.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.regions, 31);
        assert_eq!(config.sectors_per_region, 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mrio.toml");
        fs::write(&path, "regions = 8\ndata_dir = \"/srv/mrio\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.regions, 8);
        assert_eq!(config.data_dir, PathBuf::from("/srv/mrio"));
        assert_eq!(config.sectors_per_region, 3);
        assert_eq!(config.condition_limit, 1e12);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mrio.toml");
        fs::write(&path, "regions = \"many\"\n").unwrap();
        assert!(matches!(
            CliConfig::load(&path),
            Err(CliError::Config(_))
        ));
    }
}
