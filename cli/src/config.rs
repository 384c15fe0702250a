//! Configuration file handling
//!
//! ```toml
//! cluster = "devnet"          # devnet | testnet | mainnet-beta | localnet | http(s) URL
//! keypair_path = "key_data"
//! timeout_secs = 30
//! commitment = "confirmed"    # processed | confirmed | finalized
//! ```
//!
//! Command-line flags override the file, the file overrides the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use personal_wallet_sdk::core::constants::{DEFAULT_SECRET_FILE, DEFAULT_TIMEOUT_SECS};
use personal_wallet_sdk::{Cluster, SessionOptions};
use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

/// Raw contents of config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub cluster: Option<Cluster>,
    #[serde(default)]
    pub keypair_path: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub commitment: Option<String>,
}

impl ConfigFile {
    /// Load the config file. A missing file yields an empty config; a
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cluster: Option<Cluster>,
    pub keypair_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cluster: Cluster,
    pub keypair_path: PathBuf,
    pub timeout: Duration,
    pub commitment: CommitmentConfig,
}

impl Settings {
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let commitment = match file.commitment.as_deref() {
            None => CommitmentConfig::confirmed(),
            Some(level) => parse_commitment(level)?,
        };

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(anyhow!("timeout must be at least one second"));
        }

        Ok(Self {
            cluster: overrides.cluster.or(file.cluster).unwrap_or_default(),
            keypair_path: overrides
                .keypair_path
                .or(file.keypair_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRET_FILE)),
            timeout: Duration::from_secs(timeout_secs),
            commitment,
        })
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            timeout: self.timeout,
            commitment: self.commitment,
        }
    }
}

/// Default location: `<config dir>/personal-wallet/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("personal-wallet").join("config.toml"))
}

fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    match level {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(anyhow!(
            "Unknown commitment {:?} (expected processed, confirmed or finalized)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let file = ConfigFile::load(&dir.path().join("config.toml")).unwrap();
        let settings = Settings::resolve(file, Overrides::default()).unwrap();

        assert_eq!(settings.cluster, Cluster::Devnet);
        assert_eq!(settings.keypair_path, PathBuf::from("key_data"));
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.commitment, CommitmentConfig::confirmed());
    }

    #[test]
    fn reads_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "cluster = \"http://127.0.0.1:8899\"\nkeypair_path = \"/tmp/wallet\"\ntimeout_secs = 5\ncommitment = \"finalized\"\n",
        )
        .unwrap();

        let settings = Settings::resolve(ConfigFile::load(&path).unwrap(), Overrides::default())
            .unwrap();

        assert_eq!(
            settings.cluster,
            Cluster::Custom("http://127.0.0.1:8899".to_string())
        );
        assert_eq!(settings.keypair_path, PathBuf::from("/tmp/wallet"));
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.commitment, CommitmentConfig::finalized());
    }

    #[test]
    fn flags_win_over_file() {
        let file = ConfigFile {
            cluster: Some(Cluster::Testnet),
            keypair_path: Some(PathBuf::from("from-file")),
            timeout_secs: Some(10),
            commitment: None,
        };
        let overrides = Overrides {
            cluster: Some(Cluster::Localnet),
            keypair_path: Some(PathBuf::from("from-flag")),
            timeout_secs: None,
        };

        let settings = Settings::resolve(file, overrides).unwrap();

        assert_eq!(settings.cluster, Cluster::Localnet);
        assert_eq!(settings.keypair_path, PathBuf::from("from-flag"));
        assert_eq!(settings.timeout, Duration::from_secs(10));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cluster = \"moonnet\"\n").unwrap();
        assert!(ConfigFile::load(&path).is_err());

        std::fs::write(&path, "unknown_key = 1\n").unwrap();
        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn rejects_bad_commitment_and_zero_timeout() {
        let file = ConfigFile {
            commitment: Some("eventually".to_string()),
            ..ConfigFile::default()
        };
        assert!(Settings::resolve(file, Overrides::default()).is_err());

        let overrides = Overrides {
            timeout_secs: Some(0),
            ..Overrides::default()
        };
        assert!(Settings::resolve(ConfigFile::default(), overrides).is_err());
    }
}
