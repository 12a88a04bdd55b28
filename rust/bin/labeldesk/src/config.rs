//! Client configuration.
//!
//! Reads/writes `~/.labeldesk/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use labeldesk::LabelConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Client configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Base URL of the inventory API (e.g. "http://192.168.1.144:5000").
    pub server: String,

    /// Per-request timeout.
    pub timeout_secs: u64,

    /// Label sizes and decoration.
    pub label: LabelConfig,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            timeout_secs: 10,
            label: LabelConfig::default(),
        }
    }
}

impl DeskConfig {
    /// Default config file path: ~/.labeldesk/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: DeskConfig = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config
            .label
            .validate()
            .with_context(|| format!("invalid label settings in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Return the labeldesk config directory (~/.labeldesk).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".labeldesk")
}
