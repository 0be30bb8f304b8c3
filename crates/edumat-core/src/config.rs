//! EduMat configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{EdumatError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdumatConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Default for EdumatConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            activity: ActivityConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl EdumatConfig {
    /// Load config from the default path (~/.edumat/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EdumatError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| EdumatError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| EdumatError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".edumat")
            .join("config.toml")
    }

    /// Get the EduMat home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".edumat")
    }
}

/// Gateway server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 5000 }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Activity content configuration — placeholder content for freshly
/// provisioned activities and the public URL activities are served under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    #[serde(default = "default_summary")]
    pub default_summary: String,
    #[serde(default = "default_instructions")]
    pub default_instructions: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_summary() -> String {
    "7th-grade equations: here you can find a summary of 7th-grade equations.".into()
}
fn default_instructions() -> String {
    "https://www.matematica.pt/aulas-matematica.php?ano=7".into()
}
fn default_base_url() -> String { "https://edumat.onrender.com".into() }

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            default_summary: default_summary(),
            default_instructions: default_instructions(),
            base_url: default_base_url(),
        }
    }
}

/// Analytics storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Directory holding the per-activity, per-sink log files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String { "analytics_data".into() }

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EdumatConfig::default();
        assert_eq!(cfg.gateway.port, 5000);
        assert_eq!(cfg.analytics.data_dir, "analytics_data");
        assert!(cfg.activity.default_instructions.starts_with("https://"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: EdumatConfig = toml::from_str("[gateway]\nport = 8080\n").unwrap();
        assert_eq!(cfg.gateway.port, 8080);
        assert_eq!(cfg.gateway.host, "127.0.0.1");
        assert_eq!(cfg.analytics.data_dir, "analytics_data");
    }

    #[test]
    fn test_roundtrip() {
        let cfg = EdumatConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let back: EdumatConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.activity.base_url, cfg.activity.base_url);
    }
}
