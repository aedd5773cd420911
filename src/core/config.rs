//! Dashboard configuration with documented constants
//!
//! Everything tunable about the dashboard lives here. The query language
//! itself (trigger phrases, preview limits) is fixed and lives in
//! `query::rules`; this struct only covers presentation and pacing.

use crate::core::error::{CaseyError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a config file to load at start-up
pub const CONFIG_ENV_VAR: &str = "CASEY_CONFIG";

/// Configuration for the dashboard front-ends
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaseyConfig {
    // === PROCESSING ===
    /// Pause shown after a typed query is submitted (milliseconds)
    ///
    /// The "thinking" indicator is purely cosmetic; results are computed
    /// synchronously once the pause elapses.
    pub submit_delay_ms: u64,

    /// Pause shown after a chip or quick action is clicked (milliseconds)
    ///
    /// Shorter than `submit_delay_ms` because the query is canned.
    pub quick_action_delay_ms: u64,

    // === PRESENTATION ===
    /// Name used in the greeting line
    pub viewer_name: String,

    /// How many employees each home overview card lists
    pub card_preview_len: usize,

    /// Days absent at which the detail view suggests a disability assessment
    pub extended_absence_days: u32,

    // === DATA ===
    /// Optional TOML roster replacing the built-in sample roster
    pub roster_path: Option<PathBuf>,

    // === LOGGING ===
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for CaseyConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            quick_action_delay_ms: 800,
            viewer_name: "Alex".to_string(),
            card_preview_len: 3,
            extended_absence_days: 20,
            roster_path: None,
            log_filter: "casey=info".to_string(),
        }
    }
}

impl CaseyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }

    /// Load a config from a TOML file; missing keys fall back to defaults
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CaseyError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: CaseyConfig = toml::from_str(content)?;
        config.validate().map_err(CaseyError::ConfigError)?;
        Ok(config)
    }

    /// Resolve the config for a binary: explicit path, then `CASEY_CONFIG`,
    /// then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_toml(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_toml(Path::new(path.trim())),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.card_preview_len == 0 {
            return Err("card_preview_len must be at least 1".into());
        }

        if self.viewer_name.trim().is_empty() {
            return Err("viewer_name must not be empty".into());
        }

        if self.log_filter.trim().is_empty() {
            return Err("log_filter must not be empty".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<CaseyConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static CaseyConfig {
    CONFIG.get_or_init(CaseyConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: CaseyConfig) -> std::result::Result<(), CaseyConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = CaseyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.quick_action_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CaseyConfig::parse_toml("viewer_name = \"Jordan\"\nsubmit_delay_ms = 10\n")
            .unwrap();
        assert_eq!(config.viewer_name, "Jordan");
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.quick_action_delay_ms, 800);
        assert_eq!(config.card_preview_len, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = CaseyConfig::parse_toml("card_preview_len = 0\n");
        assert!(matches!(result, Err(CaseyError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = CaseyConfig::parse_toml("submit_delay_ms = \"soon\"\n");
        assert!(matches!(result, Err(CaseyError::TomlError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "roster_path = \"/tmp/roster.toml\"").unwrap();
        let config = CaseyConfig::load_from_toml(file.path()).unwrap();
        assert_eq!(config.roster_path, Some(PathBuf::from("/tmp/roster.toml")));
    }

    #[test]
    fn test_missing_file_errors() {
        let result = CaseyConfig::load_from_toml(Path::new("/nonexistent/casey.toml"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Config error"));
    }
}
