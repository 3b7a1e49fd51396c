//! Configuration loading, validation, and management for AadiNet.
//!
//! Loads configuration from `~/.aadinet/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The root configuration structure.
///
/// Maps directly to `~/.aadinet/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Terminal session behaviour
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Session memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Whether the resolver sees the input currently being resolved in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryVisibility {
    /// Snapshot before appending: only strictly earlier inputs are visible
    #[default]
    ExcludeCurrent,
    /// Append before snapshotting
    IncludeCurrent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Simulated thinking time before each response (0 disables it)
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Pause between a view action and the panel switch
    #[serde(default = "default_view_switch_delay_ms")]
    pub view_switch_delay_ms: u64,

    /// How long chaos mode stays on after the last trigger
    #[serde(default = "default_chaos_duration_ms")]
    pub chaos_duration_ms: u64,

    #[serde(default)]
    pub memory_visibility: MemoryVisibility,
}

fn default_processing_delay_ms() -> u64 {
    300
}
fn default_view_switch_delay_ms() -> u64 {
    500
}
fn default_chaos_duration_ms() -> u64 {
    5000
}

impl TerminalConfig {
    pub fn view_switch_delay(&self) -> Duration {
        Duration::from_millis(self.view_switch_delay_ms)
    }

    pub fn chaos_duration(&self) -> Duration {
        Duration::from_millis(self.chaos_duration_ms)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            view_switch_delay_ms: default_view_switch_delay_ms(),
            chaos_duration_ms: default_chaos_duration_ms(),
            memory_visibility: MemoryVisibility::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// "in_memory" or "none"
    #[serde(default = "default_memory_backend")]
    pub backend: String,
}

fn default_memory_backend() -> String {
    "in_memory".into()
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            backend: default_memory_backend(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_public_bind: bool,

    /// Requests per client per minute (`/health` is exempt)
    #[serde(default = "default_rate_limit")]
    pub rate_limit_per_minute: u32,

    /// Live sessions kept before the oldest is evicted
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_port() -> u16 {
    42617
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_rate_limit() -> u32 {
    60
}
fn default_max_sessions() -> usize {
    1000
}

impl GatewayConfig {
    fn is_loopback(&self) -> bool {
        matches!(self.host.as_str(), "127.0.0.1" | "localhost" | "::1")
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_public_bind: false,
            rate_limit_per_minute: default_rate_limit(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.aadinet/config.toml).
    ///
    /// Environment variables override the file:
    /// - `AADINET_HOST`
    /// - `AADINET_PORT`
    /// - `AADINET_PROCESSING_DELAY_MS`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("AADINET_HOST") {
            self.gateway.host = host;
        }

        if let Some(port) = lookup("AADINET_PORT") {
            self.gateway.port = port.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("AADINET_PORT is not a valid port: {port}"))
            })?;
        }

        if let Some(delay) = lookup("AADINET_PROCESSING_DELAY_MS") {
            self.terminal.processing_delay_ms = delay.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "AADINET_PROCESSING_DELAY_MS must be a number of milliseconds: {delay}"
                ))
            })?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".aadinet")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.memory.backend.as_str(), "in_memory" | "none") {
            return Err(ConfigError::ValidationError(format!(
                "memory.backend must be \"in_memory\" or \"none\", got \"{}\"",
                self.memory.backend
            )));
        }

        if self.terminal.chaos_duration_ms == 0 {
            return Err(ConfigError::ValidationError(
                "terminal.chaos_duration_ms must be > 0".into(),
            ));
        }

        if self.gateway.rate_limit_per_minute == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.rate_limit_per_minute must be > 0".into(),
            ));
        }

        if self.gateway.max_sessions == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.max_sessions must be > 0".into(),
            ));
        }

        if !self.gateway.is_loopback() && !self.gateway.allow_public_bind {
            return Err(ConfigError::ValidationError(format!(
                "gateway.host {} is not loopback; set gateway.allow_public_bind = true to expose it",
                self.gateway.host
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for aadinet_core::Error {
    fn from(e: ConfigError) -> Self {
        aadinet_core::Error::Config {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gateway.port, 42617);
        assert_eq!(config.terminal.view_switch_delay(), Duration::from_millis(500));
        assert_eq!(config.terminal.chaos_duration(), Duration::from_millis(5000));
        assert_eq!(config.terminal.memory_visibility, MemoryVisibility::ExcludeCurrent);
        assert_eq!(config.memory.backend, "in_memory");
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let toml_str = r#"
[terminal]
memory_visibility = "include_current"

[gateway]
port = 8080
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.terminal.memory_visibility, MemoryVisibility::IncludeCurrent);
        assert_eq!(config.terminal.processing_delay_ms, 300);
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn unknown_memory_backend_rejected() {
        let mut config = AppConfig::default();
        config.memory.backend = "sqlite".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn public_bind_requires_opt_in() {
        let mut config = AppConfig::default();
        config.gateway.host = "0.0.0.0".into();
        assert!(config.validate().is_err());
        config.gateway.allow_public_bind = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        let mut config = AppConfig::default();
        config.gateway.rate_limit_per_minute = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.terminal.chaos_duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert_eq!(result.unwrap(), AppConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[terminal]\nprocessing_delay_ms = 0\n\n[memory]\nbackend = \"none\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.terminal.processing_delay_ms, 0);
        assert_eq!(config.memory.backend, "none");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[terminal\nprocessing_delay_ms = ").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn invalid_file_is_a_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[memory]\nbackend = \"redis\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                ("AADINET_HOST", "localhost"),
                ("AADINET_PORT", "9000"),
                ("AADINET_PROCESSING_DELAY_MS", "0"),
            ]))
            .unwrap();
        assert_eq!(config.gateway.host, "localhost");
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.terminal.processing_delay_ms, 0);
    }

    #[test]
    fn bad_env_port_rejected() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env(&[("AADINET_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("AADINET_PORT"));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("exclude_current"));
        assert!(toml_str.contains("42617"));
        assert!(toml_str.contains("in_memory"));
    }

    #[test]
    fn config_error_converts_to_core_error() {
        let err: aadinet_core::Error = ConfigError::ValidationError("bad".into()).into();
        assert!(err.to_string().contains("bad"));
    }
}
