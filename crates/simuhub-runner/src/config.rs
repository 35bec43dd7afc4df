use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_PATH_ENV: &str = "SIMUHUB_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "simuhub.toml";

/// `[runner]` section
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunnerConfig {
    /// Cosmetic delay before a freshly opened simulation shows its result
    pub loading_delay_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 0,
        }
    }
}

impl RunnerConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

/// `[logging]` section
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "simuhub=info".to_string()
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SimuHubConfig {
    pub runner: RunnerConfig,
    pub logging: LoggingConfig,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the implicit location; built-in defaults were used
    Defaults(PathBuf),
}

impl SimuHubConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Otherwise the path comes from
    /// `SIMUHUB_CONFIG_PATH` or falls back to `simuhub.toml`, and a missing file
    /// there means built-in defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let (mut config, source) = match path {
            Some(path) => (
                Self::from_file(path)?,
                ConfigSource::File(path.to_path_buf()),
            ),
            None => {
                let path = std::env::var(CONFIG_PATH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
                match fs::read_to_string(&path) {
                    Ok(raw) => {
                        let config = Self::from_toml_str(&raw).with_context(|| {
                            format!("invalid configuration in {}", path.display())
                        })?;
                        (config, ConfigSource::File(path))
                    }
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        (Self::default(), ConfigSource::Defaults(path))
                    }
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("failed to read {}", path.display()));
                    }
                }
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok((config, source))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read configuration file {}", path.display())
        })?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `SIMUHUB_LOADING_DELAY_MS` and `SIMUHUB_LOG_JSON` from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(delay) = lookup("SIMUHUB_LOADING_DELAY_MS") {
            self.runner.loading_delay_ms = delay
                .trim()
                .parse()
                .with_context(|| {
                    format!("SIMUHUB_LOADING_DELAY_MS is not a number: {delay}")
                })?;
        }
        if let Some(json) = lookup("SIMUHUB_LOG_JSON") {
            self.logging.json = json
                .trim()
                .parse()
                .with_context(|| format!("SIMUHUB_LOG_JSON must be true or false: {json}"))?;
        }
        Ok(())
    }
}
