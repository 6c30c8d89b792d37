use crate::OutputFormat;
use crate::duration::{DurationConverter, DurationValue, Representation, iso8601};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub pim: PimConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Representation used by `convert` when `--to` is not given
    #[serde(default = "default_representation")]
    pub representation: Representation,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_representation() -> Representation {
    Representation::Iso8601
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            representation: default_representation(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PimConfig {
    /// Object id of the user activating roles
    pub principal_id: Option<String>,
    #[serde(default = "default_directory_scope")]
    pub directory_scope_id: String,
    pub justification: Option<String>,
    #[serde(default = "default_duration")]
    pub default_duration: String,
    /// Upper bound accepted for an activation, usually the role policy limit
    #[serde(default = "default_max_duration")]
    pub max_duration: String,
}

fn default_directory_scope() -> String {
    "/".to_string()
}

fn default_duration() -> String {
    "PT1H".to_string()
}

fn default_max_duration() -> String {
    "PT8H".to_string()
}

impl Default for PimConfig {
    fn default() -> Self {
        Self {
            principal_id: None,
            directory_scope_id: default_directory_scope(),
            justification: None,
            default_duration: default_duration(),
            max_duration: default_max_duration(),
        }
    }
}

impl PimConfig {
    /// Validate PIM configuration
    pub fn validate(&self) -> Result<()> {
        if self.directory_scope_id.trim().is_empty() {
            anyhow::bail!("pim.directory_scope_id must not be empty");
        }

        iso8601::parse(&self.default_duration)
            .with_context(|| format!("Invalid pim.default_duration '{}'", self.default_duration))?;
        iso8601::parse(&self.max_duration)
            .with_context(|| format!("Invalid pim.max_duration '{}'", self.max_duration))?;

        // Compare at one instant so calendar components resolve the same way
        let converter = DurationConverter::at(chrono::Utc::now());
        let seconds = |value: &str| -> Result<f64> {
            Ok(converter
                .convert(&DurationValue::iso(value), Representation::TotalSeconds)?
                .as_total_seconds()
                .unwrap_or_default())
        };

        if seconds(&self.default_duration)? > seconds(&self.max_duration)? {
            anyhow::bail!(
                "pim.default_duration {} exceeds pim.max_duration {}",
                self.default_duration,
                self.max_duration
            );
        }

        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.pim.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".isodur")
        .join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load `~/.isodur/config.toml`, falling back to defaults when it is absent
pub fn load() -> Result<Config> {
    let config_path = config_path()?;
    if !config_path.exists() {
        log::debug!("no config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }
    log::debug!("loading config from {}", config_path.display());
    load_from_path(&config_path)
}
