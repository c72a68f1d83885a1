use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ConfigurationRecord;
use crate::params::ParameterSet;

/// On-disk configuration formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Infer the format from `path`'s extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(anyhow!(
                "Unsupported configuration file extension for {} (expected .json, .yaml, or .yml)",
                path.display()
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }

    /// Serialize `value` in this format (pretty-printed for JSON).
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = match self {
            ConfigFormat::Json => serde_json::to_string_pretty(value)?,
            ConfigFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(text)
    }

    pub fn parse<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        let value = match self {
            ConfigFormat::Json => serde_json::from_str(text)?,
            ConfigFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(value)
    }
}

/// Load a configuration record from a JSON or YAML file.
pub fn load_record(path: impl AsRef<Path>) -> Result<ConfigurationRecord> {
    read_as(path.as_ref())
}

/// Write a configuration record to a JSON or YAML file.
pub fn save_record(record: &ConfigurationRecord, path: impl AsRef<Path>) -> Result<()> {
    write_as(record, path.as_ref())
}

/// Load a full parameter set (tracked and untracked) from a JSON or YAML file.
pub fn load_parameter_set(path: impl AsRef<Path>) -> Result<ParameterSet> {
    read_as(path.as_ref())
}

pub fn save_parameter_set(params: &ParameterSet, path: impl AsRef<Path>) -> Result<()> {
    write_as(params, path.as_ref())
}

fn read_as<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let kind = ConfigFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), format = kind.name(), "Loading configuration");
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration at {}", path.display()))?;
    kind.parse(&text).with_context(|| {
        format!("Failed to parse {} configuration at {}", kind.name(), path.display())
    })
}

fn write_as<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let kind = ConfigFormat::from_path(path)?;
    let text = kind
        .render(value)
        .with_context(|| format!("Failed to serialize {} configuration", kind.name()))?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
    tracing::debug!(path = %path.display(), format = kind.name(), "Wrote configuration");
    Ok(())
}
