use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use lascrack_core::config::DigiSource;
use lascrack_core::ConfigurationRecord;
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Install the stderr tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Where a command gets its configuration record from.
///
/// A config file (if any) is loaded first, then field overrides are applied
/// on top of it. Without a file the overrides apply to the defaults.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RecordArgs {
    /// Load the record from a JSON or YAML file before applying overrides.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override AnalysisType (e.g. Pedestals, Coarse_Delay).
    #[arg(long)]
    pub analysis_type: Option<String>,

    /// Override DigisInstanceLabel (e.g. VirginRaw).
    #[arg(long)]
    pub digis_instance_label: Option<String>,

    /// Override DigisModuleLabel.
    #[arg(long, conflicts_with = "simulation")]
    pub digis_module_label: Option<String>,

    /// Read digis from the simulation producer (simSiStripDigis).
    #[arg(long, default_value_t = false)]
    pub simulation: bool,
}

impl RecordArgs {
    /// Resolve the record described by these arguments.
    pub fn resolve(&self) -> Result<ConfigurationRecord> {
        if self.simulation && self.digis_module_label.is_some() {
            return Err(anyhow!("--simulation cannot be combined with --digis-module-label"));
        }

        let base = match &self.config {
            Some(path) => lascrack_core::loader::load_record(path).with_context(|| {
                format!("Failed to load configuration record from {}", path.display())
            })?,
            None => ConfigurationRecord::build(),
        };

        let mut builder = base.to_builder();
        if let Some(value) = &self.analysis_type {
            builder = builder.analysis_type(value);
        }
        if let Some(value) = &self.digis_instance_label {
            builder = builder.digis_instance_label(value);
        }
        if let Some(value) = &self.digis_module_label {
            builder = builder.digis_module_label(value);
        }
        if self.simulation {
            builder = builder.digi_source(DigiSource::Simulation);
        }
        Ok(builder.build())
    }
}

/// Output encoding for structured command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Pick a format from the `--json` / `--yaml` flags; JSON wins if both are set.
    pub fn from_flags(json: bool, yaml: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }
}

/// Return `path` as-is when absolute, otherwise joined onto the current directory.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(cwd.join(path))
    }
}
