//! lascrack-core
//!
//! Core library for configuring the LasCrackAnalysis laser-alignment analyzer.
//!
//! This crate defines the typed parameter set handed to analyzers, the
//! LasCrackAnalysis configuration record, host-owned registries for
//! configurations and analyzer factories, the analyzer's construction-time
//! validation, and JSON/YAML configuration files.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, job assembly tools, etc.).

pub mod analyzer;
pub mod config;
pub mod loader;
pub mod params;
pub mod registry;

pub use analyzer::{AnalysisMode, AnalyzerError, DigiType, LasCrackAnalysis, OutputMode};
pub use config::{ConfigurationRecord, DigiSource, RecordBuilder, COMPONENT_NAME};
pub use params::{ParamError, ParamValue, ParameterSet};
pub use registry::{default_factory_registry, ConfigRegistry, FactoryRegistry};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
