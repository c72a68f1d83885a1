//! The LasCrackAnalysis configuration record.
//!
//! Three string parameters tell the analyzer which analysis to run and where
//! to read its digis from. The record is built once, is immutable afterwards,
//! and is handed to the host through an explicit `ConfigRegistry`.
//!
//! The record does not validate anything: `"UNDEFINED"` or an unknown
//! analysis type is carried through as-is and rejected by the analyzer when it
//! is constructed (see `crate::analyzer`).

use serde::{Deserialize, Serialize};

use crate::params::{ParamResult, ParameterSet};
use crate::registry::ConfigRegistry;

/// Name the analyzer is registered under in the host's component registry.
pub const COMPONENT_NAME: &str = "LasCrackAnalysis";

pub const ANALYSIS_TYPE_KEY: &str = "AnalysisType";
pub const DIGIS_INSTANCE_LABEL_KEY: &str = "DigisInstanceLabel";
pub const DIGIS_MODULE_LABEL_KEY: &str = "DigisModuleLabel";

/// Placeholder analysis type meaning "not configured by the operator yet".
pub const UNDEFINED_ANALYSIS_TYPE: &str = "UNDEFINED";
pub const DEFAULT_DIGIS_INSTANCE_LABEL: &str = "VirginRaw";
/// Digi producer for real detector data.
pub const DEFAULT_DIGIS_MODULE_LABEL: &str = "siStripDigis";
/// Digi producer for simulated data.
pub const SIMULATION_DIGIS_MODULE_LABEL: &str = "simSiStripDigis";

/// Which upstream digi producer the analyzer reads from.
///
/// There is no rule for choosing between the two; callers pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigiSource {
    #[default]
    RealData,
    Simulation,
}

impl DigiSource {
    pub fn module_label(&self) -> &'static str {
        match self {
            DigiSource::RealData => DEFAULT_DIGIS_MODULE_LABEL,
            DigiSource::Simulation => SIMULATION_DIGIS_MODULE_LABEL,
        }
    }
}

/// Immutable parameter record for the LasCrackAnalysis analyzer.
///
/// Serializes with the framework's parameter names as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationRecord {
    #[serde(rename = "AnalysisType")]
    analysis_type: String,
    #[serde(rename = "DigisInstanceLabel")]
    digis_instance_label: String,
    #[serde(rename = "DigisModuleLabel")]
    digis_module_label: String,
}

impl Default for ConfigurationRecord {
    fn default() -> Self {
        Self::build()
    }
}

impl ConfigurationRecord {
    /// The record with its default values.
    pub fn build() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Start a new builder seeded with this record's values.
    pub fn to_builder(&self) -> RecordBuilder {
        RecordBuilder {
            analysis_type: self.analysis_type.clone(),
            digis_instance_label: self.digis_instance_label.clone(),
            digis_module_label: self.digis_module_label.clone(),
        }
    }

    pub fn analysis_type(&self) -> &str {
        &self.analysis_type
    }

    pub fn digis_instance_label(&self) -> &str {
        &self.digis_instance_label
    }

    pub fn digis_module_label(&self) -> &str {
        &self.digis_module_label
    }

    /// The name this record is registered under.
    pub fn component_name(&self) -> &'static str {
        COMPONENT_NAME
    }

    /// Key-value form of the record: three tracked string parameters.
    pub fn to_parameter_set(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        self.write_into(&mut params);
        params
    }

    fn write_into(&self, params: &mut ParameterSet) {
        params
            .insert_tracked(ANALYSIS_TYPE_KEY, self.analysis_type.as_str())
            .insert_tracked(DIGIS_INSTANCE_LABEL_KEY, self.digis_instance_label.as_str())
            .insert_tracked(DIGIS_MODULE_LABEL_KEY, self.digis_module_label.as_str());
    }

    /// Read a record back from its key-value form.
    ///
    /// Extra parameters (such as an untracked output file name) are ignored.
    pub fn from_parameter_set(params: &ParameterSet) -> ParamResult<Self> {
        Ok(Self {
            analysis_type: params.get_tracked(ANALYSIS_TYPE_KEY)?,
            digis_instance_label: params.get_tracked(DIGIS_INSTANCE_LABEL_KEY)?,
            digis_module_label: params.get_tracked(DIGIS_MODULE_LABEL_KEY)?,
        })
    }

    /// Register this record under `COMPONENT_NAME`, replacing any previous entry.
    pub fn register(&self, registry: &mut ConfigRegistry) {
        self.register_with(registry, ParameterSet::new());
    }

    /// Register this record together with extra (typically untracked) parameters.
    pub fn register_with(&self, registry: &mut ConfigRegistry, extra: ParameterSet) {
        let mut params = extra;
        self.write_into(&mut params);
        tracing::info!(
            component = COMPONENT_NAME,
            analysis_type = %self.analysis_type,
            digis_module_label = %self.digis_module_label,
            digis_instance_label = %self.digis_instance_label,
            "Registered configuration"
        );
        registry.register(COMPONENT_NAME, params);
    }
}

/// Builder used to override record fields before construction.
///
/// Each setter touches only its own field.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    analysis_type: String,
    digis_instance_label: String,
    digis_module_label: String,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self {
            analysis_type: UNDEFINED_ANALYSIS_TYPE.to_string(),
            digis_instance_label: DEFAULT_DIGIS_INSTANCE_LABEL.to_string(),
            digis_module_label: DEFAULT_DIGIS_MODULE_LABEL.to_string(),
        }
    }
}

impl RecordBuilder {
    pub fn analysis_type(mut self, value: impl Into<String>) -> Self {
        self.analysis_type = value.into();
        self
    }

    pub fn digis_instance_label(mut self, value: impl Into<String>) -> Self {
        self.digis_instance_label = value.into();
        self
    }

    pub fn digis_module_label(mut self, value: impl Into<String>) -> Self {
        self.digis_module_label = value.into();
        self
    }

    /// Set the module label from a digi source.
    pub fn digi_source(self, source: DigiSource) -> Self {
        self.digis_module_label(source.module_label())
    }

    pub fn build(self) -> ConfigurationRecord {
        ConfigurationRecord {
            analysis_type: self.analysis_type,
            digis_instance_label: self.digis_instance_label,
            digis_module_label: self.digis_module_label,
        }
    }
}
