//! Construction-time contract of the LasCrackAnalysis analyzer.
//!
//! The configuration record carries plain strings. This module is where they
//! are checked: the analysis type must name a known mode, the instance label
//! must name a known digi type, and an untracked `OutputFileName` must be
//! present. Failures are typed `AnalyzerError`s raised when the analyzer is
//! built, never when the record is.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::config::{
    ANALYSIS_TYPE_KEY, COMPONENT_NAME, DIGIS_INSTANCE_LABEL_KEY, DIGIS_MODULE_LABEL_KEY,
    UNDEFINED_ANALYSIS_TYPE,
};
use crate::params::{ParamError, ParameterSet};
use crate::registry::{Analyzer, AnalyzerFactory, ConfigRegistry};

/// Untracked parameter naming the analyzer's output file.
pub const OUTPUT_FILE_NAME_KEY: &str = "OutputFileName";

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid analysis type '{0}'. Allowed: Pedestals, Coarse_Delay")]
    UnknownAnalysisType(String),

    #[error("No valid analysis type was specified (AnalysisType is '{0}')")]
    UndefinedAnalysisType(String),

    #[error("Invalid DigisInstanceLabel '{0}'. Allowed: VirginRaw, ProcessedRaw, ZeroSuppressed")]
    UnknownDigiType(String),

    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("No configuration registered for component '{0}'")]
    NotRegistered(String),

    #[error("No analyzer factory registered for component '{0}'")]
    NoFactory(String),
}

/// Analysis modes the analyzer knows, plus the unset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisMode {
    #[serde(rename = "UNDEFINED")]
    Unset,
    Pedestals,
    #[serde(rename = "Coarse_Delay")]
    CoarseDelay,
}

impl AnalysisMode {
    /// The string form used in `AnalysisType`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Unset => UNDEFINED_ANALYSIS_TYPE,
            AnalysisMode::Pedestals => "Pedestals",
            AnalysisMode::CoarseDelay => "Coarse_Delay",
        }
    }

    /// How the output file is opened, or `None` while the mode is unset.
    ///
    /// Coarse-delay runs read pedestals written by an earlier pedestal run
    /// from the same file, so they update it instead of recreating it.
    pub fn output_mode(&self) -> Option<OutputMode> {
        match self {
            AnalysisMode::Unset => None,
            AnalysisMode::Pedestals => Some(OutputMode::Recreate),
            AnalysisMode::CoarseDelay => Some(OutputMode::Update),
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UNDEFINED_ANALYSIS_TYPE => Ok(AnalysisMode::Unset),
            "Pedestals" => Ok(AnalysisMode::Pedestals),
            "Coarse_Delay" => Ok(AnalysisMode::CoarseDelay),
            other => Err(AnalyzerError::UnknownAnalysisType(other.to_string())),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of digis selected by `DigisInstanceLabel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DigiType {
    ZeroSuppressed,
    VirginRaw,
    ProcessedRaw,
}

impl DigiType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigiType::ZeroSuppressed => "ZeroSuppressed",
            DigiType::VirginRaw => "VirginRaw",
            DigiType::ProcessedRaw => "ProcessedRaw",
        }
    }

    /// Only virgin-raw digis are processed; the others are accepted at
    /// construction but rejected by the analyzer once events arrive.
    pub fn is_supported(&self) -> bool {
        matches!(self, DigiType::VirginRaw)
    }
}

impl FromStr for DigiType {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ZeroSuppressed" => Ok(DigiType::ZeroSuppressed),
            "VirginRaw" => Ok(DigiType::VirginRaw),
            "ProcessedRaw" => Ok(DigiType::ProcessedRaw),
            other => Err(AnalyzerError::UnknownDigiType(other.to_string())),
        }
    }
}

impl fmt::Display for DigiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the analyzer opens its output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputMode {
    Recreate,
    Update,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Recreate => "RECREATE",
            OutputMode::Update => "UPDATE",
        }
    }
}

/// Validated settings of a constructed LasCrackAnalysis analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LasCrackAnalysis {
    pub analysis_mode: AnalysisMode,
    pub digi_type: DigiType,
    pub digis_module_label: String,
    pub digis_instance_label: String,
    pub output_file_name: String,
    pub output_mode: OutputMode,
}

impl LasCrackAnalysis {
    /// Validate `params` and build the analyzer settings.
    pub fn from_parameters(params: &ParameterSet) -> Result<Self, AnalyzerError> {
        let analysis_type: String = params.get_tracked(ANALYSIS_TYPE_KEY)?;
        let analysis_mode = analysis_type.parse::<AnalysisMode>().map_err(|err| {
            tracing::error!(component = COMPONENT_NAME, %analysis_type, "Invalid analysis type");
            err
        })?;
        let output_mode = match analysis_mode.output_mode() {
            Some(mode) => mode,
            None => {
                tracing::error!(
                    component = COMPONENT_NAME,
                    %analysis_type,
                    "Analysis type not set"
                );
                return Err(AnalyzerError::UndefinedAnalysisType(analysis_type));
            }
        };
        tracing::info!(component = COMPONENT_NAME, %analysis_mode, "The analysis type is set");

        let digis_module_label: String = params.get_tracked(DIGIS_MODULE_LABEL_KEY)?;
        let digis_instance_label: String = params.get_tracked(DIGIS_INSTANCE_LABEL_KEY)?;
        let digi_type = digis_instance_label.parse::<DigiType>().map_err(|err| {
            tracing::error!(
                component = COMPONENT_NAME,
                %digis_instance_label,
                "Invalid DigisInstanceLabel"
            );
            err
        })?;
        if !digi_type.is_supported() {
            tracing::warn!(
                component = COMPONENT_NAME,
                %digi_type,
                "Digi type is not processed yet; events will be rejected"
            );
        }

        let output_file_name: String = params.get_untracked(OUTPUT_FILE_NAME_KEY)?;

        Ok(Self {
            analysis_mode,
            digi_type,
            digis_module_label,
            digis_instance_label,
            output_file_name,
            output_mode,
        })
    }

    /// Look up this analyzer's parameters in `registry` and validate them.
    pub fn from_registry(registry: &ConfigRegistry) -> Result<Self, AnalyzerError> {
        let params = registry
            .get(COMPONENT_NAME)
            .ok_or_else(|| AnalyzerError::NotRegistered(COMPONENT_NAME.to_string()))?;
        Self::from_parameters(params)
    }
}

impl Analyzer for LasCrackAnalysis {
    fn name(&self) -> &str {
        COMPONENT_NAME
    }

    fn describe(&self) -> String {
        format!(
            "{} [{}] digis {}:{} ({}) -> {} ({})",
            COMPONENT_NAME,
            self.analysis_mode,
            self.digis_module_label,
            self.digis_instance_label,
            self.digi_type,
            self.output_file_name,
            self.output_mode.as_str()
        )
    }
}

/// Factory registered under `COMPONENT_NAME`.
pub struct LasCrackAnalysisFactory;

impl AnalyzerFactory for LasCrackAnalysisFactory {
    fn name(&self) -> &'static str {
        COMPONENT_NAME
    }

    fn create(&self, params: &ParameterSet) -> Result<Box<dyn Analyzer>, AnalyzerError> {
        Ok(Box::new(LasCrackAnalysis::from_parameters(params)?))
    }
}
