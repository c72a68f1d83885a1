//! Host-owned registries for component configuration and analyzer factories.
//!
//! Nothing here is global: the host creates a `ConfigRegistry`, registers
//! parameter sets into it during configuration assembly, and passes it to
//! `FactoryRegistry::instantiate` when analyzers are constructed.

use std::collections::{BTreeMap, HashMap};

use crate::analyzer::{AnalyzerError, LasCrackAnalysisFactory};
use crate::params::ParameterSet;

/// Component name -> parameter set, filled once at startup.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    entries: BTreeMap<String, ParameterSet>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Register `params` under `name`, replacing any earlier entry.
    pub fn register(&mut self, name: impl Into<String>, params: ParameterSet) -> &mut Self {
        self.entries.insert(name.into(), params);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSet> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sorted list of registered component names.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A constructed analyzer.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    /// One-line human-readable summary of the analyzer's resolved settings.
    fn describe(&self) -> String;
}

/// Builds an analyzer from its parameter set.
pub trait AnalyzerFactory: Send + Sync {
    fn name(&self) -> &'static str;
    fn create(&self, params: &ParameterSet) -> Result<Box<dyn Analyzer>, AnalyzerError>;
}

/// Registry of analyzer factories; callers select by component name.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Box<dyn AnalyzerFactory>>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self { factories: HashMap::new() }
    }

    pub fn register<F: AnalyzerFactory + 'static>(&mut self, factory: F) -> &mut Self {
        self.factories.insert(factory.name().to_string(), Box::new(factory));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn AnalyzerFactory> {
        self.factories.get(name).map(|f| &**f)
    }

    /// Return a sorted list of registered factory names for error messages/help.
    pub fn names(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.factories.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Construct the analyzer `name` from the parameters registered for it.
    pub fn instantiate(
        &self,
        configs: &ConfigRegistry,
        name: &str,
    ) -> Result<Box<dyn Analyzer>, AnalyzerError> {
        let factory = self.get(name).ok_or_else(|| AnalyzerError::NoFactory(name.to_string()))?;
        let params =
            configs.get(name).ok_or_else(|| AnalyzerError::NotRegistered(name.to_string()))?;
        factory.create(params)
    }
}

/// Convenience builder for a registry populated with every analyzer this crate provides.
pub fn default_factory_registry() -> FactoryRegistry {
    let mut registry = FactoryRegistry::new();
    registry.register(LasCrackAnalysisFactory);
    registry
}
