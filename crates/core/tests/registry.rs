use lascrack_core::analyzer::{AnalyzerError, OUTPUT_FILE_NAME_KEY};
use lascrack_core::registry::{Analyzer, AnalyzerFactory};
use lascrack_core::{
    default_factory_registry, ConfigRegistry, ConfigurationRecord, FactoryRegistry, ParameterSet,
    COMPONENT_NAME,
};

struct EchoAnalyzer(String);

impl Analyzer for EchoAnalyzer {
    fn name(&self) -> &str {
        "Echo"
    }

    fn describe(&self) -> String {
        self.0.clone()
    }
}

struct EchoFactory;

impl AnalyzerFactory for EchoFactory {
    fn name(&self) -> &'static str {
        "Echo"
    }

    fn create(&self, params: &ParameterSet) -> Result<Box<dyn Analyzer>, AnalyzerError> {
        Ok(Box::new(EchoAnalyzer(params.get_tracked::<String>("Message")?)))
    }
}

#[test]
fn config_registry_registers_and_replaces() {
    let mut registry = ConfigRegistry::new();
    assert!(registry.is_empty());

    let mut first = ParameterSet::new();
    first.insert_tracked("Message", "one");
    let mut second = ParameterSet::new();
    second.insert_tracked("Message", "two");

    registry.register("Echo", first).register("Another", ParameterSet::new());
    registry.register("Echo", second);

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("Echo"));
    assert_eq!(registry.names(), vec!["Another".to_string(), "Echo".to_string()]);
    assert_eq!(registry.get("Echo").unwrap().get_tracked::<String>("Message").unwrap(), "two");
}

#[test]
fn factory_registry_instantiates_from_config() {
    let mut factories = FactoryRegistry::new();
    factories.register(EchoFactory);
    assert!(factories.get("Echo").is_some());

    let mut configs = ConfigRegistry::new();
    let mut params = ParameterSet::new();
    params.insert_tracked("Message", "hello");
    configs.register("Echo", params);

    let analyzer = factories.instantiate(&configs, "Echo").expect("instantiate");
    assert_eq!(analyzer.name(), "Echo");
    assert_eq!(analyzer.describe(), "hello");
}

#[test]
fn instantiate_reports_missing_factory_or_config() {
    let factories = FactoryRegistry::new();
    let configs = ConfigRegistry::new();
    let err = factories.instantiate(&configs, "Echo").err().expect("no factory");
    assert!(matches!(err, AnalyzerError::NoFactory(ref s) if s == "Echo"));

    let mut factories = FactoryRegistry::new();
    factories.register(EchoFactory);
    let err = factories.instantiate(&configs, "Echo").err().expect("no config");
    assert!(matches!(err, AnalyzerError::NotRegistered(ref s) if s == "Echo"));
}

#[test]
fn default_factory_registry_builds_lascrack_analysis() {
    let factories = default_factory_registry();
    assert_eq!(factories.names(), vec![COMPONENT_NAME.to_string()]);

    let mut configs = ConfigRegistry::new();
    let mut extra = ParameterSet::new();
    extra.insert_untracked(OUTPUT_FILE_NAME_KEY, "ped.root");
    ConfigurationRecord::builder()
        .analysis_type("Pedestals")
        .build()
        .register_with(&mut configs, extra);

    let analyzer = factories.instantiate(&configs, COMPONENT_NAME).expect("instantiate");
    assert_eq!(analyzer.name(), COMPONENT_NAME);
    assert!(analyzer.describe().contains("ped.root"));
}

#[test]
fn default_record_fails_in_factory_at_first_use() {
    let factories = default_factory_registry();
    let mut configs = ConfigRegistry::new();
    ConfigurationRecord::build().register(&mut configs);

    let err = factories.instantiate(&configs, COMPONENT_NAME).err().expect("undefined");
    assert!(matches!(err, AnalyzerError::UndefinedAnalysisType(_)));
}
