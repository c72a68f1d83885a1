use std::path::Path;

use lascrack_core::loader::{
    load_parameter_set, load_record, save_parameter_set, save_record, ConfigFormat,
};
use lascrack_core::{ConfigurationRecord, DigiSource, ParameterSet};
use tempfile::tempdir;

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
    let err = ConfigFormat::from_path(Path::new("a.toml")).unwrap_err();
    assert!(err.to_string().contains("Unsupported configuration file extension"));
    assert!(ConfigFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn record_round_trips_through_json_and_yaml() {
    let dir = tempdir().unwrap();
    let record = ConfigurationRecord::builder()
        .analysis_type("Pedestals")
        .digi_source(DigiSource::Simulation)
        .build();

    for file in ["record.json", "record.yaml"] {
        let path = dir.path().join(file);
        save_record(&record, &path).unwrap();
        let back = load_record(&path).unwrap();
        assert_eq!(back, record, "round trip through {file}");
    }
}

#[test]
fn yaml_record_uses_framework_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("record.yml");
    std::fs::write(
        &path,
        "AnalysisType: Coarse_Delay\nDigisInstanceLabel: VirginRaw\nDigisModuleLabel: siStripDigis\n",
    )
    .unwrap();
    let record = load_record(&path).unwrap();
    assert_eq!(record.analysis_type(), "Coarse_Delay");
}

#[test]
fn parameter_set_round_trips_with_untracked_values() {
    let dir = tempdir().unwrap();
    let mut params = ConfigurationRecord::build().to_parameter_set();
    params.insert_untracked("OutputFileName", "out.root");

    let path = dir.path().join("params.yaml");
    save_parameter_set(&params, &path).unwrap();
    let back: ParameterSet = load_parameter_set(&path).unwrap();
    assert_eq!(back, params);
    assert_eq!(back.id(), params.id());
}

#[test]
fn load_record_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_record(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"), "unexpected: {err}");
}

#[test]
fn load_record_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not-json").unwrap();
    let err = load_record(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse JSON configuration"), "unexpected: {err}");
}

#[test]
fn load_record_rejects_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.json");
    std::fs::write(
        &path,
        r#"{"AnalysisType":"UNDEFINED","DigisInstanceLabel":"VirginRaw","DigisModuleLabel":"siStripDigis","Extra":1}"#,
    )
    .unwrap();
    let err = load_record(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Extra"), "unexpected: {err:#}");
}

#[test]
fn load_parameter_set_rejects_name_both_tracked_and_untracked() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overlap.yaml");
    std::fs::write(
        &path,
        "tracked:\n  X:\n    type: string\n    value: a\nuntracked:\n  X:\n    type: string\n    value: b\n",
    )
    .unwrap();
    let err = load_parameter_set(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to parse YAML configuration"), "unexpected: {message}");
    assert!(message.contains("both tracked and untracked"), "unexpected: {message}");
}
