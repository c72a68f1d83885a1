use lascrack_core::{version, ConfigurationRecord, COMPONENT_NAME};

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn component_name_is_exact_literal() {
    assert_eq!(COMPONENT_NAME, "LasCrackAnalysis");
    assert_eq!(ConfigurationRecord::build().component_name(), "LasCrackAnalysis");
}
