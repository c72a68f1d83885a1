use lascrack_core::params::{ParamError, ParamValue, ParameterSet};

#[test]
fn typed_getters_return_inserted_values() {
    let mut params = ParameterSet::new();
    params
        .insert_tracked("Name", "las")
        .insert_tracked("Latency", -3_i32)
        .insert_tracked("Run", 12_u32)
        .insert_tracked("Threshold", 2.5_f64)
        .insert_tracked("Enabled", true)
        .insert_tracked("Producers", vec!["a".to_string(), "b".to_string()]);

    assert_eq!(params.get_tracked::<String>("Name").unwrap(), "las");
    assert_eq!(params.get_tracked::<i32>("Latency").unwrap(), -3);
    assert_eq!(params.get_tracked::<u32>("Run").unwrap(), 12);
    assert_eq!(params.get_tracked::<f64>("Threshold").unwrap(), 2.5);
    assert!(params.get_tracked::<bool>("Enabled").unwrap());
    assert_eq!(params.get_tracked::<Vec<String>>("Producers").unwrap(), vec!["a", "b"]);
    assert_eq!(params.len(), 6);
}

#[test]
fn missing_and_mistyped_lookups_are_errors() {
    let mut params = ParameterSet::new();
    params.insert_tracked("Count", 4_i32);

    assert_eq!(
        params.get_tracked::<i32>("Other").unwrap_err(),
        ParamError::Missing { name: "Other".into() }
    );
    let err = params.get_tracked::<String>("Count").unwrap_err();
    assert_eq!(
        err,
        ParamError::WrongType { name: "Count".into(), expected: "string", found: "int32" }
    );
    assert!(err.to_string().contains("expected string"));
}

#[test]
fn tracked_and_untracked_are_separate() {
    let mut params = ParameterSet::new();
    params.insert_untracked("OutputFileName", "out.root");

    assert!(params.contains("OutputFileName"));
    assert!(!params.is_tracked("OutputFileName"));
    assert!(params.get_tracked::<String>("OutputFileName").is_err());
    assert_eq!(params.get_untracked::<String>("OutputFileName").unwrap(), "out.root");

    // Re-inserting as tracked moves the parameter.
    params.insert_tracked("OutputFileName", "other.root");
    assert!(params.is_tracked("OutputFileName"));
    assert!(params.untracked_names().is_empty());
    assert_eq!(params.len(), 1);
}

#[test]
fn id_ignores_insertion_order_and_untracked_values() {
    let mut a = ParameterSet::new();
    a.insert_tracked("A", "x").insert_tracked("B", 1_i32);
    let mut b = ParameterSet::new();
    b.insert_tracked("B", 1_i32).insert_tracked("A", "x");
    b.insert_untracked("OutputFileName", "out.root");

    assert_eq!(a.id(), b.id());
    assert_eq!(a.id().len(), 64);
}

#[test]
fn id_changes_with_tracked_content() {
    let mut a = ParameterSet::new();
    a.insert_tracked("AnalysisType", "Pedestals");
    let mut b = ParameterSet::new();
    b.insert_tracked("AnalysisType", "Coarse_Delay");
    assert_ne!(a.id(), b.id());

    // Same textual value, different type.
    let mut c = ParameterSet::new();
    c.insert_tracked("N", "1");
    let mut d = ParameterSet::new();
    d.insert_tracked("N", 1_i32);
    assert_ne!(c.id(), d.id());
}

#[test]
fn canonical_string_is_sorted_and_typed() {
    let mut params = ParameterSet::new();
    params.insert_tracked("Zeta", true).insert_tracked("Alpha", "s");
    assert_eq!(params.canonical_string(), "5:Alpha6:string1:s;4:Zeta4:bool4:true;");
}

#[test]
fn id_distinguishes_string_vector_item_boundaries() {
    let mut joined = ParameterSet::new();
    joined.insert_tracked("V", vec!["a,b".to_string()]);
    let mut split = ParameterSet::new();
    split.insert_tracked("V", vec!["a".to_string(), "b".to_string()]);

    assert_ne!(joined.canonical_string(), split.canonical_string());
    assert_ne!(joined.id(), split.id());
}

#[test]
fn id_is_not_fooled_by_separators_inside_values() {
    let mut forged = ParameterSet::new();
    forged.insert_tracked("A", "x;B:string=y");
    let mut pair = ParameterSet::new();
    pair.insert_tracked("A", "x").insert_tracked("B", "y");

    assert_ne!(forged.id(), pair.id());
}

#[test]
fn deserialize_rejects_name_in_both_maps() {
    let json = r#"{
        "tracked": {"X": {"type": "string", "value": "a"}},
        "untracked": {"X": {"type": "string", "value": "b"}}
    }"#;
    let err = serde_json::from_str::<ParameterSet>(json).unwrap_err();
    assert!(err.to_string().contains("Parameter 'X' is both tracked and untracked"), "{err}");
}

#[test]
fn empty_set_reports_empty() {
    let params = ParameterSet::new();
    assert!(params.is_empty());
    assert_eq!(params.len(), 0);
    assert!(params.value("anything").is_none());
}

#[test]
fn json_round_trip_keeps_types() {
    let mut params = ParameterSet::new();
    params.insert_tracked("AnalysisType", "Pedestals").insert_tracked("Run", 7_u32);
    params.insert_untracked("OutputFileName", "out.root");

    let json = serde_json::to_string(&params).unwrap();
    assert!(json.contains(r#""type":"uint32""#), "unexpected json: {json}");
    let back: ParameterSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
    assert_eq!(back.value("Run"), Some(&ParamValue::UInt32(7)));
}
