use swn_core::provenance::{RunProvenance, SchemaVersion, SeedSet};
use swn_core::{ErrorInfo, NodeId, Position, SwnError};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance {
        schema_version: SchemaVersion::new(1, 0, 0),
        request_hash: "request".into(),
        graph_hash: "graph".into(),
        seeds: SeedSet::new(1, 2, 3, 4),
        tool_versions: [("swn-core".into(), "0.1.0".into())].into_iter().collect(),
    };

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert_eq!(decoded.seeds.walk_pair(), (3, 4));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = SwnError::Config(ErrorInfo::new("odd-ring-degree", "k must be even"));
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["family"], "Config");
    assert_eq!(value["detail"]["code"], "odd-ring-degree");

    let decoded: SwnError = serde_json::from_value(value).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn ids_and_positions_render_compactly() {
    assert_eq!(NodeId::from_raw(7).to_string(), "7");
    assert_eq!(
        serde_json::to_string(&Position::new(-3, 4)).expect("serialize"),
        r#"{"x":-3,"y":4}"#
    );
}

#[test]
fn schema_versions_gate_readers() {
    let reader = SchemaVersion::new(1, 2, 0);
    assert_eq!(reader.to_string(), "1.2.0");
    assert!(reader.reads(&SchemaVersion::new(1, 0, 5)));
    assert!(!reader.reads(&SchemaVersion::new(1, 3, 0)));
    assert!(!reader.reads(&SchemaVersion::new(2, 0, 0)));
}
