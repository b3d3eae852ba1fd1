use swn_core::errors::{ErrorFamily, ErrorInfo, SwnError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", "1")
        .with_context("k", "4")
}

#[test]
fn graph_error_surface() {
    let err = SwnError::Graph(sample_info("too-few-nodes", "need two nodes"));
    assert_eq!(err.code(), "too-few-nodes");
    assert!(err.info().context.contains_key("n"));
}

#[test]
fn layout_error_surface() {
    let err = SwnError::Layout(sample_info("invalid-area", "area must be positive"));
    assert_eq!(err.info().code, "invalid-area");
}

#[test]
fn walk_error_surface() {
    let err = SwnError::Walk(sample_info("empty-label", "labels must be non-empty"));
    assert_eq!(err.info().code, "empty-label");
}

#[test]
fn config_error_surface() {
    let err = SwnError::Config(sample_info("walk-length-limit", "walk too long"));
    assert!(err.info().context.contains_key("k"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = SwnError::Serde(
        ErrorInfo::new("invalid-node-id", "node id is not numeric")
            .with_context("id", "abc")
            .with_hint("node ids are decimal strings"),
    );
    assert_eq!(
        err.to_string(),
        "serde error: [invalid-node-id] node id is not numeric (id=abc); hint: node ids are decimal strings"
    );
}

#[test]
fn display_lists_context_in_key_order() {
    let info = sample_info("ring-degree-too-large", "k must be below n");
    assert_eq!(info.to_string(), "[ring-degree-too-large] k must be below n (k=4, n=1)");
}

#[test]
fn family_round_trips_through_new() {
    for family in [
        ErrorFamily::Graph,
        ErrorFamily::Layout,
        ErrorFamily::Walk,
        ErrorFamily::Config,
        ErrorFamily::Serde,
    ] {
        let err = SwnError::new(family, ErrorInfo::new("code", "message"));
        assert_eq!(err.family(), family);
        assert!(err.to_string().starts_with(family.as_str()));
    }
}
