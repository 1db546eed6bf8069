//! Unit tests for core stagewise types.
mod common;
use stagewise::prelude::*;

#[test]
fn test_param_kind_classification() {
    assert_eq!(ParamKind::of(&serde_json::json!(2.0)), ParamKind::Number);
    assert_eq!(ParamKind::of(&serde_json::json!(true)), ParamKind::Bool);
    assert_eq!(ParamKind::of(&serde_json::json!("fast")), ParamKind::Text);
    assert_eq!(ParamKind::of(&serde_json::json!(null)), ParamKind::Unknown);
    assert_eq!(
        ParamKind::of(&serde_json::json!({ "nested": 1 })),
        ParamKind::Unknown
    );
    assert_eq!(ParamKind::of(&serde_json::json!([1, 2])), ParamKind::Unknown);
}

#[test]
fn test_param_kind_display() {
    assert_eq!(format!("{}", ParamKind::Number), "number");
    assert_eq!(format!("{}", ParamKind::Unknown), "unknown");
}

#[test]
fn test_stage_kind_wire_keys() {
    for kind in StageKind::ALL {
        assert_eq!(StageKind::from_key(kind.as_str()), Some(kind));
        assert_eq!(format!("{}", kind), kind.as_str());
    }
    // The legacy alias is not a canonical key.
    assert_eq!(StageKind::from_key("diffusion"), None);
}

#[test]
fn test_stage_kind_alias_resolution() {
    assert_eq!(
        StageKind::resolve_key("diffusion"),
        Some((StageKind::Microenvironment, true))
    );
    assert_eq!(
        StageKind::resolve_key("microenvironment"),
        Some((StageKind::Microenvironment, false))
    );
    assert_eq!(StageKind::resolve_key("warp"), None);
}

#[test]
fn test_function_display_name_prefers_custom_name() {
    let mut func = FunctionInstance::new("f1", "grow_cells");
    assert_eq!(func.display_name(), "grow_cells");
    func.custom_name = "Growth".to_string();
    assert_eq!(func.display_name(), "Growth");
}

#[test]
fn test_flow_edge_handles_are_fixed() {
    let edge = GraphEdge::flow("a", "b");
    assert_eq!(edge.source_handle(), "flow-out");
    assert_eq!(edge.target_handle(), "flow-in");
    assert!(edge.animated);
    assert!(edge.is_flow());
}

#[test]
fn test_binding_edge_handles_derive_from_ordinal() {
    let edge = GraphEdge::binding("p1", "f1", 2);
    assert_eq!(edge.source_handle(), "param-out");
    assert_eq!(edge.target_handle(), "params-2");
    assert_eq!(edge.kind, EdgeKind::Binding { ordinal: 2 });
    assert!(!edge.animated);
}

#[test]
fn test_handle_ordinal_parsing() {
    assert_eq!(parse_handle_ordinal("params-0"), 0);
    assert_eq!(parse_handle_ordinal("params-17"), 17);
    assert_eq!(parse_handle_ordinal("garbage"), 0);
}

#[test]
fn test_warning_display_names_offenders() {
    let warning = ConversionWarning::DanglingParameterRef {
        stage: StageKind::Macrostep,
        function_id: "f9".to_string(),
        parameter_node_id: "missing_node".to_string(),
    };
    let message = warning.to_string();
    assert!(message.contains("f9"));
    assert!(message.contains("missing_node"));
    assert!(message.contains("macrostep"));

    let legacy = ConversionWarning::LegacyStageKey {
        key: "diffusion".to_string(),
        canonical: StageKind::Microenvironment,
    };
    assert!(legacy.to_string().contains("diffusion"));
    assert!(legacy.to_string().contains("microenvironment"));
}

#[test]
fn test_document_error_display() {
    let err = DocumentError::JsonParse("unexpected end of input".to_string());
    assert!(err.to_string().contains("unexpected end of input"));
}
