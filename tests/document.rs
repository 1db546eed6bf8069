//! Tests for the document I/O boundary and the end-to-end session flow.
mod common;
use common::*;
use stagewise::prelude::*;

#[test]
fn test_legacy_diffusion_loads_as_microenvironment() {
    let (document, warnings) = load_document(legacy_document_json().as_bytes()).unwrap();

    let stage = document.stage(StageKind::Microenvironment).unwrap();
    assert!(!stage.enabled);
    assert_eq!(stage.steps, 4);
    assert_eq!(stage.functions.len(), 1);
    assert_eq!(stage.functions[0].function_name, "diffuse_oxygen");

    assert_eq!(
        warnings,
        vec![ConversionWarning::LegacyStageKey {
            key: "diffusion".to_string(),
            canonical: StageKind::Microenvironment,
        }]
    );
}

#[test]
fn test_legacy_alias_never_shadows_canonical_stage() {
    let json = r#"{
        "name": "both",
        "stages": {
            "microenvironment": { "steps": 2 },
            "diffusion": { "steps": 9 }
        }
    }"#;
    let (document, warnings) = load_document(json.as_bytes()).unwrap();

    assert_eq!(document.stage(StageKind::Microenvironment).unwrap().steps, 2);
    assert_eq!(
        warnings,
        vec![ConversionWarning::UnknownStageKey("diffusion".to_string())]
    );
}

#[test]
fn test_unknown_stage_key_is_skipped_with_warning() {
    let json = r#"{ "name": "odd", "stages": { "warp": {} } }"#;
    let (document, warnings) = load_document(json.as_bytes()).unwrap();

    assert_eq!(document.stages.len(), StageKind::ALL.len());
    assert_eq!(
        warnings,
        vec![ConversionWarning::UnknownStageKey("warp".to_string())]
    );
}

#[test]
fn test_missing_stages_load_as_defaults() {
    let (document, warnings) = load_document(br#"{ "name": "empty" }"#).unwrap();
    assert!(warnings.is_empty());

    for kind in StageKind::ALL {
        let stage = document.stage(kind).unwrap();
        assert!(stage.enabled);
        assert_eq!(stage.steps, 1);
        assert!(stage.functions.is_empty());
        assert!(stage.execution_order.is_empty());
    }
}

#[test]
fn test_function_field_defaults() {
    let (document, _) = load_document(scenario_document_json().as_bytes()).unwrap();
    let stage = document.stage(StageKind::Initialization).unwrap();

    // Function b omits most optional fields.
    let b = stage.function("b").unwrap();
    assert!(b.enabled);
    assert_eq!(b.step_count, 1);
    assert_eq!(b.position, Position::default());
    assert_eq!(b.function_file, "");
    assert!(b.parameter_nodes.is_empty());
}

#[test]
fn test_unparseable_json_is_a_hard_error() {
    let err = load_document(b"{not json").unwrap_err();
    assert!(matches!(err, DocumentError::JsonParse(_)));
}

#[test]
fn test_metadata_round_trips_verbatim() {
    let json = r#"{
        "version": "1.0",
        "name": "meta",
        "description": "keeps unrelated fields",
        "metadata": {
            "author": "tester",
            "created": "2024-05-01",
            "lab": { "room": 42, "tags": ["alpha", "beta"] }
        },
        "stages": {}
    }"#;
    let (document, _) = load_document(json.as_bytes()).unwrap();
    let saved = save_document(&document).unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&saved).unwrap();

    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(reparsed["metadata"], original["metadata"]);
    assert_eq!(reparsed["version"], original["version"]);
    assert_eq!(reparsed["name"], original["name"]);
    assert_eq!(reparsed["description"], original["description"]);
}

#[test]
fn test_save_emits_canonical_stage_keys() {
    let (document, _) = load_document(legacy_document_json().as_bytes()).unwrap();
    let saved = save_document(&document).unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&saved).unwrap();

    let stages = reparsed["stages"].as_object().unwrap();
    assert!(stages.contains_key("microenvironment"));
    assert!(!stages.contains_key("diffusion"));
}

#[test]
fn test_editor_state_builds_every_stage_graph() {
    let state = EditorState::load(scenario_document_json().as_bytes(), &EmptyCatalog).unwrap();

    for kind in StageKind::ALL {
        assert!(state.graph(kind).is_some());
    }

    // Synthesis ran before the build: b's inline parameters produced a
    // parameter node and a binding edge.
    let graph = state.graph(StageKind::Initialization).unwrap();
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.flow_edges().count(), 1);
    assert_eq!(graph.binding_edges().count(), 1);
}

#[test]
fn test_editor_state_save_reaches_a_fixpoint() {
    let state = EditorState::load(scenario_document_json().as_bytes(), &EmptyCatalog).unwrap();
    let first = state.save().unwrap();

    let reloaded = EditorState::load(&first, &EmptyCatalog).unwrap();
    assert!(reloaded.warnings().is_empty());
    let second = reloaded.save().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_layout_positions_survive_save() {
    let mut state = EditorState::load(scenario_document_json().as_bytes(), &EmptyCatalog).unwrap();
    state.layout_all(&StaggeredLayout::new());

    let saved = state.save().unwrap();
    let (document, _) = load_document(&saved).unwrap();
    let stage = document.stage(StageKind::Initialization).unwrap();

    use stagewise::layout::{LEFT_X, START_Y};
    assert_eq!(
        stage.function("a").unwrap().position,
        Position::new(LEFT_X, START_Y)
    );
}
