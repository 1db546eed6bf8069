use super::model::{Document, ParameterMap, Stage, StageKind};
use crate::error::{ConversionWarning, DocumentError};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The wire shape of a document before stage keys are canonicalized.
/// Stage keys arrive as free strings so that legacy aliases and unknown
/// keys can be resolved here, in one place, instead of at every use site.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    metadata: ParameterMap,
    #[serde(default)]
    stages: BTreeMap<String, Stage>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Parses a pipeline document from JSON bytes.
///
/// The returned document always carries every stage; stages absent from
/// the input are present-but-empty. Legacy stage keys are resolved through
/// the alias table and reported, unknown keys are skipped and reported.
/// A load replaces the caller's document wholesale, so a failed parse
/// leaves prior state untouched.
pub fn load_document(bytes: &[u8]) -> Result<(Document, Vec<ConversionWarning>), DocumentError> {
    let raw: RawDocument =
        serde_json::from_slice(bytes).map_err(|e| DocumentError::JsonParse(e.to_string()))?;

    let mut warnings = Vec::new();
    let mut stages: BTreeMap<StageKind, Stage> = BTreeMap::new();

    // Canonical keys claim their slot first so a legacy alias can never
    // shadow the stage it renames.
    let mut aliased: Vec<(String, StageKind, Stage)> = Vec::new();
    for (key, stage) in raw.stages {
        match StageKind::resolve_key(&key) {
            Some((kind, false)) => {
                stages.insert(kind, stage);
            }
            Some((kind, true)) => aliased.push((key, kind, stage)),
            None => warnings.push(ConversionWarning::UnknownStageKey(key)),
        }
    }
    for (key, kind, stage) in aliased {
        if stages.contains_key(&kind) {
            warnings.push(ConversionWarning::UnknownStageKey(key));
        } else {
            warnings.push(ConversionWarning::LegacyStageKey {
                key,
                canonical: kind,
            });
            stages.insert(kind, stage);
        }
    }

    let mut document = Document {
        version: raw.version,
        name: raw.name,
        description: raw.description,
        metadata: raw.metadata,
        stages,
    };
    document.ensure_all_stages();

    Ok((document, warnings))
}

/// Serializes a document to pretty-printed JSON bytes. Stage keys are
/// always written under their canonical names.
pub fn save_document(document: &Document) -> Result<Vec<u8>, DocumentError> {
    serde_json::to_vec_pretty(document).map_err(|e| DocumentError::JsonSerialize(e.to_string()))
}
