use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of pipeline stages, in execution order.
///
/// Stage keys in the wire format are the lowercase variant names. The one
/// legacy alias (`"diffusion"` for [`StageKind::Microenvironment`]) is
/// resolved by the loader only, never at use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Initialization,
    Macrostep,
    Intracellular,
    Microenvironment,
    Intercellular,
    Finalization,
}

/// Legacy wire keys and the canonical stage they map to. Consulted only
/// when loading a document.
pub(crate) const LEGACY_STAGE_ALIASES: &[(&str, StageKind)] =
    &[("diffusion", StageKind::Microenvironment)];

impl StageKind {
    /// All stages, in canonical execution order.
    pub const ALL: [StageKind; 6] = [
        StageKind::Initialization,
        StageKind::Macrostep,
        StageKind::Intracellular,
        StageKind::Microenvironment,
        StageKind::Intercellular,
        StageKind::Finalization,
    ];

    /// The canonical wire key for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Initialization => "initialization",
            StageKind::Macrostep => "macrostep",
            StageKind::Intracellular => "intracellular",
            StageKind::Microenvironment => "microenvironment",
            StageKind::Intercellular => "intercellular",
            StageKind::Finalization => "finalization",
        }
    }

    /// Parses a canonical wire key. Legacy aliases are not accepted here;
    /// use [`StageKind::resolve_key`] for loader-side resolution.
    pub fn from_key(key: &str) -> Option<StageKind> {
        StageKind::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Resolves a wire key to a stage, consulting the legacy alias table.
    /// The second element is `true` when the key was an alias.
    pub fn resolve_key(key: &str) -> Option<(StageKind, bool)> {
        if let Some(kind) = StageKind::from_key(key) {
            return Some((kind, false));
        }
        LEGACY_STAGE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, kind)| (*kind, true))
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 2D canvas position, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parameter value bundles are plain JSON objects. Key order is preserved
/// across load and save.
pub type ParameterMap = serde_json::Map<String, serde_json::Value>;

/// The broad display type of a parameter value, as the editing layer sees
/// it. Anything that is not a scalar classifies as [`ParamKind::Unknown`];
/// that is a rendering hint, never a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Bool,
    Text,
    Unknown,
}

impl ParamKind {
    pub fn of(value: &serde_json::Value) -> ParamKind {
        match value {
            serde_json::Value::Number(_) => ParamKind::Number,
            serde_json::Value::Bool(_) => ParamKind::Bool,
            serde_json::Value::String(_) => ParamKind::Text,
            _ => ParamKind::Unknown,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Number => "number",
            ParamKind::Bool => "bool",
            ParamKind::Text => "text",
            ParamKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// One configured unit of work placed in a stage. References an opaque
/// function name plus its own parameter values; whether the name exists in
/// any catalog is not this crate's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionInstance {
    pub id: String,
    pub function_name: String,
    #[serde(default)]
    pub function_file: String,
    #[serde(default)]
    pub parameters: ParameterMap,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub custom_name: String,
    #[serde(default = "default_one")]
    pub step_count: u32,
    #[serde(default)]
    pub parameter_nodes: Vec<String>,
}

impl FunctionInstance {
    pub fn new(id: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            function_name: function_name.into(),
            function_file: String::new(),
            parameters: ParameterMap::new(),
            enabled: true,
            position: Position::default(),
            description: String::new(),
            custom_name: String::new(),
            step_count: 1,
            parameter_nodes: Vec::new(),
        }
    }

    /// The name shown on the canvas: the custom name when set, otherwise
    /// the function name.
    pub fn display_name(&self) -> &str {
        if self.custom_name.is_empty() {
            &self.function_name
        } else {
            &self.custom_name
        }
    }
}

/// A named, shareable bundle of parameter values. Owned by the stage that
/// declares it; referenced by zero or more function instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub parameters: ParameterMap,
    #[serde(default)]
    pub position: Position,
}

/// One phase of the pipeline: an ordered set of function instances, the
/// parameter nodes they may bind to, and the declared execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_one")]
    pub steps: u32,
    #[serde(default)]
    pub functions: Vec<FunctionInstance>,
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
    #[serde(default)]
    pub execution_order: Vec<String>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: 1,
            functions: Vec::new(),
            parameters: Vec::new(),
            execution_order: Vec::new(),
        }
    }
}

impl Stage {
    pub fn function(&self, id: &str) -> Option<&FunctionInstance> {
        self.functions.iter().find(|f| f.id == id)
    }

    pub fn parameter_node(&self, id: &str) -> Option<&ParameterNode> {
        self.parameters.iter().find(|p| p.id == id)
    }
}

/// The complete declarative pipeline document. This is the only persisted
/// form and the sole contract handed to an execution backend.
///
/// `metadata` is an opaque JSON object carried through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub version: String,
    pub name: String,
    pub description: String,
    pub metadata: ParameterMap,
    pub stages: BTreeMap<StageKind, Stage>,
}

impl Document {
    /// Creates an empty document with every stage present and defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        let mut stages = BTreeMap::new();
        for kind in StageKind::ALL {
            stages.insert(kind, Stage::default());
        }
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            description: String::new(),
            metadata: ParameterMap::new(),
            stages,
        }
    }

    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.get(&kind)
    }

    pub fn stage_mut(&mut self, kind: StageKind) -> &mut Stage {
        self.stages.entry(kind).or_default()
    }

    /// Fills in any absent stage with a default one, so downstream passes
    /// can treat every stage as present-but-empty.
    pub fn ensure_all_stages(&mut self) {
        for kind in StageKind::ALL {
            self.stages.entry(kind).or_default();
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> u32 {
    1
}
