use crate::document::ParamKind;
use ahash::AHashMap;

/// Schema entry for one parameter a function accepts.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ParamKind,
    pub default: Option<serde_json::Value>,
}

/// What a catalog knows about one function: presentation fields and the
/// parameter schema the editing surface renders.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    pub display_name: String,
    pub description: String,
    pub category: String,
    pub parameter_schema: Vec<ParameterSpec>,
}

/// Read-only lookup from function name to its spec.
///
/// This is the extension point for whatever registry the host application
/// maintains. An absent name is never an error anywhere in this crate;
/// unknown functions pass through conversion as opaque instances.
pub trait FunctionCatalog {
    fn lookup(&self, function_name: &str) -> Option<&FunctionSpec>;
}

/// A map-backed catalog, for hosts that know their function set up front
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    specs: AHashMap<String, FunctionSpec>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, function_name: impl Into<String>, spec: FunctionSpec) {
        self.specs.insert(function_name.into(), spec);
    }

    pub fn with_spec(mut self, function_name: impl Into<String>, spec: FunctionSpec) -> Self {
        self.insert(function_name, spec);
        self
    }
}

impl FunctionCatalog for StaticCatalog {
    fn lookup(&self, function_name: &str) -> Option<&FunctionSpec> {
        self.specs.get(function_name)
    }
}

/// A catalog that knows nothing. Every function passes through as opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl FunctionCatalog for EmptyCatalog {
    fn lookup(&self, _function_name: &str) -> Option<&FunctionSpec> {
        None
    }
}
