use crate::catalog::FunctionCatalog;
use crate::document::{load_document, save_document, Document, StageKind};
use crate::error::{ConversionWarning, DocumentError};
use crate::graph::{assemble_stage, build_stage_graph, synthesize_parameter_nodes, Graph};
use crate::layout::LayoutStrategy;
use std::collections::BTreeMap;

/// The single owner of editor state: the current document plus one
/// editable graph per stage.
///
/// There is exactly one edit stream, so there is no locking; every load
/// replaces the document and all graphs in one step, and a failed load
/// leaves the previous state untouched. Conversions are pure transforms
/// over snapshots; nothing here mutates shared structure in place.
pub struct EditorState {
    document: Document,
    graphs: BTreeMap<StageKind, Graph>,
    warnings: Vec<ConversionWarning>,
}

impl EditorState {
    /// Builds editor state from an already-parsed document: synthesizes
    /// parameter nodes for every stage, then derives every stage's graph.
    pub fn from_document(mut document: Document, catalog: &dyn FunctionCatalog) -> Self {
        document.ensure_all_stages();

        let mut warnings = Vec::new();
        let mut graphs = BTreeMap::new();
        for kind in StageKind::ALL {
            let stage = document.stage_mut(kind);
            synthesize_parameter_nodes(stage, catalog);
            let (graph, stage_warnings) = build_stage_graph(kind, stage);
            warnings.extend(stage_warnings);
            graphs.insert(kind, graph);
        }

        Self {
            document,
            graphs,
            warnings,
        }
    }

    /// Parses a document from JSON bytes and builds state from it.
    pub fn load(bytes: &[u8], catalog: &dyn FunctionCatalog) -> Result<Self, DocumentError> {
        let (document, mut warnings) = load_document(bytes)?;
        let mut state = Self::from_document(document, catalog);
        warnings.append(&mut state.warnings);
        state.warnings = warnings;
        Ok(state)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn graph(&self, kind: StageKind) -> Option<&Graph> {
        self.graphs.get(&kind)
    }

    pub fn graph_mut(&mut self, kind: StageKind) -> Option<&mut Graph> {
        self.graphs.get_mut(&kind)
    }

    /// Warnings accumulated by the load and the stage conversions that
    /// produced this state.
    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    /// Runs a layout strategy over every stage graph.
    pub fn layout_all(&mut self, strategy: &dyn LayoutStrategy) {
        for kind in StageKind::ALL {
            let order = self
                .document
                .stage(kind)
                .map(|s| s.execution_order.clone())
                .unwrap_or_default();
            if let Some(graph) = self.graphs.get_mut(&kind) {
                strategy.layout(graph, &order);
            }
        }
    }

    /// Folds every stage graph back into a complete document. Stage-level
    /// fields the graphs do not carry (`enabled`, `steps`) are preserved
    /// from the current document.
    pub fn assemble_document(&self) -> Document {
        let mut document = self.document.clone();
        for kind in StageKind::ALL {
            if let Some(graph) = self.graphs.get(&kind) {
                let prior = document.stages.get(&kind).cloned().unwrap_or_default();
                document.stages.insert(kind, assemble_stage(graph, &prior));
            }
        }
        document
    }

    /// Assembles and serializes the current state.
    pub fn save(&self) -> Result<Vec<u8>, DocumentError> {
        save_document(&self.assemble_document())
    }
}
