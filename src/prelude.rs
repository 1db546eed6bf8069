//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can
//! reach the core workflow with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use stagewise::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let bytes = std::fs::read("pipeline.json")?;
//! let (document, warnings) = load_document(&bytes)?;
//! for warning in &warnings {
//!     eprintln!("warning: {}", warning);
//! }
//!
//! let stage = document.stage(StageKind::Initialization).unwrap();
//! let (graph, _) = build_stage_graph(StageKind::Initialization, stage);
//! println!("{} nodes", graph.nodes.len());
//! # Ok(())
//! # }
//! ```

// Document model and I/O
pub use crate::document::{
    load_document, save_document, Document, FunctionInstance, ParamKind, ParameterMap,
    ParameterNode, Position, Stage, StageKind,
};

// Graph model and conversions
pub use crate::graph::{
    assemble_stage, build_stage_graph, parse_handle_ordinal, synthesize_parameter_nodes, EdgeKind,
    FunctionNodeData, Graph, GraphEdge, GraphNode, NodePayload, ParameterNodeData,
    StageGraphBuilder,
};

// Layout strategies
pub use crate::layout::{Direction, LayoutStrategy, RankedLayout, StaggeredLayout};

// Catalog boundary
pub use crate::catalog::{EmptyCatalog, FunctionCatalog, FunctionSpec, ParameterSpec, StaticCatalog};

// Session state
pub use crate::session::EditorState;

// Error types
pub use crate::error::{ConversionWarning, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
