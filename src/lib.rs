//! # Stagewise - Pipeline Document and Graph Engine
//!
//! **Stagewise** converts declarative pipeline documents (stages of named,
//! parameterized function instances with a declared execution order) into
//! editable node/edge graphs and back, and places every node at a
//! deterministic 2D position from graph topology alone. It is the core a
//! visual pipeline editor sits on top of: the editor owns rendering and
//! interaction, an execution backend owns running the pipeline, and this
//! crate owns the conversion and layout in between.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Parse a JSON pipeline document with [`document::load_document`]
//!     (or [`session::EditorState::load`] to get graphs in one step). Legacy
//!     stage keys are resolved here and reported as warnings.
//! 2.  **Build**: Each stage becomes a [`graph::Graph`] of function and
//!     parameter nodes; functions with inline parameters and no binding get
//!     an auto-created parameter node first
//!     ([`graph::synthesize_parameter_nodes`]).
//! 3.  **Layout**: A [`layout::LayoutStrategy`] assigns positions. The
//!     staggered strategy alternates function nodes between two columns by
//!     rank parity; the ranked strategy layers nodes by topological depth.
//! 4.  **Assemble**: After edits, [`graph::assemble_stage`] reconstructs each
//!     stage from its graph and [`document::save_document`] writes the
//!     document back out, preserving fields the graph never touched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stagewise::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = std::fs::read("pipeline.json")?;
//!
//!     // Load the document and derive every stage's graph.
//!     let mut state = EditorState::load(&bytes, &EmptyCatalog)?;
//!     for warning in state.warnings() {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     // Place every node deterministically.
//!     state.layout_all(&StaggeredLayout::new());
//!
//!     // ... user edits the graphs ...
//!
//!     // Fold the graphs back into a document and save it.
//!     std::fs::write("pipeline.json", state.save()?)?;
//!     Ok(())
//! }
//! ```
//!
//! Conversion never fails on data it can default around: a missing stage
//! is an empty stage, a dangling parameter reference is a warning with the
//! offending edge omitted, and a function name no catalog recognizes
//! passes through untouched. Hard errors are reserved for unparseable
//! input at the I/O boundary.

pub mod catalog;
pub mod document;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod session;
