use crate::document::StageKind;
use thiserror::Error;

/// Hard failures at the document I/O boundary. Anything the loader can
/// default around is a [`ConversionWarning`] instead.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse pipeline document JSON: {0}")]
    JsonParse(String),

    #[error("Failed to serialize pipeline document: {0}")]
    JsonSerialize(String),
}

/// Non-fatal findings surfaced during load or graph construction.
///
/// Warnings travel alongside the converted value and are never embedded in
/// the document itself; an enclosing UI or CLI decides how to show them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionWarning {
    #[error(
        "Function '{function_id}' in stage '{stage}' references parameter node '{parameter_node_id}', which does not exist in that stage"
    )]
    DanglingParameterRef {
        stage: StageKind,
        function_id: String,
        parameter_node_id: String,
    },

    #[error("Legacy stage key '{key}' was loaded as '{canonical}'")]
    LegacyStageKey { key: String, canonical: StageKind },

    #[error("Unknown stage key '{0}' was skipped")]
    UnknownStageKey(String),
}
