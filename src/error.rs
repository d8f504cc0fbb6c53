use crate::graph::NodeId;
use thiserror::Error;

/// Errors raised by the interactive editor facade.
///
/// The graph model itself never fails; these cover requests that name something
/// the editor does not know about, or arrive in the wrong interaction state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Node '{0}' does not exist in the workflow")]
    NodeNotFound(NodeId),

    #[error("Process type '{0}' is not part of the process palette")]
    UnknownProcess(String),

    #[error("No node is selected")]
    NoNodeSelected,

    #[error("No input candidate is chosen for node '{0}'")]
    NoCandidateChosen(NodeId),

    #[error("Candidate index {index} is out of range ({len} candidates available)")]
    CandidateOutOfRange { index: usize, len: usize },

    #[error("No candidate labelled '{0}' is available")]
    CandidateNotFound(String),

    #[error("Node '{node_id}' has no input labelled '{label}'")]
    InputNotFound { node_id: NodeId, label: String },

    #[error("Node '{node_id}' cannot take '{label}' as an input")]
    InputNotAdded { node_id: NodeId, label: String },

    #[error("Node '{node_id}' has no input at index {index} ({len} inputs)")]
    InputIndexOutOfRange {
        node_id: NodeId,
        index: usize,
        len: usize,
    },

    #[error("Node index {index} is out of range ({len} nodes placed)")]
    NodeIndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur while loading a dataset collection or process palette.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Could not read catalog file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),
}

/// Errors that can occur while loading an editor configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}
