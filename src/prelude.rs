//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the pipegraph
//! crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipegraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let palette = ProcessPalette::from_file("path/to/processes.json")?;
//! let datasets = DatasetCollection::from_file("path/to/datasets.json")?;
//! let mut editor = WorkflowEditor::builder(palette).with_datasets(datasets).build();
//!
//! editor.handle(EditorEvent::DragStart { process: "subset".to_string() })?;
//! editor.handle(EditorEvent::PointerOverCanvas { x: 10.0, y: 20.0 })?;
//! println!("{} nodes placed", editor.model().len());
//! # Ok(())
//! # }
//! ```

// Editor facade
pub use crate::editor::{
    CandidateSelector, EditorEvent, InputSelector, NodeSelector, SelectionState, WorkflowEditor,
};

// Graph model
pub use crate::graph::{DatasetRef, GraphModel, InputItem, Link, Node, NodeId, NodeRef, Point};

// Interaction pieces
pub use crate::placement::{PlacementSession, PlacementState};
pub use crate::resolver::{CandidateInputResolver, CandidateSelection};

// Rendering
pub use crate::render::{RenderSync, Scene, SyncReport};

// Collaborators and configuration
pub use crate::catalog::{
    DatasetCatalog, DatasetCollection, NotificationSink, ProcessCatalog, ProcessPalette,
    RecordingSink, TracingSink,
};
pub use crate::config::EditorConfig;

// Error types
pub use crate::error::{CatalogError, ConfigError, EditorError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
