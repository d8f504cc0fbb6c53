//! # Pipegraph - Workflow Graph Editor Core
//!
//! **Pipegraph** is the model behind a visual pipeline editor. Users drag process
//! types from a palette onto a canvas, wire nodes together by editing each node's
//! inputs, and feed datasets into them. Pipegraph owns the parts of that editor
//! that carry actual rules:
//!
//! - [`graph::GraphModel`]: the nodes, their inputs, and the links derived from them.
//! - [`resolver::CandidateInputResolver`]: which items may become a node's next input.
//! - [`placement::PlacementSession`]: the drag-then-drop gesture that places a node.
//! - [`render::RenderSync`]: keeps a keyed scene of shapes in step with the model.
//!
//! [`editor::WorkflowEditor`] ties these together behind an event-driven API. Each
//! event runs to completion (mutate the model, then reconcile the scene) before
//! the next one is handled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipegraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let datasets = DatasetCollection::from_json(r#"{"tas": {}, "pr": {}}"#)?;
//!     let mut editor = WorkflowEditor::builder(ProcessPalette::new(["subset", "aggregate"]))
//!         .with_datasets(datasets)
//!         .build();
//!
//!     // Drag "subset" from the palette and drop it on the canvas.
//!     editor.drag_start("subset")?;
//!     let node = editor.pointer_over_canvas(120.0, 80.0).expect("drag was armed");
//!
//!     // Open the node and feed it the first candidate dataset.
//!     let candidates = editor.click_node(&node)?;
//!     println!("Candidates: {:?}", candidates.available());
//!     let added = editor.add_chosen_input()?;
//!     println!("Added input {}", added);
//!
//!     println!("{}", editor.to_svg());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod graph;
pub mod placement;
pub mod prelude;
pub mod render;
pub mod resolver;
