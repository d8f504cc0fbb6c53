//! Keeps a keyed visual scene in step with the graph model.

mod scene;
pub mod svg;
mod sync;

pub use scene::{LinkShape, NodeShape, Scene};
pub use svg::{SvgDocument, to_svg};
pub use sync::{RenderSync, SyncReport};
