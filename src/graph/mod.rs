//! The in-memory workflow graph: placed nodes, their inputs, and the links derived
//! from them.

mod input;
mod model;
mod node;

pub use input::{DatasetRef, InputItem};
pub use model::{GraphModel, Link, LinkKey};
pub use node::{Node, NodeId, NodeRef, Point};
