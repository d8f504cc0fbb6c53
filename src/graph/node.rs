use super::input::InputItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier, unique for the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A canvas-local position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The immutable identity of a node: enough to label it and to find it again.
///
/// This is what a node contributes when it is used as another node's input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub id: NodeId,
    pub process: String,
}

impl NodeRef {
    /// The `process-id` label shown in input lists.
    pub fn display(&self) -> String {
        format!("{}-{}", self.process, self.id)
    }
}

/// A placed process instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    process: String,
    pub(crate) position: Point,
    pub(crate) inputs: Vec<InputItem>,
}

impl Node {
    pub(crate) fn new(id: NodeId, process: String, position: Point) -> Self {
        Self {
            id,
            process,
            position,
            inputs: Vec::new(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// The process catalog entry this node instantiates.
    pub fn process(&self) -> &str {
        &self.process
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn inputs(&self) -> &[InputItem] {
        &self.inputs
    }

    pub fn display(&self) -> String {
        self.to_ref().display()
    }

    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            id: self.id.clone(),
            process: self.process.clone(),
        }
    }

    /// Whether an input with the same display label is already present.
    pub fn has_input_labelled(&self, label: &str) -> bool {
        self.inputs.iter().any(|input| input.display() == label)
    }

    /// Whether `other` feeds this node.
    pub fn is_fed_by(&self, other: &NodeId) -> bool {
        self.inputs
            .iter()
            .any(|input| input.node_id() == Some(other))
    }
}
