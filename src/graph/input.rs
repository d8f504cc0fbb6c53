use super::node::{NodeId, NodeRef};
use std::fmt;

/// A dataset referenced by its catalog key. Never a link source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetRef {
    pub key: String,
}

impl DatasetRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn display(&self) -> &str {
        &self.key
    }
}

/// Something that can be fed into a node.
///
/// Two items are the same input when their display labels match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputItem {
    Node(NodeRef),
    Dataset(DatasetRef),
}

impl InputItem {
    pub fn dataset(key: impl Into<String>) -> Self {
        InputItem::Dataset(DatasetRef::new(key))
    }

    pub fn display(&self) -> String {
        match self {
            InputItem::Node(node) => node.display(),
            InputItem::Dataset(dataset) => dataset.display().to_string(),
        }
    }

    /// The id of the feeding node, if this input is a node.
    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            InputItem::Node(node) => Some(&node.id),
            InputItem::Dataset(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, InputItem::Node(_))
    }
}

impl From<NodeRef> for InputItem {
    fn from(node: NodeRef) -> Self {
        InputItem::Node(node)
    }
}

impl From<DatasetRef> for InputItem {
    fn from(dataset: DatasetRef) -> Self {
        InputItem::Dataset(dataset)
    }
}

impl fmt::Display for InputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputItem::Node(node) => f.write_str(&node.display()),
            InputItem::Dataset(dataset) => f.write_str(dataset.display()),
        }
    }
}
