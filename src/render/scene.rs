use crate::graph::{LinkKey, NodeId, Point};
use ahash::AHashMap;
use itertools::Itertools;

/// The visual for one node: a circle at `position` labelled with its process type.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    pub node_id: NodeId,
    pub label: String,
    pub position: Point,
    /// Creation order within the scene. Never changes while the shape lives.
    pub serial: u64,
    /// Set by the pointer layer while the node is being dragged.
    pub dragging: bool,
}

impl NodeShape {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.position.x, self.position.y)
    }
}

/// The visual for one link: a straight path from source to destination centre.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkShape {
    pub key: LinkKey,
    pub from: Point,
    pub to: Point,
    pub serial: u64,
}

impl LinkShape {
    pub fn path(&self) -> String {
        format!(
            "M{},{}L{},{}",
            self.from.x, self.from.y, self.to.x, self.to.y
        )
    }
}

/// Visual elements keyed by identity: nodes by id, links by endpoint pair.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub(crate) nodes: AHashMap<NodeId, NodeShape>,
    pub(crate) links: AHashMap<LinkKey, LinkShape>,
    next_serial: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeShape> {
        self.nodes.get(id)
    }

    pub fn link(&self, src: &NodeId, dst: &NodeId) -> Option<&LinkShape> {
        self.links.get(&(src.clone(), dst.clone()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Node shapes in creation order.
    pub fn nodes(&self) -> Vec<&NodeShape> {
        self.nodes.values().sorted_by_key(|s| s.serial).collect()
    }

    /// Link shapes in creation order.
    pub fn links(&self) -> Vec<&LinkShape> {
        self.links.values().sorted_by_key(|s| s.serial).collect()
    }

    /// Flags a node shape as being dragged. Returns `false` if it has no shape.
    pub fn set_dragging(&mut self, id: &NodeId, dragging: bool) -> bool {
        match self.nodes.get_mut(id) {
            Some(shape) => {
                shape.dragging = dragging;
                true
            }
            None => false,
        }
    }

    pub(crate) fn next_serial(&mut self) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }
}
