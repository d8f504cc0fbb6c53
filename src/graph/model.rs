use super::input::InputItem;
use super::node::{Node, NodeId, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRACING_TARGET: &str = "pipegraph::graph";

/// Key of a link's visual: the ordered pair of endpoint ids.
pub type LinkKey = (NodeId, NodeId);

/// A directed edge `src -> dst`, present exactly when `src` is one of `dst`'s inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub src: NodeId,
    pub dst: NodeId,
}

impl Link {
    pub fn key(&self) -> LinkKey {
        (self.src.clone(), self.dst.clone())
    }
}

/// The authoritative set of nodes for one editing session.
///
/// Links are never stored; [`GraphModel::links`] derives them from node inputs on
/// every call, so the link set cannot drift from the inputs that imply it.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    rng: StdRng,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphModel {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a model whose node ids follow a reproducible sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Places a new node of `process` at `(x, y)` and returns it.
    pub fn add_node(&mut self, process: &str, x: f64, y: f64) -> &Node {
        let id = self.fresh_id();
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %id,
            process,
            x,
            y,
            "Node added"
        );
        self.nodes
            .push(Node::new(id, process.to_string(), Point::new(x, y)));
        &self.nodes[self.nodes.len() - 1]
    }

    /// Appends `item` to the inputs of `target`.
    ///
    /// No-op when the target is unknown, the item is the target itself, the item
    /// names a node outside this model, or the input is already present. A node
    /// item is stored with the process recorded in this model, whatever label the
    /// caller attached to it. Returns whether the inputs changed.
    pub fn add_input(&mut self, target: &NodeId, item: InputItem) -> bool {
        let item = match item {
            InputItem::Node(node_ref) => {
                let source = self
                    .node(&node_ref.id)
                    .filter(|source| source.id() != target)
                    .map(Node::to_ref);
                let Some(source) = source else {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        node_id = %target,
                        input = %node_ref.display(),
                        "Ignoring self or foreign node input"
                    );
                    return false;
                };
                InputItem::Node(source)
            }
            dataset => dataset,
        };

        let Some(node) = self.node_mut(target) else {
            return false;
        };

        let label = item.display();
        let already_fed = item.node_id().is_some_and(|src| node.is_fed_by(src));
        if already_fed || node.has_input_labelled(&label) {
            tracing::debug!(
                target: TRACING_TARGET,
                node_id = %target,
                input = %label,
                "Input already present"
            );
            return false;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %target,
            input = %label,
            creates_link = item.is_node(),
            "Input added"
        );
        node.inputs.push(item);
        true
    }

    /// Removes the input of `target` that matches `item`: by feeding node id for
    /// node items, by label for datasets. Returns whether anything was removed.
    pub fn remove_input(&mut self, target: &NodeId, item: &InputItem) -> bool {
        let Some(node) = self.node_mut(target) else {
            return false;
        };

        let label = item.display();
        let matches = |input: &InputItem| match item.node_id() {
            Some(src) => input.node_id() == Some(src),
            None => input.display() == label,
        };
        let Some(index) = node.inputs.iter().position(matches) else {
            return false;
        };

        let removed = node.inputs.remove(index);
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %target,
            input = %removed,
            removes_link = removed.is_node(),
            "Input removed"
        );
        true
    }

    /// Every `(src, dst)` pair implied by node inputs, in node order then input order.
    pub fn links(&self) -> Vec<Link> {
        self.nodes
            .iter()
            .flat_map(|dst| {
                dst.inputs.iter().filter_map(move |input| {
                    input.node_id().map(|src| Link {
                        src: src.clone(),
                        dst: dst.id().clone(),
                    })
                })
            })
            .collect()
    }

    /// Whether the link `src -> dst` currently exists.
    pub fn has_link(&self, src: &NodeId, dst: &NodeId) -> bool {
        self.node(dst).is_some_and(|node| node.is_fed_by(src))
    }

    /// Moves a node. Returns `false` if the node is unknown.
    pub fn update_position(&mut self, id: &NodeId, x: f64, y: f64) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.position = Point::new(x, y);
                tracing::trace!(target: TRACING_TARGET, node_id = %id, x, y, "Node moved");
                true
            }
            None => false,
        }
    }

    /// Drops every node, and with them every link.
    pub fn reset(&mut self) {
        tracing::debug!(
            target: TRACING_TARGET,
            removed = self.nodes.len(),
            "Graph reset"
        );
        self.nodes.clear();
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Nodes in placement order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn fresh_id(&mut self) -> NodeId {
        loop {
            let candidate = NodeId::new(format!("{:x}", self.rng.random::<u64>()));
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
