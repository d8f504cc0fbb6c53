use super::scene::{LinkShape, NodeShape, Scene};
use crate::graph::{GraphModel, LinkKey, NodeId, Point};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

const TRACING_TARGET: &str = "pipegraph::render";

/// What a reconciliation pass changed. Key lists are sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub created_nodes: Vec<NodeId>,
    pub moved_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
    pub untouched_nodes: usize,
    pub created_links: Vec<LinkKey>,
    pub rerouted_links: Vec<LinkKey>,
    pub removed_links: Vec<LinkKey>,
    pub untouched_links: usize,
}

impl SyncReport {
    /// Whether the pass left the scene exactly as it found it.
    pub fn is_noop(&self) -> bool {
        self.created_nodes.is_empty()
            && self.moved_nodes.is_empty()
            && self.removed_nodes.is_empty()
            && self.created_links.is_empty()
            && self.rerouted_links.is_empty()
            && self.removed_links.is_empty()
    }
}

/// Brings a [`Scene`] in line with a [`GraphModel`].
///
/// Shapes are matched by key, never by position in a list. A shape whose model
/// element is unchanged is not written to at all, so per-shape state such as the
/// dragging flag survives every pass.
pub struct RenderSync;

impl RenderSync {
    pub fn reconcile(model: &GraphModel, scene: &mut Scene) -> SyncReport {
        let mut report = SyncReport::default();
        Self::sync_nodes(model, scene, &mut report);
        Self::sync_links(model, scene, &mut report);

        tracing::trace!(
            target: TRACING_TARGET,
            created_nodes = report.created_nodes.len(),
            moved_nodes = report.moved_nodes.len(),
            removed_nodes = report.removed_nodes.len(),
            created_links = report.created_links.len(),
            rerouted_links = report.rerouted_links.len(),
            removed_links = report.removed_links.len(),
            "Scene reconciled"
        );
        report
    }

    fn sync_nodes(model: &GraphModel, scene: &mut Scene, report: &mut SyncReport) {
        let live: AHashSet<&NodeId> = model.nodes().iter().map(|n| n.id()).collect();
        report.removed_nodes = scene
            .nodes
            .keys()
            .filter(|id| !live.contains(id))
            .cloned()
            .sorted()
            .collect();
        for id in &report.removed_nodes {
            scene.nodes.remove(id);
        }

        for node in model.nodes() {
            match scene.nodes.get_mut(node.id()) {
                Some(shape) if shape.position == node.position() => {
                    report.untouched_nodes += 1;
                }
                Some(shape) => {
                    shape.position = node.position();
                    report.moved_nodes.push(node.id().clone());
                }
                None => {
                    let serial = scene.next_serial();
                    scene.nodes.insert(
                        node.id().clone(),
                        NodeShape {
                            node_id: node.id().clone(),
                            label: node.process().to_string(),
                            position: node.position(),
                            serial,
                            dragging: false,
                        },
                    );
                    report.created_nodes.push(node.id().clone());
                }
            }
        }
        report.moved_nodes.sort();
        report.created_nodes.sort();
    }

    fn sync_links(model: &GraphModel, scene: &mut Scene, report: &mut SyncReport) {
        let positions: AHashMap<&NodeId, Point> = model
            .nodes()
            .iter()
            .map(|n| (n.id(), n.position()))
            .collect();

        let derived: Vec<(LinkKey, Point, Point)> = model
            .links()
            .into_iter()
            .filter_map(|link| {
                let from = *positions.get(&link.src)?;
                let to = *positions.get(&link.dst)?;
                Some((link.key(), from, to))
            })
            .collect();

        let live: AHashSet<&LinkKey> = derived.iter().map(|(key, _, _)| key).collect();
        report.removed_links = scene
            .links
            .keys()
            .filter(|key| !live.contains(key))
            .cloned()
            .sorted()
            .collect();
        for key in &report.removed_links {
            scene.links.remove(key);
        }

        for (key, from, to) in derived {
            match scene.links.get_mut(&key) {
                Some(shape) if shape.from == from && shape.to == to => {
                    report.untouched_links += 1;
                }
                Some(shape) => {
                    shape.from = from;
                    shape.to = to;
                    report.rerouted_links.push(key);
                }
                None => {
                    let serial = scene.next_serial();
                    scene.links.insert(
                        key.clone(),
                        LinkShape {
                            key: key.clone(),
                            from,
                            to,
                            serial,
                        },
                    );
                    report.created_links.push(key);
                }
            }
        }
        report.rerouted_links.sort();
        report.created_links.sort();
    }
}
