//! Decides which items may legally become a node's next input.

mod selection;

pub use selection::CandidateSelection;

use crate::catalog::DatasetCatalog;
use crate::graph::{GraphModel, InputItem, NodeId};
use ahash::AHashSet;

const TRACING_TARGET: &str = "pipegraph::resolver";

/// Computes the candidate inputs for a selected node.
///
/// The result is rebuilt from scratch on every call; nothing is cached between
/// selections.
pub struct CandidateInputResolver;

impl CandidateInputResolver {
    /// Returns the items that may be added to `selected`'s inputs: nodes first, in
    /// placement order, then datasets in catalog order.
    ///
    /// A node is excluded if it is `selected` itself, already feeds `selected`,
    /// shares its label with an existing input, or is already fed by `selected`. The last rule only guards against direct
    /// two-node cycles; longer cycles are not detected.
    ///
    /// An unknown `selected` id yields no candidates.
    pub fn resolve(
        model: &GraphModel,
        selected: &NodeId,
        datasets: &dyn DatasetCatalog,
    ) -> Vec<InputItem> {
        let Some(node) = model.node(selected) else {
            return Vec::new();
        };

        let present: AHashSet<String> = node.inputs().iter().map(InputItem::display).collect();

        let nodes = model
            .nodes()
            .iter()
            .filter(|candidate| candidate.id() != selected)
            .filter(|candidate| !node.is_fed_by(candidate.id()))
            .filter(|candidate| !present.contains(&candidate.display()))
            .filter(|candidate| !model.has_link(selected, candidate.id()))
            .map(|candidate| InputItem::Node(candidate.to_ref()));

        let dataset_keys = datasets.dataset_keys();
        let datasets = dataset_keys
            .into_iter()
            .filter(|key| !present.contains(key))
            .map(InputItem::dataset);

        let candidates: Vec<InputItem> = nodes.chain(datasets).collect();
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %selected,
            candidates = candidates.len(),
            "Resolved input candidates"
        );
        candidates
    }
}
