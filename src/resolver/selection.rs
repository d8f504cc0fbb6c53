use super::CandidateInputResolver;
use crate::catalog::DatasetCatalog;
use crate::error::EditorError;
use crate::graph::{GraphModel, InputItem, NodeId};

/// The candidate list offered for one selected node, plus the one currently chosen.
///
/// `chosen` is `None` only when there is nothing to offer; the UI shows a
/// placeholder in that case instead of an arbitrary default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateSelection {
    available: Vec<InputItem>,
    chosen: Option<InputItem>,
}

impl CandidateSelection {
    /// Computes a fresh selection for `node`, choosing the first candidate.
    pub fn resolve(model: &GraphModel, node: &NodeId, datasets: &dyn DatasetCatalog) -> Self {
        let available = CandidateInputResolver::resolve(model, node, datasets);
        let chosen = available.first().cloned();
        Self { available, chosen }
    }

    pub fn available(&self) -> &[InputItem] {
        &self.available
    }

    pub fn chosen(&self) -> Option<&InputItem> {
        self.chosen.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Chooses the candidate at `index`.
    pub fn choose(&mut self, index: usize) -> Result<&InputItem, EditorError> {
        let item = self
            .available
            .get(index)
            .ok_or(EditorError::CandidateOutOfRange {
                index,
                len: self.available.len(),
            })?;
        self.chosen = Some(item.clone());
        Ok(item)
    }

    /// Chooses the candidate whose display label is `label`.
    pub fn choose_labelled(&mut self, label: &str) -> Result<&InputItem, EditorError> {
        let index = self
            .available
            .iter()
            .position(|item| item.display() == label)
            .ok_or_else(|| EditorError::CandidateNotFound(label.to_string()))?;
        self.choose(index)
    }

    /// Recomputes after the chosen item was added: the choice falls back to the
    /// first remaining candidate.
    pub(crate) fn refresh_after_add(
        &mut self,
        model: &GraphModel,
        node: &NodeId,
        datasets: &dyn DatasetCatalog,
    ) {
        *self = Self::resolve(model, node, datasets);
    }

    /// Recomputes after an input was removed. An existing choice stays as it was;
    /// an empty choice becomes the first candidate.
    pub(crate) fn refresh_after_remove(
        &mut self,
        model: &GraphModel,
        node: &NodeId,
        datasets: &dyn DatasetCatalog,
    ) {
        let previous = self.chosen.take();
        self.available = CandidateInputResolver::resolve(model, node, datasets);
        self.chosen = match previous {
            Some(item) if self.available.contains(&item) => Some(item),
            _ => self.available.first().cloned(),
        };
    }
}
