//! The event-driven editor: routes user input through placement, selection and the
//! graph model, and reconciles the scene after every change.

mod event;

pub use event::{CandidateSelector, EditorEvent, InputSelector, NodeSelector};

use crate::catalog::{DatasetCatalog, DatasetCollection, ProcessCatalog, ProcessPalette};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::graph::{GraphModel, InputItem, NodeId, Point};
use crate::placement::PlacementSession;
use crate::render::{RenderSync, Scene, SyncReport, to_svg};
use crate::resolver::CandidateSelection;

const TRACING_TARGET: &str = "pipegraph::editor";

/// Which node, if any, the input editor is open for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    NodeSelected {
        node: NodeId,
        candidates: CandidateSelection,
    },
}

pub struct WorkflowEditorBuilder {
    palette: Box<dyn ProcessCatalog>,
    datasets: Box<dyn DatasetCatalog>,
    config: EditorConfig,
}

impl WorkflowEditorBuilder {
    pub fn new(palette: impl ProcessCatalog + 'static) -> Self {
        Self {
            palette: Box::new(palette),
            datasets: Box::new(DatasetCollection::new()),
            config: EditorConfig::default(),
        }
    }

    pub fn with_datasets(mut self, datasets: impl DatasetCatalog + 'static) -> Self {
        self.datasets = Box::new(datasets);
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> WorkflowEditor {
        let model = match self.config.id_seed {
            Some(seed) => GraphModel::with_seed(seed),
            None => GraphModel::new(),
        };
        WorkflowEditor {
            palette: self.palette,
            datasets: self.datasets,
            config: self.config,
            model,
            placement: PlacementSession::new(),
            selection: SelectionState::NoSelection,
            scene: Scene::new(),
            last_sync: SyncReport::default(),
        }
    }
}

/// A single editing session over one workflow canvas.
pub struct WorkflowEditor {
    palette: Box<dyn ProcessCatalog>,
    datasets: Box<dyn DatasetCatalog>,
    config: EditorConfig,
    model: GraphModel,
    placement: PlacementSession,
    selection: SelectionState,
    scene: Scene,
    last_sync: SyncReport,
}

impl WorkflowEditor {
    pub fn builder(palette: impl ProcessCatalog + 'static) -> WorkflowEditorBuilder {
        WorkflowEditorBuilder::new(palette)
    }

    /// An editor over `processes` with the default configuration and no datasets.
    pub fn new<I, S>(processes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(ProcessPalette::new(processes)).build()
    }

    /// Dispatches one user input event.
    pub fn handle(&mut self, event: EditorEvent) -> Result<(), EditorError> {
        tracing::debug!(target: TRACING_TARGET, event = ?event, "Handling event");
        match event {
            EditorEvent::DragStart { process } => self.drag_start(&process),
            EditorEvent::DragCancel => {
                self.cancel_drag();
                Ok(())
            }
            EditorEvent::PointerOverCanvas { x, y } => {
                self.pointer_over_canvas(x, y);
                Ok(())
            }
            EditorEvent::ClickNode { node } => {
                let id = self.resolve_node(&node)?;
                self.click_node(&id).map(|_| ())
            }
            EditorEvent::ClearSelection => {
                self.clear_selection();
                Ok(())
            }
            EditorEvent::ChooseCandidate { candidate } => {
                let candidates = self.candidates_mut()?;
                match candidate {
                    CandidateSelector::Index { index } => candidates.choose(index).map(|_| ()),
                    CandidateSelector::Label { label } => {
                        candidates.choose_labelled(&label).map(|_| ())
                    }
                }
            }
            EditorEvent::AddInput => self.add_chosen_input().map(|_| ()),
            EditorEvent::RemoveInput { input } => {
                let label = self.resolve_input_label(&input)?;
                self.remove_input(&label).map(|_| ())
            }
            EditorEvent::DragNode { node, dx, dy } => {
                let id = self.resolve_node(&node)?;
                self.drag_node(&id, dx, dy).map(|_| ())
            }
            EditorEvent::DragNodeEnd { node } => {
                let id = self.resolve_node(&node)?;
                self.end_node_drag(&id)
            }
            EditorEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Starts dragging a process type from the palette, replacing any pending drag.
    pub fn drag_start(&mut self, process: &str) -> Result<(), EditorError> {
        if !self.palette.contains(process) {
            return Err(EditorError::UnknownProcess(process.to_string()));
        }
        self.placement.arm(process);
        Ok(())
    }

    pub fn cancel_drag(&mut self) {
        self.placement.cancel();
    }

    /// A pointer event inside the canvas. Places the dragged process if a drag is
    /// pending and returns the new node's id.
    pub fn pointer_over_canvas(&mut self, x: f64, y: f64) -> Option<NodeId> {
        let id = self
            .placement
            .pointer_over_canvas(Point::new(x, y), &mut self.model)?;
        self.sync();
        Some(id)
    }

    /// Opens the input editor for `id` with a freshly computed candidate list.
    pub fn click_node(&mut self, id: &NodeId) -> Result<&CandidateSelection, EditorError> {
        if !self.model.contains(id) {
            return Err(EditorError::NodeNotFound(id.clone()));
        }
        let candidates = CandidateSelection::resolve(&self.model, id, self.datasets.as_ref());
        self.selection = SelectionState::NodeSelected {
            node: id.clone(),
            candidates,
        };
        match &self.selection {
            SelectionState::NodeSelected { candidates, .. } => Ok(candidates),
            SelectionState::NoSelection => Err(EditorError::NoNodeSelected),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionState::NoSelection;
    }

    pub fn choose_candidate(&mut self, index: usize) -> Result<&InputItem, EditorError> {
        self.candidates_mut()?.choose(index)
    }

    /// Adds the chosen candidate to the selected node and returns it.
    ///
    /// Fails with [`EditorError::InputNotAdded`] when the model rejects the item.
    pub fn add_chosen_input(&mut self) -> Result<InputItem, EditorError> {
        let SelectionState::NodeSelected { node, candidates } = &mut self.selection else {
            return Err(EditorError::NoNodeSelected);
        };
        let item = candidates
            .chosen()
            .cloned()
            .ok_or_else(|| EditorError::NoCandidateChosen(node.clone()))?;

        let added = self.model.add_input(node, item.clone());
        candidates.refresh_after_add(&self.model, node, self.datasets.as_ref());
        if !added {
            tracing::warn!(
                target: TRACING_TARGET,
                node_id = %node,
                input = %item,
                "Chosen input was not added"
            );
            return Err(EditorError::InputNotAdded {
                node_id: node.clone(),
                label: item.display(),
            });
        }
        self.sync();
        Ok(item)
    }

    /// Removes the selected node's input labelled `label` and returns it.
    pub fn remove_input(&mut self, label: &str) -> Result<InputItem, EditorError> {
        let SelectionState::NodeSelected { node, candidates } = &mut self.selection else {
            return Err(EditorError::NoNodeSelected);
        };
        let item = self
            .model
            .node(node)
            .and_then(|n| n.inputs().iter().find(|i| i.display() == label))
            .cloned()
            .ok_or_else(|| EditorError::InputNotFound {
                node_id: node.clone(),
                label: label.to_string(),
            })?;

        self.model.remove_input(node, &item);
        candidates.refresh_after_remove(&self.model, node, self.datasets.as_ref());
        self.sync();
        Ok(item)
    }

    /// Moves a node by a pointer delta and returns its new position.
    pub fn drag_node(&mut self, id: &NodeId, dx: f64, dy: f64) -> Result<Point, EditorError> {
        let position = self
            .model
            .node(id)
            .map(|n| n.position().offset(dx, dy))
            .ok_or_else(|| EditorError::NodeNotFound(id.clone()))?;
        self.model.update_position(id, position.x, position.y);
        self.sync();
        self.scene.set_dragging(id, true);
        Ok(position)
    }

    pub fn end_node_drag(&mut self, id: &NodeId) -> Result<(), EditorError> {
        if self.scene.set_dragging(id, false) {
            Ok(())
        } else {
            Err(EditorError::NodeNotFound(id.clone()))
        }
    }

    /// Replaces the dataset snapshot. The next candidate computation reads it.
    pub fn set_datasets(&mut self, datasets: impl DatasetCatalog + 'static) {
        self.datasets = Box::new(datasets);
    }

    /// Clears the canvas: every node, the selection and any pending drag.
    pub fn reset(&mut self) {
        self.model.reset();
        self.selection = SelectionState::NoSelection;
        self.placement.cancel();
        self.sync();
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn placement(&self) -> &PlacementSession {
        &self.placement
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_node(&self) -> Option<&NodeId> {
        match &self.selection {
            SelectionState::NodeSelected { node, .. } => Some(node),
            SelectionState::NoSelection => None,
        }
    }

    pub fn candidates(&self) -> Option<&CandidateSelection> {
        match &self.selection {
            SelectionState::NodeSelected { candidates, .. } => Some(candidates),
            SelectionState::NoSelection => None,
        }
    }

    pub fn palette(&self) -> &[String] {
        self.palette.process_ids()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The report of the most recent reconciliation.
    pub fn last_sync(&self) -> &SyncReport {
        &self.last_sync
    }

    pub fn to_svg(&self) -> String {
        to_svg(&self.scene, &self.config)
    }

    fn sync(&mut self) {
        self.last_sync = RenderSync::reconcile(&self.model, &mut self.scene);
    }

    fn candidates_mut(&mut self) -> Result<&mut CandidateSelection, EditorError> {
        match &mut self.selection {
            SelectionState::NodeSelected { candidates, .. } => Ok(candidates),
            SelectionState::NoSelection => Err(EditorError::NoNodeSelected),
        }
    }

    fn resolve_node(&self, selector: &NodeSelector) -> Result<NodeId, EditorError> {
        match selector {
            NodeSelector::Id { id } => Ok(id.clone()),
            NodeSelector::Index { index } => self
                .model
                .nodes()
                .get(*index)
                .map(|n| n.id().clone())
                .ok_or(EditorError::NodeIndexOutOfRange {
                    index: *index,
                    len: self.model.len(),
                }),
        }
    }

    fn resolve_input_label(&self, selector: &InputSelector) -> Result<String, EditorError> {
        match selector {
            InputSelector::Label { label } => Ok(label.clone()),
            InputSelector::Index { index } => {
                let node_id = self.selected_node().ok_or(EditorError::NoNodeSelected)?;
                let inputs = self
                    .model
                    .node(node_id)
                    .map(|n| n.inputs())
                    .unwrap_or_default();
                inputs
                    .get(*index)
                    .map(InputItem::display)
                    .ok_or_else(|| EditorError::InputIndexOutOfRange {
                        node_id: node_id.clone(),
                        index: *index,
                        len: inputs.len(),
                    })
            }
        }
    }
}
