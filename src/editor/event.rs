use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// Names a node either by id or by its position in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSelector {
    Id { id: NodeId },
    Index { index: usize },
}

/// Names an entry in the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateSelector {
    Index { index: usize },
    Label { label: String },
}

/// Names one of the selected node's inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputSelector {
    Index { index: usize },
    Label { label: String },
}

/// A discrete user input, as delivered by the hosting UI or replayed from a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    DragStart { process: String },
    DragCancel,
    PointerOverCanvas { x: f64, y: f64 },
    ClickNode { node: NodeSelector },
    ClearSelection,
    ChooseCandidate { candidate: CandidateSelector },
    AddInput,
    RemoveInput { input: InputSelector },
    DragNode { node: NodeSelector, dx: f64, dy: f64 },
    DragNodeEnd { node: NodeSelector },
    Reset,
}

impl EditorEvent {
    /// Parses a JSON array of events.
    pub fn script_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
