//! The two-phase drop gesture that turns a palette drag into a placed node.
//!
//! A drag start arms the session with a process type. The next pointer event
//! inside the canvas places a node of that type at the pointer and disarms it.
//! An armed session never expires: it stays armed until it is cancelled, used,
//! or replaced by another drag start.

use crate::graph::{GraphModel, NodeId, Point};

const TRACING_TARGET: &str = "pipegraph::placement";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlacementState {
    #[default]
    Idle,
    Armed {
        process: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PlacementSession {
    state: PlacementState,
}

impl PlacementSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the session, replacing any pending drag.
    pub fn arm(&mut self, process: impl Into<String>) {
        let process = process.into();
        if let PlacementState::Armed { process: previous } = &self.state {
            tracing::debug!(
                target: TRACING_TARGET,
                previous = %previous,
                process = %process,
                "Pending placement superseded"
            );
        }
        self.state = PlacementState::Armed { process };
    }

    pub fn cancel(&mut self) {
        if self.is_armed() {
            tracing::debug!(target: TRACING_TARGET, "Placement cancelled");
        }
        self.state = PlacementState::Idle;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, PlacementState::Armed { .. })
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    /// Handles a pointer event at canvas-local `at`. If armed, places the node and
    /// returns its id; otherwise does nothing.
    pub fn pointer_over_canvas(&mut self, at: Point, model: &mut GraphModel) -> Option<NodeId> {
        let PlacementState::Armed { process } = std::mem::take(&mut self.state) else {
            return None;
        };

        let id = model.add_node(&process, at.x, at.y).id().clone();
        tracing::debug!(
            target: TRACING_TARGET,
            node_id = %id,
            process = %process,
            "Placement completed"
        );
        Some(id)
    }
}
