//! Stroke tracking for the editor.
//!
//! At most one stroke (press, any number of drags, release) is active at a
//! time. `Drawing` means the pointer is held on the canvas, whatever the tool:
//!
//! ```text
//! ┌──────────┐       press           ┌───────────┐
//! │   Idle   ├──────────────────────►│  Drawing  │◄─┐ drag / tool change
//! │          │◄──────────────────────┤           ├──┘
//! └──────────┘  release / resize /   └───────────┘
//!               clear
//! ```

use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    /// No pointer button held on the canvas
    #[default]
    Idle,
    /// The pointer is held; `tool` is the tool that was active on press
    Drawing { tool: ToolKind },
}

impl StrokeState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &StrokeState) -> bool {
        match (self, new_state) {
            (StrokeState::Idle, StrokeState::Drawing { .. }) => true,
            (StrokeState::Drawing { .. }, StrokeState::Idle) => true,
            // Restarting a stroke without a release in between is tolerated
            (StrokeState::Drawing { .. }, StrokeState::Drawing { .. }) => true,
            (StrokeState::Idle, StrokeState::Idle) => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, StrokeState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, StrokeState::Drawing { .. })
    }

    /// The tool the current stroke was started with, if any
    pub fn current_tool(&self) -> Option<ToolKind> {
        match self {
            StrokeState::Drawing { tool } => Some(*tool),
            StrokeState::Idle => None,
        }
    }
}
