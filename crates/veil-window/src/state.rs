//! Interaction states and the intents they produce

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Moving the window; `offset` is pointer minus window origin at press
    Dragging { offset: Point },
    /// Resizing the window; `last` is the pointer position of the previous step
    Resizing { last: Point },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Dragging { .. } => "dragging",
            InteractionState::Resizing { .. } => "resizing",
        }
    }
}

impl std::fmt::Display for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the host window should do in response to a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowIntent {
    StartDrag,
    StartResize,
    MoveTo(Point),
    ResizeTo(Size),
    End,
}
