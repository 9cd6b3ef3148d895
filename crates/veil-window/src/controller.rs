//! Drag and resize controller for a frameless window

use crate::geometry::{Point, Size, WindowGeometry};
use crate::state::{InteractionState, PointerButton, WindowIntent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Distance from any edge, in logical units, that starts a resize
    pub edge_margin: f64,
    /// Smallest size a resize may produce
    pub min_size: Size,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            edge_margin: 10.0,
            min_size: Size::new(400.0, 300.0),
        }
    }
}

#[derive(Debug, Default)]
pub struct WindowInteractionController {
    config: InteractionConfig,
    state: InteractionState,
    /// Window geometry as of the last intent; only set during a gesture
    geometry: Option<WindowGeometry>,
}

impl WindowInteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
            geometry: None,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn geometry(&self) -> Option<WindowGeometry> {
        self.geometry
    }

    /// Start a gesture. Presses on or inside the edge margin resize; the rest drag.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        global: Point,
        geometry: WindowGeometry,
    ) -> Option<WindowIntent> {
        if button != PointerButton::Primary {
            return None;
        }

        let local = geometry.to_local(global);
        self.geometry = Some(geometry);

        if geometry.is_near_edge(local, self.config.edge_margin) {
            self.state = InteractionState::Resizing { last: global };
            tracing::trace!(x = local.x, y = local.y, "Resize gesture started");
            Some(WindowIntent::StartResize)
        } else {
            self.state = InteractionState::Dragging {
                offset: global - geometry.position,
            };
            tracing::trace!(x = local.x, y = local.y, "Drag gesture started");
            Some(WindowIntent::StartDrag)
        }
    }

    pub fn pointer_move(&mut self, global: Point, primary_held: bool) -> Option<WindowIntent> {
        if self.state.is_idle() {
            return None;
        }

        // Button released somewhere we never heard about (focus loss)
        if !primary_held {
            tracing::debug!(state = %self.state, "Pointer moved without button, resetting");
            return self.end();
        }

        let mut geometry = self.geometry.unwrap_or_default();

        match self.state {
            InteractionState::Idle => None,
            InteractionState::Dragging { offset } => {
                geometry.position = global - offset;
                self.geometry = Some(geometry);
                Some(WindowIntent::MoveTo(geometry.position))
            }
            InteractionState::Resizing { last } => {
                let delta = global - last;
                geometry.size = Size::new(
                    geometry.size.width + delta.x,
                    geometry.size.height + delta.y,
                )
                .clamp_min(self.config.min_size);
                self.geometry = Some(geometry);
                self.state = InteractionState::Resizing { last: global };
                Some(WindowIntent::ResizeTo(geometry.size))
            }
        }
    }

    pub fn pointer_up(&mut self) -> Option<WindowIntent> {
        self.end()
    }

    /// Abandon any gesture, e.g. when the window loses focus.
    pub fn cancel(&mut self) -> Option<WindowIntent> {
        self.end()
    }

    fn end(&mut self) -> Option<WindowIntent> {
        self.geometry = None;
        if self.state.is_idle() {
            return None;
        }
        self.state = InteractionState::Idle;
        Some(WindowIntent::End)
    }
}
