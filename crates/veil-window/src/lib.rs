//! Veil Window Interaction
//!
//! Pointer handling for a frameless window:
//! ```text
//! Idle
//!   ↓ press inside the body        ↓ press within the edge margin
//! Dragging                         Resizing
//!   ↓ release / move without button ↓
//! Idle
//! ```
//!
//! The controller never touches a real window. It returns [`WindowIntent`]s
//! that the caller applies to whatever native window it owns.

mod controller;
mod geometry;
mod state;

pub use controller::{InteractionConfig, WindowInteractionController};
pub use geometry::{Point, Size, WindowGeometry};
pub use state::{InteractionState, PointerButton, WindowIntent};
