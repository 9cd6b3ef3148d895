//! Title bar buttons and frameless drag/resize input

use tauri::State;
use veil_core::{Point, PointerButton};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn minimize_window(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.minimize());
    CommandResult::ok(())
}

/// Returns whether the window is maximized afterwards
#[tauri::command]
pub fn toggle_maximize(state: State<AppState>) -> CommandResult<bool> {
    CommandResult::ok(state.with_shell(|shell| shell.toggle_maximize()))
}

#[tauri::command]
pub fn close_window(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.close());
    CommandResult::ok(())
}

/// `x`/`y` are screen coordinates in logical pixels
#[tauri::command]
pub fn pointer_down(
    state: State<AppState>,
    x: f64,
    y: f64,
    button: PointerButton,
) -> CommandResult<()> {
    state.with_shell(|shell| shell.pointer_pressed(button, Point::new(x, y)));
    CommandResult::ok(())
}

#[tauri::command]
pub fn pointer_move(
    state: State<AppState>,
    x: f64,
    y: f64,
    primary_held: bool,
) -> CommandResult<()> {
    state.with_shell(|shell| shell.pointer_moved(Point::new(x, y), primary_held));
    CommandResult::ok(())
}

#[tauri::command]
pub fn pointer_up(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.pointer_released());
    CommandResult::ok(())
}
