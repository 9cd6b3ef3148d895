//! Navigation and address bar commands

use tauri::State;
use veil_core::NavigationTarget;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn navigate(state: State<AppState>, input: String) -> CommandResult<NavigationTarget> {
    let target = state.with_shell(|shell| shell.navigate(&input));
    CommandResult::ok(target)
}

#[tauri::command]
pub fn go_back(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.go_back());
    CommandResult::ok(())
}

#[tauri::command]
pub fn go_forward(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.go_forward());
    CommandResult::ok(())
}

#[tauri::command]
pub fn reload(state: State<AppState>) -> CommandResult<()> {
    state.with_shell(|shell| shell.reload());
    CommandResult::ok(())
}
