//! History commands

use tauri::State;
use veil_core::HistoryEntry;

use super::CommandResult;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;

#[tauri::command]
pub fn get_recent_history(
    state: State<AppState>,
    limit: Option<usize>,
) -> CommandResult<Vec<HistoryEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    match state.with_shell(|shell| shell.recent_history(limit)) {
        Ok(entries) => CommandResult::ok(entries),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn search_history(
    state: State<AppState>,
    query: String,
    limit: Option<usize>,
) -> CommandResult<Vec<HistoryEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    match state.with_shell(|shell| shell.search_history(&query, limit)) {
        Ok(entries) => CommandResult::ok(entries),
        Err(e) => {
            tracing::warn!(query = %query, error = %e, "History search failed");
            CommandResult::err(e.to_string())
        }
    }
}

#[tauri::command]
pub fn clear_history(state: State<AppState>) -> CommandResult<()> {
    match state.with_shell(|shell| shell.clear_history()) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
