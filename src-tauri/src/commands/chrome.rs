//! Initial state for the chrome UI

use serde::Serialize;
use tauri::State;
use veil_core::{IconName, IconSource};

use super::CommandResult;
use crate::host::ChromeSnapshot;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChromeIcon {
    pub name: &'static str,
    pub source: IconSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeInfo {
    pub title: String,
    pub state: ChromeSnapshot,
    pub icons: Vec<ChromeIcon>,
}

/// Called by the chrome UI once its listeners are attached
#[tauri::command]
pub fn chrome_ready(state: State<AppState>) -> CommandResult<ChromeInfo> {
    let info = state.with_shell(|shell| ChromeInfo {
        title: shell.config().window.title.clone(),
        state: shell.chrome().snapshot().clone(),
        icons: IconName::ALL
            .iter()
            .map(|name| ChromeIcon {
                name: name.key(),
                source: shell.icons().source(*name),
            })
            .collect(),
    });

    tracing::debug!("Chrome UI ready");
    CommandResult::ok(info)
}
