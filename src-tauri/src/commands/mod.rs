//! Tauri IPC Commands
//!
//! These commands bridge the chrome UI to the browser shell.

use serde::Serialize;

pub mod chrome;
pub mod history;
pub mod navigation;
pub mod window;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
