//! Application state management
use parking_lot::Mutex;
use veil_core::BrowserShell;

use crate::host::{TauriChrome, TauriWebView, TauriWindow};

pub type TauriShell = BrowserShell<TauriWebView, TauriChrome, TauriWindow>;

/// Thread-safe application state wrapper
///
/// Tauri callbacks may arrive on any thread; each one takes the lock, runs a
/// single shell handler and releases it.
pub struct AppState {
    shell: Mutex<TauriShell>,
}

impl AppState {
    pub fn new(shell: TauriShell) -> Self {
        Self {
            shell: Mutex::new(shell),
        }
    }

    pub fn with_shell<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TauriShell) -> T,
    {
        let mut guard = self.shell.lock();
        f(&mut guard)
    }

    /// Run `f` only if no other handler holds the shell.
    ///
    /// Window events can be raised synchronously from inside a shell handler
    /// (e.g. focus changes while minimizing); those must not wait on the lock.
    pub fn try_with_shell<F, T>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut TauriShell) -> T,
    {
        let mut guard = self.shell.try_lock()?;
        Some(f(&mut guard))
    }
}
