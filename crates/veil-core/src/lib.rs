//! Veil Core
//!
//! Coordination layer for the Veil browser shell. The shell owns the address
//! resolver, the history log and the window interaction controller, and talks
//! to the outside world only through the traits in [`host`].

mod config;
mod error;
pub mod host;
mod icons;
mod shell;

pub use config::{Config, WindowConfig};
pub use error::CoreError;
pub use host::{Chrome, WebView, WindowControls};
pub use icons::{IconName, IconSet, IconSource};
pub use shell::BrowserShell;

// Re-export core components
pub use veil_navigation::{
    AddressResolver, HistoryEntry, HistoryError, HistoryLog, HistoryStore, NavigationTarget,
    SessionHistory,
};
pub use veil_window::{
    InteractionConfig, InteractionState, Point, PointerButton, Size, WindowGeometry,
    WindowIntent, WindowInteractionController,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging to stderr and, when possible, `veil.log` in `log_dir`.
pub fn init_logging(log_dir: &std::path::Path) {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = std::fs::create_dir_all(log_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("veil.log"))
    });

    let (file_layer, file_error) = match log_file {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(dir = %log_dir.display(), error = %e, "File logging disabled");
    }
}
