//! Veil Browser - Tauri Application
//!
//! One frameless window holding two webviews:
//! - `ui-main`: the chrome (title bar, navigation bar, resize frame)
//! - `content-main`: the page itself, inset inside the chrome
//!
//! Rust owns all state; the chrome only forwards input and renders events.

mod commands;
mod host;
mod probe;
mod state;

use host::{ContentBounds, ContentLayout, TauriChrome, TauriWebView, TauriWindow};
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl, WindowEvent};
use veil_core::{BrowserShell, Config};

pub const MAIN_WINDOW: &str = "main";
pub const UI_WEBVIEW: &str = "ui-main";
pub const CONTENT_WEBVIEW: &str = "content-main";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let (config, config_error) = match Config::load(Config::data_dir()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging
    veil_core::init_logging(&config.log_dir);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring invalid config.json, using defaults");
    }

    tauri::Builder::default()
        .setup(move |app| {
            let window_config = &config.window;

            let window = WindowBuilder::new(app, MAIN_WINDOW)
                .title(&window_config.title)
                .inner_size(window_config.width, window_config.height)
                .min_inner_size(window_config.min_width, window_config.min_height)
                .decorations(false)
                .center()
                .build()?;

            let ui_webview = WebviewBuilder::new(UI_WEBVIEW, WebviewUrl::App("index.html".into()))
                .auto_resize()
                .enable_clipboard_access();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(window_config.width, window_config.height),
            )?;
            let _ = ui_webview.show();

            let bounds = ContentBounds::for_window(
                window_config.width,
                window_config.height,
                window_config.resize_margin,
            );
            let content = window.add_child(
                host::content_webview(app.handle())?,
                LogicalPosition::new(bounds.x, bounds.y),
                LogicalSize::new(bounds.width, bounds.height),
            )?;

            let shell = BrowserShell::new(
                config.clone(),
                TauriWebView::new(content),
                TauriChrome::new(app.handle().clone()),
                TauriWindow::new(window),
            )?;

            app.manage(ContentLayout {
                margin: window_config.resize_margin,
            });
            app.manage(AppState::new(shell));
            app.state::<AppState>().with_shell(|shell| shell.start());

            tracing::info!("Veil Browser started");

            Ok(())
        })
        .on_window_event(|window, event| match event {
            WindowEvent::Resized(_) => host::layout_content(window),
            WindowEvent::Focused(false) => {
                if let Some(state) = window.app_handle().try_state::<AppState>() {
                    state.try_with_shell(|shell| shell.pointer_cancelled());
                }
            }
            _ => {}
        })
        .invoke_handler(tauri::generate_handler![
            // Chrome
            commands::chrome::chrome_ready,
            // Navigation commands
            commands::navigation::navigate,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload,
            // Window commands
            commands::window::minimize_window,
            commands::window::toggle_maximize,
            commands::window::close_window,
            commands::window::pointer_down,
            commands::window::pointer_move,
            commands::window::pointer_up,
            // History commands
            commands::history::get_recent_history,
            commands::history::search_history,
            commands::history::clear_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Veil browser");
}
