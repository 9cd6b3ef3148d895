//! Tauri implementations of the shell's host traits
//!
//! The content webview reports page loads; the chrome webview receives
//! events; the main window carries out drag and resize intents.

use serde::Serialize;
use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, Webview, WebviewUrl, Window, Wry,
};
use veil_core::{Chrome, Point, SessionHistory, Size, WebView, WindowControls, WindowGeometry};

use crate::state::AppState;
use crate::{probe, CONTENT_WEBVIEW, UI_WEBVIEW};

/// Height of the title bar plus navigation bar drawn by the chrome UI
pub const CHROME_HEIGHT: f64 = 72.0;

/// Content area inside the chrome, leaving a resize frame on the other sides
#[derive(Clone, Copy, Debug)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Resize frame width, managed separately so layout never waits on the shell lock
pub struct ContentLayout {
    pub margin: f64,
}

impl ContentBounds {
    pub fn for_window(width: f64, height: f64, margin: f64) -> Self {
        Self {
            x: margin,
            y: CHROME_HEIGHT,
            width: (width - 2.0 * margin).max(0.0),
            height: (height - CHROME_HEIGHT - margin).max(0.0),
        }
    }
}

/// Build the content webview and hook its page-load events to the shell.
pub fn content_webview(app: &AppHandle) -> Result<WebviewBuilder<Wry>, url::ParseError> {
    let blank = "about:blank".parse::<url::Url>()?;
    let app_handle_for_load = app.clone();

    Ok(WebviewBuilder::new(CONTENT_WEBVIEW, WebviewUrl::External(blank))
        .transparent(false)
        .enable_clipboard_access()
        .on_page_load(move |_webview, payload| {
            let Some(state) = app_handle_for_load.try_state::<AppState>() else {
                return;
            };
            let url = payload.url().to_string();

            match payload.event() {
                PageLoadEvent::Started => {
                    state.with_shell(|shell| {
                        shell.on_load_started();
                        if shell.view_mut().commit(&url) {
                            shell.on_url_changed(&url);
                        }
                    });
                }
                PageLoadEvent::Finished => {
                    state.with_shell(|shell| {
                        if shell.view_mut().finish(&url) {
                            shell.on_url_changed(&url);
                        }
                    });

                    let app = app_handle_for_load.clone();
                    tauri::async_runtime::spawn(async move {
                        let outcome = probe::probe(&url).await;
                        tracing::debug!(
                            url = %url,
                            status = ?outcome.status,
                            error_kind = ?outcome.error_kind,
                            "Load check finished"
                        );
                        if let Some(state) = app.try_state::<AppState>() {
                            state.with_shell(|shell| shell.on_load_finished(&url, outcome.ok));
                        }
                    });
                }
            }
        }))
}

/// Keep the content webview inside the chrome after the window changes size.
pub fn layout_content(window: &Window) {
    let Some(layout) = window.app_handle().try_state::<ContentLayout>() else {
        return;
    };
    let Some(webview) = window.app_handle().get_webview(CONTENT_WEBVIEW) else {
        return;
    };

    let margin = layout.margin;
    let (scale, size) = match (window.scale_factor(), window.inner_size()) {
        (Ok(scale), Ok(size)) => (scale, size),
        _ => return,
    };
    let size = size.to_logical::<f64>(scale);
    let bounds = ContentBounds::for_window(size.width, size.height, margin);

    if let Err(e) = webview.set_position(LogicalPosition::new(bounds.x, bounds.y)) {
        tracing::warn!(error = %e, "Failed to position content webview");
    }
    if let Err(e) = webview.set_size(LogicalSize::new(bounds.width, bounds.height)) {
        tracing::warn!(error = %e, "Failed to size content webview");
    }
}

pub struct TauriWebView {
    webview: Webview,
    history: SessionHistory,
}

impl TauriWebView {
    pub fn new(webview: Webview) -> Self {
        Self {
            webview,
            history: SessionHistory::new(),
        }
    }

    /// Record a page that started loading. Returns true when the URL changed.
    pub fn commit(&mut self, url: &str) -> bool {
        self.history.commit(url)
    }

    /// Record the URL a page finished at. Returns true when a redirect changed it.
    pub fn finish(&mut self, url: &str) -> bool {
        self.history.finish(url)
    }
}

impl WebView for TauriWebView {
    fn load_url(&mut self, url: &str) {
        let parsed = match url.parse::<url::Url>() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Refusing to load invalid URL");
                return;
            }
        };
        if let Err(e) = self.webview.navigate(parsed) {
            tracing::error!(url = %url, error = %e, "Navigation failed");
        }
    }

    fn go_back(&mut self) {
        if self.history.begin_back() {
            if let Err(e) = self.webview.eval("history.back()") {
                tracing::warn!(error = %e, "Back navigation failed");
            }
        }
    }

    fn go_forward(&mut self) {
        if self.history.begin_forward() {
            if let Err(e) = self.webview.eval("history.forward()") {
                tracing::warn!(error = %e, "Forward navigation failed");
            }
        }
    }

    fn reload(&mut self) {
        if let Err(e) = self.webview.reload() {
            tracing::warn!(error = %e, "Reload failed");
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct NavigationStatePayload {
    can_go_back: bool,
    can_go_forward: bool,
}

/// Chrome state mirrored for the UI, which may ask for it after a reload
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeSnapshot {
    pub address: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub loading: bool,
}

pub struct TauriChrome {
    app: AppHandle,
    snapshot: ChromeSnapshot,
}

impl TauriChrome {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            snapshot: ChromeSnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &ChromeSnapshot {
        &self.snapshot
    }

    fn emit<S: Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.app.emit_to(UI_WEBVIEW, event, payload) {
            tracing::debug!(event = %event, error = %e, "Chrome event not delivered");
        }
    }
}

impl Chrome for TauriChrome {
    fn set_address_text(&mut self, text: &str) {
        self.snapshot.address = text.to_string();
        self.emit("address-changed", text.to_string());
    }

    fn set_navigation_state(&mut self, can_go_back: bool, can_go_forward: bool) {
        self.snapshot.can_go_back = can_go_back;
        self.snapshot.can_go_forward = can_go_forward;
        self.emit(
            "navigation-state",
            NavigationStatePayload {
                can_go_back,
                can_go_forward,
            },
        );
    }

    fn set_loading(&mut self, loading: bool) {
        self.snapshot.loading = loading;
        self.emit("loading-changed", loading);
    }

    fn show_notice(&mut self, message: &str) {
        self.emit("notice", message.to_string());
    }
}

pub struct TauriWindow {
    window: Window,
}

impl TauriWindow {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl WindowControls for TauriWindow {
    fn geometry(&self) -> WindowGeometry {
        let scale = self.window.scale_factor().unwrap_or(1.0);
        let position = self
            .window
            .outer_position()
            .map(|p| p.to_logical::<f64>(scale))
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or_default();
        let size = self
            .window
            .inner_size()
            .map(|s| s.to_logical::<f64>(scale))
            .map(|s| Size::new(s.width, s.height))
            .unwrap_or_default();
        WindowGeometry::new(position, size)
    }

    fn move_to(&mut self, position: Point) {
        if let Err(e) = self
            .window
            .set_position(LogicalPosition::new(position.x, position.y))
        {
            tracing::warn!(error = %e, "Failed to move window");
        }
    }

    fn resize_to(&mut self, size: Size) {
        if let Err(e) = self
            .window
            .set_size(LogicalSize::new(size.width, size.height))
        {
            tracing::warn!(error = %e, "Failed to resize window");
        }
    }

    fn minimize(&mut self) {
        if let Err(e) = self.window.minimize() {
            tracing::warn!(error = %e, "Failed to minimize window");
        }
    }

    fn maximize(&mut self) {
        if let Err(e) = self.window.maximize() {
            tracing::warn!(error = %e, "Failed to maximize window");
        }
    }

    fn restore(&mut self) {
        if let Err(e) = self.window.unmaximize() {
            tracing::warn!(error = %e, "Failed to restore window");
        }
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized().unwrap_or(false)
    }

    fn close(&mut self) {
        if let Err(e) = self.window.close() {
            tracing::warn!(error = %e, "Failed to close window");
        }
    }
}
