//! Browser shell
//!
//! Wires the address bar, history log and window gestures to the embedded
//! web view. All handlers run to completion on the caller's thread.

use chrono::Local;

use veil_navigation::{AddressResolver, HistoryEntry, HistoryStore, NavigationTarget};
use veil_window::{Point, PointerButton, WindowIntent, WindowInteractionController};

use crate::config::Config;
use crate::host::{Chrome, WebView, WindowControls};
use crate::icons::IconSet;
use crate::Result;

pub struct BrowserShell<V, C, W> {
    config: Config,
    resolver: AddressResolver,
    history: HistoryStore,
    icons: IconSet,
    interaction: WindowInteractionController,
    view: V,
    chrome: C,
    window: W,
    current_url: Option<String>,
    loading: bool,
}

impl<V, C, W> BrowserShell<V, C, W>
where
    V: WebView,
    C: Chrome,
    W: WindowControls,
{
    pub fn new(config: Config, view: V, chrome: C, window: W) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let resolver = AddressResolver::new(config.homepage.clone(), config.search_engine.clone());
        let history = HistoryStore::new(config.history_path.clone());
        let icons = IconSet::load(&config.icon_manifest, &config.data_dir);
        let interaction = WindowInteractionController::new(config.interaction());

        Ok(Self {
            config,
            resolver,
            history,
            icons,
            interaction,
            view,
            chrome,
            window,
            current_url: None,
            loading: false,
        })
    }

    /// Open the homepage and put the chrome in its initial state
    pub fn start(&mut self) {
        self.chrome.set_navigation_state(false, false);
        let homepage = self.config.homepage.clone();
        tracing::info!(url = %homepage, "Opening homepage");
        self.view.load_url(&homepage);
    }

    // === Navigation ===

    /// Resolve address bar text and load the result
    pub fn navigate(&mut self, input: &str) -> NavigationTarget {
        let target = self.resolver.resolve(input);
        tracing::info!(
            input = %input,
            url = %target.url(),
            search = target.is_search(),
            "Navigating"
        );
        self.view.load_url(target.url());
        target
    }

    pub fn go_back(&mut self) {
        if self.view.can_go_back() {
            self.view.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if self.view.can_go_forward() {
            self.view.go_forward();
        }
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    // === Web view notifications ===

    pub fn on_url_changed(&mut self, url: &str) {
        let timestamp = Local::now().to_rfc3339();
        self.on_url_changed_at(url, &timestamp);
    }

    pub fn on_url_changed_at(&mut self, url: &str, timestamp: &str) {
        self.chrome.set_address_text(url);
        self.current_url = Some(url.to_string());

        if let Err(e) = self.history.append(url, timestamp) {
            tracing::warn!(url = %url, error = %e, "Failed to record history");
        }

        self.refresh_navigation_state();
    }

    pub fn on_load_started(&mut self) {
        self.loading = true;
        self.chrome.set_loading(true);
    }

    /// Apply the outcome of loading `url`. Results for a page the view has
    /// already left are dropped.
    pub fn on_load_finished(&mut self, url: &str, success: bool) {
        if let Some(current) = self.current_url.as_deref() {
            if current != url {
                tracing::debug!(url = %url, current = %current, "Dropping stale load result");
                return;
            }
        }

        self.loading = false;
        self.chrome.set_loading(false);
        self.refresh_navigation_state();

        if !success {
            tracing::warn!(url = %url, "Page failed to load");
            self.chrome.show_notice(&format!("Could not load {}", url));
        }
    }

    fn refresh_navigation_state(&mut self) {
        let back = self.view.can_go_back();
        let forward = self.view.can_go_forward();
        self.chrome.set_navigation_state(back, forward);
    }

    // === Window controls ===

    pub fn minimize(&mut self) {
        self.window.minimize();
    }

    /// Maximize, or restore if already maximized. Returns the new maximized state.
    pub fn toggle_maximize(&mut self) -> bool {
        if self.window.is_maximized() {
            self.window.restore();
            false
        } else {
            self.interaction.cancel();
            self.window.maximize();
            true
        }
    }

    pub fn close(&mut self) {
        tracing::info!("Closing browser window");
        self.window.close();
    }

    // === Pointer gestures ===

    pub fn pointer_pressed(&mut self, button: PointerButton, global: Point) {
        if self.window.is_maximized() {
            return;
        }
        let geometry = self.window.geometry();
        let intent = self.interaction.pointer_down(button, global, geometry);
        self.apply(intent);
    }

    pub fn pointer_moved(&mut self, global: Point, primary_held: bool) {
        let intent = self.interaction.pointer_move(global, primary_held);
        self.apply(intent);
    }

    pub fn pointer_released(&mut self) {
        let intent = self.interaction.pointer_up();
        self.apply(intent);
    }

    pub fn pointer_cancelled(&mut self) {
        let intent = self.interaction.cancel();
        self.apply(intent);
    }

    fn apply(&mut self, intent: Option<WindowIntent>) {
        match intent {
            Some(WindowIntent::MoveTo(position)) => self.window.move_to(position),
            Some(WindowIntent::ResizeTo(size)) => self.window.resize_to(size),
            Some(WindowIntent::StartDrag | WindowIntent::StartResize | WindowIntent::End)
            | None => {}
        }
    }

    // === History ===

    pub fn recent_history(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.recent(limit)?)
    }

    pub fn search_history(&self, query: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.search(query, limit)?)
    }

    pub fn clear_history(&self) -> Result<()> {
        self.history.clear()?;
        tracing::info!("History cleared");
        Ok(())
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn interaction(&self) -> &WindowInteractionController {
        &self.interaction
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use veil_window::{InteractionState, Size, WindowGeometry};

    #[derive(Default)]
    struct FakeView {
        loaded: Vec<String>,
        back_calls: usize,
        forward_calls: usize,
        reloads: usize,
        can_back: bool,
        can_forward: bool,
    }

    impl WebView for FakeView {
        fn load_url(&mut self, url: &str) {
            self.loaded.push(url.to_string());
        }
        fn go_back(&mut self) {
            self.back_calls += 1;
        }
        fn go_forward(&mut self) {
            self.forward_calls += 1;
        }
        fn reload(&mut self) {
            self.reloads += 1;
        }
        fn can_go_back(&self) -> bool {
            self.can_back
        }
        fn can_go_forward(&self) -> bool {
            self.can_forward
        }
    }

    #[derive(Default)]
    struct FakeChrome {
        address: String,
        nav_state: Option<(bool, bool)>,
        loading: bool,
        notices: Vec<String>,
    }

    impl Chrome for FakeChrome {
        fn set_address_text(&mut self, text: &str) {
            self.address = text.to_string();
        }
        fn set_navigation_state(&mut self, can_go_back: bool, can_go_forward: bool) {
            self.nav_state = Some((can_go_back, can_go_forward));
        }
        fn set_loading(&mut self, loading: bool) {
            self.loading = loading;
        }
        fn show_notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    struct FakeWindow {
        geometry: WindowGeometry,
        maximized: bool,
        minimized: bool,
        closed: bool,
    }

    impl Default for FakeWindow {
        fn default() -> Self {
            Self {
                geometry: WindowGeometry::new(Point::new(100.0, 100.0), Size::new(1200.0, 800.0)),
                maximized: false,
                minimized: false,
                closed: false,
            }
        }
    }

    impl WindowControls for FakeWindow {
        fn geometry(&self) -> WindowGeometry {
            self.geometry
        }
        fn move_to(&mut self, position: Point) {
            self.geometry.position = position;
        }
        fn resize_to(&mut self, size: Size) {
            self.geometry.size = size;
        }
        fn minimize(&mut self) {
            self.minimized = true;
        }
        fn maximize(&mut self) {
            self.maximized = true;
        }
        fn restore(&mut self) {
            self.maximized = false;
        }
        fn is_maximized(&self) -> bool {
            self.maximized
        }
        fn close(&mut self) {
            self.closed = true;
        }
    }

    type TestShell = BrowserShell<FakeView, FakeChrome, FakeWindow>;

    fn shell(dir: &TempDir) -> TestShell {
        let config = Config::new(dir.path().join("veil"));
        BrowserShell::new(
            config,
            FakeView::default(),
            FakeChrome::default(),
            FakeWindow::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_start_loads_homepage() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.start();
        assert_eq!(shell.view().loaded, vec!["https://google.com"]);
        assert_eq!(shell.chrome().nav_state, Some((false, false)));
    }

    #[test]
    fn test_navigate_loads_resolved_target() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        let target = shell.navigate("example.com");
        assert_eq!(target, NavigationTarget::DirectUrl("https://example.com".to_string()));

        let target = shell.navigate("rust ownership rules");
        assert!(target.is_search());

        shell.navigate("");

        assert_eq!(
            shell.view().loaded,
            vec![
                "https://example.com",
                "https://google.com/search?q=rust+ownership+rules",
                "https://google.com",
            ]
        );
    }

    #[test]
    fn test_url_changed_updates_chrome_and_history() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        shell.view.can_back = true;

        shell.on_url_changed_at("https://example.com/", "2024-05-01T10:00:00+00:00");

        assert_eq!(shell.chrome().address, "https://example.com/");
        assert_eq!(shell.chrome().nav_state, Some((true, false)));
        assert_eq!(shell.current_url(), Some("https://example.com/"));

        let entries = shell.history().entries_on("2024-05-01").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://example.com/");
    }

    #[test]
    fn test_history_failure_does_not_block_navigation() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new(dir.path().join("veil"));
        // A directory where the history file should be makes every write fail
        config.history_path = dir.path().join("blocked");
        std::fs::create_dir_all(config.history_path.join("inner")).unwrap();

        let mut shell = BrowserShell::new(
            config,
            FakeView::default(),
            FakeChrome::default(),
            FakeWindow::default(),
        )
        .unwrap();

        shell.on_url_changed_at("https://example.com/", "2024-05-01T10:00:00+00:00");
        assert_eq!(shell.chrome().address, "https://example.com/");
        assert_eq!(shell.chrome().nav_state, Some((false, false)));
    }

    #[test]
    fn test_load_failure_shows_notice() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.on_url_changed_at("https://unreachable.invalid/", "2024-05-01T10:00:00+00:00");
        shell.on_load_started();
        assert!(shell.is_loading());
        assert!(shell.chrome().loading);

        shell.on_load_finished("https://unreachable.invalid/", false);
        assert!(!shell.is_loading());
        assert_eq!(shell.chrome().notices.len(), 1);
        assert!(shell.chrome().notices[0].contains("https://unreachable.invalid/"));

        // Navigation state is untouched
        assert_eq!(shell.current_url(), Some("https://unreachable.invalid/"));
        assert!(shell.view().loaded.is_empty());

        shell.on_load_started();
        shell.on_load_finished("https://unreachable.invalid/", true);
        assert_eq!(shell.chrome().notices.len(), 1);
    }

    #[test]
    fn test_late_load_result_for_previous_page_is_dropped() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.on_url_changed_at("https://slow-dead.invalid/", "2024-05-01T10:00:00+00:00");
        shell.on_load_started();
        shell.on_url_changed_at("https://good.example/", "2024-05-01T10:00:05+00:00");

        // The check for the first page only returns now
        shell.on_load_finished("https://slow-dead.invalid/", false);
        assert!(shell.is_loading());
        assert!(shell.chrome().loading);
        assert!(shell.chrome().notices.is_empty());

        shell.on_load_finished("https://good.example/", true);
        assert!(!shell.is_loading());
        assert!(shell.chrome().notices.is_empty());
    }

    #[test]
    fn test_back_forward_respect_capability() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.go_back();
        shell.go_forward();
        assert_eq!(shell.view().back_calls, 0);
        assert_eq!(shell.view().forward_calls, 0);

        shell.view.can_back = true;
        shell.view.can_forward = true;
        shell.go_back();
        shell.go_forward();
        shell.reload();
        assert_eq!(shell.view().back_calls, 1);
        assert_eq!(shell.view().forward_calls, 1);
        assert_eq!(shell.view().reloads, 1);
    }

    #[test]
    fn test_window_controls() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        assert!(shell.toggle_maximize());
        assert!(shell.window().maximized);
        assert!(!shell.toggle_maximize());
        assert!(!shell.window().maximized);

        shell.minimize();
        assert!(shell.window().minimized);

        shell.close();
        assert!(shell.window().closed);
    }

    #[test]
    fn test_drag_gesture_moves_window() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        // Window at (100, 100); press in the title bar at local (300, 15)
        shell.pointer_pressed(PointerButton::Primary, Point::new(400.0, 115.0));
        shell.pointer_moved(Point::new(450.0, 140.0), true);
        assert_eq!(shell.window().geometry.position, Point::new(150.0, 125.0));

        shell.pointer_released();
        assert!(shell.interaction().state().is_idle());

        // Moves after release are ignored
        shell.pointer_moved(Point::new(900.0, 900.0), true);
        assert_eq!(shell.window().geometry.position, Point::new(150.0, 125.0));
    }

    #[test]
    fn test_resize_gesture_clamps() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        // Bottom-right corner at (1300, 900)
        shell.pointer_pressed(PointerButton::Primary, Point::new(1295.0, 895.0));
        assert!(matches!(
            shell.interaction().state(),
            InteractionState::Resizing { .. }
        ));

        shell.pointer_moved(Point::new(1345.0, 915.0), true);
        assert_eq!(shell.window().geometry.size, Size::new(1250.0, 820.0));

        shell.pointer_moved(Point::new(0.0, 0.0), true);
        assert_eq!(shell.window().geometry.size, Size::new(400.0, 300.0));

        shell.pointer_cancelled();
        assert!(shell.interaction().state().is_idle());
    }

    #[test]
    fn test_gestures_ignored_while_maximized() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);
        shell.toggle_maximize();

        shell.pointer_pressed(PointerButton::Primary, Point::new(400.0, 115.0));
        assert!(shell.interaction().state().is_idle());
    }

    #[test]
    fn test_history_queries() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell(&dir);

        shell.on_url_changed_at("https://a.example/", "2024-05-01T10:00:00+00:00");
        shell.on_url_changed_at("https://b.example/", "2024-05-01T11:00:00+00:00");

        let recent = shell.recent_history(10).unwrap();
        assert_eq!(recent[0].url, "https://b.example/");
        assert_eq!(shell.search_history("a.example", 10).unwrap().len(), 1);

        shell.clear_history().unwrap();
        assert!(shell.recent_history(10).unwrap().is_empty());
        assert_eq!(shell.history().path(), shell.config().history_path.as_path());
    }
}
