//! Seams between the shell and the native toolkit
//!
//! The shell never calls a GUI API directly. The application supplies one
//! implementation of each trait; tests supply in-memory fakes.

use veil_window::{Point, Size, WindowGeometry};

/// The embedded page renderer
pub trait WebView {
    fn load_url(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
}

/// Title bar, navigation buttons and address field
pub trait Chrome {
    fn set_address_text(&mut self, text: &str);
    fn set_navigation_state(&mut self, can_go_back: bool, can_go_forward: bool);
    fn set_loading(&mut self, loading: bool);
    /// Non-blocking, dismissible message
    fn show_notice(&mut self, message: &str);
}

/// The native top-level window
pub trait WindowControls {
    fn geometry(&self) -> WindowGeometry;
    fn move_to(&mut self, position: Point);
    fn resize_to(&mut self, size: Size);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn restore(&mut self);
    fn is_maximized(&self) -> bool;
    fn close(&mut self);
}
