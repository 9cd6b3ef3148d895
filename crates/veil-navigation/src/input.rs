//! Input resolution for the address bar
//!
//! Resolution order:
//! 1. Empty input → the configured home page
//! 2. `http://`, `https://` or a local scheme (`file://`, `about:`, `data:`) → as typed
//! 3. `www.` prefix → `https://` prepended
//! 4. Whitespace or no `.` → search
//! 5. Otherwise → `https://` prepended

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "url")]
pub enum NavigationTarget {
    /// Navigate straight to a URL
    DirectUrl(String),
    /// Search engine URL with the query already encoded into it
    SearchQuery(String),
}

impl NavigationTarget {
    /// URL the web view should load for this target
    pub fn url(&self) -> &str {
        match self {
            NavigationTarget::DirectUrl(url) | NavigationTarget::SearchQuery(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, NavigationTarget::SearchQuery(_))
    }

    pub fn into_url(self) -> String {
        match self {
            NavigationTarget::DirectUrl(url) | NavigationTarget::SearchQuery(url) => url,
        }
    }
}

const LOCAL_SCHEMES: [&str; 3] = ["file://", "about:", "data:"];

#[derive(Debug, Clone)]
pub struct AddressResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
    /// Target for empty input
    default_target: String,
}

impl AddressResolver {
    pub fn new(default_target: String, search_template: String) -> Self {
        Self {
            search_template,
            default_target,
        }
    }

    pub fn with_search_template(mut self, template: String) -> Self {
        self.search_template = template;
        self
    }

    pub fn set_search_template(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }

    /// Resolve address bar text into something the web view can load.
    pub fn resolve(&self, input: &str) -> NavigationTarget {
        let input = input.trim();

        if input.is_empty() {
            return NavigationTarget::DirectUrl(self.default_target.clone());
        }

        let lowered = input.to_ascii_lowercase();

        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return NavigationTarget::DirectUrl(input.to_string());
        }

        if LOCAL_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
            return NavigationTarget::DirectUrl(input.to_string());
        }

        if lowered.starts_with("www.") {
            return NavigationTarget::DirectUrl(format!("https://{}", input));
        }

        if input.chars().any(char::is_whitespace) || !input.contains('.') {
            return NavigationTarget::SearchQuery(self.build_search_url(input));
        }

        NavigationTarget::DirectUrl(format!("https://{}", input))
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        if self.search_template.contains("%s") {
            self.search_template.replace("%s", &encoded)
        } else {
            format!("{}{}", self.search_template, encoded)
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new(
            "https://google.com".to_string(),
            "https://google.com/search?q=%s".to_string(),
        )
    }
}
