//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;
use veil_window::{InteractionConfig, Size};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root for everything Veil writes
    pub data_dir: PathBuf,
    /// Path to the dated history log
    pub history_path: PathBuf,
    /// Icon manifest (logical name → image path)
    pub icon_manifest: PathBuf,
    /// Directory for `veil.log`
    pub log_dir: PathBuf,
    /// Homepage URL, also the target for an empty address bar
    pub homepage: String,
    /// Search engine URL template
    pub search_engine: String,
    /// Frameless window settings
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Width of the invisible resize border
    pub resize_margin: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Veil".to_string(),
            width: 1200.0,
            height: 800.0,
            min_width: 400.0,
            min_height: 300.0,
            resize_margin: 10.0,
        }
    }
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            history_path: data_dir.join("history.json"),
            icon_manifest: data_dir.join("icons.json"),
            log_dir: data_dir.join("logs"),
            data_dir,
            homepage: "https://google.com".to_string(),
            search_engine: "https://google.com/search?q=%s".to_string(),
            window: WindowConfig::default(),
        }
    }

    /// Load `config.json` from `data_dir`, or the defaults if there is none.
    pub fn load(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new(data_dir));
        }

        let config = Self::from_file(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        let window = &self.window;
        if window.min_width <= 0.0 || window.min_height <= 0.0 {
            return Err(CoreError::Config(format!(
                "minimum window size must be positive, got {}x{}",
                window.min_width, window.min_height
            )));
        }
        if window.width < window.min_width || window.height < window.min_height {
            return Err(CoreError::Config(format!(
                "window size {}x{} is below the minimum {}x{}",
                window.width, window.height, window.min_width, window.min_height
            )));
        }
        if window.resize_margin < 0.0 {
            return Err(CoreError::Config(format!(
                "resize margin must not be negative, got {}",
                window.resize_margin
            )));
        }
        if self.search_engine.trim().is_empty() {
            return Err(CoreError::Config("search engine template is empty".to_string()));
        }
        Ok(())
    }

    pub fn interaction(&self) -> InteractionConfig {
        InteractionConfig {
            edge_margin: self.window.resize_margin,
            min_size: Size::new(self.window.min_width, self.window.min_height),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Veil"))
            .unwrap_or_else(|| PathBuf::from(".veil"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
