//! Chrome icons with text fallbacks

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Back,
    Forward,
    Refresh,
    WindowMinimize,
    WindowMaximize,
    WindowClose,
}

impl IconName {
    pub const ALL: [IconName; 6] = [
        IconName::Back,
        IconName::Forward,
        IconName::Refresh,
        IconName::WindowMinimize,
        IconName::WindowMaximize,
        IconName::WindowClose,
    ];

    /// Key used in the icon manifest
    pub fn key(&self) -> &'static str {
        match self {
            IconName::Back => "back",
            IconName::Forward => "forward",
            IconName::Refresh => "refresh",
            IconName::WindowMinimize => "windowMinimize",
            IconName::WindowMaximize => "windowMaximize",
            IconName::WindowClose => "windowClose",
        }
    }

    /// Text shown when no image is available
    pub fn glyph(&self) -> &'static str {
        match self {
            IconName::Back => "←",
            IconName::Forward => "→",
            IconName::Refresh => "⟳",
            IconName::WindowMinimize => "—",
            IconName::WindowMaximize => "□",
            IconName::WindowClose => "×",
        }
    }

    fn default_path(&self) -> &'static str {
        match self {
            IconName::Back => "icons/back.png",
            IconName::Forward => "icons/forward.png",
            IconName::Refresh => "icons/refresh.png",
            IconName::WindowMinimize => "icons/window-minimize.png",
            IconName::WindowMaximize => "icons/window-maximize.png",
            IconName::WindowClose => "icons/window-close.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IconSource {
    File(PathBuf),
    Glyph(&'static str),
}

#[derive(Debug, Clone)]
pub struct IconSet {
    /// Manifest key → path, relative paths resolved against `base_dir`
    paths: HashMap<String, PathBuf>,
    base_dir: PathBuf,
}

impl IconSet {
    /// Read the manifest, falling back to the built-in paths if it is missing or corrupt.
    pub fn load(manifest: &Path, base_dir: &Path) -> Self {
        let paths = match std::fs::read_to_string(manifest) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, PathBuf>>(&contents) {
                Ok(paths) => paths,
                Err(e) => {
                    tracing::warn!(
                        path = %manifest.display(),
                        error = %e,
                        "Icon manifest is invalid, using defaults"
                    );
                    Self::default_paths()
                }
            },
            Err(e) => {
                tracing::debug!(path = %manifest.display(), error = %e, "No icon manifest");
                Self::default_paths()
            }
        };

        Self {
            paths,
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn with_defaults(base_dir: &Path) -> Self {
        Self {
            paths: Self::default_paths(),
            base_dir: base_dir.to_path_buf(),
        }
    }

    fn default_paths() -> HashMap<String, PathBuf> {
        IconName::ALL
            .iter()
            .map(|name| (name.key().to_string(), PathBuf::from(name.default_path())))
            .collect()
    }

    /// Image path for `name`, only if the file exists
    pub fn lookup(&self, name: IconName) -> Option<PathBuf> {
        let path = self.paths.get(name.key())?;
        let path = if path.is_absolute() {
            path.clone()
        } else {
            self.base_dir.join(path)
        };
        path.is_file().then_some(path)
    }

    pub fn source(&self, name: IconName) -> IconSource {
        match self.lookup(name) {
            Some(path) => IconSource::File(path),
            None => IconSource::Glyph(name.glyph()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_fall_back_to_glyphs() {
        let dir = TempDir::new().unwrap();
        let icons = IconSet::load(&dir.path().join("icons.json"), dir.path());

        for name in IconName::ALL {
            assert_eq!(icons.lookup(name), None);
            assert_eq!(icons.source(name), IconSource::Glyph(name.glyph()));
        }
    }

    #[test]
    fn test_default_paths_resolved_against_base_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("icons/back.png"), b"png").unwrap();

        let icons = IconSet::with_defaults(dir.path());
        assert_eq!(
            icons.source(IconName::Back),
            IconSource::File(dir.path().join("icons/back.png"))
        );
        assert_eq!(icons.source(IconName::Forward), IconSource::Glyph("→"));
    }

    #[test]
    fn test_manifest_overrides() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("close.svg");
        std::fs::write(&custom, b"<svg/>").unwrap();
        let manifest = dir.path().join("icons.json");
        std::fs::write(
            &manifest,
            serde_json::json!({ "windowClose": &custom }).to_string(),
        )
        .unwrap();

        let icons = IconSet::load(&manifest, dir.path());
        assert_eq!(icons.lookup(IconName::WindowClose), Some(custom));
        // Keys missing from the manifest have no image
        assert_eq!(icons.source(IconName::Back), IconSource::Glyph("←"));
    }

    #[test]
    fn test_corrupt_manifest_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("icons.json");
        std::fs::write(&manifest, "[1, 2").unwrap();
        std::fs::create_dir_all(dir.path().join("icons")).unwrap();
        std::fs::write(dir.path().join("icons/refresh.png"), b"png").unwrap();

        let icons = IconSet::load(&manifest, dir.path());
        assert!(icons.lookup(IconName::Refresh).is_some());
    }
}
