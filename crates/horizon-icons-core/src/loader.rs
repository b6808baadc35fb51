//! Icon theme discovery and loading.
//!
//! This module handles discovering icon themes on the filesystem, following
//! platform conventions (freedesktop base directories on Linux, system
//! directories on macOS/Windows), and loading them into memory.
//!
//! Discovery only records where each theme lives. Icons are scanned when a
//! theme is loaded, so a process that uses one theme pays for one theme.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::index::ThemeIndex;
use crate::resolver::FALLBACK_THEME;
use crate::theme::{INDEX_FILE, IconTheme};
use crate::types::IconFormat;

/// Where a discovered theme lives.
#[derive(Debug, Clone, Default)]
struct ThemeLocation {
    /// First `index.theme` found in search order
    index_path: Option<PathBuf>,
    /// Every directory named after the theme, in search order
    base_paths: Vec<PathBuf>,
}

/// Icon theme loader that discovers and loads icon themes.
#[derive(Debug)]
pub struct IconThemeLoader {
    /// Search paths for icon themes
    search_paths: Vec<PathBuf>,
    /// Discovered themes (theme_id -> location)
    locations: HashMap<String, ThemeLocation>,
    /// Loaded themes (theme_id -> theme)
    themes: HashMap<String, IconTheme>,
    /// Default theme ID
    default_theme: Option<String>,
}

impl IconThemeLoader {
    /// Create a new icon theme loader with default platform search paths.
    pub fn new() -> Self {
        Self::with_paths(Self::default_search_paths())
    }

    /// Create a loader with custom search paths.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths: paths,
            locations: HashMap::new(),
            themes: HashMap::new(),
            default_theme: None,
        }
    }

    /// Add a search path after the existing ones.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    /// Add a search path that takes precedence over the existing ones.
    pub fn prepend_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.search_paths.retain(|p| p != &path);
        self.search_paths.insert(0, path);
    }

    /// Get current search paths.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Discover all available icon themes.
    ///
    /// Scans every search path for theme directories and returns the number
    /// of themes that have an `index.theme`. Unreadable search paths are
    /// skipped.
    pub fn discover_themes(&mut self) -> Result<usize> {
        self.locations.clear();

        for search_path in &self.search_paths {
            let entries = match fs::read_dir(search_path) {
                Ok(e) => e,
                Err(_) => continue,
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };

                let location = self.locations.entry(id.to_string()).or_default();
                let index_path = path.join(INDEX_FILE);
                if location.index_path.is_none() && index_path.is_file() {
                    location.index_path = Some(index_path);
                }
                location.base_paths.push(path);
            }
        }

        self.locations.retain(|_, l| l.index_path.is_some());
        tracing::debug!(
            "Discovered {} icon themes in {} search paths",
            self.locations.len(),
            self.search_paths.len()
        );
        Ok(self.locations.len())
    }

    /// Ids of discovered themes, sorted.
    pub fn discovered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.locations.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Check if a theme was discovered on disk.
    pub fn is_discovered(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Directories that make up a discovered theme, in search order.
    pub fn base_paths_of(&self, id: &str) -> &[PathBuf] {
        self.locations
            .get(id)
            .map(|l| l.base_paths.as_slice())
            .unwrap_or(&[])
    }

    /// Load a discovered theme, scanning its icons.
    ///
    /// Already loaded themes are returned as-is.
    pub fn load_theme(&mut self, id: &str) -> Result<&IconTheme> {
        if !self.themes.contains_key(id) {
            let location = self
                .locations
                .get(id)
                .ok_or_else(|| Error::theme_not_found(id))?;
            let index_path = location
                .index_path
                .as_ref()
                .ok_or_else(|| Error::theme_not_found(id))?;

            let index = ThemeIndex::from_file(id, index_path)?;
            let theme = IconTheme::with_base_paths(id, index, location.base_paths.iter().cloned());
            tracing::debug!(
                "Loaded icon theme '{}' ({} icons)",
                id,
                theme.icon_count()
            );
            self.themes.insert(id.to_string(), theme);
        }

        self.themes.get(id).ok_or_else(|| Error::theme_not_found(id))
    }

    /// Load a theme together with every theme it inherits from, plus the
    /// `hicolor` fallback.
    ///
    /// Ancestors that cannot be found are skipped; only the requested theme
    /// itself must load.
    pub fn load_theme_with_parents(&mut self, id: &str) -> Result<&IconTheme> {
        let mut pending = vec![id.to_string()];
        let mut seen = Vec::new();

        while let Some(current) = pending.pop() {
            if seen.contains(&current) {
                continue;
            }
            seen.push(current.clone());

            let parents = match self.load_theme(&current) {
                Ok(theme) => theme.inherits().to_vec(),
                Err(e) if current == id => return Err(e),
                Err(e) => {
                    tracing::debug!("Skipping ancestor '{}' of '{}': {}", current, id, e);
                    continue;
                }
            };
            pending.extend(parents.into_iter().rev());
        }

        if !seen.iter().any(|s| s == FALLBACK_THEME)
            && let Err(e) = self.load_theme(FALLBACK_THEME)
        {
            tracing::debug!("Fallback theme unavailable: {}", e);
        }

        self.themes.get(id).ok_or_else(|| Error::theme_not_found(id))
    }

    /// Register an already built theme, replacing any loaded theme with the
    /// same id.
    pub fn insert_theme(&mut self, theme: IconTheme) -> Option<IconTheme> {
        self.themes.insert(theme.id().to_string(), theme)
    }

    /// Get a loaded theme by ID.
    pub fn get_theme(&self, id: &str) -> Option<&IconTheme> {
        self.themes.get(id)
    }

    /// Get all loaded themes.
    pub fn themes(&self) -> impl Iterator<Item = &IconTheme> {
        self.themes.values()
    }

    /// Get loaded theme IDs.
    pub fn theme_ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Check if a theme is loaded.
    pub fn has_theme(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// Set the default theme.
    pub fn set_default_theme(&mut self, id: impl Into<String>) {
        self.default_theme = Some(id.into());
    }

    /// Get the default theme, falling back to `hicolor`.
    pub fn default_theme(&self) -> Option<&IconTheme> {
        self.default_theme
            .as_ref()
            .and_then(|id| self.themes.get(id))
            .or_else(|| self.themes.get(FALLBACK_THEME))
    }

    /// Find an icon placed directly in a search path, outside any theme.
    ///
    /// This is the last resort of the freedesktop lookup (`/usr/share/pixmaps`
    /// is the usual home of such files).
    pub fn find_standalone(&self, name: &str) -> Option<PathBuf> {
        self.search_paths.iter().find_map(|dir| {
            IconFormat::ALL
                .iter()
                .map(|format| dir.join(format!("{}.{}", name, format.extension())))
                .find(|path| path.is_file())
        })
    }

    /// Get default search paths for the current platform.
    #[cfg(target_os = "linux")]
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Legacy per-user directory comes first
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".icons"));
        }

        // XDG_DATA_HOME/icons or ~/.local/share/icons
        if let Some(data_home) = dirs::data_dir() {
            paths.push(data_home.join("icons"));
        }

        // XDG_DATA_DIRS/icons
        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .ok()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
        for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            let path = PathBuf::from(dir).join("icons");
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        // Standalone icons
        paths.push(PathBuf::from("/usr/share/pixmaps"));

        paths
    }

    /// Get default search paths for macOS.
    #[cfg(target_os = "macos")]
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User Application Support
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("Library/Application Support/Icons"));
        }

        // System Application Support
        paths.push(PathBuf::from("/Library/Application Support/Icons"));

        // If running from a bundle, check Resources
        if let Ok(exe) = std::env::current_exe()
            && let Some(bundle) = exe.parent().and_then(|p| p.parent())
        {
            paths.push(bundle.join("Resources/icons"));
        }

        paths
    }

    /// Get default search paths for Windows.
    #[cfg(target_os = "windows")]
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User local app data
        if let Some(local) = dirs::data_local_dir() {
            paths.push(local.join("Icons"));
        }

        // Program data
        if let Ok(program_data) = std::env::var("ProgramData") {
            paths.push(PathBuf::from(program_data).join("Icons"));
        }

        paths
    }

    /// Fallback for other platforms.
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".icons"));
            paths.push(home.join(".local/share/icons"));
        }
        paths.push(PathBuf::from("/usr/local/share/icons"));
        paths.push(PathBuf::from("/usr/share/icons"));

        paths
    }
}

impl Default for IconThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_creation() {
        let loader = IconThemeLoader::new();
        assert!(!loader.search_paths().is_empty());
    }

    #[test]
    fn test_add_search_path() {
        let mut loader = IconThemeLoader::with_paths(Vec::new());
        let path = PathBuf::from("/custom/icons");
        loader.add_search_path(&path);
        assert!(loader.search_paths().contains(&path));

        // Adding same path twice shouldn't duplicate
        let prev_len = loader.search_paths().len();
        loader.add_search_path(&path);
        assert_eq!(loader.search_paths().len(), prev_len);
    }

    #[test]
    fn test_prepend_search_path() {
        let mut loader =
            IconThemeLoader::with_paths(vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        loader.prepend_search_path("/b");
        assert_eq!(
            loader.search_paths(),
            [PathBuf::from("/b"), PathBuf::from("/a")]
        );
    }

    #[test]
    fn test_unknown_theme_is_not_found() {
        let mut loader = IconThemeLoader::with_paths(Vec::new());
        assert_eq!(loader.discover_themes().unwrap(), 0);
        let err = loader.load_theme("Adwaita").unwrap_err();
        assert!(matches!(err, Error::ThemeNotFound(ref id) if id == "Adwaita"));
    }

    #[test]
    fn test_insert_theme() {
        let mut loader = IconThemeLoader::with_paths(Vec::new());
        let theme = IconTheme::from_index("custom", ThemeIndex::new("Custom"));
        assert!(loader.insert_theme(theme).is_none());
        assert!(loader.has_theme("custom"));
        assert!(!loader.is_discovered("custom"));

        // Inserted themes load without discovery
        assert_eq!(loader.load_theme("custom").unwrap().name(), "Custom");
    }

    #[test]
    fn test_default_theme_falls_back_to_hicolor() {
        let mut loader = IconThemeLoader::with_paths(Vec::new());
        assert!(loader.default_theme().is_none());

        loader.insert_theme(IconTheme::from_index("hicolor", ThemeIndex::new("Hicolor")));
        loader.set_default_theme("missing");
        assert_eq!(loader.default_theme().unwrap().id(), "hicolor");
    }
}
