//! In-memory icon theme model and single-theme lookup.
//!
//! An [`IconTheme`] pairs a parsed [`ThemeIndex`] with the icon files found
//! in each of its directories. Directories are scanned once, when the theme
//! is built; lookups afterwards only consult memory.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::directory::ThemeDirectory;
use crate::error::{Error, Result};
use crate::index::ThemeIndex;
use crate::types::IconFormat;

/// File name of a theme manifest.
pub(crate) const INDEX_FILE: &str = "index.theme";

/// An icon file inside one theme directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IconEntry {
    path: PathBuf,
    format: IconFormat,
}

/// How a resolved icon relates to the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The directory covers the requested size and scale.
    Exact,
    /// Nothing covered the request; this was the nearest available size.
    Closest {
        /// Distance in device pixels to the requested size
        distance: u32,
    },
}

/// Result of a successful icon lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Icon name that was looked up
    pub name: String,
    /// Id of the theme the icon came from
    pub theme: String,
    /// Path to the icon file
    pub path: PathBuf,
    /// File format
    pub format: IconFormat,
    /// Metadata of the directory holding the file
    pub directory: ThemeDirectory,
    /// How well the directory fits the request
    pub kind: MatchKind,
}

impl ResolvedIcon {
    /// Whether the directory covers the requested size.
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }

    /// Whether the file must be resampled to display at `size` x `scale`.
    ///
    /// Vector files never need resampling; raster files do unless their
    /// nominal device size equals the requested one.
    pub fn needs_resize(&self, size: u32, scale: u32) -> bool {
        if self.format.is_vector() {
            return false;
        }
        self.directory.size.saturating_mul(self.directory.scale) != size.saturating_mul(scale)
    }
}

/// A loaded icon theme.
#[derive(Debug, Clone)]
pub struct IconTheme {
    /// Unique theme identifier (directory name)
    id: String,
    /// Parsed manifest
    index: ThemeIndex,
    /// Theme base paths, in search order
    base_paths: Vec<PathBuf>,
    /// Icons per directory; parallel to `index.directories`
    icons: Vec<HashMap<String, IconEntry>>,
}

impl IconTheme {
    /// Create a theme with no icons and no base paths.
    ///
    /// Icons can then be registered with [`insert_icon`](Self::insert_icon).
    pub fn from_index(id: impl Into<String>, index: ThemeIndex) -> Self {
        let icons = vec![HashMap::new(); index.directories.len()];
        Self {
            id: id.into(),
            index,
            base_paths: Vec::new(),
            icons,
        }
    }

    /// Load a theme from its directory.
    ///
    /// The directory name becomes the theme id; `index.theme` must exist.
    pub fn load(theme_dir: impl AsRef<Path>) -> Result<Self> {
        let theme_dir = theme_dir.as_ref();
        let id = theme_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::invalid_index(theme_dir.display().to_string(), "no theme name"))?
            .to_string();

        let index = ThemeIndex::from_file(&id, theme_dir.join(INDEX_FILE))?;
        Ok(Self::with_base_paths(id, index, [theme_dir.to_path_buf()]))
    }

    /// Build a theme from a manifest and the directories holding its icons.
    ///
    /// Icons found under earlier base paths shadow those under later ones.
    pub fn with_base_paths(
        id: impl Into<String>,
        index: ThemeIndex,
        base_paths: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        let mut theme = Self::from_index(id, index);
        for base in base_paths {
            theme.add_base_path(base);
        }
        theme
    }

    /// Scan another base path for icons.
    pub fn add_base_path(&mut self, base: PathBuf) {
        if self.base_paths.contains(&base) {
            return;
        }

        let mut found = 0usize;
        for (dir, icons) in self.index.directories.iter().zip(self.icons.iter_mut()) {
            for (name, entry) in scan_directory(&base.join(&dir.path)) {
                if let std::collections::hash_map::Entry::Vacant(slot) = icons.entry(name) {
                    slot.insert(entry);
                    found += 1;
                }
            }
        }

        tracing::debug!(
            "Icon theme '{}': {} icons under {}",
            self.id,
            found,
            base.display()
        );
        self.base_paths.push(base);
    }

    /// Register an icon file in a declared directory.
    ///
    /// Returns `false` if the directory is not declared by the manifest or
    /// the path has no recognised icon extension. A file in a preferred
    /// format replaces one already registered under the same name.
    pub fn insert_icon(&mut self, directory: &str, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        let Some(format) = IconFormat::from_path(&path) else {
            return false;
        };
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            return false;
        };
        let Some(slot) = self
            .index
            .directories
            .iter()
            .position(|d| d.path == directory)
        else {
            return false;
        };

        let icons = &mut self.icons[slot];
        if !icons.get(&name).is_some_and(|existing| existing.format <= format) {
            icons.insert(name, IconEntry { path, format });
        }
        true
    }

    /// Get the theme id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.index.name
    }

    /// Get the parsed manifest.
    pub fn index(&self) -> &ThemeIndex {
        &self.index
    }

    /// Parent themes, in declared order.
    pub fn inherits(&self) -> &[String] {
        &self.index.inherits
    }

    /// Declared directories.
    pub fn directories(&self) -> &[ThemeDirectory] {
        &self.index.directories
    }

    /// Base paths that were scanned.
    pub fn base_paths(&self) -> &[PathBuf] {
        &self.base_paths
    }

    /// Number of icon files across all directories.
    pub fn icon_count(&self) -> usize {
        self.icons.iter().map(HashMap::len).sum()
    }

    /// Sorted, de-duplicated icon names.
    pub fn icon_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .icons
            .iter()
            .flat_map(|icons| icons.keys().map(String::as_str))
            .collect();
        names.into_iter().collect()
    }

    /// Check if any directory holds `name`.
    pub fn has_icon(&self, name: &str) -> bool {
        self.icons.iter().any(|icons| icons.contains_key(name))
    }

    /// Nominal sizes of the directories holding `name`, ascending.
    pub fn sizes_of(&self, name: &str) -> Vec<u32> {
        let sizes: BTreeSet<u32> = self
            .holders(name)
            .map(|(dir, _)| dir.size)
            .collect();
        sizes.into_iter().collect()
    }

    /// Find `name` in this theme only.
    ///
    /// Tries [`lookup_exact`](Self::lookup_exact) first and falls back to
    /// [`lookup_closest`](Self::lookup_closest).
    pub fn lookup_icon(&self, name: &str, size: u32, scale: u32) -> Option<ResolvedIcon> {
        self.lookup_exact(name, size, scale)
            .or_else(|| self.lookup_closest(name, size, scale))
    }

    /// Find `name` in a directory that covers `size` at `scale`.
    ///
    /// A directory whose nominal size equals the request wins, then the
    /// narrowest covering band; remaining ties go to manifest order.
    pub fn lookup_exact(&self, name: &str, size: u32, scale: u32) -> Option<ResolvedIcon> {
        self.holders(name)
            .filter(|(dir, _)| dir.matches_size(size, scale))
            .min_by_key(|(dir, _)| (dir.size != size, dir.span()))
            .map(|(dir, entry)| self.resolved(name, dir, entry, MatchKind::Exact))
    }

    /// Find `name` in the directory with the smallest size distance.
    ///
    /// Ties go to manifest order.
    pub fn lookup_closest(&self, name: &str, size: u32, scale: u32) -> Option<ResolvedIcon> {
        let mut best: Option<(&ThemeDirectory, &IconEntry, u32)> = None;
        for (dir, entry) in self.holders(name) {
            let distance = dir.size_distance(size, scale);
            if best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((dir, entry, distance));
            }
        }

        best.map(|(dir, entry, distance)| {
            self.resolved(name, dir, entry, MatchKind::Closest { distance })
        })
    }

    /// Directories holding `name`, in manifest order.
    fn holders<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a ThemeDirectory, &'a IconEntry)> + 'a {
        self.index
            .directories
            .iter()
            .zip(self.icons.iter())
            .filter_map(move |(dir, icons)| icons.get(name).map(|entry| (dir, entry)))
    }

    fn resolved(
        &self,
        name: &str,
        dir: &ThemeDirectory,
        entry: &IconEntry,
        kind: MatchKind,
    ) -> ResolvedIcon {
        ResolvedIcon {
            name: name.to_string(),
            theme: self.id.clone(),
            path: entry.path.clone(),
            format: entry.format,
            directory: dir.clone(),
            kind,
        }
    }
}

/// List the icon files of one directory, keeping the preferred format per name.
fn scan_directory(dir: &Path) -> HashMap<String, IconEntry> {
    let mut icons: HashMap<String, IconEntry> = HashMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return icons,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(format) = IconFormat::from_path(&path) else {
            continue;
        };
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        if name.is_empty() || !path.is_file() {
            continue;
        }

        if !icons.get(&name).is_some_and(|existing| existing.format <= format) {
            icons.insert(name, IconEntry { path, format });
        }
    }

    icons
}
