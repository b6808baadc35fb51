//! Pre-built theme packages.
//!
//! Each package ships its `index.theme` manifest inside the binary, so a
//! theme can be resolved from icon files that were installed without one
//! (for example, copied into an application's data directory). Adwaita
//! and Tango inherit from hicolor, which is always registered alongside.

use std::fmt;
use std::path::{Path, PathBuf};

use horizon_icons_core::{IconTheme, IconThemeLoader, ThemeIndex};
use include_dir::{Dir, include_dir};

use crate::error::{Error, Result};

/// Embedded manifests, one `<id>/index.theme` per package.
static MANIFESTS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/themes");

/// A theme package bundled with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundledTheme {
    /// The freedesktop fallback theme
    Hicolor,
    /// GNOME's Adwaita, 3.28 layout
    Adwaita,
    /// Tango Desktop Project, 0.8.90 layout
    Tango,
}

impl BundledTheme {
    /// All bundled packages.
    pub const ALL: [BundledTheme; 3] = [
        BundledTheme::Hicolor,
        BundledTheme::Adwaita,
        BundledTheme::Tango,
    ];

    /// Theme id (its directory name).
    pub fn id(&self) -> &'static str {
        match self {
            BundledTheme::Hicolor => "hicolor",
            BundledTheme::Adwaita => "Adwaita",
            BundledTheme::Tango => "Tango",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BundledTheme::Hicolor => "Hicolor",
            BundledTheme::Adwaita => "Adwaita",
            BundledTheme::Tango => "Tango",
        }
    }

    /// Theme this package falls back to.
    pub fn parent(&self) -> Option<BundledTheme> {
        match self {
            BundledTheme::Hicolor => None,
            BundledTheme::Adwaita | BundledTheme::Tango => Some(BundledTheme::Hicolor),
        }
    }

    /// Upstream source the manifest layout was taken from.
    pub fn upstream_source(&self) -> &'static str {
        match self {
            BundledTheme::Hicolor => "https://www.freedesktop.org/wiki/Software/icon-theme/",
            BundledTheme::Adwaita => {
                "https://launchpad.net/ubuntu/+archive/primary/+sourcefiles/adwaita-icon-theme/3.28.0-1ubuntu1/adwaita-icon-theme_3.28.0.orig.tar.xz"
            }
            BundledTheme::Tango => {
                "https://launchpad.net/ubuntu/+archive/primary/+sourcefiles/tango-icon-theme/0.8.90-5ubuntu1/tango-icon-theme_0.8.90.orig.tar.gz"
            }
        }
    }

    /// Look up a package by theme id, case-insensitively.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(id))
    }

    /// Raw embedded `index.theme` text.
    pub fn manifest(&self) -> Result<&'static str> {
        MANIFESTS
            .get_file(format!("{}/index.theme", self.id()))
            .and_then(|f| f.contents_utf8())
            .ok_or_else(|| Error::MissingManifest(self.id().to_string()))
    }

    /// Parse the embedded manifest.
    pub fn index(&self) -> Result<ThemeIndex> {
        Ok(ThemeIndex::parse(self.id(), self.manifest()?)?)
    }

    /// Build the theme over icon files found under `root`.
    ///
    /// `root` is the theme directory itself (the one that would hold
    /// `index.theme`). An empty or missing directory yields a theme
    /// without icons.
    pub fn load(&self, root: impl AsRef<Path>) -> Result<IconTheme> {
        self.load_from([root.as_ref().to_path_buf()])
    }

    /// Build the theme over several base directories, in precedence order.
    pub fn load_from(&self, roots: impl IntoIterator<Item = PathBuf>) -> Result<IconTheme> {
        Ok(IconTheme::with_base_paths(self.id(), self.index()?, roots))
    }

    /// Directories named after this theme in the given search paths.
    pub fn locate(&self, search_paths: &[PathBuf]) -> Vec<PathBuf> {
        search_paths
            .iter()
            .map(|p| p.join(self.id()))
            .filter(|p| p.is_dir())
            .collect()
    }

    /// Register this package and its parents with a loader.
    ///
    /// Themes the loader already holds are kept. A copy discovered on disk
    /// with its own `index.theme` is preferred; otherwise the embedded
    /// manifest is used over whatever directories [`locate`](Self::locate)
    /// finds in the loader's search paths.
    pub fn register(&self, loader: &mut IconThemeLoader) -> Result<()> {
        let mut packages = vec![*self];
        while let Some(parent) = packages.last().and_then(BundledTheme::parent) {
            packages.push(parent);
        }

        for package in packages.into_iter().rev() {
            let id = package.id();
            if loader.has_theme(id) {
                continue;
            }

            if loader.is_discovered(id) {
                loader.load_theme(id)?;
                tracing::debug!("Using installed '{}' theme", id);
                continue;
            }

            let roots = package.locate(loader.search_paths());
            let theme = package.load_from(roots)?;
            tracing::debug!(
                "Using bundled '{}' manifest ({} icons found)",
                id,
                theme.icon_count()
            );
            loader.insert_theme(theme);
        }

        Ok(())
    }
}

impl fmt::Display for BundledTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
