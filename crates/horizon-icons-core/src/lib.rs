//! freedesktop.org icon theme resolution for Horizon Icons.
//!
//! This crate implements the lookup half of the freedesktop icon theme
//! specification, with no GUI toolkit attached:
//!
//! - **Manifests**: parsing `index.theme` into a [`ThemeIndex`]
//! - **Theme model**: per-directory icon entries held in memory ([`IconTheme`])
//! - **Size matching**: `Fixed`, `Scalable` and `Threshold` directories
//! - **Inheritance**: depth-first parent fallback ending in `hicolor`
//! - **Discovery**: XDG search paths and standalone icons ([`IconThemeLoader`])
//!
//! # Example
//!
//! ```ignore
//! use horizon_icons_core::{IconResolver, IconThemeLoader};
//!
//! let mut loader = IconThemeLoader::new();
//! loader.discover_themes()?;
//! loader.load_theme_with_parents("Adwaita")?;
//!
//! let mut resolver = IconResolver::with_loader(loader);
//! resolver.set_theme("Adwaita")?;
//!
//! // Prefer a resized Adwaita icon over an exact-size hicolor one.
//! if let Some(icon) = resolver.find_icon("document-save", 24, 1, true) {
//!     println!("{} ({}px)", icon.path.display(), icon.directory.size);
//! }
//! ```
//!
//! Lookups run against data already loaded into memory. They do not touch
//! the filesystem and never return an error: a miss is `None`, and the
//! caller decides on an application-level placeholder.

mod directory;
mod error;
mod index;
mod loader;
mod resolver;
mod theme;
mod types;

pub use directory::ThemeDirectory;
pub use error::{Error, Result};
pub use index::ThemeIndex;
pub use loader::IconThemeLoader;
pub use resolver::{DEFAULT_CACHE_LIMIT, FALLBACK_THEME, IconResolver};
pub use theme::{IconTheme, MatchKind, ResolvedIcon};
pub use types::{DirectoryType, IconContext, IconFormat, IconName};
