//! Error types for icon theme loading.

use std::path::PathBuf;

/// Result type alias for icon theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or loading icon themes.
///
/// Icon *lookup* never fails; a missing icon is reported as `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed `index.theme` manifest.
    #[error("Invalid index.theme for theme '{theme}': {message}")]
    InvalidIndex { theme: String, message: String },

    /// Theme is not known to the loader.
    #[error("Icon theme '{0}' not found")]
    ThemeNotFound(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a manifest error.
    pub fn invalid_index(theme: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidIndex {
            theme: theme.into(),
            message: message.into(),
        }
    }

    /// Create a theme-not-found error.
    pub fn theme_not_found(theme: impl Into<String>) -> Self {
        Self::ThemeNotFound(theme.into())
    }
}
