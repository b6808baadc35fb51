//! Error types for theme packages and providers.

use std::path::PathBuf;

/// Result type alias for package, configuration and scaffolding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of icon lookup itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme loading error.
    #[error(transparent)]
    Theme(#[from] horizon_icons_core::Error),

    /// File I/O error.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file error.
    #[error("Invalid configuration: {message}")]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// A bundled manifest is missing from the binary.
    #[error("No bundled manifest for theme '{0}'")]
    MissingManifest(String),

    /// Scaffolding would clobber an existing theme.
    #[error("Refusing to overwrite existing theme at '{0}'")]
    AlreadyExists(PathBuf),

    /// Invalid scaffolding request.
    #[error("Invalid scaffold: {0}")]
    InvalidScaffold(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    ///
    /// The path, when known, is prefixed to the message.
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        let message = match &path {
            Some(p) => format!("{}: {}", p.display(), message.into()),
            None => message.into(),
        };
        Self::Config { path, message }
    }
}
