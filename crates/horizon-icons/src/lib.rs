//! Bundled icon themes and art providers for Horizon Icons.
//!
//! This crate builds on [`horizon_icons_core`] with the pieces an
//! application needs to put icons on screen:
//!
//! - **Bundled packages**: Adwaita, Tango and hicolor manifests embedded in
//!   the binary ([`BundledTheme`])
//! - **Art providers**: stock toolkit identifiers resolved through a theme
//!   chain ([`ThemeArtProvider`], [`ProviderStack`])
//! - **Configuration**: TOML-backed resolver setup ([`IconConfig`])
//! - **Scaffolding**: new theme skeletons ([`ThemeScaffold`])
//!
//! # Example
//!
//! ```ignore
//! use horizon_icons::{ArtClient, ArtRequest, IconConfig, IconProvider};
//!
//! let config = IconConfig::from_toml_str(r#"theme = "Adwaita""#)?;
//! let provider = config.build_provider()?;
//!
//! let request = ArtRequest::new("FILE_OPEN").with_client(ArtClient::Toolbar);
//! if let Some(icon) = provider.provide(&request) {
//!     println!("{} (resize: {})", icon.path.display(), icon.needs_resize);
//! }
//! ```

mod art;
mod bundled;
mod config;
mod error;
mod provider;
mod scaffold;

pub use art::{ArtClient, StockArt};
pub use bundled::BundledTheme;
pub use config::IconConfig;
pub use error::{Error, Result};
pub use provider::{
    ArtRequest, IconProvider, IconSource, ProvidedIcon, ProviderStack, ThemeArtProvider,
};
pub use scaffold::{DEFAULT_SIZES, ThemeScaffold};
