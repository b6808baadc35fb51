//! TOML configuration for building resolvers and providers.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! theme = "Adwaita"
//! search_paths = ["~/.local/share/my-app/icons"]
//! use_default_search_paths = true
//! prefer_this_theme = true
//! scale = 2
//! cache_limit = 500
//! missing_icon = "image-missing"
//! ```

use std::path::{Path, PathBuf};

use horizon_icons_core::{
    DEFAULT_CACHE_LIMIT, FALLBACK_THEME, IconName, IconResolver, IconThemeLoader,
};
use serde::{Deserialize, Serialize};

use crate::bundled::BundledTheme;
use crate::error::{Error, Result};
use crate::provider::ThemeArtProvider;

/// Icon lookup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Theme to resolve from
    pub theme: String,
    /// Extra search paths, searched before the platform defaults
    pub search_paths: Vec<PathBuf>,
    /// Whether to append the platform's default search paths
    pub use_default_search_paths: bool,
    /// Prefer a resized icon from `theme` over an exact one from a parent
    pub prefer_this_theme: bool,
    /// Display scale factor
    pub scale: u32,
    /// Maximum cached lookups; zero disables the cache
    pub cache_limit: usize,
    /// Placeholder for icons that cannot be found; empty disables it
    pub missing_icon: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            theme: FALLBACK_THEME.to_string(),
            search_paths: Vec::new(),
            use_default_search_paths: true,
            prefer_this_theme: true,
            scale: 1,
            cache_limit: DEFAULT_CACHE_LIMIT,
            missing_icon: IconName::IMAGE_MISSING.to_string(),
        }
    }
}

impl IconConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(None, e.to_string()))?;
        config.validate(None)?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(Some(path.to_path_buf()), e.to_string()))?;
        config.validate(Some(path))?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(None, e.to_string()))
    }

    fn validate(&self, path: Option<&Path>) -> Result<()> {
        if self.theme.trim().is_empty() {
            return Err(Error::config(
                path.map(Path::to_path_buf),
                "theme must not be empty",
            ));
        }
        if self.scale == 0 {
            return Err(Error::config(
                path.map(Path::to_path_buf),
                "scale must be at least 1",
            ));
        }
        Ok(())
    }

    /// Effective search paths, in precedence order.
    ///
    /// A leading `~` is expanded to the home directory.
    pub fn effective_search_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.search_paths.iter().map(|p| expand_home(p)).collect();
        if self.use_default_search_paths {
            for path in IconThemeLoader::default_search_paths() {
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
        paths
    }

    /// Build a loader over the effective search paths with themes discovered.
    pub fn build_loader(&self) -> Result<IconThemeLoader> {
        let mut loader = IconThemeLoader::with_paths(self.effective_search_paths());
        let found = loader.discover_themes()?;
        tracing::debug!("Discovered {} icon themes", found);
        Ok(loader)
    }

    /// Build a resolver set to the configured theme.
    ///
    /// Bundled packages stand in for themes (and `hicolor`) that are not
    /// installed. An unknown theme that is neither installed nor bundled is
    /// an error.
    pub fn build_resolver(&self) -> Result<IconResolver> {
        let mut loader = self.build_loader()?;

        BundledTheme::Hicolor.register(&mut loader)?;
        if !loader.is_discovered(&self.theme)
            && let Some(bundled) = BundledTheme::from_id(&self.theme)
        {
            bundled.register(&mut loader)?;
        }

        let mut resolver = IconResolver::with_loader(loader);
        resolver.set_cache_limit(self.cache_limit);
        let theme = BundledTheme::from_id(&self.theme)
            .filter(|b| resolver.loader().has_theme(b.id()))
            .map_or_else(|| self.theme.clone(), |b| b.id().to_string());
        resolver.set_theme(theme)?;
        Ok(resolver)
    }

    /// Build an art provider for this configuration.
    pub fn build_provider(&self) -> Result<ThemeArtProvider> {
        let missing = (!self.missing_icon.is_empty()).then(|| self.missing_icon.clone());
        Ok(ThemeArtProvider::new(self.build_resolver()?)
            .with_prefer_this_theme(self.prefer_this_theme)
            .with_missing_icon(missing))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = IconConfig::from_toml_str("").unwrap();
        assert_eq!(config, IconConfig::default());
        assert_eq!(config.theme, "hicolor");
        assert_eq!(config.missing_icon, "image-missing");
    }

    #[test]
    fn test_partial_config() {
        let config = IconConfig::from_toml_str(
            r#"
            theme = "Tango"
            scale = 2
            search_paths = ["/opt/icons"]
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "Tango");
        assert_eq!(config.scale, 2);
        assert_eq!(config.search_paths, [PathBuf::from("/opt/icons")]);
        assert!(config.prefer_this_theme);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            IconConfig::from_toml_str("scale = 0"),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            IconConfig::from_toml_str("scale = \"big\""),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            IconConfig::from_toml_str("theme = \"\""),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = IconConfig {
            theme: "Adwaita".into(),
            cache_limit: 10,
            ..IconConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(IconConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_search_paths_without_defaults() {
        let config = IconConfig {
            search_paths: vec!["/a".into(), "/b".into()],
            use_default_search_paths: false,
            ..IconConfig::default()
        };
        assert_eq!(
            config.effective_search_paths(),
            [PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/abs")), PathBuf::from("/abs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/icons")), home.join("icons"));
        }
    }
}
