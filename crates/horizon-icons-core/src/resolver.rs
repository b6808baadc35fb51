//! Icon resolution across theme inheritance chains.
//!
//! This module provides the [`IconResolver`], which looks up icon names in a
//! theme, follows the inheritance chain, and caches results.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::loader::IconThemeLoader;
use crate::theme::{IconTheme, ResolvedIcon};

/// Theme searched after every inheritance chain.
pub const FALLBACK_THEME: &str = "hicolor";

/// Default maximum number of cached lookups.
pub const DEFAULT_CACHE_LIMIT: usize = 1000;

/// Cache key for resolved icons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    theme: String,
    name: String,
    size: u32,
    scale: u32,
    prefer_this_theme: bool,
}

/// Icon resolver with caching.
///
/// The resolver owns an [`IconThemeLoader`] holding loaded themes and
/// resolves names against the current theme's chain.
#[derive(Debug)]
pub struct IconResolver {
    /// Theme loader holding loaded themes
    loader: IconThemeLoader,
    /// Current theme ID
    current_theme: String,
    /// Resolution cache; `None` records a miss
    cache: Mutex<HashMap<CacheKey, Option<ResolvedIcon>>>,
    /// Maximum cache entries
    cache_limit: usize,
}

impl IconResolver {
    /// Create a resolver over the default search paths.
    ///
    /// No themes are discovered or loaded yet.
    pub fn new() -> Self {
        Self::with_loader(IconThemeLoader::new())
    }

    /// Create a resolver with a custom theme loader.
    pub fn with_loader(loader: IconThemeLoader) -> Self {
        Self {
            loader,
            current_theme: FALLBACK_THEME.to_string(),
            cache: Mutex::new(HashMap::new()),
            cache_limit: DEFAULT_CACHE_LIMIT,
        }
    }

    /// Get the theme loader.
    pub fn loader(&self) -> &IconThemeLoader {
        &self.loader
    }

    /// Get mutable access to the theme loader.
    ///
    /// This clears the resolution cache, since themes may change.
    pub fn loader_mut(&mut self) -> &mut IconThemeLoader {
        self.cache.get_mut().clear();
        &mut self.loader
    }

    /// Register a theme and clear the cache.
    pub fn insert_theme(&mut self, theme: IconTheme) {
        self.loader.insert_theme(theme);
        self.clear_cache();
    }

    /// Set the current theme, loading it and its ancestors if needed.
    ///
    /// This clears the resolution cache.
    pub fn set_theme(&mut self, theme_id: impl Into<String>) -> Result<()> {
        let theme_id = theme_id.into();

        // Loaded themes are kept; discovered ancestors at any depth are filled in
        self.loader.load_theme_with_parents(&theme_id)?;

        if !self.loader.has_theme(&theme_id) {
            return Err(Error::theme_not_found(theme_id));
        }

        self.current_theme = theme_id;
        self.clear_cache();
        Ok(())
    }

    /// Get the current theme ID.
    pub fn current_theme_id(&self) -> &str {
        &self.current_theme
    }

    /// Get the current theme.
    pub fn current_theme(&self) -> Option<&IconTheme> {
        self.loader.get_theme(&self.current_theme)
    }

    /// Clear the resolution cache.
    pub fn clear_cache(&mut self) {
        self.cache.get_mut().clear();
    }

    /// Number of cached lookups.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Get the cache limit.
    pub fn cache_limit(&self) -> usize {
        self.cache_limit
    }

    /// Set the cache limit. A limit of zero disables caching.
    pub fn set_cache_limit(&mut self, limit: usize) {
        self.cache_limit = limit;
        let cache = self.cache.get_mut();
        // Trim cache if needed
        while cache.len() > limit {
            // Remove arbitrary entry (HashMap doesn't preserve order)
            if let Some(key) = cache.keys().next().cloned() {
                cache.remove(&key);
            }
        }
    }

    /// The order in which themes are searched for `theme_id`.
    ///
    /// Depth-first over `Inherits=` in declared order, each theme once,
    /// with `hicolor` last. Unloaded themes appear in the chain but are
    /// skipped during lookup.
    pub fn inheritance_chain(&self, theme_id: &str) -> Vec<String> {
        let mut chain = Vec::new();
        self.collect_chain(theme_id, &mut chain);

        if !chain.iter().any(|id| id == FALLBACK_THEME) {
            chain.push(FALLBACK_THEME.to_string());
        }
        chain
    }

    fn collect_chain(&self, theme_id: &str, chain: &mut Vec<String>) {
        if chain.iter().any(|id| id == theme_id) {
            return;
        }
        chain.push(theme_id.to_string());

        if let Some(theme) = self.loader.get_theme(theme_id) {
            for parent in theme.inherits() {
                self.collect_chain(parent, chain);
            }
        }
    }

    /// Find an icon in the current theme's chain.
    ///
    /// See [`find_icon_in`](Self::find_icon_in).
    pub fn find_icon(
        &self,
        name: &str,
        size: u32,
        scale: u32,
        prefer_this_theme: bool,
    ) -> Option<ResolvedIcon> {
        self.find_icon_in(&self.current_theme, name, size, scale, prefer_this_theme)
    }

    /// Find an icon starting from `theme_id`.
    ///
    /// With `prefer_this_theme`, each theme in the chain is asked for an
    /// exact match and then for its closest size before moving on, so a
    /// resized icon from `theme_id` beats an exact one from a parent.
    /// Without it, the whole chain is searched for an exact match first and
    /// only then for the closest size.
    ///
    /// Returns `None` when no theme in the chain has the icon.
    pub fn find_icon_in(
        &self,
        theme_id: &str,
        name: &str,
        size: u32,
        scale: u32,
        prefer_this_theme: bool,
    ) -> Option<ResolvedIcon> {
        let scale = scale.max(1);
        let key = CacheKey {
            theme: theme_id.to_string(),
            name: name.to_string(),
            size,
            scale,
            prefer_this_theme,
        };

        // Check cache first
        if let Some(entry) = self.cache.lock().get(&key) {
            return entry.clone();
        }

        // Resolve through theme chain
        let result = self.resolve_uncached(theme_id, name, size, scale, prefer_this_theme);

        match &result {
            Some(icon) => tracing::debug!(
                "Resolved '{}' ({}@{}) to {} from '{}'",
                name,
                size,
                scale,
                icon.path.display(),
                icon.theme
            ),
            None => tracing::debug!("Icon '{}' not found from theme '{}'", name, theme_id),
        }

        // Cache the result
        let mut cache = self.cache.lock();
        if cache.len() < self.cache_limit {
            cache.insert(key, result.clone());
        }

        result
    }

    /// Resolve without caching.
    fn resolve_uncached(
        &self,
        theme_id: &str,
        name: &str,
        size: u32,
        scale: u32,
        prefer_this_theme: bool,
    ) -> Option<ResolvedIcon> {
        let chain: Vec<&IconTheme> = self
            .inheritance_chain(theme_id)
            .iter()
            .filter_map(|id| {
                let theme = self.loader.get_theme(id);
                if theme.is_none() {
                    tracing::debug!("Theme '{}' is not loaded, skipping", id);
                }
                theme
            })
            .collect();

        if prefer_this_theme {
            return chain
                .iter()
                .find_map(|theme| theme.lookup_icon(name, size, scale));
        }

        chain
            .iter()
            .find_map(|theme| theme.lookup_exact(name, size, scale))
            .or_else(|| {
                chain
                    .iter()
                    .find_map(|theme| theme.lookup_closest(name, size, scale))
            })
    }

    /// Check if an icon resolves from the current theme.
    pub fn has_icon(&self, name: &str) -> bool {
        self.inheritance_chain(&self.current_theme)
            .iter()
            .filter_map(|id| self.loader.get_theme(id))
            .any(|theme| theme.has_icon(name))
    }

    /// Get all available nominal sizes for an icon name across the current
    /// theme's chain, ascending.
    pub fn available_sizes(&self, name: &str) -> Vec<u32> {
        let mut sizes: Vec<u32> = self
            .inheritance_chain(&self.current_theme)
            .iter()
            .filter_map(|id| self.loader.get_theme(id))
            .flat_map(|theme| theme.sizes_of(name))
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}
