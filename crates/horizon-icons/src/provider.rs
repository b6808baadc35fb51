//! Art providers: turning toolkit art requests into icon files.
//!
//! An [`IconProvider`] answers an [`ArtRequest`] with a [`ProvidedIcon`].
//! [`ThemeArtProvider`] answers from a freedesktop theme chain, and a
//! [`ProviderStack`] chains several providers so that one declining a
//! request hands it to the next.
//!
//! Providers only locate files. Decoding and rasterising the result is left
//! to the caller, guided by [`ProvidedIcon::needs_resize`].

use std::fmt;
use std::path::PathBuf;

use horizon_icons_core::{IconFormat, IconName, IconResolver, MatchKind, ResolvedIcon};

use crate::art::{ArtClient, StockArt};

/// A request for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtRequest {
    /// Stock identifier or plain icon name
    pub id: String,
    /// Surface the image is for
    pub client: ArtClient,
    /// Logical pixel size; `None` uses the client's default
    pub size: Option<u32>,
    /// Display scale factor
    pub scale: u32,
}

impl ArtRequest {
    /// Request `id` for [`ArtClient::Other`] at its default size.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            client: ArtClient::default(),
            size: None,
            scale: 1,
        }
    }

    /// Set the requesting client.
    pub fn with_client(mut self, client: ArtClient) -> Self {
        self.client = client;
        self
    }

    /// Set an explicit size. Zero means "use the client default".
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = (size > 0).then_some(size);
        self
    }

    /// Set the display scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Size the caller wants, in logical pixels.
    pub fn target_size(&self) -> u32 {
        self.size.unwrap_or_else(|| self.client.default_size())
    }

    /// freedesktop icon name to look up.
    ///
    /// Stock identifiers are translated; anything else is taken as an icon
    /// name with any file extension removed.
    pub fn icon_name(&self) -> String {
        match StockArt::parse(&self.id) {
            Some(art) => art.icon_name().to_string(),
            None => IconName::new(self.id.as_str()).as_str().to_string(),
        }
    }
}

/// Where a provided icon came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Found in a theme of the chain.
    Theme {
        /// Theme id the file belongs to
        theme: String,
        /// How the directory matched the request
        kind: MatchKind,
    },
    /// A file directly inside a search path.
    Standalone,
    /// The requested icon was not found; this is the placeholder.
    Missing {
        /// Theme id the placeholder belongs to
        theme: String,
    },
}

/// A located icon file and how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvidedIcon {
    /// Icon name the file was found under
    pub name: String,
    /// Path to the file
    pub path: PathBuf,
    /// File format
    pub format: IconFormat,
    /// Logical size the caller asked for
    pub target_size: u32,
    /// Scale factor the caller asked for
    pub scale: u32,
    /// Whether the image must be rescaled to `target_size` x `scale`
    pub needs_resize: bool,
    /// Origin of the file
    pub source: IconSource,
}

impl ProvidedIcon {
    fn from_resolved(icon: ResolvedIcon, request: &ArtRequest, missing: bool) -> Self {
        let target_size = request.target_size();
        let scale = request.scale.max(1);
        let needs_resize = icon.needs_resize(target_size, scale);
        let source = if missing {
            IconSource::Missing { theme: icon.theme }
        } else {
            IconSource::Theme {
                theme: icon.theme,
                kind: icon.kind,
            }
        };

        Self {
            name: icon.name,
            path: icon.path,
            format: icon.format,
            target_size,
            scale,
            needs_resize,
            source,
        }
    }

    /// Whether this is the placeholder for a missing icon.
    pub fn is_missing(&self) -> bool {
        matches!(self.source, IconSource::Missing { .. })
    }
}

/// Something that can answer art requests.
pub trait IconProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Locate an image for `request`, or decline with `None`.
    fn provide(&self, request: &ArtRequest) -> Option<ProvidedIcon>;
}

/// Provider backed by an [`IconResolver`].
///
/// Lookup order for a request:
/// 1. the resolver's current theme chain
/// 2. standalone icons in the loader's search paths
/// 3. the missing-image icon, through the theme chain
pub struct ThemeArtProvider {
    resolver: IconResolver,
    prefer_this_theme: bool,
    missing_icon: Option<String>,
}

impl ThemeArtProvider {
    /// Wrap a resolver. The missing-image placeholder is `image-missing`.
    pub fn new(resolver: IconResolver) -> Self {
        Self {
            resolver,
            prefer_this_theme: true,
            missing_icon: Some(IconName::IMAGE_MISSING.to_string()),
        }
    }

    /// Whether a resized icon from the current theme beats an exact one
    /// from a parent (default `true`).
    pub fn with_prefer_this_theme(mut self, prefer: bool) -> Self {
        self.prefer_this_theme = prefer;
        self
    }

    /// Set the placeholder icon name, or disable it with `None`.
    pub fn with_missing_icon(mut self, name: Option<String>) -> Self {
        self.missing_icon = name.filter(|n| !n.is_empty());
        self
    }

    /// Get the resolver.
    pub fn resolver(&self) -> &IconResolver {
        &self.resolver
    }

    /// Get mutable access to the resolver.
    pub fn resolver_mut(&mut self) -> &mut IconResolver {
        &mut self.resolver
    }

    /// Consume the provider, returning its resolver.
    pub fn into_resolver(self) -> IconResolver {
        self.resolver
    }

    fn standalone(&self, name: &str, request: &ArtRequest) -> Option<ProvidedIcon> {
        let path = self.resolver.loader().find_standalone(name)?;
        let format = IconFormat::from_path(&path)?;

        Some(ProvidedIcon {
            name: name.to_string(),
            path,
            format,
            target_size: request.target_size(),
            scale: request.scale.max(1),
            // Standalone files carry no size metadata
            needs_resize: !format.is_vector(),
            source: IconSource::Standalone,
        })
    }
}

impl fmt::Debug for ThemeArtProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeArtProvider")
            .field("theme", &self.resolver.current_theme_id())
            .field("prefer_this_theme", &self.prefer_this_theme)
            .field("missing_icon", &self.missing_icon)
            .finish()
    }
}

impl IconProvider for ThemeArtProvider {
    fn name(&self) -> &str {
        self.resolver.current_theme_id()
    }

    fn provide(&self, request: &ArtRequest) -> Option<ProvidedIcon> {
        let name = request.icon_name();
        let size = request.target_size();

        if let Some(icon) =
            self.resolver
                .find_icon(&name, size, request.scale, self.prefer_this_theme)
        {
            return Some(ProvidedIcon::from_resolved(icon, request, false));
        }

        if let Some(icon) = self.standalone(&name, request) {
            tracing::debug!("Using standalone icon {} for '{}'", icon.path.display(), name);
            return Some(icon);
        }

        let missing = self.missing_icon.as_deref()?;
        if missing == name {
            return None;
        }
        tracing::debug!("Icon '{}' not found, substituting '{}'", name, missing);
        self.resolver
            .find_icon(missing, size, request.scale, self.prefer_this_theme)
            .map(|icon| ProvidedIcon::from_resolved(icon, request, true))
    }
}

/// Providers consulted in order until one answers.
#[derive(Default)]
pub struct ProviderStack {
    providers: Vec<Box<dyn IconProvider>>,
}

impl ProviderStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider after the existing ones.
    pub fn push(&mut self, provider: impl IconProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Add a provider ahead of the existing ones.
    pub fn push_front(&mut self, provider: impl IconProvider + 'static) {
        self.providers.insert(0, Box::new(provider));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, provider: impl IconProvider + 'static) -> Self {
        self.push(provider);
        self
    }

    /// Number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the stack has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Names of the providers, in consultation order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl fmt::Debug for ProviderStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderStack")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl IconProvider for ProviderStack {
    fn name(&self) -> &str {
        "stack"
    }

    fn provide(&self, request: &ArtRequest) -> Option<ProvidedIcon> {
        self.providers.iter().find_map(|provider| {
            let icon = provider.provide(request);
            if icon.is_none() {
                tracing::trace!("Provider '{}' declined '{}'", provider.name(), request.id);
            }
            icon
        })
    }
}
