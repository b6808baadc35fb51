//! Core value types for icon themes.
//!
//! This module provides:
//! - Icon names following freedesktop naming conventions
//! - Directory contexts (Actions, Places, etc.)
//! - Directory size types from `index.theme`
//! - Recognised icon file formats

use std::path::Path;

/// Icon name following freedesktop naming conventions.
///
/// Icon names use lowercase with hyphens and never carry a file extension.
/// A name such as `"document-save"` is looked up as `document-save.png`,
/// `document-save.svg` or `document-save.xpm`.
///
/// # Examples
///
/// ```
/// use horizon_icons_core::IconName;
///
/// let icon = IconName::new("document-save");
/// assert_eq!(icon.as_str(), "document-save");
///
/// // Names given with an extension are normalised.
/// assert_eq!(IconName::new("folder.png").as_str(), "folder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    /// Placeholder shown when nothing else resolves.
    pub const IMAGE_MISSING: &'static str = "image-missing";
    /// Generic document.
    pub const TEXT_X_GENERIC: &'static str = "text-x-generic";
    /// Generic folder.
    pub const FOLDER: &'static str = "folder";
    /// Generic executable.
    pub const APPLICATION_X_EXECUTABLE: &'static str = "application-x-executable";

    /// Create a new icon name, stripping a recognised file extension.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && IconFormat::from_extension(ext).is_some() => {
                Self(stem.to_string())
            }
            _ => Self(name),
        }
    }

    /// Get the icon name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is usable for lookup.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && !self.0.contains('/')
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon context/category following freedesktop specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconContext {
    /// Icons for user actions (copy, save, etc.)
    Actions,
    /// Loading and processing animations
    Animations,
    /// Application icons
    Applications,
    /// Program menu categories
    Categories,
    /// Hardware devices
    Devices,
    /// File/folder emblems and tags
    Emblems,
    /// Emoticons for chat
    Emotes,
    /// Country flags
    International,
    /// File type icons (MIME types)
    MimeTypes,
    /// Filesystem locations
    Places,
    /// System status indicators
    Status,
    /// Pre-standard icon names kept by Adwaita
    Legacy,
}

impl IconContext {
    /// All contexts, in the order themes usually list them.
    pub const ALL: [IconContext; 12] = [
        IconContext::Actions,
        IconContext::Animations,
        IconContext::Applications,
        IconContext::Categories,
        IconContext::Devices,
        IconContext::Emblems,
        IconContext::Emotes,
        IconContext::International,
        IconContext::MimeTypes,
        IconContext::Places,
        IconContext::Status,
        IconContext::Legacy,
    ];

    /// Conventional subdirectory name (`"actions"`, `"apps"`, ...).
    pub fn dir_name(&self) -> &'static str {
        match self {
            IconContext::Actions => "actions",
            IconContext::Animations => "animations",
            IconContext::Applications => "apps",
            IconContext::Categories => "categories",
            IconContext::Devices => "devices",
            IconContext::Emblems => "emblems",
            IconContext::Emotes => "emotes",
            IconContext::International => "intl",
            IconContext::MimeTypes => "mimetypes",
            IconContext::Places => "places",
            IconContext::Status => "status",
            IconContext::Legacy => "legacy",
        }
    }

    /// Value written to the `Context=` key of `index.theme`.
    pub fn index_name(&self) -> &'static str {
        match self {
            IconContext::Actions => "Actions",
            IconContext::Animations => "Animations",
            IconContext::Applications => "Applications",
            IconContext::Categories => "Categories",
            IconContext::Devices => "Devices",
            IconContext::Emblems => "Emblems",
            IconContext::Emotes => "Emotes",
            IconContext::International => "International",
            IconContext::MimeTypes => "MimeTypes",
            IconContext::Places => "Places",
            IconContext::Status => "Status",
            IconContext::Legacy => "Legacy",
        }
    }

    /// Parse a context from either spelling, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "actions" => Some(IconContext::Actions),
            "animations" => Some(IconContext::Animations),
            "apps" | "applications" => Some(IconContext::Applications),
            "categories" => Some(IconContext::Categories),
            "devices" => Some(IconContext::Devices),
            "emblems" => Some(IconContext::Emblems),
            "emotes" => Some(IconContext::Emotes),
            "intl" | "international" => Some(IconContext::International),
            "mimetypes" | "mime-types" => Some(IconContext::MimeTypes),
            "places" => Some(IconContext::Places),
            "status" => Some(IconContext::Status),
            "legacy" => Some(IconContext::Legacy),
            _ => None,
        }
    }
}

/// Size type for icon theme directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryType {
    /// Fixed size icons, usable only at the nominal size
    Fixed,
    /// Scalable icons (typically SVG) usable between `MinSize` and `MaxSize`
    Scalable,
    /// Usable within `Threshold` pixels of the nominal size
    #[default]
    Threshold,
}

impl DirectoryType {
    /// Parse the `Type=` key. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(DirectoryType::Fixed),
            "scalable" => Some(DirectoryType::Scalable),
            "threshold" => Some(DirectoryType::Threshold),
            _ => None,
        }
    }

    /// Value written to the `Type=` key of `index.theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryType::Fixed => "Fixed",
            DirectoryType::Scalable => "Scalable",
            DirectoryType::Threshold => "Threshold",
        }
    }
}

/// Icon file formats recognised by the lookup algorithm.
///
/// Declaration order is lookup preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconFormat {
    /// Portable Network Graphics
    Png,
    /// Scalable Vector Graphics
    Svg,
    /// X PixMap
    Xpm,
}

impl IconFormat {
    /// Formats in preference order.
    pub const ALL: [IconFormat; 3] = [IconFormat::Png, IconFormat::Svg, IconFormat::Xpm];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Svg => "svg",
            IconFormat::Xpm => "xpm",
        }
    }

    /// Parse an extension (without the dot), case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(IconFormat::Png),
            "svg" => Some(IconFormat::Svg),
            "xpm" => Some(IconFormat::Xpm),
            _ => None,
        }
    }

    /// Determine the format of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the file can be rasterised at any size without quality loss.
    pub fn is_vector(&self) -> bool {
        matches!(self, IconFormat::Svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name_strips_extension() {
        assert_eq!(IconName::new("edit-copy.svg").as_str(), "edit-copy");
        assert_eq!(IconName::new("org.gnome.Nautilus").as_str(), "org.gnome.Nautilus");
        assert_eq!(IconName::new(".png").as_str(), ".png");
    }

    #[test]
    fn test_icon_name_validity() {
        assert!(IconName::new("folder").is_valid());
        assert!(!IconName::new("").is_valid());
        assert!(!IconName::new("../folder").is_valid());
    }

    #[test]
    fn test_icon_context_parse() {
        assert_eq!(IconContext::parse("Actions"), Some(IconContext::Actions));
        assert_eq!(IconContext::parse("apps"), Some(IconContext::Applications));
        assert_eq!(
            IconContext::parse("Applications"),
            Some(IconContext::Applications)
        );
        assert_eq!(IconContext::parse("MimeTypes"), Some(IconContext::MimeTypes));
        assert_eq!(IconContext::parse("UI"), None);
    }

    #[test]
    fn test_icon_context_names() {
        assert_eq!(IconContext::Applications.dir_name(), "apps");
        assert_eq!(IconContext::Applications.index_name(), "Applications");
        for context in IconContext::ALL {
            assert_eq!(IconContext::parse(context.index_name()), Some(context));
            assert_eq!(IconContext::parse(context.dir_name()), Some(context));
        }
    }

    #[test]
    fn test_directory_type_parse() {
        assert_eq!(DirectoryType::parse("Fixed"), Some(DirectoryType::Fixed));
        assert_eq!(DirectoryType::parse("scalable"), Some(DirectoryType::Scalable));
        assert_eq!(DirectoryType::parse("Bogus"), None);
        assert_eq!(DirectoryType::default(), DirectoryType::Threshold);
    }

    #[test]
    fn test_icon_format_order() {
        assert!(IconFormat::Png < IconFormat::Svg);
        assert!(IconFormat::Svg < IconFormat::Xpm);
        assert_eq!(
            IconFormat::from_path(Path::new("/icons/a.SVG")),
            Some(IconFormat::Svg)
        );
        assert_eq!(IconFormat::from_path(Path::new("/icons/a.icon")), None);
    }
}
