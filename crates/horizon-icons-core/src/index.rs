//! `index.theme` manifest parsing.
//!
//! The manifest is an INI-style file. The `[Icon Theme]` section names the
//! theme, its parents and its directories; each directory then has its own
//! section keyed by its relative path:
//!
//! ```text
//! [Icon Theme]
//! Name=Tango
//! Inherits=gnome,hicolor
//! Directories=16x16/actions,scalable/actions
//!
//! [16x16/actions]
//! Size=16
//! Context=Actions
//! Type=Fixed
//!
//! [scalable/actions]
//! Size=48
//! MinSize=8
//! MaxSize=512
//! Type=Scalable
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption, Properties};

use crate::directory::{DEFAULT_THRESHOLD, ThemeDirectory};
use crate::error::{Error, Result};
use crate::types::{DirectoryType, IconContext};

/// Name of the main manifest section.
const THEME_SECTION: &str = "Icon Theme";

/// Parsed contents of an `index.theme` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIndex {
    /// Human-readable theme name
    pub name: String,
    /// Theme description
    pub comment: Option<String>,
    /// Parent themes for inheritance, in declared order
    pub inherits: Vec<String>,
    /// Theme directories, in declared order
    pub directories: Vec<ThemeDirectory>,
    /// Whether to hide from theme selection UI
    pub hidden: bool,
    /// Theme example icon name
    pub example: Option<String>,
}

impl ThemeIndex {
    /// Create an empty manifest.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            inherits: Vec::new(),
            directories: Vec::new(),
            hidden: false,
            example: None,
        }
    }

    /// Parse manifest text.
    ///
    /// `theme_id` names the theme in errors and stands in for a missing
    /// `Name=` key.
    pub fn parse(theme_id: &str, content: &str) -> Result<Self> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_str_opt(content, options)
            .map_err(|e| Error::invalid_index(theme_id, e.to_string()))?;

        let theme = ini
            .section(Some(THEME_SECTION))
            .ok_or_else(|| Error::invalid_index(theme_id, "missing [Icon Theme] section"))?;

        let mut index = ThemeIndex::new(
            theme
                .get("Name")
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(theme_id),
        );
        index.comment = theme.get("Comment").map(|s| s.trim().to_string());
        index.inherits = split_list(theme.get("Inherits"));
        index.hidden = theme
            .get("Hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        index.example = theme.get("Example").map(|s| s.trim().to_string());

        let mut directory_names = split_list(theme.get("Directories"));
        for scaled in split_list(theme.get("ScaledDirectories")) {
            if !directory_names.contains(&scaled) {
                directory_names.push(scaled);
            }
        }
        directory_names.dedup();

        if directory_names.is_empty() {
            tracing::warn!("Icon theme '{}' declares no directories", theme_id);
        }

        for path in directory_names {
            if index.directories.iter().any(|d| d.path == path) {
                continue;
            }
            match ini.section(Some(path.as_str())) {
                Some(section) => match parse_directory_section(&path, section) {
                    Some(dir) => index.directories.push(dir),
                    None => tracing::warn!(
                        "Icon theme '{}': directory '{}' has no valid Size, skipping",
                        theme_id,
                        path
                    ),
                },
                None => tracing::warn!(
                    "Icon theme '{}': directory '{}' has no section, skipping",
                    theme_id,
                    path
                ),
            }
        }

        Ok(index)
    }

    /// Read and parse an `index.theme` file.
    pub fn from_file(theme_id: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(theme_id, &content)
    }

    /// Render this manifest back to `index.theme` text.
    ///
    /// Keys holding their default value are omitted from directory sections.
    pub fn to_index_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "[{}]", THEME_SECTION);
        let _ = writeln!(out, "Name={}", self.name);
        if let Some(comment) = &self.comment {
            let _ = writeln!(out, "Comment={}", comment);
        }
        if !self.inherits.is_empty() {
            let _ = writeln!(out, "Inherits={}", self.inherits.join(","));
        }
        if let Some(example) = &self.example {
            let _ = writeln!(out, "Example={}", example);
        }
        if self.hidden {
            let _ = writeln!(out, "Hidden=true");
        }

        // Parsing appends ScaledDirectories after Directories, so only the
        // trailing run of scaled directories can move there without
        // changing the order.
        let split = self
            .directories
            .iter()
            .rposition(|d| d.scale == 1)
            .map_or(0, |i| i + 1);
        let (unscaled, scaled) = self.directories.split_at(split);
        let join = |dirs: &[ThemeDirectory]| {
            dirs.iter()
                .map(|d| d.path.as_str())
                .collect::<Vec<_>>()
                .join(",")
        };
        let _ = writeln!(out, "Directories={}", join(unscaled));
        if !scaled.is_empty() {
            let _ = writeln!(out, "ScaledDirectories={}", join(scaled));
        }

        for dir in &self.directories {
            let _ = writeln!(out);
            let _ = writeln!(out, "[{}]", dir.path);
            let _ = writeln!(out, "Size={}", dir.size);
            if dir.scale != 1 {
                let _ = writeln!(out, "Scale={}", dir.scale);
            }
            if let Some(context) = dir.context {
                let _ = writeln!(out, "Context={}", context.index_name());
            }
            let _ = writeln!(out, "Type={}", dir.directory_type.as_str());
            match dir.directory_type {
                DirectoryType::Scalable => {
                    let _ = writeln!(out, "MinSize={}", dir.min_size);
                    let _ = writeln!(out, "MaxSize={}", dir.max_size);
                }
                DirectoryType::Threshold if dir.threshold != DEFAULT_THRESHOLD => {
                    let _ = writeln!(out, "Threshold={}", dir.threshold);
                }
                _ => {}
            }
        }

        out
    }

    /// Look up a directory by its relative path.
    pub fn directory(&self, path: &str) -> Option<&ThemeDirectory> {
        self.directories.iter().find(|d| d.path == path)
    }

    /// Check if this theme has scalable directories.
    pub fn has_scalable(&self) -> bool {
        self.directories.iter().any(ThemeDirectory::is_scalable)
    }
}

/// Split a comma-separated list value, trimming and dropping empties.
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a directory section. `None` if `Size` is missing or invalid.
fn parse_directory_section(path: &str, section: &Properties) -> Option<ThemeDirectory> {
    let number = |key: &str| section.get(key).and_then(|s| s.trim().parse::<u32>().ok());

    // Size is required
    let size = number("Size")?;

    let directory_type = match section.get("Type") {
        Some(value) => DirectoryType::parse(value).unwrap_or_else(|| {
            tracing::debug!("Unknown directory Type '{}' in '{}', using Threshold", value, path);
            DirectoryType::Threshold
        }),
        None => DirectoryType::Threshold,
    };

    Some(ThemeDirectory {
        path: path.to_string(),
        size,
        scale: number("Scale").filter(|s| *s > 0).unwrap_or(1),
        context: section.get("Context").and_then(IconContext::parse),
        directory_type,
        min_size: number("MinSize").unwrap_or(size),
        max_size: number("MaxSize").unwrap_or(size),
        threshold: number("Threshold").unwrap_or(DEFAULT_THRESHOLD),
    })
}
