//! Icon theme skeleton generation.

use std::fs;
use std::path::{Path, PathBuf};

use horizon_icons_core::{DirectoryType, FALLBACK_THEME, IconContext, ThemeDirectory, ThemeIndex};

use crate::error::{Error, Result};

/// Sizes used when none are given.
pub const DEFAULT_SIZES: [u32; 6] = [16, 22, 24, 32, 48, 256];

/// Description of a theme skeleton to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeScaffold {
    /// Theme name, also used as `Name=`
    pub name: String,
    /// `Comment=` value
    pub comment: Option<String>,
    /// Parent themes
    pub inherits: Vec<String>,
    /// Nominal sizes, one `<n>x<n>/<context>` directory each
    pub sizes: Vec<u32>,
    /// Contexts to create directories for
    pub contexts: Vec<IconContext>,
    /// Type of the sized directories
    pub directory_type: DirectoryType,
    /// Whether to add `scalable/<context>` directories
    pub scalable: bool,
}

impl ThemeScaffold {
    /// A skeleton inheriting from hicolor with the common sizes and
    /// contexts.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let inherits = if name == FALLBACK_THEME {
            Vec::new()
        } else {
            vec![FALLBACK_THEME.to_string()]
        };

        Self {
            name,
            comment: None,
            inherits,
            sizes: DEFAULT_SIZES.to_vec(),
            contexts: vec![
                IconContext::Actions,
                IconContext::Applications,
                IconContext::Devices,
                IconContext::MimeTypes,
                IconContext::Places,
                IconContext::Status,
            ],
            directory_type: DirectoryType::Threshold,
            scalable: true,
        }
    }

    /// Set the `Comment=` value.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Replace the parent themes.
    pub fn with_inherits(mut self, inherits: Vec<String>) -> Self {
        self.inherits = inherits;
        self
    }

    /// Replace the nominal sizes.
    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Replace the contexts.
    pub fn with_contexts(mut self, contexts: Vec<IconContext>) -> Self {
        self.contexts = contexts;
        self
    }

    /// Set the type of the sized directories.
    pub fn with_directory_type(mut self, directory_type: DirectoryType) -> Self {
        self.directory_type = directory_type;
        self
    }

    /// Toggle the `scalable/<context>` directories.
    pub fn with_scalable(mut self, scalable: bool) -> Self {
        self.scalable = scalable;
        self
    }

    /// Build the manifest described by this skeleton.
    pub fn to_index(&self) -> Result<ThemeIndex> {
        let name = self.name.trim();
        if name.is_empty() || name.contains(['/', '\\', '[', ']', '\n']) {
            return Err(Error::InvalidScaffold(format!(
                "'{}' is not a usable theme name",
                self.name
            )));
        }
        if let Some(comment) = &self.comment
            && !is_single_line_value(comment)
        {
            return Err(Error::InvalidScaffold(
                "comment must be a single line without brackets".into(),
            ));
        }
        if let Some(parent) = self
            .inherits
            .iter()
            .find(|p| !is_single_line_value(p) || p.contains(','))
        {
            return Err(Error::InvalidScaffold(format!(
                "'{}' is not a usable parent theme",
                parent
            )));
        }
        if self.contexts.is_empty() {
            return Err(Error::InvalidScaffold("no contexts given".into()));
        }
        if self.sizes.is_empty() && !self.scalable {
            return Err(Error::InvalidScaffold(
                "no sizes given and scalable directories disabled".into(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidScaffold("sizes must be positive".into()));
        }

        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();

        let mut index = ThemeIndex::new(name);
        index.comment = self.comment.clone();
        index.inherits = self.inherits.clone();

        for size in &sizes {
            for context in &self.contexts {
                let path = format!("{}x{}/{}", size, size, context.dir_name());
                index.directories.push(
                    ThemeDirectory::new(path, *size)
                        .with_type(self.directory_type)
                        .with_context(*context),
                );
            }
        }

        if self.scalable {
            let nominal = sizes.last().copied().unwrap_or(48);
            for context in &self.contexts {
                let path = format!("scalable/{}", context.dir_name());
                index.directories.push(
                    ThemeDirectory::scalable(path, nominal, 8, 512).with_context(*context),
                );
            }
        }

        Ok(index)
    }

    /// Render the `index.theme` text.
    pub fn render_index(&self) -> Result<String> {
        Ok(self.to_index()?.to_index_string())
    }

    /// Create the skeleton under `dir`, which becomes the theme directory.
    ///
    /// Fails with [`Error::AlreadyExists`] if `dir` already holds an
    /// `index.theme`. Returns the path of the written manifest.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let index_path = dir.join("index.theme");
        if index_path.exists() {
            return Err(Error::AlreadyExists(index_path));
        }

        let index = self.to_index()?;
        for directory in &index.directories {
            let path = dir.join(&directory.path);
            fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        }

        fs::write(&index_path, index.to_index_string()).map_err(|e| Error::io(&index_path, e))?;

        let readme = dir.join("README");
        if !readme.exists() {
            fs::write(&readme, self.readme(&index)).map_err(|e| Error::io(&readme, e))?;
        }

        tracing::info!(
            "Created theme '{}' with {} directories at {}",
            index.name,
            index.directories.len(),
            dir.display()
        );
        Ok(index_path)
    }

    fn readme(&self, index: &ThemeIndex) -> String {
        let mut text = format!("{} icon theme\n\n", index.name);
        if let Some(comment) = &index.comment {
            text.push_str(comment);
            text.push_str("\n\n");
        }
        text.push_str(
            "Place icons as <size>x<size>/<context>/<name>.png, or as SVG under\n\
             scalable/<context>/. Names follow the freedesktop icon naming\n\
             specification.\n",
        );
        if !index.inherits.is_empty() {
            text.push_str(&format!(
                "\nMissing icons are taken from: {}\n",
                index.inherits.join(", ")
            ));
        }
        text
    }
}

/// Whether `value` can sit on one `Key=value` line without starting a new
/// key or section.
fn is_single_line_value(value: &str) -> bool {
    !value.contains(['\n', '\r', '[', ']'])
}
