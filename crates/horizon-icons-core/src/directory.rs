//! Theme directory metadata and size matching.

use crate::types::{DirectoryType, IconContext};

/// Default `Threshold=` value for threshold directories.
pub(crate) const DEFAULT_THRESHOLD: u32 = 2;

/// A subdirectory declared by a theme's `index.theme`.
///
/// Missing keys take the freedesktop defaults: `Scale=1`, `Type=Threshold`,
/// `MinSize=MaxSize=Size` and `Threshold=2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDirectory {
    /// Directory path relative to the theme root
    pub path: String,
    /// Nominal icon size
    pub size: u32,
    /// Scale factor (1 for normal, 2 for HiDPI, etc.)
    pub scale: u32,
    /// Icon context
    pub context: Option<IconContext>,
    /// Size type
    pub directory_type: DirectoryType,
    /// Minimum size (for Scalable)
    pub min_size: u32,
    /// Maximum size (for Scalable)
    pub max_size: u32,
    /// Size threshold (for Threshold)
    pub threshold: u32,
}

impl ThemeDirectory {
    /// Create a threshold directory with default metadata.
    pub fn new(path: impl Into<String>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
            scale: 1,
            context: None,
            directory_type: DirectoryType::Threshold,
            min_size: size,
            max_size: size,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Create a fixed-size directory.
    pub fn fixed(path: impl Into<String>, size: u32) -> Self {
        Self::new(path, size).with_type(DirectoryType::Fixed)
    }

    /// Create a scalable directory covering `min_size..=max_size`.
    pub fn scalable(path: impl Into<String>, size: u32, min_size: u32, max_size: u32) -> Self {
        Self {
            min_size,
            max_size,
            ..Self::new(path, size).with_type(DirectoryType::Scalable)
        }
    }

    /// Set the size type.
    pub fn with_type(mut self, directory_type: DirectoryType) -> Self {
        self.directory_type = directory_type;
        self
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the context.
    pub fn with_context(mut self, context: IconContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check if this directory can serve `size` at `scale` without resizing
    /// outside of what the theme allows.
    pub fn matches_size(&self, size: u32, scale: u32) -> bool {
        if self.scale != scale {
            return false;
        }

        match self.directory_type {
            DirectoryType::Fixed => self.size == size,
            DirectoryType::Scalable => self.min_size <= size && size <= self.max_size,
            DirectoryType::Threshold => {
                self.size.saturating_sub(self.threshold) <= size
                    && size <= self.size.saturating_add(self.threshold)
            }
        }
    }

    /// Distance in device pixels between this directory and a request.
    ///
    /// Zero for any size the directory covers. For threshold directories
    /// the covered band is `Size ± Threshold`.
    pub fn size_distance(&self, size: u32, scale: u32) -> u32 {
        let target = size.saturating_mul(scale);
        let (low, high) = match self.directory_type {
            DirectoryType::Fixed => (self.size, self.size),
            DirectoryType::Scalable => (self.min_size, self.max_size),
            DirectoryType::Threshold => (
                self.size.saturating_sub(self.threshold),
                self.size.saturating_add(self.threshold),
            ),
        };
        let low = low.saturating_mul(self.scale);
        let high = high.saturating_mul(self.scale);

        if target < low {
            low - target
        } else if target > high {
            target - high
        } else {
            0
        }
    }

    /// Width of the size band this directory covers.
    ///
    /// Among several matching directories, the narrowest band is the
    /// tightest fit for the request.
    pub fn span(&self) -> u32 {
        match self.directory_type {
            DirectoryType::Fixed => 0,
            DirectoryType::Scalable => self.max_size.saturating_sub(self.min_size),
            DirectoryType::Threshold => self.threshold.saturating_mul(2),
        }
    }

    /// Whether this directory holds vector icons.
    pub fn is_scalable(&self) -> bool {
        self.directory_type == DirectoryType::Scalable
    }
}
