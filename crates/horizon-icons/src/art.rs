//! Stock art identifiers and client surfaces.
//!
//! Desktop toolkits ask art providers for images by a fixed set of stock
//! identifiers ("error", "file-open", "go-back", ...) rather than by
//! freedesktop icon names. [`StockArt`] maps one vocabulary onto the other.

use std::fmt;

/// A well-known toolkit art identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockArt {
    // Message box icons
    Error,
    Question,
    Warning,
    Information,

    // Bookmarks and help
    AddBookmark,
    DelBookmark,
    HelpSidePanel,
    HelpSettings,
    HelpBook,
    HelpFolder,
    HelpPage,
    Help,
    Tip,

    // Navigation
    GoBack,
    GoForward,
    GoUp,
    GoDown,
    GoToParent,
    GoHome,
    GotoFirst,
    GotoLast,
    GoDirUp,

    // Files and folders
    FileOpen,
    FileSave,
    FileSaveAs,
    Print,
    ReportView,
    ListView,
    NewDir,
    Folder,
    FolderOpen,
    ExecutableFile,
    NormalFile,

    // Marks
    TickMark,
    CrossMark,
    MissingImage,

    // Editing
    New,
    Undo,
    Redo,
    Plus,
    Minus,
    Close,
    Quit,
    Find,
    FindAndReplace,
    FullScreen,
    Edit,
    Delete,
    Copy,
    Cut,
    Paste,

    // Devices
    Harddisk,
    Floppy,
    Cdrom,
    Removable,
}

impl StockArt {
    /// Every stock identifier.
    pub const ALL: [StockArt; 55] = [
        StockArt::Error,
        StockArt::Question,
        StockArt::Warning,
        StockArt::Information,
        StockArt::AddBookmark,
        StockArt::DelBookmark,
        StockArt::HelpSidePanel,
        StockArt::HelpSettings,
        StockArt::HelpBook,
        StockArt::HelpFolder,
        StockArt::HelpPage,
        StockArt::Help,
        StockArt::Tip,
        StockArt::GoBack,
        StockArt::GoForward,
        StockArt::GoUp,
        StockArt::GoDown,
        StockArt::GoToParent,
        StockArt::GoHome,
        StockArt::GotoFirst,
        StockArt::GotoLast,
        StockArt::GoDirUp,
        StockArt::FileOpen,
        StockArt::FileSave,
        StockArt::FileSaveAs,
        StockArt::Print,
        StockArt::ReportView,
        StockArt::ListView,
        StockArt::NewDir,
        StockArt::Folder,
        StockArt::FolderOpen,
        StockArt::ExecutableFile,
        StockArt::NormalFile,
        StockArt::TickMark,
        StockArt::CrossMark,
        StockArt::MissingImage,
        StockArt::New,
        StockArt::Undo,
        StockArt::Redo,
        StockArt::Plus,
        StockArt::Minus,
        StockArt::Close,
        StockArt::Quit,
        StockArt::Find,
        StockArt::FindAndReplace,
        StockArt::FullScreen,
        StockArt::Edit,
        StockArt::Delete,
        StockArt::Copy,
        StockArt::Cut,
        StockArt::Paste,
        StockArt::Harddisk,
        StockArt::Floppy,
        StockArt::Cdrom,
        StockArt::Removable,
    ];

    /// Stock identifier in its canonical upper-snake spelling.
    pub fn id(&self) -> &'static str {
        match self {
            StockArt::Error => "ERROR",
            StockArt::Question => "QUESTION",
            StockArt::Warning => "WARNING",
            StockArt::Information => "INFORMATION",
            StockArt::AddBookmark => "ADD_BOOKMARK",
            StockArt::DelBookmark => "DEL_BOOKMARK",
            StockArt::HelpSidePanel => "HELP_SIDE_PANEL",
            StockArt::HelpSettings => "HELP_SETTINGS",
            StockArt::HelpBook => "HELP_BOOK",
            StockArt::HelpFolder => "HELP_FOLDER",
            StockArt::HelpPage => "HELP_PAGE",
            StockArt::Help => "HELP",
            StockArt::Tip => "TIP",
            StockArt::GoBack => "GO_BACK",
            StockArt::GoForward => "GO_FORWARD",
            StockArt::GoUp => "GO_UP",
            StockArt::GoDown => "GO_DOWN",
            StockArt::GoToParent => "GO_TO_PARENT",
            StockArt::GoHome => "GO_HOME",
            StockArt::GotoFirst => "GOTO_FIRST",
            StockArt::GotoLast => "GOTO_LAST",
            StockArt::GoDirUp => "GO_DIR_UP",
            StockArt::FileOpen => "FILE_OPEN",
            StockArt::FileSave => "FILE_SAVE",
            StockArt::FileSaveAs => "FILE_SAVE_AS",
            StockArt::Print => "PRINT",
            StockArt::ReportView => "REPORT_VIEW",
            StockArt::ListView => "LIST_VIEW",
            StockArt::NewDir => "NEW_DIR",
            StockArt::Folder => "FOLDER",
            StockArt::FolderOpen => "FOLDER_OPEN",
            StockArt::ExecutableFile => "EXECUTABLE_FILE",
            StockArt::NormalFile => "NORMAL_FILE",
            StockArt::TickMark => "TICK_MARK",
            StockArt::CrossMark => "CROSS_MARK",
            StockArt::MissingImage => "MISSING_IMAGE",
            StockArt::New => "NEW",
            StockArt::Undo => "UNDO",
            StockArt::Redo => "REDO",
            StockArt::Plus => "PLUS",
            StockArt::Minus => "MINUS",
            StockArt::Close => "CLOSE",
            StockArt::Quit => "QUIT",
            StockArt::Find => "FIND",
            StockArt::FindAndReplace => "FIND_AND_REPLACE",
            StockArt::FullScreen => "FULL_SCREEN",
            StockArt::Edit => "EDIT",
            StockArt::Delete => "DELETE",
            StockArt::Copy => "COPY",
            StockArt::Cut => "CUT",
            StockArt::Paste => "PASTE",
            StockArt::Harddisk => "HARDDISK",
            StockArt::Floppy => "FLOPPY",
            StockArt::Cdrom => "CDROM",
            StockArt::Removable => "REMOVABLE",
        }
    }

    /// freedesktop icon name for this identifier.
    pub fn icon_name(&self) -> &'static str {
        match self {
            StockArt::Error => "dialog-error",
            StockArt::Question => "dialog-question",
            StockArt::Warning => "dialog-warning",
            StockArt::Information => "dialog-information",
            StockArt::AddBookmark => "bookmark-new",
            StockArt::DelBookmark => "edit-delete",
            StockArt::HelpSidePanel => "view-sidebar",
            StockArt::HelpSettings => "preferences-system",
            StockArt::HelpBook => "help-contents",
            StockArt::HelpFolder => "folder",
            StockArt::HelpPage => "text-x-generic",
            StockArt::Help => "help-browser",
            StockArt::Tip => "dialog-information",
            StockArt::GoBack => "go-previous",
            StockArt::GoForward => "go-next",
            StockArt::GoUp => "go-up",
            StockArt::GoDown => "go-down",
            StockArt::GoToParent => "go-up",
            StockArt::GoHome => "go-home",
            StockArt::GotoFirst => "go-first",
            StockArt::GotoLast => "go-last",
            StockArt::GoDirUp => "go-up",
            StockArt::FileOpen => "document-open",
            StockArt::FileSave => "document-save",
            StockArt::FileSaveAs => "document-save-as",
            StockArt::Print => "document-print",
            StockArt::ReportView => "view-list-details",
            StockArt::ListView => "view-list",
            StockArt::NewDir => "folder-new",
            StockArt::Folder => "folder",
            StockArt::FolderOpen => "folder-open",
            StockArt::ExecutableFile => "application-x-executable",
            StockArt::NormalFile => "text-x-generic",
            StockArt::TickMark => "object-select",
            StockArt::CrossMark => "window-close",
            StockArt::MissingImage => "image-missing",
            StockArt::New => "document-new",
            StockArt::Undo => "edit-undo",
            StockArt::Redo => "edit-redo",
            StockArt::Plus => "list-add",
            StockArt::Minus => "list-remove",
            StockArt::Close => "window-close",
            StockArt::Quit => "application-exit",
            StockArt::Find => "edit-find",
            StockArt::FindAndReplace => "edit-find-replace",
            StockArt::FullScreen => "view-fullscreen",
            StockArt::Edit => "accessories-text-editor",
            StockArt::Delete => "edit-delete",
            StockArt::Copy => "edit-copy",
            StockArt::Cut => "edit-cut",
            StockArt::Paste => "edit-paste",
            StockArt::Harddisk => "drive-harddisk",
            StockArt::Floppy => "media-floppy",
            StockArt::Cdrom => "media-optical",
            StockArt::Removable => "drive-removable-media",
        }
    }

    /// Parse a stock identifier.
    ///
    /// Accepts the canonical spelling as well as toolkit-prefixed
    /// (`wxART_FILE_OPEN`, `ART_FILE_OPEN`) and lowercase/kebab forms
    /// (`file-open`). Returns `None` for anything else, which callers
    /// treat as a plain icon name.
    pub fn parse(id: &str) -> Option<Self> {
        let trimmed = id.trim();
        let bare = trimmed
            .strip_prefix("wxART_")
            .or_else(|| trimmed.strip_prefix("ART_"))
            .unwrap_or(trimmed);
        let normalized = bare.replace('-', "_").to_ascii_uppercase();

        Self::ALL.into_iter().find(|art| art.id() == normalized)
    }
}

impl fmt::Display for StockArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The surface an image is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArtClient {
    /// Toolbar buttons
    Toolbar,
    /// Menu items
    Menu,
    /// Push buttons
    Button,
    /// Window frame icons
    FrameIcon,
    /// Common dialogs (file chooser, etc.)
    CmnDialog,
    /// Help browser
    HelpBrowser,
    /// Message boxes
    MessageBox,
    /// Anything else
    #[default]
    Other,
}

impl ArtClient {
    /// Pixel size used when the caller does not specify one.
    pub fn default_size(&self) -> u32 {
        match self {
            ArtClient::Toolbar => 24,
            ArtClient::Menu
            | ArtClient::Button
            | ArtClient::FrameIcon
            | ArtClient::CmnDialog
            | ArtClient::HelpBrowser => 16,
            ArtClient::MessageBox => 48,
            ArtClient::Other => 32,
        }
    }

    /// Parse a client name (`"toolbar"`, `"wxART_MENU"`, `"message-box"`).
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let bare = trimmed
            .strip_prefix("wxART_")
            .or_else(|| trimmed.strip_prefix("ART_"))
            .unwrap_or(trimmed);
        match bare.replace(['-', '_'], "").to_ascii_lowercase().as_str() {
            "toolbar" => Some(ArtClient::Toolbar),
            "menu" => Some(ArtClient::Menu),
            "button" => Some(ArtClient::Button),
            "frameicon" => Some(ArtClient::FrameIcon),
            "cmndialog" => Some(ArtClient::CmnDialog),
            "helpbrowser" => Some(ArtClient::HelpBrowser),
            "messagebox" => Some(ArtClient::MessageBox),
            "other" => Some(ArtClient::Other),
            _ => None,
        }
    }
}
