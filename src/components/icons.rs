//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuDownload as Download, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuFolderOpen as FolderOpen, LuList as Menu, LuLock as Lock, LuMusic as Audio,
        LuPlay as Video, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsListUl as Menu,
        BsLockFill as Lock, BsMusicNoteBeamed as Audio, BsPlayBtn as Video, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(AUDIO, Audio);
themed_icon!(VIDEO, Video);
themed_icon!(LOCK, Lock);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
