//! UI components.

pub mod auth;
pub mod icons;
pub mod sidebar;
pub mod toc;
pub mod viewer;

pub use auth::AuthDialog;
pub use sidebar::Sidebar;
pub use toc::TableOfContents;
pub use viewer::ContentViewer;
