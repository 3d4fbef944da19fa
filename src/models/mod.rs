//! Application state models.

pub mod selection;
pub mod session;

pub use selection::Selection;
