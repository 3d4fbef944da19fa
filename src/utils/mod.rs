//! Utility modules for browser integration.

pub mod cache;
pub mod dom;
pub mod fetch;
