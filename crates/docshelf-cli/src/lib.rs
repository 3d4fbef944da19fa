//! Build-time manifest generation for the docshelf viewer.

pub mod builder;

pub use builder::{BuildError, BuildOptions, build_manifest, leaf_count};
