//! Raster collaborators: vector rasterization and in-place border editing.
//!
//! Both are traits so the pipeline can run against fakes in tests.

/// Border extension and guide stroke drawing.
pub mod editor;
/// Vector-to-raster rendering.
pub mod rasterize;
