/// Value types shared by documents, guides and raster editors.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
