//! Source SVG model: annotation parsing, the loaded document and its scaled view.

/// Two-point path data parsing and the required annotation identifiers.
pub mod annotation;
/// Target-size view over a loaded document.
pub mod scaled;
/// Loaded source SVG.
pub mod vector;
