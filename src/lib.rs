//! Create Android nine-patch PNGs from annotated SVGs.
//!
//! The source SVG carries four two-point `<path>` elements, `padding-x`, `padding-y`,
//! `stretch-x` and `stretch-y`, placed anywhere in the drawing (usually outside the visible
//! canvas). They mark the content padding and stretchable rows/columns.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `svg -> VectorDocument` (canvas size + annotation path data)
//! 2. **Scale**: `VectorDocument + WxH -> ScaledDocument` (regions in target pixels)
//! 3. **Guides**: `ScaledDocument -> GuideSet` (four border segments)
//! 4. **Raster**: render the SVG at WxH, add a 1px transparent border, stroke the guides
//!
//! Steps 1–3 are pure. Step 4 goes through the [`Rasterizer`] and [`RasterEditor`] traits;
//! [`ResvgRasterizer`] and [`PngRasterEditor`] are the defaults.
//!
//! Annotation parsing is strict by default: a missing or malformed annotation is an error.
//! [`ParseMode::Lenient`] restores the legacy behavior of substituting an empty region.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod guide;
mod pipeline;
mod raster;

pub use document::annotation::{Annotation, ParseMode, parse_annotation, parse_path_data};
pub use document::scaled::ScaledDocument;
pub use document::vector::{SVG_NS, VectorDocument};
pub use foundation::core::{Axis, GuideSegment, PathRegion};
pub use foundation::error::{NinePatchError, NinePatchResult};
pub use guide::compute::{GuideSet, bordered_size, compute_guides, guides_for};
pub use pipeline::{
    NINE_PATCH_BORDER, NinePatchOpts, NinePatchReport, ensure_parent_dir, prepare_document,
    render_nine_patch,
};
pub use raster::editor::{PngRasterEditor, RasterEditor, segment_pixels};
pub use raster::rasterize::{
    InkscapeRasterizer, Rasterizer, ResvgRasterizer, is_inkscape_on_path, rasterize_tree_to_rgba8,
};
