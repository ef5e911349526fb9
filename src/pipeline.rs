use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::document::annotation::ParseMode;
use crate::document::scaled::ScaledDocument;
use crate::document::vector::VectorDocument;
use crate::foundation::error::{NinePatchError, NinePatchResult};
use crate::guide::compute::{GuideSet, bordered_size, compute_guides};
use crate::raster::editor::RasterEditor;
use crate::raster::rasterize::Rasterizer;

/// Border width of a nine-patch, in pixels.
pub const NINE_PATCH_BORDER: u32 = 1;

/// Options for [`render_nine_patch`].
#[derive(Clone, Copy, Debug)]
pub struct NinePatchOpts {
    /// Exported width of the image content (border excluded).
    pub width: u32,
    /// Exported height of the image content (border excluded).
    pub height: u32,
    /// Annotation policy.
    pub mode: ParseMode,
}

impl NinePatchOpts {
    /// Strict options for a `width`×`height` export.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mode: ParseMode::Strict,
        }
    }
}

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct NinePatchReport {
    /// Written nine-patch file.
    pub output: PathBuf,
    /// Content size `(width, height)`.
    pub content_size: (u32, u32),
    /// Final raster size including the border.
    pub raster_size: (u32, u32),
    /// `(scale_ratio_x, scale_ratio_y)` from the SVG canvas to the content size.
    pub scale: (f64, f64),
    /// The guides drawn into the border.
    pub guides: GuideSet,
}

/// Load `input` and prepare its scaled view, without touching any raster.
pub fn prepare_document(input: &Path, opts: NinePatchOpts) -> NinePatchResult<ScaledDocument> {
    let doc = VectorDocument::load_with_mode(input, opts.mode)?;
    ScaledDocument::new(doc, opts.width, opts.height)
}

/// Produce the nine-patch `output` from the annotated SVG `input`.
///
/// Annotations are resolved and guides computed before anything is written, so a bad document
/// never leaves a half-built PNG behind.
#[tracing::instrument(skip(rasterizer, editor))]
pub fn render_nine_patch(
    input: &Path,
    output: &Path,
    opts: NinePatchOpts,
    rasterizer: &dyn Rasterizer,
    editor: &dyn RasterEditor,
) -> NinePatchResult<NinePatchReport> {
    let scaled = prepare_document(input, opts)?;
    let (cols, rows) = bordered_size(scaled.width(), scaled.height(), NINE_PATCH_BORDER);
    let guides = compute_guides(&scaled, cols, rows)?;
    tracing::debug!(?guides, "computed guides");

    ensure_parent_dir(output)?;
    rasterizer.render(input, output, scaled.width(), scaled.height())?;
    check_raster_size(output, scaled.width(), scaled.height())?;
    editor.extend_canvas(output, NINE_PATCH_BORDER)?;
    editor.draw_segments(output, &guides.segments())?;

    Ok(NinePatchReport {
        output: output.to_path_buf(),
        content_size: (scaled.width(), scaled.height()),
        raster_size: (cols, rows),
        scale: (scaled.scale_ratio_x(), scaled.scale_ratio_y()),
        guides,
    })
}

// The guides' last row/column assume the rasterizer honored the requested size.
fn check_raster_size(path: &Path, width: u32, height: u32) -> NinePatchResult<()> {
    let actual = image::ImageReader::open(path)
        .with_context(|| format!("open raster '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff raster format '{}'", path.display()))?
        .into_dimensions()
        .map_err(|e| NinePatchError::raster(format!("read size of '{}': {e}", path.display())))?;

    if actual != (width, height) {
        return Err(NinePatchError::raster(format!(
            "rasterizer wrote {}x{} to '{}', expected {width}x{height}",
            actual.0,
            actual.1,
            path.display()
        )));
    }
    Ok(())
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> NinePatchResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
