use std::path::Path;

use anyhow::Context as _;
use image::{Rgba, RgbaImage};

use crate::foundation::core::{Axis, GuideSegment};
use crate::foundation::error::{NinePatchError, NinePatchResult};
use crate::guide::compute::bordered_size;

/// In-place edits applied to a rendered raster file.
pub trait RasterEditor {
    /// Grow the image at `path` by `border` transparent pixels on every side.
    fn extend_canvas(&self, path: &Path, border: u32) -> NinePatchResult<()>;

    /// Draw solid 1px, non-antialiased guide strokes into the image at `path`.
    fn draw_segments(&self, path: &Path, segments: &[GuideSegment]) -> NinePatchResult<()>;
}

/// [`RasterEditor`] for PNG files, backed by the `image` crate.
#[derive(Clone, Debug)]
pub struct PngRasterEditor {
    /// Stroke color (straight RGBA8).
    pub color: [u8; 4],
    /// Added to segment `start`/`end` so canvas-space guides land on bordered pixels.
    pub origin_offset: u32,
}

impl Default for PngRasterEditor {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            origin_offset: 1,
        }
    }
}

impl RasterEditor for PngRasterEditor {
    #[tracing::instrument(skip(self))]
    fn extend_canvas(&self, path: &Path, border: u32) -> NinePatchResult<()> {
        let src = open_rgba8(path)?;
        let (cols, rows) = bordered_size(src.width(), src.height(), border);

        let mut canvas = RgbaImage::new(cols, rows);
        image::imageops::replace(&mut canvas, &src, i64::from(border), i64::from(border));

        save_png(&canvas, path)
    }

    #[tracing::instrument(skip(self, segments), fields(segments = segments.len()))]
    fn draw_segments(&self, path: &Path, segments: &[GuideSegment]) -> NinePatchResult<()> {
        let mut img = open_rgba8(path)?;
        let (cols, rows) = img.dimensions();

        for seg in segments {
            let pixels = segment_pixels(seg, cols, rows, self.origin_offset)?;
            for (x, y) in pixels {
                img.put_pixel(x, y, Rgba(self.color));
            }
        }

        save_png(&img, path)
    }
}

/// Pixels covered by `seg` in a `cols`×`rows` bordered raster.
///
/// Along its axis a segment covers `[round(start) + offset, round(start + length) + offset)`,
/// clipped to `1..=dim - 2` so the four corner pixels are never touched.
pub fn segment_pixels(
    seg: &GuideSegment,
    cols: u32,
    rows: u32,
    offset: u32,
) -> NinePatchResult<Vec<(u32, u32)>> {
    let values = [seg.fixed_coordinate, seg.start, seg.length];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(NinePatchError::invalid_dimensions(format!(
            "guide segment has non-finite coordinates: {seg:?}"
        )));
    }

    let (along_dim, cross_dim) = match seg.axis {
        Axis::Horizontal => (cols, rows),
        Axis::Vertical => (rows, cols),
    };

    let fixed = seg.fixed_coordinate.round();
    if fixed < 0.0 || fixed >= f64::from(cross_dim) {
        return Err(NinePatchError::invalid_dimensions(format!(
            "guide {:?} at {fixed} lies outside a {cols}x{rows} raster",
            seg.axis
        )));
    }
    let fixed = fixed as u32;

    let a = seg.start.round() + f64::from(offset);
    let b = seg.end().round() + f64::from(offset);
    let lo = a.min(b).max(1.0);
    let hi = a.max(b).min(f64::from(along_dim.saturating_sub(1)));
    if lo >= hi {
        return Ok(Vec::new());
    }

    let (lo, hi) = (lo as u32, hi as u32);
    Ok((lo..hi)
        .map(|p| match seg.axis {
            Axis::Horizontal => (p, fixed),
            Axis::Vertical => (fixed, p),
        })
        .collect())
}

fn open_rgba8(path: &Path) -> NinePatchResult<RgbaImage> {
    let img = image::ImageReader::open(path)
        .with_context(|| format!("open raster '{}'", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff raster format '{}'", path.display()))?
        .decode()
        .map_err(|e| NinePatchError::raster(format!("decode '{}': {e}", path.display())))?;
    Ok(img.to_rgba8())
}

fn save_png(img: &RgbaImage, path: &Path) -> NinePatchResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/editor.rs"]
mod tests;
