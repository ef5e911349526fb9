use crate::document::annotation::Annotation;
use crate::document::vector::VectorDocument;
use crate::foundation::core::PathRegion;
use crate::foundation::error::{NinePatchError, NinePatchResult};

/// A [`VectorDocument`] viewed at a target raster size.
///
/// Regions are scaled from canvas units into target pixels with independent x/y ratios. The
/// ratios are kept unrounded; rounding only happens when a raster editor consumes the values.
#[derive(Clone, Debug)]
pub struct ScaledDocument {
    document: VectorDocument,
    width: u32,
    height: u32,
    scale_ratio_x: f64,
    scale_ratio_y: f64,
}

impl ScaledDocument {
    /// Wrap `document` for a `width`×`height` raster.
    pub fn new(document: VectorDocument, width: u32, height: u32) -> NinePatchResult<Self> {
        if document.canvas_width() == 0 || document.canvas_height() == 0 {
            return Err(NinePatchError::invalid_dimensions(format!(
                "svg canvas must be non-empty, got {}x{}",
                document.canvas_width(),
                document.canvas_height()
            )));
        }
        if width == 0 || height == 0 {
            return Err(NinePatchError::invalid_dimensions(format!(
                "target size must be non-empty, got {width}x{height}"
            )));
        }

        let scale_ratio_x = f64::from(width) / f64::from(document.canvas_width());
        let scale_ratio_y = f64::from(height) / f64::from(document.canvas_height());

        Ok(Self {
            document,
            width,
            height,
            scale_ratio_x,
            scale_ratio_y,
        })
    }

    /// The wrapped, unscaled document.
    pub fn document(&self) -> &VectorDocument {
        &self.document
    }

    /// Target raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width / canvas_width`.
    pub fn scale_ratio_x(&self) -> f64 {
        self.scale_ratio_x
    }

    /// `height / canvas_height`.
    pub fn scale_ratio_y(&self) -> f64 {
        self.scale_ratio_y
    }

    /// Region `name` of the wrapped document, scaled to target pixels.
    pub fn region(&self, name: &str) -> NinePatchResult<PathRegion> {
        Ok(self
            .document
            .region(name)?
            .scaled(self.scale_ratio_x, self.scale_ratio_y))
    }

    /// Scaled region for a required annotation.
    pub fn annotation(&self, which: Annotation) -> NinePatchResult<PathRegion> {
        self.region(which.id())
    }

    /// Scaled `padding-x` region.
    pub fn padding_x(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::PaddingX)
    }

    /// Scaled `padding-y` region.
    pub fn padding_y(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::PaddingY)
    }

    /// Scaled `stretch-x` region.
    pub fn stretch_x(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::StretchX)
    }

    /// Scaled `stretch-y` region.
    pub fn stretch_y(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::StretchY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/scaled.rs"]
mod tests;
