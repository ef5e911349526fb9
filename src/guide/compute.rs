use crate::document::scaled::ScaledDocument;
use crate::foundation::core::GuideSegment;
use crate::foundation::error::{NinePatchError, NinePatchResult};

/// The four border guides of a nine-patch.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideSet {
    /// Row 0: stretchable columns (`stretch-x`).
    pub top: GuideSegment,
    /// Column 0: stretchable rows (`stretch-y`).
    pub left: GuideSegment,
    /// Last row: horizontal content padding (`padding-x`).
    pub bottom: GuideSegment,
    /// Last column: vertical content padding (`padding-y`).
    pub right: GuideSegment,
}

impl GuideSet {
    /// Segments in drawing order: top, left, bottom, right.
    pub fn segments(&self) -> [GuideSegment; 4] {
        [self.top, self.left, self.bottom, self.right]
    }
}

/// Compute the guides for a raster of `raster_cols`×`raster_rows` (border included).
///
/// `start`/`length` stay in scaled canvas space; only the fixed row/column of the bottom and
/// right guides depends on the raster size.
pub fn compute_guides(
    scaled: &ScaledDocument,
    raster_cols: u32,
    raster_rows: u32,
) -> NinePatchResult<GuideSet> {
    if raster_cols == 0 || raster_rows == 0 {
        return Err(NinePatchError::invalid_dimensions(format!(
            "raster must be non-empty, got {raster_cols}x{raster_rows}"
        )));
    }

    let stretch_x = scaled.stretch_x()?;
    let stretch_y = scaled.stretch_y()?;
    let padding_x = scaled.padding_x()?;
    let padding_y = scaled.padding_y()?;

    let last_row = f64::from(raster_rows - 1);
    let last_col = f64::from(raster_cols - 1);

    Ok(GuideSet {
        top: GuideSegment::horizontal(0.0, stretch_x.x, stretch_x.width),
        left: GuideSegment::vertical(0.0, stretch_y.y, stretch_y.height),
        bottom: GuideSegment::horizontal(last_row, padding_x.x, padding_x.width),
        right: GuideSegment::vertical(last_col, padding_y.y, padding_y.height),
    })
}

/// Compute the guides for the bordered raster, `(width + 2)`×`(height + 2)`.
pub fn guides_for(scaled: &ScaledDocument) -> NinePatchResult<GuideSet> {
    let (cols, rows) = bordered_size(scaled.width(), scaled.height(), 1);
    compute_guides(scaled, cols, rows)
}

/// Size of a `width`×`height` raster after adding `border` pixels on every side.
pub fn bordered_size(width: u32, height: u32, border: u32) -> (u32, u32) {
    let grow = border.saturating_mul(2);
    (width.saturating_add(grow), height.saturating_add(grow))
}

#[cfg(test)]
#[path = "../../tests/unit/guide/compute.rs"]
mod tests;
