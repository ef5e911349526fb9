/// Axis-aligned rectangle in the coordinate space of its source canvas.
///
/// Annotation paths are two-point lines, so in practice one of `width`/`height` is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathRegion {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl PathRegion {
    /// Create a region from its four fields.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return a copy with `x`/`width` multiplied by `sx` and `y`/`height` by `sy`.
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self {
            x: self.x * sx,
            y: self.y * sy,
            width: self.width * sx,
            height: self.height * sy,
        }
    }
}

/// Direction a guide segment runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Runs along a row (`fixed_coordinate` is the row).
    Horizontal,
    /// Runs along a column (`fixed_coordinate` is the column).
    Vertical,
}

/// A 1-pixel guide line drawn into the nine-patch border.
///
/// `fixed_coordinate` is expressed in bordered raster space (row 0 / last row, column 0 / last
/// column). `start`/`length` are expressed in scaled canvas space; the editor applies the
/// border offset when it rasterizes the segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideSegment {
    /// Direction of the line.
    pub axis: Axis,
    /// Row (horizontal) or column (vertical) the line is drawn on.
    pub fixed_coordinate: f64,
    /// First coordinate along `axis`.
    pub start: f64,
    /// Extent along `axis`.
    pub length: f64,
}

impl GuideSegment {
    /// Build a horizontal segment on `row`.
    pub fn horizontal(row: f64, start: f64, length: f64) -> Self {
        Self {
            axis: Axis::Horizontal,
            fixed_coordinate: row,
            start,
            length,
        }
    }

    /// Build a vertical segment on `column`.
    pub fn vertical(column: f64, start: f64, length: f64) -> Self {
        Self {
            axis: Axis::Vertical,
            fixed_coordinate: column,
            start,
            length,
        }
    }

    /// End coordinate along `axis` (`start + length`).
    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
