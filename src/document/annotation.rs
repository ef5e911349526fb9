use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::core::PathRegion;
use crate::foundation::error::{NinePatchError, NinePatchResult};

/// The four guide paths a nine-patch source SVG must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// Content padding along x (bottom guide).
    PaddingX,
    /// Content padding along y (right guide).
    PaddingY,
    /// Stretchable columns (top guide).
    StretchX,
    /// Stretchable rows (left guide).
    StretchY,
}

impl Annotation {
    /// All required annotations, in a stable order.
    pub const ALL: [Annotation; 4] = [
        Annotation::PaddingX,
        Annotation::PaddingY,
        Annotation::StretchX,
        Annotation::StretchY,
    ];

    /// The `id` attribute of the `<path>` carrying this annotation.
    pub fn id(self) -> &'static str {
        match self {
            Annotation::PaddingX => "padding-x",
            Annotation::PaddingY => "padding-y",
            Annotation::StretchX => "stretch-x",
            Annotation::StretchY => "stretch-y",
        }
    }
}

/// Policy for missing or malformed annotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Fail with a named error.
    #[default]
    Strict,
    /// Degrade to an all-zero region and log a warning.
    Lenient,
}

fn path_data_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Only the integer text of each number is captured: fractions are discarded, signs dropped.
    RE.get_or_init(|| {
        Regex::new(
            r"[mM]\s+-?(\d+)(?:\.\d+)?,-?(\d+)(?:\.\d+)?\s+-?(\d+)(?:\.\d+)?,-?(\d+)(?:\.\d+)?",
        )
        .expect("path data regex must compile")
    })
}

/// Parse two-point path data (`m x0,y0 dx,dy`) into a region.
///
/// Each number is truncated toward zero on its textual form (`188.9` reads as `188`), never
/// rounded. Returns `None` when `data` does not contain the two-point shape.
pub fn parse_path_data(data: &str) -> Option<PathRegion> {
    let caps = path_data_re().captures(data)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());

    Some(PathRegion {
        x: num(1)?,
        y: num(2)?,
        width: num(3)?,
        height: num(4)?,
    })
}

/// Parse the path data of annotation `name`, applying `mode` on mismatch.
pub fn parse_annotation(name: &str, data: &str, mode: ParseMode) -> NinePatchResult<PathRegion> {
    match (parse_path_data(data), mode) {
        (Some(region), _) => Ok(region),
        (None, ParseMode::Strict) => Err(NinePatchError::malformed_annotation(name, data)),
        (None, ParseMode::Lenient) => {
            tracing::warn!(annotation = name, data, "malformed path data, using empty region");
            Ok(PathRegion::default())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/annotation.rs"]
mod tests;
