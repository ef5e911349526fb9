use std::path::{Path, PathBuf};

use crate::document::annotation::{Annotation, ParseMode, parse_annotation};
use crate::foundation::core::PathRegion;
use crate::foundation::error::{NinePatchError, NinePatchResult};

/// SVG element namespace; annotation paths must live in it.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug)]
struct AnnotatedPath {
    id: String,
    data: Option<String>,
}

/// A loaded source SVG: canvas size plus every `<path id=…>` and its path data.
///
/// The XML tree is not retained. Path data is collected once at load time and regions are
/// parsed from it on demand.
#[derive(Clone, Debug)]
pub struct VectorDocument {
    source_path: PathBuf,
    canvas_width: u32,
    canvas_height: u32,
    mode: ParseMode,
    paths: Vec<AnnotatedPath>,
}

impl VectorDocument {
    /// Load an SVG from disk with [`ParseMode::Strict`].
    pub fn load(path: impl AsRef<Path>) -> NinePatchResult<Self> {
        Self::load_with_mode(path, ParseMode::Strict)
    }

    /// Load an SVG from disk with an explicit annotation policy.
    pub fn load_with_mode(path: impl AsRef<Path>, mode: ParseMode) -> NinePatchResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            NinePatchError::document_read(format!("read svg '{}': {e}", path.display()))
        })?;
        Self::from_svg_str(path, &text, mode)
    }

    /// Parse SVG text. `source_path` is recorded but never read.
    #[tracing::instrument(skip(source_path, text), fields(len = text.len()))]
    pub fn from_svg_str(
        source_path: impl Into<PathBuf>,
        text: &str,
        mode: ParseMode,
    ) -> NinePatchResult<Self> {
        let source_path = source_path.into();
        let doc = roxmltree::Document::parse(text).map_err(|e| {
            NinePatchError::document_read(format!(
                "parse svg xml '{}': {e}",
                source_path.display()
            ))
        })?;

        let root = doc.root_element();
        let canvas_width = dimension_attr(root, "width")?;
        let canvas_height = dimension_attr(root, "height")?;

        let paths: Vec<AnnotatedPath> = doc
            .descendants()
            .filter(|n| {
                n.is_element()
                    && n.tag_name().name() == "path"
                    && n.tag_name().namespace() == Some(SVG_NS)
            })
            .filter_map(|n| {
                Some(AnnotatedPath {
                    id: n.attribute("id")?.to_string(),
                    data: n.attribute("d").map(str::to_string),
                })
            })
            .collect();

        tracing::debug!(
            canvas_width,
            canvas_height,
            paths = paths.len(),
            "loaded svg document"
        );

        Ok(Self {
            source_path,
            canvas_width,
            canvas_height,
            mode,
            paths,
        })
    }

    /// Path the document was loaded from.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Declared root `width`, truncated to an integer.
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    /// Declared root `height`, truncated to an integer.
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Annotation policy used by [`VectorDocument::region`].
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Region described by the unique `<path>` whose `id` is `name`.
    ///
    /// In strict mode zero or several matches fail with [`NinePatchError::MissingAnnotation`].
    /// In lenient mode a missing path yields an all-zero region and duplicates resolve to the
    /// first match in document order.
    pub fn region(&self, name: &str) -> NinePatchResult<PathRegion> {
        let mut matches = self.paths.iter().filter(|p| p.id == name);
        let first = matches.next();
        let extra = matches.count();

        match (first, extra, self.mode) {
            (Some(path), 0, _) | (Some(path), _, ParseMode::Lenient) => {
                if extra > 0 {
                    tracing::warn!(
                        annotation = name,
                        count = extra + 1,
                        "duplicate annotation, using first"
                    );
                }
                parse_annotation(name, path.data.as_deref().unwrap_or(""), self.mode)
            }
            (Some(_), _, ParseMode::Strict) => Err(NinePatchError::missing_annotation(format!(
                "{name} ({} matching paths, expected 1)",
                extra + 1
            ))),
            (None, _, ParseMode::Strict) => Err(NinePatchError::missing_annotation(name)),
            (None, _, ParseMode::Lenient) => {
                tracing::warn!(annotation = name, "missing annotation, using empty region");
                Ok(PathRegion::default())
            }
        }
    }

    /// Region for a required annotation.
    pub fn annotation(&self, which: Annotation) -> NinePatchResult<PathRegion> {
        self.region(which.id())
    }

    /// `padding-x` region.
    pub fn padding_x(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::PaddingX)
    }

    /// `padding-y` region.
    pub fn padding_y(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::PaddingY)
    }

    /// `stretch-x` region.
    pub fn stretch_x(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::StretchX)
    }

    /// `stretch-y` region.
    pub fn stretch_y(&self) -> NinePatchResult<PathRegion> {
        self.annotation(Annotation::StretchY)
    }
}

// Reads an optional sign and leading integer digits, so "864", "+864", "864.7" and "864px" all
// give 864. Zero, negative and out-of-range values are invalid dimensions.
fn dimension_attr(node: roxmltree::Node<'_, '_>, name: &str) -> NinePatchResult<u32> {
    let raw = node
        .attribute(name)
        .ok_or_else(|| NinePatchError::missing_attribute(format!("root element has no {name}")))?;

    let t = raw.trim_start();
    let (negative, unsigned) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return Err(NinePatchError::missing_attribute(format!(
            "root {name} is not an integer: {raw:?}"
        )));
    }

    match digits.parse::<u32>() {
        Ok(v) if v > 0 && !negative => Ok(v),
        _ => Err(NinePatchError::invalid_dimensions(format!(
            "root {name} must be a positive integer, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/vector.rs"]
mod tests;
