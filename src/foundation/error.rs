/// Convenience result type used across the crate.
pub type NinePatchResult<T> = Result<T, NinePatchError>;

/// Top-level error taxonomy used by document, guide and raster APIs.
#[derive(thiserror::Error, Debug)]
pub enum NinePatchError {
    /// The input SVG could not be read or is not well-formed XML.
    #[error("document read error: {0}")]
    DocumentRead(String),

    /// A required root attribute (`width`/`height`) is absent or non-numeric.
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    /// A required annotation path is absent (or ambiguous).
    #[error("missing annotation: {0}")]
    MissingAnnotation(String),

    /// An annotation path exists but its path data is not a two-point path.
    #[error("malformed annotation '{name}': {data:?}")]
    MalformedAnnotation {
        /// Identifier of the offending `<path>`.
        name: String,
        /// The raw `d` attribute text.
        data: String,
    },

    /// Canvas, target or raster dimensions that cannot be scaled or drawn into.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Failures reported by a rasterizer or raster editor.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NinePatchError {
    /// Build a [`NinePatchError::DocumentRead`] value.
    pub fn document_read(msg: impl Into<String>) -> Self {
        Self::DocumentRead(msg.into())
    }

    /// Build a [`NinePatchError::MissingAttribute`] value.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::MissingAttribute(name.into())
    }

    /// Build a [`NinePatchError::MissingAnnotation`] value.
    pub fn missing_annotation(name: impl Into<String>) -> Self {
        Self::MissingAnnotation(name.into())
    }

    /// Build a [`NinePatchError::MalformedAnnotation`] value.
    pub fn malformed_annotation(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self::MalformedAnnotation {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Build a [`NinePatchError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`NinePatchError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
