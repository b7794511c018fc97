//! Error types for circle-png-rs.

use circle_png_canvas2d::Canvas2dError;
use thiserror::Error;

/// Result type alias using CircleError.
pub type CircleResult<T> = Result<T, CircleError>;

/// Problems with a [`crate::StyleModel`] or with names supplied for its fields.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// A bounded numeric field is outside its allowed range.
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A name did not match any variant of an enumerated field.
    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    /// No preset with this name.
    #[error("Unknown preset: {0:?}")]
    UnknownPreset(String),

    /// No color swatch with this name.
    #[error("Unknown swatch: {0:?}")]
    UnknownSwatch(String),
}

/// Errors that can occur while rendering or exporting a circle.
#[derive(Debug, Error)]
pub enum CircleError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The drawing surface could not be created or painted, including
    /// colors it could not parse and PNG encoding failures.
    #[error("Canvas error: {0}")]
    Canvas(#[from] Canvas2dError),

    /// Writing the exported file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
