use thiserror::Error;

pub type Canvas2dResult<T> = Result<T, Canvas2dError>;

/// Failures of the drawing surface.
#[derive(Debug, Error)]
pub enum Canvas2dError {
    /// A surface must be between 1 and 32767 pixels on each side.
    #[error("Cannot create a {width}x{height} surface")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid CSS color {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Gradient stop offset {0} is outside [0, 1]")]
    GradientStopOutOfRange(f64),

    /// The path has no area or non-finite coordinates.
    #[error("Degenerate path: {0}")]
    DegeneratePath(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
