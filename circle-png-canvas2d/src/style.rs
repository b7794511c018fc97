//! Paint sources and text placement settings.

use crate::error::{Canvas2dError, Canvas2dResult};
use crate::gradient::CanvasGradient;
use tiny_skia::Color;

/// Parse any CSS color (`#rgb`, `#rrggbbaa`, `rgba(..)`, named colors, ...).
pub fn parse_color(input: &str) -> Canvas2dResult<Color> {
    let invalid = |reason: String| Canvas2dError::InvalidColor {
        input: input.to_string(),
        reason,
    };
    let [r, g, b, a] = csscolorparser::parse(input)
        .map_err(|e| invalid(e.to_string()))?
        .to_array();
    Color::from_rgba(r, g, b, a).ok_or_else(|| invalid("component out of range".to_string()))
}

/// What a fill or stroke paints with.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(CanvasGradient),
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::Color(Color::BLACK)
    }
}

impl FillStyle {
    pub fn from_css(color: &str) -> Canvas2dResult<Self> {
        parse_color(color).map(FillStyle::Color)
    }
}

impl From<CanvasGradient> for FillStyle {
    fn from(gradient: CanvasGradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Horizontal placement of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// Vertical placement of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    /// Halfway between ascent and descent.
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}
