//! Minimal Canvas 2D-style drawing surface using tiny-skia and cosmic-text.
//!
//! The surface keeps the familiar canvas vocabulary (paths, fill styles,
//! gradients, save/restore transforms, `fill_text`), but opacity and drop
//! shadows are not hidden context flags: every paint operation takes an
//! explicit [`Compositing`] value. It uses:
//! - `tiny-skia` for rasterization
//! - `cosmic-text` for text shaping and glyph outlines
//! - `fontdb` for font database management
//!
//! # Example
//!
//! ```rust,ignore
//! use circle_png_canvas2d::{circle_path, Canvas2dContext, Compositing, FillStyle};
//!
//! let mut ctx = Canvas2dContext::new(400, 400)?;
//! let path = circle_path(200.0, 200.0, 150.0)?;
//! let style = FillStyle::from_css("#ff6b6b")?;
//! ctx.fill_path(&path, &style, &Compositing::with_alpha(0.5));
//! let png_data = ctx.to_png()?;
//! ```

mod context;
mod drawing_state;
mod error;
mod font;
mod font_config;
mod gradient;
mod path;
mod shadow;
mod style;
mod text;

// Re-export public API
pub use context::Canvas2dContext;
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use font::{FontSpec, GenericFamily};
pub use font_config::{
    font_config_to_fontdb, CustomFont, FontConfig, GenericFamilyMap, ResolvedFontConfig,
};
pub use gradient::{CanvasGradient, GradientGeometry};
pub use path::circle_path;
pub use shadow::{Compositing, Shadow};
pub use style::{parse_color, FillStyle, TextAlign, TextBaseline};
pub use text::TextMetrics;
