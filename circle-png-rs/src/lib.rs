//! Render styled circles to transparent PNG images.
//!
//! A [`StyleModel`] describes one circle: diameter, solid or gradient fill,
//! opacity, border, drop shadow and optional straight or curved text.
//! [`CircleRenderer::render`] turns it into a raster, and [`export_png`]
//! serializes that raster together with a unique download filename.
//!
//! ```rust,ignore
//! use circle_png_rs::{export_png, find_preset, CircleRenderer, StyleModel};
//!
//! let model = StyleModel::default().with_preset(find_preset("green-ring").unwrap());
//! let rendered = CircleRenderer::new().render(&model)?;
//! let png = export_png(&rendered)?;
//! png.save_to(std::path::Path::new("."))?;
//! ```

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod presets;
pub mod render;

pub use error::{CircleError, CircleResult, ModelError};
pub use export::{export_png, export_png_at, suggested_filename, ExportedPng};
pub use layout::{canvas_side, curved_glyph_placements, GlyphPlacement, Point};
pub use model::{
    BorderSettings, FillMode, FillSettings, FontFamily, FontWeight, GradientKind,
    GradientSettings, ShadowSettings, StyleModel, TextPosition, TextSettings,
};
pub use presets::{apply_preset, apply_swatch, find_preset, find_swatch, Preset, Swatch, PRESETS, SWATCHES};
pub use render::{CircleRenderer, RenderedCircle};

// Font configuration is part of the renderer's public surface
pub use circle_png_canvas2d::{CustomFont, FontConfig};
