//! Canvas sizing and text placement. Pure geometry, no drawing.

use crate::model::{StyleModel, TextPosition};

/// Fixed margin added to every canvas so strokes and shadows never clip.
pub const SAFETY_MARGIN: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Side of the square canvas needed for `model`:
/// `diameter + 2·blur + 2·border + 2·max(|dx|, |dy|) + 100`.
pub fn canvas_side(model: &StyleModel) -> u32 {
    model.diameter
        + 2 * model.shadow.blur_px
        + 2 * model.border.width_px
        + 2 * model.shadow.max_offset()
        + SAFETY_MARGIN
}

/// Center and radius of the circle on a canvas of side `side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    pub center: Point,
    pub radius: f32,
}

impl CircleGeometry {
    pub fn new(side: u32, diameter: u32) -> Self {
        let half = side as f32 / 2.0;
        Self {
            center: Point::new(half, half),
            radius: diameter as f32 / 2.0,
        }
    }

    pub fn for_model(model: &StyleModel) -> Self {
        Self::new(canvas_side(model), model.diameter)
    }
}

/// Anchor for straight text. The text is drawn centered on this point both
/// horizontally and vertically.
///
/// `Curved` has no single anchor and is treated like `Center`.
pub fn straight_text_anchor(
    position: TextPosition,
    center: Point,
    radius: f32,
    offset_x: f32,
    offset_y: f32,
) -> Point {
    let y = match position {
        TextPosition::Top => center.y - radius / 2.0,
        TextPosition::Bottom => center.y + radius / 2.0,
        TextPosition::Center | TextPosition::Curved => center.y,
    };
    Point::new(center.x + offset_x, y + offset_y)
}

/// Distance of curved glyphs from the arc center.
pub fn curved_text_radius(radius: f32, size_px: f32) -> f32 {
    radius - size_px / 2.0
}

/// Where one character of curved text goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Angle of the glyph's position around the center, degrees clockwise
    /// from +x (screen coordinates, so -90 is 12 o'clock).
    pub angle_deg: f32,
    pub position: Point,
    /// Rotation to apply to the glyph so its up axis points outward.
    pub rotation_rad: f32,
}

/// Spread the characters of `text` evenly around a full circle starting at
/// 12 o'clock, each pushed a further `spacing_deg × index` degrees clockwise.
pub fn curved_glyph_placements(
    text: &str,
    center: Point,
    radius: f32,
    spacing_deg: f32,
) -> Vec<GlyphPlacement> {
    let n = text.chars().count();
    if n == 0 {
        return Vec::new();
    }
    let step = 360.0 / n as f32;

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let i = i as f32;
            let angle_deg = -90.0 + i * step + i * spacing_deg;
            let theta = angle_deg.to_radians();
            GlyphPlacement {
                ch,
                angle_deg,
                position: Point::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                ),
                rotation_rad: theta + std::f32::consts::FRAC_PI_2,
            }
        })
        .collect()
}
