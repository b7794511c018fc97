//! Paint a [`StyleModel`] onto a fresh canvas.
//!
//! Each render allocates a transparent square canvas sized by
//! [`canvas_side`], then paints three steps in order: fill (the only step
//! that carries opacity and shadow), border, then text. The compositing for
//! each step is built explicitly and never shared with the next.

use crate::error::CircleResult;
use crate::layout::{
    canvas_side, curved_glyph_placements, curved_text_radius, straight_text_anchor,
    CircleGeometry, Point,
};
use crate::model::{FillMode, GradientKind, StyleModel, TextPosition};
use circle_png_canvas2d::{
    circle_path, parse_color, Canvas2dContext, CanvasGradient, Compositing, FillStyle,
    FontConfig, FontSpec, ResolvedFontConfig, Shadow, TextAlign,
    TextBaseline,
};

/// Renders style models. Holds the resolved font database so repeated
/// renders do not rescan fonts.
#[derive(Debug, Clone)]
pub struct CircleRenderer {
    fonts: ResolvedFontConfig,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleRenderer {
    /// Renderer using system fonts.
    pub fn new() -> Self {
        Self::with_font_config(&FontConfig::default())
    }

    pub fn with_font_config(config: &FontConfig) -> Self {
        let fonts = config.resolve();
        log::debug!("renderer fonts: {:?}", fonts);
        Self { fonts }
    }

    pub fn fonts(&self) -> &ResolvedFontConfig {
        &self.fonts
    }

    /// Validate `model` and paint it.
    pub fn render(&self, model: &StyleModel) -> CircleResult<RenderedCircle> {
        model.validate()?;

        let side = canvas_side(model);
        let geometry = CircleGeometry::for_model(model);
        log::info!(
            "rendering {}px circle on {}x{} canvas ({} fill)",
            model.diameter,
            side,
            side,
            model.fill.mode
        );

        let mut ctx = Canvas2dContext::with_resolved(side, side, &self.fonts)?;
        paint_fill(&mut ctx, model, &geometry)?;
        paint_border(&mut ctx, model, &geometry)?;
        paint_text(&mut ctx, model, &geometry)?;

        Ok(RenderedCircle {
            diameter: model.diameter,
            ctx,
        })
    }
}

/// The finished raster of one render.
pub struct RenderedCircle {
    diameter: u32,
    ctx: Canvas2dContext,
}

impl std::fmt::Debug for RenderedCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedCircle")
            .field("diameter", &self.diameter)
            .field("side", &self.side())
            .finish()
    }
}

impl RenderedCircle {
    /// Canvas side in pixels.
    pub fn side(&self) -> u32 {
        self.ctx.width()
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Non-premultiplied RGBA rows of the whole canvas.
    pub fn image_data(&self) -> Vec<u8> {
        self.ctx.get_image_data(0, 0, self.side(), self.side())
    }

    /// Non-premultiplied RGBA of one pixel; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.ctx.pixel(x, y)
    }

    pub fn canvas(&self) -> &Canvas2dContext {
        &self.ctx
    }

    /// Encode as PNG.
    pub fn to_png(&self) -> CircleResult<Vec<u8>> {
        Ok(self.ctx.to_png()?)
    }
}

fn fill_style(model: &StyleModel, geometry: &CircleGeometry) -> CircleResult<FillStyle> {
    let fill = &model.fill;
    if fill.mode == FillMode::Solid {
        return Ok(FillStyle::from_css(&fill.solid_color)?);
    }

    let Point { x: cx, y: cy } = geometry.center;
    let r = geometry.radius;
    let mut gradient = match fill.gradient.kind {
        GradientKind::Linear => {
            let theta = fill.gradient.angle_degrees.to_radians();
            let (dx, dy) = (r * theta.cos(), r * theta.sin());
            CanvasGradient::linear(cx - dx, cy - dy, cx + dx, cy + dy)
        }
        GradientKind::Radial => CanvasGradient::radial(cx, cy, r),
    };
    gradient.add_color_stop(0.0, parse_color(&fill.gradient.color_start)?)?;
    gradient.add_color_stop(1.0, parse_color(&fill.gradient.color_end)?)?;
    Ok(gradient.into())
}

/// Compositing for the fill: the model's opacity, plus the drop shadow when
/// it is blurred. Unblurred shadows are not drawn.
fn fill_compositing(model: &StyleModel) -> CircleResult<Compositing> {
    let compositing = Compositing::with_alpha(f32::from(model.fill.opacity_percent) / 100.0);
    let shadow = &model.shadow;
    if shadow.blur_px == 0 {
        return Ok(compositing);
    }
    Ok(compositing.with_shadow(Shadow {
        blur: shadow.blur_px as f32,
        offset_x: shadow.offset_x as f32,
        offset_y: shadow.offset_y as f32,
        color: parse_color(&shadow.color)?,
    }))
}

fn paint_fill(
    ctx: &mut Canvas2dContext,
    model: &StyleModel,
    geometry: &CircleGeometry,
) -> CircleResult<()> {
    let path = circle_path(geometry.center.x, geometry.center.y, geometry.radius)?;
    let style = fill_style(model, geometry)?;
    let compositing = fill_compositing(model)?;
    log::debug!("fill: {:?}", compositing);
    ctx.fill_path(&path, &style, &compositing);
    Ok(())
}

fn paint_border(
    ctx: &mut Canvas2dContext,
    model: &StyleModel,
    geometry: &CircleGeometry,
) -> CircleResult<()> {
    let border = &model.border;
    if border.width_px == 0 {
        return Ok(());
    }
    log::debug!("border: {}px {}", border.width_px, border.color);
    let path = circle_path(geometry.center.x, geometry.center.y, geometry.radius)?;
    let style = FillStyle::from_css(&border.color)?;
    ctx.stroke_path(&path, &style, border.width_px as f32, &Compositing::default());
    Ok(())
}

fn paint_text(
    ctx: &mut Canvas2dContext,
    model: &StyleModel,
    geometry: &CircleGeometry,
) -> CircleResult<()> {
    let text = &model.text;
    if !text.is_visible() {
        return Ok(());
    }

    let style = FillStyle::from_css(&text.color)?;
    let compositing = Compositing::default();
    ctx.set_font(FontSpec {
        family: text.font_family.name().to_string(),
        fallback: text.font_family.generic_fallback(),
        weight: text.weight.css_weight(),
        size_px: text.size_px as f32,
    });
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);

    if text.position == TextPosition::Curved {
        let center = Point::new(
            geometry.center.x + text.offset_x as f32,
            geometry.center.y,
        );
        let radius = curved_text_radius(geometry.radius, text.size_px as f32);
        let placements = curved_glyph_placements(&text.content, center, radius, text.letter_spacing_deg);
        log::debug!("curved text: {} glyphs at r={}", placements.len(), radius);

        let mut buf = [0u8; 4];
        for placement in placements {
            ctx.save();
            ctx.translate(placement.position.x, placement.position.y);
            ctx.rotate(placement.rotation_rad);
            ctx.fill_text(placement.ch.encode_utf8(&mut buf), 0.0, 0.0, &style, &compositing);
            ctx.restore();
        }
    } else {
        let anchor = straight_text_anchor(
            text.position,
            geometry.center,
            geometry.radius,
            text.offset_x as f32,
            text.offset_y as f32,
        );
        log::debug!("text {:?} at ({}, {})", text.content, anchor.x, anchor.y);
        ctx.fill_text(&text.content, anchor.x, anchor.y, &style, &compositing);
    }
    Ok(())
}
