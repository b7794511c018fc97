//! Fill, stroke and paint helper operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::gradient::{CanvasGradient, GradientGeometry};
use crate::shadow::{render_shadow, Compositing};
use crate::style::FillStyle;
use tiny_skia::{
    Color, GradientStop, LinearGradient, Pixmap, Point, RadialGradient, Shader, SpreadMode, Transform,
};

impl Canvas2dContext {
    /// Fill `path` (in user space) with `style`.
    pub fn fill_path(&mut self, path: &tiny_skia::Path, style: &FillStyle, compositing: &Compositing) {
        log::debug!(target: "canvas", "fill alpha={} shadow={:?}", compositing.global_alpha, compositing.visible_shadow());
        let Some(paint) = self.paint_for_style(style, compositing.global_alpha) else {
            return;
        };
        let transform = self.state.transform;
        self.composite(compositing, |target| {
            target.fill_path(path, &paint, tiny_skia::FillRule::Winding, transform, None);
        });
    }

    /// Stroke `path` (in user space) with `style` at `line_width`.
    ///
    /// Non-finite or non-positive widths draw nothing.
    pub fn stroke_path(
        &mut self,
        path: &tiny_skia::Path,
        style: &FillStyle,
        line_width: f32,
        compositing: &Compositing,
    ) {
        log::debug!(target: "canvas", "stroke width={}", line_width);
        if !line_width.is_finite() || line_width <= 0.0 {
            return;
        }
        let Some(paint) = self.paint_for_style(style, compositing.global_alpha) else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: line_width,
            ..Default::default()
        };
        let transform = self.state.transform;
        self.composite(compositing, |target| {
            target.stroke_path(path, &paint, &stroke, transform, None);
        });
    }

    // --- Private paint helpers ---

    /// Run `draw` against the canvas, routing through an offscreen layer when
    /// a visible shadow has to be placed underneath it.
    pub(crate) fn composite(&mut self, compositing: &Compositing, draw: impl Fn(&mut Pixmap)) {
        let Some(shadow) = compositing.visible_shadow() else {
            draw(&mut self.pixmap);
            return;
        };

        let Some(mut layer) = Pixmap::new(self.width(), self.height()) else {
            return;
        };
        draw(&mut layer);

        let paint = tiny_skia::PixmapPaint::default();
        if let Some(shadow_layer) = render_shadow(&layer, &shadow) {
            self.pixmap.draw_pixmap(
                0,
                0,
                shadow_layer.as_ref(),
                &paint,
                Transform::from_translate(shadow.offset_x, shadow.offset_y),
                None,
            );
        }
        self.pixmap
            .draw_pixmap(0, 0, layer.as_ref(), &paint, Transform::identity(), None);
    }

    pub(crate) fn paint_for_style(
        &self,
        style: &FillStyle,
        global_alpha: f32,
    ) -> Option<tiny_skia::Paint<'static>> {
        let shader = match style {
            FillStyle::Color(color) => Shader::SolidColor(fade(*color, global_alpha)),
            FillStyle::Gradient(gradient) => gradient_shader(gradient, global_alpha)?,
        };
        Some(tiny_skia::Paint {
            shader,
            anti_alias: true,
            ..Default::default()
        })
    }
}

fn fade(mut color: Color, global_alpha: f32) -> Color {
    if global_alpha < 1.0 {
        color.set_alpha((color.alpha() * global_alpha).clamp(0.0, 1.0));
    }
    color
}

/// Gradient coordinates are in user space; the paint call applies the
/// current transform to shader and path together.
fn gradient_shader(gradient: &CanvasGradient, global_alpha: f32) -> Option<Shader<'static>> {
    let stops: Vec<GradientStop> = gradient
        .stops()
        .iter()
        .map(|&(offset, color)| GradientStop::new(offset, fade(color, global_alpha)))
        .collect();
    if stops.is_empty() {
        return None;
    }

    match gradient.geometry {
        GradientGeometry::Linear { from, to } => LinearGradient::new(
            Point::from_xy(from.0, from.1),
            Point::from_xy(to.0, to.1),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ),
        GradientGeometry::Radial { center, radius } => {
            let center = Point::from_xy(center.0, center.1);
            RadialGradient::new(center, center, radius, stops, SpreadMode::Pad, Transform::identity())
        }
    }
}
