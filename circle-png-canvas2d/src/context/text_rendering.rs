//! Text rendering operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::shadow::Compositing;
use crate::style::FillStyle;
use crate::text::{calculate_text_x_offset, calculate_text_y_offset, measure_buffer, shape_line, TextMetrics};
use cosmic_text::Command;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Measure text with the current font.
    pub fn measure_text(&mut self, text: &str) -> TextMetrics {
        let font = self.state.font.clone();
        let buffer = shape_line(&mut self.fonts, text, &font);
        measure_buffer(&buffer, &font)
    }

    /// Fill text anchored at (x, y) under the current transform, honoring
    /// the current text alignment and baseline.
    ///
    /// Glyphs are drawn as vector outlines. Returns the number of glyphs
    /// painted, which is zero when no font could supply outlines.
    pub fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &FillStyle,
        compositing: &Compositing,
    ) -> usize {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        if text.is_empty() {
            return 0;
        }
        if !self.has_fonts() {
            log::warn!(target: "canvas", "no fonts loaded, skipping text {:?}", text);
            return 0;
        }

        let font = self.state.font.clone();
        let buffer = shape_line(&mut self.fonts, text, &font);
        let metrics = measure_buffer(&buffer, &font);

        let base_x = x + calculate_text_x_offset(metrics.width, self.state.text_align);
        let base_y = y + calculate_text_y_offset(
            metrics.ascent,
            metrics.descent,
            self.state.text_baseline,
        );
        let transform = self.state.transform;

        // Collect outlines first; painting only needs the pixmap.
        let mut glyphs: Vec<(tiny_skia::Path, Transform)> = Vec::new();
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((base_x, base_y), 1.0);

                // Floating-point position for sub-pixel precision
                let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .outlines
                    .get_outline_commands(&mut self.fonts, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines have Y pointing up, screen has Y pointing down
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    let glyph_transform =
                        Transform::from_translate(glyph_x, glyph_y).post_concat(transform);
                    glyphs.push((path, glyph_transform));
                }
            }
        }

        if glyphs.is_empty() {
            log::debug!(target: "canvas", "fillText produced no outlines for {:?}", text);
            return 0;
        }

        let Some(paint) = self.paint_for_style(style, compositing.global_alpha) else {
            return 0;
        };
        self.composite(compositing, |target| {
            for (path, glyph_transform) in &glyphs {
                target.fill_path(
                    path,
                    &paint,
                    tiny_skia::FillRule::Winding,
                    *glyph_transform,
                    None,
                );
            }
        });
        glyphs.len()
    }
}
