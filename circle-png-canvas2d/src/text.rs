//! Text measurement and alignment helpers.

use crate::font::FontSpec;
use crate::style::{TextAlign, TextBaseline};
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping, Weight};

/// Text metrics returned by `measure_text()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
    /// Distance from the alphabetic baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from the alphabetic baseline to the bottom of the line box.
    pub descent: f32,
}

/// Pick the family to shape with: the requested one when it is installed,
/// otherwise the spec's generic fallback.
pub(crate) fn resolve_family<'a>(font_system: &FontSystem, font: &'a FontSpec) -> Family<'a> {
    let installed = font_system
        .db()
        .faces()
        .any(|face| face.families.iter().any(|(name, _)| name == &font.family));
    if installed {
        Family::Name(&font.family)
    } else {
        log::debug!(target: "canvas", "font family {:?} not installed, using {:?}", font.family, font.fallback);
        font.fallback.to_family()
    }
}

/// Shape `text` with `font` into a single-line buffer.
pub(crate) fn shape_line(font_system: &mut FontSystem, text: &str, font: &FontSpec) -> Buffer {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let family = resolve_family(font_system, font);
    // Hinting off, so glyph outlines match their unhinted vector form
    let attrs = Attrs::new()
        .family(family)
        .weight(Weight(font.weight))
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Measure a shaped line. Falls back to 0.8/0.2 em when no run was laid out.
pub(crate) fn measure_buffer(buffer: &Buffer, font: &FontSpec) -> TextMetrics {
    let mut width: f32 = 0.0;
    let mut ascent: f32 = 0.0;
    let mut descent: f32 = 0.0;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        ascent = ascent.max(run.line_y - run.line_top);
        descent = descent.max((run.line_top + run.line_height) - run.line_y);
    }
    if ascent == 0.0 && descent == 0.0 {
        ascent = font.size_px * 0.8;
        descent = font.size_px * 0.2;
    }
    TextMetrics {
        width,
        ascent,
        descent,
    }
}

/// Calculate X offset for text alignment.
pub fn calculate_text_x_offset(width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Right => -width,
        TextAlign::Center => -width / 2.0,
    }
}

/// Calculate Y offset from the anchor to the alphabetic baseline.
pub fn calculate_text_y_offset(ascent: f32, descent: f32, baseline: TextBaseline) -> f32 {
    match baseline {
        TextBaseline::Top => ascent,
        TextBaseline::Middle => (ascent - descent) / 2.0,
        TextBaseline::Alphabetic => 0.0,
        TextBaseline::Bottom => -descent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_offset() {
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Left), 0.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Center), -50.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Right), -100.0);
    }

    #[test]
    fn test_middle_baseline_centers_line_box() {
        // Baseline sits half the ascent/descent difference below the anchor
        let offset = calculate_text_y_offset(24.0, 8.0, TextBaseline::Middle);
        assert_eq!(offset, 8.0);
        let top = -24.0 + offset;
        let bottom = 8.0 + offset;
        assert_eq!(top, -bottom);
    }

    #[test]
    fn test_other_baselines() {
        assert_eq!(calculate_text_y_offset(24.0, 8.0, TextBaseline::Top), 24.0);
        assert_eq!(calculate_text_y_offset(24.0, 8.0, TextBaseline::Alphabetic), 0.0);
        assert_eq!(calculate_text_y_offset(24.0, 8.0, TextBaseline::Bottom), -8.0);
    }
}
