//! The drawing surface: a premultiplied RGBA pixmap, a shaping font system
//! and a stack of saved [`DrawingState`]s.

mod drawing;
mod image_ops;
mod text_rendering;
mod transform;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::font::FontSpec;
use crate::font_config::{FontConfig, ResolvedFontConfig};
use crate::style::{TextAlign, TextBaseline};
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::Pixmap;

/// Largest side a surface may have.
const MAX_SIDE: u32 = 32767;

pub struct Canvas2dContext {
    pub(crate) pixmap: Pixmap,
    pub(crate) fonts: FontSystem,
    pub(crate) outlines: SwashCache,
    pub(crate) state: DrawingState,
    saved: Vec<DrawingState>,
}

impl Canvas2dContext {
    /// Transparent surface using system fonts.
    ///
    /// Scans the system font directories on every call; use
    /// [`Canvas2dContext::with_resolved`] to share one scan.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        Self::with_resolved(width, height, &FontConfig::default().resolve())
    }

    /// Transparent surface drawing text from an already resolved font set.
    pub fn with_resolved(
        width: u32,
        height: u32,
        fonts: &ResolvedFontConfig,
    ) -> Canvas2dResult<Self> {
        let in_range = |side: u32| (1..=MAX_SIDE).contains(&side);
        let pixmap = Some((width, height))
            .filter(|&(w, h)| in_range(w) && in_range(h))
            .and_then(|(w, h)| Pixmap::new(w, h))
            .ok_or(Canvas2dError::InvalidDimensions { width, height })?;

        log::debug!(target: "canvas", "surface {}x{} with {} faces", width, height, fonts.face_count());
        Ok(Self {
            pixmap,
            fonts: FontSystem::new_with_locale_and_db("en".to_string(), fonts.db.clone()),
            outlines: SwashCache::new(),
            state: DrawingState::default(),
            saved: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Whether `fill_text` has any face to draw with.
    pub fn has_fonts(&self) -> bool {
        !self.fonts.db().is_empty()
    }

    /// Push the transform and text settings.
    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    /// Pop the last saved state. Does nothing when none is saved.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    /// Clear to transparent and forget all state.
    pub fn reset(&mut self) {
        log::debug!(target: "canvas", "reset");
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        self.state = DrawingState::default();
        self.saved.clear();
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    pub fn font(&self) -> &FontSpec {
        &self.state.font
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_fonts() -> ResolvedFontConfig {
        FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        }
        .resolve()
    }

    #[test]
    fn test_fresh_surface_is_transparent() {
        let ctx = Canvas2dContext::with_resolved(200, 150, &no_fonts()).unwrap();
        assert_eq!((ctx.width(), ctx.height()), (200, 150));
        assert_eq!(ctx.state.text_align, TextAlign::Left);
        assert_eq!(ctx.state.text_baseline, TextBaseline::Alphabetic);
        assert!(!ctx.has_fonts());
        assert!(ctx.pixmap.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rejects_bad_sides() {
        let fonts = no_fonts();
        for (w, h) in [(0, 100), (100, 0), (MAX_SIDE + 1, 10)] {
            assert!(matches!(
                Canvas2dContext::with_resolved(w, h, &fonts),
                Err(Canvas2dError::InvalidDimensions { width, height }) if width == w && height == h
            ));
        }
    }

    #[test]
    fn test_restore_brings_back_text_state() {
        let mut ctx = Canvas2dContext::with_resolved(10, 10, &no_fonts()).unwrap();
        ctx.set_text_align(TextAlign::Center);
        ctx.save();
        ctx.set_text_align(TextAlign::Right);
        ctx.set_font(FontSpec {
            size_px: 40.0,
            ..FontSpec::default()
        });
        ctx.restore();
        assert_eq!(ctx.state.text_align, TextAlign::Center);
        assert_eq!(ctx.font().size_px, 10.0);

        // unbalanced restore
        ctx.restore();
        assert_eq!(ctx.state.text_align, TextAlign::Center);
    }

    #[test]
    fn test_reset() {
        let mut ctx = Canvas2dContext::with_resolved(20, 20, &no_fonts()).unwrap();
        ctx.pixmap.fill(tiny_skia::Color::WHITE);
        ctx.translate(5.0, 5.0);
        ctx.save();
        ctx.reset();
        assert!(ctx.pixmap.data().iter().all(|&b| b == 0));
        assert_eq!(ctx.get_transform(), tiny_skia::Transform::identity());
        assert!(ctx.saved.is_empty());
    }
}
