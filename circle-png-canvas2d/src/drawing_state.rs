use crate::font::FontSpec;
use crate::style::{TextAlign, TextBaseline};
use tiny_skia::Transform;

/// What `save` pushes and `restore` pops: the transform and text settings.
/// Opacity and shadows are not part of it; they travel with each paint call
/// as a [`crate::Compositing`].
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    pub transform: Transform,
    pub font: FontSpec,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}
