//! Explicit compositing parameters and drop-shadow rasterization.
//!
//! A canvas keeps `globalAlpha` and `shadow*` as context-wide flags that must be
//! reset between operations. Here they travel with each paint call instead.
//! Shadows follow the canvas model: the painted layer's alpha is blurred with
//! a Gaussian of σ = blur / 2, tinted with the shadow color and drawn at the
//! offset beneath the layer.

use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

/// Drop shadow applied to a single paint operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Blur amount in pixels (canvas `shadowBlur`).
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub color: Color,
}

impl Shadow {
    /// A shadow draws only when its color is not fully transparent and it is
    /// either blurred or offset.
    pub fn is_visible(&self) -> bool {
        self.color.alpha() > 0.0 && (self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0)
    }

    /// Gaussian standard deviation used for the blur.
    pub fn sigma(&self) -> f32 {
        self.blur.max(0.0) / 2.0
    }
}

/// Per-operation compositing: global alpha and an optional drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compositing {
    /// Opacity multiplier in `[0, 1]`.
    pub global_alpha: f32,
    pub shadow: Option<Shadow>,
}

impl Default for Compositing {
    fn default() -> Self {
        Self {
            global_alpha: 1.0,
            shadow: None,
        }
    }
}

impl Compositing {
    /// Opaque, unshadowed painting.
    pub fn opaque() -> Self {
        Self::default()
    }

    /// Painting at the given opacity, clamped to `[0, 1]`.
    pub fn with_alpha(alpha: f32) -> Self {
        Self {
            global_alpha: if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 },
            shadow: None,
        }
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// The shadow, if it would produce any pixels.
    pub fn visible_shadow(&self) -> Option<Shadow> {
        self.shadow.filter(Shadow::is_visible)
    }
}

/// Build the tinted, blurred shadow image for `layer`. The result is the same
/// size as `layer` and still has to be drawn at the shadow offset.
pub(crate) fn render_shadow(layer: &Pixmap, shadow: &Shadow) -> Option<Pixmap> {
    let width = layer.width() as usize;
    let height = layer.height() as usize;

    let mut mask: Vec<u8> = layer.pixels().iter().map(|p| p.alpha()).collect();
    gaussian_blur(&mut mask, width, height, shadow.sigma());

    let tint = shadow.color.to_color_u8();
    let mut out = Pixmap::new(layer.width(), layer.height())?;
    for (dst, &coverage) in out.pixels_mut().iter_mut().zip(mask.iter()) {
        if coverage == 0 {
            continue;
        }
        let alpha = mul_div_255(tint.alpha(), coverage);
        *dst = PremultipliedColorU8::from_rgba(
            mul_div_255(tint.red(), alpha),
            mul_div_255(tint.green(), alpha),
            mul_div_255(tint.blue(), alpha),
            alpha,
        )
        .unwrap_or(PremultipliedColorU8::TRANSPARENT);
    }
    Some(out)
}

fn mul_div_255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

/// Box size approximating a Gaussian with three successive box blurs.
pub(crate) fn box_size(sigma: f32) -> usize {
    if sigma <= 0.0 {
        return 0;
    }
    let d = sigma * 3.0 * (2.0 * std::f32::consts::PI).sqrt() / 4.0 + 0.5;
    d.floor() as usize
}

/// Three-pass box approximation of a Gaussian blur over an 8-bit mask, run
/// horizontally then vertically.
pub(crate) fn gaussian_blur(mask: &mut [u8], width: usize, height: usize, sigma: f32) {
    let d = box_size(sigma);
    if d <= 1 || width == 0 || height == 0 {
        return;
    }

    // Odd sizes use three centered boxes; even sizes shift the first two boxes
    // half a pixel in opposite directions and widen the third by one.
    let passes: [(usize, usize); 3] = if d % 2 == 1 {
        [(d / 2, d / 2); 3]
    } else {
        [(d / 2, d / 2 - 1), (d / 2 - 1, d / 2), (d / 2, d / 2)]
    };

    let mut scratch = vec![0u8; mask.len()];
    for &(left, right) in &passes {
        box_blur_rows(mask, &mut scratch, width, height, left, right);
        mask.copy_from_slice(&scratch);
    }
    for &(left, right) in &passes {
        box_blur_columns(mask, &mut scratch, width, height, left, right);
        mask.copy_from_slice(&scratch);
    }
}

fn box_blur_rows(src: &[u8], dst: &mut [u8], width: usize, height: usize, left: usize, right: usize) {
    let window = (left + right + 1) as u32;
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];
        blur_line(row.iter().copied(), out.iter_mut(), width, left, right, window);
    }
}

fn box_blur_columns(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    left: usize,
    right: usize,
) {
    let window = (left + right + 1) as u32;
    let mut column = vec![0u8; height];
    let mut blurred = vec![0u8; height];
    for x in 0..width {
        for (y, value) in column.iter_mut().enumerate() {
            *value = src[y * width + x];
        }
        blur_line(column.iter().copied(), blurred.iter_mut(), height, left, right, window);
        for (y, value) in blurred.iter().enumerate() {
            dst[y * width + x] = *value;
        }
    }
}

/// Sliding-window box filter over one line; samples outside the line count as zero.
fn blur_line<'a>(
    input: impl Iterator<Item = u8>,
    output: impl Iterator<Item = &'a mut u8>,
    len: usize,
    left: usize,
    right: usize,
    window: u32,
) {
    let line: Vec<u8> = input.collect();
    let mut sum: u32 = line.iter().take(right.min(len.saturating_sub(1)) + 1).map(|&v| v as u32).sum();
    for (i, out) in output.enumerate() {
        *out = ((sum + window / 2) / window) as u8;
        let entering = i + right + 1;
        if entering < len {
            sum += line[entering] as u32;
        }
        if i >= left {
            sum -= line[i - left] as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(mask: &[u8]) -> u32 {
        mask.iter().map(|&v| v as u32).sum()
    }

    #[test]
    fn test_visibility() {
        let color = Color::from_rgba8(0, 0, 0, 128);
        let blurred = Shadow { blur: 4.0, offset_x: 0.0, offset_y: 0.0, color };
        assert!(blurred.is_visible());

        let offset_only = Shadow { blur: 0.0, offset_x: 3.0, offset_y: 0.0, color };
        assert!(offset_only.is_visible());

        let inert = Shadow { blur: 0.0, offset_x: 0.0, offset_y: 0.0, color };
        assert!(!inert.is_visible());

        let transparent = Shadow { color: Color::TRANSPARENT, ..blurred };
        assert!(!transparent.is_visible());
        assert_eq!(Compositing::opaque().with_shadow(transparent).visible_shadow(), None);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Compositing::with_alpha(1.5).global_alpha, 1.0);
        assert_eq!(Compositing::with_alpha(-0.2).global_alpha, 0.0);
        assert_eq!(Compositing::with_alpha(f32::NAN).global_alpha, 1.0);
    }

    #[test]
    fn test_box_size() {
        assert_eq!(box_size(0.0), 0);
        // blur 10 -> sigma 5 -> floor(5 * 1.88 + 0.5) = 9
        assert_eq!(box_size(5.0), 9);
        assert_eq!(box_size(2.0), 4);
    }

    #[test]
    fn test_blur_spreads_and_keeps_mass() {
        let (w, h) = (41, 41);
        let mut mask = vec![0u8; w * h];
        for y in 15..26 {
            for x in 15..26 {
                mask[y * w + x] = 255;
            }
        }
        let before = total(&mask);
        gaussian_blur(&mut mask, w, h, 3.0);

        // Energy leaks outside the square, and the edge is softened
        assert!(mask[20 * w + 10] > 0);
        assert!(mask[20 * w + 15] < 255);
        assert!(mask[20 * w + 20] > 180);
        // Nothing reaches the border for a blur this small
        assert_eq!(mask[0], 0);
        // Box filtering preserves total coverage up to rounding
        let after = total(&mask);
        let drift = (after as i64 - before as i64).abs();
        assert!(drift < (before / 10) as i64, "before={before} after={after}");
    }

    #[test]
    fn test_tiny_sigma_is_noop() {
        let mut mask = vec![0, 0, 255, 0, 0];
        gaussian_blur(&mut mask, 5, 1, 0.25);
        assert_eq!(mask, vec![0, 0, 255, 0, 0]);
    }
}
