//! Two-stop-or-more gradients over user-space geometry.

use crate::error::{Canvas2dError, Canvas2dResult};
use tiny_skia::Color;

/// Where a gradient's color ramp runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    /// Offset 0 at `from`, offset 1 at `to`, constant perpendicular to the axis.
    Linear { from: (f32, f32), to: (f32, f32) },
    /// Offset 0 at `center`, offset 1 on the circle of `radius`.
    Radial { center: (f32, f32), radius: f32 },
}

/// Gradient paint: geometry plus color stops ordered by offset.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGradient {
    pub geometry: GradientGeometry,
    stops: Vec<(f32, Color)>,
}

impl CanvasGradient {
    pub fn linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            geometry: GradientGeometry::Linear {
                from: (x0, y0),
                to: (x1, y1),
            },
            stops: Vec::new(),
        }
    }

    pub fn radial(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            geometry: GradientGeometry::Radial {
                center: (cx, cy),
                radius,
            },
            stops: Vec::new(),
        }
    }

    /// Add a stop at `offset` in `[0, 1]`. Stops at equal offsets keep
    /// insertion order.
    pub fn add_color_stop(&mut self, offset: f32, color: Color) -> Canvas2dResult<()> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(Canvas2dError::GradientStopOutOfRange(offset as f64));
        }
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color));
        Ok(())
    }

    pub fn stops(&self) -> &[(f32, Color)] {
        &self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_kept_in_order() {
        let mut gradient = CanvasGradient::linear(0.0, 0.0, 10.0, 0.0);
        gradient.add_color_stop(1.0, Color::WHITE).unwrap();
        gradient.add_color_stop(0.0, Color::BLACK).unwrap();
        gradient.add_color_stop(1.0, Color::TRANSPARENT).unwrap();
        let stops = gradient.stops();
        assert_eq!(stops.iter().map(|s| s.0).collect::<Vec<_>>(), vec![0.0, 1.0, 1.0]);
        assert_eq!(stops[2].1, Color::TRANSPARENT);
    }

    #[test]
    fn test_out_of_range_stop_rejected() {
        let mut gradient = CanvasGradient::radial(5.0, 5.0, 5.0);
        assert!(matches!(
            gradient.add_color_stop(1.5, Color::WHITE),
            Err(Canvas2dError::GradientStopOutOfRange(_))
        ));
        assert!(gradient.add_color_stop(f32::NAN, Color::WHITE).is_err());
        assert!(gradient.stops().is_empty());
    }
}
