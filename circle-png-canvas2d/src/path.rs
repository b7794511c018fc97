//! Path helpers for Canvas 2D.

use crate::error::{Canvas2dError, Canvas2dResult};
use tiny_skia::PathBuilder;

/// Build a closed circular path, the equivalent of
/// `beginPath(); arc(cx, cy, r, 0, 2π)`.
pub fn circle_path(cx: f32, cy: f32, radius: f32) -> Canvas2dResult<tiny_skia::Path> {
    let degenerate =
        || Canvas2dError::DegeneratePath(format!("degenerate circle at ({cx}, {cy}) r={radius}"));
    // from_circle still yields a path for a zero radius
    if !(radius.is_finite() && radius > 0.0 && cx.is_finite() && cy.is_finite()) {
        return Err(degenerate());
    }
    PathBuilder::from_circle(cx, cy, radius).ok_or_else(degenerate)
}
