//! Outline approximation by compositing a silhouette around a circle.

use crate::silhouette::SilhouetteBuffer;
use std::f32::consts::PI;
use sticker_icon_canvas2d::{Canvas2dContext, CompositeOperation};

/// Number of copies drawn around the ring (one every 10 degrees).
pub const DEFAULT_STROKE_STEPS: u32 = 36;

/// Offsets of the ring copies: `steps` points evenly spaced on a circle of
/// `radius`, starting at angle 0 and going clockwise in canvas coordinates.
pub fn ring_offsets(radius: f32, steps: u32) -> impl Iterator<Item = (f32, f32)> {
    (0..steps).map(move |i| {
        let angle = i as f32 * 2.0 * PI / steps as f32;
        let (sin, cos) = angle.sin_cos();
        (radius * cos, radius * sin)
    })
}

/// Approximate an outline of `radius` pixels around the silhouette.
///
/// The silhouette is composited source-over at each ring offset and then once
/// in place so the interior is always covered. With a zero radius the ring is
/// skipped and the silhouette is drawn exactly once.
///
/// Concave corners sharper than the ring spacing can show small notches
/// between neighbouring copies.
pub fn stroke_outline(
    destination: &mut Canvas2dContext,
    silhouette: &SilhouetteBuffer,
    radius: f32,
    steps: u32,
) {
    log::debug!(target: "render", "stroke radius={} steps={}", radius, steps);
    destination.save();
    destination.set_composite_operation(CompositeOperation::SourceOver);

    if radius > 0.0 {
        for (dx, dy) in ring_offsets(radius, steps) {
            destination.draw_canvas(silhouette.canvas(), dx, dy);
        }
    }
    destination.draw_canvas(silhouette.canvas(), 0.0, 0.0);

    destination.restore();
}
