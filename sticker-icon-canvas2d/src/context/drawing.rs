//! Rectangle fill operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::RectParams;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Fill a rectangle with the current fill color and composite operation.
    ///
    /// Composite operations only touch pixels inside the rectangle, so a
    /// `source-in` fill that should mask the whole canvas must cover it.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) = params.to_skia() else {
            return;
        };
        let paint = self.fill_paint();
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    // --- Private paint helpers ---

    fn fill_paint(&self) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            blend_mode: self.state.global_composite_operation.into(),
            ..Default::default()
        };
        paint.set_color(self.state.fill_color);
        paint
    }
}
