//! Aspect-preserving placement of artwork inside a centered box.

/// Where the artwork is drawn on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A box the artwork must fit inside, centered on the canvas.
///
/// Dimensions may be zero or negative when paddings eat the whole canvas; such
/// a box fits nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableBox {
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl AvailableBox {
    /// The canvas minus `padding` on every side.
    pub fn inside_canvas(canvas_width: u32, canvas_height: u32, padding: u32) -> Self {
        Self {
            width: canvas_width as f32,
            height: canvas_height as f32,
            center_x: canvas_width as f32 / 2.0,
            center_y: canvas_height as f32 / 2.0,
        }
        .shrink(padding)
    }

    /// Remove `padding` from every side, keeping the center.
    pub fn shrink(self, padding: u32) -> Self {
        let inset = 2.0 * padding as f32;
        Self {
            width: self.width - inset,
            height: self.height - inset,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Largest rectangle with the given aspect ratio (width / height) that fits
/// inside `available`, centered on the box center.
///
/// Returns `None` when the box is empty or the aspect ratio is not a positive
/// finite number; callers skip drawing in that case.
pub fn fit(available: &AvailableBox, aspect_ratio: f32) -> Option<FitRect> {
    if available.is_empty() || !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return None;
    }

    let mut width = available.width;
    let mut height = available.width / aspect_ratio;
    if height > available.height {
        height = available.height;
        width = available.height * aspect_ratio;
    }

    Some(FitRect {
        x: available.center_x - width / 2.0,
        y: available.center_y - height / 2.0,
        width,
        height,
    })
}
