//! Canvas 2D rendering context implementation.

mod drawing;
mod image_ops;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::CanvasColor;
use crate::style::CompositeOperation;
use tiny_skia::Pixmap;

/// Maximum canvas dimension (same as Chrome).
pub const MAX_DIMENSION: u32 = 32767;

/// Canvas 2D rendering context.
pub struct Canvas2dContext {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer.
    pub(crate) pixmap: Pixmap,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<DrawingState>,
}

impl Canvas2dContext {
    /// Create a new, fully transparent Canvas2dContext with the specified dimensions.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        let pixmap = new_pixmap(width, height)?;
        Ok(Self {
            width,
            height,
            pixmap,
            state: DrawingState::default(),
            state_stack: Vec::new(),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the premultiplied pixel buffer.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consume the context, keeping only its pixels.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Resize the canvas.
    ///
    /// Like assigning `canvas.width`, this always discards the previous pixels
    /// (even when the size is unchanged) and resets the drawing state.
    pub fn resize(&mut self, width: u32, height: u32) -> Canvas2dResult<()> {
        log::debug!(target: "canvas", "resize {}x{}", width, height);
        self.pixmap = new_pixmap(width, height)?;
        self.width = width;
        self.height = height;
        self.state = DrawingState::default();
        self.state_stack.clear();
        Ok(())
    }

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the previously saved drawing state.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    /// Set the fill style from a CanvasColor.
    pub fn set_fill_style_color(&mut self, color: CanvasColor) {
        self.state.fill_color = color.into();
    }

    /// Set the global composite operation.
    pub fn set_composite_operation(&mut self, op: CompositeOperation) {
        self.state.global_composite_operation = op;
    }

    /// Get the current global composite operation.
    pub fn get_composite_operation(&self) -> CompositeOperation {
        self.state.global_composite_operation
    }
}

fn new_pixmap(width: u32, height: u32) -> Canvas2dResult<Pixmap> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Canvas2dError::InvalidDimensions { width, height });
    }
    Pixmap::new(width, height).ok_or(Canvas2dError::InvalidDimensions { width, height })
}
