//! Drawing state that can be saved and restored.

use crate::style::CompositeOperation;

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Current fill color.
    pub fill_color: tiny_skia::Color,
    /// Current global composite operation.
    pub global_composite_operation: CompositeOperation,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            // Default is opaque black
            fill_color: tiny_skia::Color::BLACK,
            global_composite_operation: CompositeOperation::SourceOver,
        }
    }
}
