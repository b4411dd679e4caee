//! Minimal Canvas 2D style raster context built on `tiny-skia`.
//!
//! This crate provides the handful of Canvas 2D operations the sticker-icon
//! renderer is built from: resizing, solid rectangle fills,
//! composite operations (`source-over`, `source-in`, ...), translated and
//! scaled image drawing, pixel readback, and PNG export.
//!
//! Pixels are stored premultiplied. [`Canvas2dContext::get_image_data`]
//! and [`Canvas2dContext::put_image_data`] exchange straight-alpha RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! use sticker_icon_canvas2d::{Canvas2dContext, CanvasColor, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(128, 128)?;
//! ctx.set_fill_style_color(CanvasColor::parse("#ff0000")?);
//! ctx.fill_rect(&RectParams { x: 0.0, y: 0.0, width: 64.0, height: 64.0 });
//! let png_data = ctx.to_png(None)?;
//! ```

mod context;
mod drawing_state;
mod error;
mod geometry;
mod style;

// Re-export public API
pub use context::{Canvas2dContext, MAX_DIMENSION};
pub use error::{Canvas2dError, Canvas2dResult};
pub use geometry::{CanvasColor, CanvasPixmapRef, RectParams};
pub use style::CompositeOperation;
