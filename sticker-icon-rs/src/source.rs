//! Decoded artwork, ready to be sampled by the canvas.

use crate::error::{StickerIconError, StickerIconResult};
use sticker_icon_canvas2d::{Canvas2dContext, CanvasPixmapRef};
use tiny_skia::Pixmap;

/// An immutable decoded raster plus the aspect ratio it should be laid out with.
///
/// For vector artwork the aspect ratio is the document's intrinsic one, which
/// can differ slightly from the rounded pixel dimensions.
#[derive(Clone)]
pub struct SourceImage {
    pixmap: Pixmap,
    aspect_ratio: f32,
}

impl SourceImage {
    /// Wrap a premultiplied pixmap; the aspect ratio follows its pixel size.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        let aspect_ratio = pixmap.width() as f32 / pixmap.height() as f32;
        Self {
            pixmap,
            aspect_ratio,
        }
    }

    /// Wrap a premultiplied pixmap laid out with an explicit aspect ratio.
    pub fn from_pixmap_with_aspect(pixmap: Pixmap, aspect_ratio: f32) -> StickerIconResult<Self> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(StickerIconError::InvalidAspectRatio(aspect_ratio));
        }
        Ok(Self {
            pixmap,
            aspect_ratio,
        })
    }

    /// Build from straight-alpha RGBA samples, 4 bytes per pixel.
    pub fn from_rgba8(data: &[u8], width: u32, height: u32) -> StickerIconResult<Self> {
        if width == 0 || height == 0 {
            return Err(StickerIconError::InvalidSourceDimensions { width, height });
        }
        let mut staging = Canvas2dContext::new(width, height)?;
        staging.put_image_data(data, width, height, 0, 0)?;
        Ok(Self::from_pixmap(staging.into_pixmap()))
    }

    /// Decode a PNG or JPEG file held in memory.
    pub fn from_encoded(bytes: &[u8]) -> StickerIconResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(rgba.as_raw(), width, height)
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Width divided by height, always positive.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn as_pixmap_ref(&self) -> CanvasPixmapRef<'_> {
        self.pixmap.as_ref().into()
    }
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("pixel_width", &self.pixel_width())
            .field("pixel_height", &self.pixel_height())
            .field("aspect_ratio", &self.aspect_ratio)
            .finish()
    }
}
