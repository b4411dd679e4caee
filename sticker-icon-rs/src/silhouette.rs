//! Single-color silhouettes of drawn artwork.

use crate::error::StickerIconResult;
use crate::fit::FitRect;
use crate::source::SourceImage;
use sticker_icon_canvas2d::{Canvas2dContext, CanvasColor, CompositeOperation, RectParams};

/// Canvas-sized buffer holding the artwork's silhouette.
///
/// Every pixel is either transparent or the silhouette color carrying the
/// artwork's alpha at that position. The alpha matches the drawn artwork
/// exactly; the color is exact only up to 8-bit premultiplied rounding, so a
/// partially transparent pixel may read back a few units off the requested
/// RGB. White, black and fully opaque pixels read back exactly.
pub struct SilhouetteBuffer {
    canvas: Canvas2dContext,
}

impl SilhouetteBuffer {
    pub fn canvas(&self) -> &Canvas2dContext {
        &self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}

/// Draw `source` at `rect` on a transparent `width` x `height` buffer, then
/// replace the color of every drawn pixel with `color`, keeping its alpha.
///
/// The artwork is sampled exactly as the frame composer samples it, so the
/// silhouette lines up with the artwork drawn over it.
pub fn extract_silhouette(
    source: &SourceImage,
    rect: &FitRect,
    color: CanvasColor,
    width: u32,
    height: u32,
) -> StickerIconResult<SilhouetteBuffer> {
    log::debug!(target: "render", "silhouette {} at {:?}", color, rect);
    let mut canvas = Canvas2dContext::new(width, height)?;
    canvas.draw_image_scaled(source.as_pixmap_ref(), rect.x, rect.y, rect.width, rect.height);

    canvas.set_composite_operation(CompositeOperation::SourceIn);
    canvas.set_fill_style_color(color);
    canvas.fill_rect(&RectParams::covering(width, height));

    Ok(SilhouetteBuffer { canvas })
}
