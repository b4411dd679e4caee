//! Whole-frame rendering: background, optional sticker outline, artwork.

use crate::error::StickerIconResult;
use crate::fit::{fit, AvailableBox, FitRect};
use crate::settings::RenderSettings;
use crate::silhouette::extract_silhouette;
use crate::source::SourceImage;
use crate::stroke::{stroke_outline, DEFAULT_STROKE_STEPS};
use sticker_icon_canvas2d::{Canvas2dContext, RectParams};

/// Placement of artwork with the given aspect ratio under `settings`.
///
/// The content padding always applies; the sticker padding applies on top of
/// it only in sticker mode. `None` means the paddings leave no room.
pub fn artwork_rect(settings: &RenderSettings, aspect_ratio: f32) -> Option<FitRect> {
    let mut available = AvailableBox::inside_canvas(
        settings.canvas_width,
        settings.canvas_height,
        settings.content_padding,
    );
    if available.is_empty() {
        return None;
    }
    if settings.sticker_enabled {
        available = available.shrink(settings.sticker_padding);
    }
    fit(&available, aspect_ratio)
}

/// Render one icon frame into `canvas`.
///
/// The canvas is resized to the configured size and its previous contents are
/// discarded. Without a source, or when the paddings leave no room for it, the
/// result is the background alone.
pub fn render(
    canvas: &mut Canvas2dContext,
    settings: &RenderSettings,
    source: Option<&SourceImage>,
) -> StickerIconResult<()> {
    settings.validate()?;
    log::debug!(
        target: "render",
        "render {}x{} sticker={}",
        settings.canvas_width,
        settings.canvas_height,
        settings.sticker_enabled
    );

    let (width, height) = (settings.canvas_width, settings.canvas_height);
    canvas.resize(width, height)?;

    if let Some(background) = settings.background_color {
        canvas.set_fill_style_color(background);
        canvas.fill_rect(&RectParams::covering(width, height));
    }

    let Some(source) = source else {
        return Ok(());
    };
    let Some(rect) = artwork_rect(settings, source.aspect_ratio()) else {
        log::debug!(target: "render", "no room for artwork, background only");
        return Ok(());
    };

    if settings.sticker_enabled {
        let silhouette = extract_silhouette(source, &rect, settings.sticker_color, width, height)?;
        stroke_outline(
            canvas,
            &silhouette,
            settings.sticker_padding as f32,
            DEFAULT_STROKE_STEPS,
        );
    }

    canvas.draw_image_scaled(source.as_pixmap_ref(), rect.x, rect.y, rect.width, rect.height);
    Ok(())
}

/// Render into a fresh canvas and encode it as PNG.
pub fn render_to_png(
    settings: &RenderSettings,
    source: Option<&SourceImage>,
) -> StickerIconResult<Vec<u8>> {
    settings.validate()?;
    let mut canvas = Canvas2dContext::new(settings.canvas_width, settings.canvas_height)?;
    render(&mut canvas, settings, source)?;
    Ok(canvas.to_png(None)?)
}
