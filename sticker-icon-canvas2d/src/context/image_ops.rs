//! Image drawing, pixel data, and PNG output operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::CanvasPixmapRef;
use tiny_skia::Transform;

impl Canvas2dContext {
    // --- Image drawing ---

    /// Draw a premultiplied-alpha pixmap with its top-left corner at (dx, dy).
    ///
    /// Fractional offsets are resampled bilinearly.
    pub fn draw_image(&mut self, image: CanvasPixmapRef, dx: f32, dy: f32) {
        log::debug!(target: "canvas", "drawImage {}x{} at {} {}", image.width, image.height, dx, dy);
        self.draw_image_with_transform(image, Transform::from_translate(dx, dy));
    }

    /// Draw a premultiplied-alpha pixmap scaled into the rectangle (dx, dy, dw, dh).
    pub fn draw_image_scaled(
        &mut self,
        image: CanvasPixmapRef,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) {
        log::debug!(target: "canvas", "drawImage {}x{} into {} {} {} {}", image.width, image.height, dx, dy, dw, dh);
        if image.width == 0 || image.height == 0 || dw <= 0.0 || dh <= 0.0 {
            return;
        }

        // Calculate scale factors
        let scale_x = dw / image.width as f32;
        let scale_y = dh / image.height as f32;

        // Translate to destination position, then scale
        let transform = Transform::from_translate(dx, dy).pre_scale(scale_x, scale_y);
        self.draw_image_with_transform(image, transform);
    }

    /// Draw another canvas at the specified position.
    pub fn draw_canvas(&mut self, source: &Canvas2dContext, dx: f32, dy: f32) {
        self.draw_image(source.pixmap.as_ref().into(), dx, dy);
    }

    fn draw_image_with_transform(&mut self, image: CanvasPixmapRef, transform: Transform) {
        let Some(pixmap) = tiny_skia::PixmapRef::from_bytes(image.data, image.width, image.height)
        else {
            log::warn!(target: "canvas", "drawImage skipped: pixel data does not match {}x{}", image.width, image.height);
            return;
        };
        let paint = tiny_skia::PixmapPaint {
            opacity: 1.0,
            blend_mode: self.state.global_composite_operation.into(),
            quality: tiny_skia::FilterQuality::Bilinear,
        };
        self.pixmap.draw_pixmap(0, 0, pixmap, &paint, transform, None);
    }

    // --- Image data ---

    /// Get straight-alpha RGBA image data for a region of the canvas.
    ///
    /// Pixels outside the canvas read as transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];
        let pixels = self.pixmap.data();

        for dy in 0..height {
            let src_y = y + dy as i32;
            if src_y < 0 || src_y >= self.height as i32 {
                continue;
            }
            for dx in 0..width {
                let src_x = x + dx as i32;
                if src_x < 0 || src_x >= self.width as i32 {
                    continue;
                }

                let src_idx = ((src_y as u32 * self.width + src_x as u32) * 4) as usize;
                let dst_idx = ((dy * width + dx) * 4) as usize;
                let pixel = &pixels[src_idx..src_idx + 4];
                data[dst_idx..dst_idx + 4].copy_from_slice(&demultiply(pixel));
            }
        }

        data
    }

    /// Write straight-alpha RGBA image data to the canvas at (dx, dy).
    ///
    /// This bypasses compositing and writes pixels directly. Pixels outside the
    /// canvas bounds are silently ignored.
    pub fn put_image_data(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        dx: i32,
        dy: i32,
    ) -> Canvas2dResult<()> {
        check_image_data_len(data, width, height)?;

        let canvas_width = self.width as i32;
        let canvas_height = self.height as i32;
        let pixmap_data = self.pixmap.data_mut();

        for sy in 0..height as i32 {
            let dst_row = dy + sy;
            if dst_row < 0 || dst_row >= canvas_height {
                continue;
            }
            for sx in 0..width as i32 {
                let dst_col = dx + sx;
                if dst_col < 0 || dst_col >= canvas_width {
                    continue;
                }

                let src_idx = ((sy * width as i32 + sx) * 4) as usize;
                let dst_idx = ((dst_row * canvas_width + dst_col) * 4) as usize;
                let premultiplied = premultiply(&data[src_idx..src_idx + 4]);
                pixmap_data[dst_idx..dst_idx + 4].copy_from_slice(&premultiplied);
            }
        }
        Ok(())
    }

    /// Export the canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }
}

fn check_image_data_len(data: &[u8], width: u32, height: u32) -> Canvas2dResult<()> {
    if data.len() != (width as usize) * (height as usize) * 4 {
        return Err(Canvas2dError::ImageDataLength {
            len: data.len(),
            width,
            height,
        });
    }
    Ok(())
}

/// Straight to premultiplied alpha, rounding to nearest.
pub(crate) fn premultiply(pixel: &[u8]) -> [u8; 4] {
    let a = pixel[3];
    match a {
        255 => [pixel[0], pixel[1], pixel[2], 255],
        0 => [0, 0, 0, 0],
        _ => {
            let a16 = a as u16;
            [
                ((pixel[0] as u16 * a16 + 127) / 255) as u8,
                ((pixel[1] as u16 * a16 + 127) / 255) as u8,
                ((pixel[2] as u16 * a16 + 127) / 255) as u8,
                a,
            ]
        }
    }
}

/// Premultiplied to straight alpha, rounding to nearest.
pub(crate) fn demultiply(pixel: &[u8]) -> [u8; 4] {
    let a = pixel[3];
    match a {
        255 => [pixel[0], pixel[1], pixel[2], 255],
        0 => [0, 0, 0, 0],
        _ => {
            let a32 = a as u32;
            let channel = |c: u8| ((c as u32 * 255 + a32 / 2) / a32).min(255) as u8;
            [channel(pixel[0]), channel(pixel[1]), channel(pixel[2]), a]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{demultiply, premultiply};
    use crate::geometry::RectParams;
    use crate::{Canvas2dContext, Canvas2dError, CanvasColor};

    fn opaque_block(ctx: &mut Canvas2dContext, color: CanvasColor) {
        ctx.set_fill_style_color(color);
        let (w, h) = (ctx.width(), ctx.height());
        ctx.fill_rect(&RectParams::covering(w, h));
    }

    #[test]
    fn test_premultiply_demultiply_white_is_exact() {
        for a in 1..=255u8 {
            let p = premultiply(&[255, 255, 255, a]);
            assert_eq!(p, [a, a, a, a]);
            assert_eq!(demultiply(&p), [255, 255, 255, a]);
        }
    }

    #[test]
    fn test_demultiply_transparent_is_zero() {
        assert_eq!(demultiply(&[0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(premultiply(&[9, 9, 9, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_put_get_image_data_round_trip_opaque() {
        let mut ctx = Canvas2dContext::new(2, 2).unwrap();
        let data: Vec<u8> = vec![
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 12, 34, 56, 255,
        ];
        ctx.put_image_data(&data, 2, 2, 0, 0).unwrap();
        assert_eq!(ctx.get_image_data(0, 0, 2, 2), data);
    }

    #[test]
    fn test_put_image_data_clips_to_canvas() {
        let mut ctx = Canvas2dContext::new(2, 2).unwrap();
        let data = vec![200u8; 3 * 3 * 4];
        ctx.put_image_data(&data, 3, 3, 1, 1).unwrap();
        let out = ctx.get_image_data(0, 0, 2, 2);
        assert_eq!(out[3], 0);
        assert_eq!(&out[12..16], &[200, 200, 200, 200]);
    }

    #[test]
    fn test_put_image_data_rejects_short_buffer() {
        let mut ctx = Canvas2dContext::new(2, 2).unwrap();
        assert!(matches!(
            ctx.put_image_data(&[0u8; 7], 2, 1, 0, 0),
            Err(Canvas2dError::ImageDataLength { len: 7, .. })
        ));
    }

    #[test]
    fn test_get_image_data_outside_is_transparent() {
        let mut ctx = Canvas2dContext::new(4, 4).unwrap();
        opaque_block(&mut ctx, CanvasColor::BLACK);
        let out = ctx.get_image_data(-2, -2, 4, 4);
        assert_eq!(out[3], 0);
        assert_eq!(out[(3 * 4 + 3) * 4 + 3], 255);
    }

    #[test]
    fn test_draw_canvas_integer_offset() {
        let mut src = Canvas2dContext::new(10, 10).unwrap();
        src.set_fill_style_color(CanvasColor::from_rgba8(0, 0, 255, 255));
        src.fill_rect(&RectParams {
            x: 0.0,
            y: 0.0,
            width: 2.0,
            height: 2.0,
        });

        let mut dst = Canvas2dContext::new(10, 10).unwrap();
        dst.draw_canvas(&src, 5.0, 3.0);

        let out = dst.get_image_data(0, 0, 10, 10);
        let at = |x: usize, y: usize| &out[(y * 10 + x) * 4..(y * 10 + x) * 4 + 4];
        assert_eq!(at(5, 3), &[0, 0, 255, 255]);
        assert_eq!(at(6, 4), &[0, 0, 255, 255]);
        assert_eq!(at(0, 0)[3], 0);
        assert_eq!(at(7, 3)[3], 0);
    }

    #[test]
    fn test_draw_image_scaled_fills_destination_rect() {
        let mut src = Canvas2dContext::new(2, 2).unwrap();
        opaque_block(&mut src, CanvasColor::from_rgba8(0, 128, 0, 255));

        let mut dst = Canvas2dContext::new(20, 20).unwrap();
        dst.draw_image_scaled(src.pixmap().as_ref().into(), 4.0, 4.0, 12.0, 12.0);

        let out = dst.get_image_data(0, 0, 20, 20);
        let alpha = |x: usize, y: usize| out[(y * 20 + x) * 4 + 3];
        assert_eq!(alpha(4, 4), 255);
        assert_eq!(alpha(10, 10), 255);
        assert_eq!(alpha(15, 15), 255);
        assert_eq!(alpha(3, 10), 0);
        assert_eq!(alpha(16, 10), 0);
        let center = &out[(10 * 20 + 10) * 4..(10 * 20 + 10) * 4 + 3];
        assert_eq!((center[0], center[2]), (0, 0));
        assert!((127..=129).contains(&center[1]), "{:?}", center);
    }

    #[test]
    fn test_draw_image_scaled_zero_size_is_noop() {
        let src = Canvas2dContext::new(2, 2).unwrap();
        let mut dst = Canvas2dContext::new(4, 4).unwrap();
        dst.draw_image_scaled(src.pixmap().as_ref().into(), 0.0, 0.0, 0.0, 4.0);
        dst.draw_image_scaled(src.pixmap().as_ref().into(), 0.0, 0.0, 4.0, -1.0);
        assert!(dst.pixmap().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_to_png_header_and_size() {
        let mut ctx = Canvas2dContext::new(16, 8).unwrap();
        opaque_block(&mut ctx, CanvasColor::from_rgba8(255, 0, 0, 255));
        let png_data = ctx.to_png(None).unwrap();
        assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&png_data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.get_pixel(3, 3).0, [255, 0, 0, 255]);
    }
}
