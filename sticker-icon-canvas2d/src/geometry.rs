//! Backend-neutral value types shared by canvas operations.

use crate::error::{Canvas2dError, Canvas2dResult};
use std::fmt;
use std::str::FromStr;

/// Parameters for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f32,
    /// Y coordinate of the rectangle origin.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl RectParams {
    /// Rectangle covering a whole `width` x `height` surface.
    pub fn covering(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    /// `None` unless both sides are positive; tiny-skia alone accepts
    /// zero-width and zero-height rectangles.
    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        tiny_skia::Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// A backend-neutral RGBA color with 8-bit straight-alpha components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const WHITE: CanvasColor = CanvasColor::from_rgba8(255, 255, 255, 255);
    pub const BLACK: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 255);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string (`#rgb`, `#rrggbbaa`, `rgb()`, named colors, ...).
    pub fn parse(s: &str) -> Canvas2dResult<Self> {
        let parsed = csscolorparser::parse(s.trim())
            .map_err(|e| Canvas2dError::ColorParseError(format!("{}: {}", s, e)))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self { r, g, b, a })
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl FromStr for CanvasColor {
    type Err = Canvas2dError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CanvasColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// A reference to premultiplied RGBA pixel data, the layout tiny-skia stores.
#[derive(Debug, Clone, Copy)]
pub struct CanvasPixmapRef<'a> {
    /// RGBA pixel data, premultiplied, 4 bytes per pixel.
    pub data: &'a [u8],
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl<'a> From<tiny_skia::PixmapRef<'a>> for CanvasPixmapRef<'a> {
    fn from(pixmap: tiny_skia::PixmapRef<'a>) -> Self {
        Self {
            data: pixmap.data(),
            width: pixmap.width(),
            height: pixmap.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_named() {
        assert_eq!(
            CanvasColor::parse("#ff8000").unwrap(),
            CanvasColor::from_rgba8(255, 128, 0, 255)
        );
        assert_eq!(
            CanvasColor::parse("#ffffff00").unwrap(),
            CanvasColor::from_rgba8(255, 255, 255, 0)
        );
        assert_eq!(CanvasColor::parse("white").unwrap(), CanvasColor::WHITE);
        assert_eq!(
            CanvasColor::parse(" transparent ").unwrap().a,
            0
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "not-a-color".parse::<CanvasColor>(),
            Err(Canvas2dError::ColorParseError(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [
            CanvasColor::WHITE,
            CanvasColor::from_rgba8(18, 52, 86, 120),
        ] {
            assert_eq!(color.to_string().parse::<CanvasColor>().unwrap(), color);
        }
        assert_eq!(CanvasColor::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_rect_covering() {
        let rect = RectParams::covering(128, 64);
        assert_eq!(rect.width, 128.0);
        assert_eq!(rect.height, 64.0);
        assert!(rect.to_skia().is_some());
        assert!(RectParams::covering(0, 64).to_skia().is_none());
        assert!(RectParams::covering(64, 0).to_skia().is_none());
    }

    #[test]
    fn test_rect_negative_or_nan_size_is_none() {
        let mut rect = RectParams::covering(10, 10);
        rect.height = -4.0;
        assert!(rect.to_skia().is_none());
        rect.height = f32::NAN;
        assert!(rect.to_skia().is_none());
    }
}
