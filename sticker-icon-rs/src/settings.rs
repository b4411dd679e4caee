//! Render settings and their JSON representation.

use crate::error::{StickerIconError, StickerIconResult};
use serde::{Deserialize, Serialize};
use sticker_icon_canvas2d::{CanvasColor, MAX_DIMENSION};

/// Layout and style parameters for one render.
///
/// The JSON form uses the keys of the settings object the icon editor has
/// always saved (`width`, `padding`, `stickerEffect`, ...). The descriptive
/// names (`canvasWidth`, `contentPadding`, `stickerEnabled`, ...) are accepted
/// as aliases. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Output width in pixels.
    #[serde(rename = "width", alias = "canvasWidth")]
    pub canvas_width: u32,
    /// Output height in pixels.
    #[serde(rename = "height", alias = "canvasHeight")]
    pub canvas_height: u32,
    /// Margin kept free on every side of the canvas.
    #[serde(rename = "padding", alias = "contentPadding")]
    pub content_padding: u32,
    /// Background fill; `None` leaves the canvas transparent.
    #[serde(with = "background_serde")]
    pub background_color: Option<CanvasColor>,
    /// Draw the artwork with a solid outline around its silhouette.
    #[serde(rename = "stickerEffect", alias = "stickerEnabled")]
    pub sticker_enabled: bool,
    #[serde(with = "color_serde")]
    pub sticker_color: CanvasColor,
    /// Extra margin reserved for the outline, and the outline radius.
    pub sticker_padding: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: 128,
            canvas_height: 128,
            content_padding: 4,
            background_color: Some(CanvasColor::from_rgba8(255, 255, 255, 0)),
            sticker_enabled: false,
            sticker_color: CanvasColor::WHITE,
            sticker_padding: 4,
        }
    }
}

impl RenderSettings {
    /// Check the hard preconditions of a render.
    ///
    /// Only the canvas size can be invalid. Paddings that leave no room for
    /// the artwork are legal and produce a background-only icon.
    pub fn validate(&self) -> StickerIconResult<()> {
        check_dimension("width", self.canvas_width)?;
        check_dimension("height", self.canvas_height)
    }

    /// Pixel size at which vector artwork should be rasterized so that it is
    /// never upscaled when drawn.
    pub fn source_target_size(&self) -> u32 {
        self.canvas_width.max(self.canvas_height)
    }
}

fn check_dimension(name: &'static str, value: u32) -> StickerIconResult<()> {
    if value == 0 || value > MAX_DIMENSION {
        return Err(StickerIconError::InvalidSetting {
            name,
            reason: format!("{} is outside 1..={}", value, MAX_DIMENSION),
        });
    }
    Ok(())
}

/// Parse a background color; `"transparent"` and the empty string mean no fill.
pub fn parse_background(value: &str) -> StickerIconResult<Option<CanvasColor>> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("transparent") {
        return Ok(None);
    }
    Ok(Some(CanvasColor::parse(value)?))
}

mod color_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use sticker_icon_canvas2d::CanvasColor;

    pub fn serialize<S: Serializer>(color: &CanvasColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(color)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CanvasColor, D::Error> {
        let s = String::deserialize(deserializer)?;
        CanvasColor::parse(&s).map_err(de::Error::custom)
    }
}

mod background_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use sticker_icon_canvas2d::CanvasColor;

    pub fn serialize<S: Serializer>(
        color: &Option<CanvasColor>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.collect_str(color),
            None => serializer.serialize_str("transparent"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<CanvasColor>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) => super::parse_background(&s).map_err(de::Error::custom),
        }
    }
}
