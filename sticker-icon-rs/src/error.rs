use sticker_icon_canvas2d::Canvas2dError;
use thiserror::Error;

pub type StickerIconResult<T> = Result<T, StickerIconError>;

#[derive(Debug, Error)]
pub enum StickerIconError {
    #[error(transparent)]
    Canvas(#[from] Canvas2dError),

    /// A source image must have at least one pixel in each direction.
    #[error("Invalid source image dimensions: width={width}, height={height}")]
    InvalidSourceDimensions { width: u32, height: u32 },

    #[error("Invalid source aspect ratio: {0}")]
    InvalidAspectRatio(f32),

    #[error("Invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_failure() -> StickerIconResult<Vec<u8>> {
        let encoded: Result<Vec<u8>, Canvas2dError> =
            Err(Canvas2dError::PngError("stream closed".to_string()));
        Ok(encoded?)
    }

    #[test]
    fn test_png_encoding_error_surfaces_as_canvas_error() {
        let err = encode_failure().unwrap_err();
        assert!(matches!(
            err,
            StickerIconError::Canvas(Canvas2dError::PngError(_))
        ));
        assert_eq!(err.to_string(), "PNG encoding error: stream closed");
    }
}
