//! Error types for sticker-icon-canvas2d.

use thiserror::Error;

/// Result type alias using Canvas2dError.
pub type Canvas2dResult<T> = Result<T, Canvas2dError>;

/// Errors that can occur in Canvas 2D operations.
#[derive(Debug, Error)]
pub enum Canvas2dError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Image data length {len} does not match {width}x{height} RGBA")]
    ImageDataLength { len: usize, width: u32, height: u32 },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl From<png::EncodingError> for Canvas2dError {
    fn from(err: png::EncodingError) -> Self {
        Canvas2dError::PngError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_encoding_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = Canvas2dError::from(png::EncodingError::IoError(io));
        assert!(matches!(err, Canvas2dError::PngError(ref msg) if msg.contains("disk full")));
    }
}
