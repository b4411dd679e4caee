//! Decoding input files into [`SourceImage`]s.

use crate::error::{StickerIconError, StickerIconResult};
use crate::source::SourceImage;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use usvg::fontdb;

lazy_static! {
    static ref FONT_DB: Arc<fontdb::Database> = Arc::new(init_font_db());
}

fn init_font_db() -> fontdb::Database {
    let mut db = fontdb::Database::new();

    // Load fonts from the operating system
    db.load_system_fonts();

    let families: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect();

    for family in ["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans"] {
        if families.contains(family) {
            db.set_sans_serif_family(family);
            break;
        }
    }
    for family in ["Courier New", "Courier", "Liberation Mono", "DejaVu Sans Mono"] {
        if families.contains(family) {
            db.set_monospace_family(family);
            break;
        }
    }
    for family in ["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif"] {
        if families.contains(family) {
            db.set_serif_family(family);
            break;
        }
    }

    log::debug!(target: "render", "loaded {} font faces", db.len());
    db
}

fn usvg_options(resources_dir: Option<&Path>) -> usvg::Options<'static> {
    usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        fontdb: FONT_DB.clone(),
        ..Default::default()
    }
}

/// Rasterize an SVG (or gzipped SVGZ) document.
///
/// The artwork is scaled so its longer side spans `target_size` pixels, which
/// keeps it from being upscaled when drawn into a canvas of that size. The
/// resulting image keeps the document's intrinsic aspect ratio.
pub fn svg_to_source(data: &[u8], target_size: u32) -> StickerIconResult<SourceImage> {
    svg_to_source_with_options(data, target_size, &usvg_options(None))
}

fn svg_to_source_with_options(
    data: &[u8],
    target_size: u32,
    options: &usvg::Options,
) -> StickerIconResult<SourceImage> {
    if target_size == 0 {
        return Err(StickerIconError::InvalidSetting {
            name: "target_size",
            reason: "must be positive".to_string(),
        });
    }
    let tree = usvg::Tree::from_data(data, options)?;
    let size = tree.size();
    let (svg_width, svg_height) = (size.width(), size.height());

    let scale = target_size as f32 / svg_width.max(svg_height);
    let width = (svg_width * scale).round().max(1.0) as u32;
    let height = (svg_height * scale).round().max(1.0) as u32;
    log::debug!(
        target: "render",
        "rasterizing {}x{} svg at {}x{}",
        svg_width,
        svg_height,
        width,
        height
    );

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(StickerIconError::InvalidSourceDimensions { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    SourceImage::from_pixmap_with_aspect(pixmap, svg_width / svg_height)
}

impl SourceImage {
    /// Rasterize SVG data; see [`svg_to_source`].
    pub fn from_svg_data(data: &[u8], target_size: u32) -> StickerIconResult<Self> {
        svg_to_source(data, target_size)
    }
}

/// Load artwork from disk.
///
/// `.svg` and `.svgz` files are rasterized at `target_size` with relative
/// image references resolved against the file's directory. Anything else is
/// decoded as a raster image at its own resolution.
pub fn load_source(path: &Path, target_size: u32) -> StickerIconResult<SourceImage> {
    let data = std::fs::read(path)?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"))
        .unwrap_or(false);

    log::info!(target: "render", "loading {} ({} bytes)", path.display(), data.len());
    if is_svg {
        let options = usvg_options(path.parent());
        svg_to_source_with_options(&data, target_size, &options)
    } else {
        SourceImage::from_encoded(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect width="10" height="10" fill="#ff0000"/>
    </svg>"##;

    const WIDE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50">
        <rect width="200" height="50" fill="#00ff00"/>
    </svg>"##;

    #[test]
    fn test_svg_scaled_to_target() {
        let source = svg_to_source(RED_SQUARE.as_bytes(), 64).unwrap();
        assert_eq!((source.pixel_width(), source.pixel_height()), (64, 64));
        assert_eq!(source.aspect_ratio(), 1.0);
        let data = source.as_pixmap_ref().data;
        assert_eq!(&data[0..4], &[255, 0, 0, 255]);
        let center = (32 * 64 + 32) * 4;
        assert_eq!(&data[center..center + 4], &[255, 0, 0, 255]);
    }

    #[rstest]
    #[case(128, 128, 32)]
    #[case(40, 40, 10)]
    #[case(3, 3, 1)]
    fn test_wide_svg_keeps_aspect(
        #[case] target: u32,
        #[case] width: u32,
        #[case] height: u32,
    ) {
        let source = SourceImage::from_svg_data(WIDE.as_bytes(), target).unwrap();
        assert_eq!(source.pixel_width(), width);
        assert_eq!(source.pixel_height(), height);
        assert_eq!(source.aspect_ratio(), 4.0);
    }

    #[test]
    fn test_invalid_svg() {
        assert!(matches!(
            svg_to_source(b"<not-svg", 32),
            Err(StickerIconError::Svg(_))
        ));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(matches!(
            svg_to_source(RED_SQUARE.as_bytes(), 0),
            Err(StickerIconError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_load_source_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let svg_path = dir.path().join("square.SVG");
        std::fs::write(&svg_path, RED_SQUARE).unwrap();
        let source = load_source(&svg_path, 20).unwrap();
        assert_eq!((source.pixel_width(), source.pixel_height()), (20, 20));

        let png_path = dir.path().join("pixel.png");
        image::RgbaImage::from_pixel(3, 5, image::Rgba([1, 2, 3, 255]))
            .save(&png_path)
            .unwrap();
        let source = load_source(&png_path, 20).unwrap();
        assert_eq!((source.pixel_width(), source.pixel_height()), (3, 5));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_source(Path::new("/definitely/missing/icon.svg"), 16),
            Err(StickerIconError::Io(_))
        ));
    }
}
