// Allow uninlined format args for cleaner error messages
#![allow(clippy::uninlined_format_args)]
#![doc = include_str!("../README.md")]

#[macro_use]
extern crate lazy_static;

pub mod composer;
pub mod error;
pub mod fit;
pub mod image_loading;
pub mod settings;
pub mod silhouette;
pub mod source;
pub mod stroke;

pub use composer::{artwork_rect, render, render_to_png};
pub use error::{StickerIconError, StickerIconResult};
pub use fit::{fit, AvailableBox, FitRect};
pub use image_loading::{load_source, svg_to_source};
pub use settings::RenderSettings;
pub use silhouette::{extract_silhouette, SilhouetteBuffer};
pub use source::SourceImage;
pub use sticker_icon_canvas2d::{Canvas2dContext, CanvasColor};
pub use stroke::{stroke_outline, DEFAULT_STROKE_STEPS};
