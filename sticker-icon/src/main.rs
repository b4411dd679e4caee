use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use sticker_icon_rs::settings::parse_background;
use sticker_icon_rs::{load_source, render_to_png, CanvasColor, RenderSettings};

/// sticker-icon: Render SVG artwork into a fixed-size PNG icon, optionally with a sticker outline
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the input artwork (.svg, .svgz, .png or .jpg)
    #[clap(short, long, required_unless_present = "dump_config")]
    pub input: Option<PathBuf>,

    /// Path to the PNG file to be created
    #[clap(short, long, default_value = "icon.png")]
    pub output: PathBuf,

    /// JSON settings file (width, height, padding, backgroundColor, stickerEffect, stickerColor, stickerPadding)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Icon width in pixels
    #[clap(long)]
    pub width: Option<u32>,

    /// Icon height in pixels
    #[clap(long)]
    pub height: Option<u32>,

    /// Margin kept free on every side of the icon, in pixels
    #[clap(long)]
    pub padding: Option<u32>,

    /// Background CSS color, or "transparent"
    #[clap(long)]
    pub background: Option<String>,

    /// Draw a solid outline around the artwork
    #[clap(long, conflicts_with = "no_sticker")]
    pub sticker: bool,

    /// Disable the outline even if the settings file enables it
    #[clap(long)]
    pub no_sticker: bool,

    /// Outline CSS color
    #[clap(long)]
    pub sticker_color: Option<String>,

    /// Outline radius, and the extra margin reserved for it, in pixels
    #[clap(long)]
    pub sticker_padding: Option<u32>,

    /// Print the effective settings as JSON and exit
    #[clap(long)]
    pub dump_config: bool,

    /// Log pipeline details to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = Args::parse();
    init_logger(args.verbose);

    let settings = effective_settings(&args)?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }
    settings.validate()?;

    let Some(input) = args.input.as_deref() else {
        bail!("No input file given");
    };
    let source = load_source(input, settings.source_target_size())
        .with_context(|| format!("Failed to load input file: {}", input.display()))?;
    log::info!(
        "rendering {}x{} icon (sticker: {})",
        settings.canvas_width,
        settings.canvas_height,
        settings.sticker_enabled
    );

    let png = render_to_png(&settings, Some(&source)).context("Failed to render icon")?;
    std::fs::write(&args.output, png)
        .with_context(|| format!("Failed to write output to {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Settings file (if any) with command line flags applied on top.
fn effective_settings(args: &Args) -> Result<RenderSettings> {
    let mut settings = match &args.config {
        Some(path) => read_settings(path)?,
        None => RenderSettings::default(),
    };

    if let Some(width) = args.width {
        settings.canvas_width = width;
    }
    if let Some(height) = args.height {
        settings.canvas_height = height;
    }
    if let Some(padding) = args.padding {
        settings.content_padding = padding;
    }
    if let Some(background) = &args.background {
        settings.background_color = parse_background(background)
            .with_context(|| format!("Invalid background color: {}", background))?;
    }
    if args.sticker {
        settings.sticker_enabled = true;
    }
    if args.no_sticker {
        settings.sticker_enabled = false;
    }
    if let Some(color) = &args.sticker_color {
        settings.sticker_color = CanvasColor::parse(color)
            .with_context(|| format!("Invalid sticker color: {}", color))?;
    }
    if let Some(sticker_padding) = args.sticker_padding {
        settings.sticker_padding = sticker_padding;
    }
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<RenderSettings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}
