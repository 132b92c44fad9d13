use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use icon_pad::config::{DEFAULT_TARGET_SIZE, PadConfig};
use tracing::Level;

/// Pad an image onto a transparent 1024x1024 canvas, macOS icon style:
/// the artwork is resized to fit the icon grid (824px by default) and centered.
#[derive(Parser, Debug)]
#[command(name = "icon-pad")]
#[command(about = "Center an image on a transparent 1024x1024 canvas with macOS icon padding")]
#[command(long_about = "Resize an image to fit the macOS icon grid and center it on a transparent 1024x1024 canvas.
The result is always written as PNG, next to the input as <name>_padded<ext> unless --output is given.")]
struct Args {
    /// Source image
    #[arg(help = "Path to the source image (PNG, JPEG, ...)")]
    input: Option<PathBuf>,

    /// Vertical shift in pixels
    #[arg(allow_negative_numbers = true,
          help = "Pixels to shift the icon UP for optical centering (~20 if adding a shadow later)")]
    vertical_shift: Option<i32>,

    /// Output path
    #[arg(short, long, help = "Where to save the result (default: <input_stem>_padded<input_ext>)")]
    output: Option<PathBuf>,

    /// Inner content size
    #[arg(short, long, default_value_t = DEFAULT_TARGET_SIZE,
          help = "Longest side of the resized icon inside the canvas")]
    target_size: u32,

    /// Debug logging
    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let Some(input) = args.input else {
        print_usage();
        return Ok(());
    };

    let mut config = PadConfig::new(input)
        .with_target_size(args.target_size)
        .with_vertical_shift(args.vertical_shift.unwrap_or(0));
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    icon_pad::add_macos_padding(&config);
    Ok(())
}

fn print_usage() {
    println!("Usage: icon-pad <path_to_image.png> [optional_vertical_shift]");
    println!("Example: icon-pad my_icon.png");
}
