//! # Icon Padding Library
//!
//! Resizes an image and centers it on a transparent 1024×1024 canvas,
//! following the macOS icon grid where the artwork occupies about 824px and
//! the rest is transparent padding.
//!
//! ## Architecture
//!
//! - `config`: parameters, defaults and validation
//! - `compose`: transparent canvas and alpha-masked compositing
//! - `error`: error types with operation context
//! - `icon_scale` (workspace crate): geometry and Lanczos resampling
//!
//! The pipeline is linear: open → plan → resize → composite → save.
//!
//! ## Example
//!
//! ```rust,no_run
//! use icon_pad::{config::PadConfig, pad_icon};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = PadConfig::new("icon.png").with_vertical_shift(20).to_pad_options();
//! let outcome = pad_icon(&options)?;
//! println!("wrote {}", outcome.output.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use image::{ImageReader, RgbaImage};
use icon_scale::cpu::{ScaleError, resize_rgba};
use icon_scale::plan::{Placement, Size, build_plan};

pub mod compose;
pub mod config;
pub mod error;

use compose::Canvas;
use config::{CANVAS_SIDE, PadConfig, PadOptions, validate_target_size};

/// Re-export error types for convenience
pub use error::{HasRecoverySuggestion, HasSeverity, PadError, PadResult};

/// What a successful padding run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOutcome {
    /// Path the PNG was written to.
    pub output: PathBuf,
    /// Canvas dimensions, always [`CANVAS_SIDE`] square.
    pub canvas: Size,
    /// Dimensions of the resized content.
    pub content: Size,
    /// Top-left corner of the content on the canvas.
    pub position: Placement,
}

/// Load `options.input`, fit it into `options.target_size`, center it on a
/// transparent canvas and save the canvas as PNG to `options.output`.
///
/// A missing input is reported as [`PadError::InputNotFound`] before any
/// decoding is attempted. A target size outside `1..=MAX_TARGET_SIZE` is a
/// [`PadError::Config`].
pub fn pad_icon(options: &PadOptions) -> PadResult<PadOutcome> {
    validate_target_size(options.target_size)?;
    if !options.input.exists() {
        return Err(PadError::input_not_found(&options.input));
    }

    let original = load_rgba(options)?;
    let input = Size::new(original.width(), original.height());
    if input.is_empty() {
        return Err(PadError::resize(ScaleError::EmptyImage)
            .with_context(format!("source {}x{}", input.w, input.h)));
    }

    let plan = build_plan(input, options.target_size, CANVAS_SIDE, options.vertical_shift);
    if plan.is_clipped() {
        let (left, top, right, bottom) = plan.margins();
        tracing::warn!(left, top, right, bottom, "content extends past the canvas and will be clipped");
    }

    let resized = resize_rgba(original.as_raw(), input, plan.content).map_err(|e| {
        PadError::resize(e).with_context(format!(
            "{}x{} -> {}x{}",
            input.w, input.h, plan.content.w, plan.content.h
        ))
    })?;
    let resized = RgbaImage::from_raw(plan.content.w, plan.content.h, resized)
        .ok_or(ScaleError::BufferTooSmall)?;

    let mut canvas = Canvas::transparent(CANVAS_SIDE);
    canvas.paste_masked(&resized, plan.position);
    canvas.save_png(&options.output)?;

    tracing::info!(output = %options.output.display(), "saved padded icon");

    Ok(PadOutcome {
        output: options.output.clone(),
        canvas: plan.canvas,
        content: plan.content,
        position: plan.position,
    })
}

/// Decode by content rather than extension, then convert to RGBA8.
fn load_rgba(options: &PadOptions) -> PadResult<RgbaImage> {
    let reader = ImageReader::open(&options.input)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| PadError::io("open_input", e).with_context(options.input.display().to_string()))?;
    let decoded = reader
        .decode()
        .map_err(|e| PadError::decode(&options.input, e))?;
    tracing::debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "decoded source image"
    );
    Ok(decoded.to_rgba8())
}

/// Program-level entry: validate, pad, and report the result on stdout.
///
/// Failures are printed rather than returned; `None` means nothing was written.
pub fn add_macos_padding(config: &PadConfig) -> Option<PadOutcome> {
    if let Err(err) = config.validate() {
        println!("An error occurred: {}", err);
        return None;
    }

    match pad_icon(&config.to_pad_options()) {
        Ok(outcome) => {
            println!("Success! Saved padded icon to: {}", outcome.output.display());
            println!(
                "Dimensions: {}x{} (Content: {}x{})",
                outcome.canvas.w, outcome.canvas.h, outcome.content.w, outcome.content.h
            );
            Some(outcome)
        }
        Err(err) if err.is_not_found() => {
            println!("Error: {}", err);
            None
        }
        Err(err) => {
            if let Some(suggestion) = err.recovery_suggestion() {
                tracing::debug!(category = err.category(), suggestion, "padding failed");
            }
            println!("An error occurred: {}", err);
            None
        }
    }
}
