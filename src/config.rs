//! # Configuration Module
//!
//! Parameters for a padding run and their validation. This is the common
//! interface between the CLI and the library: the CLI fills a [`PadConfig`],
//! the library consumes the resolved [`PadOptions`].
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Default | Description |
//! |-----------|------|---------|-------------|
//! | `input` | `PathBuf` | required | Source image path |
//! | `output` | `Option<PathBuf>` | `<stem>_padded<ext>` | Output path, always PNG-encoded |
//! | `target_size` | `u32` | 824 | Longest side of the resized content |
//! | `vertical_shift` | `i32` | 0 | Pixels to move the content up (negative moves it down) |
//!
//! The canvas is always [`CANVAS_SIDE`]×[`CANVAS_SIDE`].
//!
//! ## Examples
//!
//! ```rust
//! use icon_pad::config::PadConfig;
//! use std::path::PathBuf;
//!
//! let config = PadConfig::new("assets/icon.png").with_vertical_shift(20);
//! assert!(config.validate().is_ok());
//!
//! let options = config.to_pad_options();
//! assert_eq!(options.output, PathBuf::from("assets/icon_padded.png"));
//! assert_eq!(options.target_size, 824);
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{PadError, PadResult};

/// Side of the square output canvas, matching the macOS 1024pt icon grid.
pub const CANVAS_SIDE: u32 = 1024;

/// Default longest side of the icon content inside the canvas.
pub const DEFAULT_TARGET_SIZE: u32 = 824;

/// Largest accepted target size. Anything past the canvas is clipped anyway;
/// the bound keeps the intermediate resize buffer at 64 MiB or less.
pub const MAX_TARGET_SIZE: u32 = 4 * CANVAS_SIDE;

/// Suffix appended to the input stem when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_padded";

/// User-facing configuration for a padding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadConfig {
    /// Path of the source image. Must exist when the run starts.
    pub input: PathBuf,

    /// Where to write the result. When `None`, derived from `input` with
    /// [`default_output_path`]. The file is PNG regardless of its extension.
    pub output: Option<PathBuf>,

    /// Maximum size of the longest content side after resizing.
    ///
    /// Values above [`CANVAS_SIDE`] are allowed up to [`MAX_TARGET_SIZE`];
    /// the overflow is clipped.
    pub target_size: u32,

    /// Pixels to shift the content up from the mathematical center.
    ///
    /// Around 20 gives optical centering when a drop shadow is added later.
    pub vertical_shift: i32,
}

impl PadConfig {
    /// Creates a configuration for `input` with default target size and no shift.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            target_size: DEFAULT_TARGET_SIZE,
            vertical_shift: 0,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_target_size(mut self, target_size: u32) -> Self {
        self.target_size = target_size;
        self
    }

    pub fn with_vertical_shift(mut self, vertical_shift: i32) -> Self {
        self.vertical_shift = vertical_shift;
        self
    }

    /// Validates the configuration parameters.
    ///
    /// Existence of the input file is not checked here; that is reported
    /// separately as a not-found error when the run starts.
    pub fn validate(&self) -> PadResult<()> {
        if self.input.as_os_str().is_empty() {
            return Err(PadError::config("input", "", "must not be empty"));
        }

        validate_target_size(self.target_size)?;

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                return Err(PadError::config("output", "", "must not be empty"));
            }
        }

        Ok(())
    }

    /// Resolves defaults into the options consumed by [`crate::pad_icon`].
    pub fn to_pad_options(&self) -> PadOptions {
        PadOptions {
            input: self.input.clone(),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| default_output_path(&self.input)),
            target_size: self.target_size,
            vertical_shift: self.vertical_shift,
        }
    }
}

/// Checks `target_size` is within `1..=MAX_TARGET_SIZE`.
pub fn validate_target_size(target_size: u32) -> PadResult<()> {
    if target_size == 0 || target_size > MAX_TARGET_SIZE {
        return Err(PadError::config(
            "target_size",
            target_size.to_string(),
            format!("must be between 1 and {}", MAX_TARGET_SIZE),
        )
        .with_recovery_suggestion(format!("Use the default of {}", DEFAULT_TARGET_SIZE)));
    }
    Ok(())
}

/// Fully resolved parameters for one padding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target_size: u32,
    pub vertical_shift: i32,
}

/// `<dir>/<stem>_padded<.ext>` for `<dir>/<stem><.ext>`.
///
/// Inputs without an extension get no extension. Dotfiles such as `.png`
/// are treated as a stem, matching [`Path::file_stem`].
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
