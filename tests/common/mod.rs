//! Shared helpers for the icon-pad integration tests.
//!
//! Fixture images are generated on the fly into a temporary directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

pub const OPAQUE_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Temporary directory holding fixture inputs and outputs.
pub fn workdir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write a solid-color PNG of `w`x`h` to `dir/name` and return its path.
pub fn solid_png(dir: &Path, name: &str, w: u32, h: u32, color: Rgba<u8>) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(w, h, color)
        .save_with_format(&path, ImageFormat::Png)
        .expect("write fixture");
    path
}

/// Bounding box `(x0, y0, x1, y1)` of pixels with nonzero alpha, exclusive end.
pub fn opaque_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x + 1, y + 1),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
        });
    }
    bounds
}

/// Open a result and return it as RGBA8.
pub fn open_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("open output").to_rgba8()
}
