// SPDX-License-Identifier: MIT
// CPU resampler built on fast_image_resize (SIMD-accelerated).
// RGBA8 in → RGBA8 out, Lanczos3 with premultiplied alpha, direct write into caller-provided dst buffer.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};

use crate::plan::Size;

#[derive(Debug)]
pub enum ScaleError {
    BufferTooSmall,
    EmptyImage,
    AllocationFailed { w: u32, h: u32 },
    Fir(fir::ResizeError),
    ImageBuf(fir::ImageBufferError),
}

impl From<fir::ResizeError> for ScaleError { fn from(e: fir::ResizeError) -> Self { Self::Fir(e) } }
impl From<fir::ImageBufferError> for ScaleError { fn from(e: fir::ImageBufferError) -> Self { Self::ImageBuf(e) } }

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::BufferTooSmall => write!(f, "Output buffer too small"),
            ScaleError::EmptyImage => write!(f, "Image has a zero-length side"),
            ScaleError::AllocationFailed { w, h } => write!(f, "Not enough memory for a {}x{} RGBA buffer", w, h),
            ScaleError::Fir(e) => write!(f, "Fast image resize error: {}", e),
            ScaleError::ImageBuf(e) => write!(f, "Image buffer error: {}", e),
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Fir(e) => Some(e),
            ScaleError::ImageBuf(e) => Some(e),
            _ => None,
        }
    }
}

/// Resampling options used for icons: Lanczos3, alpha-aware.
pub fn icon_resize_options() -> ResizeOptions {
    ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        // Premultiply so fully transparent pixels don't bleed black fringes into edges.
        .use_alpha(true)
}

/// Main resampling entry point.
/// `src_rgba` must be tightly packed (`src.w * 4` bytes per row).
/// `dst` must hold at least `out.w * out.h * 4` bytes; only that prefix is written.
pub fn resize_rgba_cpu(
    resizer: &mut Resizer,
    src_rgba: &[u8],
    src: Size,
    out: Size,
    dst: &mut [u8],
) -> Result<(), ScaleError> {
    if src.is_empty() || out.is_empty() {
        return Err(ScaleError::EmptyImage);
    }
    let dst_len = out.rgba_len().ok_or(ScaleError::AllocationFailed { w: out.w, h: out.h })?;
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall);
    }

    let src_view = TypedImageRef::<U8x4>::from_buffer(src.w, src.h, src_rgba)?;
    let mut dst_image = TypedImage::<U8x4>::from_buffer(out.w, out.h, &mut dst[..dst_len])?;

    resizer.resize_typed::<U8x4>(&src_view, &mut dst_image, &icon_resize_options())?;
    Ok(())
}

/// Convenience wrapper allocating the destination buffer and a one-shot resizer.
/// Same-size requests are copied as-is.
pub fn resize_rgba(src_rgba: &[u8], src: Size, out: Size) -> Result<Vec<u8>, ScaleError> {
    if src.is_empty() || out.is_empty() {
        return Err(ScaleError::EmptyImage);
    }
    let len = out.rgba_len().ok_or(ScaleError::AllocationFailed { w: out.w, h: out.h })?;
    let mut dst = Vec::new();
    dst.try_reserve_exact(len)
        .map_err(|_| ScaleError::AllocationFailed { w: out.w, h: out.h })?;

    if src == out {
        let packed = src_rgba.get(..len).ok_or(ScaleError::BufferTooSmall)?;
        dst.extend_from_slice(packed);
        return Ok(dst);
    }

    dst.resize(len, 0);
    let mut resizer = Resizer::new();
    resize_rgba_cpu(&mut resizer, src_rgba, src, out, &mut dst)?;
    Ok(dst)
}
