// SPDX-License-Identifier: MIT
//! # Fit-and-Center Plan Computation
//!
//! This module computes where a source image lands on a square canvas: the
//! uniform scale factor, the resized content size and the signed placement.
//!
//! ## Geometry
//!
//! 1. **Scale**: `min(target / width, target / height)`, so the longest side
//!    becomes exactly `target`. Small sources are upscaled.
//! 2. **Content size**: each side is `round(side * scale)`, clamped to 1px.
//! 3. **Placement**: `(canvas - content) / 2` on both axes, minus the vertical
//!    shift on the y axis. Division floors, so content larger than the canvas
//!    gets a negative origin instead of drifting toward zero.
//!
//! Placement is signed and never clamped. Whatever lies outside the canvas is
//! clipped by the compositor.

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Square size with both sides equal to `side`.
    pub fn square(side: u32) -> Self {
        Self { w: side, h: side }
    }

    /// Number of bytes of a tightly packed RGBA8 buffer of this size,
    /// or `None` if it does not fit in `usize`.
    pub fn rgba_len(&self) -> Option<usize> {
        (self.w as usize)
            .checked_mul(self.h as usize)?
            .checked_mul(4)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Top-left corner of the content on the canvas. May be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

/// Result of [`build_plan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadPlan {
    pub input: Size,
    pub canvas: Size,
    pub scale: f64,
    pub content: Size,
    pub position: Placement,
}

impl PadPlan {
    /// True if some part of the content falls outside the canvas.
    pub fn is_clipped(&self) -> bool {
        let (cw, ch) = (self.canvas.w as i64, self.canvas.h as i64);
        self.position.x < 0
            || self.position.y < 0
            || self.position.x + self.content.w as i64 > cw
            || self.position.y + self.content.h as i64 > ch
    }

    /// Transparent margins `(left, top, right, bottom)`, negative when clipped.
    pub fn margins(&self) -> (i64, i64, i64, i64) {
        let right = self.canvas.w as i64 - self.position.x - self.content.w as i64;
        let bottom = self.canvas.h as i64 - self.position.y - self.content.h as i64;
        (self.position.x, self.position.y, right, bottom)
    }
}

/// Build the fit-and-center plan for `input` on a `canvas_side` square canvas.
///
/// `target_side` bounds the longest side of the resized content. A positive
/// `vertical_shift` moves the content up.
pub fn build_plan(input: Size, target_side: u32, canvas_side: u32, vertical_shift: i32) -> PadPlan {
    let scale = fit_scale(input, target_side);
    let content = scaled_size(input, scale);
    let canvas = Size::square(canvas_side);

    let x = center_offset(canvas.w, content.w);
    let y = center_offset(canvas.h, content.h) - vertical_shift as i64;

    tracing::debug!(
        input_w = input.w,
        input_h = input.h,
        scale,
        content_w = content.w,
        content_h = content.h,
        x,
        y,
        "built pad plan"
    );

    PadPlan {
        input,
        canvas,
        scale,
        content,
        position: Placement { x, y },
    }
}

/// Uniform factor making the longest side of `input` equal to `target_side`.
fn fit_scale(input: Size, target_side: u32) -> f64 {
    // Zero-sized inputs are rejected upstream; clamp so the math stays finite.
    let (w, h) = (input.w.max(1) as f64, input.h.max(1) as f64);
    let t = target_side as f64;
    (t / w).min(t / h)
}

fn scaled_size(input: Size, scale: f64) -> Size {
    Size {
        w: ((input.w as f64 * scale).round() as u32).max(1),
        h: ((input.h as f64 * scale).round() as u32).max(1),
    }
}

#[inline]
fn center_offset(outer: u32, inner: u32) -> i64 {
    (outer as i64 - inner as i64).div_euclid(2)
}
