// SPDX-License-Identifier: MIT
//! # icon-scale: Fit-and-Center Scaling for Icon Padding
//!
//! This crate provides the geometry and resampling behind icon padding: fit a
//! source image inside a target box without distorting it, then place it at the
//! center of a larger square canvas.
//!
//! ## Key Components
//!
//! - [`plan`]: scale factor, content size and placement computation
//! - [`cpu`]: RGBA resampling using SIMD-accelerated Lanczos3 via fast_image_resize
//!
//! ## Usage Example
//!
//! ```rust
//! use icon_scale::{cpu::resize_rgba, plan::{build_plan, Size}};
//!
//! let input = Size::new(2000, 1000);
//! let plan = build_plan(input, 824, 1024, 0);
//! assert_eq!(plan.content, Size::new(824, 412));
//! assert_eq!((plan.position.x, plan.position.y), (100, 306));
//!
//! let src = vec![255u8; input.rgba_len().unwrap()];
//! let resized = resize_rgba(&src, input, plan.content)?;
//! assert_eq!(Some(resized.len()), plan.content.rgba_len());
//! # Ok::<(), icon_scale::cpu::ScaleError>(())
//! ```

pub mod cpu;
pub mod plan;
