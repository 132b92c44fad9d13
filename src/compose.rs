//! Transparent canvas and alpha-masked compositing.
//!
//! Pasting blends every channel, alpha included, toward the content pixel
//! by the content's own alpha `m`:
//!
//! ```text
//! out = div255(dst * (255 - m) + src * m)
//! ```
//!
//! On the transparent canvas this yields `div255(c * m)` for colour and
//! `div255(m * m)` for alpha, so soft edges get fainter than in the source.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use icon_scale::plan::{Placement, Size};

use crate::error::{PadError, PadResult};

/// Square RGBA canvas that starts fully transparent.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// New `side`×`side` canvas with every pixel `(0, 0, 0, 0)`.
    pub fn transparent(side: u32) -> Self {
        Self {
            image: RgbaImage::new(side, side),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    /// Composite `content` with its top-left corner at `at`, using the
    /// content's alpha channel as the mask. Pixels outside the canvas are dropped.
    pub fn paste_masked(&mut self, content: &RgbaImage, at: Placement) {
        let size = self.size();
        let x0 = at.x.max(0);
        let y0 = at.y.max(0);
        let x1 = (at.x + content.width() as i64).min(size.w as i64);
        let y1 = (at.y + content.height() as i64).min(size.h as i64);
        if x1 <= x0 || y1 <= y0 {
            tracing::warn!(x = at.x, y = at.y, "content lies entirely outside the canvas");
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let src = content.get_pixel((x - at.x) as u32, (y - at.y) as u32).0;
                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                dst.0 = blend_masked(dst.0, src);
            }
        }
    }

    /// Encode as PNG at `path`, whatever the extension says.
    pub fn save_png(&self, path: &Path) -> PadResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| PadError::encode(path, e))
    }
}

#[inline]
fn blend_masked(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let m = src[3] as u32;
    std::array::from_fn(|i| div255(dst[i] as u32 * (255 - m) + src[i] as u32 * m))
}

/// `v / 255` rounded to nearest, exact for `v <= 255 * 255`.
#[inline]
fn div255(v: u32) -> u8 {
    let t = v + 128;
    (((t >> 8) + t) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
        canvas.image.get_pixel(x, y).0
    }

    #[test]
    fn test_canvas_starts_transparent() {
        let canvas = Canvas::transparent(16);
        assert_eq!(canvas.size(), Size::square(16));
        assert!(canvas.image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_div255_rounds_to_nearest() {
        for v in 0..=255u32 * 255 {
            let want = (v as f64 / 255.0).round() as u32;
            assert_eq!(div255(v) as u32, want, "v = {}", v);
        }
    }

    #[test]
    fn test_paste_opaque_content() {
        let mut canvas = Canvas::transparent(10);
        let content = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        canvas.paste_masked(&content, Placement { x: 3, y: 4 });

        assert_eq!(pixel(&canvas, 3, 4), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 6, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 2, 4), [0, 0, 0, 0]);
        assert_eq!(pixel(&canvas, 7, 4), [0, 0, 0, 0]);
        assert_eq!(pixel(&canvas, 3, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn test_semi_transparent_pixels_use_alpha_as_mask() {
        let cases = [
            ([255, 0, 0, 128], [128, 0, 0, 64]),
            ([200, 100, 50, 128], [100, 50, 25, 64]),
            ([254, 254, 254, 9], [9, 9, 9, 0]),
            ([254, 254, 254, 17], [17, 17, 17, 1]),
            ([10, 20, 30, 255], [10, 20, 30, 255]),
            ([10, 20, 30, 0], [0, 0, 0, 0]),
        ];
        for (src, want) in cases {
            let mut canvas = Canvas::transparent(2);
            canvas.paste_masked(&RgbaImage::from_pixel(1, 1, Rgba(src)), Placement { x: 1, y: 1 });
            assert_eq!(pixel(&canvas, 1, 1), want, "src = {:?}", src);
            assert_eq!(pixel(&canvas, 0, 0), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_mask_blend_over_existing_pixels() {
        let mut canvas = Canvas::transparent(1);
        canvas.paste_masked(&RgbaImage::from_pixel(1, 1, Rgba([0, 0, 255, 255])), Placement { x: 0, y: 0 });
        canvas.paste_masked(&RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 128])), Placement { x: 0, y: 0 });
        // Blue keeps 255*127/255 of the old value; alpha is (255*127 + 128*128)/255.
        assert_eq!(pixel(&canvas, 0, 0), [128, 0, 127, 191]);
    }

    #[test]
    fn test_paste_clips_negative_origin() {
        let mut canvas = Canvas::transparent(8);
        let content = RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255]));
        canvas.paste_masked(&content, Placement { x: -2, y: -3 });

        assert_eq!(pixel(&canvas, 0, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&canvas, 1, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&canvas, 2, 0), [0, 0, 0, 0]);
        assert_eq!(pixel(&canvas, 0, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_paste_clips_far_edge() {
        let mut canvas = Canvas::transparent(8);
        let content = RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255]));
        canvas.paste_masked(&content, Placement { x: 6, y: 7 });

        assert_eq!(pixel(&canvas, 6, 7), [0, 255, 0, 255]);
        assert_eq!(pixel(&canvas, 7, 7), [0, 255, 0, 255]);
        assert_eq!(pixel(&canvas, 5, 7), [0, 0, 0, 0]);
        assert_eq!(pixel(&canvas, 7, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn test_paste_fully_off_canvas_is_noop() {
        let mut canvas = Canvas::transparent(8);
        let content = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        canvas.paste_masked(&content, Placement { x: 0, y: -100 });
        canvas.paste_masked(&content, Placement { x: 50, y: 0 });
        assert!(canvas.image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
