//! Blending scanlines into a pixel buffer.
//!
//! Optimizers compare candidate shapes against a target image by blending
//! them into a working copy. [`RenderTarget`] is the seam for that buffer;
//! it is implemented for `image::RgbaImage` with non-premultiplied source
//! over blending in 8-bit fixed point.

use image::{Rgba, RgbaImage};

use crate::path_storage::PathStorage;
use crate::rasterizer::rasterize_path;
use crate::scanline::{Scanline, COVER_FULL};
use crate::shape::{Geometry, Shape};
use crate::trans_affine::TransAffine;

const BASE_SHIFT: u32 = 8;
const BASE_MSB: u32 = 1 << (BASE_SHIFT - 1);

/// Fixed-point `a * b / 255`.
#[inline]
fn multiply(a: u8, b: u8) -> u8 {
    let t = a as u32 * b as u32 + BASE_MSB;
    (((t >> BASE_SHIFT) + t) >> BASE_SHIFT) as u8
}

/// Interpolate `p` towards `q` by `a`.
#[inline]
fn lerp(p: u8, q: u8, a: u8) -> u8 {
    let t = (q as i32 - p as i32) * a as i32 + BASE_MSB as i32 - (p > q) as i32;
    (p as i32 + (((t >> BASE_SHIFT) + t) >> BASE_SHIFT)) as u8
}

/// `p + q - p * q`, the alpha of `q` composited over `p`.
#[inline]
fn prelerp(p: u8, q: u8, a: u8) -> u8 {
    p.wrapping_add(q).wrapping_sub(multiply(p, a))
}

/// Effective 8-bit alpha of a color alpha scaled by a 16-bit run cover.
#[inline]
fn cover_alpha(alpha: u8, cover: u16) -> u8 {
    (alpha as u32 * cover as u32 / COVER_FULL as u32) as u8
}

// ============================================================================
// RenderTarget
// ============================================================================

/// Pixel buffer that accepts horizontal runs of uniform color.
pub trait RenderTarget {
    type Color;

    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Blend `color` over the inclusive run `[x1, x2]` of row `y` with
    /// run coverage `cover`. Pixels outside the buffer are ignored.
    fn blend_hline(&mut self, x1: i32, x2: i32, y: i32, color: &Self::Color, cover: u16);
}

impl RenderTarget for RgbaImage {
    type Color = Rgba<u8>;

    fn width(&self) -> i32 {
        self.dimensions().0 as i32
    }

    fn height(&self) -> i32 {
        self.dimensions().1 as i32
    }

    fn blend_hline(&mut self, x1: i32, x2: i32, y: i32, color: &Rgba<u8>, cover: u16) {
        let w = RenderTarget::width(self);
        if y < 0 || y >= RenderTarget::height(self) {
            return;
        }
        let x1 = x1.max(0);
        let x2 = x2.min(w - 1);
        if x1 > x2 {
            return;
        }
        let [cr, cg, cb, ca] = color.0;
        let alpha = cover_alpha(ca, cover);
        if alpha == 0 {
            return;
        }
        for x in x1..=x2 {
            let p = &mut self.get_pixel_mut(x as u32, y as u32).0;
            if alpha == 255 {
                *p = [cr, cg, cb, 255];
            } else {
                p[0] = lerp(p[0], cr, alpha);
                p[1] = lerp(p[1], cg, alpha);
                p[2] = lerp(p[2], cb, alpha);
                p[3] = prelerp(p[3], alpha, alpha);
            }
        }
    }
}

/// Blend every run of `lines` with `color`.
pub fn draw_scanlines<T: RenderTarget>(target: &mut T, lines: &[Scanline], color: &T::Color) {
    for line in lines {
        target.blend_hline(line.x1, line.x2, line.y, color, line.alpha);
    }
}

/// Rasterize `path` scaled by `scale` against the target's own
/// dimensions and blend it with `color`.
pub fn draw_path<T: RenderTarget>(target: &mut T, path: &PathStorage, color: &T::Color, scale: f64) {
    let lines = if scale == 1.0 {
        rasterize_path(path, target.width(), target.height())
    } else {
        let scaled = path.clone().transformed(&TransAffine::new_scaling_uniform(scale));
        rasterize_path(&scaled, target.width(), target.height())
    };
    draw_scanlines(target, &lines, color);
}

impl<G: Geometry> Shape<G> {
    /// Draw the shape into `target`, whose resolution may differ from the
    /// canvas the shape was built on by `scale`.
    pub fn draw<T: RenderTarget>(&mut self, target: &mut T, color: &T::Color, scale: f64) {
        let path = self.path();
        draw_path(target, &path, color, scale);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::shapes::Rectangle;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(10, 200, 0), 10);
        assert_eq!(lerp(10, 200, 255), 200);
        assert_eq!(lerp(200, 10, 255), 10);
        let mid = lerp(0, 255, 128);
        assert!((127..=129).contains(&mid));
    }

    #[test]
    fn test_cover_alpha() {
        assert_eq!(cover_alpha(255, COVER_FULL), 255);
        assert_eq!(cover_alpha(128, COVER_FULL), 128);
        assert_eq!(cover_alpha(255, 0), 0);
    }

    #[test]
    fn test_opaque_hline_overwrites() {
        let mut img = RgbaImage::from_pixel(8, 4, Rgba([0, 0, 0, 255]));
        img.blend_hline(2, 4, 1, &Rgba([200, 100, 50, 255]), COVER_FULL);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 1).0, [200, 100, 50, 255]);
        assert_eq!(img.get_pixel(4, 1).0, [200, 100, 50, 255]);
        assert_eq!(img.get_pixel(5, 1).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_translucent_hline_blends() {
        let mut img = RgbaImage::from_pixel(4, 1, Rgba([0, 0, 0, 255]));
        img.blend_hline(0, 3, 0, &Rgba([255, 255, 255, 128]), COVER_FULL);
        let p = img.get_pixel(0, 0).0;
        assert!((127..=129).contains(&p[0]));
        assert_eq!(p[3], 255);
    }

    #[test]
    fn test_hline_clipped_to_buffer() {
        let mut img = RgbaImage::new(4, 2);
        img.blend_hline(-5, 10, 0, &Rgba([9, 9, 9, 255]), COVER_FULL);
        img.blend_hline(0, 3, 5, &Rgba([1, 1, 1, 255]), COVER_FULL);
        assert!((0..4).all(|x| img.get_pixel(x, 0).0 == [9, 9, 9, 255]));
        assert!((0..4).all(|x| img.get_pixel(x, 1).0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_draw_rectangle_at_scale() {
        let canvas = Canvas::new(10, 10).unwrap();
        let mut shape = Shape::new(Rectangle::new(1, 1, 3, 2));
        let mut img = RgbaImage::new(20, 20);
        let red = Rgba([255, 0, 0, 255]);
        shape.draw(&mut img, &red, 2.0);
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(7, 4).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(2, 5).0, [0, 0, 0, 0]);
        // Drawing does not touch the canvas-resolution cache.
        assert!(!shape.has_cached_scanlines());
        assert!(!shape.scanlines(&canvas).is_empty());
    }

    #[test]
    fn test_draw_scanlines_matches_cache() {
        let canvas = Canvas::new(6, 6).unwrap();
        let mut shape = Shape::new(Rectangle::new(0, 0, 5, 5));
        let mut img = RgbaImage::new(6, 6);
        let lines = shape.scanlines(&canvas).to_vec();
        draw_scanlines(&mut img, &lines, &Rgba([1, 2, 3, 255]));
        assert!(img.pixels().all(|p| p.0 == [1, 2, 3, 255]));
    }
}
