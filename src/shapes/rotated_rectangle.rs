//! Rectangle rotated about its centre.

use crate::basics::PointD;
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{
    angle_in_range, jitter_angle, jitter_point, jitter_size, placed_polygon, point_in_bounds,
    random_extent, random_point,
};

/// Rectangle centred on `(x, y)` with full side lengths `sx`, `sy`, turned
/// by `angle` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedRectangle {
    pub x: i32,
    pub y: i32,
    pub sx: i32,
    pub sy: i32,
    pub angle: i32,
}

impl RotatedRectangle {
    pub fn new(x: i32, y: i32, sx: i32, sy: i32, angle: i32) -> Self {
        Self { x, y, sx, sy, angle }
    }
}

impl Geometry for RotatedRectangle {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let sx = canvas.clamp_x(random_extent(canvas, rng));
        let sy = canvas.clamp_y(random_extent(canvas, rng));
        let angle = rng.uniform_int(360);
        let mut r = Self::new(x, y, sx, sy, angle);
        r.mutate(canvas, rng);
        r
    }

    /// Moves the centre or resizes both sides. The third draw rotates only
    /// when `ShapeSettings::rotated_rectangle_rotates` is set and is a
    /// no-op otherwise, so by default a third of all mutations leave the
    /// rectangle unchanged.
    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(3) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            1 => {
                self.sx = canvas.clamp_x(jitter_size(self.sx, canvas, rng));
                self.sy = canvas.clamp_y(jitter_size(self.sy, canvas, rng));
            }
            _ => {
                if canvas.settings().rotated_rectangle_rotates {
                    self.angle = jitter_angle(self.angle, canvas, rng);
                }
            }
        }
    }

    fn path(&self) -> PathStorage {
        let hx = (self.sx / 2) as f64;
        let hy = (self.sy / 2) as f64;
        placed_polygon(
            &[
                PointD::new(-hx, -hy),
                PointD::new(-hx, hy),
                PointD::new(hx, hy),
                PointD::new(hx, -hy),
            ],
            self.x,
            self.y,
            self.angle,
        )
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<g transform=\"translate({} {}) rotate({}) scale({} {})\"><rect {} x=\"-0.5\" y=\"-0.5\" width=\"1\" height=\"1\" /></g>",
            self.x, self.y, self.angle, self.sx, self.sy, attrs
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas)
            && point_in_bounds(self.sx, self.sy, canvas)
            && angle_in_range(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::worker_rng;
    use crate::settings::ShapeSettings;
    use crate::shapes::Rectangle;

    #[test]
    fn test_unrotated_matches_straight_rectangle() {
        let canvas = Canvas::new(30, 30).unwrap();
        let rotated = RotatedRectangle::new(10, 12, 8, 6, 0);
        let straight = Rectangle::new(6, 9, 14, 15);
        let mut a = rotated.rasterize(&canvas);
        let mut b = straight.rasterize(&canvas);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_quarter_turn_swaps_extents() {
        let canvas = Canvas::new(40, 40).unwrap();
        let r = RotatedRectangle::new(20, 20, 12, 4, 90);
        let bounds = r.path().bounding_rect().unwrap();
        assert!((bounds.x2 - bounds.x1 - 4.0).abs() < 1e-9);
        assert!((bounds.y2 - bounds.y1 - 12.0).abs() < 1e-9);
        assert!(!r.rasterize(&canvas).is_empty());
    }

    #[test]
    fn test_odd_sides_use_integer_halves() {
        let r = RotatedRectangle::new(10, 10, 5, 3, 0);
        let b = r.path().bounding_rect().unwrap();
        assert_eq!((b.x1, b.y1, b.x2, b.y2), (8.0, 9.0, 12.0, 11.0));
    }

    #[test]
    fn test_svg() {
        let r = RotatedRectangle::new(3, 4, 5, 6, 45);
        assert_eq!(
            r.svg("fill=\"red\""),
            "<g transform=\"translate(3 4) rotate(45) scale(5 6)\"><rect fill=\"red\" x=\"-0.5\" y=\"-0.5\" width=\"1\" height=\"1\" /></g>"
        );
    }

    #[test]
    fn test_angle_fixed_by_default() {
        let canvas = Canvas::new(50, 50).unwrap();
        let mut rng = worker_rng(21);
        let mut r = RotatedRectangle::random_new(&canvas, &mut rng);
        let angle = r.angle;
        for _ in 0..200 {
            r.mutate(&canvas, &mut rng);
            assert_eq!(r.angle, angle);
            assert!(r.in_bounds(&canvas));
        }
    }

    #[test]
    fn test_angle_changes_when_enabled() {
        let settings = ShapeSettings {
            rotated_rectangle_rotates: true,
            ..Default::default()
        };
        let canvas = Canvas::with_settings(50, 50, settings).unwrap();
        let mut rng = worker_rng(22);
        let mut r = RotatedRectangle::new(25, 25, 10, 10, 0);
        let mut rotated = false;
        for _ in 0..200 {
            r.mutate(&canvas, &mut rng);
            assert!(r.in_bounds(&canvas));
            rotated |= r.angle != 0;
        }
        assert!(rotated);
    }

    #[test]
    fn test_sizes_clamped_on_small_canvas() {
        let canvas = Canvas::new(4, 3).unwrap();
        let mut rng = worker_rng(23);
        for _ in 0..100 {
            let r = RotatedRectangle::random_new(&canvas, &mut rng);
            assert!(r.in_bounds(&canvas), "{:?}", r);
        }
    }
}
