//! Axis-aligned rectangle.

use crate::basics::{PointD, RectI};
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::rasterizer::rasterize_rect;
use crate::scanline::Scanline;
use crate::shape::Geometry;

use super::{jitter_point, point_in_bounds, random_extent, random_point};

/// Rectangle given by two opposite corners, inclusive on both ends.
///
/// Mutation can leave the corners in either order; [`Geometry::normalize`]
/// restores `x1 <= x2`, `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rectangle {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Corners in sorted order.
    pub fn bounds(&self) -> RectI {
        let mut r = RectI::new(self.x1, self.y1, self.x2, self.y2);
        r.normalize();
        r
    }
}

impl Geometry for Rectangle {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x1, y1) = random_point(canvas, rng);
        let x2 = canvas.clamp_x(x1.saturating_add(random_extent(canvas, rng)));
        let y2 = canvas.clamp_y(y1.saturating_add(random_extent(canvas, rng)));
        Self::new(x1, y1, x2, y2)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(2) {
            0 => jitter_point(&mut self.x1, &mut self.y1, canvas, rng),
            _ => jitter_point(&mut self.x2, &mut self.y2, canvas, rng),
        }
    }

    fn normalize(&mut self) {
        let r = self.bounds();
        *self = Self::new(r.x1, r.y1, r.x2, r.y2);
    }

    fn path(&self) -> PathStorage {
        let r = self.bounds();
        let (x1, y1, x2, y2) = (r.x1 as f64, r.y1 as f64, r.x2 as f64, r.y2 as f64);
        PathStorage::from_polygon(&[
            PointD::new(x1, y1),
            PointD::new(x1, y2),
            PointD::new(x2, y2),
            PointD::new(x2, y1),
        ])
    }

    fn svg(&self, attrs: &str) -> String {
        let r = self.bounds();
        format!(
            "<rect {} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
            attrs,
            r.x1,
            r.y1,
            r.x2 - r.x1 + 1,
            r.y2 - r.y1 + 1
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x1, self.y1, canvas) && point_in_bounds(self.x2, self.y2, canvas)
    }

    /// One full-width run per row; no edge intersection needed.
    fn rasterize(&self, canvas: &Canvas) -> Vec<Scanline> {
        let r = self.bounds();
        if r.y2 < 0 || r.y1 >= canvas.height() {
            return Vec::new();
        }
        rasterize_rect(&RectI::new(
            canvas.clamp_x(r.x1),
            canvas.clamp_y(r.y1),
            canvas.clamp_x(r.x2),
            canvas.clamp_y(r.y2),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::worker_rng;
    use crate::rasterizer::rasterize_path;
    use crate::scanline::COVER_FULL;
    use crate::shape::Shape;

    fn canvas() -> Canvas {
        Canvas::new(20, 20).unwrap()
    }

    #[test]
    fn test_rasterize_exact_rows() {
        let lines = Rectangle::new(2, 3, 9, 7).rasterize(&canvas());
        assert_eq!(lines.len(), 5);
        for (i, l) in lines.iter().enumerate() {
            assert_eq!(l.y, 3 + i as i32);
            assert_eq!((l.x1, l.x2, l.alpha), (2, 9, COVER_FULL));
        }
    }

    #[test]
    fn test_fast_path_matches_generic() {
        let c = canvas();
        for r in [
            Rectangle::new(2, 3, 9, 7),
            Rectangle::new(9, 7, 2, 3),
            Rectangle::new(0, 0, 19, 19),
            Rectangle::new(5, 5, 5, 5),
            Rectangle::new(4, 2, 4, 11),
            Rectangle::new(-4, 15, 30, 25),
        ] {
            let mut fast = r.rasterize(&c);
            let mut generic = rasterize_path(&r.path(), c.width(), c.height());
            fast.sort();
            generic.sort();
            assert_eq!(fast, generic, "{:?}", r);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut shape = Shape::new(Rectangle::new(9, 7, 2, 3));
        let first = shape.path().polygons();
        let second = shape.path().polygons();
        assert_eq!(first, second);
        assert_eq!(*shape.geometry(), Rectangle::new(2, 3, 9, 7));
    }

    #[test]
    fn test_svg_uses_sorted_corners() {
        let r = Rectangle::new(9, 7, 2, 3);
        assert_eq!(
            r.svg("fill=\"#fff\""),
            "<rect fill=\"#fff\" x=\"2\" y=\"3\" width=\"8\" height=\"5\" />"
        );
        assert_eq!(
            Rectangle::new(4, 4, 4, 4).svg(""),
            "<rect  x=\"4\" y=\"4\" width=\"1\" height=\"1\" />"
        );
    }

    #[test]
    fn test_random_and_mutate_stay_in_bounds() {
        let c = Canvas::new(24, 9).unwrap();
        let mut rng = worker_rng(11);
        for _ in 0..50 {
            let mut r = Rectangle::random_new(&c, &mut rng);
            assert!(r.in_bounds(&c));
            for _ in 0..50 {
                r.mutate(&c, &mut rng);
                assert!(r.in_bounds(&c), "{:?}", r);
            }
        }
    }

    #[test]
    fn test_mutate_moves_one_corner() {
        let c = canvas();
        let mut rng = worker_rng(3);
        for _ in 0..100 {
            let before = Rectangle::new(5, 5, 12, 12);
            let mut r = before;
            r.mutate(&c, &mut rng);
            let first_same = (r.x1, r.y1) == (before.x1, before.y1);
            let second_same = (r.x2, r.y2) == (before.x2, before.y2);
            assert!(first_same || second_same);
        }
    }
}
