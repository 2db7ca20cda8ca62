//! Triangle.

use log::trace;

use crate::basics::PointD;
use crate::canvas::Canvas;
use crate::math::min_triangle_angle_deg;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{jitter_point, point_in_bounds, random_offset, random_point};

/// Triangle through three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub x3: i32,
    pub y3: i32,
}

impl Triangle {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        }
    }

    /// Returns `true` if no interior angle is below `min_angle` degrees.
    /// Triangles with coincident vertices are never well formed.
    pub fn is_well_formed(&self, min_angle: f64) -> bool {
        min_triangle_angle_deg(
            self.x1 as f64,
            self.y1 as f64,
            self.x2 as f64,
            self.y2 as f64,
            self.x3 as f64,
            self.y3 as f64,
        )
        .map_or(false, |a| a >= min_angle)
    }

    fn points(&self) -> [PointD; 3] {
        [
            PointD::new(self.x1 as f64, self.y1 as f64),
            PointD::new(self.x2 as f64, self.y2 as f64),
            PointD::new(self.x3 as f64, self.y3 as f64),
        ]
    }
}

impl Geometry for Triangle {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x1, y1) = random_point(canvas, rng);
        let x2 = canvas.clamp_x(x1.saturating_add(random_offset(canvas, rng)));
        let y2 = canvas.clamp_y(y1.saturating_add(random_offset(canvas, rng)));
        let x3 = canvas.clamp_x(x1.saturating_add(random_offset(canvas, rng)));
        let y3 = canvas.clamp_y(y1.saturating_add(random_offset(canvas, rng)));
        let mut t = Self::new(x1, y1, x2, y2, x3, y3);
        t.mutate(canvas, rng);
        t
    }

    /// Moves one vertex, retrying from the original while the result is a
    /// sliver. After `triangle_mutation_attempts` tries the last candidate
    /// is kept as is.
    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        let settings = canvas.settings();
        let original = *self;
        for _ in 0..settings.triangle_mutation_attempts.max(1) {
            *self = original;
            match rng.uniform_int(3) {
                0 => jitter_point(&mut self.x1, &mut self.y1, canvas, rng),
                1 => jitter_point(&mut self.x2, &mut self.y2, canvas, rng),
                _ => jitter_point(&mut self.x3, &mut self.y3, canvas, rng),
            }
            if self.is_well_formed(settings.triangle_min_angle) {
                return;
            }
        }
        trace!(
            "triangle still below {} degrees after {} attempts",
            settings.triangle_min_angle,
            settings.triangle_mutation_attempts
        );
    }

    fn path(&self) -> PathStorage {
        PathStorage::from_polygon(&self.points())
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<polygon {} points=\"{},{} {},{} {},{}\" />",
            attrs, self.x1, self.y1, self.x2, self.y2, self.x3, self.y3
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x1, self.y1, canvas)
            && point_in_bounds(self.x2, self.y2, canvas)
            && point_in_bounds(self.x3, self.y3, canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::worker_rng;
    use crate::scanline::covered_pixels;

    #[test]
    fn test_well_formed() {
        assert!(Triangle::new(0, 0, 10, 0, 5, 8).is_well_formed(15.0));
        assert!(!Triangle::new(0, 0, 20, 0, 10, 1).is_well_formed(15.0));
        assert!(!Triangle::new(3, 3, 3, 3, 9, 9).is_well_formed(0.0));
    }

    #[test]
    fn test_rasterize_right_triangle() {
        let canvas = Canvas::new(20, 20).unwrap();
        let t = Triangle::new(0, 0, 0, 10, 10, 10);
        let lines = t.rasterize(&canvas);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].y, 10);
        assert_eq!((lines[0].x1, lines[0].x2), (0, 10));
        let apex = lines.iter().find(|l| l.y == 0).unwrap();
        assert_eq!((apex.x1, apex.x2), (0, 0));
        let area = covered_pixels(&lines);
        assert_eq!(area, (1..=11).sum::<u64>());
    }

    #[test]
    fn test_mutation_prefers_well_formed() {
        let canvas = Canvas::new(100, 100).unwrap();
        let mut rng = worker_rng(41);
        let mut well_formed = 0;
        for _ in 0..100 {
            let mut t = Triangle::new(40, 40, 60, 40, 50, 58);
            t.mutate(&canvas, &mut rng);
            assert!(t.in_bounds(&canvas));
            if t.is_well_formed(15.0) {
                well_formed += 1;
            }
        }
        assert_eq!(well_formed, 100);
    }

    #[test]
    fn test_gives_up_on_degenerate_canvas() {
        // A one-pixel-high canvas cannot hold a proper triangle.
        let canvas = Canvas::new(30, 1).unwrap();
        let mut rng = worker_rng(42);
        let mut t = Triangle::random_new(&canvas, &mut rng);
        t.mutate(&canvas, &mut rng);
        assert!(t.in_bounds(&canvas));
        assert!(!t.is_well_formed(15.0));
    }

    #[test]
    fn test_random_in_bounds() {
        let canvas = Canvas::new(12, 40).unwrap();
        let mut rng = worker_rng(43);
        for _ in 0..200 {
            assert!(Triangle::random_new(&canvas, &mut rng).in_bounds(&canvas));
        }
    }

    #[test]
    fn test_svg() {
        assert_eq!(
            Triangle::new(1, 2, 3, 4, 5, 6).svg("x"),
            "<polygon x points=\"1,2 3,4 5,6\" />"
        );
    }
}
