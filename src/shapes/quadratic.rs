//! Filled quadratic Bézier segment.

use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{jitter_point, point_in_bounds, random_offset, random_point};

/// Region between a quadratic Bézier curve from `(x1, y1)` through control
/// point `(x2, y2)` to `(x3, y3)` and the chord closing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticBezier {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub x3: i32,
    pub y3: i32,
}

impl QuadraticBezier {
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
}

impl Geometry for QuadraticBezier {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x1, y1) = random_point(canvas, rng);
        let x2 = canvas.clamp_x(x1.saturating_add(random_offset(canvas, rng)));
        let y2 = canvas.clamp_y(y1.saturating_add(random_offset(canvas, rng)));
        let x3 = canvas.clamp_x(x2.saturating_add(random_offset(canvas, rng)));
        let y3 = canvas.clamp_y(y2.saturating_add(random_offset(canvas, rng)));
        Self::new(x1, y1, x2, y2, x3, y3)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(3) {
            0 => jitter_point(&mut self.x1, &mut self.y1, canvas, rng),
            1 => jitter_point(&mut self.x2, &mut self.y2, canvas, rng),
            _ => jitter_point(&mut self.x3, &mut self.y3, canvas, rng),
        }
    }

    fn path(&self) -> PathStorage {
        let mut path = PathStorage::new();
        path.move_to(self.x1 as f64, self.y1 as f64);
        path.curve3(
            self.x2 as f64,
            self.y2 as f64,
            self.x3 as f64,
            self.y3 as f64,
        );
        path.close_polygon();
        path
    }

    fn svg(&self, attrs: &str) -> String {
        format!("<path {} d=\"{}\" />", attrs, self.path().svg_path_data())
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

    #[test]
    fn test_svg() {
        let q = QuadraticBezier::new(0, 10, 5, 0, 10, 10);
        assert_eq!(q.svg("stroke=\"none\""), "<path stroke=\"none\" d=\"M 0 10 Q 5 0 10 10 Z\" />");
    }

    #[test]
    fn test_curve_stays_inside_control_triangle() {
        let canvas = Canvas::new(40, 40).unwrap();
        let q = QuadraticBezier::new(0, 20, 10, 0, 20, 20);
        let lines = q.rasterize(&canvas);
        assert!(!lines.is_empty());
        // The apex of the curve is halfway to the control point.
        let top = lines.iter().map(|l| l.y).min().unwrap();
        assert!((10..=11).contains(&top), "top {}", top);
        assert!(lines.iter().all(|l| l.y <= 20 && l.x1 >= 0 && l.x2 <= 20));
    }

    #[test]
    fn test_straight_curve_is_degenerate() {
        let canvas = Canvas::new(40, 40).unwrap();
        let q = QuadraticBezier::new(0, 5, 10, 5, 20, 5);
        let lines = q.rasterize(&canvas);
        assert_eq!(lines.len(), 1);
        assert_eq!((lines[0].y, lines[0].x1, lines[0].x2), (5, 0, 20));
    }

    #[test]
    fn test_mutations_stay_in_bounds() {
        let canvas = Canvas::new(16, 16).unwrap();
        let mut rng = worker_rng(91);
        let mut q = QuadraticBezier::random_new(&canvas, &mut rng);
        for _ in 0..300 {
            q.mutate(&canvas, &mut rng);
            assert!(q.in_bounds(&canvas));
        }
    }
}
