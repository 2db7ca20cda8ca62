//! Free quadrilateral.

use crate::basics::{PointD, PointI};
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{jitter_point, point_in_bounds, random_point};

/// Four vertices in outline order. Self-intersecting outlines are allowed
/// and fill by the even-odd rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    pub points: [PointI; 4],
}

impl Quadrilateral {
    pub fn new(points: [PointI; 4]) -> Self {
        Self { points }
    }
}

impl Geometry for Quadrilateral {
    /// One vertex per quadrant around a random centre, so a new outline is
    /// always simple.
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (cx, cy) = random_point(canvas, rng);
        let half = (canvas.settings().initial_extent / 2).max(1);
        let signs = [(-1, -1), (1, -1), (1, 1), (-1, 1)];
        let mut points = [PointI::new(0, 0); 4];
        for (p, (sx, sy)) in points.iter_mut().zip(signs) {
            p.x = canvas.clamp_x(cx.saturating_add(sx * (rng.uniform_int(half) + 1)));
            p.y = canvas.clamp_y(cy.saturating_add(sy * (rng.uniform_int(half) + 1)));
        }
        Self::new(points)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        let i = rng.uniform_int(4) as usize;
        let p = &mut self.points[i];
        jitter_point(&mut p.x, &mut p.y, canvas, rng);
    }

    fn path(&self) -> PathStorage {
        let pts: Vec<PointD> = self
            .points
            .iter()
            .map(|p| PointD::new(p.x as f64, p.y as f64))
            .collect();
        PathStorage::from_polygon(&pts)
    }

    fn svg(&self, attrs: &str) -> String {
        let points: Vec<String> = self.points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        format!("<polygon {} points=\"{}\" />", attrs, points.join(" "))
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        self.points.iter().all(|p| point_in_bounds(p.x, p.y, canvas))
    }
}
