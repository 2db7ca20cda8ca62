//! Crescent: a disc with a half-ellipse bite taken out of one side.

use crate::basics::{clamp, PointD, PI};
use crate::canvas::Canvas;
use crate::ellipse;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{
    angle_in_range, jitter_angle, jitter_point, jitter_size, placed_polygon, point_in_bounds,
    radius_in_bounds, random_extent, random_point,
};

/// Crescent of radius `r` and horn-to-horn width `thickness` at its
/// widest, turned by `angle` degrees.
///
/// Unrotated, the horns point up and down and the body bulges to the left:
/// the outline follows the left half of the circle from the top horn to the
/// bottom one, then returns along the left half of an ellipse with radii
/// `(r - thickness, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crescent {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub thickness: i32,
    pub angle: i32,
    steps: u32,
}

impl Crescent {
    pub fn new(canvas: &Canvas, x: i32, y: i32, r: i32, thickness: i32, angle: i32) -> Self {
        Self {
            x,
            y,
            r,
            thickness,
            angle,
            steps: canvas.settings().ellipse_steps,
        }
    }

    /// Segments per half arc.
    fn arc_steps(&self) -> u32 {
        let r = self.r as f64;
        (ellipse::Ellipse::new(0.0, 0.0, r, r, self.steps).num_steps() / 2).max(2)
    }
}

impl Geometry for Crescent {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let r = canvas.clamp_radius(random_extent(canvas, rng));
        let thickness = clamp(rng.uniform_int(r) + 1, 0, r);
        let angle = rng.uniform_int(360);
        Self::new(canvas, x, y, r, thickness, angle)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(4) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            1 => {
                self.r = canvas.clamp_radius(jitter_size(self.r, canvas, rng));
                self.thickness = self.thickness.min(self.r);
            }
            2 => self.thickness = clamp(jitter_size(self.thickness, canvas, rng), 0, self.r),
            _ => self.angle = jitter_angle(self.angle, canvas, rng),
        }
    }

    fn path(&self) -> PathStorage {
        let n = self.arc_steps();
        let r = self.r as f64;
        let inner = (self.r - self.thickness) as f64;
        let mut pts = Vec::with_capacity(2 * n as usize);
        for i in 0..=n {
            let t = PI * i as f64 / n as f64;
            pts.push(PointD::new(-r * t.sin(), -r * t.cos()));
        }
        for i in 1..n {
            let t = PI * i as f64 / n as f64;
            pts.push(PointD::new(-inner * t.sin(), r * t.cos()));
        }
        placed_polygon(&pts, self.x, self.y, self.angle)
    }

    fn svg(&self, attrs: &str) -> String {
        let inner = self.r - self.thickness;
        format!(
            "<g transform=\"translate({} {}) rotate({})\"><path {} d=\"M 0 {} A {} {} 0 0 0 0 {} A {} {} 0 0 1 0 {} Z\" /></g>",
            self.x, self.y, self.angle, attrs, -self.r, self.r, self.r, self.r, inner, self.r, -self.r
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas)
            && radius_in_bounds(self.r, canvas)
            && (0..=self.r).contains(&self.thickness)
            && angle_in_range(self.angle)
    }
}
