//! Elliptical kinds: axis-aligned ellipse, rotated ellipse and circle.
//!
//! All three share one outline: the polygon approximation from
//! [`crate::ellipse::Ellipse`] around the origin, placed at the centre.

use crate::canvas::Canvas;
use crate::ellipse;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;
use crate::trans_affine::TransAffine;

use super::{
    angle_in_range, jitter_angle, jitter_point, jitter_size, point_in_bounds, radius_in_bounds,
    random_extent, random_point,
};

fn outline(x: i32, y: i32, rx: i32, ry: i32, angle: i32, steps: u32) -> PathStorage {
    let mut path = PathStorage::new();
    path.concat_path(
        &mut ellipse::Ellipse::new(0.0, 0.0, rx as f64, ry as f64, steps),
        0,
    );
    path.transformed(&TransAffine::new_placement(x as f64, y as f64, angle as f64))
}

// ============================================================================
// Ellipse
// ============================================================================

/// Axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub x: i32,
    pub y: i32,
    pub rx: i32,
    pub ry: i32,
    steps: u32,
}

impl Ellipse {
    pub fn new(canvas: &Canvas, x: i32, y: i32, rx: i32, ry: i32) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            steps: canvas.settings().ellipse_steps,
        }
    }
}

impl Geometry for Ellipse {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let rx = canvas.clamp_x(random_extent(canvas, rng));
        let ry = canvas.clamp_y(random_extent(canvas, rng));
        Self::new(canvas, x, y, rx, ry)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(3) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            1 => self.rx = canvas.clamp_x(jitter_size(self.rx, canvas, rng)),
            _ => self.ry = canvas.clamp_y(jitter_size(self.ry, canvas, rng)),
        }
    }

    fn path(&self) -> PathStorage {
        outline(self.x, self.y, self.rx, self.ry, 0, self.steps)
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<ellipse {} cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" />",
            attrs, self.x, self.y, self.rx, self.ry
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas) && point_in_bounds(self.rx, self.ry, canvas)
    }
}

// ============================================================================
// RotatedEllipse
// ============================================================================

/// Ellipse with radii `rx`, `ry` turned by `angle` degrees about its centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedEllipse {
    pub x: i32,
    pub y: i32,
    pub rx: i32,
    pub ry: i32,
    pub angle: i32,
    steps: u32,
}

impl RotatedEllipse {
    pub fn new(canvas: &Canvas, x: i32, y: i32, rx: i32, ry: i32, angle: i32) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            angle,
            steps: canvas.settings().ellipse_steps,
        }
    }
}

impl Geometry for RotatedEllipse {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let rx = canvas.clamp_x(random_extent(canvas, rng));
        let ry = canvas.clamp_y(random_extent(canvas, rng));
        let angle = rng.uniform_int(360);
        Self::new(canvas, x, y, rx, ry, angle)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(3) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            1 => {
                self.rx = canvas.clamp_x(jitter_size(self.rx, canvas, rng));
                self.ry = canvas.clamp_y(jitter_size(self.ry, canvas, rng));
            }
            _ => self.angle = jitter_angle(self.angle, canvas, rng),
        }
    }

    fn path(&self) -> PathStorage {
        outline(self.x, self.y, self.rx, self.ry, self.angle, self.steps)
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<g transform=\"translate({} {}) rotate({}) scale({} {})\"><ellipse {} cx=\"0\" cy=\"0\" rx=\"1\" ry=\"1\" /></g>",
            self.x, self.y, self.angle, self.rx, self.ry, attrs
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas)
            && point_in_bounds(self.rx, self.ry, canvas)
            && angle_in_range(self.angle)
    }
}

// ============================================================================
// Circle
// ============================================================================

/// Circle of radius `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    steps: u32,
}

impl Circle {
    pub fn new(canvas: &Canvas, x: i32, y: i32, r: i32) -> Self {
        Self {
            x,
            y,
            r,
            steps: canvas.settings().ellipse_steps,
        }
    }
}

impl Geometry for Circle {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let r = canvas.clamp_radius(random_extent(canvas, rng));
        Self::new(canvas, x, y, r)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(2) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            _ => self.r = canvas.clamp_radius(jitter_size(self.r, canvas, rng)),
        }
    }

    fn path(&self) -> PathStorage {
        outline(self.x, self.y, self.r, self.r, 0, self.steps)
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<circle {} cx=\"{}\" cy=\"{}\" r=\"{}\" />",
            attrs, self.x, self.y, self.r
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas) && radius_in_bounds(self.r, canvas)
    }
}
