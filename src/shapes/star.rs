//! Stars with a fixed number of points.

use crate::basics::PointD;
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{
    angle_in_range, jitter_angle, jitter_point, jitter_size, placed_polygon, point_in_bounds,
    radius_in_bounds, random_extent, random_point, ring,
};

/// `POINTS`-pointed star with outer radius `r`, first tip pointing up
/// before rotation by `angle` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star<const POINTS: u32> {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub angle: i32,
}

pub type FourPointedStar = Star<4>;
pub type Pentagram = Star<5>;
pub type Hexagram = Star<6>;

impl<const POINTS: u32> Star<POINTS> {
    pub fn new(x: i32, y: i32, r: i32, angle: i32) -> Self {
        Self { x, y, r, angle }
    }

    /// Inner (valley) radius as a fraction of the outer radius.
    pub fn inner_ratio() -> f64 {
        match POINTS {
            4 => 0.4,
            5 => 0.382,
            6 => 0.577,
            _ => 0.5,
        }
    }

    fn points(&self) -> Vec<PointD> {
        let outer = self.r as f64;
        let inner = outer * Self::inner_ratio();
        // Tips and valleys alternate on two interleaved rings.
        let tips: Vec<PointD> = ring(2 * POINTS, outer).step_by(2).collect();
        let valleys: Vec<PointD> = ring(2 * POINTS, inner).skip(1).step_by(2).collect();
        tips.into_iter()
            .zip(valleys)
            .flat_map(|(t, v)| [t, v])
            .collect()
    }
}

impl<const POINTS: u32> Geometry for Star<POINTS> {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        let (x, y) = random_point(canvas, rng);
        let r = canvas.clamp_radius(random_extent(canvas, rng));
        let angle = rng.uniform_int(360);
        Self::new(x, y, r, angle)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        match rng.uniform_int(3) {
            0 => jitter_point(&mut self.x, &mut self.y, canvas, rng),
            1 => self.r = canvas.clamp_radius(jitter_size(self.r, canvas, rng)),
            _ => self.angle = jitter_angle(self.angle, canvas, rng),
        }
    }

    fn path(&self) -> PathStorage {
        placed_polygon(&self.points(), self.x, self.y, self.angle)
    }

    fn svg(&self, attrs: &str) -> String {
        format!(
            "<polygon {} points=\"{}\" />",
            attrs,
            self.path().svg_points()
        )
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        point_in_bounds(self.x, self.y, canvas)
            && radius_in_bounds(self.r, canvas)
            && angle_in_range(self.angle)
    }
}
