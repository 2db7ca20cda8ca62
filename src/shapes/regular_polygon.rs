//! Regular polygons with a fixed number of sides.

use crate::basics::PointD;
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::shape::Geometry;

use super::{
    angle_in_range, jitter_angle, jitter_point, jitter_size, placed_polygon, point_in_bounds,
    radius_in_bounds, random_extent, random_point, ring,
};

/// Regular `SIDES`-gon with circumradius `r` centred on `(x, y)`, first
/// vertex pointing up before rotation by `angle` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularPolygon<const SIDES: u32> {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub angle: i32,
}

pub type Square = RegularPolygon<4>;
pub type Pentagon = RegularPolygon<5>;
pub type Hexagon = RegularPolygon<6>;
pub type Octagon = RegularPolygon<8>;

impl<const SIDES: u32> RegularPolygon<SIDES> {
    pub fn new(x: i32, y: i32, r: i32, angle: i32) -> Self {
        Self { x, y, r, angle }
    }

    pub fn sides(&self) -> u32 {
        SIDES
    }
}

impl<const SIDES: u32> Geometry for RegularPolygon<SIDES> {
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
        let pts: Vec<PointD> = ring(SIDES, self.r as f64).collect();
        placed_polygon(&pts, self.x, self.y, self.angle)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::worker_rng;

    #[test]
    fn test_vertex_count() {
        assert_eq!(Square::new(10, 10, 5, 0).path().polygons()[0].len(), 4);
        assert_eq!(Pentagon::new(10, 10, 5, 0).path().polygons()[0].len(), 5);
        assert_eq!(Hexagon::new(10, 10, 5, 0).path().polygons()[0].len(), 6);
        assert_eq!(Octagon::new(10, 10, 5, 0).sides(), 8);
    }

    #[test]
    fn test_square_rotated_45_is_axis_aligned() {
        let s = Square::new(20, 20, 10, 45);
        let b = s.path().bounding_rect().unwrap();
        let half = 10.0 / 2f64.sqrt();
        assert!((b.x1 - (20.0 - half)).abs() < 1e-9);
        assert!((b.y2 - (20.0 + half)).abs() < 1e-9);
    }

    #[test]
    fn test_hexagon_centre_row() {
        let canvas = Canvas::new(40, 40).unwrap();
        let h = Hexagon::new(20, 20, 10, 0);
        let lines = h.rasterize(&canvas);
        let centre: Vec<_> = lines.iter().filter(|l| l.y == 20).collect();
        // Pointy top: the flat sides sit at x = 20 +- 10 cos 30.
        assert_eq!(centre.len(), 1);
        assert_eq!((centre[0].x1, centre[0].x2), (11, 28));
        assert_eq!(lines.iter().map(|l| l.y).min(), Some(10));
        let bottom = lines.iter().map(|l| l.y).max().unwrap();
        assert!(bottom == 29 || bottom == 30);
    }

    #[test]
    fn test_mutations_stay_in_bounds() {
        let canvas = Canvas::new(25, 15).unwrap();
        let mut rng = worker_rng(61);
        let mut p = Pentagon::random_new(&canvas, &mut rng);
        for _ in 0..300 {
            p.mutate(&canvas, &mut rng);
            assert!(p.in_bounds(&canvas), "{:?}", p);
        }
    }

    #[test]
    fn test_svg_lists_vertices() {
        let s = Square::new(10, 10, 5, 0);
        assert_eq!(
            s.svg("fill=\"blue\""),
            "<polygon fill=\"blue\" points=\"10,5 15,10 10,15 5,10\" />"
        );
    }
}
