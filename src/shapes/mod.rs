//! Concrete shape kinds.
//!
//! Each kind is a plain parameter struct implementing
//! [`Geometry`](crate::shape::Geometry). Centred kinds describe their
//! outline around the origin and place it with a rotation and a
//! translation; the helpers here keep that and the common perturbations
//! identical across kinds.

pub mod crescent;
pub mod ellipse;
pub mod quadratic;
pub mod quadrilateral;
pub mod rectangle;
pub mod regular_polygon;
pub mod rotated_rectangle;
pub mod star;
pub mod triangle;

pub use crescent::Crescent;
pub use ellipse::{Circle, Ellipse, RotatedEllipse};
pub use quadratic::QuadraticBezier;
pub use quadrilateral::Quadrilateral;
pub use rectangle::Rectangle;
pub use regular_polygon::{Hexagon, Octagon, Pentagon, RegularPolygon, Square};
pub use rotated_rectangle::RotatedRectangle;
pub use star::{FourPointedStar, Hexagram, Pentagram, Star};
pub use triangle::Triangle;

use crate::basics::{wrap_degrees, PointD, PI};
use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::trans_affine::TransAffine;

// ============================================================================
// Placement
// ============================================================================

/// Closed polygon through origin-relative `points`, rotated by `angle`
/// degrees and moved to `(x, y)`.
pub(crate) fn placed_polygon(points: &[PointD], x: i32, y: i32, angle: i32) -> PathStorage {
    PathStorage::from_polygon(points).transformed(&TransAffine::new_placement(
        x as f64,
        y as f64,
        angle as f64,
    ))
}

/// `n` points evenly spaced on a circle of radius `r`, the first pointing
/// up (towards negative y).
pub(crate) fn ring(n: u32, r: f64) -> impl Iterator<Item = PointD> {
    (0..n).map(move |i| {
        let a = -PI / 2.0 + i as f64 * 2.0 * PI / n as f64;
        PointD::new(r * a.cos(), r * a.sin())
    })
}

// ============================================================================
// Perturbation
// ============================================================================

/// New random position on the canvas.
pub(crate) fn random_point<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> (i32, i32) {
    (rng.uniform_int(canvas.width()), rng.uniform_int(canvas.height()))
}

/// Random initial size in `[1, initial_extent]`.
pub(crate) fn random_extent<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> i32 {
    rng.uniform_int(canvas.settings().initial_extent) + 1
}

/// Random offset in `[-extent/2, extent/2]` for vertices placed near an
/// anchor.
pub(crate) fn random_offset<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> i32 {
    let half = canvas.settings().initial_extent / 2;
    rng.uniform_int(2 * half + 1) - half
}

/// Move `(x, y)` by a normal step and clamp it onto the canvas.
pub(crate) fn jitter_point<R: RandomSource + ?Sized>(
    x: &mut i32,
    y: &mut i32,
    canvas: &Canvas,
    rng: &mut R,
) {
    let sigma = canvas.settings().position_sigma;
    *x = canvas.clamp_x(x.saturating_add(rng.jitter(sigma)));
    *y = canvas.clamp_y(y.saturating_add(rng.jitter(sigma)));
}

/// Normal step of a positional or size parameter, unclamped.
pub(crate) fn jitter_size<R: RandomSource + ?Sized>(v: i32, canvas: &Canvas, rng: &mut R) -> i32 {
    v.saturating_add(rng.jitter(canvas.settings().position_sigma))
}

/// Rotate an angle by a normal step, wrapped into `[0, 360)`.
pub(crate) fn jitter_angle<R: RandomSource + ?Sized>(angle: i32, canvas: &Canvas, rng: &mut R) -> i32 {
    wrap_degrees(angle.saturating_add(rng.jitter(canvas.settings().angle_sigma)))
}

// ============================================================================
// Bounds checks
// ============================================================================

#[inline]
pub(crate) fn point_in_bounds(x: i32, y: i32, canvas: &Canvas) -> bool {
    canvas.contains(x, y)
}

#[inline]
pub(crate) fn angle_in_range(angle: i32) -> bool {
    (0..360).contains(&angle)
}

#[inline]
pub(crate) fn radius_in_bounds(r: i32, canvas: &Canvas) -> bool {
    r >= 0 && r < canvas.width().min(canvas.height())
}
