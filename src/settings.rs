//! Tunable constants for shape construction and mutation.
//!
//! One `ShapeSettings` value is attached to a [`Canvas`](crate::canvas::Canvas)
//! and read by every shape kind; it never changes during a run.

use crate::error::ShapeError;

/// Construction and mutation parameters shared by all shape kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSettings {
    /// Standard deviation of positional and size perturbations (pixels).
    pub position_sigma: f64,
    /// Standard deviation of angular perturbations (degrees).
    pub angle_sigma: f64,
    /// Upper bound (exclusive) of the random extent of a new shape.
    pub initial_extent: i32,
    /// Triangles with a smaller interior angle (degrees) are re-mutated.
    pub triangle_min_angle: f64,
    /// Mutation retries before a sliver triangle is accepted anyway.
    pub triangle_mutation_attempts: u32,
    /// Polygon steps for ellipse outlines; 0 picks them from the radius.
    pub ellipse_steps: u32,
    /// Enables the rotation branch of rotated-rectangle mutation, which is
    /// unreachable by default.
    pub rotated_rectangle_rotates: bool,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            position_sigma: 16.0,
            angle_sigma: 32.0,
            initial_extent: 32,
            triangle_min_angle: 15.0,
            triangle_mutation_attempts: 64,
            ellipse_steps: 0,
            rotated_rectangle_rotates: false,
        }
    }
}

impl ShapeSettings {
    /// Reject values no shape kind can work with.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.position_sigma.is_finite() && self.position_sigma >= 0.0) {
            return Err(ShapeError::InvalidSettings(format!(
                "position_sigma must be finite and non-negative, got {}",
                self.position_sigma
            )));
        }
        if !(self.angle_sigma.is_finite() && self.angle_sigma >= 0.0) {
            return Err(ShapeError::InvalidSettings(format!(
                "angle_sigma must be finite and non-negative, got {}",
                self.angle_sigma
            )));
        }
        if self.initial_extent < 1 {
            return Err(ShapeError::InvalidSettings(format!(
                "initial_extent must be at least 1, got {}",
                self.initial_extent
            )));
        }
        if !(0.0..60.0).contains(&self.triangle_min_angle) {
            return Err(ShapeError::InvalidSettings(format!(
                "triangle_min_angle must be in [0, 60), got {}",
                self.triangle_min_angle
            )));
        }
        Ok(())
    }
}
