//! Affine transformation matrix.
//!
//! 2D affine transformations used to place shape-local outlines onto the
//! canvas: rotation about a shape's own centre, translation, and the
//! uniform scale applied when previewing at a different resolution.

use crate::basics::deg2rad;

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub fn new() -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Custom matrix from six components.
    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Rotation matrix, angle in radians.
    pub fn new_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Rotation matrix, angle in degrees. In raster (y-down) space a positive
    /// angle turns clockwise, matching SVG's `rotate()`.
    pub fn new_rotation_deg(deg: f64) -> Self {
        Self::new_rotation(deg2rad(deg))
    }

    /// Uniform scaling matrix.
    pub fn new_scaling_uniform(s: f64) -> Self {
        Self::new_custom(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Rotate by `deg` degrees about the origin, then move the origin to
    /// `(cx, cy)`. The placement used by every centred shape kind.
    pub fn new_placement(cx: f64, cy: f64, deg: f64) -> Self {
        let mut m = Self::new_rotation_deg(deg);
        m.multiply(&Self::new_translation(cx, cy));
        m
    }

    // ====================================================================
    // Composition
    // ====================================================================

    /// Post-multiply: `self = self * m` (apply `self` first, then `m`).
    pub fn multiply(&mut self, m: &TransAffine) -> &mut Self {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    // ====================================================================
    // Transformations
    // ====================================================================

    /// Forward transform: `(x, y) -> (x', y')`.
    #[inline]
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }
}

// ============================================================================
// Tests
// ============================================================================
