//! Geometric math utilities.
//!
//! The angle measurements used to reject sliver triangles.

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees at vertex `(x, y)` between the rays towards `(ax, ay)`
/// and `(bx, by)`. Returns `None` when either ray has zero length.
pub fn vertex_angle_deg(x: f64, y: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Option<f64> {
    let (ux, uy) = (ax - x, ay - y);
    let (vx, vy) = (bx - x, by - y);
    let lu = (ux * ux + uy * uy).sqrt();
    let lv = (vx * vx + vy * vy).sqrt();
    if lu == 0.0 || lv == 0.0 {
        return None;
    }
    let cos = ((ux * vx + uy * vy) / (lu * lv)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Smallest interior angle of a triangle in degrees, or `None` if the
/// triangle has coincident vertices.
pub fn min_triangle_angle_deg(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Option<f64> {
    let a1 = vertex_angle_deg(x1, y1, x2, y2, x3, y3)?;
    let a2 = vertex_angle_deg(x2, y2, x1, y1, x3, y3)?;
    let a3 = vertex_angle_deg(x3, y3, x1, y1, x2, y2)?;
    Some(a1.min(a2).min(a3))
}

// ============================================================================
// Tests
// ============================================================================
