//! Bounding rectangle of flattened outlines.

use crate::basics::{PointD, RectD};

/// Bounding rectangle over every point of every polygon, or `None` when
/// there are no points.
pub fn bounding_rect_polygons(polygons: &[Vec<PointD>]) -> Option<RectD> {
    polygons
        .iter()
        .flatten()
        .fold(None, |bounds, p| Some(extend(bounds, p.x, p.y)))
}

#[inline]
fn extend(bounds: Option<RectD>, x: f64, y: f64) -> RectD {
    match bounds {
        None => RectD::new(x, y, x, y),
        Some(r) => RectD::new(r.x1.min(x), r.y1.min(y), r.x2.max(x), r.y2.max(y)),
    }
}
