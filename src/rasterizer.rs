//! Non-anti-aliased even-odd scanline rasterizer.
//!
//! Converts a closed outline into full-coverage horizontal runs. Every
//! shape kind without a specialised fast path goes through
//! [`rasterize_path`], which makes the row order and pairing below the
//! numerical contract those kinds rely on:
//!
//! 1. Bound the flattened outline and clamp its vertical extent to the canvas.
//! 2. Walk rows from the bottom of the bounds to the top (descending `y`).
//! 3. Intersect the row with every edge, sort the crossings, and pair them
//!    `(0,1), (2,3), …` into runs clamped to `[0, width-1]`.
//! 4. A single crossing becomes a one-pixel run; any other odd count drops
//!    the row.
//!
//! Outline vertices that sit exactly on a row are resolved per vertex chain
//! (a maximal run of consecutive vertices on that row): a chain where the
//! outline turns back counts twice, spanning the chain; a chain the outline
//! passes through counts once. Axis-aligned edges on a row boundary are
//! therefore covered, which keeps the generic path identical to the
//! rectangle fast path.

use log::trace;

use crate::basics::{clamp, PointD, RectI};
use crate::bounding_rect::bounding_rect_polygons;
use crate::path_storage::PathStorage;
use crate::scanline::Scanline;

// ============================================================================
// Generic path rasterization
// ============================================================================

/// Rasterize a path onto a `width` × `height` raster.
pub fn rasterize_path(path: &PathStorage, width: i32, height: i32) -> Vec<Scanline> {
    rasterize_polygons(&path.polygons(), width, height)
}

/// Rasterize already flattened closed polygons (even-odd over all of them).
pub fn rasterize_polygons(polygons: &[Vec<PointD>], width: i32, height: i32) -> Vec<Scanline> {
    let mut lines = Vec::new();
    let bounds = match bounding_rect_polygons(polygons) {
        Some(b) => b,
        None => return lines,
    };

    let max_x = (width - 1) as f64;
    let max_y = (height - 1) as f64;
    let bot = clamp(bounds.y2, 0.0, max_y) as i32;
    let top = clamp(bounds.y1, 0.0, max_y) as i32;

    let mut xs: Vec<f64> = Vec::new();
    for y in (top..=bot).rev() {
        xs.clear();
        for poly in polygons {
            find_intersections(poly, y as f64, &mut xs);
        }
        xs.sort_by(f64::total_cmp);

        let n = xs.len();
        if n > 1 && n % 2 == 0 {
            for pair in xs.chunks_exact(2) {
                lines.push(Scanline::full(
                    y,
                    clamp(pair[0], 0.0, max_x) as i32,
                    clamp(pair[1], 0.0, max_x) as i32,
                ));
            }
        } else if n == 1 {
            let x = clamp(xs[0], 0.0, max_x) as i32;
            lines.push(Scanline::full(y, x, x));
        } else if n > 1 {
            trace!("dropping row {} with odd intersection count {}", y, n);
        }
    }
    lines
}

/// Append the crossings of the horizontal line at `y` with the closed
/// polygon `poly` to `out` (unsorted).
pub fn find_intersections(poly: &[PointD], y: f64, out: &mut Vec<f64>) {
    let n = poly.len();
    if n == 0 {
        return;
    }

    // Edges crossed strictly between their end points.
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        if (a.y < y && y < b.y) || (b.y < y && y < a.y) {
            out.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
        }
    }

    // Vertex chains lying exactly on the row.
    let start = match (0..n).find(|&i| poly[i].y != y) {
        Some(s) => s,
        None => {
            // The whole polygon is flat on this row.
            let (lo, hi) = poly
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                    (lo.min(p.x), hi.max(p.x))
                });
            out.push(lo);
            out.push(hi);
            return;
        }
    };

    let mut k = 0;
    while k < n {
        let first = poly[(start + k) % n];
        if first.y != y {
            k += 1;
            continue;
        }
        let prev = poly[(start + k + n - 1) % n];
        let (mut lo, mut hi) = (first.x, first.x);
        let mut last = first;
        let mut j = k + 1;
        while j < n && poly[(start + j) % n].y == y {
            last = poly[(start + j) % n];
            lo = lo.min(last.x);
            hi = hi.max(last.x);
            j += 1;
        }
        let next = poly[(start + j) % n];

        if (prev.y > y) == (next.y > y) {
            // Turning point: the outline touches the row and goes back.
            out.push(lo);
            out.push(hi);
        } else if prev.y < y {
            out.push(first.x);
        } else {
            out.push(last.x);
        }
        k = j;
    }
}

// ============================================================================
// Axis-aligned fast path
// ============================================================================

/// Rasterize an axis-aligned rectangle (already normalized and clamped):
/// one full-width run per row, top to bottom.
pub fn rasterize_rect(rect: &RectI) -> Vec<Scanline> {
    if !rect.is_valid() {
        return Vec::new();
    }
    (rect.y1..=rect.y2)
        .map(|y| Scanline::full(y, rect.x1, rect.x2))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipse::Ellipse;
    use crate::scanline::COVER_FULL;

    fn rect_path(x1: f64, y1: f64, x2: f64, y2: f64) -> PathStorage {
        PathStorage::from_polygon(&[
            PointD::new(x1, y1),
            PointD::new(x1, y2),
            PointD::new(x2, y2),
            PointD::new(x2, y1),
        ])
    }

    fn sorted(mut v: Vec<Scanline>) -> Vec<Scanline> {
        v.sort();
        v
    }

    #[test]
    fn test_rect_rows_descend() {
        let lines = rasterize_path(&rect_path(2.0, 3.0, 9.0, 7.0), 20, 20);
        let rows: Vec<i32> = lines.iter().map(|l| l.y).collect();
        assert_eq!(rows, vec![7, 6, 5, 4, 3]);
        for l in &lines {
            assert_eq!((l.x1, l.x2, l.alpha), (2, 9, COVER_FULL));
        }
    }

    #[test]
    fn test_generic_matches_fast_path() {
        for &(x1, y1, x2, y2) in &[(2, 3, 9, 7), (0, 0, 19, 19), (4, 4, 4, 9), (1, 6, 8, 6), (5, 5, 5, 5)] {
            let generic = rasterize_path(&rect_path(x1 as f64, y1 as f64, x2 as f64, y2 as f64), 20, 20);
            let fast = rasterize_rect(&RectI::new(x1, y1, x2, y2));
            assert_eq!(sorted(generic), sorted(fast), "rect {:?}", (x1, y1, x2, y2));
        }
    }

    #[test]
    fn test_even_odd_two_disjoint_squares() {
        let mut path = rect_path(1.0, 1.0, 4.0, 8.0);
        path.add_polygon(&[
            PointD::new(10.0, 1.5),
            PointD::new(15.0, 1.5),
            PointD::new(15.0, 8.5),
            PointD::new(10.0, 8.5),
        ]);
        let lines = rasterize_path(&path, 20, 20);
        for y in 2..=8 {
            let row: Vec<&Scanline> = lines.iter().filter(|l| l.y == y).collect();
            assert_eq!(row.len(), 2, "row {}", y);
            assert_eq!((row[0].x1, row[0].x2), (1, 4));
            assert_eq!((row[1].x1, row[1].x2), (10, 15));
        }
    }

    #[test]
    fn test_even_odd_hole() {
        // Outer square with an inner square: even-odd leaves a hole.
        let mut path = rect_path(0.0, 0.0, 10.0, 10.0);
        path.add_polygon(&[
            PointD::new(3.5, 3.5),
            PointD::new(6.5, 3.5),
            PointD::new(6.5, 6.5),
            PointD::new(3.5, 6.5),
        ]);
        let lines = rasterize_path(&path, 20, 20);
        let row5: Vec<(i32, i32)> = lines.iter().filter(|l| l.y == 5).map(|l| (l.x1, l.x2)).collect();
        assert_eq!(row5, vec![(0, 3), (6, 10)]);
        let row1: Vec<(i32, i32)> = lines.iter().filter(|l| l.y == 1).map(|l| (l.x1, l.x2)).collect();
        assert_eq!(row1, vec![(0, 10)]);
    }

    #[test]
    fn test_clamps_to_canvas() {
        let lines = rasterize_path(&rect_path(-5.0, -5.0, 30.0, 2.5), 10, 10);
        assert_eq!(lines.len(), 3);
        for l in &lines {
            assert_eq!((l.x1, l.x2), (0, 9));
            assert!(l.y >= 0 && l.y <= 2);
        }
    }

    #[test]
    fn test_triangle_apex_on_row_is_single_pixel() {
        let path = PathStorage::from_polygon(&[
            PointD::new(5.0, 0.0),
            PointD::new(10.0, 10.0),
            PointD::new(0.0, 10.0),
        ]);
        let lines = rasterize_path(&path, 20, 20);
        let apex: Vec<&Scanline> = lines.iter().filter(|l| l.y == 0).collect();
        assert_eq!(apex.len(), 1);
        assert_eq!((apex[0].x1, apex[0].x2), (5, 5));
        let base: Vec<&Scanline> = lines.iter().filter(|l| l.y == 10).collect();
        assert_eq!((base[0].x1, base[0].x2), (0, 10));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_pass_through_vertex_counts_once() {
        // Diamond whose left and right vertices sit exactly on row 5.
        let path = PathStorage::from_polygon(&[
            PointD::new(5.0, 0.5),
            PointD::new(9.0, 5.0),
            PointD::new(5.0, 9.5),
            PointD::new(1.0, 5.0),
        ]);
        let lines = rasterize_path(&path, 20, 20);
        let row5: Vec<&Scanline> = lines.iter().filter(|l| l.y == 5).collect();
        assert_eq!(row5.len(), 1);
        assert_eq!((row5[0].x1, row5[0].x2), (1, 9));
    }

    #[test]
    fn test_ellipse_rows_are_symmetric() {
        let mut path = PathStorage::new();
        path.concat_path(&mut Ellipse::new(10.0, 10.0, 6.0, 4.0, 0), 0);
        let lines = rasterize_path(&path, 40, 40);
        assert!(!lines.is_empty());
        let widest = lines.iter().map(|l| l.len()).max().unwrap();
        assert!((11..=14).contains(&widest));
        assert!(lines.iter().all(|l| l.y >= 6 && l.y <= 14));
    }

    #[test]
    fn test_fully_outside_canvas() {
        let lines = rasterize_path(&rect_path(2.0, 30.0, 5.0, 40.0), 10, 10);
        // Bounds clamp onto the last row, which the outline never reaches.
        assert!(lines.is_empty());
    }

    #[test]
    fn test_empty_path() {
        assert!(rasterize_path(&PathStorage::new(), 10, 10).is_empty());
    }

    #[test]
    fn test_find_intersections_unsorted_input() {
        let poly = [
            PointD::new(0.0, 0.0),
            PointD::new(4.0, 0.0),
            PointD::new(4.0, 4.0),
            PointD::new(0.0, 4.0),
        ];
        let mut xs = Vec::new();
        find_intersections(&poly, 2.0, &mut xs);
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![0.0, 4.0]);
    }

    #[test]
    fn test_rasterize_rect_invalid_is_empty() {
        assert!(rasterize_rect(&RectI::new(5, 5, 4, 5)).is_empty());
    }
}
