//! Scanline records.
//!
//! A scanline is one horizontal run of pixels on one row with a single
//! coverage value. Rasterizers produce them; compositing and energy code
//! consume them without ever modifying them.

/// Coverage of a pixel the shape fully covers.
pub const COVER_FULL: u16 = 0xffff;

/// One covered horizontal run: pixels `x1..=x2` on row `y` at coverage
/// `alpha` (`0..=0xffff`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scanline {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
    pub alpha: u16,
}

impl Scanline {
    /// Full-coverage run on row `y` from `x1` to `x2` inclusive.
    #[inline]
    pub fn full(y: i32, x1: i32, x2: i32) -> Self {
        Self {
            y,
            x1,
            x2,
            alpha: COVER_FULL,
        }
    }

    /// Number of pixels in the run.
    #[inline]
    pub fn len(&self) -> u32 {
        (self.x2 - self.x1 + 1).max(0) as u32
    }

    /// Always `false` for runs produced by a rasterizer, which keep
    /// `x1 <= x2`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1
    }
}

/// Total number of pixels covered by a set of runs.
///
/// Exported for callers that weigh a shape by its area, such as an
/// energy function normalizing a color error by pixel count.
pub fn covered_pixels(lines: &[Scanline]) -> u64 {
    lines.iter().map(|l| l.len() as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scanline() {
        let s = Scanline::full(4, 2, 9);
        assert_eq!(s.alpha, COVER_FULL);
        assert_eq!(s.len(), 8);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_single_pixel_run() {
        let s = Scanline::full(0, 5, 5);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_covered_pixels() {
        let lines = [Scanline::full(0, 0, 3), Scanline::full(1, 2, 2)];
        assert_eq!(covered_pixels(&lines), 5);
        assert_eq!(covered_pixels(&[]), 0);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut v = vec![Scanline::full(2, 0, 1), Scanline::full(1, 5, 6), Scanline::full(1, 0, 1)];
        v.sort();
        assert_eq!(v[0], Scanline::full(1, 0, 1));
        assert_eq!(v[2].y, 2);
    }
}
