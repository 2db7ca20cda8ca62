//! Foundation types, constants, and path command utilities.
//!
//! The small vocabulary every other module shares: rounding and clamping,
//! angle conversion, integer/float rectangles, points, path commands and
//! the `VertexSource` trait that all path generators implement.

// ============================================================================
// Rounding and clamping
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

/// Clamp `v` into `[min, max]`.
///
/// Unlike `Ord::clamp` this never panics: when `min > max` the lower bound
/// wins, so a degenerate range collapses onto `min`.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, min: T, max: T) -> T {
    if v < min {
        min
    } else if v > max {
        if max < min {
            min
        } else {
            max
        }
    } else {
        v
    }
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Wrap an integer angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: i32) -> i32 {
    deg.rem_euclid(360)
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping each axis
    /// independently if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_CURVE3: u32 = 3;
pub const PATH_CMD_END_POLY: u32 = 0x0F;
pub const PATH_CMD_MASK: u32 = 0x0F;

pub const PATH_FLAGS_CLOSE: u32 = 0x40;

/// Returns `true` if `c` is a vertex command (move_to through curve3).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

/// Returns `true` if `c` is the stop command.
#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

/// Returns `true` if `c` is a move_to command.
#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

/// Returns `true` if `c` is a quadratic curve command.
#[inline]
pub fn is_curve3(c: u32) -> bool {
    c == PATH_CMD_CURVE3
}

/// Returns `true` if `c` is an end_poly command (with any flags).
#[inline]
pub fn is_end_poly(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_END_POLY
}

// ============================================================================
// Point / Vertex
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointI = PointBase<i32>;
pub type PointD = PointBase<f64>;

/// A vertex with coordinates and a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexD {
    pub x: f64,
    pub y: f64,
    pub cmd: u32,
}

impl VertexD {
    pub fn new(x: f64, y: f64, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// A rewindable stream of vertices. The ellipse generator and the curve
/// flattener implement this so their output can be appended to a path.
pub trait VertexSource {
    /// Reset the vertex source to the beginning of the given path.
    fn rewind(&mut self, path_id: u32);

    /// Return the next vertex. Writes coordinates to `x` and `y`, returns a
    /// path command. Returns `PATH_CMD_STOP` when iteration is complete.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

// ============================================================================
// Tests
// ============================================================================
