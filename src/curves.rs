//! Quadratic Bezier flattening.
//!
//! Curved primitives store `curve3` commands in their path; the rasterizer
//! only understands straight edges, so each curve is expanded into line
//! segments with forward differencing before intersection testing.

use crate::basics::{uround, PointD, VertexSource, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP};

/// Minimum number of segments a curve is split into, however short.
const CURVE3_MIN_STEPS: i32 = 4;

// ============================================================================
// Curve3Inc — incremental (forward differences) quadratic Bezier
// ============================================================================

/// Incremental quadratic Bezier curve flattener using forward differences.
///
/// The step count is proportional to the control polygon length, so a
/// curve spanning a few pixels costs a handful of segments while a
/// canvas-sized one stays visually smooth.
#[derive(Debug, Clone)]
pub struct Curve3Inc {
    num_steps: i32,
    step: i32,
    start: PointD,
    end: PointD,
    fx: f64,
    fy: f64,
    dfx: f64,
    dfy: f64,
    ddfx: f64,
    ddfy: f64,
    saved_fx: f64,
    saved_fy: f64,
    saved_dfx: f64,
    saved_dfy: f64,
}

impl Curve3Inc {
    pub fn new() -> Self {
        Self {
            num_steps: 0,
            step: -1,
            start: PointD::default(),
            end: PointD::default(),
            fx: 0.0,
            fy: 0.0,
            dfx: 0.0,
            dfy: 0.0,
            ddfx: 0.0,
            ddfy: 0.0,
            saved_fx: 0.0,
            saved_fy: 0.0,
            saved_dfx: 0.0,
            saved_dfy: 0.0,
        }
    }

    pub fn new_with_points(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        let mut c = Self::new();
        c.init(x1, y1, x2, y2, x3, y3);
        c
    }

    /// Set up forward differences for the curve `(x1,y1)` → ctrl `(x2,y2)` → `(x3,y3)`.
    pub fn init(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.start = PointD::new(x1, y1);
        self.end = PointD::new(x3, y3);

        let dx1 = x2 - x1;
        let dy1 = y2 - y1;
        let dx2 = x3 - x2;
        let dy2 = y3 - y2;

        let len = (dx1 * dx1 + dy1 * dy1).sqrt() + (dx2 * dx2 + dy2 * dy2).sqrt();

        self.num_steps = (uround(len * 0.25) as i32).max(CURVE3_MIN_STEPS);

        let subdivide_step = 1.0 / self.num_steps as f64;
        let subdivide_step2 = subdivide_step * subdivide_step;

        let tmpx = (x1 - x2 * 2.0 + x3) * subdivide_step2;
        let tmpy = (y1 - y2 * 2.0 + y3) * subdivide_step2;

        self.fx = x1;
        self.saved_fx = x1;
        self.fy = y1;
        self.saved_fy = y1;

        self.dfx = tmpx + (x2 - x1) * (2.0 * subdivide_step);
        self.saved_dfx = self.dfx;
        self.dfy = tmpy + (y2 - y1) * (2.0 * subdivide_step);
        self.saved_dfy = self.dfy;

        self.ddfx = tmpx * 2.0;
        self.ddfy = tmpy * 2.0;

        self.step = self.num_steps;
    }

    /// Number of line segments the curve is split into.
    pub fn num_steps(&self) -> i32 {
        self.num_steps
    }
}

impl Default for Curve3Inc {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexSource for Curve3Inc {
    fn rewind(&mut self, _path_id: u32) {
        if self.num_steps == 0 {
            self.step = -1;
            return;
        }
        self.step = self.num_steps;
        self.fx = self.saved_fx;
        self.fy = self.saved_fy;
        self.dfx = self.saved_dfx;
        self.dfy = self.saved_dfy;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step < 0 {
            return PATH_CMD_STOP;
        }
        if self.step == self.num_steps {
            *x = self.start.x;
            *y = self.start.y;
            self.step -= 1;
            return PATH_CMD_MOVE_TO;
        }
        if self.step == 0 {
            // Land exactly on the end point instead of the accumulated one.
            *x = self.end.x;
            *y = self.end.y;
            self.step -= 1;
            return PATH_CMD_LINE_TO;
        }
        self.fx += self.dfx;
        self.fy += self.dfy;
        self.dfx += self.ddfx;
        self.dfy += self.ddfy;
        *x = self.fx;
        *y = self.fy;
        self.step -= 1;
        PATH_CMD_LINE_TO
    }
}

// ============================================================================
// Tests
// ============================================================================
