//! Ellipse vertex generator.
//!
//! Approximates an axis-aligned ellipse as a closed regular polygon. The
//! ellipse kinds build their outline from this and then place it with a
//! `TransAffine`, so rotation never has to be handled here.

use crate::basics::{
    uround, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE, PI,
};

/// Smallest polygon an ellipse degrades to.
const MIN_STEPS: u32 = 4;

/// Ellipse vertex generator.
///
/// The number of steps is either specified explicitly or derived from the
/// mean radius, so the chord error stays around an eighth of a pixel.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
}

impl Ellipse {
    /// Create an ellipse; `num_steps == 0` selects the step count automatically.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) -> Self {
        let mut e = Self {
            x,
            y,
            rx,
            ry,
            num: num_steps,
            step: 0,
        };
        if e.num == 0 {
            e.calc_num_steps();
        }
        e
    }

    /// Number of polygon vertices generated.
    pub fn num_steps(&self) -> u32 {
        self.num
    }

    fn calc_num_steps(&mut self) {
        let ra = (self.rx.abs() + self.ry.abs()) / 2.0;
        let da = (ra / (ra + 0.125)).acos() * 2.0;
        self.num = uround(2.0 * PI / da).max(MIN_STEPS);
    }
}

impl VertexSource for Ellipse {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num {
            self.step += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        if self.step > self.num {
            return PATH_CMD_STOP;
        }
        let angle = self.step as f64 / self.num as f64 * 2.0 * PI;
        *x = self.x + angle.cos() * self.rx;
        *y = self.y + angle.sin() * self.ry;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
