//! Path storage, the outline container every shape kind produces.
//!
//! Stores vertices with path commands in a flat `Vec`. A path is rebuilt
//! from a shape's parameters whenever it is needed and never persisted, so
//! the container is optimised for cheap construction rather than editing.

use std::fmt::Write as _;

use crate::basics::{
    is_curve3, is_end_poly, is_move_to, is_stop, is_vertex, PointD, RectD, VertexD, VertexSource,
    PATH_CMD_CURVE3, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE,
};
use crate::bounding_rect::bounding_rect_polygons;
use crate::curves::Curve3Inc;
use crate::trans_affine::TransAffine;

/// Path storage: an ordered sequence of vertices, each with an (x, y)
/// coordinate and a path command. Supports multiple sub-paths separated by
/// `move_to` or `end_poly` commands; every sub-path is treated as closed.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<VertexD>,
}

impl PathStorage {
    /// Create an empty path storage.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Closed polygon through `points`.
    pub fn from_polygon(points: &[PointD]) -> Self {
        let mut path = Self::new();
        path.add_polygon(points);
        path
    }

    // ---------------------------------------------------------------
    // Path construction
    // ---------------------------------------------------------------

    /// Add a move_to command.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    /// Add a line_to command.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add a quadratic Bezier curve (curve3) with explicit control point.
    pub fn curve3(&mut self, x_ctrl: f64, y_ctrl: f64, x_to: f64, y_to: f64) {
        self.vertices
            .push(VertexD::new(x_ctrl, y_ctrl, PATH_CMD_CURVE3));
        self.vertices
            .push(VertexD::new(x_to, y_to, PATH_CMD_CURVE3));
    }

    /// Close the current polygon.
    pub fn close_polygon(&mut self) {
        if is_vertex(self.last_command()) {
            self.vertices
                .push(VertexD::new(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        }
    }

    /// Append a closed polygon through `points`.
    pub fn add_polygon(&mut self, points: &[PointD]) {
        let mut it = points.iter();
        if let Some(first) = it.next() {
            self.move_to(first.x, first.y);
            for p in it {
                self.line_to(p.x, p.y);
            }
            self.close_polygon();
        }
    }

    /// Concatenate all vertices from a vertex source as-is.
    pub fn concat_path(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let mut x = 0.0;
        let mut y = 0.0;
        vs.rewind(path_id);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            self.vertices.push(VertexD::new(x, y, cmd));
        }
    }

    /// Last command, or `PATH_CMD_STOP` if empty.
    fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    // ---------------------------------------------------------------
    // Transformation
    // ---------------------------------------------------------------

    /// Apply an affine transform to every vertex (curve control points
    /// included, which keeps curves exact under affine maps).
    pub fn transform(&mut self, mtx: &TransAffine) {
        for v in self.vertices.iter_mut().filter(|v| is_vertex(v.cmd)) {
            mtx.transform(&mut v.x, &mut v.y);
        }
    }

    /// Consuming variant of [`PathStorage::transform`].
    pub fn transformed(mut self, mtx: &TransAffine) -> Self {
        self.transform(mtx);
        self
    }

    // ---------------------------------------------------------------
    // Flattening and measurement
    // ---------------------------------------------------------------

    /// Flatten into closed polygons of straight edges, expanding curves.
    /// Each sub-path becomes one polygon; the closing edge is implicit.
    pub fn polygons(&self) -> Vec<Vec<PointD>> {
        let mut polys = Vec::new();
        let mut cur: Vec<PointD> = Vec::new();
        let mut i = 0;
        while i < self.vertices.len() {
            let v = self.vertices[i];
            if is_move_to(v.cmd) {
                if !cur.is_empty() {
                    polys.push(std::mem::take(&mut cur));
                }
                cur.push(PointD::new(v.x, v.y));
            } else if is_curve3(v.cmd) && i + 1 < self.vertices.len() {
                let to = self.vertices[i + 1];
                let from = cur.last().copied().unwrap_or(PointD::new(v.x, v.y));
                let mut curve = Curve3Inc::new_with_points(from.x, from.y, v.x, v.y, to.x, to.y);
                let (mut x, mut y) = (0.0, 0.0);
                curve.rewind(0);
                loop {
                    let cmd = curve.vertex(&mut x, &mut y);
                    if is_stop(cmd) {
                        break;
                    }
                    if is_move_to(cmd) && !cur.is_empty() {
                        continue;
                    }
                    cur.push(PointD::new(x, y));
                }
                i += 1;
            } else if is_vertex(v.cmd) {
                cur.push(PointD::new(v.x, v.y));
            } else if is_end_poly(v.cmd) && !cur.is_empty() {
                polys.push(std::mem::take(&mut cur));
            }
            i += 1;
        }
        if !cur.is_empty() {
            polys.push(cur);
        }
        polys
    }

    /// Axis-aligned bounds of the flattened outline.
    pub fn bounding_rect(&self) -> Option<RectD> {
        bounding_rect_polygons(&self.polygons())
    }

    // ---------------------------------------------------------------
    // Markup
    // ---------------------------------------------------------------

    /// `points` attribute value for an SVG `<polygon>`: every on-path vertex
    /// as `x,y` pairs separated by spaces.
    pub fn svg_points(&self) -> String {
        let mut out = String::new();
        for v in self.vertices.iter().filter(|v| is_vertex(v.cmd)) {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", svg_number(v.x), svg_number(v.y));
        }
        out
    }

    /// `d` attribute value for an SVG `<path>`, keeping curves as `Q`
    /// segments.
    pub fn svg_path_data(&self) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < self.vertices.len() {
            let v = self.vertices[i];
            if !out.is_empty() {
                out.push(' ');
            }
            if is_move_to(v.cmd) {
                let _ = write!(out, "M {} {}", svg_number(v.x), svg_number(v.y));
            } else if is_curve3(v.cmd) && i + 1 < self.vertices.len() {
                let to = self.vertices[i + 1];
                let _ = write!(
                    out,
                    "Q {} {} {} {}",
                    svg_number(v.x),
                    svg_number(v.y),
                    svg_number(to.x),
                    svg_number(to.y)
                );
                i += 1;
            } else if is_vertex(v.cmd) {
                let _ = write!(out, "L {} {}", svg_number(v.x), svg_number(v.y));
            } else if is_end_poly(v.cmd) {
                out.push('Z');
            }
            i += 1;
        }
        out
    }
}

/// Format a coordinate for markup: two decimals at most, no `-0`.
pub fn svg_number(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{}", r)
    }
}

// ============================================================================
// Tests
// ============================================================================
