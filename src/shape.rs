//! Shape contract and the caching wrapper shared by every kind.
//!
//! A kind implements [`Geometry`]: random construction, in-place mutation,
//! outline extraction and SVG markup over its own small parameter set.
//! [`Shape`] wraps a geometry with the lazily computed scanline set and is
//! the only place that set is invalidated, so no kind has to remember to
//! do it.

use crate::canvas::Canvas;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::rasterizer::rasterize_path;
use crate::scanline::Scanline;

// ============================================================================
// Geometry
// ============================================================================

/// Kind-specific half of the shape contract.
pub trait Geometry: Clone {
    /// Random instance of a small extent, already inside the canvas.
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self;

    /// Perturb one randomly chosen parameter group in place and re-clamp
    /// every spatial parameter into the canvas.
    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R);

    /// Bring parameters into canonical order. Most kinds have none.
    fn normalize(&mut self) {}

    /// Closed outline derived from the current parameters.
    fn path(&self) -> PathStorage;

    /// Self-contained SVG fragment; `attrs` is inserted verbatim into the
    /// filled element.
    fn svg(&self, attrs: &str) -> String;

    /// Returns `true` if every spatial parameter lies inside the canvas
    /// bounds.
    fn in_bounds(&self, canvas: &Canvas) -> bool;

    /// Scanlines covered by the shape. Kinds with a cheaper exact method
    /// override this; the result must match the generic rasterizer.
    fn rasterize(&self, canvas: &Canvas) -> Vec<Scanline> {
        rasterize_path(&self.path(), canvas.width(), canvas.height())
    }
}

// ============================================================================
// Shape
// ============================================================================

/// A geometry plus its cached scanlines.
///
/// The cache is filled on the first [`Shape::scanlines`] call and dropped by
/// every [`Shape::mutate`]. Copies carry the parameters only.
#[derive(Debug)]
pub struct Shape<G> {
    geometry: G,
    scanlines: Option<Vec<Scanline>>,
}

impl<G: Geometry> Shape<G> {
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            scanlines: None,
        }
    }

    /// Random shape of kind `G`.
    pub fn random<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        Self::new(G::random_new(canvas, rng))
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn into_geometry(self) -> G {
        self.geometry
    }

    /// Replace the parameters wholesale, dropping the cache.
    pub fn set_geometry(&mut self, geometry: G) {
        self.geometry = geometry;
        self.scanlines = None;
    }

    /// Independent copy of the parameters with an empty cache.
    pub fn copy(&self) -> Self {
        Self::new(self.geometry.clone())
    }

    /// Mutate in place and invalidate the cached scanlines.
    pub fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        self.geometry.mutate(canvas, rng);
        self.scanlines = None;
        debug_assert!(self.geometry.in_bounds(canvas));
    }

    /// Cached scanlines, rasterizing first if there are none.
    pub fn scanlines(&mut self, canvas: &Canvas) -> &[Scanline] {
        let geometry = &mut self.geometry;
        self.scanlines.get_or_insert_with(|| {
            geometry.normalize();
            geometry.rasterize(canvas)
        })
    }

    pub fn has_cached_scanlines(&self) -> bool {
        self.scanlines.is_some()
    }

    /// Outline of the normalized parameters.
    pub fn path(&mut self) -> PathStorage {
        self.geometry.normalize();
        self.geometry.path()
    }

    /// SVG fragment of the normalized parameters.
    pub fn svg(&mut self, attrs: &str) -> String {
        self.geometry.normalize();
        self.geometry.svg(attrs)
    }
}

impl<G: Geometry> Clone for Shape<G> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

// ============================================================================
// Tests
// ============================================================================
