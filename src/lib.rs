//! # primitive-raster
//!
//! Shape geometry and scanline rasterization for reproducing an image as a
//! stack of simple filled primitives.
//!
//! An optimizer proposes random shapes, perturbs them, and scores each
//! candidate by the pixels it covers. This crate supplies everything below
//! the scoring loop:
//!
//! - Shape kinds with random construction, mutation and SVG output
//! - An even-odd scanline rasterizer over closed outlines
//! - Per-shape scanline caching with automatic invalidation
//! - Deterministic per-worker random streams
//! - Blending scanlines into an RGBA buffer at any output scale
//!
//! ## Architecture
//!
//! Every kind flows through the same pipeline:
//!
//! 1. **Geometry** — a small integer parameter set kept inside the canvas
//! 2. **Outline** — parameters turned into a closed [`PathStorage`]
//! 3. **Rasterizer** — the outline converted to horizontal [`Scanline`] runs
//! 4. **Cache** — [`Shape`] keeps the runs until the next mutation
//! 5. **Renderer** — runs blended into a [`RenderTarget`]

// Foundation types & math
pub mod basics;
pub mod error;
pub mod math;
pub mod random;
pub mod settings;

// Geometry primitives
pub mod bounding_rect;
pub mod curves;
pub mod ellipse;
pub mod path_storage;
pub mod trans_affine;

// Scanline rasterizer
pub mod rasterizer;
pub mod scanline;

// Shapes
pub mod canvas;
pub mod primitive;
pub mod shape;
pub mod shapes;

// Rendering
pub mod render;

pub use canvas::Canvas;
pub use error::ShapeError;
pub use path_storage::PathStorage;
pub use primitive::{AnyShape, Primitive, ShapeKind};
pub use random::{worker_rng, worker_rngs, RandomSource, WorkerRng};
pub use render::RenderTarget;
pub use scanline::{covered_pixels, Scanline};
pub use settings::ShapeSettings;
pub use shape::{Geometry, Shape};
