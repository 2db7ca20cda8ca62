//! Construction-time errors.
//!
//! Shape construction, mutation and rasterization are infallible; only the
//! inputs that set up a run (canvas dimensions, settings, kind names) are
//! validated.

/// Errors raised while setting up shapes for a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// Canvas dimensions must both be at least 1.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Settings contain an unusable value.
    #[error("invalid shape settings: {0}")]
    InvalidSettings(String),

    /// A shape kind name was not recognised.
    #[error("unknown shape kind: {0}")]
    UnknownKind(String),
}
