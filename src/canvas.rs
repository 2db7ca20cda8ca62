//! Canvas context: the fixed raster every shape is bounded by.

use log::{debug, warn};

use crate::basics::clamp;
use crate::error::ShapeError;
use crate::settings::ShapeSettings;

/// Width, height and shape settings of the raster being approximated.
///
/// Read-only for the duration of a run, so one value can be shared by
/// reference across every worker.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: i32,
    height: i32,
    settings: ShapeSettings,
}

impl Canvas {
    /// Canvas with default settings. Both dimensions must be at least 1.
    pub fn new(width: u32, height: u32) -> Result<Self, ShapeError> {
        Self::with_settings(width, height, ShapeSettings::default())
    }

    /// Canvas with explicit settings.
    pub fn with_settings(width: u32, height: u32, settings: ShapeSettings) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            warn!("rejecting {}x{} canvas", width, height);
            return Err(ShapeError::InvalidCanvas { width, height });
        }
        settings.validate()?;
        debug!("canvas {}x{} with {:?}", width, height, settings);
        Ok(Self {
            width: width as i32,
            height: height as i32,
            settings,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn settings(&self) -> &ShapeSettings {
        &self.settings
    }

    /// Clamp an x coordinate (or horizontal size) into `[0, width-1]`.
    #[inline]
    pub fn clamp_x(&self, x: i32) -> i32 {
        clamp(x, 0, self.width - 1)
    }

    /// Clamp a y coordinate (or vertical size) into `[0, height-1]`.
    #[inline]
    pub fn clamp_y(&self, y: i32) -> i32 {
        clamp(y, 0, self.height - 1)
    }

    /// Clamp a radius into `[0, min(width, height)-1]`.
    #[inline]
    pub fn clamp_radius(&self, r: i32) -> i32 {
        clamp(r, 0, self.width.min(self.height) - 1)
    }

    /// Returns `true` if `(x, y)` lies on the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}
