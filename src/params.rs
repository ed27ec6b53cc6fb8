//! Galaxy generation parameters.
//!
//! A `GalaxyParams` value is an immutable snapshot: the debug panel mutates
//! one owned copy and passes it whole into the generator on every change, so
//! no generation ever observes a half-updated parameter set.

use thiserror::Error;

use crate::color::Rgb;

/// Errors surfaced before generation starts. An invalid snapshot skips the
/// regeneration entirely and the previously attached field stays visible.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("particle count must be at least 1, got {0}")]
    InvalidCount(u32),

    #[error("radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("branch count must be at least 1, got {0}")]
    InvalidBranches(u32),

    #[error("randomness must be non-negative, got {0}")]
    InvalidRandomness(f32),

    #[error("invalid color literal: {0}")]
    BadColor(String),
}

/// One generation's worth of tunable galaxy shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalaxyParams {
    /// Number of particles to place.
    pub count: u32,
    /// Point size. The static variant uses it directly as the sprite size;
    /// the animated variant scales each particle's random size by it.
    pub size: f32,
    /// Maximum orbital radius.
    pub radius: f32,
    /// Number of evenly spaced spiral arms.
    pub branches: u32,
    /// Angular twist per unit radius (static variant only; the animated
    /// variant twists per-frame in the vertex stage instead).
    pub spin: f32,
    /// Exponent applied to the uniform draw for each random offset. Values
    /// above 1 concentrate offsets near the arm; below 1 spread them out.
    pub random_pow: f32,
    /// Scale of the random offset, multiplied by the particle's own radius.
    pub randomness: f32,
    /// Color at the galactic center.
    pub inner_color: Rgb,
    /// Color at the outer rim.
    pub outer_color: Rgb,
    /// Whole-field y-rotation speed applied by the static variant's render
    /// loop, radians per second.
    pub rotate_speed: f32,
    /// Differential-rotation speed fed to the animated variant's `u_speed`.
    pub spin_speed: f32,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 200_000,
            size: 0.005,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            random_pow: 3.0,
            randomness: 0.5,
            inner_color: Rgb::new(1.0, 96.0 / 255.0, 48.0 / 255.0), // #ff6030
            outer_color: Rgb::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0), // #1b3984
            rotate_speed: 0.02,
            spin_speed: 0.2,
        }
    }
}

impl GalaxyParams {
    /// Reject snapshots the generator has no defined behavior for. Extreme
    /// but valid ranges still generate; they just look extreme.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.count < 1 {
            return Err(ParamError::InvalidCount(self.count));
        }
        if !(self.radius > 0.0) {
            return Err(ParamError::InvalidRadius(self.radius));
        }
        if self.branches < 1 {
            return Err(ParamError::InvalidBranches(self.branches));
        }
        if !(self.randomness >= 0.0) {
            return Err(ParamError::InvalidRandomness(self.randomness));
        }
        Ok(())
    }
}
