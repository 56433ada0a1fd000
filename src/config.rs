//! Engine configuration: zoom headroom and camera-preview opacity range.
//!
//! # Example
//!
//! ```
//! use zenalign::{AlignConfig, AlphaBounds};
//!
//! let config = AlignConfig::default()
//!     .margin_factor(0.9)
//!     .alpha_bounds(AlphaBounds::new(0.3, 1.0).unwrap());
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::layout::AlignError;

/// Fraction of the viewport the fingerprint occupies at maximum zoom.
pub const DEFAULT_MARGIN_FACTOR: f64 = 0.85;
/// Camera-preview opacity at full zoom.
pub const DEFAULT_MIN_CAMERA_PREVIEW_ALPHA: f64 = 0.5;
/// Camera-preview opacity at zero zoom.
pub const DEFAULT_MAX_CAMERA_PREVIEW_ALPHA: f64 = 0.8;

/// Opacity range for the camera preview layer.
///
/// Values are in `0.0..=1.0`, where 0 is fully transparent and 1 fully
/// opaque. `min <= max` always holds for values built through [`AlphaBounds::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for AlphaBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CAMERA_PREVIEW_ALPHA,
            max: DEFAULT_MAX_CAMERA_PREVIEW_ALPHA,
        }
    }
}

impl AlphaBounds {
    /// Create an opacity range, rejecting values outside `0.0..=1.0` or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, AlignError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the range invariants. Useful after deserializing.
    pub fn validate(&self) -> Result<(), AlignError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if in_unit(self.min) && in_unit(self.max) && self.min <= self.max {
            Ok(())
        } else {
            Err(AlignError::InvalidAlphaBounds)
        }
    }

    /// Linear interpolation from `max` (weight 1) down to `min` (weight 0).
    pub fn lerp(&self, weight: f64) -> f64 {
        weight * (self.max - self.min) + self.min
    }
}

/// Tunables for [`AlignEngine`](crate::AlignEngine).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignConfig {
    /// Scales the maximum zoom down so a margin stays visible around the
    /// fingerprint instead of clipping it to the viewport edge.
    pub margin_factor: f64,
    /// Camera-preview opacity range.
    pub alpha: AlphaBounds,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            margin_factor: DEFAULT_MARGIN_FACTOR,
            alpha: AlphaBounds::default(),
        }
    }
}

impl AlignConfig {
    /// Set the maximum-zoom margin factor.
    pub fn margin_factor(mut self, factor: f64) -> Self {
        self.margin_factor = factor;
        self
    }

    /// Set the camera-preview opacity range.
    pub fn alpha_bounds(mut self, alpha: AlphaBounds) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check every field. The engine calls this before solving.
    pub fn validate(&self) -> Result<(), AlignError> {
        if !(self.margin_factor.is_finite() && self.margin_factor > 0.0) {
            return Err(AlignError::InvalidMarginFactor);
        }
        self.alpha.validate()
    }
}
