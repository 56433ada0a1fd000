//! Stateful front end: owns the configuration and the current layout.

use crate::config::{AlignConfig, AlphaBounds};
use crate::layout::{self, AlignError, OverviewContext, StaticLayout, ViewportBounds};
use crate::zoom::{self, ZoomState};

/// Holds the configuration and the most recently solved [`StaticLayout`].
///
/// [`locate_fingerprint`](Self::locate_fingerprint) replaces the layout
/// wholesale; [`change_zoom`](Self::change_zoom) reads it. Both run on the
/// caller's thread and neither touches any rendering state. Because the
/// layout is only replaced through `&mut self`, a zoom update can never
/// observe a half-replaced layout.
///
/// # Example
///
/// ```
/// use zenalign::{AlignEngine, OverviewContext, Rect, Size, ViewportBounds};
///
/// let mut engine = AlignEngine::default();
/// assert!(engine.change_zoom(0.5).is_none());
///
/// engine
///     .locate_fingerprint(
///         &OverviewContext::new(Size::new(1000.0, 800.0), Rect::new(400.0, 300.0, 100.0, 100.0)),
///         ViewportBounds::new(300.0, 300.0),
///     )
///     .unwrap();
///
/// let state = engine.change_zoom(1.0).unwrap();
/// assert_eq!(state.camera_preview_alpha, 0.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignEngine {
    config: AlignConfig,
    layout: Option<StaticLayout>,
}

impl AlignEngine {
    /// Create an engine, validating `config` up front.
    pub fn new(config: AlignConfig) -> Result<Self, AlignError> {
        config.validate()?;
        Ok(Self {
            config,
            layout: None,
        })
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Replace the opacity range. Takes effect on the next zoom update.
    pub fn set_alpha_bounds(&mut self, alpha: AlphaBounds) -> Result<(), AlignError> {
        alpha.validate()?;
        self.config.alpha = alpha;
        Ok(())
    }

    /// Solve and publish a new layout for `context` inside `viewport`.
    ///
    /// On error the previously published layout, if any, stays in place.
    pub fn locate_fingerprint(
        &mut self,
        context: &OverviewContext,
        viewport: ViewportBounds,
    ) -> Result<StaticLayout, AlignError> {
        let solved = layout::solve(context, viewport, self.config.margin_factor)?;
        self.layout = Some(solved);
        Ok(solved)
    }

    /// The currently published layout.
    pub fn layout(&self) -> Option<&StaticLayout> {
        self.layout.as_ref()
    }

    /// Drop the published layout.
    pub fn clear(&mut self) {
        self.layout = None;
    }

    /// Camera-preview opacity right after a new layout is published.
    pub fn initial_camera_preview_alpha(&self) -> f64 {
        self.config.alpha.max
    }

    /// Interpolate for `value`, or `None` before the first successful
    /// [`locate_fingerprint`](Self::locate_fingerprint).
    pub fn change_zoom(&self, value: f64) -> Option<ZoomState> {
        self.layout
            .as_ref()
            .map(|l| zoom::update(l, value, &self.config.alpha))
    }

    /// Zoom value matching a zoom scale set directly on the scroll surface.
    pub fn zoom_value_for_scale(&self, zoom_scale: f64) -> Option<f64> {
        self.layout
            .as_ref()
            .map(|l| zoom::zoom_value_for_scale(l, zoom_scale))
    }
}
