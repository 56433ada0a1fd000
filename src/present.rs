//! Boundary to the presentation layer.
//!
//! The engine never touches on-screen elements. A UI implements
//! [`RenderSink`] for whatever owns its overview image view, scroll surface
//! and camera layer, and [`Presenter`] pushes every solved layout and zoom
//! state into it. Sinks must apply these on the thread that owns
//! rendering; nothing here has thread affinity.

use crate::config::AlphaBounds;
use crate::engine::AlignEngine;
use crate::geometry::{Point, Rect};
use crate::layout::{AlignError, OverviewContext, StaticLayout, ViewportBounds};
use crate::zoom::ZoomState;

/// Receives geometry from the engine and applies it to on-screen elements.
pub trait RenderSink {
    /// Position the overview image and the camera preview, in unzoomed
    /// viewport coordinates.
    fn apply_frames(&mut self, overview_image_frame: Rect, camera_preview_frame: Rect);

    /// Set the allowed zoom range of the scroll surface.
    fn apply_zoom_range(&mut self, min_zoom_scale: f64, max_zoom_scale: f64);

    /// Scroll and scale the content.
    fn apply_zoom(&mut self, content_offset: Point, zoom_scale: f64);

    /// Set the camera preview layer's opacity.
    fn apply_camera_alpha(&mut self, alpha: f64);

    /// Apply everything a freshly solved layout defines.
    fn apply_layout(&mut self, layout: &StaticLayout) {
        self.apply_frames(layout.overview_image_frame, layout.camera_preview_frame);
        self.apply_zoom_range(layout.min_zoom_scale, layout.max_zoom_scale);
    }

    /// Apply one interpolated zoom state.
    fn apply_state(&mut self, state: &ZoomState) {
        self.apply_zoom(state.content_offset, state.zoom_scale);
        self.apply_camera_alpha(state.camera_preview_alpha);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn apply_frames(&mut self, overview_image_frame: Rect, camera_preview_frame: Rect) {
        (**self).apply_frames(overview_image_frame, camera_preview_frame)
    }

    fn apply_zoom_range(&mut self, min_zoom_scale: f64, max_zoom_scale: f64) {
        (**self).apply_zoom_range(min_zoom_scale, max_zoom_scale)
    }

    fn apply_zoom(&mut self, content_offset: Point, zoom_scale: f64) {
        (**self).apply_zoom(content_offset, zoom_scale)
    }

    fn apply_camera_alpha(&mut self, alpha: f64) {
        (**self).apply_camera_alpha(alpha)
    }

    fn apply_layout(&mut self, layout: &StaticLayout) {
        (**self).apply_layout(layout)
    }

    fn apply_state(&mut self, state: &ZoomState) {
        (**self).apply_state(state)
    }
}

/// Drives an [`AlignEngine`] into a [`RenderSink`].
#[derive(Debug)]
pub struct Presenter<S> {
    engine: AlignEngine,
    sink: S,
}

impl<S: RenderSink> Presenter<S> {
    pub fn new(engine: AlignEngine, sink: S) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &AlignEngine {
        &self.engine
    }

    /// Direct engine access. Changes made here reach the sink on the next
    /// [`locate_fingerprint`](Self::locate_fingerprint) or
    /// [`change_zoom`](Self::change_zoom).
    pub fn engine_mut(&mut self) -> &mut AlignEngine {
        &mut self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (AlignEngine, S) {
        (self.engine, self.sink)
    }

    /// Solve a new layout and apply it, resetting the preview to its
    /// zoomed-out opacity. Nothing reaches the sink on error.
    pub fn locate_fingerprint(
        &mut self,
        context: &OverviewContext,
        viewport: ViewportBounds,
    ) -> Result<StaticLayout, AlignError> {
        let layout = self.engine.locate_fingerprint(context, viewport)?;
        self.sink.apply_layout(&layout);
        self.sink
            .apply_camera_alpha(self.engine.initial_camera_preview_alpha());
        Ok(layout)
    }

    /// Replace the opacity range and re-apply the preview alpha for
    /// `zoom_value`, if a layout is published.
    pub fn set_alpha_bounds(
        &mut self,
        alpha: AlphaBounds,
        zoom_value: f64,
    ) -> Result<Option<ZoomState>, AlignError> {
        self.engine.set_alpha_bounds(alpha)?;
        Ok(self.change_zoom(zoom_value))
    }

    /// Interpolate for `value` and apply the result. `None` (and no sink
    /// calls) before the first layout.
    pub fn change_zoom(&mut self, value: f64) -> Option<ZoomState> {
        let state = self.engine.change_zoom(value)?;
        self.sink.apply_state(&state);
        Some(state)
    }
}
