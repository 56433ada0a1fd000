//! Zoom interpolation: one scalar in `0.0..=1.0` → scroll transform and preview opacity.
//!
//! `0.0` shows the whole overview with no pan. `1.0` zooms to
//! [`StaticLayout::max_zoom_scale`] with the camera preview centered in the
//! viewport. Every output is a linear function of the zoom value, computed
//! fresh on each call, so [`update`] is safe to call per frame during a
//! gesture.
//!
//! # Example
//!
//! ```
//! use zenalign::{AlphaBounds, OverviewContext, Rect, Size, ViewportBounds, layout, zoom};
//!
//! let context = OverviewContext::new(
//!     Size::new(1000.0, 800.0),
//!     Rect::new(400.0, 300.0, 100.0, 100.0),
//! );
//! let layout = layout::solve(&context, ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
//!
//! let zoomed_out = zoom::update(&layout, 0.0, &AlphaBounds::default());
//! assert_eq!(zoomed_out.zoom_scale, layout.min_zoom_scale);
//! assert_eq!(zoomed_out.camera_preview_alpha, 0.8);
//!
//! let zoomed_in = zoom::update(&layout, 1.0, &AlphaBounds::default());
//! assert_eq!(zoomed_in.zoom_scale, layout.max_zoom_scale);
//! ```

use crate::config::AlphaBounds;
use crate::geometry::{Point, Rect, ScaleTranslate};
use crate::layout::StaticLayout;

/// Interpolated scroll and opacity for one zoom value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomState {
    /// Zoom value after clamping to `0.0..=1.0`.
    pub zoom_value: f64,
    /// Scroll offset of the zoomed content, in screen points.
    pub content_offset: Point,
    /// Scale applied to the content.
    pub zoom_scale: f64,
    /// Opacity of the camera preview layer.
    pub camera_preview_alpha: f64,
}

impl ZoomState {
    /// Content → screen transform of the scroll surface:
    /// `screen = content * zoom_scale - content_offset`.
    pub fn transform(&self) -> ScaleTranslate {
        ScaleTranslate::new(
            self.zoom_scale,
            Point::new(-self.content_offset.x, -self.content_offset.y),
        )
    }

    /// Where the camera preview currently appears in the viewport.
    pub fn camera_preview_on_screen(&self, layout: &StaticLayout) -> Rect {
        self.transform().apply_rect(&layout.camera_preview_frame)
    }

    /// Map a viewport point back to unzoomed content coordinates.
    pub fn viewport_to_content(&self, point: Point) -> Point {
        Point::new(
            (point.x + self.content_offset.x) / self.zoom_scale,
            (point.y + self.content_offset.y) / self.zoom_scale,
        )
    }

    /// Map a viewport point to overview-image pixel coordinates.
    pub fn viewport_to_overview(&self, layout: &StaticLayout, point: Point) -> Point {
        let content = self.viewport_to_content(point);
        let origin = layout.overview_image_frame.origin;
        Point::new(
            (content.x - origin.x) / layout.scale_factor,
            (content.y - origin.y) / layout.scale_factor,
        )
    }
}

/// Clamp a raw zoom input into `0.0..=1.0`. NaN becomes `0.0`.
pub fn clamp_zoom_value(value: f64) -> f64 {
    if value.is_nan() {
        log::trace!("zoom value NaN, using 0");
        return 0.0;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        log::trace!("zoom value {value} clamped to {clamped}");
    }
    clamped
}

/// Interpolate scroll offset, zoom scale and preview opacity for `zoom_value`.
///
/// Out-of-range input is clamped, never rejected. The camera preview
/// center converges on the viewport center as the value approaches `1.0`.
/// Opacity runs from `alpha.max` at `0.0` down to `alpha.min` at `1.0`.
pub fn update(layout: &StaticLayout, zoom_value: f64, alpha: &AlphaBounds) -> ZoomState {
    let v = clamp_zoom_value(zoom_value);

    let zoom_scale = v * layout.zoom_span() + layout.min_zoom_scale;

    let half = layout.viewport.center();
    let focus = layout.camera_preview_center();
    let content_offset = Point::new(
        -(half.x - focus.x * layout.max_zoom_scale) * v,
        -(half.y - focus.y * layout.max_zoom_scale) * v,
    );

    ZoomState {
        zoom_value: v,
        content_offset,
        zoom_scale,
        camera_preview_alpha: alpha.lerp(1.0 - v),
    }
}

/// Zoom value that produces `zoom_scale`, clamped to `0.0..=1.0`.
///
/// Lets a slider follow a pinch applied directly to the scroll surface.
/// A layout with no zoom range maps everything to `0.0`.
pub fn zoom_value_for_scale(layout: &StaticLayout, zoom_scale: f64) -> f64 {
    let span = layout.zoom_span();
    if span <= 0.0 || span.is_nan() {
        return 0.0;
    }
    clamp_zoom_value((zoom_scale - layout.min_zoom_scale) / span)
}
