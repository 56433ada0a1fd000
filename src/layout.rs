//! Static layout of the overview image and camera preview inside a viewport.
//!
//! Given the overview image size and the fingerprint rectangle (in overview
//! pixel coordinates), [`solve`] letterboxes the overview into the viewport
//! and places the camera preview exactly over the region the fingerprint
//! maps to. The result also carries the zoom range the
//! [`zoom`](crate::zoom) interpolator works within.
//!
//! # Example
//!
//! ```
//! use zenalign::{OverviewContext, Rect, Size, ViewportBounds, layout};
//!
//! let context = OverviewContext::new(
//!     Size::new(1000.0, 800.0),
//!     Rect::new(400.0, 300.0, 100.0, 100.0),
//! );
//! let layout = layout::solve(&context, ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
//!
//! assert_eq!(layout.camera_preview_frame.size, Size::new(30.0, 30.0));
//! assert!(layout.max_zoom_scale >= layout.min_zoom_scale);
//! ```

use core::fmt;

use crate::geometry::{Point, Rect, ScaleTranslate, Size};

/// Smallest zoom scale: the whole overview is visible.
pub const MIN_ZOOM_SCALE: f64 = 1.0;

/// What the caller wants aligned: an overview image and a fingerprint region within it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverviewContext {
    /// Overview image dimensions in pixels.
    pub overview_size: Size,
    /// Fingerprint region in overview pixel coordinates.
    pub fingerprint_rect: Rect,
}

impl OverviewContext {
    pub const fn new(overview_size: Size, fingerprint_rect: Rect) -> Self {
        Self {
            overview_size,
            fingerprint_rect,
        }
    }

    /// Extent that must fit in the viewport.
    ///
    /// Normally the overview itself. A fingerprint larger than the overview
    /// along an axis widens that axis instead of overflowing the viewport.
    pub fn context_size(&self) -> Size {
        self.overview_size.max(self.fingerprint_rect.size)
    }

    fn validate(&self) -> Result<(), AlignError> {
        if !self.overview_size.is_finite() || !self.fingerprint_rect.is_finite() {
            return Err(AlignError::NonFiniteInput);
        }
        if self.overview_size.is_empty() {
            return Err(AlignError::ZeroOverviewSize);
        }
        if self.fingerprint_rect.is_empty() {
            return Err(AlignError::EmptyFingerprint);
        }
        Ok(())
    }
}

/// Size of the fixed display area. Its origin is always `(0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub width: f64,
    pub height: f64,
}

impl ViewportBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<Size> for ViewportBounds {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// One resolved layout. Immutable; a new request produces a new value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticLayout {
    /// Viewport the layout was solved for.
    pub viewport: ViewportBounds,
    /// Context extent letterboxed into the viewport.
    pub context_within_viewport: Rect,
    /// Where the overview image is drawn, in viewport coordinates.
    pub overview_image_frame: Rect,
    /// Where the camera preview is drawn, in viewport coordinates.
    pub camera_preview_frame: Rect,
    /// Overview pixels → viewport points.
    pub scale_factor: f64,
    /// Always [`MIN_ZOOM_SCALE`].
    pub min_zoom_scale: f64,
    /// Zoom at which the camera preview fills the viewport minus the margin.
    pub max_zoom_scale: f64,
}

impl StaticLayout {
    /// Midpoint of the camera preview, the focal point of every zoom.
    pub fn camera_preview_center(&self) -> Point {
        self.camera_preview_frame.center()
    }

    /// Maps overview-image pixel coordinates to unzoomed viewport coordinates.
    pub fn overview_to_viewport(&self) -> ScaleTranslate {
        ScaleTranslate::new(self.scale_factor, self.overview_image_frame.origin)
    }

    /// Width of the zoom range.
    pub fn zoom_span(&self) -> f64 {
        self.max_zoom_scale - self.min_zoom_scale
    }
}

/// Rejected alignment request. Every variant is a caller error and is never retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlignError {
    /// Overview image has zero width or height.
    ZeroOverviewSize,
    /// Fingerprint rectangle has zero (or negative) width or height.
    EmptyFingerprint,
    /// Viewport has zero width or height.
    ZeroViewport,
    /// A coordinate or extent is NaN or infinite.
    NonFiniteInput,
    /// Margin factor is not a positive finite number.
    InvalidMarginFactor,
    /// Alpha range outside `0.0..=1.0` or `min > max`.
    InvalidAlphaBounds,
    /// Fingerprint too small relative to the overview: the zoom needed to
    /// frame it overflows `f64`.
    ZoomOverflow,
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ZeroOverviewSize => "overview image has zero area",
            Self::EmptyFingerprint => "fingerprint rectangle is empty",
            Self::ZeroViewport => "viewport has zero area",
            Self::NonFiniteInput => "input contains NaN or infinite values",
            Self::InvalidMarginFactor => "margin factor must be positive and finite",
            Self::InvalidAlphaBounds => "alpha bounds must satisfy 0 <= min <= max <= 1",
            Self::ZoomOverflow => "fingerprint too small to zoom to at finite scale",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for AlignError {}

/// Compute the static layout for `context` inside `viewport`.
///
/// Fails before deriving any geometry when the overview has zero area, the
/// fingerprint is empty, the viewport has zero area, any input is not finite,
/// or `margin_factor` is not a positive finite number. Fails with
/// [`AlignError::ZoomOverflow`] when the fingerprint is so small relative to
/// the overview that full zoom is not representable.
pub fn solve(
    context: &OverviewContext,
    viewport: ViewportBounds,
    margin_factor: f64,
) -> Result<StaticLayout, AlignError> {
    context.validate()?;
    let viewport_size = viewport.size();
    if !viewport_size.is_finite() {
        return Err(AlignError::NonFiniteInput);
    }
    if viewport_size.is_empty() {
        return Err(AlignError::ZeroViewport);
    }
    if !(margin_factor.is_finite() && margin_factor > 0.0) {
        return Err(AlignError::InvalidMarginFactor);
    }

    let context_size = context.context_size();
    let context_within_viewport = viewport.rect().aspect_fit(context_size);
    let scale_factor = context_within_viewport.width() / context_size.width;

    let to_viewport = ScaleTranslate::scale(scale_factor);
    let scaled_fingerprint = to_viewport.apply_rect(&context.fingerprint_rect);
    let scaled_overview = to_viewport.apply_size(context.overview_size);

    let overview_image_frame = Rect::centered_in(scaled_overview, context_within_viewport);
    let camera_preview_frame = scaled_fingerprint.translate(overview_image_frame.origin);

    let max_zoom_scale = max_zoom_scale(
        viewport_size,
        &camera_preview_frame,
        &overview_image_frame,
        margin_factor,
    );
    // Full-zoom scroll offset must stay finite too.
    let focus = camera_preview_frame.center();
    if !(max_zoom_scale.is_finite()
        && (focus.x * max_zoom_scale).is_finite()
        && (focus.y * max_zoom_scale).is_finite())
    {
        log::debug!(
            "zoom overflow: camera {:?} inside {:?}",
            camera_preview_frame,
            overview_image_frame
        );
        return Err(AlignError::ZoomOverflow);
    }

    let layout = StaticLayout {
        viewport,
        context_within_viewport,
        overview_image_frame,
        camera_preview_frame,
        scale_factor,
        min_zoom_scale: MIN_ZOOM_SCALE,
        max_zoom_scale,
    };
    log::debug!(
        "solved layout: scale {:.4}, overview {:?}, camera {:?}, zoom {}..{:.4}",
        layout.scale_factor,
        layout.overview_image_frame,
        layout.camera_preview_frame,
        layout.min_zoom_scale,
        layout.max_zoom_scale
    );
    Ok(layout)
}

/// Zoom at which the smaller of camera preview and overview fills the
/// viewport on its tighter axis, shrunk by `margin_factor`.
///
/// Never below [`MIN_ZOOM_SCALE`]: when the fingerprint already fills the
/// viewport the margin would otherwise ask for a zoom-out.
fn max_zoom_scale(viewport: Size, camera: &Rect, overview: &Rect, margin_factor: f64) -> f64 {
    let fit_w = viewport.width / camera.width().min(overview.width());
    let fit_h = viewport.height / camera.height().min(overview.height());
    (margin_factor * fit_w.min(fit_h)).max(MIN_ZOOM_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_context() -> OverviewContext {
        OverviewContext::new(
            Size::new(1000.0, 800.0),
            Rect::new(400.0, 300.0, 100.0, 100.0),
        )
    }

    #[test]
    fn reference_layout() {
        let l = solve(&reference_context(), ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
        assert_relative_eq!(l.scale_factor, 0.3);
        assert!(
            l.context_within_viewport
                .approx_eq(&Rect::new(0.0, 30.0, 300.0, 240.0), 1e-9)
        );
        assert!(
            l.overview_image_frame
                .approx_eq(&Rect::new(0.0, 30.0, 300.0, 240.0), 1e-9)
        );
        assert!(
            l.camera_preview_frame
                .approx_eq(&Rect::new(120.0, 120.0, 30.0, 30.0), 1e-9)
        );
        // min(300 / min(30, 300), 300 / min(30, 240)) = 10
        assert_relative_eq!(l.max_zoom_scale, 8.5, epsilon = 1e-9);
        assert_eq!(l.min_zoom_scale, 1.0);
    }

    #[test]
    fn portrait_viewport_letterboxes_vertically() {
        let l = solve(&reference_context(), ViewportBounds::new(200.0, 400.0), 0.85).unwrap();
        // 1000×800 into 200×400 → width constrains, scale 0.2 → 200×160
        assert_relative_eq!(l.scale_factor, 0.2);
        assert!(
            l.context_within_viewport
                .approx_eq(&Rect::new(0.0, 120.0, 200.0, 160.0), 1e-9)
        );
        assert!(
            l.camera_preview_frame
                .approx_eq(&Rect::new(80.0, 180.0, 20.0, 20.0), 1e-9)
        );
        // min(200 / 20, 400 / 20) * 0.85
        assert_relative_eq!(l.max_zoom_scale, 8.5, epsilon = 1e-9);
    }

    #[test]
    fn wide_viewport_pillarboxes() {
        let l = solve(&reference_context(), ViewportBounds::new(800.0, 400.0), 1.0).unwrap();
        // height constrains: scale 0.5 → 500×400 centered at x = 150
        assert_relative_eq!(l.scale_factor, 0.5);
        assert!(
            l.overview_image_frame
                .approx_eq(&Rect::new(150.0, 0.0, 500.0, 400.0), 1e-9)
        );
        assert!(
            l.camera_preview_frame
                .approx_eq(&Rect::new(350.0, 150.0, 50.0, 50.0), 1e-9)
        );
        assert_relative_eq!(l.max_zoom_scale, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn oversized_fingerprint_widens_context() {
        // Fingerprint taller than the overview: context becomes 1000×1200.
        let ctx = OverviewContext::new(
            Size::new(1000.0, 800.0),
            Rect::new(0.0, 0.0, 500.0, 1200.0),
        );
        assert_eq!(ctx.context_size(), Size::new(1000.0, 1200.0));
        let l = solve(&ctx, ViewportBounds::new(600.0, 600.0), 0.85).unwrap();
        assert_relative_eq!(l.scale_factor, 0.5);
        // Overview 500×400 centered inside the 500×600 context box.
        assert!(
            l.overview_image_frame
                .approx_eq(&Rect::new(50.0, 100.0, 500.0, 400.0), 1e-9)
        );
    }

    #[test]
    fn full_frame_fingerprint_keeps_zoom_range_valid() {
        let ctx = OverviewContext::new(
            Size::new(300.0, 300.0),
            Rect::new(0.0, 0.0, 300.0, 300.0),
        );
        let l = solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
        // Raw maximum would be 0.85; clamped to the minimum.
        assert_eq!(l.max_zoom_scale, MIN_ZOOM_SCALE);
        assert_eq!(l.zoom_span(), 0.0);
    }

    #[test]
    fn overview_to_viewport_maps_fingerprint_to_camera_frame() {
        let l = solve(&reference_context(), ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
        let mapped = l
            .overview_to_viewport()
            .apply_rect(&reference_context().fingerprint_rect);
        assert!(mapped.approx_eq(&l.camera_preview_frame, 1e-9));
    }

    #[test]
    fn rejects_zero_overview() {
        let ctx = OverviewContext::new(Size::new(0.0, 800.0), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85),
            Err(AlignError::ZeroOverviewSize)
        );
    }

    #[test]
    fn rejects_empty_fingerprint() {
        let ctx = OverviewContext::new(
            Size::new(1000.0, 800.0),
            Rect::new(10.0, 10.0, 100.0, 0.0),
        );
        assert_eq!(
            solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85),
            Err(AlignError::EmptyFingerprint)
        );
    }

    #[test]
    fn rejects_zero_viewport() {
        assert_eq!(
            solve(&reference_context(), ViewportBounds::new(300.0, 0.0), 0.85),
            Err(AlignError::ZeroViewport)
        );
    }

    #[test]
    fn rejects_non_finite() {
        let ctx = OverviewContext::new(
            Size::new(f64::INFINITY, 800.0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
        );
        assert_eq!(
            solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85),
            Err(AlignError::NonFiniteInput)
        );
        assert_eq!(
            solve(&reference_context(), ViewportBounds::new(f64::NAN, 300.0), 0.85),
            Err(AlignError::NonFiniteInput)
        );
    }

    #[test]
    fn rejects_bad_margin() {
        assert_eq!(
            solve(&reference_context(), ViewportBounds::new(300.0, 300.0), -1.0),
            Err(AlignError::InvalidMarginFactor)
        );
    }

    #[test]
    fn rejects_subnormal_camera_frame() {
        let ctx = OverviewContext::new(
            Size::new(1e6, 1e6),
            Rect::new(10.0, 10.0, 1e-320, 1e-320),
        );
        assert_eq!(
            solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85),
            Err(AlignError::ZoomOverflow)
        );
    }

    #[test]
    fn rejects_extreme_overview_to_fingerprint_ratio() {
        let ctx = OverviewContext::new(
            Size::new(1e300, 1e300),
            Rect::new(0.0, 0.0, 1e-10, 1e-10),
        );
        assert_eq!(
            solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85),
            Err(AlignError::ZoomOverflow)
        );
    }

    #[test]
    fn tiny_fingerprint_still_interpolates_from_min() {
        // Small but representable: zoom 0 must stay the untouched overview.
        let ctx = OverviewContext::new(
            Size::new(1e6, 1e6),
            Rect::new(10.0, 10.0, 1e-3, 1e-3),
        );
        let l = solve(&ctx, ViewportBounds::new(300.0, 300.0), 0.85).unwrap();
        assert!(l.max_zoom_scale.is_finite());
        let s = crate::zoom::update(&l, 0.0, &crate::config::AlphaBounds::default());
        assert_eq!(s.zoom_scale, l.min_zoom_scale);
        assert_eq!(s.content_offset, Point::ZERO);
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_messages() {
        use std::string::ToString;
        assert_eq!(
            AlignError::EmptyFingerprint.to_string(),
            "fingerprint rectangle is empty"
        );
    }
}
