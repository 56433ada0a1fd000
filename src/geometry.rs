//! Points, sizes, rectangles and the uniform scale/translate transform.
//!
//! All coordinates are `f64` in a top-left origin, y-down space. Centering
//! always uses `(outer - inner) / 2` with no rounding, so layouts computed
//! here line up exactly with the zoom math in [`crate::zoom`].

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// A position in 2D space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn offset(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width × height extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero or negative.
    ///
    /// NaN axes count as empty too, since no layout can be derived from them.
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// Uniformly scale both axes.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Per-axis maximum of two sizes.
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Largest size with this aspect ratio that fits inside `bounds`.
    ///
    /// Both axes are scaled by the same factor: one axis matches `bounds`
    /// exactly, the other is ≤ its bound. Returns [`Size::ZERO`] when
    /// either size is empty.
    pub fn aspect_fit(self, bounds: Size) -> Self {
        if self.is_empty() || bounds.is_empty() {
            return Self::ZERO;
        }
        let ratio_w = bounds.width / self.width;
        let ratio_h = bounds.height / self.height;
        if ratio_w <= ratio_h {
            // Width constrains.
            Self::new(bounds.width, self.height * ratio_w)
        } else {
            Self::new(self.width * ratio_h, bounds.height)
        }
    }
}

/// Axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rect from origin coordinates and extent.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from an origin point and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rect of `size` centered inside `outer`.
    pub fn centered_in(size: Size, outer: Rect) -> Self {
        Self::from_origin_size(
            Point::new(
                outer.origin.x + (outer.size.width - size.width) / 2.0,
                outer.origin.y + (outer.size.height - size.height) / 2.0,
            ),
            size,
        )
    }

    /// A rect of `inner`'s aspect ratio, as large as possible, centered in `self`.
    ///
    /// The classic letterbox placement.
    pub fn aspect_fit(self, inner: Size) -> Self {
        Self::centered_in(inner.aspect_fit(self.size), self)
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Midpoint of the rect.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Whether the rect has zero (or negative) width or height.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Whether `other` lies entirely within this rect (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Smallest rect enclosing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.origin.x.min(other.origin.x);
        let y = self.origin.y.min(other.origin.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }

    /// Uniformly scale origin and size about `(0, 0)`.
    pub fn scale(&self, factor: f64) -> Rect {
        ScaleTranslate::scale(factor).apply_rect(self)
    }

    /// Move the rect by `delta`.
    pub fn translate(&self, delta: Point) -> Rect {
        Rect::from_origin_size(self.origin.offset(delta), self.size)
    }

    /// Smallest rect with integral edges that encloses this one.
    pub fn round_out(&self) -> Rect {
        let x = self.origin.x.floor();
        let y = self.origin.y.floor();
        let max_x = self.max_x().ceil();
        let max_y = self.max_y().ceil();
        Rect::new(x, y, max_x - x, max_y - y)
    }

    /// Edge-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Rect, epsilon: f64) -> bool {
        (self.origin.x - other.origin.x).abs() <= epsilon
            && (self.origin.y - other.origin.y).abs() <= epsilon
            && (self.size.width - other.size.width).abs() <= epsilon
            && (self.size.height - other.size.height).abs() <= epsilon
    }
}

/// Uniform scale followed by a translation: `p' = p * scale + translate`.
///
/// This is the only affine shape the alignment engine needs. A scroll
/// surface zoomed by `s` and scrolled to offset `o` is
/// `ScaleTranslate { scale: s, translate: -o }`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleTranslate {
    pub scale: f64,
    pub translate: Point,
}

impl Default for ScaleTranslate {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScaleTranslate {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Point::ZERO,
    };

    /// Pure scale about the origin.
    pub const fn scale(factor: f64) -> Self {
        Self {
            scale: factor,
            translate: Point::ZERO,
        }
    }

    pub const fn new(scale: f64, translate: Point) -> Self {
        Self { scale, translate }
    }

    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.translate.x,
            p.y * self.scale + self.translate.y,
        )
    }

    pub fn apply_size(&self, s: Size) -> Size {
        s.scale(self.scale)
    }

    pub fn apply_rect(&self, r: &Rect) -> Rect {
        Rect::from_origin_size(self.apply_point(r.origin), self.apply_size(r.size))
    }

    /// Inverse transform, or `None` for a zero or non-finite scale.
    pub fn invert(&self) -> Option<Self> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        let inv = 1.0 / self.scale;
        Some(Self {
            scale: inv,
            translate: Point::new(-self.translate.x * inv, -self.translate.y * inv),
        })
    }

    /// `self` applied after `first`.
    pub fn then(&self, first: &ScaleTranslate) -> Self {
        Self {
            scale: self.scale * first.scale,
            translate: self.apply_point(first.translate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aspect_fit_landscape_into_square() {
        let s = Size::new(1000.0, 800.0).aspect_fit(Size::new(300.0, 300.0));
        assert_relative_eq!(s.width, 300.0);
        assert_relative_eq!(s.height, 240.0);
    }

    #[test]
    fn aspect_fit_portrait_into_landscape() {
        // 500×1000 (1:2) into 400×300 → height constrains → 150×300
        let s = Size::new(500.0, 1000.0).aspect_fit(Size::new(400.0, 300.0));
        assert_relative_eq!(s.width, 150.0);
        assert_relative_eq!(s.height, 300.0);
    }

    #[test]
    fn aspect_fit_upscales() {
        let s = Size::new(10.0, 5.0).aspect_fit(Size::new(400.0, 400.0));
        assert_relative_eq!(s.width, 400.0);
        assert_relative_eq!(s.height, 200.0);
    }

    #[test]
    fn aspect_fit_empty_is_zero() {
        assert_eq!(Size::ZERO.aspect_fit(Size::new(10.0, 10.0)), Size::ZERO);
        assert_eq!(Size::new(10.0, 10.0).aspect_fit(Size::ZERO), Size::ZERO);
    }

    #[test]
    fn rect_aspect_fit_letterboxes() {
        let outer = Rect::new(0.0, 0.0, 300.0, 300.0);
        let r = outer.aspect_fit(Size::new(1000.0, 800.0));
        assert_eq!(r, Rect::new(0.0, 30.0, 300.0, 240.0));
    }

    #[test]
    fn centered_in_has_no_rounding_bias() {
        let r = Rect::centered_in(Size::new(3.0, 3.0), Rect::new(10.0, 20.0, 4.0, 6.0));
        assert_eq!(r.origin, Point::new(10.5, 21.5));
    }

    #[test]
    fn center_and_edges() {
        let r = Rect::new(120.0, 120.0, 30.0, 30.0);
        assert_eq!(r.center(), Point::new(135.0, 135.0));
        assert_eq!(r.max_x(), 150.0);
        assert_eq!(r.max_y(), 150.0);
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(Rect::new(0.0, 0.0, f64::NAN, 1.0).is_empty());
        assert!(!Rect::new(-5.0, -5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&Rect::new(90.0, 90.0, 10.0, 10.0)));
        assert!(!outer.contains_rect(&Rect::new(90.0, 90.0, 10.5, 10.0)));
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn round_out_encloses() {
        let r = Rect::new(0.5, 1.25, 2.0, 2.0).round_out();
        assert_eq!(r, Rect::new(0.0, 1.0, 3.0, 3.0));
    }

    #[test]
    fn scale_translate_inverse() {
        let t = ScaleTranslate::new(8.5, Point::new(-997.5, -997.5));
        let inv = t.invert().unwrap();
        let p = Point::new(135.0, 135.0);
        let back = inv.apply_point(t.apply_point(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
        assert!(ScaleTranslate::scale(0.0).invert().is_none());
    }

    #[test]
    fn then_composes_in_order() {
        let first = ScaleTranslate::new(2.0, Point::new(1.0, 0.0));
        let second = ScaleTranslate::new(3.0, Point::new(0.0, 5.0));
        let combined = second.then(&first);
        let p = Point::new(4.0, 4.0);
        assert_eq!(
            combined.apply_point(p),
            second.apply_point(first.apply_point(p))
        );
    }
}
