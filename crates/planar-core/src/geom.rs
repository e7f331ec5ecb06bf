//! Geometry primitives: [`Point`], [`Point2`], [`Rect`], [`Circle`] and
//! [`Segment`].
//!
//! `Point` addresses integer grid cells (pathfinding). The other types live
//! in continuous screen space: X grows right, Y grows down.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::number;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid cell. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Point2
// ---------------------------------------------------------------------------

/// A continuous 2D point, also used as a free vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `a` (t = 0) and `b` (t = 1).
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::new(number::lerp(t, a.x, b.x), number::lerp(t, a.y, b.y))
    }

    /// Swap and negate both axes: `(-y, -x)`.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::new(-self.y, -self.x)
    }

    /// Perpendicular vector `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle (radians) of the direction from `self` towards `other`.
    #[inline]
    pub fn angle_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Angle (radians) of the direction from `other` towards `self`.
    #[inline]
    pub fn angle_from(self, other: Self) -> f64 {
        (self.y - other.y).atan2(self.x - other.x)
    }

    /// Rotate around `anchor` by `angle` radians.
    ///
    /// With Y growing down, a positive angle turns the point
    /// counter-clockwise on screen.
    pub fn rotate(self, anchor: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - anchor.x;
        let dy = self.y - anchor.y;
        Self::new(
            dx * cos + dy * sin + anchor.x,
            -dx * sin + dy * cos + anchor.y,
        )
    }

    /// Clamp each axis into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            number::clamp(min.x, self.x, max.x),
            number::clamp(min.y, self.y, max.y),
        )
    }

    /// Wrap each axis around the `[min, max]` boundary (see
    /// [`number::range_loop`]).
    #[inline]
    pub fn wrap(self, min: Self, max: Self) -> Self {
        Self::new(
            number::range_loop(min.x, self.x, max.x),
            number::range_loop(min.y, self.y, max.y),
        )
    }

    /// Component-wise sum of all points.
    pub fn sum(points: &[Self]) -> Self {
        points.iter().fold(Self::ZERO, |acc, &p| acc + p)
    }

    /// Centroid of the points, or `None` when there are none.
    pub fn average(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self::sum(points) / points.len() as f64)
    }

    /// Move `length` units in direction `angle`.
    #[inline]
    pub fn translate_by_vector(self, angle: f64, length: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x + cos * length, self.y + sin * length)
    }

    /// Convert `[0, 1]` ratios into rounded screen coordinates.
    #[inline]
    pub fn from_ratio(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new((width * x).round(), (height * y).round())
    }

    /// Euclidean norm of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// ---------------------------------------------------------------------------
// Located
// ---------------------------------------------------------------------------

/// Anything with a position in continuous space.
///
/// Spatial containers and distance helpers are generic over this trait.
/// It is implemented for references, so a container can hold `&T` and
/// leave ownership with the caller.
pub trait Located {
    fn position(&self) -> Point2;
}

impl Located for Point2 {
    #[inline]
    fn position(&self) -> Point2 {
        *self
    }
}

impl Located for Point {
    #[inline]
    fn position(&self) -> Point2 {
        Point2::from(*self)
    }
}

impl Located for Circle {
    #[inline]
    fn position(&self) -> Point2 {
        self.center()
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn position(&self) -> Point2 {
        (**self).position()
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle given by its centre `(x, y)` and half-extents
/// `(w, h)`. It covers `[x - w, x + w] × [y - h, y + h]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Build from two opposite corners, in any order.
    pub fn from_min_max(a: Point2, b: Point2) -> Self {
        let min = Point2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point2::new(a.x.max(b.x), a.y.max(b.y));
        Self {
            x: (min.x + max.x) / 2.0,
            y: (min.y + max.y) / 2.0,
            w: (max.x - min.x) / 2.0,
            h: (max.y - min.y) / 2.0,
        }
    }

    #[inline]
    pub fn center(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Top-left corner.
    #[inline]
    pub fn min(self) -> Point2 {
        Point2::new(self.x - self.w, self.y - self.h)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Point2 {
        Point2::new(self.x + self.w, self.y + self.h)
    }

    /// Full width (twice the half-extent).
    #[inline]
    pub fn width(self) -> f64 {
        self.w * 2.0
    }

    /// Full height (twice the half-extent).
    #[inline]
    pub fn height(self) -> f64 {
        self.h * 2.0
    }

    /// The four quadrants in NW, NE, SW, SE order.
    ///
    /// North is `y - h/2` and west is `x - w/2`; each quadrant has
    /// half-extents `(w/2, h/2)`.
    pub fn quadrants(self) -> [Rect; 4] {
        let w = self.w / 2.0;
        let h = self.h / 2.0;
        [
            Rect::new(self.x - w, self.y - h, w, h),
            Rect::new(self.x + w, self.y - h, w, h),
            Rect::new(self.x - w, self.y + h, w, h),
            Rect::new(self.x + w, self.y + h, w, h),
        ]
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min(), self.max())
    }
}

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    #[inline]
    pub fn center(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A line segment from `p1` to `p2`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    #[inline]
    pub const fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// 2D cross product of the two endpoints taken as vectors.
    #[inline]
    pub fn wedge(self) -> f64 {
        self.p1.x * self.p2.y - self.p1.y * self.p2.x
    }

    /// The displacement `p2 - p1`.
    #[inline]
    pub fn to_vector(self) -> Point2 {
        self.p2 - self.p1
    }

    /// Unit direction vector; the zero vector for a degenerate segment.
    pub fn normalized(self) -> Point2 {
        let len = self.length();
        if len == 0.0 {
            return Point2::ZERO;
        }
        self.to_vector() / len
    }

    /// Double the segment's length.
    ///
    /// Forward keeps `p1` and pushes `p2` further along the direction of
    /// travel; backward keeps `p2` and pulls `p1` back.
    pub fn extended(self, backward: bool) -> Self {
        let d = self.to_vector();
        if backward {
            Self::new(self.p1 - d, self.p2)
        } else {
            Self::new(self.p1, self.p2 + d)
        }
    }

    #[inline]
    pub fn center(self) -> Point2 {
        Point2::lerp(self.p1, self.p2, 0.5)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.to_vector().length()
    }

    /// Angle of travel from `p1` to `p2`.
    #[inline]
    pub fn forward_angle(self) -> f64 {
        self.p1.angle_to(self.p2)
    }

    /// Angle of travel from `p2` to `p1`.
    #[inline]
    pub fn backward_angle(self) -> f64 {
        self.p1.angle_from(self.p2)
    }

    /// Point at parameter `t` (0 at `p1`, 1 at `p2`).
    #[inline]
    pub fn interpolate(self, t: f64) -> Point2 {
        Point2::new(
            t * self.p2.x + (1.0 - t) * self.p1.x,
            t * self.p2.y + (1.0 - t) * self.p1.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn close(a: Point2, b: Point2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // -----------------------------------------------------------------------
    // Point
    // -----------------------------------------------------------------------

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    // -----------------------------------------------------------------------
    // Point2
    // -----------------------------------------------------------------------

    #[test]
    fn point2_lerp_and_average() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, -4.0);
        assert_eq!(Point2::lerp(a, b, 0.5), Point2::new(5.0, -2.0));
        assert_eq!(
            Point2::average(&[a, b, Point2::new(2.0, 1.0)]),
            Some(Point2::new(4.0, -1.0))
        );
        assert_eq!(Point2::average(&[]), None);
    }

    #[test]
    fn point2_perp_and_opposite() {
        let p = Point2::new(2.0, 3.0);
        assert_eq!(p.perp(), Point2::new(-3.0, 2.0));
        assert_eq!(p.opposite(), Point2::new(-3.0, -2.0));
        assert_eq!(p.dot(p.perp()), 0.0);
    }

    #[test]
    fn point2_angles() {
        let o = Point2::ZERO;
        let down = Point2::new(0.0, 1.0);
        assert!((o.angle_to(down) - FRAC_PI_2).abs() < EPS);
        assert!((o.angle_from(down) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn point2_rotate_quarter_turn() {
        let p = Point2::new(2.0, 1.0);
        let anchor = Point2::new(1.0, 1.0);
        assert!(close(p.rotate(anchor, FRAC_PI_2), Point2::new(1.0, 0.0)));
        assert!(close(p.rotate(anchor, PI), Point2::new(0.0, 1.0)));
    }

    #[test]
    fn point2_clamp_and_translate() {
        let p = Point2::new(-5.0, 50.0);
        let c = p.clamp(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert_eq!(c, Point2::new(0.0, 10.0));
        let t = Point2::ZERO.translate_by_vector(0.0, 3.0);
        assert!(close(t, Point2::new(3.0, 0.0)));
    }

    #[test]
    fn point2_from_ratio_rounds() {
        assert_eq!(
            Point2::from_ratio(0.5, 0.333, 300.0, 200.0),
            Point2::new(150.0, 67.0)
        );
    }

    // -----------------------------------------------------------------------
    // Rect / Segment
    // -----------------------------------------------------------------------

    #[test]
    fn rect_corners_and_size() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(r.min(), Point2::new(-10.0, -5.0));
        assert_eq!(r.max(), Point2::new(10.0, 5.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 10.0);
        assert_eq!(Rect::from_min_max(r.max(), r.min()), r);
    }

    #[test]
    fn rect_quadrants_tile_parent() {
        let r = Rect::new(4.0, -2.0, 8.0, 6.0);
        let [nw, ne, sw, se] = r.quadrants();
        for q in [nw, ne, sw, se] {
            assert_eq!((q.w, q.h), (4.0, 3.0));
        }
        assert_eq!(nw.min(), r.min());
        assert_eq!(se.max(), r.max());
        assert_eq!(ne.min(), Point2::new(4.0, -8.0));
        assert_eq!(sw.max(), Point2::new(4.0, 4.0));
        let area: f64 = [nw, ne, sw, se].iter().map(|q| q.width() * q.height()).sum();
        assert_eq!(area, r.width() * r.height());
    }

    #[test]
    fn segment_measures() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.center(), Point2::new(1.5, 2.0));
        assert!(close(s.normalized(), Point2::new(0.6, 0.8)));
        assert_eq!(s.interpolate(1.0), s.p2);
        assert_eq!(s.wedge(), 0.0);
        let deg = Segment::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert_eq!(deg.normalized(), Point2::ZERO);
    }

    #[test]
    fn segment_extended_both_ways() {
        let s = Segment::new(Point2::new(1.0, 1.0), Point2::new(2.0, 1.0));
        assert_eq!(s.extended(false).p2, Point2::new(3.0, 1.0));
        assert_eq!(s.extended(false).p1, s.p1);
        assert_eq!(s.extended(true).p1, Point2::new(0.0, 1.0));
        assert_eq!(s.extended(true).p2, s.p2);
        assert!((s.forward_angle()).abs() < EPS);
        assert!((s.backward_angle() - PI).abs() < EPS);
    }

    #[test]
    fn located_through_reference() {
        let p = Point2::new(1.0, 2.0);
        let r = &p;
        assert_eq!(r.position(), p);
        assert_eq!(Point::new(3, 4).position(), Point2::new(3.0, 4.0));
    }
}
