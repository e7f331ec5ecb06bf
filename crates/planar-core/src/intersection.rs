//! Containment and intersection predicates.
//!
//! Rectangles are in centre/half-extent form (see [`Rect`]); every test is
//! closed, so touching edges count as intersecting.

use crate::distance;
use crate::geom::{Circle, Point2, Rect, Segment};
use crate::number::in_range;

/// Half-width of the band around a segment accepted by
/// [`point_on_segment`].
pub const SEGMENT_TOLERANCE: f64 = 0.1;

/// Whether `point` lies inside or on the edge of `rect`.
#[inline]
pub fn point_in_rect(point: Point2, rect: Rect) -> bool {
    in_range(point.x, rect.x - rect.w, rect.x + rect.w)
        && in_range(point.y, rect.y - rect.h, rect.y + rect.h)
}

/// Whether `point` lies inside `circle`. With `strict`, points on the
/// circumference are excluded.
#[inline]
pub fn point_in_circle(point: Point2, circle: Circle, strict: bool) -> bool {
    let d = distance::point_to_circle(point, circle);
    if strict { d < 0.0 } else { d <= 0.0 }
}

/// Whether `circle` and `rect` overlap.
pub fn circle_in_rect(circle: Circle, rect: Rect) -> bool {
    let dist_x = (circle.x - rect.x).abs();
    let dist_y = (circle.y - rect.y).abs();

    if dist_x > rect.w + circle.radius || dist_y > rect.h + circle.radius {
        return false;
    }
    if dist_x <= rect.w || dist_y <= rect.h {
        return true;
    }

    // Only the corner region is left.
    let dx = dist_x - rect.w;
    let dy = dist_y - rect.h;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Whether two rectangles overlap (AABB test).
#[inline]
pub fn rect_in_rect(a: Rect, b: Rect) -> bool {
    (a.x - b.x).abs() <= a.w + b.w && (a.y - b.y).abs() <= a.h + b.h
}

/// Whether `point` lies on `segment`, within [`SEGMENT_TOLERANCE`].
pub fn point_on_segment(point: Point2, segment: Segment) -> bool {
    let d1 = distance::point_to_point(point, segment.p1);
    let d2 = distance::point_to_point(point, segment.p2);
    let len = segment.length();
    d1 + d2 >= len - SEGMENT_TOLERANCE && d1 + d2 <= len + SEGMENT_TOLERANCE
}

/// Intersection of the infinite lines through `a` and `b`, or `None` when
/// they are parallel.
pub fn line_intersection(a: Segment, b: Segment) -> Option<Point2> {
    let a1 = a.p2.y - a.p1.y;
    let b1 = a.p1.x - a.p2.x;
    let c1 = a1 * a.p1.x + b1 * a.p1.y;
    let a2 = b.p2.y - b.p1.y;
    let b2 = b.p1.x - b.p2.x;
    let c2 = a2 * b.p1.x + b2 * b.p1.y;

    let denominator = a1 * b2 - a2 * b1;
    if denominator == 0.0 {
        return None;
    }
    Some(Point2::new(
        (b2 * c1 - b1 * c2) / denominator,
        (a1 * c2 - a2 * c1) / denominator,
    ))
}

/// Intersection point of two segments.
///
/// With `projection` set, the segments are treated as infinite lines and
/// this is [`line_intersection`].
pub fn segment_intersection(a: Segment, b: Segment, projection: bool) -> Option<Point2> {
    let hit = line_intersection(a, b)?;
    if projection {
        return Some(hit);
    }
    // Axis-parallel segments divide by zero on one axis; the NaN/inf
    // ratio fails its range check and the other axis decides.
    let on = |s: Segment| {
        let rx = (hit.x - s.p1.x) / (s.p2.x - s.p1.x);
        let ry = (hit.y - s.p1.y) / (s.p2.y - s.p1.y);
        (0.0..=1.0).contains(&rx) || (0.0..=1.0).contains(&ry)
    };
    if on(a) && on(b) { Some(hit) } else { None }
}

/// Orthogonal projection of `point` onto the line through `segment`.
///
/// A degenerate segment projects everything onto its single point.
pub fn project_on_line(point: Point2, segment: Segment) -> Point2 {
    let d = segment.to_vector();
    let len2 = d.dot(d);
    if len2 == 0.0 {
        return segment.p1;
    }
    let t = (point - segment.p1).dot(d) / len2;
    segment.p1 + d * t
}

/// First contact between `circle` and `segment`.
///
/// An endpoint inside the circle is reported first (`p1` before `p2`);
/// otherwise the foot of the perpendicular from the centre, when it lies on
/// the segment within the radius.
pub fn circle_segment_contact(circle: Circle, segment: Segment) -> Option<Point2> {
    let center = circle.center();
    if circle.radius > distance::point_to_point(segment.p1, center) {
        return Some(segment.p1);
    }
    if circle.radius > distance::point_to_point(segment.p2, center) {
        return Some(segment.p2);
    }
    let foot = project_on_line(center, segment);
    if !point_on_segment(foot, segment) {
        return None;
    }
    (distance::point_to_point(foot, center) <= circle.radius).then_some(foot)
}
