//! Euclidean distance helpers.

use crate::geom::{Circle, Located, Point2};

/// Euclidean distance between two points.
#[inline]
pub fn point_to_point(a: Point2, b: Point2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Signed distance from `point` to the circle's edge: negative inside,
/// zero on the edge.
#[inline]
pub fn point_to_circle(point: Point2, circle: Circle) -> f64 {
    point_to_point(circle.center(), point) - circle.radius
}

/// Signed gap between two circles: negative when they overlap.
#[inline]
pub fn circle_to_circle(a: Circle, b: Circle) -> f64 {
    point_to_point(a.center(), b.center()) - a.radius - b.radius
}

/// The items of `others` whose distance to `which` satisfies `keep`, in
/// their original order.
pub fn within<'a, T: Located>(
    which: Point2,
    others: &'a [T],
    keep: impl Fn(f64) -> bool,
) -> Vec<&'a T> {
    others
        .iter()
        .filter(|o| keep(point_to_point(which, o.position())))
        .collect()
}

/// The item closest to `which` and its distance. On ties the later item
/// wins.
pub fn nearest<T: Located>(which: Point2, others: &[T]) -> Option<(&T, f64)> {
    let mut best: Option<(&T, f64)> = None;
    for o in others {
        let d = point_to_point(which, o.position());
        match best {
            Some((_, bd)) if d > bd => {}
            _ => best = Some((o, d)),
        }
    }
    best
}

/// The item farthest from `which` and its distance. On ties the later item
/// wins.
pub fn farthest<T: Located>(which: Point2, others: &[T]) -> Option<(&T, f64)> {
    let mut best: Option<(&T, f64)> = None;
    for o in others {
        let d = point_to_point(which, o.position());
        match best {
            Some((_, bd)) if d < bd => {}
            _ => best = Some((o, d)),
        }
    }
    best
}
