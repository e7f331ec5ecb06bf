//! Scalar helpers shared by the geometry and animation modules.

use rand::Rng;

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = PI * 2.0;
pub const HALF_PI: f64 = PI / 2.0;
pub const QUARTER_PI: f64 = PI / 4.0;
pub const TENTH_PI: f64 = PI / 10.0;
pub const TWENTIETH_PI: f64 = PI / 20.0;

/// Clamp `n` into `[min, max]`.
///
/// The lower bound is applied first, so an inverted range yields `max`.
/// Unlike [`f64::clamp`] this never panics.
#[inline]
pub fn clamp(min: f64, n: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Wrap `n` back into `[min, max]` when it leaves the range.
///
/// Values past `max` re-enter from `min` and values below `min` re-enter
/// from `max`. A negative `max` mirrors the arithmetic so that ranges
/// entirely below zero wrap the same way.
pub fn range_loop(min: f64, n: f64, max: f64) -> f64 {
    if max < 0.0 {
        if n > max {
            (max % n) + min
        } else if n < min {
            (min - n + max) % max
        } else {
            n
        }
    } else if n > max {
        (n % max) + min
    } else if n < min {
        (n - min + max) % max
    } else {
        n
    }
}

/// Wrap an angle into `[-2π, 2π]`.
#[inline]
pub fn angle_range_loop(angle: f64) -> f64 {
    range_loop(-TAU, angle, TAU)
}

/// Round to `1 / precision` steps, e.g. `round_to(x, 100.0)` keeps two
/// decimals.
#[inline]
pub fn round_to(n: f64, precision: f64) -> f64 {
    (n * precision).round() / precision
}

/// Closed-interval membership; the bounds may be given in either order.
#[inline]
pub fn in_range(n: f64, a: f64, b: f64) -> bool {
    n >= a.min(b) && n <= a.max(b)
}

/// Map `point` onto `[min, max)` along a hyperbolic tangent: slow growth
/// once `point` is a few multiples of `scale`.
#[inline]
pub fn scale_hyper_tangent(point: f64, scale: f64, max: f64, min: f64) -> f64 {
    (point / scale).tanh() * (max - min) + min
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Uniform sample in `[min, max)`.
///
/// With `min` greater than `max` the range collapses and `min` is
/// returned. Without a `min` the sample is symmetric: `[-max, max)`.
pub fn random_range(rng: &mut impl Rng, max: f64, min: Option<f64>) -> f64 {
    let r: f64 = rng.random();
    match min {
        Some(min) => {
            let max = if min > max { min } else { max };
            r * (max - min) + min
        }
        None => r * max * 2.0 - max,
    }
}
