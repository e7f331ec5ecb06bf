use planar_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Widened to `u64`: two axis gaps of up to `u32::MAX` each always fit.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y))
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

/// Diagonal (octile) distance: straight steps cost 1, diagonal steps √2.
#[inline]
pub fn diagonal(a: Point, b: Point) -> f64 {
    const D: f64 = 1.0;
    const D2: f64 = std::f64::consts::SQRT_2;
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    D * (dx + dy) + (D2 - 2.0 * D) * dx.min(dy)
}

/// Admissible A* estimate matching the search's connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// 4-connected grids.
    Manhattan,
    /// 8-connected grids with √2 diagonal moves.
    Diagonal,
}

impl Heuristic {
    /// The heuristic suited to a search with or without diagonal moves.
    #[inline]
    pub fn for_diagonal(diagonal: bool) -> Self {
        if diagonal { Self::Diagonal } else { Self::Manhattan }
    }

    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(from, to) as f64,
            Self::Diagonal => diagonal(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_metrics() {
        let a = Point::new(1, -2);
        let b = Point::new(4, 2);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }

    #[test]
    fn diagonal_metric() {
        let o = Point::ZERO;
        assert_eq!(diagonal(o, Point::new(3, 0)), 3.0);
        assert!((diagonal(o, Point::new(2, 2)) - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((diagonal(o, Point::new(-3, 1)) - (2.0 + std::f64::consts::SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn heuristic_selection() {
        assert_eq!(Heuristic::for_diagonal(false), Heuristic::Manhattan);
        let to = Point::new(1, 1);
        assert_eq!(Heuristic::Manhattan.estimate(Point::ZERO, to), 2.0);
        assert!(Heuristic::Diagonal.estimate(Point::ZERO, to) < 2.0);
    }

    #[test]
    fn metrics_span_the_whole_coordinate_range() {
        let a = Point::new(i32::MIN, i32::MAX);
        let b = Point::new(i32::MAX, i32::MIN);
        assert_eq!(chebyshev(a, b), u32::MAX);
        assert_eq!(manhattan(a, b), 2 * u64::from(u32::MAX));
        let far = Point::new(-2_000_000_000, 0);
        let near = Point::new(2_000_000_000, 0);
        assert_eq!(diagonal(far, near), 4_000_000_000.0);
        assert_eq!(Heuristic::Manhattan.estimate(far, near), 4_000_000_000.0);
    }
}
