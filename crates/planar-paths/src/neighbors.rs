use planar_core::Point;

/// Candidate moves in expansion order: west, east, north, south, then
/// north-west, north-east, south-west, south-east.
///
/// The order decides which of several equal-cost paths a search returns.
const OFFSETS: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// One candidate move out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub pos: Point,
    pub diagonal: bool,
}

/// Fixed-capacity neighbour buffer.
///
/// Holds at most eight candidates on the stack, so expanding a node never
/// allocates.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: [Step; 8],
    len: usize,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create an empty `Neighbors` buffer.
    pub fn new() -> Self {
        Self {
            buf: [Step {
                pos: Point::ZERO,
                diagonal: false,
            }; 8],
            len: 0,
        }
    }

    /// The four axis-aligned neighbours of `p`, or all eight when
    /// `diagonal` is set.
    ///
    /// Moves that would leave the `i32` coordinate range are skipped.
    pub fn around(&mut self, p: Point, diagonal: bool) -> &[Step] {
        let count = if diagonal { 8 } else { 4 };
        self.len = 0;
        for (i, d) in OFFSETS[..count].iter().enumerate() {
            let (Some(x), Some(y)) = (p.x.checked_add(d.x), p.y.checked_add(d.y)) else {
                continue;
            };
            self.buf[self.len] = Step {
                pos: Point::new(x, y),
                diagonal: i >= 4,
            };
            self.len += 1;
        }
        &self.buf[..self.len]
    }
}
