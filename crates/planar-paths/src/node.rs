use planar_core::Point;

/// Traversal cost multiplier of a cell that does not specify one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One input cell: a position and an optional traversal weight.
///
/// A weight of `0` marks the cell impassable; `None` means
/// [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub pos: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
}

impl GridCell {
    /// A cell with the default weight.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            weight: None,
        }
    }

    /// A cell with an explicit weight.
    #[inline]
    pub const fn weighted(x: i32, y: i32, weight: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            weight: Some(weight),
        }
    }

    /// An impassable cell.
    #[inline]
    pub const fn wall(x: i32, y: i32) -> Self {
        Self::weighted(x, y, 0.0)
    }
}

impl From<Point> for GridCell {
    fn from(pos: Point) -> Self {
        Self { pos, weight: None }
    }
}

/// Per-search state of one cell.
///
/// `parent` is an index into the same node table, so a path is recovered by
/// walking indices back to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct GridNode {
    pub pos: Point,
    pub weight: f64,
    pub parent: Option<usize>,
    /// Best known cost from the start.
    pub g: f64,
    /// Heuristic estimate to the destination, computed once.
    pub h: f64,
    /// `g + h`; the frontier ordering key.
    pub score: f64,
    /// Discovered at least once.
    pub visited: bool,
    /// Expanded; never revisited.
    pub closed: bool,
}

impl GridNode {
    pub fn new(pos: Point, weight: f64) -> Self {
        Self {
            pos,
            weight,
            parent: None,
            g: 0.0,
            h: 0.0,
            score: 0.0,
            visited: false,
            closed: false,
        }
    }

    /// Whether the node can ever be entered.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.weight != 0.0
    }
}

impl From<&GridCell> for GridNode {
    fn from(cell: &GridCell) -> Self {
        Self::new(cell.pos, cell.weight.unwrap_or(DEFAULT_WEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_defaults_to_one() {
        let n = GridNode::from(&GridCell::new(2, 3));
        assert_eq!(n.weight, DEFAULT_WEIGHT);
        assert!(n.is_passable());
        assert_eq!(n.parent, None);
    }

    #[test]
    fn zero_weight_is_a_wall() {
        let n = GridNode::from(&GridCell::wall(0, 0));
        assert!(!n.is_passable());
        let heavy = GridNode::from(&GridCell::weighted(0, 0, 3.5));
        assert_eq!(heavy.weight, 3.5);
    }
}
