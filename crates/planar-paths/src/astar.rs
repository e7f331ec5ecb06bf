use std::collections::HashMap;

use planar_core::Point;

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::heap::PriorityNodeQueue;
use crate::neighbors::Neighbors;
use crate::node::{GridCell, GridNode};

/// Options for a single [`GridPathfinder::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// When the destination is unreachable, return a path to the reachable
    /// node closest to it instead of an empty path.
    pub closest: bool,
    /// Allow the four diagonal moves, at `√2` times the cell weight.
    pub diagonal: bool,
}

impl SearchOptions {
    pub fn diagonal() -> Self {
        Self {
            diagonal: true,
            ..Self::default()
        }
    }

    pub fn with_closest(mut self, closest: bool) -> Self {
        self.closest = closest;
        self
    }
}

/// A* pathfinder over a sparse set of weighted grid cells.
///
/// Cells not in the set do not exist: they are never entered, and a start
/// or destination outside the set is an error. The pathfinder only keeps
/// the cell list; every [`search`](Self::search) builds fresh per-call node
/// state, so one pathfinder can serve any number of searches.
#[derive(Debug, Clone, Default)]
pub struct GridPathfinder {
    cells: Vec<GridCell>,
    index: HashMap<Point, usize>,
}

impl GridPathfinder {
    /// Index `cells` by position. When a position appears more than once,
    /// the first cell wins.
    pub fn new(cells: impl IntoIterator<Item = GridCell>) -> Self {
        let mut pf = Self::default();
        for cell in cells {
            if pf.index.contains_key(&cell.pos) {
                log::trace!("duplicate cell at {} ignored", cell.pos);
                continue;
            }
            pf.index.insert(cell.pos, pf.cells.len());
            pf.cells.push(cell);
        }
        pf
    }

    /// Cells of the grid, in insertion order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is a cell of the grid (passable or not).
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// The cell at `p`, if any.
    pub fn cell(&self, p: Point) -> Option<&GridCell> {
        self.index.get(&p).map(|&i| &self.cells[i])
    }

    /// Find a least-cost path from `start` to `destination`.
    ///
    /// The returned path excludes `start` and ends with `destination`; it is
    /// empty when `start == destination` or when no path exists. With
    /// [`SearchOptions::closest`], an unreachable destination yields the
    /// path to the reachable node with the smallest heuristic distance to
    /// it (ties broken by smaller path cost).
    pub fn search(
        &self,
        start: Point,
        destination: Point,
        options: SearchOptions,
    ) -> Result<Vec<Point>, SearchError> {
        let start_idx = *self
            .index
            .get(&start)
            .ok_or(SearchError::StartNotFound(start))?;
        let dest_idx = *self
            .index
            .get(&destination)
            .ok_or(SearchError::DestinationNotFound(destination))?;

        log::debug!(
            "searching {start} -> {destination} over {} cells (diagonal: {}, closest: {})",
            self.cells.len(),
            options.diagonal,
            options.closest
        );

        let heuristic = Heuristic::for_diagonal(options.diagonal);
        let mut nodes: Vec<GridNode> = self.cells.iter().map(GridNode::from).collect();
        let mut open = PriorityNodeQueue::with_capacity(nodes.len());
        let mut nbuf = Neighbors::new();

        {
            let s = &mut nodes[start_idx];
            s.h = heuristic.estimate(start, destination);
            s.score = s.h;
        }
        let mut closest = start_idx;
        let mut expanded = 0usize;

        open.push(start_idx, &nodes);

        while let Some(ci) = open.pop(&nodes) {
            if ci == dest_idx {
                let path = self.reconstruct(&nodes, ci);
                log::debug!(
                    "path found: {} steps, {expanded} nodes expanded",
                    path.len()
                );
                return Ok(path);
            }

            nodes[ci].closed = true;
            expanded += 1;
            let current_pos = nodes[ci].pos;
            let current_g = nodes[ci].g;
            log::trace!("expanding {current_pos} (g = {current_g})");

            for step in nbuf.around(current_pos, options.diagonal) {
                let Some(&ni) = self.index.get(&step.pos) else {
                    continue;
                };
                let n = &mut nodes[ni];
                if n.closed || !n.is_passable() {
                    continue;
                }

                let edge = if step.diagonal {
                    n.weight * std::f64::consts::SQRT_2
                } else {
                    n.weight
                };
                let g = current_g + edge;
                let first_visit = !n.visited;

                if first_visit || g < n.g {
                    n.visited = true;
                    n.parent = Some(ci);
                    if first_visit {
                        n.h = heuristic.estimate(n.pos, destination);
                    }
                    n.g = g;
                    n.score = g + n.h;
                    let (h, g) = (n.h, n.g);

                    if options.closest {
                        let best = &nodes[closest];
                        if h < best.h || (h == best.h && g < best.g) {
                            closest = ni;
                        }
                    }

                    if first_visit {
                        open.push(ni, &nodes);
                    } else {
                        open.rescore_element(ni, &nodes);
                    }
                }
            }
        }

        if options.closest {
            let path = self.reconstruct(&nodes, closest);
            log::debug!(
                "destination {destination} unreachable, closest node {} ({} steps)",
                nodes[closest].pos,
                path.len()
            );
            return Ok(path);
        }

        log::debug!("destination {destination} unreachable, {expanded} nodes expanded");
        Ok(Vec::new())
    }

    /// Walk parent links back from `end`, leaving out the start node.
    fn reconstruct(&self, nodes: &[GridNode], end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = end;
        while let Some(parent) = nodes[cur].parent {
            path.push(nodes[cur].pos);
            cur = parent;
        }
        path.reverse();
        path
    }
}

/// Run one search over `cells` without keeping the pathfinder around.
pub fn search(
    cells: &[GridCell],
    start: Point,
    destination: Point,
    options: SearchOptions,
) -> Result<Vec<Point>, SearchError> {
    GridPathfinder::new(cells.iter().copied()).search(start, destination, options)
}
