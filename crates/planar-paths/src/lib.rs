//! A* pathfinding over sparse, weighted 2D grids.
//!
//! A grid is any set of [`GridCell`]s: positions that are not listed simply
//! do not exist. Each cell carries an optional weight, a cost multiplier for
//! entering it; a weight of `0` makes the cell a wall.
//!
//! - **A\*** search with optional diagonal moves and a closest-reachable
//!   fallback ([`GridPathfinder::search`], [`search`])
//! - A binary min-heap open set that supports in-place rescoring
//!   ([`PriorityNodeQueue`])
//! - Grid metrics and heuristics ([`manhattan`], [`chebyshev`],
//!   [`diagonal`], [`Heuristic`])
//!
//! ```
//! use planar_core::Point;
//! use planar_paths::{GridCell, GridPathfinder, SearchOptions};
//!
//! let cells = (0..3).flat_map(|y| (0..3).map(move |x| GridCell::new(x, y)));
//! let pf = GridPathfinder::new(cells);
//! let path = pf
//!     .search(Point::new(0, 0), Point::new(2, 2), SearchOptions::diagonal())
//!     .unwrap();
//! assert_eq!(path, vec![Point::new(1, 1), Point::new(2, 2)]);
//! ```

mod astar;
mod distance;
mod error;
mod heap;
mod neighbors;
mod node;

pub use astar::{GridPathfinder, SearchOptions, search};
pub use distance::{Heuristic, chebyshev, diagonal, manhattan};
pub use error::SearchError;
pub use heap::PriorityNodeQueue;
pub use neighbors::{Neighbors, Step};
pub use node::{DEFAULT_WEIGHT, GridCell, GridNode};
