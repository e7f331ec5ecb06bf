//! Spatial indexing for point-like objects.
//!
//! [`QuadTree`] stores anything implementing [`planar_core::Located`] and
//! answers rectangle and circle range queries by pruning whole quadrants
//! that the query shape does not touch.

mod quadtree;

pub use quadtree::{DEFAULT_CAPACITY, Iter, MAX_DEPTH, QuadTree};
