use planar_core::intersection::{circle_in_rect, point_in_circle, point_in_rect, rect_in_rect};
use planar_core::{Circle, Located, Rect};

/// Objects a node holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// Deepest level that may still subdivide. Nodes at this depth keep
/// accepting objects past their capacity, so coincident points cannot
/// split the tree forever.
pub const MAX_DEPTH: usize = 32;

/// A point quadtree.
///
/// Each node covers `boundary` (centre plus half-extents) and stores up to
/// `capacity` objects. Once full it subdivides into four quadrants and
/// routes further objects to every quadrant whose closed boundary contains
/// them. Objects stored before the split stay where they are.
///
/// A point lying exactly on a split line is contained by more than one
/// quadrant and is stored, and later reported, once per quadrant.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    boundary: Rect,
    capacity: usize,
    level: usize,
    objects: Vec<T>,
    divided: bool,
    northwest: Option<Box<QuadTree<T>>>,
    northeast: Option<Box<QuadTree<T>>>,
    southwest: Option<Box<QuadTree<T>>>,
    southeast: Option<Box<QuadTree<T>>>,
}

impl<T: Located + Clone> QuadTree<T> {
    /// Create an empty tree over `boundary`. A `capacity` of `0` is
    /// treated as `1`.
    pub fn new(boundary: Rect, capacity: usize) -> Self {
        Self::at_level(boundary, capacity.max(1), 0)
    }

    /// Create an empty tree with [`DEFAULT_CAPACITY`].
    pub fn with_boundary(boundary: Rect) -> Self {
        Self::new(boundary, DEFAULT_CAPACITY)
    }

    fn at_level(boundary: Rect, capacity: usize, level: usize) -> Self {
        Self {
            boundary,
            capacity,
            level,
            objects: Vec::with_capacity(capacity),
            divided: false,
            northwest: None,
            northeast: None,
            southwest: None,
            southeast: None,
        }
    }

    /// Insert `object`, returning whether any node stored it.
    ///
    /// Objects outside the boundary are rejected and the tree is left
    /// untouched.
    pub fn insert(&mut self, object: T) -> bool {
        if !point_in_rect(object.position(), self.boundary) {
            return false;
        }

        if self.objects.len() < self.capacity || self.level >= MAX_DEPTH {
            self.objects.push(object);
            return true;
        }

        self.subdivide();

        let mut stored = false;
        for child in [
            &mut self.northeast,
            &mut self.northwest,
            &mut self.southeast,
            &mut self.southwest,
        ]
        .into_iter()
        .flatten()
        {
            stored |= child.insert(object.clone());
        }
        stored
    }

    /// Split this node into four empty quadrants. Does nothing if it is
    /// already divided.
    pub fn subdivide(&mut self) {
        if self.divided {
            return;
        }
        log::trace!(
            "subdividing {} at depth {} ({} objects)",
            self.boundary,
            self.level,
            self.objects.len()
        );

        let [nw, ne, sw, se] = self.boundary.quadrants();
        let level = self.level + 1;
        self.northwest = Some(Box::new(Self::at_level(nw, self.capacity, level)));
        self.northeast = Some(Box::new(Self::at_level(ne, self.capacity, level)));
        self.southwest = Some(Box::new(Self::at_level(sw, self.capacity, level)));
        self.southeast = Some(Box::new(Self::at_level(se, self.capacity, level)));
        self.divided = true;
    }

    /// Objects inside `circle`, circumference included.
    pub fn query_circle(&self, circle: &Circle) -> Vec<&T> {
        let mut found = Vec::new();
        self.collect(
            &mut found,
            &|b| circle_in_rect(*circle, b),
            &|o| point_in_circle(o.position(), *circle, false),
        );
        found
    }

    /// Objects inside `range`, edges included.
    pub fn query_rect(&self, range: &Rect) -> Vec<&T> {
        let mut found = Vec::new();
        self.collect(
            &mut found,
            &|b| rect_in_rect(*range, b),
            &|o| point_in_rect(o.position(), *range),
        );
        found
    }

    fn collect<'a>(
        &'a self,
        found: &mut Vec<&'a T>,
        touches: &dyn Fn(Rect) -> bool,
        keep: &dyn Fn(&T) -> bool,
    ) {
        if !touches(self.boundary) {
            return;
        }
        found.extend(self.objects.iter().filter(|o| keep(o)));
        for child in self.child_iter() {
            child.collect(found, touches, keep);
        }
    }
}

impl<T> QuadTree<T> {
    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Objects stored directly in this node.
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn is_divided(&self) -> bool {
        self.divided
    }

    /// The four quadrants in NW, NE, SW, SE order, once divided.
    pub fn children(&self) -> Option<[&QuadTree<T>; 4]> {
        match (
            &self.northwest,
            &self.northeast,
            &self.southwest,
            &self.southeast,
        ) {
            (Some(nw), Some(ne), Some(sw), Some(se)) => Some([&**nw, &**ne, &**sw, &**se]),
            _ => None,
        }
    }

    fn child_iter(&self) -> impl Iterator<Item = &QuadTree<T>> {
        [
            &self.northwest,
            &self.northeast,
            &self.southwest,
            &self.southeast,
        ]
        .into_iter()
        .flatten()
        .map(|c| &**c)
    }

    /// Number of stored objects across the whole tree. An object held by
    /// several quadrants counts once per quadrant.
    pub fn len(&self) -> usize {
        self.objects.len() + self.child_iter().map(QuadTree::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels, `1` for an undivided tree.
    pub fn depth(&self) -> usize {
        1 + self.child_iter().map(QuadTree::depth).max().unwrap_or(0)
    }

    /// Every stored object, depth first: a node's own objects, then its
    /// quadrants in NW, NE, SW, SE order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![self],
            current: Default::default(),
        }
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every object of a [`QuadTree`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a QuadTree<T>>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(o) = self.current.next() {
                return Some(o);
            }
            let node = self.stack.pop()?;
            self.current = node.objects.iter();
            // Reversed so NW is visited first.
            self.stack.extend(node.child_iter().collect::<Vec<_>>().into_iter().rev());
        }
    }
}
