//! Binary min-heap over node indices, keyed on [`GridNode::score`].
//!
//! The queue stores indices into a node table owned by the caller and
//! reads scores from that table on every comparison, so a node's score can
//! be lowered in place and then repaired with
//! [`PriorityNodeQueue::rescore_element`].

use crate::node::GridNode;

const NOT_QUEUED: usize = usize::MAX;

/// Open set of an A* search.
#[derive(Debug, Clone, Default)]
pub struct PriorityNodeQueue {
    content: Vec<usize>,
    /// Heap slot of each node index, or `NOT_QUEUED`.
    slots: Vec<usize>,
}

impl PriorityNodeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue sized for a table of `nodes` entries.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            content: Vec::with_capacity(nodes),
            slots: vec![NOT_QUEUED; nodes],
        }
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether `node` is currently queued.
    pub fn contains(&self, node: usize) -> bool {
        self.slot(node).is_some()
    }

    /// The lowest-scored node without removing it.
    pub fn peek(&self) -> Option<usize> {
        self.content.first().copied()
    }

    /// Queue `node` and restore heap order.
    pub fn push(&mut self, node: usize, nodes: &[GridNode]) {
        if node >= self.slots.len() {
            self.slots.resize(node + 1, NOT_QUEUED);
        }
        self.content.push(node);
        let n = self.content.len() - 1;
        self.slots[node] = n;
        self.sink_down(n, nodes);
    }

    /// Remove and return the lowest-scored node.
    ///
    /// The last element takes the root slot and is sifted down.
    pub fn pop(&mut self, nodes: &[GridNode]) -> Option<usize> {
        if self.content.is_empty() {
            return None;
        }
        let result = self.content.swap_remove(0);
        self.slots[result] = NOT_QUEUED;
        if let Some(&end) = self.content.first() {
            self.slots[end] = 0;
            self.bubble_up(0, nodes);
        }
        Some(result)
    }

    /// Repair heap order after `node`'s score was lowered in place.
    ///
    /// A lower score can only violate the order towards the root, so the
    /// node is only sifted up. Unqueued nodes are ignored.
    pub fn rescore_element(&mut self, node: usize, nodes: &[GridNode]) {
        if let Some(n) = self.slot(node) {
            self.sink_down(n, nodes);
        }
    }

    /// Drop every queued node.
    pub fn clear(&mut self) {
        for &node in &self.content {
            self.slots[node] = NOT_QUEUED;
        }
        self.content.clear();
    }

    fn slot(&self, node: usize) -> Option<usize> {
        match self.slots.get(node) {
            Some(&n) if n != NOT_QUEUED => Some(n),
            _ => None,
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.content.swap(a, b);
        self.slots[self.content[a]] = a;
        self.slots[self.content[b]] = b;
    }

    /// Move the element at slot `n` towards the root while it scores
    /// strictly lower than its parent.
    fn sink_down(&mut self, mut n: usize, nodes: &[GridNode]) {
        let score = nodes[self.content[n]].score;
        while n > 0 {
            let parent = ((n + 1) >> 1) - 1;
            if score < nodes[self.content[parent]].score {
                self.swap(n, parent);
                n = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at slot `n` away from the root while a child scores
    /// strictly lower.
    ///
    /// The right child is compared against the left child's score only when
    /// the left child already qualified for the swap; otherwise it is
    /// compared against the element's own score.
    fn bubble_up(&mut self, mut n: usize, nodes: &[GridNode]) {
        let len = self.content.len();
        let score = nodes[self.content[n]].score;
        loop {
            let child2 = (n + 1) << 1;
            let child1 = child2 - 1;

            let mut swap = None;
            let mut child1_score = score;

            if child1 < len {
                child1_score = nodes[self.content[child1]].score;
                if child1_score < score {
                    swap = Some(child1);
                }
            }
            if child2 < len {
                let child2_score = nodes[self.content[child2]].score;
                let bound = if swap.is_none() { score } else { child1_score };
                if child2_score < bound {
                    swap = Some(child2);
                }
            }

            match swap {
                Some(s) => {
                    self.swap(n, s);
                    n = s;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_core::Point;
    use proptest::prelude::*;

    fn table(scores: &[f64]) -> Vec<GridNode> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let mut n = GridNode::new(Point::new(i as i32, 0), 1.0);
                n.score = s;
                n
            })
            .collect()
    }

    fn assert_heap(q: &PriorityNodeQueue, nodes: &[GridNode]) {
        let c = &q.content;
        for i in 0..c.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < c.len() {
                    assert!(
                        nodes[c[i]].score <= nodes[c[child]].score,
                        "slot {i} scores above child {child}"
                    );
                }
            }
            assert_eq!(q.slots[c[i]], i);
        }
    }

    #[test]
    fn pops_in_score_order() {
        let nodes = table(&[5.0, 3.0, 8.0, 1.0]);
        let mut q = PriorityNodeQueue::new();
        for i in 0..nodes.len() {
            q.push(i, &nodes);
        }
        let scores: Vec<f64> = std::iter::from_fn(|| q.pop(&nodes))
            .map(|i| nodes[i].score)
            .collect();
        assert_eq!(scores, vec![1.0, 3.0, 5.0, 8.0]);
        assert!(q.is_empty());
        assert_eq!(q.pop(&nodes), None);
    }

    #[test]
    fn rescore_moves_node_up() {
        let mut nodes = table(&[1.0, 4.0, 6.0, 9.0]);
        let mut q = PriorityNodeQueue::with_capacity(nodes.len());
        for i in 0..nodes.len() {
            q.push(i, &nodes);
        }
        nodes[3].score = 0.5;
        q.rescore_element(3, &nodes);
        assert_heap(&q, &nodes);
        assert_eq!(q.peek(), Some(3));
        assert_eq!(q.pop(&nodes), Some(3));
        assert_eq!(q.pop(&nodes), Some(0));
    }

    #[test]
    fn equal_children_promote_left() {
        // Root 0 sits above two equal children; after popping the root the
        // last element (9) sinks and the left child (1) takes its place.
        let nodes = table(&[0.0, 2.0, 2.0, 9.0]);
        let mut q = PriorityNodeQueue::new();
        for i in 0..nodes.len() {
            q.push(i, &nodes);
        }
        assert_eq!(q.pop(&nodes), Some(0));
        assert_eq!(q.peek(), Some(1));
        assert_eq!(q.pop(&nodes), Some(1));
        assert_eq!(q.pop(&nodes), Some(2));
    }

    #[test]
    fn right_child_wins_when_smaller() {
        let nodes = table(&[0.0, 5.0, 3.0, 9.0]);
        let mut q = PriorityNodeQueue::new();
        for i in 0..nodes.len() {
            q.push(i, &nodes);
        }
        assert_eq!(q.pop(&nodes), Some(0));
        assert_eq!(q.peek(), Some(2));
        assert_heap(&q, &nodes);
    }

    #[test]
    fn contains_and_clear() {
        let nodes = table(&[2.0, 1.0]);
        let mut q = PriorityNodeQueue::new();
        q.push(0, &nodes);
        assert!(q.contains(0));
        assert!(!q.contains(1));
        assert!(!q.contains(42));
        q.push(1, &nodes);
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(0));
        // Unqueued nodes are ignored.
        q.rescore_element(1, &nodes);
        assert!(q.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(f64),
        Pop,
        Lower(usize, f64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0.0f64..100.0).prop_map(Op::Push),
            Just(Op::Pop),
            (0usize..64, 0.0f64..50.0).prop_map(|(i, d)| Op::Lower(i, d)),
        ]
    }

    proptest! {
        #[test]
        fn heap_order_survives_any_sequence(ops in prop::collection::vec(op(), 1..64)) {
            let mut nodes: Vec<GridNode> = Vec::new();
            let mut q = PriorityNodeQueue::new();
            let mut last_popped = f64::NEG_INFINITY;
            for op in ops {
                match op {
                    Op::Push(s) => {
                        let mut n = GridNode::new(Point::new(nodes.len() as i32, 0), 1.0);
                        n.score = s.max(last_popped);
                        nodes.push(n);
                        q.push(nodes.len() - 1, &nodes);
                    }
                    Op::Pop => {
                        if let Some(i) = q.pop(&nodes) {
                            prop_assert!(nodes[i].score >= last_popped);
                            last_popped = nodes[i].score;
                        }
                    }
                    Op::Lower(i, d) => {
                        if q.contains(i) {
                            nodes[i].score = (nodes[i].score - d).max(last_popped);
                            q.rescore_element(i, &nodes);
                        }
                    }
                }
                assert_heap(&q, &nodes);
            }
        }
    }
}
