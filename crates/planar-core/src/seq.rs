//! Small slice helpers used by scene and demo code.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// A uniformly chosen element, or `None` for an empty slice.
pub fn pick_random<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// A shuffled copy; the input is left untouched.
pub fn shuffled<T: Clone>(rng: &mut impl Rng, items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// A copy with the element at `from` moved to index `to`.
///
/// Out-of-range indices leave the copy unchanged.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut copy = items.to_vec();
    if from < copy.len() && to < copy.len() {
        let item = copy.remove(from);
        copy.insert(to, item);
    }
    copy
}

/// Remove repeated elements, keeping the first occurrence of each.
pub fn dedup_stable<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Every integer from `start` to `end`, both included, counting down when
/// `end < start`.
pub fn inclusive_range(start: i64, end: i64) -> Vec<i64> {
    if end >= start {
        (start..=end).collect()
    } else {
        (end..=start).rev().collect()
    }
}
