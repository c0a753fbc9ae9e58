//! Utility functions for ordering operations

use std::cmp::Ordering;

/// Compute a stable sorted permutation of `0..len`.
///
/// `compare(a, b)` receives indices into the caller's key storage. Ties keep
/// their input order. Unlike `slice::sort_by` this never panics when the
/// comparator is not a total order, which matters because uncomparable key
/// pairs are reported as `Equal`.
pub fn stable_sort_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    // Bottom-up merge sort; a right element only overtakes a left one when
    // it is strictly smaller.
    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            while left < mid && right < end {
                if compare(order[right], order[left]) == Ordering::Less {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&order[left..mid]);
            merged.extend_from_slice(&order[right..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    order
}

/// Reorder owned items by a permutation of their indices.
///
/// Each entry of `indices` names which original element lands at that
/// position.
pub fn reorder_by_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    indices
        .iter()
        .filter_map(|&idx| slots.get_mut(idx).and_then(Option::take))
        .collect()
}
