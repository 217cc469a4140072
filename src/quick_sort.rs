use crate::SortOrder;
use std::mem;

/// Sort a slice in ascending order by partitioning it around a pivot and
/// sorting both sides. O(n log n) comparisons on average, O(n²) in the worst
/// case. Not stable: equal elements may be reordered.
///
/// # Parameters
/// - `data` slice to be sorted in place
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_with_order(data, SortOrder::Ascending)
}

/// Sort a slice in the given order by quicksort. The pivot is
/// deterministically the last element of the active range, so a range that
/// is already sorted opposite to the requested order is the adversarial
/// input and degenerates to O(n²) comparisons. Auxiliary stack space stays
/// O(log n) even then: each step recurses into the smaller partition only
/// and continues iterating on the larger one, so every recursion level at
/// least halves the range.
///
/// # Parameters
/// - `data` slice to be sorted in place
/// - `order` direction in which to sort
pub fn quick_sort_with_order<T: Ord>(data: &mut [T], order: SortOrder) {
    let mut rest = data;
    while rest.len() > 1 {
        let boundary = partition(rest, order);
        let (left, right) = mem::take(&mut rest).split_at_mut(boundary);
        // the pivot at right[0] is already in its final position
        let right = &mut right[1..];

        if left.len() <= right.len() {
            quick_sort_with_order(left, order);
            rest = right;
        } else {
            quick_sort_with_order(right, order);
            rest = left;
        }
    }
}

/// Partition the slice around its last element and return the pivot's final
/// index. Elements that belong on the pivot's side of the order (non-strict
/// comparison, so elements equal to the pivot as well) are swapped into a
/// growing region at the front of the slice; the pivot is then swapped to
/// that region's boundary, its final sorted position.
///
/// # Parameters
/// - `data` range to partition, must not be empty
/// - `order` direction of the enclosing sort
fn partition<T: Ord>(data: &mut [T], order: SortOrder) -> usize {
    let pivot = data.len() - 1;
    let mut boundary = 0;

    for i in 0..pivot {
        if !order.comes_before(&data[pivot], &data[i]) {
            data.swap(i, boundary);
            boundary += 1;
        }
    }

    data.swap(boundary, pivot);
    boundary
}
