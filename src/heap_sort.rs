use crate::SortOrder;

/// Sort a slice in ascending order using a binary heap built in place over
/// the slice itself. Runs in O(n log n) comparisons and O(1) auxiliary
/// space. Not stable: equal elements may be reordered.
///
/// # Parameters
/// - `data` slice to be sorted in place
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_with_order(data, SortOrder::Ascending)
}

/// Sort a slice in the given order using an in-place binary heap. The build
/// phase sifts every non-leaf node down, starting from the last one,
/// establishing the heap property over the whole slice. The extraction phase
/// then repeatedly swaps the root behind the shrinking heap and re-sifts the
/// new root. The heap is dominated in the direction opposite to the
/// requested order (a max-heap for ascending output), because extraction
/// fills the slice from the back.
///
/// # Parameters
/// - `data` slice to be sorted in place
/// - `order` direction in which to sort
pub fn heap_sort_with_order<T: Ord>(data: &mut [T], order: SortOrder) {
    let len = data.len();

    for i in (0..len / 2).rev() {
        sift_down(data, len, i, order);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, end, 0, order);
    }
}

/// Restore the heap property at `node` by sifting it down within the heap
/// occupying `data[0..n]`. Children of `node` live at `2 * node + 1` and
/// `2 * node + 2`. The comparison is strict, so a child equal to its parent
/// never triggers a swap. Recursion depth is bounded by the heap height,
/// O(log n), since every recursive call strictly increases the node index
/// within the fixed bound `n`.
///
/// # Parameters
/// - `data` slice holding the heap in its first `n` elements
/// - `n` logical size of the heap
/// - `node` index at which the heap property may be violated
/// - `order` direction of the enclosing sort; determines which element
/// dominates
fn sift_down<T: Ord>(data: &mut [T], n: usize, node: usize, order: SortOrder) {
    let mut dominant = node;
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    if left < n && order.comes_before(&data[dominant], &data[left]) {
        dominant = left;
    }
    if right < n && order.comes_before(&data[dominant], &data[right]) {
        dominant = right;
    }

    if dominant != node {
        data.swap(node, dominant);
        sift_down(data, n, dominant, order);
    }
}
