use crate::SortOrder;

/// Sort a slice in ascending order by repeated selection. The algorithm runs
/// in O(n²) comparisons and O(1) auxiliary space, which makes it only
/// suitable for small inputs, but it performs the minimal number of swaps
/// (at most n - 1).
///
/// # Parameters
/// - `data` slice to be sorted in place
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    selection_sort_with_order(data, SortOrder::Ascending)
}

/// Sort a slice in the given order by repeated selection. For each position,
/// the remaining unsorted suffix is scanned for its extremal element (the
/// minimum for ascending order, the maximum for descending), which is then
/// swapped into place. Only a strictly better candidate replaces the current
/// one during the scan, so among duplicates the left-most occurrence is
/// selected.
///
/// # Parameters
/// - `data` slice to be sorted in place
/// - `order` direction in which to sort
pub fn selection_sort_with_order<T: Ord>(data: &mut [T], order: SortOrder) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    for i in 0..len - 1 {
        let mut extremal = i;
        for j in i + 1..len {
            if order.comes_before(&data[j], &data[extremal]) {
                extremal = j;
            }
        }
        data.swap(i, extremal);
    }
}
