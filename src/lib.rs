//! A toolbox of generic, in-place, comparison-based sorting algorithms for
//! mutable slices. Every algorithm sorts any `&mut [T]` with `T: Ord` in
//! either ascending or descending order, mutating the slice it is given
//! without allocating a buffer of the input's size.
//!
//! Three independent algorithms are provided; none calls into the others,
//! and callers pick whichever fits their input size and swap-cost profile:
//!
//! - [`selection_sort()`]: O(n²) comparisons, at most n - 1 swaps
//! - [`heap_sort()`]: O(n log n) worst case, O(1) auxiliary space
//! - [`quick_sort()`]: O(n log n) average, O(n²) worst case, O(log n)
//!   auxiliary stack
//!
//! Each algorithm comes in two flavors: a plain function sorting ascending,
//! and a `_with_order` variant taking an explicit [`SortOrder`]. None of the
//! algorithms guarantees stability.

mod heap_sort;
mod order;
mod quick_sort;
mod selection_sort;

pub use heap_sort::{heap_sort, heap_sort_with_order};
pub use order::SortOrder;
pub use quick_sort::{quick_sort, quick_sort_with_order};
pub use selection_sort::{selection_sort, selection_sort_with_order};
