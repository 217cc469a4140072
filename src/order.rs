/// Direction in which a sorting algorithm arranges its input.
///
/// The order is a per-call value: every internal step of the algorithms in
/// this crate (partitioning, sifting, selection scans) receives it as an
/// explicit parameter, so nested or interleaved sort calls with different
/// directions cannot affect each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

impl SortOrder {
    /// Check whether `a` must be placed strictly before `b` in the output
    /// for this order, i.e. `a < b` for ascending and `a > b` for descending.
    /// Equal elements never come before one another, which lets call sites
    /// express both strict and non-strict comparisons through this single
    /// primitive.
    ///
    /// # Parameters
    /// - `a` the element whose placement is being decided
    /// - `b` the element it is compared against
    #[inline]
    pub(crate) fn comes_before<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascending => a < b,
            SortOrder::Descending => a > b,
        }
    }
}
