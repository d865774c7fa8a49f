//! Generic range binary search over an index-addressable sequence.
//!
//! The search is parameterized purely over "evaluate the comparison at
//! index `mid`", so one algorithm serves every sorted collection,
//! unboxed or boxed, without knowing its element type.

use std::cmp::Ordering;

/// Searches the half-open range `[from_index, to_index)` of a sequence
/// of `size` elements for an index at which `compare` returns
/// [`Ordering::Equal`].
///
/// `compare(index)` must describe where the candidate at `index` sits
/// relative to the target: [`Ordering::Less`] for candidates before it,
/// [`Ordering::Greater`] for candidates after it. The addressed range
/// must already be sorted consistently with `compare`; otherwise the
/// result is undefined (this is a precondition, not validated).
///
/// Returns `Ok(index)` of a matching element (if several candidates
/// compare equal there is no guarantee which one) or
/// `Err(insertion_point)`, the index at which the target could be
/// inserted while keeping the range sorted.
///
/// # Panics
///
/// Panics if `from_index > to_index` or `to_index > size`.
///
/// # Examples
///
/// ```rust
/// use pullars::collections::binary_search;
///
/// let values = [2, 4, 6, 8];
/// let found = binary_search(4, 0, 4, |index| values[index].cmp(&6));
/// assert_eq!(found, Ok(2));
///
/// let absent = binary_search(4, 0, 4, |index| values[index].cmp(&5));
/// assert_eq!(absent, Err(2));
/// ```
pub fn binary_search<F>(
    size: usize,
    from_index: usize,
    to_index: usize,
    mut compare: F,
) -> Result<usize, usize>
where
    F: FnMut(usize) -> Ordering,
{
    assert!(
        from_index <= to_index && to_index <= size,
        "search range {from_index}..{to_index} out of bounds for size {size}"
    );

    let mut low = from_index;
    let mut high = to_index;

    while low < high {
        let mid = low + (high - low) / 2;
        match compare(mid) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(low)
}

/// An index-addressable view searchable with [`binary_search`].
///
/// Implementors only supply [`size`](Self::size); the provided methods
/// run the shared algorithm over the whole view or a sub-range of it.
/// The comparison closure receives candidate indices, so the same trait
/// serves collections of any element type.
pub trait BinarySearchable {
    /// Number of addressable elements.
    fn size(&self) -> usize;

    /// Searches the whole view.
    ///
    /// See [`binary_search`] for the comparison contract and result
    /// encoding.
    fn binary_search_by_index<F>(&self, compare: F) -> Result<usize, usize>
    where
        F: FnMut(usize) -> Ordering,
    {
        binary_search(self.size(), 0, self.size(), compare)
    }

    /// Searches `[from_index, size)`.
    fn binary_search_from<F>(&self, from_index: usize, compare: F) -> Result<usize, usize>
    where
        F: FnMut(usize) -> Ordering,
    {
        binary_search(self.size(), from_index, self.size(), compare)
    }

    /// Searches `[0, to_index)`.
    fn binary_search_to<F>(&self, to_index: usize, compare: F) -> Result<usize, usize>
    where
        F: FnMut(usize) -> Ordering,
    {
        binary_search(self.size(), 0, to_index, compare)
    }

    /// Searches the half-open range `[from_index, to_index)`.
    fn binary_search_in_range<F>(
        &self,
        from_index: usize,
        to_index: usize,
        compare: F,
    ) -> Result<usize, usize>
    where
        F: FnMut(usize) -> Ordering,
    {
        binary_search(self.size(), from_index, to_index, compare)
    }
}

impl<T> BinarySearchable for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Clone + Default> BinarySearchable for super::GrowableArray<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::GrowableArray;
    use rstest::rstest;

    fn compare_to<'a>(values: &'a [i32], target: i32) -> impl FnMut(usize) -> Ordering + 'a {
        move |index| values[index].cmp(&target)
    }

    // =========================================================================
    // Found and absent results
    // =========================================================================

    #[rstest]
    fn test_finds_every_element() {
        let values = [1, 3, 5, 7, 9, 11];
        for (index, &value) in values.iter().enumerate() {
            let result = binary_search(values.len(), 0, values.len(), compare_to(&values, value));
            assert_eq!(result, Ok(index));
        }
    }

    #[rstest]
    fn test_absent_value_reports_insertion_point() {
        let values = [10, 20, 30];
        let cases = [(5, 0), (15, 1), (25, 2), (35, 3)];
        for (target, insertion) in cases {
            let result = binary_search(3, 0, 3, compare_to(&values, target));
            assert_eq!(result, Err(insertion));
        }
    }

    #[rstest]
    fn test_empty_range_reports_from_index() {
        let values = [10, 20, 30];
        assert_eq!(binary_search(3, 1, 1, compare_to(&values, 20)), Err(1));
        assert_eq!(binary_search(0, 0, 0, |_| Ordering::Equal), Err(0));
    }

    #[rstest]
    fn test_duplicate_matches_return_some_matching_index() {
        let values = [1, 5, 5, 5, 9];
        let result = binary_search(5, 0, 5, compare_to(&values, 5));
        let index = result.expect("5 is present");
        assert_eq!(values[index], 5);
    }

    // =========================================================================
    // Sub-range searches
    // =========================================================================

    #[rstest]
    fn test_search_restricted_to_subrange() {
        let values = [10, 20, 30, 40, 50];
        // 10 exists but lies outside [1, 4); the insertion point is the
        // range start.
        assert_eq!(binary_search(5, 1, 4, compare_to(&values, 10)), Err(1));
        assert_eq!(binary_search(5, 1, 4, compare_to(&values, 30)), Ok(2));
        assert_eq!(binary_search(5, 1, 4, compare_to(&values, 45)), Err(4));
    }

    // =========================================================================
    // Range validation
    // =========================================================================

    #[rstest]
    #[should_panic(expected = "search range 2..1 out of bounds for size 3")]
    fn test_inverted_range_panics() {
        let _ = binary_search(3, 2, 1, |_| Ordering::Equal);
    }

    #[rstest]
    #[should_panic(expected = "search range 0..4 out of bounds for size 3")]
    fn test_range_past_size_panics() {
        let _ = binary_search(3, 0, 4, |_| Ordering::Equal);
    }

    // =========================================================================
    // Trait surface
    // =========================================================================

    #[rstest]
    fn test_slice_is_binary_searchable() {
        let values = [2, 4, 6];
        assert_eq!(values.binary_search_by_index(|i| values[i].cmp(&4)), Ok(1));
        assert_eq!(values.binary_search_from(1, |i| values[i].cmp(&2)), Err(1));
        assert_eq!(values.binary_search_to(2, |i| values[i].cmp(&6)), Err(2));
        assert_eq!(
            values.binary_search_in_range(0, 3, |i| values[i].cmp(&7)),
            Err(3)
        );
    }

    #[rstest]
    fn test_growable_array_is_binary_searchable() {
        let array: GrowableArray<i64> = [1, 2, 3, 4].iter().copied().collect();
        let result = array.binary_search_by_index(|index| array[index].cmp(&3));
        assert_eq!(result, Ok(2));
    }

    #[rstest]
    fn test_boxed_elements_share_the_algorithm() {
        let words = ["apple", "mango", "pear"];
        let result = words.binary_search_by_index(|index| words[index].cmp(&"mango"));
        assert_eq!(result, Ok(1));
    }
}
