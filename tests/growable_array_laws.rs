//! Property-based tests for `GrowableArray`.
//!
//! This module verifies the append/access/removal laws of the growable
//! array store using proptest.

use proptest::prelude::*;
use pullars::collections::GrowableArray;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..200)
}

// =============================================================================
// Append Law: pushing values then reading them back preserves order
// =============================================================================

proptest! {
    #[test]
    fn prop_push_then_get_law(values in arbitrary_values()) {
        let mut array = GrowableArray::new();
        for &value in &values {
            array.push(value);
        }

        prop_assert_eq!(array.len(), values.len());
        for (index, &value) in values.iter().enumerate() {
            prop_assert_eq!(*array.get(index), value);
        }
    }
}

// =============================================================================
// Snapshot Law: a snapshot equals the pushed values and stays decoupled
// =============================================================================

proptest! {
    #[test]
    fn prop_snapshot_law(values in arbitrary_values()) {
        let mut array: GrowableArray<i64> = values.iter().copied().collect();
        let snapshot = array.to_array_snapshot();

        array.push(0);

        prop_assert_eq!(snapshot.as_ref(), values.as_slice());
    }
}

// =============================================================================
// Removal Law: remove_at(i) shifts the tail left by exactly one
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_at_shift_law(
        values in prop::collection::vec(any::<i64>(), 1..100),
        index_seed in any::<prop::sample::Index>()
    ) {
        let index = index_seed.index(values.len());
        let mut array: GrowableArray<i64> = values.iter().copied().collect();

        let removed = array.remove_at(index);

        prop_assert_eq!(removed, values[index]);
        prop_assert_eq!(array.len(), values.len() - 1);
        for position in 0..array.len() {
            let expected = if position < index {
                values[position]
            } else {
                values[position + 1]
            };
            prop_assert_eq!(*array.get(position), expected);
        }
    }
}

// =============================================================================
// Insert Law: insert_at(i, v) places v at i and shifts the tail right
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_at_law(
        values in arbitrary_values(),
        value in any::<i64>(),
        index_seed in any::<prop::sample::Index>()
    ) {
        let index = index_seed.index(values.len() + 1);
        let mut array: GrowableArray<i64> = values.iter().copied().collect();

        array.insert_at(index, value);

        let mut expected = values;
        expected.insert(index, value);
        let snapshot = array.to_array_snapshot();
        prop_assert_eq!(snapshot.as_ref(), expected.as_slice());
    }
}

// =============================================================================
// Sorted Search Law: binary search finds members, inserts non-members
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_search_law(values in arbitrary_values(), target in any::<i64>()) {
        let mut array: GrowableArray<i64> = values.iter().copied().collect();
        array.sort_unstable();

        match array.binary_search(&target) {
            Ok(index) => prop_assert_eq!(*array.get(index), target),
            Err(insertion) => {
                if insertion > 0 {
                    prop_assert!(*array.get(insertion - 1) < target);
                }
                if insertion < array.len() {
                    prop_assert!(*array.get(insertion) > target);
                }
            }
        }
    }
}
