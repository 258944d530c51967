//! Property-based tests for the list operations.

use proptest::prelude::*;
use seqlist::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

fn arbitrary_values() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-20i16..20, 0..64)
}

fn ok<T>(result: anyhow::Result<T>) -> Result<T, TestCaseError> {
    result.map_err(|error| TestCaseError::fail(error.to_string()))
}

// =============================================================================
// Value semantics
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// reversing twice restores the original order
    #[test]
    fn reverse_twice_is_identity(values in arbitrary_values()) {
        let list = List::from_vec(values.clone());
        let twice = list.reverse().reverse();
        prop_assert_eq!(twice.values(), values.as_slice());
    }

    /// transforms never touch the receiver
    #[test]
    fn transforms_leave_receiver_unchanged(values in arbitrary_values(), size in 1usize..8) {
        let list = List::from_vec(values.clone());
        let _ = list.filter(|v| *v > 0);
        let _ = list.map(|v| v.saturating_mul(2));
        let _ = list.reverse();
        let _ = list.shuffle();
        let _ = list.unique();
        let _ = ok(list.chunk(size))?;
        let _ = ok(list.nth(size))?;
        let _ = list.join([&list]);
        prop_assert_eq!(list.values(), values.as_slice());
    }
}

// =============================================================================
// Mutation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// delete(i) removes exactly the i-th element and keeps the rest in order
    #[test]
    fn delete_removes_one_element(values in prop::collection::vec(any::<i32>(), 1..64), pick in any::<prop::sample::Index>()) {
        let index = pick.index(values.len());
        let mut list = List::from_vec(values.clone());
        list.delete(index);

        let mut expected = values.clone();
        expected.remove(index);

        prop_assert_eq!(list.length(), values.len() - 1);
        prop_assert_eq!(list.values(), expected.as_slice());
    }

    /// delete past the end leaves the list unchanged
    #[test]
    fn delete_out_of_range_is_noop(values in arbitrary_values(), extra in 0usize..10) {
        let mut list = List::from_vec(values.clone());
        list.delete(values.len() + extra);
        prop_assert_eq!(list.values(), values.as_slice());
    }

    /// add appends at the end and grows the length by one
    #[test]
    fn add_appends(values in arbitrary_values(), value in any::<i16>()) {
        let mut list = List::from_vec(values.clone());
        list.add(value);
        prop_assert_eq!(list.length(), values.len() + 1);
        prop_assert_eq!(list.last(), value);
    }
}

// =============================================================================
// Transform shapes
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// unique holds no duplicates and keeps first-occurrence order
    #[test]
    fn unique_keeps_first_occurrences(values in arbitrary_values()) {
        let unique = List::from_vec(values.clone()).unique().into_values();

        let mut expected: Vec<i16> = Vec::new();
        for value in &values {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }

        prop_assert_eq!(unique, expected);
    }

    /// chunk(n) yields ceil(len / n) runs, all full except possibly the last
    #[test]
    fn chunk_sizes(values in arbitrary_values(), size in 1usize..10) {
        let chunks = ok(List::from_vec(values.clone()).chunk(size))?;
        prop_assert_eq!(chunks.len(), values.len().div_ceil(size));

        if let Some((last, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|chunk| chunk.length() == size));
            prop_assert!(last.length() >= 1 && last.length() <= size);
        }

        let flattened: Vec<i16> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flattened, values);
    }

    /// zip pairs positions when lengths match and fails otherwise
    #[test]
    fn zip_pairs_positions(left in arbitrary_values(), right in arbitrary_values()) {
        let zipped = List::from_vec(left.clone()).zip(&List::from_vec(right.clone()));

        if left.len() == right.len() {
            let pairs = ok(zipped)?;
            prop_assert_eq!(pairs.len(), left.len());
            for (index, pair) in pairs.iter().enumerate() {
                prop_assert_eq!(pair.values(), &[left[index], right[index]]);
            }
        } else {
            let error = zipped.unwrap_err();
            prop_assert_eq!(
                error.downcast_ref::<ListError>(),
                Some(&ListError::LengthMismatch { left: left.len(), right: right.len() })
            );
        }
    }

    /// nth(step) keeps exactly the positions divisible by step
    #[test]
    fn nth_keeps_multiples(values in arbitrary_values(), step in 1usize..10) {
        let stepped = ok(List::from_vec(values.clone()).nth(step))?.into_values();
        let expected: Vec<i16> = values
            .iter()
            .enumerate()
            .filter(|(index, _)| index % step == 0)
            .map(|(_, value)| *value)
            .collect();
        prop_assert_eq!(stepped, expected);
    }

    /// range(min, max) is the inclusive integer run
    #[test]
    fn range_is_inclusive(min in -50i32..50, span in 0i32..50) {
        let list = List::range(min, min + span);
        prop_assert_eq!(list.length(), (span + 1) as usize);
        prop_assert_eq!(list.first(), min);
        prop_assert_eq!(list.last(), min + span);
    }
}

// =============================================================================
// Shared handle
// =============================================================================

#[cfg(feature = "shared")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// a shared handle agrees with the owned list on every transform
    #[test]
    fn shared_matches_owned(values in arbitrary_values(), size in 1usize..8) {
        let owned = List::from_vec(values.clone());
        let shared = SharedList::from_vec(values);

        prop_assert_eq!(shared.reverse().to_list(), owned.reverse());
        prop_assert_eq!(shared.unique().to_list(), owned.unique());
        prop_assert_eq!(shared.filter(|v| *v < 0).to_list(), owned.filter(|v| *v < 0));
        prop_assert_eq!(ok(shared.nth(size))?.to_list(), ok(owned.nth(size))?);
        prop_assert_eq!(
            ok(shared.chunk(size))?.iter().map(SharedList::to_list).collect::<Vec<_>>(),
            ok(owned.chunk(size))?
        );
    }
}
