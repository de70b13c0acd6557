// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{DArray, DEFAULT_CAPACITY};

/// Smallest `initial * 2^k` that holds `required` slots.
fn doubled_capacity(initial: usize, required: usize) -> usize {
    let mut capacity = initial;
    while capacity < required {
        capacity *= 2;
    }
    capacity
}

fn is_doubling_of(capacity: usize, initial: usize) -> bool {
    capacity % initial == 0 && (capacity / initial).is_power_of_two()
}

proptest! {
    #[test]
    fn append_sequence_sizes_and_capacity(
        values in prop::collection::vec(any::<i32>(), 0..2100)
    ) {
        let mut da = DArray::new();

        for value in &values {
            da.append(*value).expect("Failed to da.append(..)");
        }

        prop_assert_eq!(da.size(), values.len());
        prop_assert_eq!(da.capacity(), doubled_capacity(DEFAULT_CAPACITY, values.len()));
        prop_assert_eq!(da.as_slice(), values.as_slice());
    }

    #[test]
    fn capacity_is_monotonic_and_doubling(
        initial in 1..=64usize,
        count in 0..=500usize
    ) {
        let mut da = DArray::with_capacity(initial);
        let mut previous = da.capacity();

        for i in 0..count {
            da.append(i).expect("Failed to da.append(..)");

            let capacity = da.capacity();
            prop_assert!(capacity == previous || capacity == previous * 2);
            prop_assert!(da.size() <= capacity);
            previous = capacity;
        }

        prop_assert!(is_doubling_of(da.capacity(), initial));
    }

    #[test]
    fn grow_never_changes_contents(
        values in prop::collection::vec(any::<u16>(), 1..=64),
        grows in 1..=6usize
    ) {
        let mut da = DArray::with_capacity(values.len());
        da.extend_from_slice(&values).expect("Failed to da.extend_from_slice(..)");

        for _ in 0..grows {
            da.grow().expect("Failed to da.grow()");
        }

        prop_assert_eq!(da.size(), values.len());
        prop_assert_eq!(da.capacity(), values.len() << grows);
        prop_assert_eq!(da.as_slice(), values.as_slice());
    }

    #[test]
    fn reserve_keeps_capacity_a_doubling(
        initial in 1..=32usize,
        prefix in 0..=32usize,
        additional in 0..=1000usize
    ) {
        let mut da = DArray::with_capacity(initial);
        for i in 0..prefix {
            da.append(i as u8).expect("Failed to da.append(..)");
        }
        let before = da.capacity();

        da.reserve(additional).expect("Failed to da.reserve(..)");

        prop_assert_eq!(da.capacity(), doubled_capacity(before, prefix + additional));
        prop_assert!(is_doubling_of(da.capacity(), initial));
        prop_assert_eq!(da.size(), prefix);
    }

    #[test]
    fn unchecked_reads_match_appended_values(
        values in prop::collection::vec(any::<i64>(), 1..=600)
    ) {
        let mut da = DArray::new();
        for value in &values {
            da.append(*value).expect("Failed to da.append(..)");
        }

        for (index, expected) in values.iter().enumerate() {
            // SAFETY: index < values.len() == da.size().
            let actual = unsafe { *da.get_unchecked(index) };
            prop_assert_eq!(actual, *expected);
        }
    }
}
