// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use darray_test_utils::{DropSentinel, assert_drops};

use crate::DArray;

// =============================================================================
// Drop / destroy()
// =============================================================================

#[test]
fn test_drop_releases_every_element_once() {
    let sentinel = DropSentinel::default();
    let mut da = DArray::with_capacity(4);

    for i in 0..10 {
        da.append(sentinel.track(i)).expect("Failed to da.append(..)");
    }

    // Growing moves elements by value; nothing may be dropped on the way.
    assert_eq!(sentinel.drops(), 0);

    assert_drops(da, &sentinel, 10);
}

#[test]
fn test_destroy_releases_every_element_once() {
    let sentinel = DropSentinel::default();
    let mut da = DArray::new();

    da.append(sentinel.track("a")).expect("Failed to da.append(..)");
    da.append(sentinel.track("b")).expect("Failed to da.append(..)");

    da.destroy();

    assert_eq!(sentinel.drops(), 2);
}

#[test]
fn test_drop_empty_array() {
    let sentinel = DropSentinel::default();
    let da: DArray<darray_test_utils::Tracked<u8>> = DArray::new();

    assert_drops(da, &sentinel, 0);
}

#[test]
fn test_grow_does_not_drop_elements() {
    let sentinel = DropSentinel::default();
    let mut da = DArray::with_capacity(2);
    da.append(sentinel.track(1u8)).expect("Failed to da.append(..)");
    da.append(sentinel.track(2u8)).expect("Failed to da.append(..)");

    da.grow().expect("Failed to da.grow()");
    da.reserve(100).expect("Failed to da.reserve(100)");

    assert_eq!(sentinel.drops(), 0);
    assert_eq!(*da[1].value(), 2);

    assert_drops(da, &sentinel, 2);
}

#[test]
fn test_clone_drops_independently() {
    let sentinel = DropSentinel::default();
    let mut da = DArray::with_capacity(2);
    da.append(sentinel.track(1u8)).expect("Failed to da.append(..)");
    da.append(sentinel.track(2u8)).expect("Failed to da.append(..)");

    let cloned = da.clone();

    assert_drops(da, &sentinel, 2);
    assert_eq!(cloned.size(), 2);
    assert_drops(cloned, &sentinel, 2);
}

#[test]
fn test_extend_from_slice_clones_into_array() {
    let sentinel = DropSentinel::default();
    let source = vec![sentinel.track(1), sentinel.track(2), sentinel.track(3)];
    let mut da = DArray::with_capacity(1);

    da.extend_from_slice(source.as_slice())
        .expect("Failed to da.extend_from_slice(..)");

    assert_drops(source, &sentinel, 3);
    assert_eq!(da.size(), 3);
    assert_drops(da, &sentinel, 3);
}

#[test]
fn test_as_mut_slice_assignment_drops_old_value() {
    let sentinel = DropSentinel::default();
    let mut da = DArray::new();
    da.append(sentinel.track(1)).expect("Failed to da.append(..)");

    da.as_mut_slice()[0] = sentinel.track(2);

    assert_eq!(sentinel.drops(), 1);
    assert_eq!(*da[0].value(), 2);
}
