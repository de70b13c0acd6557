// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Heap traffic of DArray, observed through a counting global allocator.

use darray::{DArray, DArrayError, DArrayInt, DArrayString};
use darray_test_utils::CountingAllocator;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[test]
fn test_new_allocates_default_capacity_once() {
    let before = CountingAllocator::stats();

    let da = DArrayInt::new();
    let delta = CountingAllocator::stats().since(&before);

    assert_eq!(delta.allocations, 1);
    assert_eq!(delta.reallocations, 0);
    assert_eq!(delta.allocated_bytes, 256 * 4);

    drop(da);
}

#[test]
fn test_grow_reallocates_once() {
    let mut da = DArrayInt::new();
    let before = CountingAllocator::stats();

    da.grow().expect("Failed to da.grow()");
    let delta = CountingAllocator::stats().since(&before);

    assert_eq!(delta.allocations, 0);
    assert_eq!(delta.reallocations, 1);
    assert_eq!(delta.allocated_bytes, 512 * 4);
    assert_eq!(delta.freed_bytes, 256 * 4);
}

#[test]
fn test_append_2047_reallocates_three_times() {
    let before = CountingAllocator::stats();

    let mut da = DArrayInt::new();
    for i in 0..2047 {
        da.append(i).expect("Failed to da.append(..)");
    }
    let delta = CountingAllocator::stats().since(&before);

    // 256 -> 512 -> 1024 -> 2048
    assert_eq!(delta.allocations, 1);
    assert_eq!(delta.reallocations, 3);
    assert_eq!(delta.live_bytes(), 2048 * 4);
}

#[test]
fn test_drop_releases_everything() {
    let before = CountingAllocator::stats();

    {
        let mut da = DArray::<u64>::with_capacity(3);
        for i in 0..100 {
            da.append(i).expect("Failed to da.append(..)");
        }
    }

    let delta = CountingAllocator::stats().since(&before);
    assert_eq!(delta.deallocations, 1);
    assert_eq!(delta.live_bytes(), 0);
}

#[test]
fn test_destroy_releases_everything() {
    let before = CountingAllocator::stats();

    let mut da = DArray::<u16>::new();
    da.extend_from_slice(&[1, 2, 3])
        .expect("Failed to da.extend_from_slice(..)");
    da.destroy();

    assert_eq!(CountingAllocator::stats().since(&before).live_bytes(), 0);
}

#[test]
fn test_failed_construction_records_nothing() {
    let before = CountingAllocator::stats();

    let result = DArray::<u8>::try_with_capacity(isize::MAX as usize);

    assert!(matches!(result, Err(DArrayError::AllocFailed { .. })));
    assert_eq!(CountingAllocator::stats(), before);
}

#[test]
fn test_zero_sized_elements_never_allocate() {
    let before = CountingAllocator::stats();

    let mut da = DArray::<()>::with_capacity(1);
    for _ in 0..1000 {
        da.append(()).expect("Failed to da.append(())");
    }
    drop(da);

    assert_eq!(CountingAllocator::stats(), before);
}

#[test]
fn test_string_elements_are_freed() {
    let before = CountingAllocator::stats();

    let mut da = DArrayString::with_capacity(2);
    for i in 0..10 {
        da.append(format!("element-{i}"))
            .expect("Failed to da.append(..)");
    }
    da.destroy();

    let delta = CountingAllocator::stats().since(&before);
    assert_eq!(delta.allocations, delta.deallocations);
    assert_eq!(delta.live_bytes(), 0);
}
