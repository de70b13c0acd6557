// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

/// Allocation traffic recorded on one thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationStats {
    /// Successful `alloc` / `alloc_zeroed` calls.
    pub allocations: usize,
    /// `dealloc` calls.
    pub deallocations: usize,
    /// Successful `realloc` calls.
    pub reallocations: usize,
    /// Bytes handed out, counting the full new size of every realloc.
    pub allocated_bytes: usize,
    /// Bytes returned, counting the full old size of every realloc.
    pub freed_bytes: usize,
}

impl AllocationStats {
    /// All counters at zero.
    pub const ZERO: Self = Self {
        allocations: 0,
        deallocations: 0,
        reallocations: 0,
        allocated_bytes: 0,
        freed_bytes: 0,
    };

    /// Bytes currently held: allocated minus freed.
    pub fn live_bytes(&self) -> isize {
        self.allocated_bytes as isize - self.freed_bytes as isize
    }

    /// Traffic recorded after `earlier` was taken.
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            allocations: self.allocations - earlier.allocations,
            deallocations: self.deallocations - earlier.deallocations,
            reallocations: self.reallocations - earlier.reallocations,
            allocated_bytes: self.allocated_bytes - earlier.allocated_bytes,
            freed_bytes: self.freed_bytes - earlier.freed_bytes,
        }
    }
}

thread_local! {
    static STATS: Cell<AllocationStats> = const { Cell::new(AllocationStats::ZERO) };
}

fn record<F>(update: F)
where
    F: FnOnce(&mut AllocationStats),
{
    // try_with: the slot is gone while the thread is being torn down.
    let _ = STATS.try_with(|cell| {
        let mut stats = cell.get();
        update(&mut stats);
        cell.set(stats);
    });
}

/// Global allocator that forwards to [`System`] and counts traffic per thread.
///
/// Counters are thread-local, so tests running in parallel do not see each
/// other's allocations.
///
/// # Example
///
/// ```rust,ignore
/// use darray_test_utils::CountingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: CountingAllocator = CountingAllocator;
///
/// let before = CountingAllocator::stats();
/// let buffer = vec![0u8; 64];
/// drop(buffer);
/// assert_eq!(CountingAllocator::stats().since(&before).live_bytes(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

impl CountingAllocator {
    /// Returns the counters of the calling thread.
    pub fn stats() -> AllocationStats {
        STATS
            .try_with(Cell::get)
            .unwrap_or(AllocationStats::ZERO)
    }
}

// SAFETY: every call is forwarded unchanged to System; counting has no effect
// on the returned memory.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's guarantees.
        let ptr = unsafe { System.alloc(layout) };

        if !ptr.is_null() {
            record(|stats| {
                stats.allocations += 1;
                stats.allocated_bytes += layout.size();
            });
        }

        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded with the caller's guarantees.
        let ptr = unsafe { System.alloc_zeroed(layout) };

        if !ptr.is_null() {
            record(|stats| {
                stats.allocations += 1;
                stats.allocated_bytes += layout.size();
            });
        }

        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded with the caller's guarantees.
        unsafe { System.dealloc(ptr, layout) };

        record(|stats| {
            stats.deallocations += 1;
            stats.freed_bytes += layout.size();
        });
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: forwarded with the caller's guarantees.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };

        if !new_ptr.is_null() {
            record(|stats| {
                stats.reallocations += 1;
                stats.allocated_bytes += new_size;
                stats.freed_bytes += layout.size();
            });
        }

        new_ptr
    }
}
