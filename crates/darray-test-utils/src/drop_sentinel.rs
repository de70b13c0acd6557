// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared drop counter.
///
/// `DropSentinel` wraps an `Arc<AtomicUsize>`: every clone observes the same
/// count. Values created with [`DropSentinel::track`] bump the count when they
/// are dropped, so a test can keep a clone of the sentinel, hand the tracked
/// values to a container, and check afterwards that each value was dropped
/// exactly once.
///
/// # Example
///
/// ```rust
/// use darray_test_utils::DropSentinel;
///
/// let sentinel = DropSentinel::default();
/// let a = sentinel.track(1u32);
/// let b = sentinel.track(2u32);
///
/// assert_eq!(sentinel.drops(), 0);
/// drop(a);
/// drop(b);
/// assert_eq!(sentinel.drops(), 2);
/// ```
#[derive(Clone, Default)]
pub struct DropSentinel(Arc<AtomicUsize>);

impl DropSentinel {
    /// Returns how many tracked values have been dropped so far.
    pub fn drops(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Resets the drop count to zero for every clone.
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }

    /// Wraps `value` so that dropping it is counted by this sentinel.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        Tracked {
            value,
            sentinel: self.clone(),
        }
    }
}

impl fmt::Debug for DropSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DropSentinel").field(&self.drops()).finish()
    }
}

/// A value whose drop is counted by a [`DropSentinel`].
///
/// Cloning a `Tracked` produces another counted value; both drops are recorded.
pub struct Tracked<V> {
    value: V,
    sentinel: DropSentinel,
}

impl<V> Tracked<V> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the sentinel counting this value's drop.
    pub fn sentinel(&self) -> &DropSentinel {
        &self.sentinel
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.sentinel.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        self.sentinel.track(self.value.clone())
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// Asserts that dropping `value` drops exactly `expected` tracked values.
///
/// # Panics
///
/// Panics if the sentinel count grows by anything other than `expected`
/// while `value` is dropped.
///
/// # How It Works
///
/// 1. Reads the sentinel's current count
/// 2. Drops the value
/// 3. Asserts the count grew by `expected`
pub fn assert_drops<T>(value: T, sentinel: &DropSentinel, expected: usize) {
    let before = sentinel.drops();

    drop(value);

    assert_eq!(
        sentinel.drops() - before,
        expected,
        "unexpected number of drops"
    );
}
