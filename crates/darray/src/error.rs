// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for darray.

use thiserror::Error;

/// Error type for `DArray` operations that allocate.
///
/// Every variant is reported before the array is modified: a failed
/// construction produces no array, and a failed grow leaves the existing
/// buffer, size and capacity untouched.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DArrayError {
    /// Attempted to construct an array with zero slots.
    #[error("Zero capacity: a darray must own at least one slot")]
    ZeroCapacity,

    /// The requested slot count does not fit in a valid allocation layout.
    ///
    /// Raised when doubling the capacity overflows `usize`, or when
    /// `capacity * size_of::<T>()` would exceed `isize::MAX` bytes.
    #[error("Capacity overflow: slot count exceeds the maximum allocation size")]
    CapacityOverflow,

    /// The global allocator could not provide the requested memory.
    #[error("Allocation failed: could not obtain {bytes} bytes for {capacity} slots")]
    AllocFailed {
        /// Number of slots that were requested.
        capacity: usize,
        /// Size in bytes of the failed request.
        bytes: usize,
    },
}
