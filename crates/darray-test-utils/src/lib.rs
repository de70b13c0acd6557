// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for darray crates.
//!
//! - [`DropSentinel`] / [`Tracked`]: observe how many times values are dropped.
//! - [`CountingAllocator`]: a `#[global_allocator]` wrapper that records
//!   per-thread allocation traffic, for verifying that a container returns
//!   every byte it took.
//!
//! ## License
//!
//! GPL-3.0-only

mod counting_alloc;
mod drop_sentinel;


pub use counting_alloc::{AllocationStats, CountingAllocator};
pub use drop_sentinel::{DropSentinel, Tracked, assert_drops};
