// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic growable array with doubling growth and an explicit unchecked tier.
//!
//! `DArray<T>` owns a contiguous heap buffer of `capacity` slots and tracks how
//! many of them (`size`) hold initialized elements.
//!
//! # Core Guarantees
//!
//! - **Fixed default capacity**: `new()` / `try_new()` allocate 256 slots.
//! - **Doubling growth**: capacity only changes by `capacity *= 2`, on
//!   `grow()`, on an `append()` that finds the array full, or on `reserve()`.
//! - **Fallible allocation**: every allocating operation has a `Result`
//!   form that reports [`DArrayError`] and leaves the array untouched on
//!   failure.
//! - **Deterministic release**: elements are dropped and the buffer is freed
//!   on `Drop` or on the explicit `destroy()`.
//! - **Opt-in unchecked access**: raw positional reads and writes are
//!   `unsafe fn`s, visible at every call site.
//!
//! # Example: Append and Grow
//!
//! ```rust
//! use darray::{DArray, DArrayError};
//!
//! fn example() -> Result<(), DArrayError> {
//!     let mut da = DArray::<i32>::try_new()?;
//!     assert_eq!(da.capacity(), 256);
//!
//!     for i in 0..2047 {
//!         da.append(i)?;
//!     }
//!
//!     // 256 -> 512 -> 1024 -> 2048
//!     assert_eq!(da.size(), 2047);
//!     assert_eq!(da.capacity(), 2048);
//!     assert_eq!(da[1111], 1111);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Unchecked Access
//!
//! ```rust
//! use darray::DArray;
//!
//! let mut da = DArray::<u8>::with_capacity(4);
//!
//! // SAFETY: indices are below capacity and slots 0..3 are written before set_size(3).
//! unsafe {
//!     da.write_unchecked(0, 1);
//!     da.write_unchecked(1, 2);
//!     da.write_unchecked(2, 3);
//!     da.set_size(3);
//!
//!     assert_eq!(*da.get_unchecked(2), 3);
//! }
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! darray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DArrayBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use darray::{DArray, DArrayBehaviour};
//!
//!     #[test]
//!     fn test_handles_grow_failure() {
//!         let mut da = DArray::<u8>::new();
//!         da.change_behaviour(DArrayBehaviour::FailAtGrow);
//!
//!         // Test that your code handles the error correctly
//!         assert!(da.grow().is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod darray;
mod error;

#[cfg(test)]
mod tests;

pub use darray::{DArray, DEFAULT_CAPACITY};
pub use error::DArrayError;

#[cfg(any(test, feature = "test_utils"))]
pub use darray::DArrayBehaviour;

/// `DArray` of 32-bit signed integers.
pub type DArrayInt = DArray<i32>;
/// `DArray` of 64-bit signed integers.
pub type DArrayLong = DArray<i64>;
/// `DArray` of single-precision floats.
pub type DArrayFloat = DArray<f32>;
/// `DArray` of double-precision floats.
pub type DArrayDouble = DArray<f64>;
/// `DArray` of owned strings.
pub type DArrayString = DArray<alloc::string::String>;
