// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width numeric aliases and a small three-component vector.
//!
//! These are the element types the darray check runner instantiates. They
//! carry no behaviour of their own beyond plain arithmetic on [`Vec3`].
//!
//! # Example
//!
//! ```
//! use darray_defs::{U32, Vec3F32};
//!
//! let count: U32 = 3;
//! let v = Vec3F32::new(1.0, 2.0, 3.0);
//!
//! assert_eq!(v.dot(v), 14.0);
//! assert_eq!(count, 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod vec3;

#[cfg(test)]
mod tests;

pub use vec3::Vec3;

/// Unsigned 8-bit integer.
pub type U8 = u8;
/// Unsigned 16-bit integer.
pub type U16 = u16;
/// Unsigned 32-bit integer.
pub type U32 = u32;
/// Unsigned 64-bit integer.
pub type U64 = u64;

/// Signed 8-bit integer.
pub type I8 = i8;
/// Signed 16-bit integer.
pub type I16 = i16;
/// Signed 32-bit integer.
pub type I32 = i32;
/// Signed 64-bit integer.
pub type I64 = i64;

/// Single-precision float.
pub type F32 = f32;
/// Double-precision float.
pub type F64 = f64;

/// Pointer-sized unsigned integer.
pub type USize = usize;

/// Vector of three single-precision floats.
pub type Vec3F32 = Vec3<F32>;
/// Vector of three signed 32-bit integers.
pub type Vec3I32 = Vec3<I32>;
/// Vector of three unsigned 32-bit integers.
pub type Vec3U32 = Vec3<U32>;
