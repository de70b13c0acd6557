// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Add, Mul, Neg, Sub};

/// Three-component vector.
///
/// `Default` is the zero vector for every numeric `T`.
///
/// # Example
///
/// ```
/// use darray_defs::{Vec3, Vec3I32};
///
/// let a = Vec3I32::new(1, 2, 3);
/// let b = Vec3::splat(1);
///
/// assert_eq!(a + b, Vec3::new(2, 3, 4));
/// assert_eq!(a * 2, Vec3::new(2, 4, 6));
/// assert_eq!(-a, Vec3::new(-1, -2, -3));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec3<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
}

impl<T> Vec3<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    /// Creates a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }
}

impl<T> Vec3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Scales every component.
impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}
