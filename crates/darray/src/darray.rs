// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{self as heap, Layout};
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::DArrayError;

/// Number of slots allocated by [`DArray::new`] and [`DArray::try_new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Test behaviour for injecting failures in `DArray` growth.
///
/// This is only available with the `test_utils` feature and allows users
/// to test allocation-failure paths in their code without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use darray::{DArray, DArrayBehaviour, DArrayError};
///
///     #[test]
///     fn test_handles_grow_failure() -> Result<(), DArrayError> {
///         let mut da = DArray::<u8>::try_with_capacity(1)?;
///         da.append(1)?;
///
///         // Inject failure
///         da.change_behaviour(DArrayBehaviour::FailAtGrow);
///
///         // The array is full, so this append has to grow and fails
///         assert!(da.append(2).is_err());
///
///         // Reset to normal behaviour
///         da.change_behaviour(DArrayBehaviour::None);
///
///         // Now it works
///         da.append(2)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DArrayBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every growth attempt fails with `AllocFailed` before touching the buffer.
    FailAtGrow,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for DArrayBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// A growable, contiguous, heap-allocated array.
///
/// `DArray<T>` owns a buffer of `capacity` slots, of which the first `size`
/// hold initialized elements. Capacity starts at [`DEFAULT_CAPACITY`] (or the
/// value passed to [`DArray::try_with_capacity`]) and only ever changes by
/// doubling.
///
/// Access comes in two tiers:
///
/// - **Managed**: construction, [`append`](DArray::append),
///   [`grow`](DArray::grow), [`reserve`](DArray::reserve), slice views and
///   `Drop`. These keep `size <= capacity` and never expose uninitialized
///   memory.
/// - **Unchecked**: the `unsafe fn` family ([`get_unchecked`](DArray::get_unchecked),
///   [`write_unchecked`](DArray::write_unchecked), [`set_size`](DArray::set_size))
///   performs no bounds checks. The caller upholds the documented contract.
///
/// # Example
///
/// ```rust
/// use darray::{DArray, DArrayError};
///
/// fn example() -> Result<(), DArrayError> {
///     let mut da = DArray::try_new()?;
///     da.append(1)?;
///     da.append(2)?;
///     da.append(3)?;
///
///     assert_eq!(da.as_slice(), &[1, 2, 3]);
///     assert_eq!(da.size(), 3);
///     assert_eq!(da.capacity(), 256);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DArray<T> {
    data: NonNull<T>,
    size: usize,
    capacity: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DArrayBehaviour,
    _owns: PhantomData<T>,
}

// SAFETY: DArray<T> uniquely owns its buffer, exactly like Vec<T>.
unsafe impl<T: Send> Send for DArray<T> {}
// SAFETY: shared access only hands out &T.
unsafe impl<T: Sync> Sync for DArray<T> {}

#[inline(always)]
const fn is_zero_sized<T>() -> bool {
    mem::size_of::<T>() == 0
}

#[inline]
fn layout_for<T>(capacity: usize) -> Result<Layout, DArrayError> {
    Layout::array::<T>(capacity).map_err(|_| DArrayError::CapacityOverflow)
}

/// Reports a failure from an infallible wrapper the way `Vec` does.
#[cold]
#[inline(never)]
fn fail<T>(error: DArrayError) -> ! {
    match error {
        DArrayError::AllocFailed { capacity, .. } => match Layout::array::<T>(capacity) {
            Ok(layout) => heap::handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
        DArrayError::CapacityOverflow => panic!("capacity overflow"),
        DArrayError::ZeroCapacity => panic!("darray capacity must be greater than zero"),
    }
}

impl<T> DArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// - [`DArrayError::CapacityOverflow`] if 256 slots of `T` exceed the
    ///   maximum allocation size.
    /// - [`DArrayError::AllocFailed`] if the allocator returns null.
    pub fn try_new() -> Result<Self, DArrayError> {
        Self::try_with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// Zero-sized element types never allocate; their capacity is tracked
    /// logically.
    ///
    /// # Errors
    ///
    /// - [`DArrayError::ZeroCapacity`] if `capacity == 0`.
    /// - [`DArrayError::CapacityOverflow`] if the buffer would exceed
    ///   `isize::MAX` bytes.
    /// - [`DArrayError::AllocFailed`] if the allocator returns null.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DArray, DArrayError};
    ///
    /// let da = DArray::<u32>::try_with_capacity(8).expect("Failed to try_with_capacity(..)");
    /// assert_eq!(da.capacity(), 8);
    ///
    /// assert_eq!(
    ///     DArray::<u32>::try_with_capacity(0).err(),
    ///     Some(DArrayError::ZeroCapacity)
    /// );
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DArrayError> {
        if capacity == 0 {
            return Err(DArrayError::ZeroCapacity);
        }

        let layout = layout_for::<T>(capacity)?;

        let data = if is_zero_sized::<T>() {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size (capacity > 0 and T is not zero-sized).
            let raw = unsafe { heap::alloc(layout) };

            NonNull::new(raw.cast::<T>()).ok_or(DArrayError::AllocFailed {
                capacity,
                bytes: layout.size(),
            })?
        };

        Ok(Self {
            data,
            size: 0,
            capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DArrayBehaviour::default(),
            _owns: PhantomData,
        })
    }

    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error)
    /// if the allocation fails. Use [`DArray::try_new`] to handle the failure.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|e| fail::<T>(e))
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0` or on capacity overflow, and aborts through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if the
    /// allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| fail::<T>(e))
    }

    /// Returns the number of initialized elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of initialized elements.
    ///
    /// Same as [`size`](DArray::size); shadows `<[T]>::len` reached through `Deref`.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Doubles the capacity, preserving the first `size` elements.
    ///
    /// May be called at any time, not only when the array is full. The
    /// buffer may move; slots beyond `size` stay uninitialized.
    ///
    /// # Errors
    ///
    /// - [`DArrayError::CapacityOverflow`] if the doubled capacity does not
    ///   fit a valid layout.
    /// - [`DArrayError::AllocFailed`] if reallocation fails.
    ///
    /// On error the array is left exactly as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DArray, DArrayError};
    ///
    /// fn example() -> Result<(), DArrayError> {
    ///     let mut da = DArray::<i32>::try_new()?;
    ///     assert_eq!(da.capacity(), 256);
    ///
    ///     da.grow()?;
    ///     assert_eq!(da.capacity(), 512);
    ///     assert_eq!(da.size(), 0);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn grow(&mut self) -> Result<(), DArrayError> {
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or(DArrayError::CapacityOverflow)?;

        self.realloc_to(new_capacity)
    }

    /// Ensures room for `additional` more elements.
    ///
    /// Doubles the capacity as many times as needed, then reallocates once.
    /// Capacity therefore stays `initial * 2^k`. Does nothing if the
    /// current capacity already suffices.
    ///
    /// # Errors
    ///
    /// Same as [`grow`](DArray::grow); the array is unchanged on error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DArray, DArrayError};
    ///
    /// fn example() -> Result<(), DArrayError> {
    ///     let mut da = DArray::<u8>::try_with_capacity(3)?;
    ///     da.reserve(10)?;
    ///
    ///     // 3 -> 6 -> 12
    ///     assert_eq!(da.capacity(), 12);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<(), DArrayError> {
        let required = self
            .size
            .checked_add(additional)
            .ok_or(DArrayError::CapacityOverflow)?;

        if required <= self.capacity {
            return Ok(());
        }

        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .ok_or(DArrayError::CapacityOverflow)?;
        }

        self.realloc_to(new_capacity)
    }

    #[cold]
    fn realloc_to(&mut self, new_capacity: usize) -> Result<(), DArrayError> {
        debug_assert!(new_capacity > self.capacity);

        let new_layout = layout_for::<T>(new_capacity)?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DArrayBehaviour::FailAtGrow) {
            return Err(DArrayError::AllocFailed {
                capacity: new_capacity,
                bytes: new_layout.size(),
            });
        }

        if is_zero_sized::<T>() {
            self.capacity = new_capacity;
            return Ok(());
        }

        let old_layout = layout_for::<T>(self.capacity)?;

        // SAFETY (PRECONDITIONS ARE MET):
        // - `data` was allocated by the global allocator with `old_layout`
        //   (construction and every previous realloc use `layout_for::<T>(capacity)`).
        // - `new_layout.size()` is non-zero and, being a valid `Layout`, does not
        //   overflow `isize::MAX` when rounded up to the alignment.
        let raw = unsafe {
            heap::realloc(
                self.data.as_ptr().cast::<u8>(),
                old_layout,
                new_layout.size(),
            )
        };

        // On null the old block is still valid and still owned by `self`.
        self.data = NonNull::new(raw.cast::<T>()).ok_or(DArrayError::AllocFailed {
            capacity: new_capacity,
            bytes: new_layout.size(),
        })?;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Appends `value` at index `size`, growing once if the array is full.
    ///
    /// # Errors
    ///
    /// Returns the error of the triggered [`grow`](DArray::grow). The array
    /// is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DArray, DArrayError};
    ///
    /// fn example() -> Result<(), DArrayError> {
    ///     let mut da = DArray::try_with_capacity(2)?;
    ///     da.append(1u8)?;
    ///     da.append(2u8)?;
    ///
    ///     // Full: this append doubles the capacity first
    ///     da.append(3u8)?;
    ///
    ///     assert_eq!(da.as_slice(), &[1, 2, 3]);
    ///     assert_eq!(da.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append(&mut self, value: T) -> Result<(), DArrayError> {
        if self.size >= self.capacity {
            self.grow()?;
        }

        debug_assert!(self.size < self.capacity);

        // SAFETY: size < capacity, so slot `size` lies inside the allocation.
        unsafe {
            self.data.as_ptr().add(self.size).write(value);
        }
        self.size += 1;

        Ok(())
    }

    /// Appends `value`, aborting on allocation failure.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts through
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if the
    /// triggered grow cannot allocate.
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.append(value) {
            fail::<T>(e)
        }
    }

    /// Clones every element of `values` onto the end of the array.
    ///
    /// Reserves once up front, so at most one reallocation happens.
    ///
    /// # Errors
    ///
    /// Same as [`reserve`](DArray::reserve); nothing is appended on error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DArray, DArrayError};
    ///
    /// fn example() -> Result<(), DArrayError> {
    ///     let mut da = DArray::try_with_capacity(2)?;
    ///     da.extend_from_slice(&["a", "b", "c", "d", "e"])?;
    ///
    ///     assert_eq!(da.size(), 5);
    ///     assert_eq!(da.capacity(), 8);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), DArrayError>
    where
        T: Clone,
    {
        self.reserve(values.len())?;

        for value in values {
            // SAFETY: reserve guaranteed capacity >= size + values.len().
            unsafe {
                self.data.as_ptr().add(self.size).write(value.clone());
            }
            // Bumped per element so a panicking clone leaves only initialized slots counted.
            self.size += 1;
        }

        Ok(())
    }

    /// Destroys the array, dropping every element and releasing the buffer.
    ///
    /// Equivalent to letting the array go out of scope.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns the initialized elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `size` slots are initialized and `data` is non-null and aligned.
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.size) }
    }

    /// Returns the initialized elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `size` slots are initialized and uniquely borrowed.
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.size) }
    }

    /// Returns the slots between `size` and `capacity`.
    ///
    /// Values written here are not counted until [`set_size`](DArray::set_size)
    /// is called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::DArray;
    ///
    /// let mut da = DArray::<u16>::with_capacity(4);
    /// let spare = da.spare_capacity_mut();
    /// assert_eq!(spare.len(), 4);
    ///
    /// spare[0].write(7);
    /// spare[1].write(9);
    ///
    /// // SAFETY: slots 0 and 1 were initialized above.
    /// unsafe { da.set_size(2) };
    /// assert_eq!(da.as_slice(), &[7, 9]);
    /// ```
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: slots [size, capacity) lie inside the allocation; MaybeUninit
        // makes no claim about their contents.
        unsafe {
            slice::from_raw_parts_mut(
                self.data.as_ptr().add(self.size).cast::<MaybeUninit<T>>(),
                self.capacity - self.size,
            )
        }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is valid for reads of `size` elements until the next
    /// operation that may grow the array.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    ///
    /// The pointer is valid for writes of `capacity` slots until the next
    /// operation that may grow the array. Writes never update `size`.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `size()`. Reading a slot at or beyond
    /// `size()` reads uninitialized memory.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);

        // SAFETY: the caller guarantees index < size.
        unsafe { &*self.data.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `size()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);

        // SAFETY: the caller guarantees index < size.
        unsafe { &mut *self.data.as_ptr().add(index) }
    }

    /// Writes `value` into slot `index` without bounds checking.
    ///
    /// Never grows the array and never changes `size`. Any value already in
    /// the slot is overwritten without being dropped.
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`. To make the written slot
    /// part of the array, follow up with [`set_size`](DArray::set_size).
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::DArray;
    ///
    /// let mut da = DArray::<i32>::with_capacity(4);
    ///
    /// // SAFETY: both indices are below capacity, and slots 0..2 are
    /// // initialized before set_size(2).
    /// unsafe {
    ///     da.write_unchecked(0, 10);
    ///     da.write_unchecked(1, 20);
    ///     da.set_size(2);
    /// }
    ///
    /// assert_eq!(da.as_slice(), &[10, 20]);
    /// ```
    #[inline(always)]
    pub unsafe fn write_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);

        // SAFETY: the caller guarantees index < capacity.
        unsafe { self.data.as_ptr().add(index).write(value) }
    }

    /// Sets the number of initialized elements.
    ///
    /// Shrinking does not drop the elements past the new size; they are
    /// leaked.
    ///
    /// # Safety
    ///
    /// - `size` must be at most `capacity()`.
    /// - Slots `0..size` must be initialized.
    #[inline(always)]
    pub unsafe fn set_size(&mut self, size: usize) {
        debug_assert!(size <= self.capacity);

        self.size = size;
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// // test_utils feature required in dev-dependencies
    /// #[cfg(test)]
    /// mod tests {
    ///     use darray::{DArray, DArrayBehaviour};
    ///
    ///     #[test]
    ///     fn test_error_handling() {
    ///         let mut da = DArray::<u8>::new();
    ///         da.change_behaviour(DArrayBehaviour::FailAtGrow);
    ///
    ///         // Next grow will fail
    ///         assert!(da.grow().is_err());
    ///     }
    /// }
    /// ```
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DArrayBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Drop for DArray<T> {
    fn drop(&mut self) {
        // SAFETY: the first `size` slots are initialized and dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), self.size));
        }

        if is_zero_sized::<T>() {
            return;
        }

        // Always Ok: the same layout was valid when the buffer was allocated.
        if let Ok(layout) = layout_for::<T>(self.capacity) {
            // SAFETY: `data` was allocated by the global allocator with `layout`.
            unsafe { heap::dealloc(self.data.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> Default for DArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DArray")
            .field("data", &self.as_slice())
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DArray<T> {
    /// Compares elements only; capacity is not part of equality.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DArray<T> {}

impl<T: Clone> Clone for DArray<T> {
    /// Clones into an array of the same capacity.
    fn clone(&self) -> Self {
        let mut cloned = Self::with_capacity(self.capacity);

        for value in self.as_slice() {
            // SAFETY: cloned.capacity == self.capacity >= self.size.
            unsafe {
                cloned.write_unchecked(cloned.size, value.clone());
            }
            cloned.size += 1;
        }

        cloned
    }
}

impl<T> Deref for DArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
