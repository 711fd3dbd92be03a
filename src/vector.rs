//! # Offset vector
//!
//! Wrapping a `Vec` such that the first valid index is configurable: a vector of size `size`
//! with start index `start_index` stores `size - start_index` elements, addressed by logical
//! indices in `[start_index, size)`. Indices below the start index are not backed by storage.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::Error;

/// Largest total size a vector can be created with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// A dense vector whose valid index range starts at a configurable offset.
///
/// Uses a `Vec` as underlying data structure; only the elements at logical indices
/// `start_index..size` are stored. Equality compares the shape and every stored element, and
/// cloning deep-copies the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetVector<T> {
    /// Total addressable span; one past the largest valid logical index.
    size: usize,
    /// First valid logical index.
    start_index: usize,
    /// The stored elements, `data[i]` holding logical index `start_index + i`.
    data: Vec<T>,
}

impl<T> OffsetVector<T>
where
    T: Zero + Clone,
{
    /// Create a vector of the given total size, all stored elements set to zero.
    ///
    /// # Arguments
    ///
    /// * `size`: Total addressable span, at most [`MAX_VECTOR_SIZE`].
    /// * `start_index`: First valid logical index, at most `size`.
    ///
    /// # Return value
    ///
    /// A zero-filled vector, or `Error::InvalidArgument` if a bound is violated.
    pub fn new(size: usize, start_index: usize) -> Result<Self, Error> {
        if size > MAX_VECTOR_SIZE {
            return Err(Error::InvalidArgument(format!(
                "size {} exceeds the maximum vector size {}",
                size, MAX_VECTOR_SIZE,
            )));
        }
        if start_index > size {
            return Err(Error::InvalidArgument(format!(
                "start index {} exceeds the size {}",
                start_index, size,
            )));
        }

        Ok(Self {
            size,
            start_index,
            data: vec![T::zero(); size - start_index],
        })
    }
}

impl<T> Default for OffsetVector<T>
where
    T: Zero + Clone,
{
    /// A zero vector of size `10` with start index `0`.
    fn default() -> Self {
        Self {
            size: 10,
            start_index: 0,
            data: vec![T::zero(); 10],
        }
    }
}

impl<T> OffsetVector<T> {
    /// Create a vector from existing storage.
    ///
    /// # Arguments
    ///
    /// * `start_index`: First valid logical index.
    /// * `data`: The stored elements; the total size becomes `start_index + data.len()`.
    ///
    /// # Return value
    ///
    /// A vector wrapping `data`, or `Error::InvalidArgument` if the resulting size exceeds
    /// [`MAX_VECTOR_SIZE`].
    pub fn from_parts(start_index: usize, data: Vec<T>) -> Result<Self, Error> {
        let size = start_index
            .checked_add(data.len())
            .filter(|&size| size <= MAX_VECTOR_SIZE)
            .ok_or_else(|| Error::InvalidArgument(format!(
                "start index {} with {} elements exceeds the maximum vector size {}",
                start_index, data.len(), MAX_VECTOR_SIZE,
            )))?;

        Ok(Self { size, start_index, data, })
    }

    /// Total addressable span of this vector.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First valid logical index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Retrieve the element at a logical index.
    ///
    /// # Return value
    ///
    /// A reference to the element, or `Error::IndexOutOfRange` if `index` lies outside
    /// `[start_index, size)`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.offset(index).map(|offset| &self.data[offset])
    }

    /// Retrieve the element at a logical index mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.offset(index).map(move |offset| &mut self.data[offset])
    }

    /// Iterate over the stored elements, in logical index order.
    ///
    /// The elements below the start index are not stored and do not appear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the stored elements, in logical index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Map a logical index to its physical offset, rejecting indices outside the valid window.
    fn offset(&self, index: usize) -> Result<usize, Error> {
        if index < self.start_index || index >= self.size {
            Err(Error::IndexOutOfRange {
                index,
                start_index: self.start_index,
                size: self.size,
            })
        } else {
            Ok(index - self.start_index)
        }
    }

    /// Both operands must have the same size and start index for element-wise operations.
    fn shape_check(&self, other: &Self) -> Result<(), Error> {
        if self.size != other.size || self.start_index != other.start_index {
            Err(Error::ShapeMismatch(format!(
                "left operand has size {} starting at {}, right operand has size {} starting at {}",
                self.size, self.start_index, other.size, other.start_index,
            )))
        } else {
            Ok(())
        }
    }
}

impl<T> OffsetVector<T> {
    /// Add a scalar to every stored element.
    ///
    /// The result has the same size and start index as `self`; the conceptual prefix below the
    /// start index remains zero (it is not stored).
    pub fn scalar_add(&self, scalar: &T) -> Self
    where
        for<'r> &'r T: Add<Output = T>,
    {
        Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.iter().map(|value| value + scalar).collect(),
        }
    }

    /// Subtract a scalar from every stored element.
    pub fn scalar_sub(&self, scalar: &T) -> Self
    where
        for<'r> &'r T: Sub<Output = T>,
    {
        Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.iter().map(|value| value - scalar).collect(),
        }
    }

    /// Multiply every stored element by a scalar.
    pub fn scalar_mul(&self, scalar: &T) -> Self
    where
        for<'r> &'r T: Mul<Output = T>,
    {
        Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.iter().map(|value| value * scalar).collect(),
        }
    }

    /// Element-wise sum of two vectors of identical shape.
    ///
    /// # Return value
    ///
    /// A vector of the shared shape, or `Error::ShapeMismatch` if either the size or the start
    /// index differs.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Add<Output = T>,
    {
        self.shape_check(other)?;

        Ok(Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.iter()
                .zip_eq(&other.data)
                .map(|(left, right)| left + right)
                .collect(),
        })
    }

    /// Element-wise difference of two vectors of identical shape.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Sub<Output = T>,
    {
        self.shape_check(other)?;

        Ok(Self {
            size: self.size,
            start_index: self.start_index,
            data: self.data.iter()
                .zip_eq(&other.data)
                .map(|(left, right)| left - right)
                .collect(),
        })
    }

    /// Inner product of two vectors of the same total size.
    ///
    /// Only the sizes are compared; the start indices may differ. The products are taken over
    /// the logical overlap `[max(start_a, start_b), size)`, walking both tails backward, with an
    /// accumulator starting at zero.
    ///
    /// # Return value
    ///
    /// The accumulated product, or `Error::ShapeMismatch` if the total sizes differ.
    pub fn dot(&self, other: &Self) -> Result<T, Error>
    where
        T: Zero + AddAssign,
        for<'r> &'r T: Mul<Output = T>,
    {
        if self.size != other.size {
            return Err(Error::ShapeMismatch(format!(
                "left operand has size {}, right operand has size {}",
                self.size, other.size,
            )));
        }

        let overlap = self.size - self.start_index.max(other.start_index);
        let mut total = T::zero();
        for (left, right) in self.data.iter().rev().zip(other.data.iter().rev()).take(overlap) {
            total += left * right;
        }

        Ok(total)
    }
}

impl<T> Index<usize> for OffsetVector<T> {
    type Output = T;

    /// # Panics
    ///
    /// If `index` lies outside `[start_index, size)`; use [`OffsetVector::get`] for a fallible
    /// variant.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for OffsetVector<T> {
    /// # Panics
    ///
    /// If `index` lies outside `[start_index, size)`; use [`OffsetVector::get_mut`] for a
    /// fallible variant.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Display> Display for OffsetVector<T> {
    /// Each token in a 10-character left-aligned field: first a `0` placeholder per index below
    /// the start index, then the stored elements in logical order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for _ in 0..self.start_index {
            write!(f, "{:<10}", "0")?;
        }
        for value in &self.data {
            write!(f, "{:<10}", value)?;
        }

        Ok(())
    }
}
