//! # Upper-triangular matrix
//!
//! A square matrix stored row by row, where row `i` only stores the columns `i` through the last
//! one. Each row is an [`OffsetVector`] of the full dimension with start index `i`, so entries
//! below the diagonal are not backed by storage and cannot be addressed.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::Error;
use crate::vector::OffsetVector;

/// Largest dimension a matrix can be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// A square matrix with upper-triangular storage.
///
/// Owns one row vector per row index; matrix-level operations delegate to the row operations.
/// The triangular start-index pattern is established at construction and is a matrix-level
/// responsibility, not a property of the row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangularMatrix<T> {
    rows: Vec<OffsetVector<T>>,
}

impl<T> TriangularMatrix<T>
where
    T: Zero + Clone,
{
    /// Create a zero-filled matrix of the given dimension.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Number of rows and columns, at most [`MAX_MATRIX_SIZE`].
    ///
    /// # Return value
    ///
    /// A matrix whose row `i` is a zero vector of size `dimension` with start index `i`, or
    /// `Error::InvalidArgument` if the dimension exceeds the bound.
    pub fn new(dimension: usize) -> Result<Self, Error> {
        if dimension > MAX_MATRIX_SIZE {
            return Err(Error::InvalidArgument(format!(
                "dimension {} exceeds the maximum matrix size {}",
                dimension, MAX_MATRIX_SIZE,
            )));
        }

        let rows = (0..dimension)
            .map(|i| OffsetVector::new(dimension, i))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T> TriangularMatrix<T> {
    /// Adopt arbitrary rows as a matrix, verbatim.
    ///
    /// The triangular start-index pattern is not re-enforced; providing rows that follow it is
    /// the caller's responsibility. Rows that deviate make the element accessors and the
    /// element-wise operations behave according to the rows' own windows.
    pub fn from_rows(rows: Vec<OffsetVector<T>>) -> Self {
        Self { rows, }
    }

    /// Number of rows and columns of this matrix.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Retrieve the row at an index.
    ///
    /// # Return value
    ///
    /// A reference to the row vector, or `Error::IndexOutOfRange` if `row` is not below the
    /// dimension.
    pub fn row(&self, row: usize) -> Result<&OffsetVector<T>, Error> {
        self.rows.get(row).ok_or(Error::IndexOutOfRange {
            index: row,
            start_index: 0,
            size: self.rows.len(),
        })
    }

    /// Retrieve the row at an index mutably.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut OffsetVector<T>, Error> {
        let size = self.rows.len();
        self.rows.get_mut(row).ok_or(Error::IndexOutOfRange {
            index: row,
            start_index: 0,
            size,
        })
    }

    /// Retrieve the element at a coordinate.
    ///
    /// Accessing a column below the diagonal fails with `Error::IndexOutOfRange`, as those
    /// entries are not stored.
    pub fn get(&self, row: usize, column: usize) -> Result<&T, Error> {
        self.row(row)?.get(column)
    }

    /// Retrieve the element at a coordinate mutably.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut T, Error> {
        self.row_mut(row)?.get_mut(column)
    }

    /// Iterate over the rows, in order.
    pub fn iter_rows(&self) -> Iter<'_, OffsetVector<T>> {
        self.rows.iter()
    }

    pub(crate) fn rows_mut(&mut self) -> IterMut<'_, OffsetVector<T>> {
        self.rows.iter_mut()
    }

    /// Both operands must have the same dimension for row-wise operations.
    fn dimension_check(&self, other: &Self) -> Result<(), Error> {
        if self.rows.len() != other.rows.len() {
            Err(Error::ShapeMismatch(format!(
                "left operand has dimension {}, right operand has dimension {}",
                self.rows.len(), other.rows.len(),
            )))
        } else {
            Ok(())
        }
    }

    /// Row-wise sum of two matrices of the same dimension.
    ///
    /// Each row pair is added through [`OffsetVector::try_add`], which also enforces that the
    /// rows agree on their start indices.
    ///
    /// # Return value
    ///
    /// The sum, or `Error::ShapeMismatch` if the dimensions or any row shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Add<Output = T>,
    {
        self.dimension_check(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(left, right)| left.try_add(right))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Row-wise difference of two matrices of the same dimension.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Sub<Output = T>,
    {
        self.dimension_check(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(left, right)| left.try_sub(right))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = OffsetVector<T>;

    /// # Panics
    ///
    /// If `row` is not below the dimension; use [`TriangularMatrix::row`] for a fallible
    /// variant.
    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    /// # Panics
    ///
    /// If `row` is not below the dimension; use [`TriangularMatrix::row_mut`] for a fallible
    /// variant.
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Display> Display for TriangularMatrix<T> {
    /// One row per line, each rendered by the row's own `Display` implementation.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
