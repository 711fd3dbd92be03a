//! # Offset vectors and triangular matrices
//!
//! A small generic container library built around two types: [`OffsetVector`], a dense vector
//! whose first valid index is configurable, and [`TriangularMatrix`], a square matrix stored as
//! one such vector per row, each row starting at its own diagonal.
//!
//! Both types have value semantics: cloning deep-copies the storage, and equality compares shape
//! and every element. Arithmetic is generic over the element type, with bounds per operation.
//! Text input and output are whitespace-delimited; see the [`io`] module.
#![warn(missing_docs)]

pub mod error;
pub mod io;
pub mod matrix;
pub mod vector;

pub use error::Error;
pub use matrix::TriangularMatrix;
pub use vector::OffsetVector;
