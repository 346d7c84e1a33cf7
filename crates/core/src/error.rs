//! Error types for tuplekit
//!
//! This module defines all error types used throughout the library.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! The taxonomy is small and synchronous: invalid-argument errors
//! (`CapacityExceeded`, `DataLength`, `RaggedRows`, `ShapeMismatch`,
//! `DimensionMismatch`, `EmptyInput`) and the empty-container error
//! (`EmptyTuple`). Errors raised by caller-supplied closures are never
//! wrapped here; the `try_*` combinators propagate them unmodified.

use crate::MAX_ARITY;
use thiserror::Error;

/// Result type alias for tuplekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tuplekit
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Too many elements given to a tuple constructor
    #[error("too many elements ({len}) to fill in a tuple (max {})", MAX_ARITY)]
    CapacityExceeded {
        /// Number of elements supplied
        len: usize,
    },

    /// Statistical operation called on an arity-0 tuple
    #[error("{operation} called on an empty tuple")]
    EmptyTuple {
        /// Name of the failed operation
        operation: &'static str,
    },

    /// Matrix data length does not match the declared shape
    #[error("matrix data length {len} does not match shape {rows}x{cols}")]
    DataLength {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
        /// Actual data length supplied
        len: usize,
    },

    /// Rows of differing lengths given to a row-wise matrix constructor
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Length of row 0
        expected: usize,
    },

    /// Element-wise operation over matrices of different shapes
    #[error("can't zip matrices which don't have the same shape: {rows_a}x{cols_a} vs {rows_b}x{cols_b}")]
    ShapeMismatch {
        /// Row count of the first matrix
        rows_a: usize,
        /// Column count of the first matrix
        cols_a: usize,
        /// Row count of the offending matrix
        rows_b: usize,
        /// Column count of the offending matrix
        cols_b: usize,
    },

    /// Matrix multiplication with incompatible dimensions
    #[error("illegal matrix dimensions: {rows_a}x{cols_a} * {rows_b}x{cols_b}")]
    DimensionMismatch {
        /// Row count of the left matrix
        rows_a: usize,
        /// Column count of the left matrix
        cols_a: usize,
        /// Row count of the right matrix
        rows_b: usize,
        /// Column count of the right matrix
        cols_b: usize,
    },

    /// Aggregate operation over an empty collection of inputs
    #[error("{what} must not be empty")]
    EmptyInput {
        /// Description of the empty argument
        what: &'static str,
    },
}
