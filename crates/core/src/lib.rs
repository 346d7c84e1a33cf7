//! Core traits and types for tuplekit
//!
//! This crate defines the foundational pieces shared by the tuple and matrix
//! crates:
//! - Element: the sealed trait over the seven primitive kinds
//! - Numeric: the sealed subtrait for kinds with same-kind arithmetic
//! - Error: error type hierarchy
//! - MAX_ARITY: the fixed tuple capacity

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;

pub use element::{Element, Numeric};
pub use error::{Error, Result};

/// Maximum number of elements a tuple can hold.
///
/// Tuples are fixed-arity containers with arities in the closed range
/// `0..=MAX_ARITY`. The bound is enforced at compile time for `Tuple::of`
/// and at runtime for `Tuple::create`.
pub const MAX_ARITY: usize = 9;
