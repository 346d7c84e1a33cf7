//! tuplekit - fixed-arity primitive tuples and dense 2D matrix helpers
//!
//! tuplekit provides immutable value containers of 0-9 primitive values
//! (byte, char, short, int, long, float, double kinds) with statistics,
//! transformation, iteration, and structural equality, plus row-major
//! matrix helpers (shape checks, element-wise zips, sequential multiply).
//!
//! # Quick Start
//!
//! ```
//! use tuplekit::{IntTuple, Tuple};
//!
//! let t = IntTuple::of([3, 1, 2]);
//! assert_eq!(t.min()?, 1);
//! assert_eq!(t.median()?, 2);
//! assert_eq!(t.average()?, 2.0);
//! assert_eq!(t.reverse().to_string(), "[2, 1, 3]");
//!
//! // 2-ary combinators live on the arity-2 witness view
//! let pair = Tuple::of([3, 4]);
//! let view = pair.as_pair().unwrap();
//! assert_eq!(view.map(|a, b| a + b), 7);
//! # Ok::<(), tuplekit::Error>(())
//! ```
//!
//! # Architecture
//!
//! The library is split into three crates, re-exported here:
//! - `tuplekit-core`: the sealed [`Element`]/[`Numeric`] kind traits and
//!   the [`Error`] hierarchy
//! - `tuplekit-tuple`: the arity-generic [`Tuple`] and its [`Pair`]/
//!   [`Triple`] combinator views
//! - `tuplekit-matrix`: the dense [`Matrix`] and its helper operations

// Re-export the public API from the member crates
pub use tuplekit_core::{Element, Error, Numeric, Result, MAX_ARITY};
pub use tuplekit_matrix::{
    is_same_shape, is_same_shape3, is_same_shape_all, multiply, multiply_with, zip, zip3, zip_all,
    zip_map, Matrix,
};
pub use tuplekit_tuple::{
    ByteTuple, CharTuple, DoubleTuple, FloatTuple, IntTuple, LongTuple, Pair, ShortTuple, Triple,
    Tuple,
};
