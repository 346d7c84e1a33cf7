//! Dense 2D matrix helpers
//!
//! This crate defines:
//! - Matrix: a row-major dense matrix over any [`Element`] kind
//! - Shape checks: `is_same_shape`, `is_same_shape3`, `is_same_shape_all`
//! - Element-wise combines: `zip`, `zip3`, `zip_all`, kind-converting
//!   `zip_map`
//! - Sequential multiplication: `multiply`, `multiply_with`
//!
//! All helpers are single-threaded and synchronous; there is no parallel
//! execution path and no process-wide state.
//!
//! [`Element`]: tuplekit_core::Element

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matrix;
pub mod ops;

pub use matrix::Matrix;
pub use ops::{
    is_same_shape, is_same_shape3, is_same_shape_all, multiply, multiply_with, zip, zip3, zip_all,
    zip_map,
};
