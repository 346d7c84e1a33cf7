//! Fixed-arity primitive tuples
//!
//! This crate defines the tuple family:
//! - Tuple: arity-generic immutable container (arities 0..=9)
//! - Kind aliases: ByteTuple, CharTuple, ShortTuple, IntTuple, LongTuple,
//!   FloatTuple, DoubleTuple
//! - Pair / Triple: arity-witness views exposing the 2-ary and 3-ary
//!   combinators (accept / map / filter)
//!
//! # Quick Start
//!
//! ```
//! use tuplekit_tuple::IntTuple;
//!
//! let t = IntTuple::of([3, 1, 2]);
//! assert_eq!(t.min()?, 1);
//! assert_eq!(t.max()?, 3);
//! assert_eq!(t.sum(), 6);
//! assert_eq!(t.to_string(), "[3, 1, 2]");
//! # Ok::<(), tuplekit_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod tuple;
pub mod view;

pub use tuple::{
    ByteTuple, CharTuple, DoubleTuple, FloatTuple, IntTuple, LongTuple, ShortTuple, Tuple,
};
pub use view::{Pair, Triple};
