//! Arity-witness views for the 2-ary and 3-ary combinators
//!
//! ## Design Principle
//!
//! `accept` / `map` / `filter` take multi-argument closures and are only
//! meaningful at arities 2 and 3. Rather than runtime-erroring methods on
//! every tuple, the combinators live on narrow view types that can only be
//! obtained when the arity matches: `Tuple::as_pair` returns `Some` exactly
//! at arity 2, `Tuple::as_triple` exactly at arity 3. The views delegate to
//! the tuple's storage - they do not reimplement any of its logic.

use tuplekit_core::Element;

use crate::tuple::Tuple;

/// Arity-2 witness over a tuple, exposing the 2-ary combinators.
///
/// ```
/// use tuplekit_tuple::IntTuple;
///
/// let t = IntTuple::of([3, 4]);
/// let pair = t.as_pair().unwrap();
/// assert_eq!(pair.map(|a, b| a + b), 7);
/// assert!(pair.filter(|a, b| a + b > 10).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a, T: Element> {
    tuple: &'a Tuple<T>,
}

impl<'a, T: Element> Pair<'a, T> {
    // Caller guarantees arity 2.
    pub(crate) fn new(tuple: &'a Tuple<T>) -> Self {
        debug_assert_eq!(tuple.arity(), 2);
        Pair { tuple }
    }

    /// First element.
    pub fn first(&self) -> T {
        self.tuple.as_slice()[0]
    }

    /// Second element.
    pub fn second(&self) -> T {
        self.tuple.as_slice()[1]
    }

    /// The underlying tuple.
    pub fn tuple(&self) -> &'a Tuple<T> {
        self.tuple
    }

    /// Invokes `f` with the two values unpacked as positional arguments,
    /// for side effects.
    pub fn accept<F>(&self, f: F)
    where
        F: FnOnce(T, T),
    {
        f(self.first(), self.second());
    }

    /// Fallible `accept`: the closure's error propagates unmodified.
    pub fn try_accept<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(T, T) -> Result<(), E>,
    {
        f(self.first(), self.second())
    }

    /// Invokes `f` with the two values unpacked and returns its result
    /// directly, unwrapped.
    pub fn map<R, F>(&self, f: F) -> R
    where
        F: FnOnce(T, T) -> R,
    {
        f(self.first(), self.second())
    }

    /// The original tuple if the predicate holds, `None` otherwise.
    pub fn filter<F>(&self, predicate: F) -> Option<&'a Tuple<T>>
    where
        F: FnOnce(T, T) -> bool,
    {
        if predicate(self.first(), self.second()) {
            Some(self.tuple)
        } else {
            None
        }
    }

    /// Fallible `filter`: the predicate's error propagates unmodified.
    pub fn try_filter<E, F>(&self, predicate: F) -> Result<Option<&'a Tuple<T>>, E>
    where
        F: FnOnce(T, T) -> Result<bool, E>,
    {
        if predicate(self.first(), self.second())? {
            Ok(Some(self.tuple))
        } else {
            Ok(None)
        }
    }
}

/// Arity-3 witness over a tuple, exposing the 3-ary combinators.
#[derive(Debug, Clone, Copy)]
pub struct Triple<'a, T: Element> {
    tuple: &'a Tuple<T>,
}

impl<'a, T: Element> Triple<'a, T> {
    // Caller guarantees arity 3.
    pub(crate) fn new(tuple: &'a Tuple<T>) -> Self {
        debug_assert_eq!(tuple.arity(), 3);
        Triple { tuple }
    }

    /// First element.
    pub fn first(&self) -> T {
        self.tuple.as_slice()[0]
    }

    /// Second element.
    pub fn second(&self) -> T {
        self.tuple.as_slice()[1]
    }

    /// Third element.
    pub fn third(&self) -> T {
        self.tuple.as_slice()[2]
    }

    /// The underlying tuple.
    pub fn tuple(&self) -> &'a Tuple<T> {
        self.tuple
    }

    /// Invokes `f` with the three values unpacked as positional arguments,
    /// for side effects.
    pub fn accept<F>(&self, f: F)
    where
        F: FnOnce(T, T, T),
    {
        f(self.first(), self.second(), self.third());
    }

    /// Fallible `accept`: the closure's error propagates unmodified.
    pub fn try_accept<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(T, T, T) -> Result<(), E>,
    {
        f(self.first(), self.second(), self.third())
    }

    /// Invokes `f` with the three values unpacked and returns its result
    /// directly, unwrapped.
    pub fn map<R, F>(&self, f: F) -> R
    where
        F: FnOnce(T, T, T) -> R,
    {
        f(self.first(), self.second(), self.third())
    }

    /// The original tuple if the predicate holds, `None` otherwise.
    pub fn filter<F>(&self, predicate: F) -> Option<&'a Tuple<T>>
    where
        F: FnOnce(T, T, T) -> bool,
    {
        if predicate(self.first(), self.second(), self.third()) {
            Some(self.tuple)
        } else {
            None
        }
    }

    /// Fallible `filter`: the predicate's error propagates unmodified.
    pub fn try_filter<E, F>(&self, predicate: F) -> Result<Option<&'a Tuple<T>>, E>
    where
        F: FnOnce(T, T, T) -> Result<bool, E>,
    {
        if predicate(self.first(), self.second(), self.third())? {
            Ok(Some(self.tuple))
        } else {
            Ok(None)
        }
    }
}
