//! Arity-generic immutable tuples
//!
//! One generic container covers every arity and element kind: the backing
//! store is a fixed-capacity inline array with a length field, and the
//! length (the arity) is fixed at construction in the closed range
//! `0..=MAX_ARITY`.
//!
//! ## Value Semantics
//!
//! - A tuple never mutates after construction; every transformation returns
//!   a fresh tuple.
//! - `to_vec` / `to_array` return independent copies; mutating them never
//!   affects the tuple.
//! - Equality, hashing, and ordering of elements follow the kind rules of
//!   [`Element`]: floats compare bit-level under the IEEE total order, so
//!   `Eq` and `Hash` stay lawful.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tuplekit_core::{Element, Error, Result, MAX_ARITY};

use crate::view::{Pair, Triple};

/// A tuple of `i8` values ("byte" kind).
pub type ByteTuple = Tuple<i8>;
/// A tuple of `char` values.
pub type CharTuple = Tuple<char>;
/// A tuple of `i16` values ("short" kind).
pub type ShortTuple = Tuple<i16>;
/// A tuple of `i32` values ("int" kind).
pub type IntTuple = Tuple<i32>;
/// A tuple of `i64` values ("long" kind).
pub type LongTuple = Tuple<i64>;
/// A tuple of `f32` values ("float" kind).
pub type FloatTuple = Tuple<f32>;
/// A tuple of `f64` values ("double" kind).
pub type DoubleTuple = Tuple<f64>;

// Compile-time arity cap for `of`. Referencing CHECK forces evaluation at
// monomorphization, so `Tuple::of([0; 10])` fails to compile.
struct ArityBound<const N: usize>;

impl<const N: usize> ArityBound<N> {
    const CHECK: () = assert!(N <= MAX_ARITY, "tuple arity is capped at 9");
}

/// An immutable, fixed-arity sequence of primitive values.
///
/// Arities range over `0..=9`. The element kind is one of the seven
/// canonical [`Element`] implementations; see the kind aliases
/// ([`ByteTuple`], [`IntTuple`], ...) for the familiar spellings.
///
/// ```
/// use tuplekit_tuple::IntTuple;
///
/// let t = IntTuple::of([3, 1, 2]);
/// assert_eq!(t.arity(), 3);
/// assert_eq!(t.median().unwrap(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
pub struct Tuple<T: Element> {
    // Invariant: len() == arity, always <= MAX_ARITY; never mutated after
    // construction.
    elements: SmallVec<[T; MAX_ARITY]>,
}

impl<T: Element> Tuple<T> {
    /// Constructs a tuple directly from positional values.
    ///
    /// The arity is fixed by the array length in the signature, so no
    /// runtime validation is needed; an array longer than 9 is rejected at
    /// compile time.
    ///
    /// ```
    /// use tuplekit_tuple::CharTuple;
    ///
    /// let t = CharTuple::of(['A', 'B', 'C']);
    /// assert_eq!(t.arity(), 3);
    /// ```
    pub fn of<const N: usize>(values: [T; N]) -> Self {
        let _ = ArityBound::<N>::CHECK;
        Tuple {
            elements: SmallVec::from_slice(&values),
        }
    }

    /// Constructs a tuple whose arity equals the slice length.
    ///
    /// An empty slice yields the arity-0 tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] when the slice holds more than 9
    /// elements.
    pub fn create(values: &[T]) -> Result<Self> {
        if values.len() > MAX_ARITY {
            return Err(Error::CapacityExceeded { len: values.len() });
        }

        Ok(Tuple {
            elements: SmallVec::from_slice(values),
        })
    }

    /// Number of elements held, in `0..=9`. Fixed at construction.
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// True iff the arity is 0.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at position `index`, or `None` past the arity.
    pub fn get(&self, index: usize) -> Option<T> {
        self.elements.get(index).copied()
    }

    /// Read-only view of the backing values.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    /// Smallest element under the kind's natural total order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTuple`] at arity 0.
    pub fn min(&self) -> Result<T> {
        self.elements
            .iter()
            .copied()
            .reduce(|best, e| if T::cmp_values(e, best).is_lt() { e } else { best })
            .ok_or(Error::EmptyTuple { operation: "min" })
    }

    /// Largest element under the kind's natural total order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTuple`] at arity 0.
    pub fn max(&self) -> Result<T> {
        self.elements
            .iter()
            .copied()
            .reduce(|best, e| if T::cmp_values(e, best).is_gt() { e } else { best })
            .ok_or(Error::EmptyTuple { operation: "max" })
    }

    /// Median element, computed over a sorted copy.
    ///
    /// For even arities this is the LOWER of the two middle elements, never
    /// their mean: `[1, 2, 3, 4]` has median `2`. This is deliberate and
    /// documented, not a statistical midpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTuple`] at arity 0.
    pub fn median(&self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyTuple { operation: "median" });
        }

        let mut sorted = self.elements.clone();
        sorted.sort_unstable_by(|a, b| T::cmp_values(*a, *b));
        Ok(sorted[(sorted.len() - 1) / 2])
    }

    /// Arithmetic sum, widened per the kind rules (`i8`/`i16` to `i32`,
    /// `char` to `u32`, `i32` to `i64`, floats to `f64`).
    ///
    /// Returns the additive identity at arity 0.
    pub fn sum(&self) -> T::Sum {
        self.elements
            .iter()
            .fold(T::SUM_IDENTITY, |acc, &e| T::widen_add(acc, e))
    }

    /// Sum divided by arity, as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTuple`] at arity 0.
    pub fn average(&self) -> Result<f64> {
        if self.elements.is_empty() {
            return Err(Error::EmptyTuple { operation: "average" });
        }

        Ok(T::sum_to_f64(self.sum()) / self.arity() as f64)
    }

    // ------------------------------------------------------------------
    // Transformations
    // ------------------------------------------------------------------

    /// A new tuple of the same arity with element order reversed.
    ///
    /// Always a freshly constructed instance, including at arities 0 and 1.
    pub fn reverse(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.reverse();
        Tuple { elements }
    }

    /// Linear scan for `value` under the kind's structural equality.
    ///
    /// Arity 0 always returns false. For float kinds this is bit-level
    /// equality, so `contains(NAN)` is true when a NaN is present.
    pub fn contains(&self, value: T) -> bool {
        self.elements.iter().any(|&e| T::eq_values(e, value))
    }

    /// Independent copy of the values as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Independent copy of the values in the inline representation.
    pub fn to_array(&self) -> SmallVec<[T; MAX_ARITY]> {
        self.elements.clone()
    }

    /// Lazy traversal over the values in positional order.
    ///
    /// Each call yields an independent iterator; exhausting one has no
    /// effect on the next.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.elements.iter().copied()
    }

    /// Invokes `f` once per element in positional order, synchronously.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        for &e in &self.elements {
            f(e);
        }
    }

    /// Fallible visit: stops at the first error and propagates it
    /// unmodified.
    pub fn try_for_each<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        for &e in &self.elements {
            f(e)?;
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Arity witnesses
    // ------------------------------------------------------------------

    /// Arity-2 view exposing the 2-ary combinators, or `None` at any other
    /// arity.
    pub fn as_pair(&self) -> Option<Pair<'_, T>> {
        if self.arity() == 2 {
            Some(Pair::new(self))
        } else {
            None
        }
    }

    /// Arity-3 view exposing the 3-ary combinators, or `None` at any other
    /// arity.
    pub fn as_triple(&self) -> Option<Triple<'_, T>> {
        if self.arity() == 3 {
            Some(Triple::new(self))
        } else {
            None
        }
    }
}

// Structural equality: same arity, structurally equal value at every
// position. A tuple of a different element kind is a different type, so
// cross-kind comparison cannot be expressed at all.
impl<T: Element> PartialEq for Tuple<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(&a, &b)| T::eq_values(a, b))
    }
}

impl<T: Element> Eq for Tuple<T> {}

// Position-order-sensitive hash; equal tuples always hash equal because
// hash_value is consistent with eq_values.
impl<T: Element> Hash for Tuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.elements.len());
        for &e in &self.elements {
            T::hash_value(e, state);
        }
    }
}

impl<T: Element> fmt::Display for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str("]")
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Tuple<T> {
    fn from(values: [T; N]) -> Self {
        Tuple::of(values)
    }
}

impl<T: Element> TryFrom<Vec<T>> for Tuple<T> {
    type Error = Error;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Tuple::create(&values)
    }
}

impl<T: Element> From<Tuple<T>> for Vec<T> {
    fn from(tuple: Tuple<T>) -> Self {
        tuple.elements.into_vec()
    }
}

impl<'a, T: Element> IntoIterator for &'a Tuple<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> IntoIterator for Tuple<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; MAX_ARITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
