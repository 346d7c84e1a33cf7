//! Element kinds for tuples and matrices
//!
//! This module defines:
//! - Element: the contract every primitive kind satisfies
//! - Numeric: the subtrait for kinds that support same-kind arithmetic
//!
//! ## Canonical Element Kinds (Frozen)
//!
//! Exactly seven kinds implement `Element`:
//! `i8` (byte), `char`, `i16` (short), `i32` (int), `i64` (long),
//! `f32` (float), `f64` (double).
//!
//! ### Kind Rules (ELM-1 to ELM-4)
//!
//! - **ELM-1**: Sums are widened per kind: i8/i16 -> i32, char -> u32,
//!   i32 -> i64, i64 -> i64, f32/f64 -> f64.
//! - **ELM-2**: Integer kinds and `char` order by `Ord`; float kinds order
//!   by IEEE-754 total order (`total_cmp`).
//! - **ELM-3**: Float structural equality is bit-level under the total
//!   order: `NaN == NaN`, `-0.0 != 0.0`. No epsilon comparison anywhere.
//! - **ELM-4**: Equal values always hash equal; floats hash their IEEE bits.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hasher;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for char {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Contract satisfied by every primitive kind a tuple or matrix can hold.
///
/// The trait is sealed: the seven canonical kinds are the only
/// implementations, so downstream code can rely on the kind rules above.
pub trait Element: Copy + fmt::Debug + fmt::Display + sealed::Sealed + 'static {
    /// Widened accumulator type for `sum` (ELM-1).
    type Sum: Copy + fmt::Debug + fmt::Display + PartialEq;

    /// Additive identity returned by `sum` on an empty tuple.
    const SUM_IDENTITY: Self::Sum;

    /// Human-readable kind name ("byte", "char", "int", ...).
    const KIND: &'static str;

    /// Accumulate one element into the widened sum.
    fn widen_add(acc: Self::Sum, value: Self) -> Self::Sum;

    /// Convert a widened sum to `f64` for `average`.
    fn sum_to_f64(sum: Self::Sum) -> f64;

    /// Natural total order for this kind (ELM-2).
    fn cmp_values(a: Self, b: Self) -> Ordering;

    /// Structural equality for this kind (ELM-3).
    fn eq_values(a: Self, b: Self) -> bool;

    /// Feed one value into a hasher, consistent with `eq_values` (ELM-4).
    fn hash_value<H: Hasher>(value: Self, state: &mut H);
}

/// Subtrait for kinds with same-kind arithmetic, used by matrix multiply.
///
/// Integer kinds use wrapping arithmetic (fixed-width overflow wraps);
/// float kinds use plain IEEE operations. `char` is not Numeric.
pub trait Numeric: Element {
    /// Additive identity in the element's own width.
    const ZERO: Self;

    /// Same-kind addition.
    fn add(self, rhs: Self) -> Self;

    /// Same-kind multiplication.
    fn mul(self, rhs: Self) -> Self;
}

macro_rules! impl_integer_element {
    ($ty:ty, $kind:literal, $sum:ty, $write:ident) => {
        impl Element for $ty {
            type Sum = $sum;

            const SUM_IDENTITY: $sum = 0;
            const KIND: &'static str = $kind;

            fn widen_add(acc: $sum, value: Self) -> $sum {
                acc + value as $sum
            }

            fn sum_to_f64(sum: $sum) -> f64 {
                sum as f64
            }

            fn cmp_values(a: Self, b: Self) -> Ordering {
                a.cmp(&b)
            }

            fn eq_values(a: Self, b: Self) -> bool {
                a == b
            }

            fn hash_value<H: Hasher>(value: Self, state: &mut H) {
                state.$write(value);
            }
        }
    };
}

impl_integer_element!(i8, "byte", i32, write_i8);
impl_integer_element!(i16, "short", i32, write_i16);
impl_integer_element!(i32, "int", i64, write_i32);
impl_integer_element!(i64, "long", i64, write_i64);

impl Element for char {
    type Sum = u32;

    const SUM_IDENTITY: u32 = 0;
    const KIND: &'static str = "char";

    fn widen_add(acc: u32, value: Self) -> u32 {
        acc + value as u32
    }

    fn sum_to_f64(sum: u32) -> f64 {
        sum as f64
    }

    fn cmp_values(a: Self, b: Self) -> Ordering {
        a.cmp(&b)
    }

    fn eq_values(a: Self, b: Self) -> bool {
        a == b
    }

    fn hash_value<H: Hasher>(value: Self, state: &mut H) {
        state.write_u32(value as u32);
    }
}

macro_rules! impl_float_element {
    ($ty:ty, $kind:literal, $write:ident) => {
        impl Element for $ty {
            type Sum = f64;

            const SUM_IDENTITY: f64 = 0.0;
            const KIND: &'static str = $kind;

            fn widen_add(acc: f64, value: Self) -> f64 {
                acc + value as f64
            }

            fn sum_to_f64(sum: f64) -> f64 {
                sum
            }

            // IEEE-754 total order: NaN sorts above +inf, -0.0 below 0.0
            fn cmp_values(a: Self, b: Self) -> Ordering {
                a.total_cmp(&b)
            }

            fn eq_values(a: Self, b: Self) -> bool {
                a.total_cmp(&b) == Ordering::Equal
            }

            fn hash_value<H: Hasher>(value: Self, state: &mut H) {
                state.$write(value.to_bits());
            }
        }
    };
}

impl_float_element!(f32, "float", write_u32);
impl_float_element!(f64, "double", write_u64);

macro_rules! impl_wrapping_numeric {
    ($ty:ty) => {
        impl Numeric for $ty {
            const ZERO: Self = 0;

            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }
    };
}

impl_wrapping_numeric!(i8);
impl_wrapping_numeric!(i16);
impl_wrapping_numeric!(i32);
impl_wrapping_numeric!(i64);

macro_rules! impl_float_numeric {
    ($ty:ty) => {
        impl Numeric for $ty {
            const ZERO: Self = 0.0;

            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }
    };
}

impl_float_numeric!(f32);
impl_float_numeric!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Element>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        T::hash_value(value, &mut hasher);
        hasher.finish()
    }

    // ====================================================================
    // ELM-1: sum widening
    // ====================================================================

    #[test]
    fn test_byte_sum_widens_past_i8_range() {
        let mut acc = i8::SUM_IDENTITY;
        for _ in 0..4 {
            acc = i8::widen_add(acc, 100);
        }
        assert_eq!(acc, 400);
    }

    #[test]
    fn test_char_sum_is_code_point_total() {
        let mut acc = char::SUM_IDENTITY;
        for c in ['A', 'B', 'C'] {
            acc = char::widen_add(acc, c);
        }
        assert_eq!(acc, 198);
    }

    #[test]
    fn test_int_sum_widens_to_i64() {
        let acc = i32::widen_add(i32::widen_add(0, i32::MAX), i32::MAX);
        assert_eq!(acc, 2 * i32::MAX as i64);
    }

    #[test]
    fn test_sum_identity_converts_to_zero() {
        assert_eq!(i8::sum_to_f64(i8::SUM_IDENTITY), 0.0);
        assert_eq!(f64::sum_to_f64(f64::SUM_IDENTITY), 0.0);
    }

    // ====================================================================
    // ELM-2: ordering
    // ====================================================================

    #[test]
    fn test_integer_ordering_is_natural() {
        assert_eq!(i32::cmp_values(1, 2), Ordering::Less);
        assert_eq!(i32::cmp_values(2, 2), Ordering::Equal);
        assert_eq!(i32::cmp_values(3, 2), Ordering::Greater);
    }

    #[test]
    fn test_char_ordering_follows_code_points() {
        assert_eq!(char::cmp_values('a', 'b'), Ordering::Less);
        assert_eq!(char::cmp_values('Z', 'A'), Ordering::Greater);
    }

    #[test]
    fn test_float_total_order_handles_nan() {
        assert_eq!(f64::cmp_values(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::cmp_values(-0.0, 0.0), Ordering::Less);
    }

    // ====================================================================
    // ELM-3 / ELM-4: equality and hashing
    // ====================================================================

    #[test]
    fn test_float_nan_equals_itself() {
        assert!(f32::eq_values(f32::NAN, f32::NAN));
        assert!(f64::eq_values(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_float_signed_zeros_are_distinct() {
        assert!(!f64::eq_values(-0.0, 0.0));
    }

    #[test]
    fn test_equal_floats_hash_equal() {
        assert_eq!(hash_of(1.5f64), hash_of(1.5f64));
        assert_eq!(hash_of(f64::NAN), hash_of(f64::NAN));
        assert_ne!(hash_of(-0.0f64), hash_of(0.0f64));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(i8::KIND, "byte");
        assert_eq!(char::KIND, "char");
        assert_eq!(i16::KIND, "short");
        assert_eq!(i32::KIND, "int");
        assert_eq!(i64::KIND, "long");
        assert_eq!(f32::KIND, "float");
        assert_eq!(f64::KIND, "double");
    }

    // ====================================================================
    // Numeric arithmetic
    // ====================================================================

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(Numeric::add(i8::MAX, 1i8), i8::MIN);
        assert_eq!(Numeric::mul(100i8, 2i8), -56);
    }

    #[test]
    fn test_float_arithmetic_is_ieee() {
        assert_eq!(Numeric::add(1.5f64, 2.25f64), 3.75);
        assert_eq!(Numeric::mul(0.5f32, 8.0f32), 4.0);
    }

    // ====================================================================
    // Comparator laws (proptest)
    // ====================================================================

    mod comparator_laws {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn float_eq_is_reflexive(x: f64) {
                prop_assert!(f64::eq_values(x, x));
            }

            #[test]
            fn float_ordering_is_antisymmetric(a: f64, b: f64) {
                prop_assert_eq!(f64::cmp_values(a, b), f64::cmp_values(b, a).reverse());
            }

            #[test]
            fn equal_ints_hash_equal(x: i64) {
                prop_assert_eq!(hash_of(x), hash_of(x));
            }

            #[test]
            fn int_eq_matches_cmp(a: i32, b: i32) {
                prop_assert_eq!(i32::eq_values(a, b), i32::cmp_values(a, b).is_eq());
            }
        }
    }
}
