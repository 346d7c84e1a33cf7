//! Matrix helper operations
//!
//! Free functions over [`Matrix`]: shape checks, element-wise zips, and
//! sequential multiplication. Everything here runs single-threaded in one
//! pass; outputs are always freshly built matrices.

use tuplekit_core::{Element, Error, Numeric, Result};

use crate::matrix::Matrix;

/// True iff `a` and `b` have the same row and column counts.
pub fn is_same_shape<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols()
}

/// True iff `a`, `b`, and `c` all have the same shape.
pub fn is_same_shape3<T: Element>(a: &Matrix<T>, b: &Matrix<T>, c: &Matrix<T>) -> bool {
    is_same_shape(a, b) && is_same_shape(a, c)
}

/// True iff every matrix in `xs` has the same shape.
///
/// Empty and singleton slices are trivially same-shaped.
pub fn is_same_shape_all<T: Element>(xs: &[Matrix<T>]) -> bool {
    match xs.split_first() {
        Some((head, tail)) => tail.iter().all(|x| is_same_shape(head, x)),
        None => true,
    }
}

fn check_same_shape<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if is_same_shape(a, b) {
        Ok(())
    } else {
        Err(Error::ShapeMismatch {
            rows_a: a.rows(),
            cols_a: a.cols(),
            rows_b: b.rows(),
            cols_b: b.cols(),
        })
    }
}

/// Element-wise combination of two matrices into a matrix of another (or
/// the same) kind.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless both inputs have the same shape.
pub fn zip_map<T, U, V, F>(a: &Matrix<T>, b: &Matrix<U>, mut f: F) -> Result<Matrix<V>>
where
    T: Element,
    U: Element,
    V: Element,
    F: FnMut(T, U) -> V,
{
    // zip_map accepts inputs of two kinds; check_same_shape's single-kind
    // signature doesn't apply.
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(Error::ShapeMismatch {
            rows_a: a.rows(),
            cols_a: a.cols(),
            rows_b: b.rows(),
            cols_b: b.cols(),
        });
    }

    let data = a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect();
    Matrix::new(a.rows(), a.cols(), data)
}

/// Element-wise combination of two same-kind matrices.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless both inputs have the same shape.
pub fn zip<T, F>(a: &Matrix<T>, b: &Matrix<T>, mut f: F) -> Result<Matrix<T>>
where
    T: Element,
    F: FnMut(T, T) -> T,
{
    check_same_shape(a, b)?;

    let data = a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect();
    Matrix::new(a.rows(), a.cols(), data)
}

/// Element-wise combination of three same-kind matrices.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless all inputs have the same shape.
pub fn zip3<T, F>(a: &Matrix<T>, b: &Matrix<T>, c: &Matrix<T>, mut f: F) -> Result<Matrix<T>>
where
    T: Element,
    F: FnMut(T, T, T) -> T,
{
    check_same_shape(a, b)?;
    check_same_shape(a, c)?;

    let data = a
        .iter()
        .zip(b.iter())
        .zip(c.iter())
        .map(|((x, y), z)| f(x, y, z))
        .collect();
    Matrix::new(a.rows(), a.cols(), data)
}

/// Folds two or more matrices element-wise with a binary combiner.
///
/// A singleton slice yields a copy of its only matrix.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice and
/// [`Error::ShapeMismatch`] when shapes differ.
pub fn zip_all<T, F>(xs: &[Matrix<T>], mut f: F) -> Result<Matrix<T>>
where
    T: Element,
    F: FnMut(T, T) -> T,
{
    let (head, tail) = xs
        .split_first()
        .ok_or(Error::EmptyInput { what: "matrices" })?;

    let mut acc = head.clone();
    for x in tail {
        acc = zip(&acc, x, &mut f)?;
    }

    Ok(acc)
}

/// Sequential matrix product `a * b`.
///
/// Integer kinds accumulate with wrapping arithmetic, matching fixed-width
/// overflow behavior; float kinds use IEEE operations. The loop runs in
/// i/k/j order over the row-major storage.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] unless `a.cols() == b.rows()`.
pub fn multiply<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_multipliable(a, b)?;

    let (rows_a, cols_a) = a.shape();
    let cols_b = b.cols();
    let lhs = a.as_slice();
    let rhs = b.as_slice();

    let mut data = vec![T::ZERO; rows_a * cols_b];
    for i in 0..rows_a {
        for k in 0..cols_a {
            let aik = lhs[i * cols_a + k];
            for j in 0..cols_b {
                let cell = &mut data[i * cols_b + j];
                *cell = T::add(*cell, T::mul(aik, rhs[k * cols_b + j]));
            }
        }
    }

    Matrix::new(rows_a, cols_b, data)
}

/// Shape-checked index-triple traversal for callers that accumulate the
/// product into their own storage.
///
/// Invokes `cmd(i, j, k)` for every product term, in the same i/k/j order
/// as [`multiply`].
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] unless `a.cols() == b.rows()`.
pub fn multiply_with<T, F>(a: &Matrix<T>, b: &Matrix<T>, mut cmd: F) -> Result<()>
where
    T: Element,
    F: FnMut(usize, usize, usize),
{
    check_multipliable(a, b)?;

    for i in 0..a.rows() {
        for k in 0..a.cols() {
            for j in 0..b.cols() {
                cmd(i, j, k);
            }
        }
    }

    Ok(())
}

fn check_multipliable<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.cols() == b.rows() {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            rows_a: a.rows(),
            cols_a: a.cols(),
            rows_b: b.rows(),
            cols_b: b.cols(),
        })
    }
}
