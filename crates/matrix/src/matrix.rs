//! Row-major dense matrix
//!
//! Storage is a single `Vec<T>` of length `rows * cols`, row-major. Like
//! the tuple family, a matrix never mutates after construction: the zip and
//! multiply helpers in [`crate::ops`] always build fresh matrices.

use std::fmt;

use serde::{Deserialize, Serialize};
use tuplekit_core::{Element, Error, Numeric, Result};

// Serde boundary: shape + data, validated on the way in through
// `Matrix::new`.
#[derive(Serialize, Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// A dense, row-major 2D matrix over one primitive kind.
///
/// ```
/// use tuplekit_matrix::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])?;
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), Some(6));
/// # Ok::<(), tuplekit_core::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    into = "RawMatrix<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    // Invariant: data.len() == rows * cols, row-major; never mutated after
    // construction.
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Constructs a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] unless `data.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }

        Ok(Matrix { rows, cols, data })
    }

    /// Constructs a matrix from a slice of equally sized rows.
    ///
    /// An empty slice yields the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] when any row's length differs from
    /// row 0's.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            rows: rows.len(),
            cols: expected,
            data,
        })
    }

    /// A `rows` x `cols` matrix with every element set to `value`.
    pub fn repeat(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total element count (`rows * cols`).
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True iff the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(i, j)`, or `None` outside the shape.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice, or `None` past the last row.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Read-only view of the row-major backing data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Lazy traversal over all elements in row-major order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.data.iter().copied()
    }
}

impl<T: Numeric> Matrix<T> {
    /// A `rows` x `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::repeat(rows, cols, T::ZERO)
    }
}

// Structural equality: same shape, structurally equal element at every
// position (float kinds: bit-level, NaN equals itself).
impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| T::eq_values(a, b))
    }
}

impl<T: Element> Eq for Matrix<T> {}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (j, e) in self.data[i * self.cols..(i + 1) * self.cols].iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", e)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<T: Element> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::new(raw.rows, raw.cols, raw.data)
    }
}

impl<T: Element> From<Matrix<T>> for RawMatrix<T> {
    fn from(m: Matrix<T>) -> Self {
        RawMatrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // Construction
    // ====================================================================

    #[test]
    fn test_new_validates_data_length() {
        let m = Matrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.shape(), (2, 3));

        let err = Matrix::new(2, 3, vec![1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(
            err,
            Error::DataLength {
                rows: 2,
                cols: 3,
                len: 5
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_empty_is_zero_by_zero() {
        let m: Matrix<i32> = Matrix::from_rows(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_zeros_and_repeat() {
        let z: Matrix<i32> = Matrix::zeros(2, 2);
        assert_eq!(z, Matrix::new(2, 2, vec![0, 0, 0, 0]).unwrap());

        let r = Matrix::repeat(1, 3, 7i64);
        assert_eq!(r.as_slice(), &[7, 7, 7]);
    }

    // ====================================================================
    // Accessors
    // ====================================================================

    #[test]
    fn test_get_is_row_major() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.get(0, 0), Some(1));
        assert_eq!(m.get(1, 2), Some(6));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_row_slices() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.row(0), Some([1, 2].as_slice()));
        assert_eq!(m.row(1), Some([3, 4].as_slice()));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn test_iter_row_major_order() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(m.count(), 4);
    }

    // ====================================================================
    // Structural protocol
    // ====================================================================

    #[test]
    fn test_equality_same_shape_same_values() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a, b);

        // Same data, different shape
        let c = Matrix::new(1, 4, vec![1, 2, 3, 4]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_float_equality_includes_nan() {
        let a = Matrix::new(1, 2, vec![f64::NAN, 1.0]).unwrap();
        let b = Matrix::new(1, 2, vec![f64::NAN, 1.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_renders_rows() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");

        let empty: Matrix<i32> = Matrix::from_rows(&[]).unwrap();
        assert_eq!(empty.to_string(), "");
    }

    // ====================================================================
    // Serde boundary
    // ====================================================================

    #[test]
    fn test_serde_round_trip() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_bad_shape() {
        let result: std::result::Result<Matrix<i32>, _> =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1,2,3]}"#);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("does not match shape"));
    }
}
