use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{check, MatrixError};
use crate::serde_impl::RawMatrix;
use crate::traits::Element;

/// The main Structure in this library: a dense, row-major matrix.
///
/// A `GenericMatrix` always has at least one row and one column, and its
/// shape never changes after construction. Operations that derive a matrix
/// from another one (e.g., `transpose()`, `minor()`, `multiply()`) return a
/// new, independently owned matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    bound(deserialize = "T: Element + Deserialize<'de>")
)]
pub struct GenericMatrix<T> {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,

    // Contains the data ordered by row,
    // going left to right, and up and down.
    pub(crate) data: Vec<T>,
}

impl<T: Element> GenericMatrix<T> {
    /// Creates a `GenericMatrix` of `nrows` and `ncols` full of values `fill`
    ///
    /// ```
    /// use dense_matrix::GenericMatrix;
    ///
    /// let m = GenericMatrix::new(2, 3, 7).unwrap();
    /// assert_eq!(m.size(), (2, 3));
    /// assert!(GenericMatrix::new(0, 3, 7).is_err());
    /// ```
    pub fn new(nrows: usize, ncols: usize, fill: T) -> Result<Self, MatrixError> {
        let len = Self::data_len(nrows, ncols)?;
        Ok(Self {
            nrows,
            ncols,
            data: vec![fill; len],
        })
    }

    /// Creates a `GenericMatrix` full of `T::default()` (i.e., zeroes for
    /// the numeric types)
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        Self::new(nrows, ncols, T::default())
    }

    /// Creates a `GenericMatrix` from a vector containing the elements of
    /// the matrix, in row-major order
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let len = Self::data_len(nrows, ncols)?;
        check!(
            data.len() == len,
            MatrixError::IncompatibleDimensions {
                left: (nrows, ncols),
                right: (1, data.len()),
            }
        );
        Ok(Self { nrows, ncols, data })
    }

    /// Creates a `GenericMatrix` from its rows.
    ///
    /// ```
    /// use dense_matrix::GenericMatrix;
    ///
    /// let m = GenericMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 3);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let len = Self::data_len(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            check!(
                row.len() == ncols,
                MatrixError::IncompatibleDimensions {
                    left: (nrows, ncols),
                    right: (1, row.len()),
                }
            );
            data.extend(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Validates the dimensions and returns the number of elements
    /// they hold.
    ///
    /// The overflow check is kept with the `unchecked` feature, since a
    /// wrapped product would leave `data` shorter than the shape.
    fn data_len(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
        check!(
            nrows >= 1 && ncols >= 1,
            MatrixError::InvalidSize { nrows, ncols }
        );
        nrows
            .checked_mul(ncols)
            .ok_or(MatrixError::InvalidSize { nrows, ncols })
    }

    /// Allocates without validating the size. Callers guarantee that
    /// both dimensions are positive.
    pub(crate) fn filled(nrows: usize, ncols: usize, fill: T) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![fill; nrows * ncols],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.ncols
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Checks whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Gets the index of an element within the `data` array of the Matrix
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Validates a position and returns its index within `data`.
    /// Rows are checked before columns.
    pub(crate) fn checked_index(&self, nrow: usize, ncol: usize) -> Result<usize, MatrixError> {
        check!(
            nrow < self.nrows,
            MatrixError::RowOutOfRange {
                row: nrow,
                nrows: self.nrows,
            }
        );
        check!(
            ncol < self.ncols,
            MatrixError::ColumnOutOfRange {
                col: ncol,
                ncols: self.ncols,
            }
        );
        Ok(self.index(nrow, ncol))
    }

    /// Borrows the element in position `nrow,ncol`
    pub fn at(&self, nrow: usize, ncol: usize) -> Result<&T, MatrixError> {
        let i = self.checked_index(nrow, ncol)?;
        Ok(&self.data[i])
    }

    /// Mutably borrows the element in position `nrow,ncol`, so it can
    /// be read and written in place.
    ///
    /// ```
    /// use dense_matrix::GenericMatrix;
    ///
    /// let mut m = GenericMatrix::<i32>::zeros(2, 2).unwrap();
    /// *m.at_mut(0, 1).unwrap() += 5;
    /// assert_eq!(m.get(0, 1).unwrap(), 5);
    /// ```
    pub fn at_mut(&mut self, nrow: usize, ncol: usize) -> Result<&mut T, MatrixError> {
        let i = self.checked_index(nrow, ncol)?;
        Ok(&mut self.data[i])
    }

    /// Gets (a copy of) an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<T, MatrixError> {
        self.at(nrow, ncol).copied()
    }

    /// Sets an element into the matrix, returning the value it replaced
    pub fn set(&mut self, nrow: usize, ncol: usize, v: T) -> Result<T, MatrixError> {
        let slot = self.at_mut(nrow, ncol)?;
        Ok(std::mem::replace(slot, v))
    }

    /// Replaces the whole content of the matrix with `values`, which are
    /// read in row-major order.
    ///
    /// The matrix is left untouched if `values` does not have exactly
    /// `rows * columns` elements.
    pub fn assign(&mut self, values: &[T]) -> Result<&mut Self, MatrixError> {
        check!(
            values.len() == self.data.len(),
            MatrixError::IncompatibleDimensions {
                left: self.size(),
                right: (1, values.len()),
            }
        );
        self.data.copy_from_slice(values);
        Ok(self)
    }

    /// All the elements, in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrows a whole row
    pub fn row_slice(&self, nrow: usize) -> Result<&[T], MatrixError> {
        let start = self.checked_index(nrow, 0)?;
        Ok(&self.data[start..start + self.ncols])
    }

    /// Copies row `nrow` into a new `1 x ncols` matrix
    pub fn row_vector(&self, nrow: usize) -> Result<Self, MatrixError> {
        let data = self.row_slice(nrow)?.to_vec();
        Ok(Self {
            nrows: 1,
            ncols: self.ncols,
            data,
        })
    }

    /// Copies column `ncol` into a new `nrows x 1` matrix
    pub fn column_vector(&self, ncol: usize) -> Result<Self, MatrixError> {
        check!(
            ncol < self.ncols,
            MatrixError::ColumnOutOfRange {
                col: ncol,
                ncols: self.ncols,
            }
        );
        let data = self
            .data
            .iter()
            .skip(ncol)
            .step_by(self.ncols)
            .copied()
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: 1,
            data,
        })
    }

    /// Visits every element in row-major order, calling `visitor(row, col, element)`
    /// with a mutable reference to it. Returns `self` so calls can be chained.
    ///
    /// ```
    /// use dense_matrix::GenericMatrix;
    ///
    /// let mut m = GenericMatrix::zeros(2, 2).unwrap();
    /// m.transform(|r, c, v| *v = (10 * r + c) as i32);
    /// assert_eq!(m.as_slice(), &[0, 1, 10, 11]);
    /// ```
    pub fn transform<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(usize, usize, &mut T),
    {
        for (r, row) in self.data.chunks_exact_mut(self.ncols).enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                visitor(r, c, v);
            }
        }
        self
    }

    /* ARITHMETIC OPERATION */

    fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        check!(
            self.size() == other.size(),
            MatrixError::IncompatibleDimensions {
                left: self.size(),
                right: other.size(),
            }
        );
        Ok(())
    }

    fn zip_map<F: Fn(T, T) -> T>(&self, other: &Self, f: F) -> Self {
        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| f(*x, *y))
            .collect();
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data,
        }
    }

    fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|x| f(*x)).collect(),
        }
    }

    /// Adds `self` and `other`, element by element
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(self.zip_map(other, |x, y| x + y))
    }

    /// Subtracts `other` from `self`, element by element
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(self.zip_map(other, |x, y| x - y))
    }

    /// Negates every element
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    /// Multiplies every element by `s`
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Multiplies `self` by `other` (i.e., $`A \times B`$).
    ///
    /// Each element of the result is accumulated as
    /// `acc = acc + a(row, k) * b(k, col)` with increasing `k`, so the order of
    /// the operations is well defined even for non-commutative elements.
    #[instrument(level = "trace", skip_all, fields(left = ?self.size(), right = ?other.size()))]
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        check!(
            self.ncols == other.nrows,
            MatrixError::IncompatibleDimensions {
                left: self.size(),
                right: other.size(),
            }
        );

        let mut ret = Self::filled(self.nrows, other.ncols, T::default());
        let rows = self.data.chunks_exact(self.ncols);
        for (row_data, into_data) in rows.zip(ret.data.chunks_exact_mut(other.ncols)) {
            for (c, item) in into_data.iter_mut().enumerate() {
                for (k, a) in row_data.iter().enumerate() {
                    let b = other.data[other.index(k, c)];
                    *item = *item + *a * b;
                }
            }
        }
        Ok(ret)
    }

    /// Returns the transpose of the matrix
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.ncols {
            for r in 0..self.nrows {
                data.push(self.data[self.index(r, c)]);
            }
        }
        Self {
            nrows: self.ncols,
            ncols: self.nrows,
            data,
        }
    }

    /// Returns a copy of the matrix without row `at_row` and column `at_col`.
    ///
    /// Fails if either index is out of range, or if the matrix has a single
    /// row or column (the minor would be empty).
    pub fn minor(&self, at_row: usize, at_col: usize) -> Result<Self, MatrixError> {
        self.checked_index(at_row, at_col)?;
        check!(
            self.nrows >= 2 && self.ncols >= 2,
            MatrixError::InvalidSize {
                nrows: self.nrows - 1,
                ncols: self.ncols - 1,
            }
        );
        Ok(self.minor_unchecked(at_row, at_col))
    }

    fn minor_unchecked(&self, at_row: usize, at_col: usize) -> Self {
        let data = self
            .data
            .chunks_exact(self.ncols)
            .enumerate()
            .filter(|(r, _)| *r != at_row)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(c, _)| *c != at_col)
                    .map(|(_, v)| *v)
            })
            .collect();
        Self {
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            data,
        }
    }

    /// Calculates the determinant of a square matrix by recursive
    /// [cofactor expansion](https://en.wikipedia.org/wiki/Laplace_expansion)
    /// along the first column.
    ///
    /// This takes $`O(n!)`$ operations, so it is only meant for small matrices.
    ///
    /// ```
    /// use dense_matrix::GenericMatrix;
    ///
    /// let m = GenericMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -2);
    /// ```
    #[instrument(level = "trace", skip_all, fields(n = self.nrows))]
    pub fn determinant(&self) -> Result<T, MatrixError> {
        check!(
            self.is_square(),
            MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            }
        );
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> T {
        match self.nrows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[2] * self.data[1],
            n => {
                let mut ret = T::default();
                for row in 0..n {
                    let sub = self.minor_unchecked(row, 0);
                    let term = self.data[self.index(row, 0)] * sub.cofactor_expansion();
                    ret = if row % 2 == 0 { ret + term } else { ret - term };
                }
                ret
            }
        }
    }

    /// The cofactor of position `nrow,ncol`; i.e., the determinant of
    /// `minor(nrow, ncol)` with sign $`(-1)^{nrow+ncol}`$
    pub fn cofactor(&self, nrow: usize, ncol: usize) -> Result<T, MatrixError> {
        check!(
            self.is_square(),
            MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            }
        );
        let det = self.minor(nrow, ncol)?.cofactor_expansion();
        if (nrow + ncol) % 2 == 0 {
            Ok(det)
        } else {
            Ok(-det)
        }
    }
}
