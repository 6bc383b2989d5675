//! Operator overloads.
//!
//! These behave like the named methods of [`GenericMatrix`], but panic
//! instead of returning an error.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatrixError;
use crate::generic_matrix::GenericMatrix;
use crate::traits::Element;

impl<T: Element> Index<(usize, usize)> for GenericMatrix<T> {
    type Output = T;

    /// # Panics
    /// Panics if the row or the column are out of range
    fn index(&self, (nrow, ncol): (usize, usize)) -> &T {
        self.at(nrow, ncol).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Element> IndexMut<(usize, usize)> for GenericMatrix<T> {
    /// # Panics
    /// Panics if the row or the column are out of range
    fn index_mut(&mut self, (nrow, ncol): (usize, usize)) -> &mut T {
        self.at_mut(nrow, ncol).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Element> Add<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    /// # Panics
    /// Panics if the matrices are of different sizes
    fn add(self, other: &GenericMatrix<T>) -> Self::Output {
        GenericMatrix::add(self, other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Element> Add for GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn add(self, other: GenericMatrix<T>) -> Self::Output {
        &self + &other
    }
}

impl<T: Element> AddAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    /// # Panics
    /// Panics if the matrices are of different sizes
    fn add_assign(&mut self, other: &GenericMatrix<T>) {
        if self.size() != other.size() {
            let err = MatrixError::IncompatibleDimensions {
                left: self.size(),
                right: other.size(),
            };
            panic!("{}", err);
        }
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a = *a + *b);
    }
}

impl<T: Element> Sub<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    /// # Panics
    /// Panics if the matrices are of different sizes
    fn sub(self, other: &GenericMatrix<T>) -> Self::Output {
        GenericMatrix::subtract(self, other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Element> Sub for GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn sub(self, other: GenericMatrix<T>) -> Self::Output {
        &self - &other
    }
}

impl<T: Element> SubAssign<&GenericMatrix<T>> for GenericMatrix<T> {
    /// # Panics
    /// Panics if the matrices are of different sizes
    fn sub_assign(&mut self, other: &GenericMatrix<T>) {
        if self.size() != other.size() {
            let err = MatrixError::IncompatibleDimensions {
                left: self.size(),
                right: other.size(),
            };
            panic!("{}", err);
        }
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a = *a - *b);
    }
}

impl<T: Element> Neg for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Element> Neg for GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn neg(mut self) -> Self::Output {
        self.data.iter_mut().for_each(|a| *a = -*a);
        self
    }
}

impl<T: Element> Mul<T> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn mul(self, s: T) -> Self::Output {
        self.scale(s)
    }
}

impl<T: Element> Mul<T> for GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn mul(mut self, s: T) -> Self::Output {
        self *= s;
        self
    }
}

impl<T: Element> MulAssign<T> for GenericMatrix<T> {
    fn mul_assign(&mut self, s: T) {
        self.data.iter_mut().for_each(|a| *a = *a * s);
    }
}

impl<T: Element> Mul<&GenericMatrix<T>> for &GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    /// # Panics
    /// Panics if the number of columns of `self` does not match the
    /// number of rows of `other`
    fn mul(self, other: &GenericMatrix<T>) -> Self::Output {
        self.multiply(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Element> Mul for GenericMatrix<T> {
    type Output = GenericMatrix<T>;

    fn mul(self, other: GenericMatrix<T>) -> Self::Output {
        &self * &other
    }
}
