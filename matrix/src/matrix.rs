use crate::error::MatrixError;
use crate::generic_matrix::GenericMatrix;
use crate::Float;

/// A shorthand for `GenericMatrix<Float>`; i.e., a normal
/// matrix. Note that `Float` is defined as `f32` if the feature `float`
/// is utilized; otherwise, it defaults to `f64`.
pub type Matrix = GenericMatrix<Float>;

impl Matrix {
    /// Creates an Identity matrix of size NxN
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        let mut ret = Self::zeros(n, n)?;
        ret.transform(|r, c, v| {
            if r == c {
                *v = 1.
            }
        });
        Ok(ret)
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    pub fn diag(data: &[Float]) -> Result<Self, MatrixError> {
        let mut ret = Self::zeros(data.len(), data.len())?;
        ret.transform(|r, c, v| {
            if r == c {
                *v = data[r]
            }
        });
        Ok(ret)
    }

    /// Checks whether two matrices have the same size and all their
    /// elements differ by less than `tolerance`
    pub fn approx_eq(&self, other: &Matrix, tolerance: Float) -> bool {
        self.size() == other.size()
            && std::iter::zip(self.data.iter(), other.data.iter())
                .all(|(a, b)| (a - b).abs() < tolerance)
    }
}
