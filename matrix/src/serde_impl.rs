use serde::Deserialize;

use crate::error::MatrixError;
use crate::generic_matrix::GenericMatrix;
use crate::traits::Element;

/// What a serialized `GenericMatrix` looks like before its shape is
/// validated.
#[derive(Deserialize)]
pub struct RawMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T: Element> TryFrom<RawMatrix<T>> for GenericMatrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        GenericMatrix::from_data(raw.nrows, raw.ncols, raw.data)
    }
}
