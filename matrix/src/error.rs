use thiserror::Error;

/// The ways in which a matrix operation can be rejected.
///
/// Every variant is a violated precondition, detected before anything
/// is written. The operation that returns it leaves its inputs untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("invalid matrix dimensions {nrows}x{ncols} [rows < 1 OR columns < 1]")]
    InvalidSize {
        /// Requested number of rows
        nrows: usize,
        /// Requested number of columns
        ncols: usize,
    },

    /// A row index past the last row.
    #[error("row index {row} out of range [0, {}]", .nrows.saturating_sub(1))]
    RowOutOfRange {
        /// The offending index
        row: usize,
        /// Number of rows in the matrix
        nrows: usize,
    },

    /// A column index past the last column.
    #[error("column index {col} out of range [0, {}]", .ncols.saturating_sub(1))]
    ColumnOutOfRange {
        /// The offending index
        col: usize,
        /// Number of columns in the matrix
        ncols: usize,
    },

    /// The shapes of the operands (or of a flat list of values) do not fit
    /// the operation.
    #[error("incompatible matrix dimensions: {left:?} and {right:?}")]
    IncompatibleDimensions {
        /// Shape (rows, columns) of the left operand
        left: (usize, usize),
        /// Shape (rows, columns) of the right operand. For flat lists this
        /// is `(1, len)`.
        right: (usize, usize),
    },

    /// The operation is only defined for square matrices.
    #[error("matrix must be square [rows = columns], found {nrows}x{ncols}")]
    NotSquare {
        /// Number of rows
        nrows: usize,
        /// Number of columns
        ncols: usize,
    },
}

/// Returns early with `$err` when `$cond` does not hold.
///
/// With the `unchecked` feature the condition is not evaluated at all.
macro_rules! check {
    ( $cond : expr, $err : expr ) => {{
        #[cfg(not(feature = "unchecked"))]
        {
            if !($cond) {
                let err: $crate::error::MatrixError = $err;
                tracing::debug!(%err, "rejected matrix operation");
                return Err(err);
            }
        }
    }};
}

pub(crate) use check;
