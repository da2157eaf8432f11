pub(crate) mod cholesky;
pub(crate) mod gauss_jordan;
pub(crate) mod lu;

pub use cholesky::{cholesky, CholeskyDecomposition};
pub use gauss_jordan::{gauss_jordan_in_place, invert};
pub use lu::{lu_in_place, lu_solve, LuDecomposition};

use crate::traits::{MatrixMut, Scalar};

/// Row operation `row[dst] -= ratio * row[src]` over columns `col_start..ncols`.
///
/// Requires `dst != src`.
#[inline]
pub(crate) fn sub_scaled_row<T: Scalar>(
    m: &mut impl MatrixMut<T>,
    dst: usize,
    src: usize,
    ratio: T,
    col_start: usize,
) {
    debug_assert_ne!(dst, src);
    for k in col_start..m.ncols() {
        let pivot_k = *m.get(src, k);
        let x = m.get_mut(dst, k);
        *x = *x - ratio * pivot_k;
    }
}

/// Errors from matrix construction, arithmetic, and the factorizations.
///
/// Every fallible operation in the crate returns this type. The only
/// conditions that do not abort the call are the degenerate pivots met by
/// [`cholesky`], which are reported through `log` instead.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::LinalgError;
///
/// let a = Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]);
/// assert_eq!(a.inverse().unwrap_err(), LinalgError::SingularOrZeroPivot { pivot: 0 });
///
/// let rect = Matrix::new([[1.0_f64, 2.0, 3.0]]);
/// assert_eq!(rect.lu().unwrap_err(), LinalgError::NonSquareMatrix { nrows: 1, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// The operation requires a square matrix.
    #[error("matrix is not square: {nrows}x{ncols}")]
    NonSquareMatrix { nrows: usize, ncols: usize },

    /// An exact zero was met on the diagonal during elimination.
    ///
    /// No row exchange is attempted to get around it.
    #[error("zero pivot at diagonal position {pivot}")]
    SingularOrZeroPivot { pivot: usize },

    /// Operand shapes are incompatible. Shapes are `(rows, cols)`.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Negative radicand on the diagonal of a Cholesky factorization.
    #[error("matrix is not positive definite: radicand {radicand} at pivot {pivot}")]
    NonPositiveDefiniteInput { pivot: usize, radicand: f64 },

    /// A matrix must have at least one row and one column.
    #[error("matrix has no rows or no columns")]
    EmptyMatrix,

    /// Row data of unequal lengths.
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl LinalgError {
    pub(crate) fn shape(expected: (usize, usize), got: (usize, usize)) -> Self {
        LinalgError::ShapeMismatch { expected, got }
    }

    /// `Err(NonSquareMatrix)` unless `nrows == ncols`.
    pub(crate) fn require_square(nrows: usize, ncols: usize) -> Result<(), Self> {
        if nrows != ncols {
            return Err(LinalgError::NonSquareMatrix { nrows, ncols });
        }
        Ok(())
    }
}
