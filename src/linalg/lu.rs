use alloc::vec::Vec;

use crate::linalg::{sub_scaled_row, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Doolittle LU elimination in place, without pivoting.
///
/// On return `a` holds the upper triangular factor U and `l` the unit lower
/// triangular factor L, with `L * U` equal to the original `a`. `l` must be
/// the same shape as `a`; it is overwritten entirely.
///
/// A zero on the diagonal of any of the first `n - 1` pivots is an error.
/// The last diagonal entry of U is never divided by and may be zero. On
/// error, `a` and `l` are left partially eliminated.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    l: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let n = a.nrows();
    LinalgError::require_square(n, a.ncols())?;
    if (l.nrows(), l.ncols()) != (n, n) {
        return Err(LinalgError::shape((n, n), (l.nrows(), l.ncols())));
    }

    for i in 0..n {
        for x in l.row_as_mut_slice(i, 0).iter_mut() {
            *x = T::zero();
        }
        *l.get_mut(i, i) = T::one();
    }

    for i in 0..n.saturating_sub(1) {
        let pivot = *a.get(i, i);
        if pivot == T::zero() {
            return Err(LinalgError::SingularOrZeroPivot { pivot: i });
        }
        for j in (i + 1)..n {
            let ratio = *a.get(j, i) / pivot;
            *l.get_mut(j, i) = ratio;
            sub_scaled_row(a, j, i, ratio, 0);
        }
    }

    Ok(())
}

/// Solve `L * U * x = b` by forward then back substitution.
///
/// L has an implicit unit diagonal. `l` and `u` must both be `n x n`, and
/// `b` and `x` must have length `n`, else [`LinalgError::ShapeMismatch`].
/// Fails with [`LinalgError::SingularOrZeroPivot`] if U has a zero on its
/// diagonal.
pub fn lu_solve<T: FloatScalar>(
    l: &impl MatrixRef<T>,
    u: &impl MatrixRef<T>,
    b: &[T],
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = u.nrows();
    LinalgError::require_square(n, u.ncols())?;
    if (l.nrows(), l.ncols()) != (n, n) {
        return Err(LinalgError::shape((n, n), (l.nrows(), l.ncols())));
    }
    if b.len() != n {
        return Err(LinalgError::shape((n, 1), (b.len(), 1)));
    }
    if x.len() != n {
        return Err(LinalgError::shape((n, 1), (x.len(), 1)));
    }

    // Forward substitution (solve Ly = b)
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - *l.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *u.get(i, j) * x[j];
        }
        let diag = *u.get(i, i);
        if diag == T::zero() {
            return Err(LinalgError::SingularOrZeroPivot { pivot: i });
        }
        x[i] = sum / diag;
    }

    Ok(())
}

/// LU decomposition `A = L * U` of a square matrix, without pivoting.
///
/// The matrix handed to [`new`](Self::new) is consumed and eliminated in
/// place; its storage becomes U. No row exchanges take place, so
/// `det(A) = Π U[i,i]`.
///
/// # Example
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::new([[2.0_f64, 1.0], [4.0, 5.0]]);
/// let lu = a.clone().lu().unwrap();
///
/// assert_eq!(lu.l(), &Matrix::new([[1.0, 0.0], [2.0, 1.0]]));
/// assert_eq!(lu.u(), &Matrix::new([[2.0, 1.0], [0.0, 3.0]]));
/// assert_eq!(lu.l() * lu.u(), a);
///
/// let x = lu.solve(&[4.0, 14.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
}

impl<T: FloatScalar> LuDecomposition<T> {
    /// Decompose `a`, which becomes U.
    pub fn new(a: Matrix<T>) -> Result<Self, LinalgError> {
        let mut u = a;
        LinalgError::require_square(u.nrows(), u.ncols())?;
        let mut l = Matrix::zeros(u.nrows(), u.ncols());
        lu_in_place(&mut u, &mut l)?;
        Ok(Self { l, u })
    }

    /// Unit lower triangular factor.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// Upper triangular factor: the eliminated input.
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Take ownership of `(L, U)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.l, self.u)
    }

    /// Determinant: product of U's diagonal.
    pub fn det(&self) -> T {
        let mut d = T::one();
        for i in 0..self.u.nrows() {
            d = d * self.u[(i, i)];
        }
        d
    }

    /// Solve `Ax = b` for `x`.
    ///
    /// Fails with [`LinalgError::ShapeMismatch`] if `b` has the wrong length
    /// and with [`LinalgError::SingularOrZeroPivot`] if U has a zero diagonal.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        let n = self.u.nrows();
        if b.len() != n {
            return Err(LinalgError::shape((n, 1), (b.len(), 1)));
        }
        let mut x = alloc::vec![T::zero(); n];
        lu_solve(&self.l, &self.u, b, &mut x)?;
        Ok(x)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition without pivoting. Consumes `self`, which becomes U.
    pub fn lu(self) -> Result<LuDecomposition<T>, LinalgError> {
        LuDecomposition::new(self)
    }
}
