use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixRef};
use crate::Matrix;

// ---------------------------------------------------------------------------
// Factorization
// ---------------------------------------------------------------------------

/// Cholesky-style factorization `A = Uᵗ * U`, U upper triangular.
///
/// Only the diagonal and lower triangle of `a` are read; symmetry is assumed,
/// not checked. `a` itself is left untouched. U is `n x n` with `n = a.nrows()`;
/// a wide `a` factors its leading `n x n` block and the extra columns are
/// ignored. A tall `a` has no such block and fails with
/// [`LinalgError::NonSquareMatrix`].
///
/// A negative radicand on the diagonal stops the factorization with
/// [`LinalgError::NonPositiveDefiniteInput`]. A zero pivot is tolerated: the
/// entries to its right that would divide by it are left at zero, a warning
/// is logged under the `densela::cholesky` target, and the entry is listed in
/// [`CholeskyDecomposition::degenerate`]. So positive semi-definite input
/// still produces a factor.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::cholesky;
///
/// let a = Matrix::new([[4.0_f64, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
/// let chol = cholesky(&a).unwrap();
/// assert_eq!(chol.u(), &Matrix::new([[2.0, 6.0, -8.0], [0.0, 1.0, 5.0], [0.0, 0.0, 3.0]]));
/// assert_eq!(&chol.u().transpose() * chol.u(), a);
/// ```
pub fn cholesky<T: FloatScalar>(
    a: &impl MatrixRef<T>,
) -> Result<CholeskyDecomposition<T>, LinalgError> {
    let n = a.nrows();
    if a.ncols() < n {
        return Err(LinalgError::NonSquareMatrix { nrows: n, ncols: a.ncols() });
    }

    let mut u = Matrix::<T>::zeros(n, n);
    let mut degenerate = Vec::new();

    for i in 0..n {
        for j in 0..=i {
            if i == j {
                let mut sum = T::zero();
                for k in 0..j {
                    let ukj = u[(k, j)];
                    sum = sum + ukj * ukj;
                }
                let radicand = *a.get(j, j) - sum;
                if radicand < T::zero() || radicand.is_nan() {
                    return Err(LinalgError::NonPositiveDefiniteInput {
                        pivot: j,
                        radicand: radicand.to_f64().unwrap_or(f64::NAN),
                    });
                }
                u[(j, j)] = radicand.sqrt();
            } else {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + u[(k, i)] * u[(k, j)];
                }
                let pivot = u[(j, j)];
                if pivot > T::zero() {
                    u[(j, i)] = (*a.get(i, j) - sum) / pivot;
                } else {
                    log::warn!(
                        target: "densela::cholesky",
                        "pivot U[{j}][{j}] = {pivot:?} is not positive; leaving U[{j}][{i}] at zero \
                         (A[{i}][{j}] = {:?}, partial sum = {sum:?})",
                        a.get(i, j),
                    );
                    degenerate.push((j, i));
                }
            }
        }
    }

    Ok(CholeskyDecomposition { u, degenerate })
}

/// Solve `Uᵗ * y = b` by forward substitution, where U is upper triangular.
#[inline]
fn forward_substitute_ut<T: FloatScalar>(
    u: &impl MatrixRef<T>,
    b: &[T],
    y: &mut [T],
) -> Result<(), LinalgError> {
    let n = u.nrows();
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum = sum - *u.get(k, i) * y[k];
        }
        let diag = *u.get(i, i);
        if diag == T::zero() {
            return Err(LinalgError::SingularOrZeroPivot { pivot: i });
        }
        y[i] = sum / diag;
    }
    Ok(())
}

/// Solve `U * x = y` by back substitution. Diagonal already checked non-zero.
#[inline]
fn back_substitute_u<T: FloatScalar>(u: &impl MatrixRef<T>, y: &[T], x: &mut [T]) {
    let n = u.nrows();
    for i in (0..n).rev() {
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum = sum - *u.get(i, k) * x[k];
        }
        x[i] = sum / *u.get(i, i);
    }
}

// ---------------------------------------------------------------------------
// CholeskyDecomposition
// ---------------------------------------------------------------------------

/// Result of [`cholesky`]: the upper triangular factor U with `A = Uᵗ * U`.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T> {
    u: Matrix<T>,
    /// `(row, col)` entries of U skipped because their pivot was not positive.
    degenerate: Vec<(usize, usize)>,
}

impl<T: FloatScalar> CholeskyDecomposition<T> {
    /// Upper triangular factor U.
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Take ownership of U.
    pub fn into_u(self) -> Matrix<T> {
        self.u
    }

    /// Lower triangular factor `L = Uᵗ`, so that `A = L * Lᵗ`.
    pub fn l(&self) -> Matrix<T> {
        self.u.transpose()
    }

    /// Entries `(row, col)` of U that were left at zero because the pivot
    /// `U[row][row]` was not positive. Empty for positive-definite input.
    pub fn degenerate(&self) -> &[(usize, usize)] {
        &self.degenerate
    }

    /// Whether any entry hit a non-positive pivot.
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }

    /// Determinant: `det(A) = (Π U[i,i])²`.
    pub fn det(&self) -> T {
        let mut prod = T::one();
        for i in 0..self.u.nrows() {
            prod = prod * self.u[(i, i)];
        }
        prod * prod
    }

    /// Solve `A * x = b` for x, where `A = Uᵗ * U`.
    ///
    /// Fails with [`LinalgError::SingularOrZeroPivot`] if U has a zero on its
    /// diagonal.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        let n = self.u.nrows();
        if b.len() != n {
            return Err(LinalgError::shape((n, 1), (b.len(), 1)));
        }
        let mut y = alloc::vec![T::zero(); n];
        forward_substitute_ut(&self.u, b, &mut y)?;
        let mut x = alloc::vec![T::zero(); n];
        back_substitute_u(&self.u, &y, &mut x);
        Ok(x)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Cholesky-style factorization `A = Uᵗ * U`. See [`cholesky`].
    ///
    /// Unlike [`inverse`](Self::inverse) and [`lu`](Self::lu), this only
    /// reads `self`.
    pub fn cholesky(&self) -> Result<CholeskyDecomposition<T>, LinalgError> {
        cholesky(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spd3() -> Matrix<f64> {
        Matrix::new([[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]])
    }

    #[test]
    fn cholesky_3x3_known_factor() {
        let chol = spd3().cholesky().unwrap();
        let expected = Matrix::new([[2.0, 6.0, -8.0], [0.0, 1.0, 5.0], [0.0, 0.0, 3.0]]);
        assert_eq!(chol.u(), &expected);
        assert!(!chol.is_degenerate());
        assert_eq!(chol.l(), expected.transpose());
    }

    #[test]
    fn cholesky_reconstructs() {
        let a = spd3();
        let u = a.cholesky().unwrap().into_u();
        let recon = &u.transpose() * &u;
        for i in 0..3 {
            for j in 0..3 {
                assert!((recon[(i, j)] - a[(i, j)]).abs() < 1e-12);
                if i > j {
                    assert_eq!(u[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn cholesky_det() {
        // det = (2 * 1 * 3)^2
        assert!((spd3().cholesky().unwrap().det() - 36.0).abs() < 1e-12);
    }

    #[test]
    fn cholesky_solve() {
        let a = Matrix::new([[4.0_f64, 2.0], [2.0, 3.0]]);
        let chol = a.cholesky().unwrap();
        let x = chol.solve(&[8.0, 7.0]).unwrap();
        // 4x + 2y = 8, 2x + 3y = 7
        assert!((x[0] - 1.25).abs() < 1e-12);
        assert!((x[1] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn cholesky_does_not_modify_input() {
        let a = spd3();
        let _ = a.cholesky().unwrap();
        assert_eq!(a, spd3());
    }

    #[test]
    fn negative_leading_diagonal() {
        let a = Matrix::new([[-1.0_f64, 0.0], [0.0, 1.0]]);
        assert_eq!(
            a.cholesky().unwrap_err(),
            LinalgError::NonPositiveDefiniteInput { pivot: 0, radicand: -1.0 }
        );
    }

    #[test]
    fn negative_radicand_after_reduction() {
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 1.0]]);
        assert_eq!(
            a.cholesky().unwrap_err(),
            LinalgError::NonPositiveDefiniteInput { pivot: 1, radicand: -3.0 }
        );
    }

    #[test]
    fn nan_radicand_is_fatal() {
        let a = Matrix::new([[f64::NAN]]);
        assert!(matches!(
            a.cholesky().unwrap_err(),
            LinalgError::NonPositiveDefiniteInput { pivot: 0, .. }
        ));
    }

    #[test]
    fn zero_pivot_leaves_entry_at_zero() {
        let a = Matrix::new([[0.0_f64, 1.0], [1.0, 2.0]]);
        let chol = a.cholesky().unwrap();
        assert_eq!(chol.u()[(0, 0)], 0.0);
        assert_eq!(chol.u()[(0, 1)], 0.0);
        assert!((chol.u()[(1, 1)] - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(chol.degenerate(), &[(0, 1)]);
        assert!(chol.is_degenerate());
    }

    #[test]
    fn semidefinite_input_still_factors() {
        // Rank-one, positive semi-definite: second pivot reduces to exactly zero.
        let a = Matrix::new([[1.0_f64, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 2.0]]);
        let chol = a.cholesky().unwrap();
        assert_eq!(chol.u()[(1, 1)], 0.0);
        assert_eq!(chol.u()[(1, 2)], 0.0);
        assert_eq!(chol.degenerate(), &[(1, 2)]);
        assert_eq!(chol.u()[(2, 2)], 1.0);
    }

    #[test]
    fn solve_with_zero_pivot_fails() {
        let a = Matrix::new([[0.0_f64, 0.0], [0.0, 1.0]]);
        let chol = a.cholesky().unwrap();
        assert_eq!(
            chol.solve(&[1.0, 1.0]).unwrap_err(),
            LinalgError::SingularOrZeroPivot { pivot: 0 }
        );
    }

    #[test]
    fn tall_input_rejected() {
        let a = Matrix::<f64>::zeros(3, 2);
        assert_eq!(
            a.cholesky().unwrap_err(),
            LinalgError::NonSquareMatrix { nrows: 3, ncols: 2 }
        );
    }

    #[test]
    fn wide_input_factors_leading_block() {
        let a = Matrix::new([[4.0_f64, 2.0, 9.0], [2.0, 5.0, 9.0]]);
        let chol = a.cholesky().unwrap();
        assert_eq!(chol.u(), &Matrix::new([[2.0, 1.0], [0.0, 2.0]]));
        assert!(!chol.is_degenerate());
    }
}
