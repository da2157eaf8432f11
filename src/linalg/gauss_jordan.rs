use crate::linalg::{sub_scaled_row, LinalgError};
use crate::traits::{FloatScalar, MatrixMut};
use crate::Matrix;

/// Gauss-Jordan reduction of an augmented `n x 2n` matrix `[A | B]`, in place.
///
/// Every row is cleared against every pivot (not only the rows below it), so
/// the left half ends up diagonal without a back-substitution pass. Each
/// right-half row is then divided by its diagonal entry. With `B = I` the
/// right half holds `A^-1` on return.
///
/// No pivoting is done: an exact `0.0` on the diagonal when its turn comes
/// is an error, even if a row exchange would have avoided it.
pub fn gauss_jordan_in_place<T: FloatScalar>(
    aug: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let n = aug.nrows();
    if aug.ncols() != 2 * n {
        return Err(LinalgError::shape((n, 2 * n), (aug.nrows(), aug.ncols())));
    }

    for i in 0..n {
        let pivot = *aug.get(i, i);
        if pivot == T::zero() {
            return Err(LinalgError::SingularOrZeroPivot { pivot: i });
        }
        for j in 0..n {
            if j != i {
                let ratio = *aug.get(j, i) / pivot;
                sub_scaled_row(aug, j, i, ratio, 0);
            }
        }
    }

    // Scale the right half so the left diagonal becomes 1.
    for i in 0..n {
        let pivot = *aug.get(i, i);
        for x in aug.row_as_mut_slice(i, n).iter_mut() {
            *x = *x / pivot;
        }
    }

    Ok(())
}

/// Invert a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// `a` is consumed: its storage is grown to `n x 2n`, reduced, and the right
/// half is compacted back into it. Clone first to keep the original.
///
/// A `1×1` matrix `[x]` returns `[1/x]` without a zero check, so `[0]`
/// inverts to `[inf]`.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::invert;
///
/// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
/// let inv = invert(a.clone()).unwrap();
/// let id = &a * &inv;
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
/// ```
pub fn invert<T: FloatScalar>(a: Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    LinalgError::require_square(a.nrows(), a.ncols())?;
    if a.is_scalar() {
        return Ok(Matrix::scalar(T::one() / a[(0, 0)]));
    }

    let n = a.nrows();
    let w = 2 * n;
    let (mut data, _, _) = a.into_raw();

    // Spread rows out to width 2n, last row first so no unread row is
    // overwritten, and append an identity row to each.
    data.resize(n * w, T::zero());
    for i in (0..n).rev() {
        data.copy_within(i * n..(i + 1) * n, i * w);
        let right = &mut data[i * w + n..(i + 1) * w];
        right.fill(T::zero());
        right[i] = T::one();
    }

    let mut aug = Matrix::from_raw(data, n, w);
    gauss_jordan_in_place(&mut aug)?;

    let (mut data, _, _) = aug.into_raw();
    for i in 0..n {
        data.copy_within(i * w + n..(i + 1) * w, i * n);
    }
    data.truncate(n * n);
    Ok(Matrix::from_raw(data, n, n))
}

impl<T: FloatScalar> Matrix<T> {
    /// Matrix inverse by Gauss-Jordan elimination. Consumes `self`; see [`invert`].
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[2.0_f64]]);
    /// assert_eq!(a.inverse().unwrap(), Matrix::new([[0.5]]));
    /// ```
    pub fn inverse(self) -> Result<Matrix<T>, LinalgError> {
        invert(self)
    }
}
