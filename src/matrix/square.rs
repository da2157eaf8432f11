use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::identity(n, n)
    }

    /// Ones on the leading diagonal of an `nrows x ncols` matrix, zeros elsewhere.
    ///
    /// ```
    /// use densela::Matrix;
    /// let d = Matrix::<f64>::identity(2, 3);
    /// assert_eq!(d, Matrix::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]));
    /// ```
    pub fn identity(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Sum of diagonal elements. The matrix must be square.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.trace().unwrap(), 5.0);
    /// ```
    pub fn trace(&self) -> Result<T, LinalgError> {
        LinalgError::require_square(self.nrows, self.ncols)?;
        let mut sum = T::zero();
        for i in 0..self.nrows {
            sum = sum + self[(i, i)];
        }
        Ok(sum)
    }

    /// Check if the matrix is symmetric (`A == A^T`).
    ///
    /// ```
    /// use densela::Matrix;
    /// let sym = Matrix::new([[1.0_f64, 2.0], [2.0, 3.0]]);
    /// assert!(sym.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows;
        for i in 0..n {
            for j in (i + 1)..n {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    fn require_2x2(&self) -> Result<(), LinalgError> {
        if self.shape() != (2, 2) {
            return Err(LinalgError::shape((2, 2), self.shape()));
        }
        Ok(())
    }

    /// Determinant of a 2×2 matrix, `ad - bc`.
    pub fn det2x2(&self) -> Result<T, LinalgError> {
        self.require_2x2()?;
        Ok(self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)])
    }

    /// Adjugate of a 2×2 matrix, `[[d, -b], [-c, a]]`.
    pub fn adj2x2(&self) -> Result<Self, LinalgError> {
        self.require_2x2()?;
        let zero = T::zero();
        Ok(Matrix::new([
            [self[(1, 1)], zero - self[(0, 1)]],
            [zero - self[(1, 0)], self[(0, 0)]],
        ]))
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Closed-form inverse of a 2×2 matrix, `adj(A) / det(A)`.
    ///
    /// The determinant is not checked: a singular input gives non-finite
    /// entries rather than an error.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let inv = a.inv2x2().unwrap();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
    /// ```
    pub fn inv2x2(&self) -> Result<Self, LinalgError> {
        let det = self.det2x2()?;
        Ok(self.adj2x2()?.scale(T::one() / det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rectangular() {
        let tall = Matrix::<f64>::identity(3, 2);
        assert_eq!(tall, Matrix::new([[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]));
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let id = Matrix::eye(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    fn trace_non_square() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.trace().unwrap_err(), LinalgError::NonSquareMatrix { nrows: 2, ncols: 3 });
    }

    #[test]
    fn symmetric() {
        assert!(!Matrix::new([[1.0, 2.0], [3.0, 4.0]]).is_symmetric());
        assert!(!Matrix::<f64>::zeros(2, 3).is_symmetric());
        assert!(Matrix::new([[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]])
            .is_symmetric());
    }

    #[test]
    fn det_adj_2x2() {
        let a = Matrix::new([[3.0, 8.0], [4.0, 6.0]]);
        assert_eq!(a.det2x2().unwrap(), -14.0);
        assert_eq!(a.adj2x2().unwrap(), Matrix::new([[6.0, -8.0], [-4.0, 3.0]]));
    }

    #[test]
    fn inv2x2_times_a_is_identity() {
        let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let id = &a * &a.inv2x2().unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn inv2x2_singular_is_not_finite() {
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        let inv = a.inv2x2().unwrap();
        assert!(inv.as_slice().iter().any(|x| !x.is_finite()));
    }

    #[test]
    fn closed_forms_reject_other_shapes() {
        let m = Matrix::<f64>::zeros(3, 3);
        let expected = LinalgError::ShapeMismatch { expected: (2, 2), got: (3, 3) };
        assert_eq!(m.det2x2().unwrap_err(), expected);
        assert_eq!(m.adj2x2().unwrap_err(), expected);
        assert_eq!(m.inv2x2().unwrap_err(), expected);
    }
}
