use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::Matrix;

// ── Checked element-wise arithmetic ─────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Apply `f` element-wise, broadcasting a `1×1` operand on either side.
    fn zip_broadcast(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, LinalgError> {
        if self.is_scalar() {
            let a = self.data[0];
            return Ok(rhs.map_data(|b| f(a, b)));
        }
        if rhs.is_scalar() {
            let b = rhs.data[0];
            return Ok(self.map_data(|a| f(a, b)));
        }
        self.zip_exact(rhs, f)
    }

    /// Apply `f` element-wise. Shapes must be identical.
    fn zip_exact(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, LinalgError> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::shape(self.shape(), rhs.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    fn map_data(&self, f: impl Fn(T) -> T) -> Self {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise sum.
    ///
    /// A `1×1` operand on either side is broadcast against every entry of
    /// the other. Otherwise the shapes must match.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let c = a.try_add(&Matrix::scalar(10.0)).unwrap();
    /// assert_eq!(c, Matrix::new([[11.0, 12.0], [13.0, 14.0]]));
    ///
    /// assert!(a.try_add(&Matrix::zeros(1, 2)).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.zip_broadcast(rhs, |a, b| a + b)
    }

    /// Element-wise difference, with the same broadcasting as [`try_add`](Self::try_add).
    ///
    /// With a scalar on the left, every entry is `a - rhs[i][j]`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.zip_broadcast(rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    ///
    /// No broadcasting; the shapes must match.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);
    /// let c = a.hadamard(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 5.0);
    /// assert_eq!(c[(1, 1)], 32.0);
    /// ```
    pub fn hadamard(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.zip_exact(rhs, |a, b| a * b)
    }

    /// Multiply every entry by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map_data(|x| x * s)
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        Matrix::from_fn(n, m, |i, j| self.data[j * n + i])
    }

    /// Matrix product `(M×N) · (N×P) → (M×P)`.
    ///
    /// A `1×1` operand on either side degrades to [`scale`](Self::scale).
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[5.0_f64, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.matmul(&b).unwrap(), Matrix::new([[19.0, 22.0], [43.0, 50.0]]));
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.is_scalar() {
            return Ok(rhs.scale(self.data[0]));
        }
        if rhs.is_scalar() {
            return Ok(self.scale(rhs.data[0]));
        }
        if self.ncols != rhs.nrows {
            return Err(LinalgError::shape(
                (self.ncols, rhs.ncols),
                rhs.shape(),
            ));
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data: Vec<T> = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Operators cannot return `Result`. They call the checked methods above and
// panic with the `ShapeMismatch` message.

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $Trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$checked(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<T: Scalar> $Trait for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $Trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $Trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                self.$method(&rhs)
            }
        }
    };
}

impl_binop!(Add, add, try_add);
impl_binop!(Sub, sub, try_sub);
impl_binop!(Mul, mul, matmul);

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self - rhs;
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map_data(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Matrix<f64> {
        Matrix::new([[1.0, 2.0], [3.0, 4.0]])
    }

    fn b() -> Matrix<f64> {
        Matrix::new([[5.0, 6.0], [7.0, 8.0]])
    }

    #[test]
    fn add_sub() {
        assert_eq!(a().try_add(&b()).unwrap(), Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b().try_sub(&a()).unwrap(), Matrix::fill(2, 2, 4.0));
        assert_eq!(&a() + &b(), a().try_add(&b()).unwrap());
        assert_eq!(b() - a(), Matrix::fill(2, 2, 4.0));
    }

    #[test]
    fn scalar_broadcast_right() {
        let s = Matrix::scalar(1.5);
        let sum = a().try_add(&s).unwrap();
        let manual = Matrix::from_fn(2, 2, |i, j| a()[(i, j)] + 1.5);
        assert_eq!(sum, manual);

        let diff = a().try_sub(&s).unwrap();
        assert_eq!(diff, Matrix::new([[-0.5, 0.5], [1.5, 2.5]]));
    }

    #[test]
    fn scalar_broadcast_left() {
        let s = Matrix::scalar(10.0);
        assert_eq!(s.try_add(&a()).unwrap(), Matrix::new([[11.0, 12.0], [13.0, 14.0]]));
        assert_eq!(s.try_sub(&a()).unwrap(), Matrix::new([[9.0, 8.0], [7.0, 6.0]]));
    }

    #[test]
    fn scalar_plus_scalar() {
        let c = Matrix::scalar(2.0).try_add(&Matrix::scalar(3.0)).unwrap();
        assert_eq!(c, Matrix::scalar(5.0));
    }

    #[test]
    fn add_shape_mismatch() {
        let c = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            a().try_add(&c).unwrap_err(),
            LinalgError::ShapeMismatch { expected: (2, 2), got: (2, 3) }
        );
        assert!(a().try_sub(&c).is_err());
    }

    #[test]
    fn hadamard() {
        let c = a().hadamard(&b()).unwrap();
        assert_eq!(c, Matrix::new([[5.0, 12.0], [21.0, 32.0]]));
    }

    #[test]
    fn hadamard_does_not_broadcast() {
        let err = a().hadamard(&Matrix::scalar(2.0)).unwrap_err();
        assert_eq!(err, LinalgError::ShapeMismatch { expected: (2, 2), got: (1, 1) });
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_operator_panics() {
        let _ = a() + Matrix::zeros(3, 3);
    }

    #[test]
    fn matrix_multiply() {
        let c = &a() * &b();
        assert_eq!(c, Matrix::new([[19.0, 22.0], [43.0, 50.0]]));
    }

    #[test]
    fn matrix_multiply_non_square() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::new([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
    }

    #[test]
    fn matmul_scalar_operand() {
        let s = Matrix::scalar(2.0);
        assert_eq!(s.matmul(&a()).unwrap(), a().scale(2.0));
        assert_eq!(a().matmul(&s).unwrap(), a().scale(2.0));
    }

    #[test]
    fn matmul_dim_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(2, 2);
        assert!(matches!(a.matmul(&b), Err(LinalgError::ShapeMismatch { .. })));
    }

    #[test]
    fn scalar_multiply() {
        let m = a().scale(3.0);
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(1, 1)], 12.0);
        assert_eq!(&a() * 3.0, m);
        assert_eq!(3.0 * &a(), m);
        assert_eq!(3.0 * a(), m);
    }

    #[test]
    fn assign_ops() {
        let mut m = a();
        m += &b();
        assert_eq!(m[(0, 0)], 6.0);
        m -= &b();
        assert_eq!(m, a());
        m *= 2.0;
        assert_eq!(m[(1, 1)], 8.0);
    }

    #[test]
    fn neg() {
        let n = -a();
        assert_eq!(n, Matrix::new([[-1.0, -2.0], [-3.0, -4.0]]));
    }

    #[test]
    fn transpose() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t, Matrix::new([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), m);
    }
}
