mod ops;
mod square;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// `Matrix` with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// `Matrix` with `f32` elements.
pub type Matrixf32 = Matrix<f32>;

/// Dense, heap-allocated, row-major matrix with runtime dimensions.
///
/// Storage is a single `Vec<T>` with `data[i * ncols + j] = A[i, j]`.
/// Every matrix has at least one row and one column. A `1×1` matrix is a
/// *scalar* matrix and broadcasts in [`try_add`](Matrix::try_add) and
/// [`try_sub`](Matrix::try_sub).
///
/// # Examples
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.shape(), (2, 3));
/// assert_eq!(a.dimensions(), (3, 2));
///
/// let z = Matrix::<f64>::zeros(2, 2);
/// assert_eq!(z[(1, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from a literal array of rows.
    ///
    /// Panics if `M` or `N` is zero.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn new<const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self {
        assert!(M > 0 && N > 0, "matrix must have at least one row and column");
        let mut data = Vec::with_capacity(M * N);
        for row in rows.iter() {
            data.extend_from_slice(row);
        }
        Self {
            data,
            nrows: M,
            ncols: N,
        }
    }

    /// Create a matrix from a list of rows.
    ///
    /// Fails with [`LinalgError::EmptyMatrix`] if there are no rows or the
    /// rows are empty, and with [`LinalgError::RaggedRows`] if the rows do
    /// not all have the same length.
    ///
    /// ```
    /// use densela::Matrix;
    /// use densela::linalg::LinalgError;
    ///
    /// let m = Matrix::<f64>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    ///
    /// let err = Matrix::<f64>::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    /// assert_eq!(err, LinalgError::RaggedRows { row: 1, expected: 2, got: 1 });
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        if nrows == 0 || ncols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(LinalgError::RaggedRows {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if either dimension is zero or `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix must have at least one row and column");
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// Rows come first, as in [`shape`](Self::shape). See
    /// [`zero_filled`](Self::zero_filled) for the width-first form.
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a zero matrix `ncols` wide and `nrows` high.
    ///
    /// Width first, matching [`dimensions`](Self::dimensions):
    /// `Matrix::zero_filled(c, r).dimensions() == (c, r)`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::<f64>::zero_filled(3, 2);
    /// assert_eq!(m.dimensions(), (3, 2));
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn zero_filled(ncols: usize, nrows: usize) -> Self {
        Self::zeros(nrows, ncols)
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix must have at least one row and column");
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a `1×1` scalar matrix.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            nrows: 1,
            ncols: 1,
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// `(ncols, nrows)`: width first, then height.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.ncols, self.nrows)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix is `1×1`.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.nrows == 1 && self.ncols == 1
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix must have at least one row and column");
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Take the storage apart. Used by the in-place inverter, which regrows it.
    pub(crate) fn into_raw(self) -> (Vec<T>, usize, usize) {
        (self.data, self.nrows, self.ncols)
    }

    pub(crate) fn from_raw(data: Vec<T>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T] {
        let start = row * self.ncols + col_start;
        let end = (row + 1) * self.ncols;
        &self.data[start..end]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    #[inline]
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T] {
        let start = row * self.ncols + col_start;
        let end = (row + 1) * self.ncols;
        &mut self.data[start..end]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}
