use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements (`f32`, `f64`).
///
/// Required by everything that divides, takes square roots or rounds:
/// inversion, the factorizations, and the 2×2 closed forms.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a row-major matrix-like type.
///
/// The elimination kernels are written against this trait rather than the
/// concrete [`Matrix`](crate::Matrix), so callers with their own row-major
/// buffers can drive them directly.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous slice of `row`, starting at `col_start`.
    fn row_as_slice(&self, row: usize, col_start: usize) -> &[T];
}

/// Mutable access to a row-major matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (Gauss-Jordan, LU) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable contiguous slice of `row`, starting at `col_start`.
    fn row_as_mut_slice(&mut self, row: usize, col_start: usize) -> &mut [T];
}
