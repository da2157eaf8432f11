//! # densela
//!
//! Dense real matrices with the classic direct kernels: Gauss-Jordan
//! inversion, Doolittle LU, and Cholesky-style `Uᵗ·U` factorization.
//! `no_std` compatible (needs `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use densela::Matrix;
//!
//! let a = Matrix::new([
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//!
//! // Inversion and LU consume their input; clone to keep it.
//! let inv = a.clone().inverse().unwrap();
//! let id = &a * &inv;
//! assert!((id[(1, 1)] - 1.0).abs() < 1e-12);
//!
//! let lu = a.clone().lu().unwrap();
//! let x = lu.solve(&[8.0, -11.0, -3.0]).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T>`: heap-allocated, row-major, runtime-sized.
//!   Construction, shape queries, checked element-wise arithmetic with `1×1`
//!   scalar broadcasting, Hadamard product, transpose, matrix product,
//!   2×2 closed-form determinant / adjugate / inverse.
//!
//! - [`linalg`] — the factorizations. Free functions work on any
//!   [`MatrixMut`] for in-place use; wrapper structs and the convenience
//!   methods `a.inverse()`, `a.lu()`, `a.cholesky()` give a higher-level API.
//!   None of them pivot: a zero on the diagonal is reported, never swapped away.
//!
//! - [`traits`] — element and access traits:
//!   - [`Scalar`] — all matrix elements
//!   - [`FloatScalar`] — real floats, required by the factorizations
//!   - [`MatrixRef`] / [`MatrixMut`] — generic row-major read/write access
//!
//! ## Errors and diagnostics
//!
//! Every fallible operation returns [`linalg::LinalgError`]. The arithmetic
//! operators (`+`, `-`, `*`) panic on shape mismatch instead; use
//! [`Matrix::try_add`], [`Matrix::try_sub`] and [`Matrix::matmul`] for the
//! recoverable form.
//!
//! [`linalg::cholesky`] keeps going past a zero pivot and reports it through
//! the [`log`] facade (`warn` level, target `densela::cholesky`). Install any
//! `log` backend to see it.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; `std::error::Error` for errors |
//!
//! Without `std` the crate is `no_std` + `alloc` and uses the pure-Rust
//! `libm` backend of `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{CholeskyDecomposition, LinalgError, LuDecomposition};
pub use matrix::{Matrix, Matrixf32, Matrixf64};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
