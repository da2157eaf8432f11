use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::traits::FloatScalar;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Round every entry to the nearest integer (half away from zero).
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::new([[0.9999999_f64, -2.5], [1e-12, 3.4]]);
    /// assert_eq!(m.round(), Matrix::new([[1.0, -3.0], [0.0, 3.0]]));
    /// ```
    pub fn round(&self) -> Self {
        self.map(|x| x.round())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Measure column widths
        let mut widths: Vec<usize> = alloc::vec![0; n];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                *width = (*width).max(w);
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = width)?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn map_changes_type() {
        let m = Matrix::new([[1.5_f64, -2.0]]);
        let signs = m.map(|x| x > 0.0);
        assert_eq!(signs[(0, 0)], true);
        assert_eq!(signs[(0, 1)], false);
    }

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::new([[1.0_f64, -20.0], [300.0, 4.0]]);
        let s = format!("{}", m);
        assert_eq!(s, "│  1  -20│\n│300    4│");
    }

    #[test]
    fn display_scalar() {
        assert_eq!(format!("{}", Matrix::scalar(2.5_f64)), "│2.5│");
    }
}
