//! Generic dense linear algebra
//!
//! Shape-generic counterparts to the fixed [`Matrix3x3`] hot path:
//! - rectangular [`Mat`] with Gauss-Jordan inversion and linear solve
//! - element-wise vector operations and scaling helpers
//! - monotone-table search and piecewise-linear resampling
//!
//! Everything returns fresh values; the only in-place routine is
//! [`Mat::apply_in_place`], which is in-place by contract.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::math::Matrix3x3;

/// Pivot magnitude below which elimination treats the system as singular
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// A rectangular matrix of f64, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Mat {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from row-major data
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch(format!(
                "{rows}x{cols} matrix needs {} elements, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a slice of equal-length rows
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(Error::ShapeMismatch(format!(
                    "ragged rows: expected width {ncols}, got {}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Create an n x n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Create a square diagonal matrix from a vector
    ///
    /// Off-diagonal entries are exactly zero.
    pub fn diag(entries: &[f64]) -> Self {
        let mut m = Self::zeros(entries.len(), entries.len());
        for (i, &v) in entries.iter().enumerate() {
            m[(i, i)] = v;
        }
        m
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow row i as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Borrow the row-major backing store
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Return the transposed matrix
    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// Matrix product self × other
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                for j in 0..other.cols {
                    out[(i, j)] += a * other[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product self × v
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if self.cols != v.len() {
            return Err(Error::ShapeMismatch(format!(
                "cannot multiply {}x{} by vector of length {}",
                self.rows,
                self.cols,
                v.len()
            )));
        }
        Ok((0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(m, x)| m * x).sum())
            .collect())
    }

    /// General matrix inverse via Gauss-Jordan elimination with partial
    /// pivoting
    ///
    /// Works for any square size. Fails with [`Error::SingularMatrix`]
    /// when a pivot falls below [`PIVOT_TOLERANCE`], and with
    /// [`Error::ShapeMismatch`] for non-square input.
    pub fn invert(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::ShapeMismatch(format!(
                "cannot invert {}x{} matrix",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        let mut a = self.clone();
        let mut inv = Self::identity(n);

        for col in 0..n {
            let pivot_row = Self::pivot_row(&a, col)?;
            a.swap_rows(col, pivot_row);
            inv.swap_rows(col, pivot_row);

            let pivot = a[(col, col)];
            for j in 0..n {
                a[(col, j)] /= pivot;
                inv[(col, j)] /= pivot;
            }
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = a[(r, col)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    let av = a[(col, j)];
                    let iv = inv[(col, j)];
                    a[(r, j)] -= factor * av;
                    inv[(r, j)] -= factor * iv;
                }
            }
        }
        Ok(inv)
    }

    /// Solve A·X = B via elimination on the augmented system
    ///
    /// Equivalent to `A.invert()? × B` but better conditioned. B may have
    /// any number of columns.
    pub fn solve(&self, b: &Self) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::ShapeMismatch(format!(
                "coefficient matrix is {}x{}, must be square",
                self.rows, self.cols
            )));
        }
        if b.rows != self.rows {
            return Err(Error::ShapeMismatch(format!(
                "rhs has {} rows, expected {}",
                b.rows, self.rows
            )));
        }
        let n = self.rows;
        let mut a = self.clone();
        let mut x = b.clone();

        // Forward elimination with partial pivoting
        for col in 0..n {
            let pivot_row = Self::pivot_row(&a, col)?;
            a.swap_rows(col, pivot_row);
            x.swap_rows(col, pivot_row);

            let pivot = a[(col, col)];
            for r in col + 1..n {
                let factor = a[(r, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for j in col..n {
                    let av = a[(col, j)];
                    a[(r, j)] -= factor * av;
                }
                for j in 0..x.cols {
                    let xv = x[(col, j)];
                    x[(r, j)] -= factor * xv;
                }
            }
        }

        // Back substitution
        for i in (0..n).rev() {
            for j in 0..x.cols {
                let mut acc = x[(i, j)];
                for k in i + 1..n {
                    acc -= a[(i, k)] * x[(k, j)];
                }
                x[(i, j)] = acc / a[(i, i)];
            }
        }
        Ok(x)
    }

    /// Apply this (square) matrix to every `rows()`-wide chunk of a flat
    /// buffer, in place
    ///
    /// The generic counterpart to [`crate::apply::apply_matrix_in_place`].
    /// Buffer length must be a multiple of the matrix size.
    pub fn apply_in_place(&self, data: &mut [f64]) -> Result<()> {
        if !self.is_square() {
            return Err(Error::ShapeMismatch(format!(
                "transform matrix is {}x{}, must be square",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        if n == 0 || data.len() % n != 0 {
            return Err(Error::ShapeMismatch(format!(
                "buffer length {} is not a multiple of row width {n}",
                data.len()
            )));
        }
        let mut scratch = vec![0.0; n];
        for chunk in data.chunks_exact_mut(n) {
            for (i, out) in scratch.iter_mut().enumerate() {
                *out = self.row(i).iter().zip(chunk.iter()).map(|(m, x)| m * x).sum();
            }
            chunk.copy_from_slice(&scratch);
        }
        Ok(())
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() < epsilon)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Row index with the largest pivot magnitude in `col`, at or below
    /// the diagonal
    fn pivot_row(a: &Self, col: usize) -> Result<usize> {
        let mut best = col;
        let mut best_mag = a[(col, col)].abs();
        for r in col + 1..a.rows {
            let mag = a[(r, col)].abs();
            if mag > best_mag {
                best_mag = mag;
                best = r;
            }
        }
        if best_mag < PIVOT_TOLERANCE {
            return Err(Error::SingularMatrix(format!(
                "pivot magnitude {best_mag:e} at column {col} below tolerance"
            )));
        }
        Ok(best)
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl From<&Matrix3x3> for Mat {
    fn from(m: &Matrix3x3) -> Self {
        let mut data = Vec::with_capacity(9);
        for row in &m.m {
            data.extend_from_slice(row);
        }
        Self {
            rows: 3,
            cols: 3,
            data,
        }
    }
}

impl TryFrom<&Mat> for Matrix3x3 {
    type Error = Error;

    fn try_from(m: &Mat) -> Result<Self> {
        if m.rows != 3 || m.cols != 3 {
            return Err(Error::ShapeMismatch(format!(
                "expected 3x3 matrix, got {}x{}",
                m.rows, m.cols
            )));
        }
        let mut out = Matrix3x3::zero();
        for i in 0..3 {
            out.m[i].copy_from_slice(m.row(i));
        }
        Ok(out)
    }
}

// ============================================================================
// Element-wise vector operations
// ============================================================================

/// Element-wise product of two equal-length vectors
pub fn mul_elements(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_equal_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// Element-wise quotient of two equal-length vectors
///
/// Any exactly-zero divisor entry fails with [`Error::DivideByZero`];
/// there is no epsilon guard at this level, callers pre-validate.
pub fn div_elements(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_equal_len(a, b)?;
    if let Some(i) = b.iter().position(|&y| y == 0.0) {
        return Err(Error::DivideByZero(format!("divisor entry {i} is zero")));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x / y).collect())
}

/// Sum of all entries
pub fn sum(v: &[f64]) -> f64 {
    v.iter().sum()
}

/// Dot product of two equal-length vectors
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_equal_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// 2-D cross product, the scalar `a.x·b.y − a.y·b.x`
pub fn cross2(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != 2 || b.len() != 2 {
        return Err(Error::ShapeMismatch(format!(
            "cross2 needs 2-vectors, got lengths {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a[0] * b[1] - a[1] * b[0])
}

/// Divide all entries by the maximum entry; no-op when the maximum is zero
pub fn scale_to_max(v: &mut [f64]) {
    let max = v.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    if max == 0.0 || v.is_empty() {
        return;
    }
    for x in v.iter_mut() {
        *x /= max;
    }
}

/// Divide all entries by the minimum entry; no-op when the minimum is zero
pub fn scale_to_min(v: &mut [f64]) {
    let min = v.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    if min == 0.0 || v.is_empty() {
        return;
    }
    for x in v.iter_mut() {
        *x /= min;
    }
}

/// Reciprocal 1/x
///
/// Exact zero fails with [`Error::DivideByZero`] rather than producing
/// infinity.
#[inline]
pub fn reciprocal(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::DivideByZero("reciprocal of zero".into()));
    }
    Ok(1.0 / x)
}

/// Reciprocal of each entry, normalized so the smallest becomes 1
pub fn scale_by_reciprocal(v: &[f64]) -> Result<Vec<f64>> {
    let mut out = v
        .iter()
        .map(|&x| reciprocal(x))
        .collect::<Result<Vec<f64>>>()?;
    scale_to_min(&mut out);
    Ok(out)
}

// ============================================================================
// Monotone table search and 1-D resampling
// ============================================================================

/// Find the bracketing index in a strictly increasing table
///
/// Returns i such that `table[i] <= target < table[i + 1]`, clamped to 0
/// below the domain and to `len - 2` at or beyond the upper bound, so
/// `i + 1` always indexes the table.
pub fn find_index_interp1(target: f64, table: &[f64]) -> usize {
    if table.len() < 2 {
        return 0;
    }
    let idx = table.partition_point(|&x| x <= target);
    idx.saturating_sub(1).min(table.len() - 2)
}

/// Piecewise-linear resampling of (xs_from, ys_from) at the points xs_to
///
/// Outside the source domain the boundary segment's slope extends
/// linearly; there is no clamping.
pub fn interp1d_linear(xs_from: &[f64], xs_to: &[f64], ys_from: &[f64]) -> Result<Vec<f64>> {
    if xs_from.len() != ys_from.len() {
        return Err(Error::ShapeMismatch(format!(
            "xs has {} knots but ys has {}",
            xs_from.len(),
            ys_from.len()
        )));
    }
    if xs_from.len() < 2 {
        return Err(Error::ShapeMismatch(
            "interpolation needs at least two knots".into(),
        ));
    }
    Ok(xs_to
        .iter()
        .map(|&x| {
            let i = find_index_interp1(x, xs_from);
            let slope = (ys_from[i + 1] - ys_from[i]) / (xs_from[i + 1] - xs_from[i]);
            ys_from[i] + slope * (x - xs_from[i])
        })
        .collect())
}

fn check_equal_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::ShapeMismatch(format!(
            "vector lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        if b == 0.0 {
            return a.abs() < tol;
        }
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_is_square() {
        assert!(Mat::zeros(2, 2).is_square());
        assert!(!Mat::zeros(2, 1).is_square());
    }

    #[test]
    fn test_diag() {
        let d = Mat::diag(&[1.0, 2.0, 3.0]);
        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    assert_eq!(d[(i, j)], (i + 1) as f64);
                } else {
                    assert_eq!(d[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_transpose_rectangular() {
        let m = Mat::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 3.0],
            vec![1.0, 1.0, 2.0],
            vec![2.0, 2.0, 3.0],
            vec![3.0, 3.0, 4.0],
        ])
        .unwrap();
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 6);
        assert_eq!(t.row(0), &[1.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(t.row(1), &[0.0, 2.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(t.row(2), &[0.0, 0.0, 3.0, 2.0, 3.0, 4.0]);
        assert!(t.transpose().approx_eq(&m, EPSILON));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Mat::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn test_invert_reference_values() {
        let m = Mat::from_rows(&[
            vec![0.0188205, 8.59e-03, 9.58e-03],
            vec![0.0440222, 0.0166118, 0.0258734],
            vec![0.1561591, 0.046321, 0.1181466],
        ])
        .unwrap();
        let expected = [
            [-844.264597, 631.004958, -69.728531],
            [1282.403375, -803.858096, 72.055546],
            [613.114494, -518.860936, 72.376689],
        ];
        let inv = m.invert().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    rel_close(inv[(i, j)], expected[i][j], 1e-7),
                    "[{i}][{j}]: {} vs {}",
                    inv[(i, j)],
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_invert_4x4() {
        // Diagonally dominant, comfortably invertible
        let m = Mat::from_rows(&[
            vec![4.0, 1.0, 0.0, 0.5],
            vec![1.0, 5.0, 1.0, 0.0],
            vec![0.0, 1.0, 6.0, 1.0],
            vec![0.5, 0.0, 1.0, 7.0],
        ])
        .unwrap();
        let inv = m.invert().unwrap();
        let product = m.mul(&inv).unwrap();
        assert!(product.approx_eq(&Mat::identity(4), 1e-9));
    }

    #[test]
    fn test_double_inverse_identity() {
        let a = Mat::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ])
        .unwrap();
        // solve against the identity is the inverse; inverting that
        // recovers A
        let inv_via_solve = a.solve(&Mat::identity(3)).unwrap();
        assert!(inv_via_solve.invert().unwrap().approx_eq(&a, 1e-8));
    }

    #[test]
    fn test_solve_self_is_identity() {
        let a = Mat::from_rows(&[
            vec![2.0, 1.0, 0.0],
            vec![1.0, 3.0, 1.0],
            vec![0.0, 1.0, 4.0],
        ])
        .unwrap();
        let x = a.solve(&a).unwrap();
        assert!(x.approx_eq(&Mat::identity(3), 1e-10));
    }

    #[test]
    fn test_solve_diagonal() {
        let a = Mat::diag(&[1.0, 2.0, 3.0]);
        let x = a.solve(&Mat::identity(3)).unwrap();
        assert!(rel_close(x[(1, 1)], 0.5, 1e-12));
        assert!(rel_close(x[(2, 2)], 1.0 / 3.0, 1e-12));
    }

    #[test]
    fn test_singular_solve() {
        let a = Mat::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![5.0, 7.0, 9.0],
        ])
        .unwrap();
        assert!(matches!(
            a.solve(&Mat::identity(3)),
            Err(Error::SingularMatrix(_))
        ));
        assert!(matches!(a.invert(), Err(Error::SingularMatrix(_))));
    }

    #[test]
    fn test_non_square_invert_rejected() {
        assert!(matches!(
            Mat::zeros(2, 3).invert(),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_mul_elements() {
        let a = [1.0, 2.0, 4.0];
        let b = [2.0, 0.5, 0.25];
        let c = mul_elements(&a, &b).unwrap();
        assert_eq!(c, vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_div_elements_zero() {
        let a = [1.0, 2.0];
        let b = [1.0, 0.0];
        assert!(matches!(
            div_elements(&a, &b),
            Err(Error::DivideByZero(_))
        ));
    }

    #[test]
    fn test_sum_and_dot() {
        let v: Vec<f64> = (1..=10).map(f64::from).collect();
        assert!((sum(&v) - 55.0).abs() < EPSILON);
        assert!((dot(&v, &v).unwrap() - 385.0).abs() < EPSILON);
    }

    #[test]
    fn test_cross2() {
        assert!((cross2(&[1.0, 3.0], &[1.0, 6.5]).unwrap() - 3.5).abs() < EPSILON);
        assert!(matches!(
            cross2(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_scale_to_max() {
        let mut v: Vec<f64> = (1..=10).map(f64::from).collect();
        scale_to_max(&mut v);
        for (i, x) in v.iter().enumerate() {
            assert!(rel_close(*x, (i + 1) as f64 / 10.0, 1e-12));
        }

        let mut zeros = vec![0.0, 0.0];
        scale_to_max(&mut zeros);
        assert_eq!(zeros, vec![0.0, 0.0]);
    }

    #[test]
    fn test_scale_to_min_already_normalized() {
        let mut v: Vec<f64> = (1..=10).map(f64::from).collect();
        scale_to_min(&mut v);
        for (i, x) in v.iter().enumerate() {
            assert!(rel_close(*x, (i + 1) as f64, 1e-12));
        }
    }

    #[test]
    fn test_reciprocal() {
        assert!((reciprocal(1000.0).unwrap() - 0.001).abs() < 1e-15);
        assert!(matches!(reciprocal(0.0), Err(Error::DivideByZero(_))));
    }

    #[test]
    fn test_scale_by_reciprocal() {
        let v: Vec<f64> = (1..=10).map(f64::from).collect();
        let scaled = scale_by_reciprocal(&v).unwrap();
        // Reciprocals normalized so the smallest becomes 1: 10/x
        for (i, x) in scaled.iter().enumerate() {
            assert!(rel_close(*x, 10.0 / (i + 1) as f64, 1e-10));
        }
        assert!(matches!(
            scale_by_reciprocal(&[1.0, 0.0]),
            Err(Error::DivideByZero(_))
        ));
    }

    #[test]
    fn test_find_index_interp1() {
        let table: Vec<f64> = (0..100).map(|i| (i * 2) as f64).collect();
        assert_eq!(find_index_interp1(100.0, &table), 50);
        assert_eq!(find_index_interp1(101.0, &table), 50);
        // Below the domain clamps to 0
        assert_eq!(find_index_interp1(-5.0, &table), 0);
        // At or beyond the upper bound clamps so i + 1 stays valid
        assert_eq!(find_index_interp1(198.0, &table), 98);
        assert_eq!(find_index_interp1(1e9, &table), 98);
    }

    #[test]
    fn test_interp1d_linear_resamples_line() {
        // Resampling a linear function reproduces it exactly, including
        // past the source domain (boundary-slope extension)
        let xs_from: Vec<f64> = (0..100).map(f64::from).collect();
        let xs_to: Vec<f64> = (0..100).map(|i| (i * 2) as f64).collect();
        let ys_from: Vec<f64> = (0..100).map(|i| f64::from(i) * 3.5).collect();

        let ys_to = interp1d_linear(&xs_from, &xs_to, &ys_from).unwrap();
        for (i, y) in ys_to.iter().enumerate() {
            assert!(rel_close(*y, (i * 7) as f64, 1e-9), "at {i}: {y}");
        }
    }

    #[test]
    fn test_interp1d_identity_at_knots() {
        let xs = [0.0, 1.0, 4.0, 9.0];
        let ys = [1.0, -2.0, 0.5, 7.0];
        let out = interp1d_linear(&xs, &xs, &ys).unwrap();
        for (a, b) in out.iter().zip(&ys) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interp1d_shape_mismatch() {
        assert!(matches!(
            interp1d_linear(&[0.0, 1.0], &[0.5], &[0.0]),
            Err(Error::ShapeMismatch(_))
        ));
        assert!(matches!(
            interp1d_linear(&[0.0], &[0.5], &[0.0]),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_generic_apply_in_place() {
        let m = Mat::diag(&[1.0, 2.0, 3.0]);
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        m.apply_in_place(&mut data).unwrap();
        assert_eq!(data, vec![1.0, 4.0, 9.0, 4.0, 10.0, 18.0, 7.0, 16.0, 27.0]);
    }

    #[test]
    fn test_apply_in_place_shape_mismatch() {
        let m = Mat::identity(3);
        let mut data = vec![0.0; 7];
        assert!(matches!(
            m.apply_in_place(&mut data),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_matrix3x3_roundtrip() {
        let fixed = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let generic = Mat::from(&fixed);
        let back = Matrix3x3::try_from(&generic).unwrap();
        assert!(back.approx_eq(&fixed, 0.0));
        assert!(matches!(
            Matrix3x3::try_from(&Mat::zeros(2, 2)),
            Err(Error::ShapeMismatch(_))
        ));
    }
}
