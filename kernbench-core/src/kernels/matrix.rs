// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Dense integer matrix construction, multiplication and checksum.

use std::fmt;

use crate::error::{KernelError, KernelResult, ValidationError};

/// Cell values wrap at this modulus during construction.
const CELL_MODULUS: i64 = 23;

/// Row-major dense matrix with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
    cols: usize,
}

impl Matrix {
    /// Zero-filled `height x width` matrix.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![0; width]; height],
            cols: width,
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Ragged input is rejected, since every row must have the same width.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> KernelResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(ValidationError::InvalidFieldValue {
                field: "rows",
                value: bad.len().to_string(),
                reason: format!("ragged matrix, expected every row to have {} cells", cols),
            }
            .into());
        }
        Ok(Self { rows, cols })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }
}

/// Fixed-width rendering: every cell as `{:>5} `, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{:>5} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fill `height x width` row-major with `(seed + k) mod 23`.
///
/// `k` keeps counting across row boundaries.
pub fn build(height: usize, width: usize, seed: i64) -> Matrix {
    let mut matrix = Matrix::zeros(height, width);
    let mut val = seed;
    for row in matrix.rows.iter_mut() {
        for cell in row.iter_mut() {
            *cell = val % CELL_MODULUS;
            val += 1;
        }
    }
    matrix
}

/// Standard triple-loop product.
pub fn multiply(a: &Matrix, b: &Matrix) -> KernelResult<Matrix> {
    if a.width() != b.height() {
        return Err(KernelError::DimensionMismatch {
            left_cols: a.width(),
            right_rows: b.height(),
        });
    }

    let mut result = Matrix::zeros(a.height(), b.width());
    for y in 0..a.height() {
        for x in 0..b.width() {
            for i in 0..a.width() {
                result.rows[y][x] += a.rows[y][i] * b.rows[i][x];
            }
        }
    }
    Ok(result)
}

/// Total of all cells.
pub fn sum(matrix: &Matrix) -> i64 {
    matrix.rows.iter().flatten().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_small() {
        assert_eq!(build(2, 2, 1).rows(), &[vec![1, 2], vec![3, 4]]);
        assert_eq!(build(2, 2, 2).rows(), &[vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_build_wraps_across_rows() {
        let m = build(3, 5, 20);
        assert_eq!(m.rows()[0], vec![20, 21, 22, 0, 1]);
        assert_eq!(m.rows()[1], vec![2, 3, 4, 5, 6]);
        assert_eq!(m.get(2, 4), 11);
    }

    #[test]
    fn test_multiply_and_sum() {
        let a = build(2, 2, 1);
        let b = build(2, 2, 2);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.rows(), &[vec![10, 13], vec![22, 29]]);
        assert_eq!(sum(&c), 74);
    }

    #[test]
    fn test_multiply_rectangular() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1], vec![1], vec![1]]).unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.height(), 1);
        assert_eq!(c.width(), 1);
        assert_eq!(c.get(0, 0), 6);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = build(2, 3, 1);
        let b = build(2, 2, 1);
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            KernelError::DimensionMismatch {
                left_cols: 3,
                right_rows: 2
            }
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_display_fixed_width() {
        let m = build(2, 2, 1);
        assert_eq!(m.to_string(), "    1     2 \n    3     4 \n");
    }

    #[test]
    fn test_empty_matrix() {
        let m = build(0, 0, 1);
        let product = multiply(&m, &m).unwrap();
        assert_eq!(sum(&product), 0);
        assert_eq!(product.to_string(), "");
    }
}
