mod algebra;
mod display;

use crate::error::{CalcFailure, MatrixError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Elements closer than this compare equal in [`Matrix::equals`].
pub const EQUALITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixSettings {
    /// Strict upper bound on the per-element difference of equal matrices.
    pub equality_tolerance: f64,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self {
            equality_tolerance: EQUALITY_TOLERANCE,
        }
    }
}

/// A dense row-major matrix. The default value is the empty, incorrect
/// matrix.
///
/// A matrix is *correct* when both dimensions are positive and it holds
/// exactly `rows * columns` elements. Operations reject incorrect operands
/// with [`MatrixError::IncorrectMatrix`] before reading any element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocates a zero-filled `rows x columns` matrix.
    pub fn new(rows: i32, columns: i32) -> Result<Self> {
        let rows = positive_dimension(rows)?;
        let columns = positive_dimension(columns)?;
        Ok(Self::zeros(rows, columns))
    }

    /// Builds a matrix from row-major `data`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        let matrix = Self {
            rows,
            columns,
            data,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != columns) {
            return Err(MatrixError::IncorrectMatrix);
        }
        let data = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::from_vec(rows.len(), columns, data)
    }

    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::IncorrectMatrix);
        }
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = 1.0;
        }
        Ok(matrix)
    }

    /// A matrix whose elements, in row-major order, are `start`,
    /// `start + step`, `start + 2 * step`, ...
    pub fn filled(rows: i32, columns: i32, start: f64, step: f64) -> Result<Self> {
        let mut matrix = Self::new(rows, columns)?;
        let mut value = start;
        for element in &mut matrix.data {
            *element = value;
            value += step;
        }
        Ok(matrix)
    }

    /// Caller guarantees both dimensions are positive.
    pub(crate) fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![0.0; rows * columns],
        }
    }

    /// Frees the storage and returns the matrix to the empty state. Calling
    /// it again on an empty matrix does nothing.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    pub fn is_correct(&self) -> bool {
        self.rows > 0
            && self.columns > 0
            && self.rows.checked_mul(self.columns) == Some(self.data.len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_correct() {
            Ok(())
        } else {
            Err(MatrixError::IncorrectMatrix)
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.offset(row, column).map(|i| self.data[i])
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.validate()?;
        let i = self
            .offset(row, column)
            .ok_or(CalcFailure::OutOfBounds { row, column })?;
        self.data[i] = value;
        Ok(())
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (self.is_correct() && row < self.rows && column < self.columns)
            .then(|| row * self.columns + column)
    }

    /// Element-wise comparison with [`EQUALITY_TOLERANCE`]. Incorrect
    /// operands and mismatched shapes are never equal.
    pub fn equals(&self, other: &Matrix) -> bool {
        self.approx_eq(other, MatrixSettings::default().equality_tolerance)
    }

    /// True when every pair of corresponding elements differs by strictly
    /// less than `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.is_correct()
            && other.is_correct()
            && self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() < tolerance)
    }

    pub fn add_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn mul_number(&self, number: f64) -> Result<Matrix> {
        self.validate()?;
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|a| a * number).collect(),
        })
    }

    pub fn mul_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.validate()?;
        other.validate()?;
        if self.columns != other.rows {
            return Err(self.mismatch(other));
        }

        let mut result = Matrix::zeros(self.rows, other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                let mut accum = 0.0;
                for k in 0..self.columns {
                    accum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = accum;
            }
        }
        Ok(result)
    }

    pub fn transpose(&self) -> Result<Matrix> {
        self.validate()?;
        let mut result = Matrix::zeros(self.columns, self.rows);
        for r in 0..self.rows {
            for c in 0..self.columns {
                result[(c, r)] = self[(r, c)];
            }
        }
        Ok(result)
    }

    fn zip_with(&self, other: &Matrix, op: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        self.validate()?;
        other.validate()?;
        if self.shape() != other.shape() {
            return Err(self.mismatch(other));
        }
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }

    fn mismatch(&self, other: &Matrix) -> MatrixError {
        CalcFailure::DimensionMismatch {
            left: self.shape(),
            right: other.shape(),
        }
        .into()
    }
}

fn positive_dimension(value: i32) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(MatrixError::IncorrectMatrix)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &mut self.data[row * self.columns + column]
    }
}
