//! Determinant, cofactors and inverse by cofactor expansion.
//!
//! The determinant expands recursively along the first row. The cost is
//! `O(n!)`, so these operations are only practical for small matrices.

use super::Matrix;
use crate::error::{CalcFailure, MatrixError, Result};

impl Matrix {
    #[tracing::instrument(level = "trace", skip(self), fields(order = self.rows))]
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(expand_determinant(self))
    }

    /// The matrix left after deleting `row` and `column`.
    pub fn minor(&self, row: usize, column: usize) -> Result<Matrix> {
        self.require_square()?;
        if self.rows < 2 || row >= self.rows || column >= self.columns {
            return Err(CalcFailure::NoMinor { row, column }.into());
        }
        Ok(self.minor_unchecked(row, column))
    }

    /// Matrix of signed minor determinants, `(-1)^(k+l) * det(minor(k, l))`.
    ///
    /// A 1x1 matrix has an empty minor whose determinant is taken to be 1,
    /// so its cofactor matrix is `[[1]]`.
    #[tracing::instrument(level = "trace", skip(self), fields(order = self.rows))]
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        self.require_square()?;
        let n = self.rows;
        let mut result = Matrix::zeros(n, n);
        for k in 0..n {
            for l in 0..n {
                let minor = self.minor_unchecked(k, l);
                result[(k, l)] = cofactor_sign(k, l) * expand_determinant(&minor);
            }
        }
        Ok(result)
    }

    /// Inverse via the adjugate: `transpose(cofactors) / det`.
    #[tracing::instrument(level = "trace", skip(self), fields(order = self.rows))]
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            tracing::debug!(order = self.rows, "matrix is singular, no inverse");
            return Err(CalcFailure::Singular.into());
        }
        if self.rows == 1 {
            return Matrix::from_vec(1, 1, vec![1.0 / self.data[0]]);
        }
        self.cofactor_matrix()?.transpose()?.mul_number(1.0 / det)
    }

    fn require_square(&self) -> Result<()> {
        self.validate()?;
        if !self.is_square() {
            return Err(MatrixError::CalcError(CalcFailure::NotSquare {
                rows: self.rows,
                columns: self.columns,
            }));
        }
        Ok(())
    }

    /// Copies everything except `row` and `column` into a new square matrix.
    /// Deleting from a 1x1 matrix yields the internal 0x0 matrix.
    fn minor_unchecked(&self, row: usize, column: usize) -> Matrix {
        let size = self.rows - 1;
        let mut data = Vec::with_capacity(size * size);
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.columns).filter(|&j| j != column) {
                data.push(self[(i, j)]);
            }
        }
        Matrix {
            rows: size,
            columns: size,
            data,
        }
    }
}

/// Square input only. Each minor is dropped as soon as its determinant is
/// known, so at most one temporary per recursion level is alive.
fn expand_determinant(matrix: &Matrix) -> f64 {
    let a = &matrix.data;
    match matrix.rows {
        0 => 1.0,
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        n => (0..n)
            .map(|k| {
                let minor = matrix.minor_unchecked(0, k);
                cofactor_sign(0, k) * a[k] * expand_determinant(&minor)
            })
            .sum(),
    }
}

fn cofactor_sign(row: usize, column: usize) -> f64 {
    if (row + column) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Status;

    fn matrix(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).expect("test matrix should be correct")
    }

    #[test]
    fn determinant_base_cases() {
        assert_eq!(matrix(&[&[-3.5]]).determinant().unwrap(), -3.5);
        assert_eq!(matrix(&[&[1.0, 2.0], &[3.0, 4.0]]).determinant().unwrap(), -2.0);
    }

    #[test]
    fn determinant_expands_along_the_first_row() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 2.0], &[5.0, 2.0, 1.0]]);
        assert_eq!(a.determinant().unwrap(), -40.0);

        let b = matrix(&[
            &[1.0, 0.0, 2.0, -1.0],
            &[3.0, 0.0, 0.0, 5.0],
            &[2.0, 1.0, 4.0, -3.0],
            &[1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(b.determinant().unwrap(), 30.0);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        for n in 1..=6 {
            let det = Matrix::identity(n).unwrap().determinant().unwrap();
            assert_eq!(det, 1.0, "identity of order {n}");
        }
    }

    #[test]
    fn determinant_reports_status() {
        assert_eq!(
            Matrix::default().determinant().unwrap_err(),
            MatrixError::IncorrectMatrix
        );
        let err = Matrix::new(2, 3).unwrap().determinant().unwrap_err();
        assert_eq!(
            err,
            MatrixError::CalcError(CalcFailure::NotSquare {
                rows: 2,
                columns: 3
            })
        );
    }

    #[test]
    fn minor_deletes_row_and_column() {
        let a = Matrix::filled(3, 3, 1.0, 1.0).unwrap();
        let m = a.minor(1, 0).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[2.0, 3.0, 8.0, 9.0]);
    }

    #[test]
    fn minor_rejects_what_it_cannot_build() {
        let single = matrix(&[&[1.0]]);
        assert_eq!(Status::of(&single.minor(0, 0)), Status::CalcError);
        let a = Matrix::new(3, 3).unwrap();
        assert_eq!(
            a.minor(3, 0).unwrap_err(),
            MatrixError::CalcError(CalcFailure::NoMinor { row: 3, column: 0 })
        );
        assert_eq!(Status::of(&Matrix::new(2, 3).unwrap().minor(0, 0)), Status::CalcError);
    }

    #[test]
    fn cofactor_matrix_applies_alternating_signs() {
        let a = matrix(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 2.0], &[5.0, 2.0, 1.0]]);
        let expected = matrix(&[
            &[0.0, 10.0, -20.0],
            &[4.0, -14.0, 8.0],
            &[-8.0, -2.0, 4.0],
        ]);
        assert!(a.cofactor_matrix().unwrap().equals(&expected));
    }

    #[test]
    fn cofactor_matrix_of_single_element_is_one() {
        let c = matrix(&[&[4.0]]).cofactor_matrix().unwrap();
        assert_eq!(c.as_slice(), &[1.0]);
    }

    #[test]
    fn cofactor_matrix_reports_status() {
        assert_eq!(
            Matrix::default().cofactor_matrix().unwrap_err(),
            MatrixError::IncorrectMatrix
        );
        assert_eq!(
            Status::of(&Matrix::new(3, 2).unwrap().cofactor_matrix()),
            Status::CalcError
        );
    }

    #[test]
    fn inverse_of_two_by_two() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let expected = matrix(&[&[-2.0, 1.0], &[1.5, -0.5]]);
        assert!(a.inverse().unwrap().equals(&expected));
    }

    #[test]
    fn inverse_of_three_by_three() {
        let a = matrix(&[&[2.0, 5.0, 7.0], &[6.0, 3.0, 4.0], &[5.0, -2.0, -3.0]]);
        let expected = matrix(&[
            &[1.0, -1.0, 1.0],
            &[-38.0, 41.0, -34.0],
            &[27.0, -29.0, 24.0],
        ]);
        let inverse = a.inverse().unwrap();
        assert!(inverse.equals(&expected));

        let identity = Matrix::identity(3).unwrap();
        assert!(a.mul_matrix(&inverse).unwrap().equals(&identity));
    }

    #[test]
    fn inverse_of_single_element_is_reciprocal() {
        let inverse = matrix(&[&[4.0]]).inverse().unwrap();
        assert_eq!(inverse.as_slice(), &[0.25]);
    }

    #[test]
    fn inverse_rejects_singular_and_malformed_input() {
        let singular = matrix(&[&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(
            singular.inverse().unwrap_err(),
            MatrixError::CalcError(CalcFailure::Singular)
        );
        assert_eq!(Status::of(&matrix(&[&[0.0]]).inverse()), Status::CalcError);
        assert_eq!(
            Status::of(&Matrix::new(2, 3).unwrap().inverse()),
            Status::CalcError
        );
        assert_eq!(
            Matrix::default().inverse().unwrap_err(),
            MatrixError::IncorrectMatrix
        );
    }
}
