use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the matrix operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Storage is missing or inconsistent, or a dimension is not positive.
    #[error("incorrect matrix")]
    IncorrectMatrix,

    /// The operands are well formed but the operation is undefined for them.
    #[error("calculation error: {0}")]
    CalcError(#[from] CalcFailure),
}

/// Why a calculation on well-formed matrices was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcFailure {
    #[error("incompatible dimensions {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("expected a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    #[error("matrix is singular")]
    Singular,

    #[error("no minor exists at ({row}, {column})")]
    NoMinor { row: usize, column: usize },

    #[error("index ({row}, {column}) is out of bounds")]
    OutOfBounds { row: usize, column: usize },
}

/// The three-valued status code of the matrix API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    IncorrectMatrix = 1,
    CalcError = 2,
}

impl Status {
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl MatrixError {
    pub fn status(&self) -> Status {
        match self {
            MatrixError::IncorrectMatrix => Status::IncorrectMatrix,
            MatrixError::CalcError(_) => Status::CalcError,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
