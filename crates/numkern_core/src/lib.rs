//! `numkern_core` is a small numerical kernel with two independent halves.
//!
//! - **Classify**: IEEE-754 predicates (NaN, signed zero, integer parity) and
//!   a bit-level `FloatParts` decomposition.
//! - **Elementary**: `sqrt`, `pow`, `exp`, `log`, the trigonometric functions
//!   and their inverses, `fabs`, `fmod`, `ceil` and `floor`, built from series
//!   and Newton iterations on top of the classifier.
//! - **Matrix**: dense `f64` matrices with arithmetic, transpose, determinant
//!   by cofactor expansion, cofactor matrix and inverse. Fallible operations
//!   return [`Result`] whose error carries the matrix status code.
pub mod classify;
pub mod elementary;
pub mod error;
pub mod matrix;

pub use elementary::{Elementary, SeriesSettings};
pub use error::{CalcFailure, MatrixError, Result, Status};
pub use matrix::{Matrix, MatrixSettings};
