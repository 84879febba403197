//! Error types for oxidt

use thiserror::Error;

/// Result type for oxidt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxidt operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Matrix inversion or linear solve on a non-invertible matrix
    #[error("singular matrix: {0}")]
    SingularMatrix(String),

    /// Reciprocal or element-wise division hit an exact zero
    #[error("division by zero: {0}")]
    DivideByZero(String),

    /// Non-conforming vector or matrix dimensions
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Unrecognized EXIF LightSource tag
    #[error("unknown light source tag: {0}")]
    UnknownIlluminant(u16),
}
