use std::fmt;

use thiserror::Error;

/// The arithmetic operation that produced an out-of-range result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Length,
    ScalarProduct,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Addition => "sum of vector coordinates",
            Self::Subtraction => "difference of vector coordinates",
            Self::Multiplication => "multiplication of vector coordinates",
            Self::Length => "length of the vector",
            Self::ScalarProduct => "scalar product",
        };
        f.write_str(name)
    }
}

/// Broad classification of an [`Error`].
///
/// Callers that only care whether the input was bad or the result was out of
/// range can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inputs were rejected before any arithmetic took place.
    InvalidArgument,
    /// The inputs were finite, but the result was not.
    Overflow,
}

/// Errors produced when constructing or operating on a [`Vector3D`](crate::Vector3D).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// At least one coordinate was NaN or infinite.
    #[error("coordinates cannot be NaN or infinite (got ({x}, {y}, {z}))")]
    NonFinite { x: f64, y: f64, z: f64 },

    /// A collection of coordinates did not hold exactly three values.
    #[error("expected exactly three coordinates, got {0}")]
    WrongLength(usize),

    /// An operation on finite inputs produced an infinite result.
    #[error("{0} is infinity")]
    Overflow(Operation),
}

impl Error {
    /// Returns the broad kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonFinite { .. } | Self::WrongLength(_) => ErrorKind::InvalidArgument,
            Self::Overflow(_) => ErrorKind::Overflow,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
