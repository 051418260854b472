use std::fmt;

use crate::error::{Error, Operation, Result};

/// An immutable three-dimensional vector with finite coordinates.
///
/// Every instance holds finite `x`, `y` and `z` values. Construction rejects
/// NaN and infinite coordinates, and every operation either returns a fresh
/// vector (or scalar) or an [`Error`].
///
/// Equality is exact component-wise IEEE comparison with no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from three coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] if any coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        if x.is_finite() && y.is_finite() && z.is_finite() {
            Ok(Self { x, y, z })
        } else {
            tracing::debug!(x, y, z, "rejected non-finite coordinates");
            Err(Error::NonFinite { x, y, z })
        }
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Component-wise sum of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if any component of the sum is infinite.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        Self::from_arithmetic(
            Operation::Addition,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Component-wise difference of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if any component of the difference is
    /// infinite.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        Self::from_arithmetic(
            Operation::Subtraction,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }

    /// Scales every component by `multiplier`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if any scaled component is infinite, or
    /// [`Error::NonFinite`] if a component comes out as NaN (a NaN multiplier,
    /// or zero times infinity).
    pub fn checked_mul(&self, multiplier: f64) -> Result<Self> {
        Self::from_arithmetic(
            Operation::Multiplication,
            self.x * multiplier,
            self.y * multiplier,
            self.z * multiplier,
        )
    }

    /// The Euclidean norm, `sqrt(x² + y² + z²)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the sum of squares overflows to infinity.
    #[allow(clippy::suboptimal_flops)]
    pub fn length(&self) -> Result<f64> {
        finite_result(
            Operation::Length,
            (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt(),
        )
    }

    /// Infinite components are an overflow; anything else still has to pass
    /// the constructor.
    fn from_arithmetic(operation: Operation, x: f64, y: f64, z: f64) -> Result<Self> {
        if x.is_infinite() || y.is_infinite() || z.is_infinite() {
            tracing::debug!(%operation, x, y, z, "vector arithmetic overflowed");
            return Err(Error::Overflow(operation));
        }
        Self::new(x, y, z)
    }
}

fn finite_result(operation: Operation, value: f64) -> Result<f64> {
    if value.is_infinite() {
        tracing::debug!(%operation, "scalar result overflowed");
        return Err(Error::Overflow(operation));
    }
    Ok(value)
}

/// Computes `sqrt(a.x·b.x + a.y·b.y + a.z·b.z)`.
///
/// Note that this is the square root of the dot product, not the dot product
/// itself. A negative dot product yields NaN, which is returned as-is.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the result is infinite.
#[allow(clippy::suboptimal_flops)]
pub fn scalar_product(a: &Vector3D, b: &Vector3D) -> Result<f64> {
    finite_result(
        Operation::ScalarProduct,
        (a.x * b.x + a.y * b.y + a.z * b.z).sqrt(),
    )
}

/// The cross product `a × b`.
///
/// # Errors
///
/// The result goes through [`Vector3D::new`], so a component that overflows
/// is reported as [`Error::NonFinite`] rather than [`Error::Overflow`].
#[allow(clippy::suboptimal_flops)]
pub fn vector_product(a: &Vector3D, b: &Vector3D) -> Result<Vector3D> {
    Vector3D::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

impl TryFrom<[f64; 3]> for Vector3D {
    type Error = Error;

    fn try_from([x, y, z]: [f64; 3]) -> Result<Self> {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Vector3D {
    type Error = Error;

    /// Creates a vector from a slice of coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongLength`] unless the slice holds exactly three
    /// values, and [`Error::NonFinite`] if any of them is NaN or infinite.
    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, z] => Self::new(x, y, z),
            _ => {
                tracing::debug!(len = values.len(), "rejected coordinate list");
                Err(Error::WrongLength(values.len()))
            }
        }
    }
}

impl TryFrom<Vec<f64>> for Vector3D {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::try_from(values.as_slice())
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(value: Vector3D) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Add for Vector3D {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(&other)
    }
}

impl std::ops::Add for &Vector3D {
    type Output = Result<Vector3D>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl std::ops::Sub for Vector3D {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl std::ops::Sub for &Vector3D {
    type Output = Result<Vector3D>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}

impl std::ops::Mul<f64> for Vector3D {
    type Output = Result<Self>;

    fn mul(self, multiplier: f64) -> Self::Output {
        self.checked_mul(multiplier)
    }
}

impl std::ops::Mul<f64> for &Vector3D {
    type Output = Result<Vector3D>;

    fn mul(self, multiplier: f64) -> Self::Output {
        self.checked_mul(multiplier)
    }
}
