//! An immutable, validated three-dimensional vector.
//!
//! [`Vector3D`] only ever holds finite coordinates. Arithmetic that would
//! leave the representable range fails with an [`Error`] instead of producing
//! an infinite or NaN component.
//!
//! # Example
//! ```
//! use vector_3d::{vector_product, ErrorKind, Vector3D};
//!
//! let a = Vector3D::new(1.0, 2.0, 3.0)?;
//! let b = Vector3D::new(4.0, 5.0, 6.0)?;
//!
//! assert_eq!((a + b)?, Vector3D::new(5.0, 7.0, 9.0)?);
//! assert_eq!(vector_product(&a, &b)?, Vector3D::new(-3.0, 6.0, -3.0)?);
//!
//! let max = Vector3D::new(f64::MAX, f64::MAX, f64::MAX)?;
//! assert_eq!((max + max).unwrap_err().kind(), ErrorKind::Overflow);
//! # Ok::<(), vector_3d::Error>(())
//! ```

mod error;
pub use error::{Error, ErrorKind, Operation, Result};

mod vector;
pub use vector::{scalar_product, vector_product, Vector3D};
