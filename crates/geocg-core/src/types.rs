//! Scalar abstraction and type aliases.
//!
//! The workspace is generic over the floating-point type; `f32` and `f64`
//! both implement [`Scalar`]. Concrete geometries represent points and
//! tangent vectors as [`DVector`]s.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in optimization (f32 or f64).
///
/// Combines the numeric traits the optimizer and line searches need. Methods
/// shared between `RealField` and `Float` are called via fully-qualified
/// paths (`<T as Float>::sqrt(x)`) to avoid ambiguity.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Smallest step the default line search will probe before giving up.
    const MIN_STEP_SIZE: Self;

    /// Largest step the default line search will probe.
    const MAX_STEP_SIZE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails. Use `try_from_f64` for a
    /// non-panicking version.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Try to convert from f64.
    fn try_from_f64(v: f64) -> Option<Self> {
        <Self as FromPrimitive>::from_f64(v)
    }

    /// Convert to f64 (for display).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails. Use `try_to_f64` for a non-panicking
    /// version.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }

    /// Try to convert to f64.
    fn try_to_f64(self) -> Option<f64> {
        num_traits::cast(self)
    }
}

impl Scalar for f32 {
    const MIN_STEP_SIZE: Self = 1e-8;
    const MAX_STEP_SIZE: Self = 1e3;
}

impl Scalar for f64 {
    const MIN_STEP_SIZE: Self = 1e-12;
    const MAX_STEP_SIZE: Self = 1e6;
}

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_constants() {
        assert!(f32::MIN_STEP_SIZE < f32::MAX_STEP_SIZE);
        assert!(f64::MIN_STEP_SIZE < f64::MAX_STEP_SIZE);
        assert!(f64::MIN_STEP_SIZE > 0.0);
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f64 = 3.14159;
        let val_f32 = <f32 as Scalar>::from_f64(val_f64);
        assert_relative_eq!(val_f32 as f64, val_f64, epsilon = 1e-6);

        let back_f64 = val_f32.to_f64();
        assert_relative_eq!(back_f64, val_f32 as f64);

        assert_eq!(<f64 as Scalar>::try_from_f64(1.5), Some(1.5));
    }

    #[test]
    fn test_type_aliases() {
        let _v: DVector<f64> = DVector::zeros(5);
        let _m: DMatrix<f64> = DMatrix::identity(3, 3);
    }
}
