//! Vector-space operations required of tangent vectors.
//!
//! Tangent vectors at a point form a linear space: the optimizer only ever
//! adds them, scales them, and negates them. Tangent vectors at *different*
//! points are not comparable except through parallel transport (see
//! [`Geodesic`](crate::geodesic::Geodesic)).

use crate::types::Scalar;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Operations the optimizer performs on tangent vectors.
///
/// This is a bundle trait: anything that is cloneable and supports by-value
/// addition, subtraction, negation, and scalar multiplication qualifies
/// automatically, in particular `nalgebra`'s `DVector<T>`.
pub trait TangentVector<T>:
    Clone
    + Debug
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<T, Output = Self>
where
    T: Scalar,
{
}

impl<T, V> TangentVector<T> for V
where
    T: Scalar,
    V: Clone
        + Debug
        + Neg<Output = V>
        + Add<Output = V>
        + Sub<Output = V>
        + Mul<T, Output = V>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DVector;

    fn assert_tangent<T: Scalar, V: TangentVector<T>>() {}

    #[test]
    fn test_dvector_is_tangent() {
        assert_tangent::<f64, DVector<f64>>();
        assert_tangent::<f32, DVector<f32>>();
    }

    #[test]
    fn test_ops_compose() {
        let u = DVector::from_vec(vec![1.0, 2.0]);
        let v = DVector::from_vec(vec![3.0, -1.0]);
        let w = -u.clone() + v.clone() * 2.0 - u.clone();
        assert_eq!(w, DVector::from_vec(vec![4.0, -6.0]));
    }
}
