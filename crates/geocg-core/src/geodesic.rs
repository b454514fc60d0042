//! The geodesic capability: curve evaluation and parallel transport.
//!
//! A geodesic is the manifold analogue of a straight line: the locally
//! shortest curve through a point with a given initial velocity. The
//! optimizer steps along geodesics and uses parallel transport to carry the
//! previous search direction and gradient into the current tangent space,
//! where they can be compared and blended with freshly computed vectors.
//!
//! # Contract
//!
//! After `set(p, v)`:
//!
//! - `point_at(0)` equals `p`;
//! - `parallel_translate(w, 0)` is the identity on `w`;
//! - transport approximately preserves lengths and angles under the metric
//!   (exact preservation depends on the concrete manifold's torsion-free
//!   connection);
//! - `velocity()` returns `v` until the next `set`.
//!
//! A freshly constructed geodesic is bound to a designated base point with
//! zero velocity (the constant curve) until its first `set`.

use crate::tangent::TangentVector;
use crate::types::Scalar;
use std::fmt::Debug;

/// A geodesic curve bound to a (point, initial-velocity) pair.
pub trait Geodesic<T>: Debug
where
    T: Scalar,
{
    /// The manifold point type.
    type Point: Clone + Debug;

    /// The tangent vector type.
    type Vector: TangentVector<T>;

    /// Rebinds the curve to start at `point` with initial velocity
    /// `velocity`.
    fn set(&mut self, point: Self::Point, velocity: Self::Vector);

    /// Returns the point reached after parameter `t` along the bound curve.
    fn point_at(&self, t: T) -> Self::Point;

    /// Carries a tangent vector from the start of the curve to the tangent
    /// space at parameter `t`, preserving its geometric relationship to the
    /// curve.
    fn parallel_translate(&self, vector: &Self::Vector, t: T) -> Self::Vector;

    /// The initial velocity of the most recent `set`.
    fn velocity(&self) -> &Self::Vector;
}
