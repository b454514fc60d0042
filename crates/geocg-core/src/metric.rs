//! Metric tensor and inner product capabilities.
//!
//! A Riemannian metric assigns to each point p of the manifold an inner
//! product ⟨·,·⟩_p on the tangent space T_p ℳ. The [`Metric`] trait plays the
//! role of the metric tensor field, a factory evaluated at a point, and
//! [`InnerProduct`] is the bilinear form it produces there. Gradient norms,
//! conjugacy coefficients, and line-search derivatives are all expressed
//! through these two capabilities.
//!
//! # Contract
//!
//! For the inner product bound to a point p:
//!
//! 1. **Symmetry**: ⟨u,v⟩_p = ⟨v,u⟩_p
//! 2. **Bilinearity**: ⟨αu₁ + βu₂, v⟩_p = α⟨u₁,v⟩_p + β⟨u₂,v⟩_p
//! 3. **Determinism**: repeated evaluation at the same point yields the same
//!    values
//! 4. `norm2(v) == inner(v, v)`
//!
//! Both arguments must belong to the tangent space of the bound point.
//! Degenerate (near-zero) metrics are *not* defended against: callers divide
//! by `norm2`/`inner` results and must tolerate non-finite quotients when
//! the manifold is degenerate at a point.

use crate::tangent::TangentVector;
use crate::types::Scalar;
use std::fmt::Debug;

/// The inner product on the tangent space at a fixed point.
///
/// Values of this type are produced by [`Metric::at`] and are only valid for
/// tangent vectors at the point they were evaluated at.
pub trait InnerProduct<T>
where
    T: Scalar,
{
    /// The tangent vector type this form acts on.
    type Vector: TangentVector<T>;

    /// Computes the inner product ⟨u,v⟩ of two tangent vectors.
    fn inner(&self, u: &Self::Vector, v: &Self::Vector) -> T;

    /// Computes the squared norm ⟨v,v⟩ of a tangent vector.
    fn norm2(&self, v: &Self::Vector) -> T {
        self.inner(v, v)
    }
}

/// A Riemannian metric: the field of inner products over the manifold.
pub trait Metric<T>: Debug
where
    T: Scalar,
{
    /// The manifold point type.
    type Point: Clone + Debug;

    /// The tangent vector type.
    type Vector: TangentVector<T>;

    /// The inner product produced at a point.
    type InnerProduct: InnerProduct<T, Vector = Self::Vector>;

    /// Evaluates the metric tensor at `point`, returning the inner product
    /// valid on the tangent space there.
    fn at(&self, point: &Self::Point) -> Self::InnerProduct;
}
