//! Flat Euclidean geometry.
//!
//! The simplest geometry the optimizer can run on: points and tangent
//! vectors are both plain n-vectors, geodesics are straight lines
//! `γ(t) = x + t·v`, and parallel transport is the identity. Plugging this
//! geometry into the conjugate-gradient driver recovers classical nonlinear
//! CG in ℝⁿ.

use geocg_core::{
    geodesic::Geodesic,
    metric::{InnerProduct, Metric},
    types::{DVector, Scalar},
};

/// Euclidean space ℝⁿ.
#[derive(Debug, Clone)]
pub struct Euclidean {
    dim: usize,
}

impl Euclidean {
    /// Creates the space ℝⁿ.
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Returns the dimension n.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Returns the dot-product metric.
    pub fn metric(&self) -> EuclideanMetric {
        EuclideanMetric
    }

    /// Returns a straight-line geodesic bound to the origin.
    pub fn geodesic<T: Scalar>(&self) -> EuclideanGeodesic<T> {
        EuclideanGeodesic::new(self.dim)
    }
}

/// The standard dot product, identical at every point.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanInner;

impl<T> InnerProduct<T> for EuclideanInner
where
    T: Scalar,
{
    type Vector = DVector<T>;

    fn inner(&self, u: &DVector<T>, v: &DVector<T>) -> T {
        u.dot(v)
    }
}

/// The flat metric on ℝⁿ.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMetric;

impl<T> Metric<T> for EuclideanMetric
where
    T: Scalar,
{
    type Point = DVector<T>;
    type Vector = DVector<T>;
    type InnerProduct = EuclideanInner;

    fn at(&self, _point: &DVector<T>) -> EuclideanInner {
        EuclideanInner
    }
}

/// A diagonally-weighted inner product, ⟨u,v⟩ = Σᵢ wᵢ uᵢ vᵢ.
#[derive(Debug, Clone)]
pub struct WeightedInner<T>
where
    T: Scalar,
{
    weights: DVector<T>,
}

impl<T> InnerProduct<T> for WeightedInner<T>
where
    T: Scalar,
{
    type Vector = DVector<T>;

    fn inner(&self, u: &DVector<T>, v: &DVector<T>) -> T {
        u.component_mul(&self.weights).dot(v)
    }
}

/// A constant diagonal metric tensor on ℝⁿ.
///
/// Geodesics of a constant metric are still straight lines, so this metric
/// pairs with [`EuclideanGeodesic`]. Zero weights make the metric degenerate;
/// by the workspace-wide convention this is not defended against here, and a
/// degenerate direction surfaces as a non-finite conjugacy coefficient that
/// fails the subsequent line search.
#[derive(Debug, Clone)]
pub struct WeightedMetric<T>
where
    T: Scalar,
{
    weights: DVector<T>,
}

impl<T> WeightedMetric<T>
where
    T: Scalar,
{
    /// Creates a diagonal metric with the given weights.
    pub fn new(weights: DVector<T>) -> Self {
        Self { weights }
    }

    /// Returns the diagonal weights.
    pub fn weights(&self) -> &DVector<T> {
        &self.weights
    }
}

impl<T> Metric<T> for WeightedMetric<T>
where
    T: Scalar,
{
    type Point = DVector<T>;
    type Vector = DVector<T>;
    type InnerProduct = WeightedInner<T>;

    fn at(&self, _point: &DVector<T>) -> WeightedInner<T> {
        WeightedInner {
            weights: self.weights.clone(),
        }
    }
}

/// Straight-line motion in ℝⁿ: `γ(t) = x + t·v`.
#[derive(Debug, Clone)]
pub struct EuclideanGeodesic<T>
where
    T: Scalar,
{
    base: DVector<T>,
    velocity: DVector<T>,
}

impl<T> EuclideanGeodesic<T>
where
    T: Scalar,
{
    /// Creates the constant curve at the origin of ℝⁿ.
    pub fn new(dim: usize) -> Self {
        Self {
            base: DVector::zeros(dim),
            velocity: DVector::zeros(dim),
        }
    }
}

impl<T> Geodesic<T> for EuclideanGeodesic<T>
where
    T: Scalar,
{
    type Point = DVector<T>;
    type Vector = DVector<T>;

    fn set(&mut self, point: DVector<T>, velocity: DVector<T>) {
        self.base = point;
        self.velocity = velocity;
    }

    fn point_at(&self, t: T) -> DVector<T> {
        &self.base + &self.velocity * t
    }

    // Flat space: every tangent space is the same, transport is the
    // identity.
    fn parallel_translate(&self, vector: &DVector<T>, _t: T) -> DVector<T> {
        vector.clone()
    }

    fn velocity(&self) -> &DVector<T> {
        &self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_straight_line() {
        let mut geodesic = Euclidean::new(2).geodesic::<f64>();
        geodesic.set(
            DVector::from_vec(vec![1.0, 2.0]),
            DVector::from_vec(vec![-1.0, 0.5]),
        );

        assert_eq!(geodesic.point_at(0.0), DVector::from_vec(vec![1.0, 2.0]));
        let reached = geodesic.point_at(2.0);
        assert_relative_eq!(reached[0], -1.0);
        assert_relative_eq!(reached[1], 3.0);
    }

    #[test]
    fn test_transport_is_identity() {
        let mut geodesic = EuclideanGeodesic::<f64>::new(3);
        geodesic.set(
            DVector::from_vec(vec![0.0, 0.0, 1.0]),
            DVector::from_vec(vec![1.0, 1.0, 0.0]),
        );
        let w = DVector::from_vec(vec![0.5, -2.0, 3.0]);
        assert_eq!(geodesic.parallel_translate(&w, 0.7), w);
    }

    #[test]
    fn test_dot_metric() {
        let metric = EuclideanMetric;
        let ip = metric.at(&DVector::<f64>::zeros(2));
        let u = DVector::from_vec(vec![3.0, 4.0]);
        assert_relative_eq!(ip.norm2(&u), 25.0);
        assert_relative_eq!(
            ip.inner(&u, &DVector::from_vec(vec![1.0, -1.0])),
            -1.0
        );
    }

    #[test]
    fn test_weighted_metric() {
        let metric = WeightedMetric::new(DVector::from_vec(vec![2.0, 0.5]));
        let ip = metric.at(&DVector::<f64>::zeros(2));
        let u = DVector::from_vec(vec![1.0, 2.0]);
        let v = DVector::from_vec(vec![3.0, 4.0]);
        // 2*1*3 + 0.5*2*4
        assert_relative_eq!(ip.inner(&u, &v), 10.0);
        assert_relative_eq!(ip.norm2(&u), 4.0);
    }
}
