//! The unit sphere S^{n-1} = {x ∈ ℝⁿ : ‖x‖ = 1}.
//!
//! The sphere is the canonical curved geometry for exercising the optimizer:
//! geodesics are great circles with a closed-form expression, and parallel
//! transport along them has a closed form as well, namely a rotation in the
//! plane spanned by the base point and the direction of motion that leaves
//! the orthogonal complement fixed.
//!
//! # Mathematical properties
//!
//! - **Tangent space**: T_x S^{n-1} = {v ∈ ℝⁿ : xᵀv = 0}
//! - **Metric**: inherited from the ambient space (canonical metric)
//! - **Geodesic**: γ(t) = cos(‖v‖t)·x + sin(‖v‖t)·v/‖v‖
//! - **Transport** of w ∈ T_x along γ: the component of w along v̂ rotates
//!   with the curve, w − ⟨w,v̂⟩v̂ is carried unchanged

use geocg_core::{
    error::{GeometryError, Result},
    geodesic::Geodesic,
    metric::Metric,
    types::{DVector, Scalar},
};
use num_traits::Float;
use rand_distr::{Distribution, StandardNormal};

use crate::euclidean::EuclideanInner;

/// The unit sphere S^{n-1} embedded in ℝⁿ.
#[derive(Debug, Clone)]
pub struct Sphere {
    ambient_dim: usize,
}

impl Sphere {
    /// Creates the sphere S^{n-1} embedded in ℝⁿ.
    ///
    /// # Errors
    ///
    /// Returns an error if `ambient_dim` < 2.
    pub fn new(ambient_dim: usize) -> Result<Self> {
        if ambient_dim < 2 {
            return Err(GeometryError::invalid_point(
                "Sphere requires ambient dimension >= 2",
            ));
        }
        Ok(Self { ambient_dim })
    }

    /// Returns the ambient dimension n.
    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dim
    }

    /// Returns the intrinsic dimension n-1.
    pub fn dimension(&self) -> usize {
        self.ambient_dim - 1
    }

    /// Returns the canonical (ambient dot product) metric.
    pub fn metric(&self) -> SphereMetric {
        SphereMetric
    }

    /// Returns a great-circle geodesic, initially the constant curve at the
    /// first basis vector.
    pub fn geodesic<T: Scalar>(&self) -> SphereGeodesic<T> {
        SphereGeodesic::new(self.ambient_dim)
    }

    /// Checks whether a point lies on the sphere within `tol`.
    pub fn contains<T: Scalar>(&self, point: &DVector<T>, tol: T) -> bool {
        point.len() == self.ambient_dim
            && approx::abs_diff_eq!(point.norm_squared(), T::one(), epsilon = tol)
    }

    /// Checks whether a vector is tangent at `point` within `tol`.
    pub fn is_tangent_at<T: Scalar>(
        &self,
        point: &DVector<T>,
        vector: &DVector<T>,
        tol: T,
    ) -> bool {
        vector.len() == self.ambient_dim && <T as Float>::abs(point.dot(vector)) < tol
    }

    /// Projects an ambient vector onto the sphere.
    ///
    /// The zero vector has no nearest point; it is mapped to the first basis
    /// vector.
    pub fn project_point<T: Scalar>(&self, point: &DVector<T>) -> DVector<T> {
        let norm = point.norm();
        if norm < <T as Float>::epsilon() {
            let mut result = DVector::zeros(self.ambient_dim);
            result[0] = T::one();
            result
        } else {
            point / norm
        }
    }

    /// Projects an ambient vector onto the tangent space at `point`:
    /// v − ⟨v,x⟩x.
    pub fn project_tangent<T: Scalar>(
        &self,
        point: &DVector<T>,
        vector: &DVector<T>,
    ) -> DVector<T> {
        vector - point * point.dot(vector)
    }

    /// Converts a Euclidean gradient into the Riemannian gradient at
    /// `point` by tangent projection.
    pub fn euclidean_to_riemannian_gradient<T: Scalar>(
        &self,
        point: &DVector<T>,
        gradient: &DVector<T>,
    ) -> DVector<T> {
        self.project_tangent(point, gradient)
    }

    /// Samples a point uniformly on the sphere.
    pub fn random_point<T: Scalar>(&self) -> DVector<T> {
        let mut rng = rand::thread_rng();
        let mut point = DVector::zeros(self.ambient_dim);
        for i in 0..self.ambient_dim {
            let val: f64 = StandardNormal.sample(&mut rng);
            point[i] = <T as Scalar>::from_f64(val);
        }
        self.project_point(&point)
    }

    /// Samples a tangent vector at `point`, normalized to unit length when
    /// possible.
    pub fn random_tangent<T: Scalar>(&self, point: &DVector<T>) -> DVector<T> {
        let mut rng = rand::thread_rng();
        let mut ambient = DVector::zeros(self.ambient_dim);
        for i in 0..self.ambient_dim {
            let val: f64 = StandardNormal.sample(&mut rng);
            ambient[i] = <T as Scalar>::from_f64(val);
        }
        let tangent = self.project_tangent(point, &ambient);
        let norm = tangent.norm();
        if norm > <T as Float>::epsilon() {
            tangent / norm
        } else {
            tangent
        }
    }
}

/// The canonical metric on the sphere: the ambient dot product restricted to
/// each tangent space.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereMetric;

impl<T> Metric<T> for SphereMetric
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

/// A great circle on the sphere, bound to a (point, velocity) pair.
///
/// The velocity need not be unit length; the curve parameter is scaled so
/// that `point_at(t)` has traveled arc length ‖v‖·t.
#[derive(Debug, Clone)]
pub struct SphereGeodesic<T>
where
    T: Scalar,
{
    base: DVector<T>,
    velocity: DVector<T>,
}

impl<T> SphereGeodesic<T>
where
    T: Scalar,
{
    /// Creates the constant curve at the first basis vector of ℝⁿ.
    pub fn new(ambient_dim: usize) -> Self {
        let mut base = DVector::zeros(ambient_dim);
        base[0] = T::one();
        Self {
            base,
            velocity: DVector::zeros(ambient_dim),
        }
    }
}

impl<T> Geodesic<T> for SphereGeodesic<T>
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
        let speed = self.velocity.norm();
        if speed <= <T as Float>::epsilon() {
            return self.base.clone();
        }
        let theta = speed * t;
        &self.base * <T as Float>::cos(theta)
            + &self.velocity * (<T as Float>::sin(theta) / speed)
    }

    fn parallel_translate(&self, vector: &DVector<T>, t: T) -> DVector<T> {
        let speed = self.velocity.norm();
        if speed <= <T as Float>::epsilon() {
            return vector.clone();
        }
        let direction = &self.velocity / speed;
        let along = vector.dot(&direction);
        let theta = speed * t;
        // Rotate the in-plane component, keep the rest.
        let rotated =
            &direction * <T as Float>::cos(theta) - &self.base * <T as Float>::sin(theta);
        vector - &direction * along + rotated * along
    }

    fn velocity(&self) -> &DVector<T> {
        &self.velocity
    }
}
