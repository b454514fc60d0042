//! The conjugate-gradient driver.
//!
//! [`ConjugateGradient`] owns the geometric capabilities (metric, geodesic,
//! line search) and the β-scheme; the mutable quantities of a single run
//! live in a [`CgState`] created fresh by every [`optimize`] call.
//!
//! One step proceeds as follows:
//!
//! 1. evaluate the gradient at the current point, keeping the previous one;
//! 2. seed the search direction with the negative gradient;
//! 3. after the first iteration, parallel-transport the previous direction
//!    and gradient along the previous geodesic by the previous step size,
//!    and add the transported direction scaled by the scheme's β;
//! 4. bind the geodesic to the current point and direction;
//! 5. line-search the geodesic, using the metric inner product of the
//!    gradient with the transported direction as the derivative;
//! 6. on a non-positive step, report failure without moving;
//! 7. otherwise shift to the point reached at the accepted step.
//!
//! The driver performs no cost-value or gradient-norm convergence check of
//! its own: a run ends either because the line search found no improving
//! step or because the iteration cap was exhausted. Callers wanting a
//! restart-on-stall policy re-invoke [`optimize`] with adjusted starting
//! conditions.
//!
//! [`optimize`]: ConjugateGradient::optimize

use crate::schemes::{BetaArgs, BetaScheme, HestenesStiefel};
use geocg_core::{
    geodesic::Geodesic,
    line_search::LineSearch,
    metric::{InnerProduct, Metric},
    types::Scalar,
};
use std::marker::PhantomData;

/// Mutable state of one optimization run.
///
/// Previous-iteration quantities are `None` until the first step has
/// executed. `last_x` only forms a meaningful pair with `last_grad` once
/// `iteration > 0`.
#[derive(Debug, Clone)]
pub struct CgState<P, V> {
    /// Current point.
    pub x: P,
    /// Point before the last accepted step.
    pub last_x: P,
    /// Gradient at `x`.
    pub grad: Option<V>,
    /// Gradient at `last_x`.
    pub last_grad: Option<V>,
    /// Current search direction.
    pub velocity: Option<V>,
    /// Previous direction transported into the current tangent space.
    pub transported_velocity: Option<V>,
    /// Number of accepted steps so far.
    pub iteration: u32,
}

impl<P, V> CgState<P, V>
where
    P: Clone,
{
    /// Creates the state of a fresh run starting at `initial`.
    pub fn new(initial: P) -> Self {
        Self {
            x: initial.clone(),
            last_x: initial,
            grad: None,
            last_grad: None,
            velocity: None,
            transported_velocity: None,
            iteration: 0,
        }
    }
}

/// Conjugate-gradient optimizer over a Riemannian geometry.
///
/// Generic over the metric `M`, the geodesic `G`, the line search `L`, and
/// the β-scheme `S` (Hestenes–Stiefel by default); all four are selected at
/// construction time and dispatched statically.
///
/// # Example
///
/// ```
/// use geocg_core::line_search::SecantLineSearch;
/// use geocg_core::types::DVector;
/// use geocg_manifolds::Euclidean;
/// use geocg_optim::ConjugateGradient;
///
/// let space = Euclidean::new(2);
/// let mut cg = ConjugateGradient::new(
///     space.metric(),
///     space.geodesic::<f64>(),
///     SecantLineSearch::new(),
/// );
///
/// let minimum = cg.optimize(
///     DVector::from_vec(vec![3.0, 4.0]),
///     &|x: &DVector<f64>| x.norm_squared(),
///     &|x: &DVector<f64>| x * 2.0,
/// );
/// assert!(minimum.norm() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ConjugateGradient<T, M, G, L, S = HestenesStiefel>
where
    T: Scalar,
    M: Metric<T>,
    G: Geodesic<T, Point = M::Point, Vector = M::Vector>,
    L: LineSearch<T>,
    S: BetaScheme,
{
    metric: M,
    geodesic: G,
    line_search: L,
    scheme: S,
    max_steps: u32,
    _scalar: PhantomData<T>,
}

impl<T, M, G, L> ConjugateGradient<T, M, G, L>
where
    T: Scalar,
    M: Metric<T>,
    G: Geodesic<T, Point = M::Point, Vector = M::Vector>,
    L: LineSearch<T>,
{
    /// Creates an optimizer with the Hestenes–Stiefel scheme and the default
    /// iteration cap of 1000.
    pub fn new(metric: M, geodesic: G, line_search: L) -> Self {
        Self {
            metric,
            geodesic,
            line_search,
            scheme: HestenesStiefel,
            max_steps: 1000,
            _scalar: PhantomData,
        }
    }
}

impl<T, M, G, L, S> ConjugateGradient<T, M, G, L, S>
where
    T: Scalar,
    M: Metric<T>,
    G: Geodesic<T, Point = M::Point, Vector = M::Vector>,
    L: LineSearch<T>,
    S: BetaScheme,
{
    /// Replaces the β-scheme.
    pub fn with_scheme<S2: BetaScheme>(self, scheme: S2) -> ConjugateGradient<T, M, G, L, S2> {
        ConjugateGradient {
            metric: self.metric,
            geodesic: self.geodesic,
            line_search: self.line_search,
            scheme,
            max_steps: self.max_steps,
            _scalar: PhantomData,
        }
    }

    /// Sets the hard iteration cap.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Returns the iteration cap.
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Returns the optimizer's name, e.g. "Riemannian CG-HS".
    pub fn name(&self) -> String {
        format!("Riemannian {}", self.scheme.name())
    }

    /// Performs one iteration on `state`.
    ///
    /// Returns `true` when the point advanced, `false` when the line search
    /// found no improving step (in which case `state.x` is unchanged and the
    /// run is over).
    pub fn step<F, DF>(
        &mut self,
        state: &mut CgState<M::Point, M::Vector>,
        cost: &F,
        gradient: &DF,
    ) -> bool
    where
        F: Fn(&M::Point) -> T,
        DF: Fn(&M::Point) -> M::Vector,
    {
        // Update the gradient pair.
        let grad = gradient(&state.x);
        state.last_grad = state.grad.take();

        // The direction is the negative gradient bent by the transported
        // previous direction.
        let mut velocity = -grad.clone();
        if state.iteration > 0 {
            if let Some(last_grad) = state.last_grad.as_ref() {
                // The geodesic is still bound to the previous step; alpha is
                // the step size it was traversed by.
                let alpha = self.line_search.alpha();
                let transported_velocity = self
                    .geodesic
                    .parallel_translate(self.geodesic.velocity(), alpha);
                let transported_grad = self.geodesic.parallel_translate(last_grad, alpha);
                let beta: T = self.scheme.beta(&BetaArgs {
                    metric: &self.metric,
                    x: &state.x,
                    last_x: &state.last_x,
                    grad: &grad,
                    last_grad,
                    transported_grad: &transported_grad,
                    transported_velocity: &transported_velocity,
                });
                velocity = velocity + transported_velocity.clone() * beta;
                state.transported_velocity = Some(transported_velocity);
            }
        }

        self.geodesic.set(state.x.clone(), velocity.clone());
        state.grad = Some(grad);
        state.velocity = Some(velocity);

        // Search along the geodesic; the derivative of cost ∘ geodesic is
        // the inner product of the gradient with the transported velocity,
        // both taken at the point reached.
        let geodesic = &self.geodesic;
        let metric = &self.metric;
        let alpha = self.line_search.search(
            |t| cost(&geodesic.point_at(t)),
            |t| {
                let xt = geodesic.point_at(t);
                let transported = geodesic.parallel_translate(geodesic.velocity(), t);
                metric.at(&xt).inner(&gradient(&xt), &transported)
            },
        );

        if !(alpha > T::zero()) {
            return false;
        }

        state.last_x = std::mem::replace(&mut state.x, self.geodesic.point_at(alpha));
        state.iteration += 1;
        true
    }

    /// Minimizes `cost` starting from `initial` and returns the final point.
    ///
    /// Resets the line search, then drives [`step`](Self::step) until it
    /// reports no improving step or `max_steps` iterations have been
    /// accepted. The cap is a hard bound, not a convergence tolerance.
    pub fn optimize<F, DF>(&mut self, initial: M::Point, cost: &F, gradient: &DF) -> M::Point
    where
        F: Fn(&M::Point) -> T,
        DF: Fn(&M::Point) -> M::Vector,
    {
        self.line_search.reset();
        let mut state = CgState::new(initial);
        while state.iteration < self.max_steps {
            if !self.step(&mut state, cost, gradient) {
                break;
            }
        }
        state.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geocg_core::line_search::SecantLineSearch;
    use geocg_core::types::DVector;
    use geocg_manifolds::Euclidean;

    fn optimizer(
        dim: usize,
    ) -> ConjugateGradient<
        f64,
        geocg_manifolds::EuclideanMetric,
        geocg_manifolds::EuclideanGeodesic<f64>,
        SecantLineSearch<f64>,
    > {
        let space = Euclidean::new(dim);
        ConjugateGradient::new(space.metric(), space.geodesic(), SecantLineSearch::new())
    }

    #[test]
    fn test_first_step_is_steepest_descent() {
        let mut cg = optimizer(2);
        let mut state = CgState::new(DVector::from_vec(vec![3.0, 4.0]));

        let advanced = cg.step(
            &mut state,
            &|x: &DVector<f64>| x.norm_squared(),
            &|x: &DVector<f64>| x * 2.0,
        );

        assert!(advanced);
        let velocity = state.velocity.as_ref().unwrap();
        assert_relative_eq!(velocity[0], -6.0);
        assert_relative_eq!(velocity[1], -8.0);
        assert_eq!(state.iteration, 1);
    }

    #[test]
    fn test_failed_step_leaves_point_unchanged() {
        let mut cg = optimizer(2);
        // Start at the minimum: the gradient vanishes and no improving step
        // exists.
        let mut state = CgState::new(DVector::from_vec(vec![0.0, 0.0]));

        let advanced = cg.step(
            &mut state,
            &|x: &DVector<f64>| x.norm_squared(),
            &|x: &DVector<f64>| x * 2.0,
        );

        assert!(!advanced);
        assert_eq!(state.x, DVector::from_vec(vec![0.0, 0.0]));
        assert_eq!(state.iteration, 0);
    }

    #[test]
    fn test_builder() {
        let cg = optimizer(2).with_max_steps(7);
        assert_eq!(cg.max_steps(), 7);
        assert_eq!(cg.name(), "Riemannian CG-HS");

        let cg = cg.with_scheme(crate::schemes::DaiYuan);
        assert_eq!(cg.name(), "Riemannian CG-DY");
    }

    #[test]
    fn test_optimize_quadratic() {
        let mut cg = optimizer(3);
        let minimum = cg.optimize(
            DVector::from_vec(vec![1.0, -2.0, 0.5]),
            &|x: &DVector<f64>| x.norm_squared(),
            &|x: &DVector<f64>| x * 2.0,
        );
        assert!(minimum.norm() < 1e-8);
    }
}
