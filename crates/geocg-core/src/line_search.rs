//! Line search algorithms over a geodesic parameter.
//!
//! The optimizer restricts the cost to a geodesic, producing a scalar
//! function φ(t) = f(γ(t)) together with its derivative
//! φ′(t) = ⟨grad f(γ(t)), P_t γ′⟩ (the metric inner product of the gradient
//! with the transported velocity). A line search picks the step size along
//! that curve.
//!
//! # Contract
//!
//! `search(value, derivative)` returns the accepted step `alpha > 0`, or a
//! non-positive sentinel when no improving step exists: the direction is not
//! a descent direction, the slope is non-finite, or no probed step decreases
//! the cost. That sentinel is the optimizer's sole convergence/failure
//! signal.
//!
//! `reset()` clears any memory carried between searches (the warm-start step
//! size) and must be invoked once per optimization run. `alpha()` keeps the
//! most recently *accepted* step readable; the driver consumes it to
//! parallel-transport the previous velocity at the start of the next
//! iteration.

use crate::error::{GeometryError, Result};
use crate::types::Scalar;
use num_traits::Float;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning parameters for line search algorithms.
///
/// # Parameter constraints
///
/// - all step sizes positive, `min_step < max_step`
/// - `growth > 1` (bracketing must expand)
/// - `contraction ∈ (0, 1)` (backtracking must shrink)
/// - `max_iterations ≥ 1`
///
/// [`validate`](Self::validate) enforces these; strategies check parameters
/// at construction rather than on every call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSearchParams<T>
where
    T: Scalar,
{
    /// First step probed when no warm start is available.
    pub initial_step: T,

    /// Smallest step probed before declaring failure.
    pub min_step: T,

    /// Largest step probed; accepted outright if the cost is still
    /// decreasing there.
    pub max_step: T,

    /// Bracket expansion factor (> 1).
    pub growth: T,

    /// Backtracking factor (in (0, 1)).
    pub contraction: T,

    /// Iteration cap for each of the bracketing and refinement phases.
    pub max_iterations: usize,

    /// Relative tolerance on the directional derivative at the accepted
    /// step: refinement stops once |φ′(t)| ≤ tolerance · |φ′(0)|.
    pub tolerance: T,
}

impl<T> Default for LineSearchParams<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self {
            initial_step: T::one(),
            min_step: T::MIN_STEP_SIZE,
            max_step: T::MAX_STEP_SIZE,
            growth: <T as Scalar>::from_f64(2.0),
            contraction: <T as Scalar>::from_f64(0.5),
            max_iterations: 32,
            tolerance: <T as Scalar>::from_f64(1e-10),
        }
    }
}

impl<T> LineSearchParams<T>
where
    T: Scalar,
{
    /// Validates the parameters against their mathematical constraints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] when a constraint is
    /// violated.
    pub fn validate(&self) -> Result<()> {
        if self.initial_step <= T::zero() {
            return Err(GeometryError::invalid_parameter(
                "initial step must be positive",
            ));
        }
        if self.min_step <= T::zero() {
            return Err(GeometryError::invalid_parameter(
                "minimum step must be positive",
            ));
        }
        if self.max_step <= self.min_step {
            return Err(GeometryError::invalid_parameter(
                "maximum step must be greater than minimum step",
            ));
        }
        if self.growth <= T::one() {
            return Err(GeometryError::invalid_parameter(
                "growth factor must be greater than 1",
            ));
        }
        if self.contraction <= T::zero() || self.contraction >= T::one() {
            return Err(GeometryError::invalid_parameter(
                "contraction factor must be in (0, 1)",
            ));
        }
        if self.max_iterations == 0 {
            return Err(GeometryError::invalid_parameter(
                "maximum iterations must be at least 1",
            ));
        }
        if self.tolerance <= T::zero() {
            return Err(GeometryError::invalid_parameter(
                "tolerance must be positive",
            ));
        }
        Ok(())
    }
}

/// A 1-D derivative-aware search over the geodesic parameter.
pub trait LineSearch<T>: Debug
where
    T: Scalar,
{
    /// Searches for a step `t > 0` that locally minimizes `value`.
    ///
    /// `value` is the cost restricted to the current geodesic and
    /// `derivative` its derivative in `t`. Returns the accepted step, or a
    /// non-positive sentinel when no improving step was found.
    fn search<F, D>(&mut self, value: F, derivative: D) -> T
    where
        F: FnMut(T) -> T,
        D: FnMut(T) -> T;

    /// Clears state carried over from previous searches. Called once per
    /// optimization run.
    fn reset(&mut self);

    /// The most recently accepted step size (zero before any success).
    fn alpha(&self) -> T;

    /// A human-readable name identifying the algorithm.
    fn name(&self) -> &str;
}

/// Bracket-and-secant line search on the directional derivative.
///
/// The search walks outward from `t = 0` until the slope φ′ turns
/// non-negative, then refines the resulting bracket by secant iteration on
/// φ′(t) = 0. For a quadratic φ the secant step is exact, which is what
/// gives the driver the classical finite-termination property on convex
/// quadratics in flat space.
///
/// When the slope stays negative all the way to `max_step` (the cost keeps
/// decreasing along the entire ray), the furthest probe is accepted rather
/// than reported as a failure.
///
/// The accepted step of each search seeds the first probe of the next one;
/// [`reset`](LineSearch::reset) clears that warm start.
#[derive(Debug, Clone)]
pub struct SecantLineSearch<T>
where
    T: Scalar,
{
    params: LineSearchParams<T>,
    alpha: T,
}

impl<T> SecantLineSearch<T>
where
    T: Scalar,
{
    /// Creates a secant line search with default parameters.
    pub fn new() -> Self {
        Self {
            params: LineSearchParams::default(),
            alpha: T::zero(),
        }
    }

    /// Creates a secant line search with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn with_params(params: LineSearchParams<T>) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            alpha: T::zero(),
        })
    }

    /// Returns the parameters.
    pub fn params(&self) -> &LineSearchParams<T> {
        &self.params
    }
}

impl<T> Default for SecantLineSearch<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LineSearch<T> for SecantLineSearch<T>
where
    T: Scalar,
{
    fn search<F, D>(&mut self, mut value: F, mut derivative: D) -> T
    where
        F: FnMut(T) -> T,
        D: FnMut(T) -> T,
    {
        let zero = T::zero();
        let half = <T as Scalar>::from_f64(0.5);
        let p = &self.params;

        // Negated comparison so a NaN slope (degenerate metric, non-finite
        // velocity) fails the search instead of walking off the manifold.
        let slope0 = derivative(zero);
        if !(slope0 < zero) {
            return zero;
        }
        let value0 = value(zero);
        if !<T as Float>::is_finite(value0) {
            return zero;
        }

        // Bracketing: expand until the slope turns non-negative.
        let mut lo = zero;
        let mut slope_lo = slope0;
        let mut t = if self.alpha > zero {
            <T as Float>::min(<T as Float>::max(self.alpha, p.min_step), p.max_step)
        } else {
            p.initial_step
        };
        let mut bracket = None;
        for _ in 0..p.max_iterations {
            let slope = derivative(t);
            if !<T as Float>::is_finite(slope) {
                t = t * p.contraction;
                if t < p.min_step {
                    break;
                }
                continue;
            }
            if slope >= zero {
                bracket = Some((t, slope));
                break;
            }
            lo = t;
            slope_lo = slope;
            if t >= p.max_step {
                break;
            }
            t = <T as Float>::min(t * p.growth, p.max_step);
        }

        let candidate = match bracket {
            // The probe itself may already be stationary.
            Some((hi, slope_hi))
                if <T as Float>::abs(slope_hi) <= p.tolerance * <T as Float>::abs(slope0) =>
            {
                hi
            }
            Some((mut hi, mut slope_hi)) => {
                // Secant iteration on the slope inside [lo, hi], falling
                // back to bisection when the secant step degenerates or
                // leaves the bracket.
                let mut s = hi;
                for _ in 0..p.max_iterations {
                    let denom = slope_hi - slope_lo;
                    s = if <T as Float>::abs(denom) > <T as Float>::epsilon() {
                        hi - slope_hi * (hi - lo) / denom
                    } else {
                        (lo + hi) * half
                    };
                    if !(s > lo && s < hi) {
                        s = (lo + hi) * half;
                    }
                    let slope_s = derivative(s);
                    if !<T as Float>::is_finite(slope_s) {
                        break;
                    }
                    if <T as Float>::abs(slope_s)
                        <= p.tolerance * <T as Float>::abs(slope0)
                    {
                        break;
                    }
                    if slope_s < zero {
                        lo = s;
                        slope_lo = slope_s;
                    } else {
                        hi = s;
                        slope_hi = slope_s;
                    }
                    if hi - lo <= p.min_step {
                        break;
                    }
                }
                s
            }
            // Still descending at the furthest probe.
            None => lo,
        };

        if !(candidate > zero) {
            return zero;
        }

        // Accept only a genuine decrease, backtracking if necessary.
        let mut t = candidate;
        while t >= p.min_step {
            let v = value(t);
            if <T as Float>::is_finite(v) && v < value0 {
                self.alpha = t;
                return t;
            }
            t = t * p.contraction;
        }
        zero
    }

    fn reset(&mut self) {
        self.alpha = T::zero();
    }

    fn alpha(&self) -> T {
        self.alpha
    }

    fn name(&self) -> &str {
        "Secant"
    }
}

/// Fixed step size with an improvement check.
///
/// Accepts the configured step iff it decreases the cost; otherwise returns
/// the failure sentinel. Useful for algorithms with theoretical step-size
/// guarantees and for testing.
#[derive(Debug, Clone)]
pub struct FixedStep<T>
where
    T: Scalar,
{
    step: T,
    alpha: T,
}

impl<T> FixedStep<T>
where
    T: Scalar,
{
    /// Creates a fixed-step strategy with the given step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not positive.
    pub fn new(step: T) -> Result<Self> {
        if step <= T::zero() {
            return Err(GeometryError::invalid_parameter(
                "fixed step must be positive",
            ));
        }
        Ok(Self {
            step,
            alpha: T::zero(),
        })
    }
}

impl<T> LineSearch<T> for FixedStep<T>
where
    T: Scalar,
{
    fn search<F, D>(&mut self, mut value: F, mut derivative: D) -> T
    where
        F: FnMut(T) -> T,
        D: FnMut(T) -> T,
    {
        let zero = T::zero();
        let slope0 = derivative(zero);
        if !(slope0 < zero) {
            return zero;
        }
        let value0 = value(zero);
        let v = value(self.step);
        if <T as Float>::is_finite(v) && v < value0 {
            self.alpha = self.step;
            self.step
        } else {
            zero
        }
    }

    fn reset(&mut self) {
        self.alpha = T::zero();
    }

    fn alpha(&self) -> T {
        self.alpha
    }

    fn name(&self) -> &str {
        "FixedStep"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_params_validate() {
        assert!(LineSearchParams::<f64>::default().validate().is_ok());

        let mut params = LineSearchParams::<f64>::default();
        params.contraction = 1.5;
        assert!(params.validate().is_err());

        let mut params = LineSearchParams::<f64>::default();
        params.growth = 0.9;
        assert!(params.validate().is_err());

        let mut params = LineSearchParams::<f64>::default();
        params.max_step = params.min_step;
        assert!(params.validate().is_err());

        let mut params = LineSearchParams::<f64>::default();
        params.max_iterations = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_exact_on_quadratic() {
        // phi(t) = (t - 0.5)^2 * 100, minimized at t = 0.5.
        let mut ls = SecantLineSearch::<f64>::new();
        let alpha = ls.search(
            |t| 100.0 * (t - 0.5) * (t - 0.5),
            |t| 200.0 * (t - 0.5),
        );
        assert_relative_eq!(alpha, 0.5, epsilon = 1e-10);
        assert_relative_eq!(ls.alpha(), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_warm_start_overshoot() {
        // A previous long step should still bracket a nearby minimum.
        let mut ls = SecantLineSearch::<f64>::new();
        let first = ls.search(|t| (t - 4.0) * (t - 4.0), |t| 2.0 * (t - 4.0));
        assert_relative_eq!(first, 4.0, epsilon = 1e-8);

        let second = ls.search(|t| (t - 0.25) * (t - 0.25), |t| 2.0 * (t - 0.25));
        assert_relative_eq!(second, 0.25, epsilon = 1e-8);
    }

    #[test]
    fn test_rejects_non_descent() {
        let mut ls = SecantLineSearch::<f64>::new();
        // Increasing function: slope at 0 is positive.
        let alpha = ls.search(|t| t, |_| 1.0);
        assert!(alpha <= 0.0);
        // Stationary start.
        let alpha = ls.search(|t| t * t, |t| 2.0 * t);
        assert!(alpha <= 0.0);
    }

    #[test]
    fn test_rejects_non_finite_slope() {
        let mut ls = SecantLineSearch::<f64>::new();
        let alpha = ls.search(|_| 0.0, |_| f64::NAN);
        assert!(alpha <= 0.0);
    }

    #[test]
    fn test_unbounded_descent_takes_max_step() {
        // phi(t) = -t decreases forever; the search should accept the cap
        // instead of failing.
        let mut ls = SecantLineSearch::<f64>::new();
        let alpha = ls.search(|t| -t, |_| -1.0);
        assert_relative_eq!(alpha, ls.params().max_step);
    }

    #[test]
    fn test_reset_clears_warm_start() {
        let mut ls = SecantLineSearch::<f64>::new();
        let first = ls.search(|t| (t - 2.0) * (t - 2.0), |t| 2.0 * (t - 2.0));
        assert!(first > 0.0);
        assert!(ls.alpha() > 0.0);
        ls.reset();
        assert_eq!(ls.alpha(), 0.0);
    }

    #[test]
    fn test_fixed_step() {
        let mut ls = FixedStep::new(0.1).unwrap();
        let alpha = ls.search(|t| (t - 1.0) * (t - 1.0), |t| 2.0 * (t - 1.0));
        assert_relative_eq!(alpha, 0.1);
        assert_relative_eq!(ls.alpha(), 0.1);

        // Step overshoots into an increase: sentinel.
        let alpha = ls.search(|t| (t - 0.01) * (t - 0.01), |t| 2.0 * (t - 0.01));
        assert!(alpha <= 0.0);

        assert!(FixedStep::<f64>::new(-1.0).is_err());
    }
}
