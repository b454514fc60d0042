//! Conjugate-direction update schemes.
//!
//! Each scheme computes the scalar coefficient β that blends the
//! parallel-transported previous search direction into the new negative
//! gradient. The schemes are zero-sized strategy types selected as a
//! compile-time type parameter of the optimizer, so dispatch costs nothing.
//!
//! No sign-check or restart-on-negative-β safeguard is applied: the formulas
//! are evaluated as written, and a degenerate denominator yields a
//! non-finite β that fails the subsequent line search. Callers that need a
//! descent-direction guarantee (notably with Polak–Ribière on non-convex
//! costs) should restart the run from steepest descent externally.

use geocg_core::{
    metric::{InnerProduct, Metric},
    types::Scalar,
};
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a β formula may look at.
///
/// All vectors live in the tangent space at `x`, except `last_grad`, which
/// lives at `last_x` and is provided both raw (for Fletcher–Reeves, which
/// measures it under the metric at `last_x`) and parallel-transported to `x`
/// (`transported_grad`). `transported_velocity` is the previous search
/// direction carried to `x` along the previous geodesic step.
pub struct BetaArgs<'a, T, M>
where
    T: Scalar,
    M: Metric<T>,
{
    /// The metric of the geometry being optimized over.
    pub metric: &'a M,
    /// Current point.
    pub x: &'a M::Point,
    /// Previous point.
    pub last_x: &'a M::Point,
    /// Gradient at `x`.
    pub grad: &'a M::Vector,
    /// Gradient at `last_x`, untransported.
    pub last_grad: &'a M::Vector,
    /// Previous gradient transported into the tangent space at `x`.
    pub transported_grad: &'a M::Vector,
    /// Previous search direction transported into the tangent space at `x`.
    pub transported_velocity: &'a M::Vector,
}

/// A conjugate-direction update formula.
pub trait BetaScheme: Debug {
    /// Computes the blending coefficient β.
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>;

    /// A short identifying name, e.g. "CG-HS".
    fn name(&self) -> &'static str;
}

/// Fletcher–Reeves: β = ‖g_k‖²_x / ‖g_{k-1}‖²_{x_{k-1}}.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FletcherReeves;

impl BetaScheme for FletcherReeves {
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>,
    {
        args.metric.at(args.x).norm2(args.grad)
            / args.metric.at(args.last_x).norm2(args.last_grad)
    }

    fn name(&self) -> &'static str {
        "CG-FR"
    }
}

/// Polak–Ribière: β = ⟨g_k, g_k − P g_{k-1}⟩ / ‖P g_{k-1}‖².
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolakRibiere;

impl BetaScheme for PolakRibiere {
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>,
    {
        let ip = args.metric.at(args.x);
        let diff = args.grad.clone() - args.transported_grad.clone();
        ip.inner(args.grad, &diff) / ip.norm2(args.transported_grad)
    }

    fn name(&self) -> &'static str {
        "CG-PR"
    }
}

/// Hestenes–Stiefel: β = ⟨g_k, y_k⟩ / ⟨P d_{k-1}, y_k⟩ with
/// y_k = g_k − P g_{k-1}.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HestenesStiefel;

impl BetaScheme for HestenesStiefel {
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>,
    {
        let ip = args.metric.at(args.x);
        let diff = args.grad.clone() - args.transported_grad.clone();
        ip.inner(args.grad, &diff) / ip.inner(args.transported_velocity, &diff)
    }

    fn name(&self) -> &'static str {
        "CG-HS"
    }
}

/// Conjugate-Descent: β = −‖g_k‖² / ⟨P d_{k-1}, P g_{k-1}⟩.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConjugateDescent;

impl BetaScheme for ConjugateDescent {
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>,
    {
        let ip = args.metric.at(args.x);
        -ip.norm2(args.grad) / ip.inner(args.transported_velocity, args.transported_grad)
    }

    fn name(&self) -> &'static str {
        "CG-CD"
    }
}

/// Dai–Yuan: β = ‖g_k‖² / ⟨P d_{k-1}, y_k⟩ with y_k = g_k − P g_{k-1}.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaiYuan;

impl BetaScheme for DaiYuan {
    fn beta<T, M>(&self, args: &BetaArgs<'_, T, M>) -> T
    where
        T: Scalar,
        M: Metric<T>,
    {
        let ip = args.metric.at(args.x);
        let diff = args.grad.clone() - args.transported_grad.clone();
        ip.norm2(args.grad) / ip.inner(args.transported_velocity, &diff)
    }

    fn name(&self) -> &'static str {
        "CG-DY"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geocg_core::types::DVector;
    use geocg_manifolds::EuclideanMetric;

    // Hand-computable fixture in flat space, where transport is the
    // identity: g = (1, 0), g_prev = (2, 0), d_prev = (-2, 0).
    fn args<'a>(
        metric: &'a EuclideanMetric,
        x: &'a DVector<f64>,
        grad: &'a DVector<f64>,
        last_grad: &'a DVector<f64>,
        velocity: &'a DVector<f64>,
    ) -> BetaArgs<'a, f64, EuclideanMetric> {
        BetaArgs {
            metric,
            x,
            last_x: x,
            grad,
            last_grad,
            transported_grad: last_grad,
            transported_velocity: velocity,
        }
    }

    #[test]
    fn test_beta_formulas() {
        let metric = EuclideanMetric;
        let x = DVector::from_vec(vec![0.0, 0.0]);
        let grad = DVector::from_vec(vec![1.0, 0.0]);
        let last_grad = DVector::from_vec(vec![2.0, 0.0]);
        let velocity = DVector::from_vec(vec![-2.0, 0.0]);
        let args = args(&metric, &x, &grad, &last_grad, &velocity);

        assert_relative_eq!(FletcherReeves.beta(&args), 0.25);
        assert_relative_eq!(PolakRibiere.beta(&args), -0.25);
        assert_relative_eq!(HestenesStiefel.beta(&args), -0.5);
        assert_relative_eq!(ConjugateDescent.beta(&args), 0.25);
        assert_relative_eq!(DaiYuan.beta(&args), 0.5);
    }

    #[test]
    fn test_degenerate_denominator_is_not_defended() {
        // Zero previous gradient: FR divides by zero and must say so with a
        // non-finite result rather than masking it.
        let metric = EuclideanMetric;
        let x = DVector::from_vec(vec![0.0, 0.0]);
        let grad = DVector::from_vec(vec![1.0, 0.0]);
        let last_grad = DVector::from_vec(vec![0.0, 0.0]);
        let velocity = DVector::from_vec(vec![-1.0, 0.0]);
        let args = args(&metric, &x, &grad, &last_grad, &velocity);

        assert!(FletcherReeves.beta(&args).is_infinite());
    }

    #[test]
    fn test_names() {
        assert_eq!(FletcherReeves.name(), "CG-FR");
        assert_eq!(PolakRibiere.name(), "CG-PR");
        assert_eq!(HestenesStiefel.name(), "CG-HS");
        assert_eq!(ConjugateDescent.name(), "CG-CD");
        assert_eq!(DaiYuan.name(), "CG-DY");
    }
}
