//! Conjugate-gradient optimizer over Riemannian manifolds.
//!
//! Seeks a local minimum of a smooth cost function f: ℳ → ℝ by stepping
//! along geodesics in conjugate-gradient-determined directions. Each
//! iteration evaluates the Riemannian gradient, bends the steepest-descent
//! direction by the parallel-transported previous direction scaled with a
//! conjugacy coefficient β, and line-searches the resulting geodesic for the
//! step size.
//!
//! # Supported β-schemes
//!
//! - **Fletcher–Reeves**: β = ‖g_k‖² / ‖g_{k-1}‖²
//! - **Polak–Ribière**: β = ⟨g_k, g_k − P g_{k-1}⟩ / ‖P g_{k-1}‖²
//! - **Hestenes–Stiefel** (default): β = ⟨g_k, y_k⟩ / ⟨P d_{k-1}, y_k⟩
//! - **Conjugate-Descent**: β = −‖g_k‖² / ⟨P d_{k-1}, P g_{k-1}⟩
//! - **Dai–Yuan**: β = ‖g_k‖² / ⟨P d_{k-1}, y_k⟩
//!
//! where P is parallel transport along the previous geodesic step and
//! y_k = g_k − P g_{k-1}. All inner products are taken under the metric at
//! the current point (Fletcher–Reeves evaluates the previous gradient under
//! the metric at the previous point).
//!
//! # References
//!
//! - Hager & Zhang, "A survey of nonlinear conjugate gradient methods" (2006)
//! - Smith, "Optimization techniques on Riemannian manifolds" (1994)

pub mod conjugate_gradient;
pub mod schemes;

pub use conjugate_gradient::{CgState, ConjugateGradient};
pub use schemes::{
    BetaArgs, BetaScheme, ConjugateDescent, DaiYuan, FletcherReeves, HestenesStiefel,
    PolakRibiere,
};
