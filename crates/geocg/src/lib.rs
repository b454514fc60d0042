//! Conjugate-gradient optimization on Riemannian manifolds.
//!
//! This umbrella crate re-exports the whole workspace:
//!
//! - [`core`](geocg_core): geometric capability traits (metric, geodesic,
//!   line search), scalar abstraction, error types;
//! - [`manifolds`](geocg_manifolds): Euclidean space and the unit sphere;
//! - [`optim`](geocg_optim): the [`ConjugateGradient`] driver and the five
//!   β-schemes.
//!
//! # Quick start
//!
//! ```
//! use geocg::prelude::*;
//!
//! // Minimize f(x) = ||x||² over ℝ².
//! let space = Euclidean::new(2);
//! let mut cg = ConjugateGradient::new(
//!     space.metric(),
//!     space.geodesic::<f64>(),
//!     SecantLineSearch::new(),
//! );
//! let minimum = cg.optimize(
//!     DVector::from_vec(vec![3.0, 4.0]),
//!     &|x: &DVector<f64>| x.norm_squared(),
//!     &|x: &DVector<f64>| x * 2.0,
//! );
//! assert!(minimum.norm() < 1e-8);
//! ```

pub use geocg_core as core;
pub use geocg_manifolds as manifolds;
pub use geocg_optim as optim;

pub use geocg_core::error::{GeometryError, Result};
pub use geocg_optim::ConjugateGradient;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use geocg_core::prelude::*;
    pub use geocg_manifolds::{
        Euclidean, EuclideanGeodesic, EuclideanMetric, Sphere, SphereGeodesic, SphereMetric,
        WeightedMetric,
    };
    pub use geocg_optim::{
        BetaScheme, CgState, ConjugateDescent, ConjugateGradient, DaiYuan, FletcherReeves,
        HestenesStiefel, PolakRibiere,
    };
}
