//! Core traits and types for conjugate-gradient optimization on Riemannian
//! manifolds.
//!
//! This crate defines the geometric capabilities a concrete geometry must
//! supply to the optimizer (a point-dependent inner product, a geodesic with
//! parallel transport, and a derivative-aware 1-D line search) together with
//! the scalar abstraction and error types shared across the workspace.
//!
//! # Key concepts
//!
//! - **Metric**: evaluates the metric tensor at a point, producing the
//!   [`InnerProduct`](metric::InnerProduct) valid in that point's tangent
//!   space.
//! - **Geodesic**: the manifold analogue of a straight line; supports point
//!   evaluation along the curve and parallel transport of tangent vectors.
//! - **Line search**: a 1-D search over the step parameter `t`, driven by the
//!   cost restricted to a geodesic and its directional derivative.
//!
//! # Modules
//!
//! - [`error`]: error types for geometry construction and validation
//! - [`geodesic`]: the geodesic capability
//! - [`line_search`]: line search contract and default implementations
//! - [`metric`]: metric tensor and inner product capabilities
//! - [`tangent`]: vector-space operations required of tangent vectors
//! - [`types`]: scalar abstraction and type aliases

pub mod error;
pub mod geodesic;
pub mod line_search;
pub mod metric;
pub mod tangent;
pub mod types;

pub use error::{GeometryError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use geocg_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GeometryError, Result};
    pub use crate::geodesic::Geodesic;
    pub use crate::line_search::{FixedStep, LineSearch, LineSearchParams, SecantLineSearch};
    pub use crate::metric::{InnerProduct, Metric};
    pub use crate::tangent::TangentVector;
    pub use crate::types::{DMatrix, DVector, Scalar};
}
