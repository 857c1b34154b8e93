//! Curve trait and the cubic navigation curve implementations.

mod cubic;
mod smooth;

use navcurve_math::{Point3, Vector3};

pub use cubic::CubicBezier;
pub use smooth::{smooth_curve, SmoothCurve, Waypoint};

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
