//! Cubic Bernstein basis and Bezier evaluation.
//!
//! Parameters outside `[0, 1]` are not clamped; the polynomials simply extrapolate.

use navcurve_math::{Point3, Vector3};

/// Cubic Bernstein polynomials `[(1-t)^3, 3t(1-t)^2, 3t^2(1-t), t^3]` at `t`.
pub fn bernstein(t: f64) -> [f64; 4] {
    let q = 1.0 - t;
    [q * q * q, 3.0 * t * q * q, 3.0 * t * t * q, t * t * t]
}

/// Derivatives of the cubic Bernstein polynomials at `t`.
pub fn bernstein_derivs(t: f64) -> [f64; 4] {
    let q = 1.0 - t;
    [
        -3.0 * q * q,
        3.0 * q * q - 6.0 * t * q,
        6.0 * t * q - 3.0 * t * t,
        3.0 * t * t,
    ]
}

/// Evaluate the cubic Bezier curve with control points `p0..p3` at `t`.
pub fn evaluate_bezier(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Point3 {
    let [b0, b1, b2, b3] = bernstein(t);
    b0 * p0 + b1 * p1 + b2 * p2 + b3 * p3
}

/// First derivative of the cubic Bezier curve with control points `p0..p3` at `t`.
pub fn evaluate_bezier_tangent(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Vector3 {
    let [d0, d1, d2, d3] = bernstein_derivs(t);
    d0 * p0 + d1 * p1 + d2 * p2 + d3 * p3
}
