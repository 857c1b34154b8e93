//! Arc-length approximation by piecewise-linear sampling.

use navcurve_core::{NavCurveError, Result};
use navcurve_math::{Point3, Vector3};

use crate::curve::{Curve, SmoothCurve};

/// Sum of the chord lengths between `steps + 1` equally spaced parameters.
///
/// The chord sum never exceeds the true arc length and grows toward it as
/// `steps` increases.
pub fn chord_length(curve: &dyn Curve, steps: usize) -> Result<f64> {
    if steps == 0 {
        return Err(NavCurveError::zero_count("steps"));
    }

    let (t_min, t_max) = curve.domain();
    let step_size = (t_max - t_min) / steps as f64;

    let mut prev = curve.point_at(t_min);
    let mut length = 0.0;
    for i in 1..=steps {
        let p = curve.point_at(t_min + step_size * i as f64);
        length += prev.distance(p);
        prev = p;
    }

    Ok(length)
}

/// Approximate length of the smooth curve from `point1` to `point2`.
///
/// Tangents are used as given; see [`crate::smooth_curve`].
pub fn estimate_length(
    point1: Point3,
    tang1: Vector3,
    point2: Point3,
    tang2: Vector3,
    steps: usize,
) -> Result<f64> {
    chord_length(&SmoothCurve::from_parts(point1, tang1, point2, tang2), steps)
}
