//! Discretization of navigation curves into ordered point sequences.

use navcurve_core::{NavCurveError, Result, Validate};
use navcurve_math::{Orientation, Point3};
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, SmoothCurve};

/// Tuning for [`discretize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscretizeOptions {
    /// Chord count used to estimate the arc length, independent of the output step count.
    pub length_samples: usize,
    /// Fraction of the estimated arc length given to each tangent.
    pub tangent_scale: f64,
}

impl DiscretizeOptions {
    pub const DEFAULT_LENGTH_SAMPLES: usize = 300;
    pub const DEFAULT_TANGENT_SCALE: f64 = 1.0 / 3.0;
}

impl Default for DiscretizeOptions {
    fn default() -> Self {
        Self {
            length_samples: Self::DEFAULT_LENGTH_SAMPLES,
            tangent_scale: Self::DEFAULT_TANGENT_SCALE,
        }
    }
}

impl Validate for DiscretizeOptions {
    fn validate(&self) -> Result<()> {
        if self.length_samples == 0 {
            return Err(NavCurveError::zero_count("length_samples"));
        }
        if !self.tangent_scale.is_finite() {
            return Err(NavCurveError::InvalidArgument(format!(
                "tangent_scale must be finite, got {}",
                self.tangent_scale
            )));
        }
        Ok(())
    }
}

/// Points along the curve between two oriented waypoints, using default options.
pub fn discretize(
    waypoint1: Point3,
    orientation1: &impl Orientation,
    waypoint2: Point3,
    orientation2: &impl Orientation,
    num_steps: usize,
) -> Result<Vec<Point3>> {
    discretize_with(
        waypoint1,
        orientation1,
        waypoint2,
        orientation2,
        num_steps,
        &DiscretizeOptions::default(),
    )
}

/// Points along the curve between two oriented waypoints.
///
/// Initial tangents are the orientations' forward directions. They are
/// rescaled to `tangent_scale` times the estimated arc length, then the curve
/// is sampled at `i / num_steps` for `i` in `0..num_steps`. `waypoint2` is
/// appended last, so the result holds `num_steps + 1` points and ends exactly
/// on the second waypoint.
pub fn discretize_with(
    waypoint1: Point3,
    orientation1: &impl Orientation,
    waypoint2: Point3,
    orientation2: &impl Orientation,
    num_steps: usize,
    options: &DiscretizeOptions,
) -> Result<Vec<Point3>> {
    if num_steps == 0 {
        return Err(NavCurveError::zero_count("num_steps"));
    }
    options.validate()?;

    let seed = SmoothCurve::from_parts(
        waypoint1,
        orientation1.forward(),
        waypoint2,
        orientation2.forward(),
    );
    let length = seed.length(options.length_samples)?;
    let curve = seed.scaled(length * options.tangent_scale);
    log::debug!(
        "Discretizing curve {} -> {} (estimated length {:.3}) into {} steps",
        waypoint1,
        waypoint2,
        length,
        num_steps
    );

    let mut points = Vec::with_capacity(num_steps + 1);
    for segment in 0..num_steps {
        let coef = segment as f64 / num_steps as f64;
        points.push(curve.point_at(coef));
    }
    points.push(waypoint2);

    Ok(points)
}
