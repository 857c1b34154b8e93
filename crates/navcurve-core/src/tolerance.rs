use serde::{Deserialize, Serialize};

use crate::error::{NavCurveError, Result};
use crate::traits::Validate;

/// Epsilons used by the navigation curve computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Below this length a forward vector is degenerate, and below this
    /// magnitude a Z component counts as lying in the horizontal plane.
    pub direction: f64,
    /// Parallel-chord threshold and endpoint-exclusion band for intersections.
    pub intersection: f64,
}

impl Tolerance {
    pub const DEFAULT_DIRECTION: f64 = 1e-4;
    pub const DEFAULT_INTERSECTION: f64 = 1e-2;

    pub fn new(direction: f64, intersection: f64) -> Self {
        Self {
            direction,
            intersection,
        }
    }

    /// Check if a value is zero within the direction tolerance
    pub fn is_direction_zero(self, v: f64) -> bool {
        v.abs() < self.direction
    }

    /// Check if a value is zero within the intersection tolerance
    pub fn is_intersection_zero(self, v: f64) -> bool {
        v.abs() < self.intersection
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIRECTION, Self::DEFAULT_INTERSECTION)
    }
}

impl Validate for Tolerance {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("direction", self.direction), ("intersection", self.intersection)] {
            if !value.is_finite() || value < 0.0 {
                return Err(NavCurveError::InvalidArgument(format!(
                    "{name} tolerance must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
