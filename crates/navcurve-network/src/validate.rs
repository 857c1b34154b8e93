use navcurve_core::error::{NavCurveError, Result};
use navcurve_core::traits::Validate;
use navcurve_geometry::Waypoint;

use crate::intersect::IntersectOptions;
use crate::record::{NavCurve, NO_CURVE};

impl Validate for IntersectOptions {
    fn validate(&self) -> Result<()> {
        if self.part_count == 0 {
            return Err(NavCurveError::zero_count("part_count"));
        }
        self.tolerance.validate()
    }
}

impl Validate for NavCurve {
    fn validate(&self) -> Result<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(NavCurveError::Geometry(format!(
                "Curve '{}' has invalid length {}",
                self.name, self.length
            )));
        }

        for (label, waypoint) in [("start", &self.start), ("end", &self.end)] {
            if !is_finite(waypoint) {
                return Err(NavCurveError::Geometry(format!(
                    "Curve '{}' has a non-finite {} waypoint",
                    self.name, label
                )));
            }
        }

        // Links are indices into the owning curve list, or the sentinel.
        for &link in self.next_curves.iter().chain(&self.prev_curves) {
            if link < NO_CURVE {
                return Err(NavCurveError::InvalidOperation(format!(
                    "Curve '{}' links to invalid curve index {}",
                    self.name, link
                )));
            }
        }

        Ok(())
    }
}

fn is_finite(waypoint: &Waypoint) -> bool {
    waypoint.position.is_finite() && waypoint.tangent.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use navcurve_math::{dvec3, Vector3};

    fn curve() -> NavCurve {
        NavCurve::new(
            "c",
            Waypoint::new(Vector3::ZERO, dvec3(1.0, 0.0, 0.0)),
            Waypoint::new(dvec3(3.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)),
            3.0,
        )
    }

    #[test]
    fn test_valid_curve() {
        curve().validate().unwrap();
        curve().with_links(vec![2, NO_CURVE], vec![NO_CURVE]).validate().unwrap();
    }

    #[test]
    fn test_bad_length() {
        let mut c = curve();
        c.length = 0.0;
        assert!(matches!(c.validate(), Err(NavCurveError::Geometry(_))));
        c.length = f64::INFINITY;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_non_finite_waypoint() {
        let mut c = curve();
        c.end.tangent.y = f64::NAN;
        assert!(matches!(c.validate(), Err(NavCurveError::Geometry(_))));
    }

    #[test]
    fn test_bad_link() {
        let c = curve().with_links(vec![-2], Vec::new());
        assert!(matches!(c.validate(), Err(NavCurveError::InvalidOperation(_))));
    }

    #[test]
    fn test_options() {
        IntersectOptions::default().validate().unwrap();
        assert!(IntersectOptions::new(0).validate().is_err());
    }
}
