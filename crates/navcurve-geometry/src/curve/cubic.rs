//! Cubic Bezier curve given by its control polygon.

use navcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::bezier;

/// A cubic Bezier curve with control points `p0..p3`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        bezier::evaluate_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        bezier::evaluate_bezier_tangent(self.p0, self.p1, self.p2, self.p3, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navcurve_math::dvec3;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 0.0, 3.0),
            dvec3(6.0, 0.0, 3.0),
            dvec3(6.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_interpolates_endpoints() {
        let curve = arch();
        assert_eq!(curve.point_at(0.0), curve.p0);
        assert_eq!(curve.point_at(1.0), curve.p3);
    }

    #[test]
    fn test_symmetric_apex() {
        let p = arch().point_at(0.5);
        assert!((p - dvec3(3.0, 0.0, 2.25)).length() < 1e-12);
        // Apex tangent is parallel to the chord.
        let t = arch().tangent_at(0.5);
        assert!(t.z.abs() < 1e-12);
        assert!(t.x > 0.0);
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let curve = arch();
        let h = 1e-6;
        for &t in &[0.1, 0.37, 0.8] {
            let fd = (curve.point_at(t + h) - curve.point_at(t - h)) / (2.0 * h);
            assert!((fd - curve.tangent_at(t)).length() < 1e-5);
        }
    }

    #[test]
    fn test_domain() {
        assert_eq!(arch().domain(), (0.0, 1.0));
    }
}
