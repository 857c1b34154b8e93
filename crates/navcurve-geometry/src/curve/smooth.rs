//! Smooth navigation curve between two waypoints.
//!
//! The curve is a cubic Bezier whose inner control points sit one tangent
//! length away from each waypoint. Tangent magnitude controls curvature, so
//! callers scale tangents (typically to a third of the arc length) before
//! building the curve. Chaining segments that share a waypoint and its tangent
//! yields a smooth path.

use navcurve_core::Result;
use navcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{CubicBezier, Curve};
use crate::bezier;
use crate::length;

/// A position on a navigation path together with the path's local direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: Point3,
    pub tangent: Vector3,
}

impl Waypoint {
    pub fn new(position: Point3, tangent: Vector3) -> Self {
        Self { position, tangent }
    }

    /// Same position with the tangent multiplied by `factor`.
    pub fn with_tangent_scale(self, factor: f64) -> Self {
        Self {
            tangent: self.tangent * factor,
            ..self
        }
    }
}

/// Point at `coef` on the smooth curve from `point1` to `point2`.
///
/// `coef = 0` gives `point1` and `coef = 1` gives `point2` exactly.
pub fn smooth_curve(point1: Point3, tang1: Vector3, point2: Point3, tang2: Vector3, coef: f64) -> Point3 {
    bezier::evaluate_bezier(point1, point1 + tang1, point2 - tang2, point2, coef)
}

/// Smooth curve segment between a start and an end waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothCurve {
    pub start: Waypoint,
    pub end: Waypoint,
}

impl SmoothCurve {
    pub fn new(start: Waypoint, end: Waypoint) -> Self {
        Self { start, end }
    }

    pub fn from_parts(point1: Point3, tang1: Vector3, point2: Point3, tang2: Vector3) -> Self {
        Self::new(Waypoint::new(point1, tang1), Waypoint::new(point2, tang2))
    }

    /// Bezier control polygon `[p1, p1 + t1, p2 - t2, p2]`.
    pub fn control_polygon(&self) -> CubicBezier {
        CubicBezier::new(
            self.start.position,
            self.start.position + self.start.tangent,
            self.end.position - self.end.tangent,
            self.end.position,
        )
    }

    /// Copy of this curve with both tangents multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.start.with_tangent_scale(factor),
            self.end.with_tangent_scale(factor),
        )
    }

    /// Approximate arc length from `steps` chords.
    pub fn length(&self, steps: usize) -> Result<f64> {
        length::chord_length(self, steps)
    }
}

impl Curve for SmoothCurve {
    fn point_at(&self, t: f64) -> Point3 {
        smooth_curve(
            self.start.position,
            self.start.tangent,
            self.end.position,
            self.end.tangent,
            t,
        )
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.control_polygon().tangent_at(t)
    }
}
