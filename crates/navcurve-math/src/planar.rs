//! Straight segments and their intersection in the horizontal X/Z plane.
//!
//! The vertical (Y) component is ignored by the intersection test.

use crate::Point3;
use serde::{Deserialize, Serialize};

/// A straight segment in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

/// Parametric positions of a crossing along two segments, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub mu_a: f64,
    pub mu_b: f64,
}

impl Segment {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Point along the segment at parameter `mu`.
    pub fn at(&self, mu: f64) -> Point3 {
        self.start + mu * (self.end - self.start)
    }

    /// Intersect the X/Z projections of `self` and `other`.
    ///
    /// Returns `None` when the projected segments are parallel within
    /// `parallel_eps` (compared against the raw cross product, so the threshold
    /// scales with the segment lengths) or when the supporting lines cross
    /// outside either segment.
    pub fn intersect_xz(&self, other: &Segment, parallel_eps: f64) -> Option<SegmentHit> {
        let (a0, a1) = (self.start, self.end);
        let (b0, b1) = (other.start, other.end);

        let denom = (b1.z - b0.z) * (a1.x - a0.x) - (b1.x - b0.x) * (a1.z - a0.z);
        if denom.abs() < parallel_eps {
            return None;
        }

        let nume_a = (b1.x - b0.x) * (a0.z - b0.z) - (b1.z - b0.z) * (a0.x - b0.x);
        let nume_b = (a1.x - a0.x) * (a0.z - b0.z) - (a1.z - a0.z) * (a0.x - b0.x);

        let mu_a = nume_a / denom;
        let mu_b = nume_b / denom;
        if !(0.0..=1.0).contains(&mu_a) || !(0.0..=1.0).contains(&mu_b) {
            return None;
        }

        Some(SegmentHit { mu_a, mu_b })
    }
}
