//! Read-only view of a stored navigation curve.

use navcurve_core::Result;
use navcurve_geometry::{estimate_length, SmoothCurve, Waypoint};
use serde::{Deserialize, Serialize};

/// Link value meaning "no connected curve".
pub const NO_CURVE: i32 = -1;

/// Chord count used when a record's length has to be estimated.
const LENGTH_SAMPLES: usize = 300;

/// Capability a stored curve exposes to the intersection and classification code.
///
/// Start and end waypoints carry the stored `Direction` as their tangent,
/// already scaled to the curve's curvature.
pub trait CurveRecord: Send + Sync {
    /// Stored arc length of the curve.
    fn length(&self) -> f64;

    fn start(&self) -> Waypoint;

    fn end(&self) -> Waypoint;

    /// Whether the curve continues into at least one other curve.
    fn has_next(&self) -> bool {
        false
    }

    /// Whether at least one other curve leads into this one.
    fn has_prev(&self) -> bool {
        false
    }

    fn smooth_curve(&self) -> SmoothCurve {
        SmoothCurve::new(self.start(), self.end())
    }
}

/// Plain navigation curve record as stored alongside prefab data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavCurve {
    #[serde(default)]
    pub name: String,
    pub length: f64,
    pub start: Waypoint,
    pub end: Waypoint,
    /// Indices of following curves; [`NO_CURVE`] entries are empty slots.
    #[serde(default)]
    pub next_curves: Vec<i32>,
    /// Indices of preceding curves; [`NO_CURVE`] entries are empty slots.
    #[serde(default)]
    pub prev_curves: Vec<i32>,
}

impl NavCurve {
    pub fn new(name: impl Into<String>, start: Waypoint, end: Waypoint, length: f64) -> Self {
        Self {
            name: name.into(),
            length,
            start,
            end,
            next_curves: Vec::new(),
            prev_curves: Vec::new(),
        }
    }

    /// Build a record whose length is estimated from its waypoints.
    pub fn from_waypoints(name: impl Into<String>, start: Waypoint, end: Waypoint) -> Result<Self> {
        let length = estimate_length(
            start.position,
            start.tangent,
            end.position,
            end.tangent,
            LENGTH_SAMPLES,
        )?;
        Ok(Self::new(name, start, end, length))
    }

    pub fn with_links(mut self, next_curves: Vec<i32>, prev_curves: Vec<i32>) -> Self {
        self.next_curves = next_curves;
        self.prev_curves = prev_curves;
        self
    }
}

fn has_link(links: &[i32]) -> bool {
    links.iter().any(|&link| link != NO_CURVE)
}

impl CurveRecord for NavCurve {
    fn length(&self) -> f64 {
        self.length
    }

    fn start(&self) -> Waypoint {
        self.start
    }

    fn end(&self) -> Waypoint {
        self.end
    }

    fn has_next(&self) -> bool {
        has_link(&self.next_curves)
    }

    fn has_prev(&self) -> bool {
        has_link(&self.prev_curves)
    }
}
