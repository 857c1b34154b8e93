//! NavCurve geometry: cubic Bezier navigation curves, arc length, and discretization.

pub mod bezier;
pub mod curve;
pub mod discretize;
pub mod length;

pub use curve::{smooth_curve, CubicBezier, Curve, SmoothCurve, Waypoint};
pub use discretize::{discretize, discretize_with, DiscretizeOptions};
pub use length::{chord_length, estimate_length};
