//! NavCurve networks: curve records, pairwise intersection, and classification.

pub mod classify;
pub mod intersect;
pub mod record;
mod validate;

pub use classify::{classify_curves, classify_curves_with, CurveClass, CurveClassification, Crossing};
pub use intersect::{intersect, intersect_detailed, intersect_with, IntersectOptions, IntersectionOutcome};
pub use record::{CurveRecord, NavCurve, NO_CURVE};
