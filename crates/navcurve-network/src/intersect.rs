//! Planar intersection of two navigation curves.
//!
//! Each curve is cut into `part_count` chords at equal fractions of its stored
//! length. Chords are compared pairwise in the X/Z plane, curve A's chords in
//! the outer loop and curve B's in the inner loop, and the first qualifying
//! crossing wins. A crossing within the intersection tolerance of either
//! curve's own start or end abandons the whole pair: curves that merely touch
//! where they begin or end are not considered to cross.

use navcurve_core::{NavCurveError, Result, Tolerance, Validate};
use navcurve_geometry::Curve;
use navcurve_math::{Point3, Segment};
use serde::{Deserialize, Serialize};

use crate::record::CurveRecord;

/// Tuning for [`intersect_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectOptions {
    /// Number of chords each curve is cut into.
    pub part_count: usize,
    pub tolerance: Tolerance,
}

impl IntersectOptions {
    pub const DEFAULT_PART_COUNT: usize = 10;

    pub fn new(part_count: usize) -> Self {
        Self {
            part_count,
            ..Default::default()
        }
    }
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self {
            part_count: Self::DEFAULT_PART_COUNT,
            tolerance: Tolerance::default(),
        }
    }
}

/// Result of testing two curves against each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionOutcome {
    /// No chord pair crosses (parallel chord pairs are skipped).
    Disjoint,
    /// A crossing touches the start of one of the curves.
    NearStart,
    /// A crossing touches the end of one of the curves.
    NearEnd,
    /// The curves cross at this point.
    Crossing(Point3),
}

impl IntersectionOutcome {
    pub fn point(self) -> Option<Point3> {
        match self {
            Self::Crossing(p) => Some(p),
            _ => None,
        }
    }
}

/// Crossing point of two curves with ten chords per curve, if any.
///
/// `None` covers disjoint curves as well as crossings too close to a curve
/// endpoint; use [`intersect_detailed`] to tell them apart.
pub fn intersect<A, B>(curve_a: &A, curve_b: &B) -> Result<Option<Point3>>
where
    A: CurveRecord + ?Sized,
    B: CurveRecord + ?Sized,
{
    intersect_with(curve_a, curve_b, &IntersectOptions::default())
}

/// Crossing point of two curves, if any.
pub fn intersect_with<A, B>(curve_a: &A, curve_b: &B, options: &IntersectOptions) -> Result<Option<Point3>>
where
    A: CurveRecord + ?Sized,
    B: CurveRecord + ?Sized,
{
    Ok(intersect_detailed(curve_a, curve_b, options)?.point())
}

/// Test two curves against each other and report why no point was found.
///
/// The crossing point takes X and Z from curve A's chord. Its Y is the mean
/// height of both chords' endpoints, since the test itself ignores height.
pub fn intersect_detailed<A, B>(curve_a: &A, curve_b: &B, options: &IntersectOptions) -> Result<IntersectionOutcome>
where
    A: CurveRecord + ?Sized,
    B: CurveRecord + ?Sized,
{
    options.validate()?;

    let chords_a = chords(curve_a, options.part_count)?;
    let chords_b = chords(curve_b, options.part_count)?;
    let tol = options.tolerance;
    let last = options.part_count - 1;

    for (i, chord_a) in chords_a.iter().enumerate() {
        for (j, chord_b) in chords_b.iter().enumerate() {
            let Some(hit) = chord_a.intersect_xz(chord_b, tol.intersection) else {
                continue;
            };
            log::trace!("Chords {i}/{j} cross at mu_a={:.4}, mu_b={:.4}", hit.mu_a, hit.mu_b);

            let near_start = |mu: f64| tol.is_intersection_zero(mu);
            let near_end = |mu: f64| tol.is_intersection_zero(1.0 - mu);

            if (near_start(hit.mu_a) && i == 0) || (near_start(hit.mu_b) && j == 0) {
                log::debug!("Crossing at curve start (chords {i}/{j}), ignoring pair");
                return Ok(IntersectionOutcome::NearStart);
            }
            if (near_end(hit.mu_a) && i == last) || (near_end(hit.mu_b) && j == last) {
                log::debug!("Crossing at curve end (chords {i}/{j}), ignoring pair");
                return Ok(IntersectionOutcome::NearEnd);
            }

            let on_a = chord_a.at(hit.mu_a);
            let y = (chord_a.start.y + chord_a.end.y + chord_b.start.y + chord_b.end.y) / 4.0;
            let point = Point3::new(on_a.x, y, on_a.z);
            log::debug!("Curves cross at {point} (chords {i}/{j})");
            return Ok(IntersectionOutcome::Crossing(point));
        }
    }

    Ok(IntersectionOutcome::Disjoint)
}

/// Cut a curve into `part_count` chords at equal fractions of its stored length.
fn chords<C: CurveRecord + ?Sized>(record: &C, part_count: usize) -> Result<Vec<Segment>> {
    let length = record.length();
    if !length.is_finite() || length <= 0.0 {
        return Err(NavCurveError::Geometry(format!(
            "curve length must be finite and positive, got {length}"
        )));
    }

    let curve = record.smooth_curve();
    let step = length / part_count as f64;
    Ok((0..part_count)
        .map(|i| {
            let pos = step * i as f64;
            Segment::new(
                curve.point_at(pos / length),
                curve.point_at((pos + step) / length),
            )
        })
        .collect())
}
