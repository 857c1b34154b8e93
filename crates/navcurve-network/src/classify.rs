//! Batch classification of a curve list into start, end, and crossing buckets.
//!
//! Every unordered pair of curves is tested with [`intersect_with`], so the
//! cost grows quadratically with the number of curves. This suits prefab-sized
//! networks of a few dozen curves.

use navcurve_core::{Result, Validate};
use navcurve_math::Point3;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::intersect::{intersect_with, IntersectOptions};
use crate::record::CurveRecord;

/// Bucket a curve can be assigned to. A curve may be in several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveClass {
    /// The curve continues into another curve.
    Start,
    /// Another curve leads into the curve.
    End,
    /// The curve crosses another curve.
    Cross,
}

/// Two curves, by index into the classified list, and where they cross.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub first: usize,
    pub second: usize,
    pub point: Point3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveClassification {
    pub start: Vec<usize>,
    pub end: Vec<usize>,
    /// Ordered by `first`, then `second`; `first < second` always holds.
    pub cross: Vec<Crossing>,
}

impl CurveClassification {
    /// Indices of the curves in `class`, ascending and without duplicates.
    pub fn indices(&self, class: CurveClass) -> Vec<usize> {
        match class {
            CurveClass::Start => self.start.clone(),
            CurveClass::End => self.end.clone(),
            CurveClass::Cross => {
                let mut indices: Vec<usize> = self
                    .cross
                    .iter()
                    .flat_map(|c| [c.first, c.second])
                    .collect();
                indices.sort_unstable();
                indices.dedup();
                indices
            }
        }
    }

    /// Classes the curve at `index` belongs to.
    pub fn classes_of(&self, index: usize) -> Vec<CurveClass> {
        [CurveClass::Start, CurveClass::End, CurveClass::Cross]
            .into_iter()
            .filter(|&class| self.indices(class).contains(&index))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty() && self.cross.is_empty()
    }
}

/// Classify curves using the default intersection options.
pub fn classify_curves<C: CurveRecord>(curves: &[C]) -> Result<CurveClassification> {
    classify_curves_with(curves, &IntersectOptions::default())
}

/// Sort curves into start/end buckets by their links and record every
/// crossing pair `(i, j)` with `i < j`.
pub fn classify_curves_with<C: CurveRecord>(
    curves: &[C],
    options: &IntersectOptions,
) -> Result<CurveClassification> {
    options.validate()?;

    let mut classification = CurveClassification::default();
    for (index, curve) in curves.iter().enumerate() {
        if curve.has_next() {
            classification.start.push(index);
        }
        if curve.has_prev() {
            classification.end.push(index);
        }
    }

    classification.cross = collect_crossings(curves, options)?;

    log::debug!(
        "Classified {} curves: {} start, {} end, {} crossings",
        curves.len(),
        classification.start.len(),
        classification.end.len(),
        classification.cross.len()
    );

    Ok(classification)
}

fn pair_indices(count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
        .collect()
}

fn test_pair<C: CurveRecord>(
    curves: &[C],
    (first, second): (usize, usize),
    options: &IntersectOptions,
) -> Result<Option<Crossing>> {
    let point = intersect_with(&curves[first], &curves[second], options)?;
    Ok(point.map(|point| Crossing {
        first,
        second,
        point,
    }))
}

#[cfg(feature = "parallel")]
fn collect_crossings<C: CurveRecord>(curves: &[C], options: &IntersectOptions) -> Result<Vec<Crossing>> {
    let hits = pair_indices(curves.len())
        .into_par_iter()
        .map(|pair| test_pair(curves, pair, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(hits.into_iter().flatten().collect())
}

#[cfg(not(feature = "parallel"))]
fn collect_crossings<C: CurveRecord>(curves: &[C], options: &IntersectOptions) -> Result<Vec<Crossing>> {
    collect_crossings_serial(curves, options)
}

#[cfg(any(test, not(feature = "parallel")))]
fn collect_crossings_serial<C: CurveRecord>(curves: &[C], options: &IntersectOptions) -> Result<Vec<Crossing>> {
    let hits = pair_indices(curves.len())
        .into_iter()
        .map(|pair| test_pair(curves, pair, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(hits.into_iter().flatten().collect())
}
