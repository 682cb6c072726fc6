// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::feature::Feature;

/// Bounds of an empty vertex set: `{+inf, +inf, -inf, -inf}`.
///
/// Not finite, so fitting code can detect that there is nothing to frame.
pub const EMPTY_BOUNDS: Rect = Rect::new(
    f64::INFINITY,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
);

/// Returns the world bounds of every vertex of every feature.
///
/// Yields [`EMPTY_BOUNDS`] when there are no vertices; callers must check
/// [`Rect::is_finite`] before fitting.
#[must_use]
pub fn compute_bounds(features: &[Feature]) -> Rect {
    extend_bounds(EMPTY_BOUNDS, features.iter().flat_map(Feature::vertices))
}

/// Returns the world bounds of a single feature, used to frame a selection.
#[must_use]
pub fn feature_bounds(feature: &Feature) -> Rect {
    extend_bounds(EMPTY_BOUNDS, feature.vertices())
}

fn extend_bounds(start: Rect, points: impl Iterator<Item = Point>) -> Rect {
    points.fold(start, |r, p| {
        Rect::new(r.x0.min(p.x), r.y0.min(p.y), r.x1.max(p.x), r.y1.max(p.y))
    })
}
