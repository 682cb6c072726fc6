// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing interface between the controller and a host graphics backend.
//!
//! The controller does not rasterize anything. [`crate::ViewportController::render`]
//! walks the features in stored order and issues screen-space commands to a
//! [`Renderer`]; the host maps them onto its canvas, GPU scene or test
//! recorder.

use kurbo::{Affine, BezPath, Point};
use regionmap_geometry::{PointOfInterest, Polygon};

/// Per-polygon highlight flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolygonStyle {
    /// The polygon belongs to the selected feature.
    pub selected: bool,
    /// The polygon belongs to the feature under the pointer.
    pub hovered: bool,
}

/// A sink for map drawing commands.
///
/// All coordinates are in screen space (logical pixels of the surface).
pub trait Renderer {
    /// Fills and outlines one polygon.
    ///
    /// Called once per polygon; a multipolygon feature issues one call per
    /// constituent. Each ring of `path` is a closed subpath, outer ring first,
    /// so even-odd filling leaves holes empty.
    fn fill_polygon(&mut self, path: &BezPath, style: PolygonStyle);

    /// Draws the selected feature's name at its centroid.
    fn draw_label(&mut self, anchor: Point, text: &str);

    /// Marks the point of interest belonging to the selected feature.
    ///
    /// The default does nothing.
    fn draw_marker(&mut self, at: Point, poi: &PointOfInterest) {
        let _ = (at, poi);
    }
}

/// Builds the screen-space path for `polygon` under `transform`.
///
/// Rings with no vertices are skipped.
#[must_use]
pub fn polygon_path(polygon: &Polygon, transform: Affine) -> BezPath {
    let mut path = BezPath::new();
    for ring in polygon.rings() {
        let Some((first, rest)) = ring.split_first() else {
            continue;
        };
        path.move_to(transform * *first);
        for pt in rest {
            path.line_to(transform * *pt);
        }
        path.close_path();
    }
    path
}
