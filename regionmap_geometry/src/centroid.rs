// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::feature::{Feature, Polygon};

/// Centroid of a single ring plus its signed area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingCentroid {
    /// Area centroid, or the first vertex for a degenerate ring.
    pub centroid: Point,
    /// Shoelace area; the sign follows the ring's winding.
    pub signed_area: f64,
}

/// Computes the area centroid of a ring with the shoelace formula.
///
/// For each edge `cross = x1*y2 - x2*y1`; `signed_area = Σcross / 2` and
/// `cx = Σ(x1 + x2) * cross / (6 * signed_area)` (likewise `cy`). The last
/// vertex is joined back to the first.
///
/// A ring with zero signed area (collapsed, or self-intersecting so that
/// lobes cancel) falls back to its first vertex. An empty ring yields the
/// origin with zero area.
#[must_use]
pub fn ring_centroid(ring: &[Point]) -> RingCentroid {
    let Some(&first) = ring.first() else {
        return RingCentroid {
            centroid: Point::ORIGIN,
            signed_area: 0.0,
        };
    };
    let mut twice_area = 0.0;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for (i, p1) in ring.iter().enumerate() {
        let p2 = ring[(i + 1) % ring.len()];
        let cross = p1.x * p2.y - p2.x * p1.y;
        twice_area += cross;
        sum_x += (p1.x + p2.x) * cross;
        sum_y += (p1.y + p2.y) * cross;
    }
    let signed_area = 0.5 * twice_area;
    if signed_area == 0.0 {
        return RingCentroid {
            centroid: first,
            signed_area,
        };
    }
    RingCentroid {
        centroid: Point::new(sum_x / (6.0 * signed_area), sum_y / (6.0 * signed_area)),
        signed_area,
    }
}

/// Centroid of a polygon's outer ring. Holes do not move the anchor.
#[must_use]
pub fn polygon_centroid(polygon: &Polygon) -> RingCentroid {
    ring_centroid(polygon.outer())
}

/// Returns the label anchor for a feature.
///
/// For a polygon this is the centroid of its outer ring. For a multipolygon
/// it is the centroid of the constituent whose outer ring has the largest
/// absolute area, so the label sits on the visually dominant part; ties keep
/// the earliest. Polygons whose outer ring has no vertices are skipped, so a
/// feature without any vertex has no anchor and yields `None`.
#[must_use]
pub fn feature_centroid(feature: &Feature) -> Option<Point> {
    let mut best: Option<RingCentroid> = None;
    for polygon in feature.geometry().polygons() {
        if polygon.outer().is_empty() {
            continue;
        }
        let candidate = polygon_centroid(polygon);
        match best {
            Some(b) if b.signed_area.abs() >= candidate.signed_area.abs() => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|b| b.centroid)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use serde_json::Map;

    use super::{feature_centroid, ring_centroid};
    use crate::feature::{Feature, Geometry, Polygon};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn square_centroid_and_area() {
        let ring = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
        let c = ring_centroid(&ring);
        assert_eq!(c.centroid, Point::new(2.0, 1.0));
        assert_eq!(c.signed_area, 8.0);

        // Reversed winding flips the sign, not the centroid.
        let reversed: Vec<_> = ring.iter().rev().copied().collect();
        let r = ring_centroid(&reversed);
        assert_eq!(r.signed_area, -8.0);
        assert_eq!(r.centroid, Point::new(2.0, 1.0));
    }

    #[test]
    fn explicitly_closed_ring_matches_open_ring() {
        let open = pts(&[(0.0, 0.0), (6.0, 0.0), (0.0, 3.0)]);
        let mut closed = open.clone();
        closed.push(open[0]);
        assert_eq!(ring_centroid(&open), ring_centroid(&closed));
        assert_eq!(ring_centroid(&open).centroid, Point::new(2.0, 1.0));
    }

    #[test]
    fn degenerate_ring_falls_back_to_first_vertex() {
        let collinear = pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let c = ring_centroid(&collinear);
        assert_eq!(c.signed_area, 0.0);
        assert_eq!(c.centroid, Point::new(1.0, 1.0));

        let collapsed = pts(&[(5.0, -1.0), (5.0, -1.0), (5.0, -1.0)]);
        assert_eq!(ring_centroid(&collapsed).centroid, Point::new(5.0, -1.0));

        let empty = ring_centroid(&[]);
        assert_eq!(empty.centroid, Point::ORIGIN);
        assert_eq!(empty.signed_area, 0.0);
    }

    #[test]
    fn multipolygon_anchors_to_largest_part() {
        let small = Polygon::new(vec![pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]);
        // Clockwise (negative area) but larger: absolute area decides.
        let large = Polygon::new(vec![pts(&[
            (10.0, 0.0),
            (10.0, 4.0),
            (14.0, 4.0),
            (14.0, 0.0),
        ])]);
        let feature = Feature::new(Geometry::MultiPolygon(vec![small, large]), Map::new());
        assert_eq!(feature_centroid(&feature), Some(Point::new(12.0, 2.0)));

        let empty = Feature::new(Geometry::MultiPolygon(Vec::new()), Map::new());
        assert_eq!(feature_centroid(&empty), None);
    }

    #[test]
    fn vertexless_polygons_have_no_anchor() {
        let bare = Feature::new(Geometry::Polygon(Polygon::new(Vec::new())), Map::new());
        assert_eq!(feature_centroid(&bare), None);

        // An empty constituent does not shadow a real one.
        let real = Polygon::new(vec![pts(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)])]);
        let mixed = Feature::new(
            Geometry::MultiPolygon(vec![Polygon::new(vec![Vec::new()]), real]),
            Map::new(),
        );
        assert_eq!(feature_centroid(&mixed), Some(Point::new(3.0, 3.0)));
    }
}
