// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::feature::{Feature, Ring};

/// Even-odd ray casting test against a single ring.
///
/// Casts a ray towards `+x` and counts edge crossings; the last vertex is
/// joined back to the first. Rings with fewer than three vertices contain
/// nothing. Runs in `O(ring.len())`.
#[must_use]
pub fn point_in_ring(pt: Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for (i, pi) in ring.iter().enumerate() {
        let pj = ring[j];
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` if `pt` is inside `rings[0]` and inside none of `rings[1..]`.
#[must_use]
pub fn point_in_polygon_with_holes(pt: Point, rings: &[Ring]) -> bool {
    let Some((outer, holes)) = rings.split_first() else {
        return false;
    };
    point_in_ring(pt, outer) && !holes.iter().any(|hole| point_in_ring(pt, hole))
}

/// Returns the index of the first feature containing `world_pt`.
///
/// Features are tested in stored order and the first match wins, so
/// overlapping features resolve to whichever was loaded first. Within a
/// multipolygon the first containing constituent ends the search.
#[must_use]
pub fn hit_test(world_pt: Point, features: &[Feature]) -> Option<usize> {
    features.iter().position(|feature| feature.contains(world_pt))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use serde_json::Map;

    use super::{hit_test, point_in_polygon_with_holes, point_in_ring};
    use crate::feature::{Feature, Geometry, Polygon};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square_with_hole() -> Vec<Vec<Point>> {
        vec![
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            pts(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]),
        ]
    }

    #[test]
    fn hole_excludes_its_interior() {
        let rings = square_with_hole();
        assert!(!point_in_polygon_with_holes(Point::new(5.0, 5.0), &rings));
        assert!(point_in_polygon_with_holes(Point::new(1.0, 1.0), &rings));
        assert!(!point_in_polygon_with_holes(Point::new(11.0, 1.0), &rings));
        assert!(!point_in_polygon_with_holes(Point::new(1.0, 1.0), &[]));
    }

    #[test]
    fn concave_ring() {
        // A "U" shape: the notch between the arms is outside.
        let u = pts(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 6.0),
            (4.0, 6.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
        ]);
        assert!(point_in_ring(Point::new(1.0, 5.0), &u));
        assert!(point_in_ring(Point::new(5.0, 5.0), &u));
        assert!(!point_in_ring(Point::new(3.0, 5.0), &u));
        assert!(point_in_ring(Point::new(3.0, 1.0), &u));
    }

    #[test]
    fn closed_and_open_rings_agree() {
        let open = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        let mut closed = open.clone();
        closed.push(open[0]);
        for probe in [Point::new(2.0, 1.0), Point::new(3.9, 2.5), Point::new(-1.0, 0.5)] {
            assert_eq!(point_in_ring(probe, &open), point_in_ring(probe, &closed));
        }
        assert!(!point_in_ring(Point::new(1.0, 1.0), &open[..2]));
    }

    #[test]
    fn first_feature_wins_on_overlap() {
        let a = Feature::new(Geometry::Polygon(Polygon::new(square_with_hole())), Map::new());
        let b = Feature::new(
            Geometry::Polygon(Polygon::new(vec![pts(&[
                (3.0, 3.0),
                (20.0, 3.0),
                (20.0, 20.0),
                (3.0, 20.0),
            ])])),
            Map::new(),
        );
        let features = [a, b];
        // Inside both shells: load order decides.
        assert_eq!(hit_test(Point::new(8.0, 8.0), &features), Some(0));
        // In a's hole but inside b.
        assert_eq!(hit_test(Point::new(5.0, 5.0), &features), Some(1));
        assert_eq!(hit_test(Point::new(15.0, 15.0), &features), Some(1));
        assert_eq!(hit_test(Point::new(-1.0, -1.0), &features), None);
    }
}
