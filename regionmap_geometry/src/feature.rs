// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::slice;

use kurbo::{Point, Rect};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::bounds::compute_bounds;
use crate::coords::Coordinates;
use crate::hit::{hit_test, point_in_polygon_with_holes};

/// A closed ring of world-space vertices.
///
/// The closing vertex may or may not repeat the first one; every algorithm in
/// this crate treats the last → first edge as part of the ring.
pub type Ring = Vec<Point>;

/// A polygon: an outer boundary followed by zero or more holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    rings: SmallVec<[Ring; 1]>,
}

impl Polygon {
    /// Creates a polygon from its rings, outer boundary first.
    #[must_use]
    pub fn new(rings: Vec<Ring>) -> Self {
        Self {
            rings: SmallVec::from_vec(rings),
        }
    }

    /// All rings, outer boundary first.
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// The outer boundary, or an empty slice for a polygon without rings.
    #[must_use]
    pub fn outer(&self) -> &[Point] {
        self.rings.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// The holes cut out of the outer boundary.
    #[must_use]
    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or(&[])
    }

    /// Returns `true` if `pt` is inside the outer ring and outside every hole.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        point_in_polygon_with_holes(pt, &self.rings)
    }
}

/// Which GeoJSON geometry type a feature was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    /// A single polygon.
    Polygon,
    /// A collection of polygons.
    MultiPolygon,
}

/// Projected feature geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single polygon with optional holes.
    Polygon(Polygon),
    /// Several polygons, each with optional holes.
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// Builds geometry from projected coordinates.
    ///
    /// A ring set becomes a [`Geometry::Polygon`] and a multi ring set a
    /// [`Geometry::MultiPolygon`]. Shallower nestings describe no area and
    /// return `None`.
    #[must_use]
    pub fn from_coordinates(coords: Coordinates<Point>) -> Option<Self> {
        match coords {
            Coordinates::RingSet(rings) => Some(Self::Polygon(Polygon::new(rings))),
            Coordinates::MultiRingSet(sets) => Some(Self::MultiPolygon(
                sets.into_iter().map(Polygon::new).collect(),
            )),
            Coordinates::Position(_) | Coordinates::Ring(_) => None,
        }
    }

    /// Returns the geometry kind.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// The constituent polygons; a single polygon yields a one-element slice.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Polygon(polygon) => slice::from_ref(polygon),
            Self::MultiPolygon(polygons) => polygons,
        }
    }
}

/// A named region: projected geometry plus its properties bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    geometry: Geometry,
    properties: Map<String, Value>,
}

impl Feature {
    /// Creates a feature from geometry and properties.
    #[must_use]
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    /// Returns the projected geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the geometry kind.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Returns the raw properties bag.
    #[must_use]
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns the string property stored under `key`, if any.
    #[must_use]
    pub fn name(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Iterates over every vertex of every ring of every polygon.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.geometry
            .polygons()
            .iter()
            .flat_map(|polygon| polygon.rings().iter())
            .flat_map(|ring| ring.iter().copied())
    }

    /// Returns `true` if any constituent polygon contains `pt`.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.geometry.polygons().iter().any(|p| p.contains(pt))
    }
}

/// The loaded features together with their precomputed global bounds.
///
/// Immutable after construction.
#[derive(Clone, Debug)]
pub struct FeatureSet {
    features: Vec<Feature>,
    bounds: Rect,
}

impl FeatureSet {
    /// Wraps `features`, computing their global bounds once.
    ///
    /// An empty set has non-finite bounds, see [`crate::EMPTY_BOUNDS`].
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        let bounds = compute_bounds(&features);
        Self { features, bounds }
    }

    /// Returns the features in stored order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Returns the feature at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Returns the number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if there are no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns the world bounds of every vertex in the set.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the index of the first feature containing `world_pt`.
    #[must_use]
    pub fn hit_test(&self, world_pt: Point) -> Option<usize> {
        hit_test(world_pt, &self.features)
    }

    /// Returns the index of the first feature whose `key` property equals `name`.
    #[must_use]
    pub fn find_by_name(&self, key: &str, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f.name(key) == Some(name))
    }
}
