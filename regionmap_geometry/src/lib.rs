// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Geometry: the geometry kernel behind the region map.
//!
//! This crate turns decoded region outlines into planar world geometry and
//! answers the questions the viewport and gesture layers ask about it:
//! - [`project`]: longitude/latitude → world coordinates (latitude negated so
//!   world Y grows downward like screen Y).
//! - [`compute_bounds`] / [`feature_bounds`]: axis-aligned world bounds.
//! - [`ring_centroid`] / [`feature_centroid`]: label anchors.
//! - [`point_in_ring`], [`point_in_polygon_with_holes`] and [`hit_test`]:
//!   exact even-odd hit testing with holes.
//!
//! It also decodes the two external sources the map consumes:
//! - A GeoJSON feature collection of `Polygon`/`MultiPolygon` features
//!   ([`parse_feature_collection`]).
//! - A list of points of interest, one per region ([`PoiIndex::from_json`]),
//!   whose coordinates may be decimal degrees or `d:m:s` strings.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use regionmap_geometry::parse_feature_collection;
//!
//! let json = r#"{
//!   "type": "FeatureCollection",
//!   "features": [{
//!     "type": "Feature",
//!     "properties": { "name": "Square" },
//!     "geometry": {
//!       "type": "Polygon",
//!       "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]
//!     }
//!   }]
//! }"#;
//!
//! let set = parse_feature_collection(json).unwrap();
//! // Latitude is negated: the square spans world y in [-10, 0].
//! assert_eq!(set.bounds().y0, -10.0);
//! assert_eq!(set.hit_test(Point::new(5.0, -5.0)), Some(0));
//! assert_eq!(set.get(0).unwrap().name("name"), Some("Square"));
//! ```
//!
//! ## Overlapping features
//!
//! Hit testing returns the **first** feature in stored order whose shell
//! contains the point and whose holes do not. Overlapping features are
//! therefore disambiguated by load order. This is deterministic, if arbitrary.

mod bounds;
mod centroid;
mod coords;
mod error;
mod feature;
mod hit;
mod poi;
mod source;

pub use bounds::{EMPTY_BOUNDS, compute_bounds, feature_bounds};
pub use centroid::{RingCentroid, feature_centroid, polygon_centroid, ring_centroid};
pub use coords::{Coordinates, LonLat, project, project_coordinates};
pub use error::SourceError;
pub use feature::{Feature, FeatureSet, Geometry, GeometryKind, Polygon, Ring};
pub use hit::{hit_test, point_in_polygon_with_holes, point_in_ring};
pub use poi::{PoiIndex, PointOfInterest, parse_angle};
pub use source::parse_feature_collection;
