// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GeoJSON feature collection decoding.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::coords::{Coordinates, LonLat, project_coordinates};
use crate::error::SourceError;
use crate::feature::{Feature, FeatureSet, Geometry};

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Decodes a GeoJSON feature collection into projected features.
///
/// `Polygon` and `MultiPolygon` features are kept in document order with
/// their coordinates projected (see [`crate::project`]). Features with a null
/// geometry or any other geometry type are skipped with a warning. Positions
/// may carry a third (elevation) component, which is ignored.
///
/// Malformed JSON or coordinate arrays that do not match the declared type
/// fail the whole load.
pub fn parse_feature_collection(json: &str) -> Result<FeatureSet, SourceError> {
    let raw: RawCollection = serde_json::from_str(json)?;
    let total = raw.features.len();
    let mut features = Vec::with_capacity(total);

    for (index, raw_feature) in raw.features.into_iter().enumerate() {
        let Some(geometry) = raw_feature.geometry else {
            warn!(feature = index, "skipping feature without geometry");
            continue;
        };
        let coords = match geometry.kind.as_str() {
            "Polygon" => Coordinates::RingSet(decode(index, geometry.coordinates, |v| {
                serde_json::from_value::<Vec<Vec<Vec<f64>>>>(v)
                    .map(|rings| rings.iter().map(|ring| positions(ring)).collect())
            })?),
            "MultiPolygon" => Coordinates::MultiRingSet(decode(index, geometry.coordinates, |v| {
                serde_json::from_value::<Vec<Vec<Vec<Vec<f64>>>>>(v).map(|polygons| {
                    polygons
                        .iter()
                        .map(|rings| rings.iter().map(|ring| positions(ring)).collect())
                        .collect()
                })
            })?),
            other => {
                warn!(feature = index, kind = other, "skipping unsupported geometry type");
                continue;
            }
        };
        let coords = validate(index, coords)?;
        let Some(geometry) = Geometry::from_coordinates(project_coordinates(&coords)) else {
            continue;
        };
        features.push(Feature::new(
            geometry,
            raw_feature.properties.unwrap_or_default(),
        ));
    }

    let set = FeatureSet::new(features);
    info!(
        loaded = set.len(),
        skipped = total - set.len(),
        bounds = ?set.bounds(),
        "decoded feature collection"
    );
    Ok(set)
}

/// Positions are decoded leniently here and checked by [`validate`].
type RawRing = Vec<Option<LonLat>>;

fn positions(ring: &[Vec<f64>]) -> RawRing {
    ring.iter()
        .map(|pos| match pos.as_slice() {
            [lon, lat, ..] => Some(LonLat::new(*lon, *lat)),
            _ => None,
        })
        .collect()
}

fn decode<T>(
    feature: usize,
    value: Value,
    f: impl FnOnce(Value) -> Result<T, serde_json::Error>,
) -> Result<T, SourceError> {
    f(value).map_err(|err| SourceError::InvalidCoordinates {
        feature,
        reason: err.to_string(),
    })
}

fn validate(
    feature: usize,
    coords: Coordinates<Option<LonLat>>,
) -> Result<Coordinates<LonLat>, SourceError> {
    let mut invalid = false;
    let checked = coords.map(|pos| match pos {
        Some(p) if p.lon.is_finite() && p.lat.is_finite() => *p,
        _ => {
            invalid = true;
            LonLat::new(0.0, 0.0)
        }
    });
    if invalid {
        return Err(SourceError::InvalidCoordinates {
            feature,
            reason: "every position needs a finite longitude and latitude".to_string(),
        });
    }
    Ok(checked)
}
