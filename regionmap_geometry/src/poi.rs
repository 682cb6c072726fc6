// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points of interest: one labelled location per region.

use std::collections::HashMap;

use kurbo::Point;
use serde::Deserialize;
use tracing::{info, warn};

use crate::coords::{LonLat, project};
use crate::error::SourceError;

/// A labelled location associated with a region, such as its capital.
#[derive(Clone, Debug, PartialEq)]
pub struct PointOfInterest {
    /// Region name this record belongs to; matched against feature names.
    pub region: String,
    /// Human-readable label, such as a settlement name.
    pub label: String,
    /// Geographic position in decimal degrees.
    pub position: LonLat,
    /// Optional elevation in the source's units.
    pub elevation: Option<f64>,
}

impl PointOfInterest {
    /// Returns the projected world position.
    #[must_use]
    pub fn world_position(&self) -> Point {
        project(self.position)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPoi {
    region: String,
    settlement_name: String,
    longitude: RawAngle,
    latitude: RawAngle,
    #[serde(default)]
    elevation: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAngle {
    Decimal(f64),
    Text(String),
}

impl RawAngle {
    fn degrees(&self) -> Result<f64, SourceError> {
        match self {
            Self::Decimal(value) if value.is_finite() => Ok(*value),
            Self::Decimal(value) => Err(SourceError::InvalidAngle(value.to_string())),
            Self::Text(text) => parse_angle(text),
        }
    }
}

/// Parses an angle written as decimal degrees or `degrees:minutes:seconds`.
///
/// `d:m:s` is converted as `d + m/60 + s/3600`; minutes and seconds may be
/// omitted (`d:m`) and may carry fractions. A leading minus sign on the
/// degrees negates the whole angle, so `-33:52:10` is south of `-33`.
pub fn parse_angle(text: &str) -> Result<f64, SourceError> {
    let invalid = || SourceError::InvalidAngle(text.to_string());
    let trimmed = text.trim();
    if !trimmed.contains(':') {
        return trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(invalid);
    }

    let mut parts = trimmed.split(':');
    let degrees_text = parts.next().unwrap_or_default().trim();
    let negative = degrees_text.starts_with('-');
    let degrees = degrees_text.parse::<f64>().map_err(|_| invalid())?.abs();
    let mut value = degrees;
    for divisor in [60.0, 3600.0] {
        let Some(part) = parts.next() else {
            break;
        };
        let component = part.trim().parse::<f64>().map_err(|_| invalid())?;
        if !(0.0..60.0).contains(&component) {
            return Err(invalid());
        }
        value += component / divisor;
    }
    if parts.next().is_some() || !value.is_finite() {
        return Err(invalid());
    }
    Ok(if negative { -value } else { value })
}

/// Points of interest keyed by region name.
#[derive(Clone, Debug, Default)]
pub struct PoiIndex {
    by_region: HashMap<String, PointOfInterest>,
}

impl PoiIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON array of
    /// `{ region, settlementName, longitude, latitude, elevation? }` records.
    ///
    /// Longitude and latitude may be numbers or strings (decimal or `d:m:s`).
    /// A record that fails to parse fails the whole load. When two records
    /// name the same region the later one wins.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let raw: Vec<RawPoi> = serde_json::from_str(json)?;
        let mut index = Self::new();
        for record in raw {
            let poi = PointOfInterest {
                position: LonLat::new(record.longitude.degrees()?, record.latitude.degrees()?),
                region: record.region,
                label: record.settlement_name,
                elevation: record.elevation,
            };
            index.insert(poi);
        }
        info!(records = index.len(), "decoded points of interest");
        Ok(index)
    }

    /// Inserts a record, replacing any earlier record for the same region.
    pub fn insert(&mut self, poi: PointOfInterest) {
        if let Some(previous) = self.by_region.insert(poi.region.clone(), poi) {
            warn!(region = %previous.region, "duplicate point of interest, keeping the later record");
        }
    }

    /// Looks up the record for a region name.
    #[must_use]
    pub fn get(&self, region: &str) -> Option<&PointOfInterest> {
        self.by_region.get(region)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_region.len()
    }

    /// Returns `true` if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_region.is_empty()
    }

    /// Iterates over the records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.by_region.values()
    }
}

impl FromIterator<PointOfInterest> for PoiIndex {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        let mut index = Self::new();
        for poi in iter {
            index.insert(poi);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PoiIndex, parse_angle};
    use crate::error::SourceError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_decimal_and_dms_angles() {
        assert_eq!(parse_angle("139.6917").unwrap(), 139.6917);
        assert_eq!(parse_angle(" -12.5 ").unwrap(), -12.5);
        assert!(close(parse_angle("139:41:30").unwrap(), 139.0 + 41.0 / 60.0 + 30.0 / 3600.0));
        assert!(close(parse_angle("35:41").unwrap(), 35.0 + 41.0 / 60.0));
        assert!(close(parse_angle("-33:52:10.5").unwrap(), -(33.0 + 52.0 / 60.0 + 10.5 / 3600.0)));
        assert!(close(parse_angle("-0:30:00").unwrap(), -0.5));
    }

    #[test]
    fn rejects_malformed_angles() {
        for bad in ["", "east", "1:2:3:4", "10:75:00", "10:xx", "NaN", "inf"] {
            assert!(
                matches!(parse_angle(bad), Err(SourceError::InvalidAngle(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn decodes_records_keyed_by_region() {
        let json = r#"[
            { "region": "Tokyo", "settlementName": "Shinjuku", "longitude": "139:41:30", "latitude": 35.689, "elevation": 40 },
            { "region": "Osaka", "settlementName": "Osaka", "longitude": 135.52, "latitude": "34:41:12" }
        ]"#;
        let index = PoiIndex::from_json(json).unwrap();
        assert_eq!(index.len(), 2);

        let tokyo = index.get("Tokyo").unwrap();
        assert_eq!(tokyo.label, "Shinjuku");
        assert_eq!(tokyo.elevation, Some(40.0));
        assert!(close(tokyo.position.lon, 139.691_666_666_666_66));
        assert_eq!(tokyo.world_position().y, -35.689);

        let osaka = index.get("Osaka").unwrap();
        assert_eq!(osaka.elevation, None);
        assert!(close(osaka.world_position().y, -(34.0 + 41.0 / 60.0 + 12.0 / 3600.0)));
        assert!(index.get("Kyoto").is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let json = r#"[
            { "region": "A", "settlementName": "first", "longitude": 1, "latitude": 1 },
            { "region": "A", "settlementName": "second", "longitude": 2, "latitude": 2 }
        ]"#;
        let index = PoiIndex::from_json(json).unwrap();
        assert_eq!(index.len(), 1);
        let a = index.get("A").unwrap();
        assert_eq!(a.label, "second");
        assert_eq!(a.world_position(), Point::new(2.0, -2.0));
    }

    #[test]
    fn malformed_records_fail_the_load() {
        assert!(matches!(
            PoiIndex::from_json(r#"[{ "region": "A" }]"#),
            Err(SourceError::Json(_))
        ));
        assert!(matches!(
            PoiIndex::from_json(
                r#"[{ "region": "A", "settlementName": "x", "longitude": "far", "latitude": 1 }]"#
            ),
            Err(SourceError::InvalidAngle(_))
        ));
    }
}
