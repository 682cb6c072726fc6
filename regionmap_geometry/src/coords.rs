// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LonLat {
    /// Longitude, east positive.
    pub lon: f64,
    /// Latitude, north positive.
    pub lat: f64,
}

impl LonLat {
    /// Creates a position from longitude and latitude.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Maps a geographic position into world coordinates.
///
/// Longitude is kept and latitude negated, so increasing world Y points
/// south and matches screen space where Y grows downward.
#[must_use]
pub fn project(pos: LonLat) -> Point {
    Point::new(pos.lon, -pos.lat)
}

/// Coordinate arrays tagged with their nesting depth.
///
/// `P` is the position type: [`LonLat`] as decoded, [`kurbo::Point`] once
/// projected.
#[derive(Clone, Debug, PartialEq)]
pub enum Coordinates<P> {
    /// A single position.
    Position(P),
    /// One closed ring.
    Ring(Vec<P>),
    /// A polygon: outer ring first, then holes.
    RingSet(Vec<Vec<P>>),
    /// A multipolygon: one ring set per constituent polygon.
    MultiRingSet(Vec<Vec<Vec<P>>>),
}

impl<P> Coordinates<P> {
    /// Applies `f` to every position, preserving the nesting.
    #[must_use]
    pub fn map<Q>(&self, mut f: impl FnMut(&P) -> Q) -> Coordinates<Q> {
        match self {
            Self::Position(p) => Coordinates::Position(f(p)),
            Self::Ring(ring) => Coordinates::Ring(map_ring(ring, &mut f)),
            Self::RingSet(rings) => Coordinates::RingSet(map_ring_set(rings, &mut f)),
            Self::MultiRingSet(sets) => Coordinates::MultiRingSet(
                sets.iter().map(|rings| map_ring_set(rings, &mut f)).collect(),
            ),
        }
    }

    /// Returns the number of positions at every depth.
    #[must_use]
    pub fn position_count(&self) -> usize {
        match self {
            Self::Position(_) => 1,
            Self::Ring(ring) => ring.len(),
            Self::RingSet(rings) => rings.iter().map(Vec::len).sum(),
            Self::MultiRingSet(sets) => sets.iter().flatten().map(Vec::len).sum(),
        }
    }
}

fn map_ring<P, Q>(ring: &[P], f: &mut impl FnMut(&P) -> Q) -> Vec<Q> {
    ring.iter().map(|p| f(p)).collect()
}

fn map_ring_set<P, Q>(rings: &[Vec<P>], f: &mut impl FnMut(&P) -> Q) -> Vec<Vec<Q>> {
    rings.iter().map(|ring| map_ring(ring, f)).collect()
}

/// Projects every position of `coords` with [`project`].
#[must_use]
pub fn project_coordinates(coords: &Coordinates<LonLat>) -> Coordinates<Point> {
    coords.map(|p| project(*p))
}
