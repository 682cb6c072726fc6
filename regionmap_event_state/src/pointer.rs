// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active contact tracking.
//!
//! [`PointerMap`] records every pointer that is currently down, keyed by its
//! [`PointerId`], together with its latest screen position. The gesture
//! recognizer consults it to decide between panning and pinching.

use hashbrown::HashMap;
use kurbo::Point;

/// Identifier of a contact, stable from press to release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The device that produced a contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    /// A mouse button held down.
    #[default]
    Mouse,
    /// A finger on a touch surface.
    Touch,
    /// A stylus.
    Pen,
}

/// A pointer down, move, up or cancel notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which contact this event belongs to.
    pub id: PointerId,
    /// Position in screen space (logical pixels of the drawing surface).
    pub position: Point,
    /// Device kind.
    pub kind: PointerKind,
    /// Timestamp in milliseconds from a monotonic clock.
    pub time: u64,
}

impl PointerEvent {
    /// Creates an event for a mouse contact.
    #[must_use]
    pub fn mouse(id: u64, position: Point, time: u64) -> Self {
        Self {
            id: PointerId(id),
            position,
            kind: PointerKind::Mouse,
            time,
        }
    }

    /// Creates an event for a touch contact.
    #[must_use]
    pub fn touch(id: u64, position: Point, time: u64) -> Self {
        Self {
            id: PointerId(id),
            position,
            kind: PointerKind::Touch,
            time,
        }
    }
}

/// The last known state of an active contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRecord {
    /// Contact identifier.
    pub id: PointerId,
    /// Latest screen position.
    pub position: Point,
    /// Device kind.
    pub kind: PointerKind,
}

impl From<&PointerEvent> for PointerRecord {
    fn from(event: &PointerEvent) -> Self {
        Self {
            id: event.id,
            position: event.position,
            kind: event.kind,
        }
    }
}

/// The set of contacts currently down.
#[derive(Clone, Debug, Default)]
pub struct PointerMap {
    records: HashMap<PointerId, PointerRecord>,
}

impl PointerMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contact, returning `true` if it was not already tracked.
    ///
    /// A repeated press for a tracked id only refreshes its position.
    pub fn insert(&mut self, record: PointerRecord) -> bool {
        self.records.insert(record.id, record).is_none()
    }

    /// Moves a tracked contact; returns `false` for an unknown id.
    pub fn update(&mut self, id: PointerId, position: Point) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.position = position;
                true
            }
            None => false,
        }
    }

    /// Forgets a contact, returning its last record.
    pub fn remove(&mut self, id: PointerId) -> Option<PointerRecord> {
        self.records.remove(&id)
    }

    /// Returns the record for `id`.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<&PointerRecord> {
        self.records.get(&id)
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of contacts down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no contact is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forgets every contact.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// The only contact, when exactly one is down.
    #[must_use]
    pub fn sole(&self) -> Option<PointerRecord> {
        if self.records.len() == 1 {
            self.records.values().next().copied()
        } else {
            None
        }
    }

    /// The two contacts with the lowest ids, which drive a pinch.
    ///
    /// Choosing by id keeps the pair stable regardless of hash order.
    #[must_use]
    pub fn pinch_pair(&self) -> Option<(PointerRecord, PointerRecord)> {
        let mut first: Option<PointerRecord> = None;
        let mut second: Option<PointerRecord> = None;
        for record in self.records.values().copied() {
            match first {
                Some(f) if record.id > f.id => {
                    if second.is_none_or(|s| record.id < s.id) {
                        second = Some(record);
                    }
                }
                _ => {
                    second = first;
                    first = Some(record);
                }
            }
        }
        Some((first?, second?))
    }
}
