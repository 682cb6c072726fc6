// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for a single contact: incremental deltas, net offset from the
//! press position and the largest offset seen so far.
//!
//! ## Usage
//!
//! 1) Create a [`DragState`] when a contact goes down.
//! 2) On each move, call [`DragState::advance`] to get the delta since the
//!    previous position; apply it as a pan.
//! 3) Consult [`DragState::max_offset`] and [`DragState::elapsed`] to decide
//!    whether the contact still qualifies as a tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use regionmap_event_state::drag::DragState;
//!
//! let mut drag = DragState::new(Point::new(10.0, 20.0), 1_000);
//!
//! let delta = drag.advance(Point::new(15.0, 25.0));
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! // Moving back reduces the offset but not the high-water mark.
//! drag.advance(Point::new(10.0, 20.0));
//! assert_eq!(drag.offset(Point::new(10.0, 20.0)).x, 0.0);
//! assert!(drag.max_offset() > 7.0);
//! assert_eq!(drag.elapsed(1_120), 120);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one contact from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    origin: Point,
    last: Point,
    started_at: u64,
    max_offset: f64,
}

impl DragState {
    /// Starts tracking at `pos`, pressed at `time` (milliseconds).
    #[must_use]
    pub fn new(pos: Point, time: u64) -> Self {
        Self {
            origin: pos,
            last: pos,
            started_at: time,
            max_offset: 0.0,
        }
    }

    /// Moves to `pos`, returning the delta since the previous position.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        self.max_offset = self.max_offset.max(self.origin.distance(pos));
        delta
    }

    /// Net offset of `pos` from the press position.
    #[must_use]
    pub fn offset(&self, pos: Point) -> Vec2 {
        pos - self.origin
    }

    /// Largest distance from the press position reached by any update.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Milliseconds since the press; a clock that steps backwards reads as zero.
    #[must_use]
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.started_at)
    }
}
