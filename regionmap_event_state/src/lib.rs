// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Event State: gesture state for map interaction.
//!
//! This crate turns raw pointer and wheel events into viewport changes. It is
//! split into small pieces that can be used on their own:
//!
//! - [`pointer`]: the set of contacts currently down, keyed by id.
//! - [`drag`]: per-contact drag tracking with deltas, net offset and timing.
//! - [`gesture`]: the pan / pinch / tap state machine and wheel zoom, applied
//!   to a [`regionmap_view2d::Viewport`].
//!
//! The crate does not hit test or select anything. A recognized tap is
//! reported as [`gesture::GestureOutcome::Tap`] with its screen position;
//! callers convert it to world space and query their own geometry.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use regionmap_event_state::gesture::{GestureConfig, GestureOutcome, GestureRecognizer};
//! use regionmap_event_state::pointer::PointerEvent;
//! use regionmap_view2d::{ClampMode, Viewport};
//!
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//! view.set_clamp_mode(ClampMode::None);
//! let mut gestures = GestureRecognizer::new(GestureConfig::default());
//!
//! // Drag the map 40px to the right.
//! gestures.pointer_down(&PointerEvent::mouse(1, Point::new(100.0, 100.0), 0), &mut view);
//! let out = gestures.pointer_move(&PointerEvent::mouse(1, Point::new(140.0, 100.0), 16), &mut view);
//! assert_eq!(out, GestureOutcome::ViewChanged);
//! assert_eq!(view.translate().x, 40.0);
//!
//! // Too far to count as a tap.
//! let out = gestures.pointer_up(&PointerEvent::mouse(1, Point::new(140.0, 100.0), 32), &mut view);
//! assert_eq!(out, GestureOutcome::None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod gesture;
pub mod pointer;

pub use gesture::{GestureConfig, GestureOutcome, GesturePhase, GestureRecognizer, WheelEvent};
pub use pointer::{PointerEvent, PointerId, PointerKind, PointerRecord};
