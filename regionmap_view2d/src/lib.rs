// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap View 2D: the scale/translate viewport over a projected map.
//!
//! This crate provides a small, headless model of the affine map between
//! world coordinates (projected longitude/latitude) and screen coordinates
//! (logical pixels of the drawing surface). It focuses on:
//! - The [`ViewportState`] triple `(scale, translate_x, translate_y)`.
//! - Conversion between world and screen space.
//! - Fitting a world rectangle into the surface, with padding.
//! - Zooming about a fixed screen anchor, with scale limits.
//! - Keeping the content from being panned off the surface.
//!
//! It does **not** interpret input events or own any geometry. Callers are
//! expected to:
//! - Feed pan deltas and zoom factors from a gesture layer.
//! - Drive [`Viewport::set_state`] from a camera animation.
//! - Use [`Viewport::transform`] or [`Viewport::world_to_screen`] to place
//!   paths on screen.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use regionmap_view2d::Viewport;
//!
//! let mut view = Viewport::new(Size::new(100.0, 100.0));
//! view.set_world_bounds(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! let fitted = view.fit_world(20.0).unwrap();
//! assert_eq!(fitted.scale, 6.0);
//!
//! // The world origin lands on the padded, centered corner.
//! let screen = view.world_to_screen(Point::ORIGIN);
//! assert_eq!(screen, Point::new(20.0, 20.0));
//!
//! // Wheel-style zoom keeps the anchor under the cursor.
//! let anchor = Point::new(50.0, 50.0);
//! let world_before = view.screen_to_world(anchor);
//! view.zoom_at(anchor, 1.12);
//! let back = view.world_to_screen(world_before);
//! assert!((back.x - anchor.x).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The map is axis-aligned with a **uniform** scale; there is no rotation.
//! - Translation is expressed in screen space: `screen = world * scale + translate`.
//! - Scale is always kept within `[min_scale, max_scale]`. Requests outside
//!   that range are clamped, never rejected.
//! - Pan limiting is applied after every mutation and is immediate.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod state;
mod viewport;

pub use modes::{ClampMode, FitMode};
pub use state::{FitError, ViewportState, constrain_pan, fit_to_bounds, place_bounds};
pub use viewport::{Viewport, ViewportDebugInfo};
