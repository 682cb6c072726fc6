// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap: an interactive region map engine.
//!
//! [`ViewportController`] ties the workspace crates together:
//! - `regionmap_geometry` decodes the GeoJSON regions and points of interest
//!   and answers bounds, centroid and hit-test queries.
//! - `regionmap_view2d` holds the scale/translate viewport with its limits.
//! - `regionmap_event_state` turns pointer and wheel input into pans, pinch
//!   zooms and taps.
//! - `regionmap_camera` eases the view toward a selected region.
//!
//! The host owns the window, the clock and the graphics backend. It forwards
//! input events with millisecond timestamps, calls
//! [`ViewportController::frame`] on each display refresh while a camera move
//! runs, and draws through a [`Renderer`] whenever
//! [`ViewportController::take_redraw`] says so.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{BezPath, Point, Size};
//! use regionmap::{ControllerConfig, PolygonStyle, Renderer, ViewportController};
//! use regionmap::event::PointerEvent;
//!
//! struct Count(usize);
//! impl Renderer for Count {
//!     fn fill_polygon(&mut self, _path: &BezPath, _style: PolygonStyle) {
//!         self.0 += 1;
//!     }
//!     fn draw_label(&mut self, _anchor: Point, _text: &str) {}
//! }
//!
//! let regions = r#"{ "type": "FeatureCollection", "features": [{
//!     "type": "Feature",
//!     "properties": { "name": "Square" },
//!     "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]] }
//! }] }"#;
//!
//! let mut map = ViewportController::load(regions, "[]", Size::new(100.0, 100.0), ControllerConfig::default())?;
//! // 10 world units fill 100 - 2 * 20 screen units.
//! assert_eq!(map.viewport().scale(), 6.0);
//!
//! // Tap the middle of the square.
//! map.pointer_down(&PointerEvent::mouse(1, Point::new(50.0, 50.0), 0));
//! map.pointer_up(&PointerEvent::mouse(1, Point::new(50.0, 50.0), 60));
//! assert_eq!(map.selected(), Some(0));
//! assert_eq!(map.status_text(), "Square");
//!
//! // Drive the camera move to completion.
//! let mut now = 60;
//! while map.frame(now) {
//!     now += 16;
//! }
//!
//! let mut count = Count(0);
//! map.render(&mut count);
//! assert_eq!(count.0, 1);
//! # Ok::<(), regionmap::Error>(())
//! ```

mod config;
mod controller;
mod error;
mod render;

pub use config::{ControllerConfig, FitAlignment};
pub use controller::ViewportController;
pub use error::{Error, Result};
pub use render::{PolygonStyle, Renderer, polygon_path};

/// Input event types accepted by [`ViewportController`].
pub mod event {
    pub use regionmap_event_state::{PointerEvent, PointerId, PointerKind, WheelEvent};
}

pub use regionmap_geometry as geometry;
pub use regionmap_view2d as view2d;
