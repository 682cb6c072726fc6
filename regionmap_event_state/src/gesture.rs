// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan, pinch and tap recognition over a [`Viewport`].
//!
//! [`GestureRecognizer`] consumes pointer and wheel events in screen space and
//! applies the resulting pans and zooms directly to a [`Viewport`]. It reports
//! a [`GestureOutcome`] per event so callers know when to redraw and when a
//! quick, short press should be treated as a selection tap.
//!
//! ## States
//!
//! - [`GesturePhase::Idle`]: no contact is down.
//! - [`GesturePhase::Panning`]: exactly one contact; each move pans by its delta.
//! - [`GesturePhase::Pinching`]: two or more contacts; the two lowest ids set
//!   the zoom ratio against a snapshot taken when the pinch (re)started.
//!
//! ## Taps
//!
//! A gesture is a tap when it starts and ends with a single contact, never
//! moves further than [`GestureConfig::tap_move_threshold`] from the press
//! position and lasts less than [`GestureConfig::tap_max_duration_ms`]. A
//! gesture that ever had two contacts down never produces a tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use regionmap_event_state::gesture::{GestureConfig, GestureOutcome, GestureRecognizer};
//! use regionmap_event_state::pointer::PointerEvent;
//! use regionmap_view2d::Viewport;
//!
//! let mut view = Viewport::new(Size::new(400.0, 300.0));
//! let mut gestures = GestureRecognizer::new(GestureConfig::default());
//!
//! gestures.pointer_down(&PointerEvent::mouse(1, Point::new(50.0, 50.0), 0), &mut view);
//! let out = gestures.pointer_up(&PointerEvent::mouse(1, Point::new(51.0, 50.0), 80), &mut view);
//! assert_eq!(out, GestureOutcome::Tap(Point::new(51.0, 50.0)));
//! ```

use kurbo::Point;
use regionmap_view2d::Viewport;

use crate::drag::DragState;
use crate::pointer::{PointerEvent, PointerId, PointerMap, PointerRecord};

/// Pinch distances below this are treated as coincident contacts.
const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Tuning for gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Maximum distance in logical pixels a tap may wander from its press.
    pub tap_move_threshold: f64,
    /// A press held at least this long is not a tap.
    pub tap_max_duration_ms: u64,
    /// Scale factor applied per wheel notch.
    pub zoom_step: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_move_threshold: 8.0,
            tap_max_duration_ms: 350,
            zoom_step: 1.12,
        }
    }
}

/// What the recognizer is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No contact is down.
    #[default]
    Idle,
    /// One contact is dragging the view.
    Panning,
    /// Two or more contacts are zooming the view.
    Pinching,
}

/// Result of feeding one event to the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// The view did not change and no tap was recognized.
    None,
    /// The viewport state was modified.
    ViewChanged,
    /// A tap completed at this screen position.
    Tap(Point),
}

/// A wheel notch or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll amount; negative scrolls up.
    pub delta_y: f64,
    /// Pointer position in screen space.
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchSnapshot {
    pair: (PointerId, PointerId),
    distance: f64,
    scale: f64,
    midpoint: Point,
}

impl PinchSnapshot {
    fn capture(a: PointerRecord, b: PointerRecord, scale: f64) -> Self {
        Self {
            pair: (a.id, b.id),
            distance: a.position.distance(b.position),
            scale,
            midpoint: a.position.midpoint(b.position),
        }
    }
}

/// Turns pointer and wheel events into viewport pans and zooms.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    pointers: PointerMap,
    phase: GesturePhase,
    drag: Option<DragState>,
    pinch: Option<PinchSnapshot>,
    tap_candidate: bool,
    pinched: bool,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Number of contacts currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` while the current gesture could still end as a tap.
    #[must_use]
    pub fn is_tap_candidate(&self) -> bool {
        self.tap_candidate
    }

    /// Handles a contact going down.
    ///
    /// The first contact starts a pan and a tap candidate. Any further
    /// contact switches to pinching and rules out a tap for the rest of the
    /// gesture.
    pub fn pointer_down(&mut self, event: &PointerEvent, view: &mut Viewport) -> GestureOutcome {
        let is_new = self.pointers.insert(PointerRecord::from(event));
        match self.pointers.len() {
            1 if is_new => {
                self.tap_candidate = true;
                self.pinched = false;
                self.pinch = None;
                self.drag = Some(DragState::new(event.position, event.time));
                self.phase = GesturePhase::Panning;
            }
            1 => {
                if let Some(drag) = &mut self.drag {
                    drag.advance(event.position);
                    self.note_movement();
                }
            }
            _ => self.begin_pinch(view.scale()),
        }
        GestureOutcome::None
    }

    /// Handles a contact moving.
    ///
    /// Moves from untracked contacts (such as a hovering mouse) are ignored.
    pub fn pointer_move(&mut self, event: &PointerEvent, view: &mut Viewport) -> GestureOutcome {
        if !self.pointers.update(event.id, event.position) {
            return GestureOutcome::None;
        }
        match self.phase {
            GesturePhase::Panning => {
                let Some(drag) = &mut self.drag else {
                    return GestureOutcome::None;
                };
                let delta = drag.advance(event.position);
                self.note_movement();
                if delta.x == 0.0 && delta.y == 0.0 {
                    return GestureOutcome::None;
                }
                view.pan_by(delta);
                GestureOutcome::ViewChanged
            }
            GesturePhase::Pinching => self.apply_pinch(event.id, view),
            GesturePhase::Idle => GestureOutcome::None,
        }
    }

    /// Handles a contact lifting.
    ///
    /// Returns [`GestureOutcome::Tap`] when the last contact of a qualifying
    /// gesture lifts. Dropping from a pinch to one contact resumes panning
    /// from that contact's position without a jump.
    pub fn pointer_up(&mut self, event: &PointerEvent, view: &mut Viewport) -> GestureOutcome {
        if self.pointers.remove(event.id).is_none() {
            return GestureOutcome::None;
        }
        match self.pointers.len() {
            0 => {
                let tap = self.qualifies_as_tap(event);
                self.reset();
                if tap {
                    GestureOutcome::Tap(event.position)
                } else {
                    GestureOutcome::None
                }
            }
            1 => {
                if let Some(remaining) = self.pointers.sole() {
                    self.drag = Some(DragState::new(remaining.position, event.time));
                }
                self.pinch = None;
                self.phase = GesturePhase::Panning;
                GestureOutcome::None
            }
            _ => {
                self.begin_pinch(view.scale());
                GestureOutcome::None
            }
        }
    }

    /// Handles a contact being cancelled by the platform.
    ///
    /// Cancellation abandons the whole gesture: every contact is forgotten and
    /// no tap is reported.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) -> GestureOutcome {
        if !self.pointers.contains(event.id) && self.pointers.is_empty() {
            return GestureOutcome::None;
        }
        self.pointers.clear();
        self.reset();
        GestureOutcome::None
    }

    /// Zooms one step around the wheel position.
    ///
    /// Scrolling up (`delta_y < 0`) zooms in by [`GestureConfig::zoom_step`];
    /// scrolling down zooms out by its reciprocal. Zero or non-finite deltas
    /// are ignored: a notch with no direction does not zoom out, so the view
    /// stays put.
    pub fn wheel(&mut self, event: &WheelEvent, view: &mut Viewport) -> GestureOutcome {
        if event.delta_y == 0.0 || !event.delta_y.is_finite() {
            return GestureOutcome::None;
        }
        let factor = if event.delta_y < 0.0 {
            self.config.zoom_step
        } else {
            1.0 / self.config.zoom_step
        };
        let before = view.state();
        view.zoom_at(event.position, factor);
        if view.state() == before {
            GestureOutcome::None
        } else {
            GestureOutcome::ViewChanged
        }
    }

    fn note_movement(&mut self) {
        if let Some(drag) = &self.drag
            && drag.max_offset() > self.config.tap_move_threshold
        {
            self.tap_candidate = false;
        }
    }

    fn qualifies_as_tap(&self, release: &PointerEvent) -> bool {
        if !self.tap_candidate || self.pinched {
            return false;
        }
        let Some(drag) = &self.drag else {
            return false;
        };
        let moved = drag.offset(release.position).hypot();
        let held = drag.elapsed(release.time);
        moved <= self.config.tap_move_threshold && held < self.config.tap_max_duration_ms
    }

    fn begin_pinch(&mut self, scale: f64) {
        self.tap_candidate = false;
        self.pinched = true;
        self.drag = None;
        self.phase = GesturePhase::Pinching;
        self.pinch = self
            .pointers
            .pinch_pair()
            .map(|(a, b)| PinchSnapshot::capture(a, b, scale));
    }

    fn apply_pinch(&mut self, moved: PointerId, view: &mut Viewport) -> GestureOutcome {
        let Some(snapshot) = self.pinch else {
            return GestureOutcome::None;
        };
        if moved != snapshot.pair.0 && moved != snapshot.pair.1 {
            return GestureOutcome::None;
        }
        if snapshot.distance < MIN_PINCH_DISTANCE {
            return GestureOutcome::None;
        }
        let (Some(a), Some(b)) = (
            self.pointers.get(snapshot.pair.0),
            self.pointers.get(snapshot.pair.1),
        ) else {
            return GestureOutcome::None;
        };
        let ratio = a.position.distance(b.position) / snapshot.distance;
        let target = snapshot.scale * ratio;
        let before = view.state();
        view.zoom_at(snapshot.midpoint, target / before.scale);
        if view.state() == before {
            GestureOutcome::None
        } else {
            GestureOutcome::ViewChanged
        }
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.drag = None;
        self.pinch = None;
        self.tap_candidate = false;
        self.pinched = false;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use regionmap_view2d::{ClampMode, Viewport};

    use super::*;

    fn free_view() -> Viewport {
        let mut view = Viewport::new(Size::new(400.0, 300.0));
        view.set_clamp_mode(ClampMode::None);
        view
    }

    fn mouse(x: f64, y: f64, time: u64) -> PointerEvent {
        PointerEvent::mouse(1, Point::new(x, y), time)
    }

    fn touch(id: u64, x: f64, y: f64, time: u64) -> PointerEvent {
        PointerEvent::touch(id, Point::new(x, y), time)
    }

    #[test]
    fn short_small_press_is_a_tap() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&mouse(100.0, 100.0, 0), &mut view);
        assert_eq!(g.phase(), GesturePhase::Panning);
        g.pointer_move(&mouse(101.0, 101.0, 40), &mut view);
        let out = g.pointer_up(&mouse(102.0, 100.0, 100), &mut view);

        assert_eq!(out, GestureOutcome::Tap(Point::new(102.0, 100.0)));
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.pointer_count(), 0);
    }

    #[test]
    fn drag_pans_and_is_not_a_tap() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&mouse(100.0, 100.0, 0), &mut view);
        assert_eq!(
            g.pointer_move(&mouse(130.0, 100.0, 30), &mut view),
            GestureOutcome::ViewChanged
        );
        assert!(!g.is_tap_candidate());
        g.pointer_move(&mouse(150.0, 90.0, 60), &mut view);
        assert_eq!(view.translate(), Vec2::new(50.0, -10.0));

        assert_eq!(g.pointer_up(&mouse(150.0, 90.0, 90), &mut view), GestureOutcome::None);
    }

    #[test]
    fn wandering_away_and_back_is_not_a_tap() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&mouse(100.0, 100.0, 0), &mut view);
        g.pointer_move(&mouse(120.0, 100.0, 20), &mut view);
        g.pointer_move(&mouse(100.0, 100.0, 40), &mut view);
        assert_eq!(g.pointer_up(&mouse(100.0, 100.0, 60), &mut view), GestureOutcome::None);
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&mouse(10.0, 10.0, 1_000), &mut view);
        assert_eq!(g.pointer_up(&mouse(10.0, 10.0, 1_350), &mut view), GestureOutcome::None);

        g.pointer_down(&mouse(10.0, 10.0, 2_000), &mut view);
        assert_eq!(
            g.pointer_up(&mouse(10.0, 10.0, 2_349), &mut view),
            GestureOutcome::Tap(Point::new(10.0, 10.0))
        );
    }

    #[test]
    fn repeated_press_keeps_the_original_press_time() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&mouse(10.0, 10.0, 0), &mut view);
        g.pointer_down(&mouse(10.0, 10.0, 300), &mut view);
        assert!(g.is_tap_candidate());
        assert_eq!(g.pointer_up(&mouse(10.0, 10.0, 360), &mut view), GestureOutcome::None);
    }

    #[test]
    fn pinch_zooms_about_the_starting_midpoint() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 100.0, 100.0, 0), &mut view);
        g.pointer_down(&touch(2, 200.0, 100.0, 5), &mut view);
        assert_eq!(g.phase(), GesturePhase::Pinching);

        let anchor = Point::new(150.0, 100.0);
        let world_before = view.screen_to_world(anchor);
        let out = g.pointer_move(&touch(2, 300.0, 100.0, 20), &mut view);

        assert_eq!(out, GestureOutcome::ViewChanged);
        assert!((view.scale() - 2.0).abs() < 1e-12);
        let world_after = view.screen_to_world(anchor);
        assert!((world_after - world_before).hypot() < 1e-9);

        // The ratio is measured against the snapshot, not the previous move.
        g.pointer_move(&touch(2, 250.0, 100.0, 30), &mut view);
        assert!((view.scale() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn quick_pinch_never_taps() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 100.0, 100.0, 0), &mut view);
        g.pointer_down(&touch(2, 102.0, 100.0, 10), &mut view);
        assert!(!g.is_tap_candidate());
        assert_eq!(g.pointer_up(&touch(2, 102.0, 100.0, 30), &mut view), GestureOutcome::None);
        assert_eq!(g.phase(), GesturePhase::Panning);
        assert_eq!(g.pointer_up(&touch(1, 100.0, 100.0, 40), &mut view), GestureOutcome::None);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn lifting_one_finger_resumes_panning_without_a_jump() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 100.0, 100.0, 0), &mut view);
        g.pointer_down(&touch(2, 200.0, 100.0, 0), &mut view);
        g.pointer_move(&touch(1, 90.0, 100.0, 10), &mut view);
        g.pointer_up(&touch(2, 200.0, 100.0, 20), &mut view);
        let before = view.translate();

        g.pointer_move(&touch(1, 95.0, 110.0, 30), &mut view);
        assert_eq!(view.translate() - before, Vec2::new(5.0, 10.0));
    }

    #[test]
    fn third_contact_resnapshots_the_pinch() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 0.0, 0.0, 0), &mut view);
        g.pointer_down(&touch(2, 100.0, 0.0, 0), &mut view);
        g.pointer_down(&touch(3, 50.0, 50.0, 0), &mut view);
        g.pointer_up(&touch(1, 0.0, 0.0, 10), &mut view);
        assert_eq!(g.phase(), GesturePhase::Pinching);

        // Pair is now (2, 3); moving 3 away doubles their distance.
        let d = Point::new(100.0, 0.0).distance(Point::new(50.0, 50.0));
        let dir = (Point::new(50.0, 50.0) - Point::new(100.0, 0.0)) / d;
        let far = Point::new(100.0, 0.0) + dir * (2.0 * d);
        g.pointer_move(&touch(3, far.x, far.y, 20), &mut view);
        assert!((view.scale() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_pinch_contacts_do_not_zoom() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 50.0, 50.0, 0), &mut view);
        g.pointer_down(&touch(2, 50.0, 50.0, 0), &mut view);
        assert_eq!(
            g.pointer_move(&touch(2, 80.0, 50.0, 10), &mut view),
            GestureOutcome::None
        );
        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn cancel_abandons_the_gesture() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        g.pointer_down(&touch(1, 10.0, 10.0, 0), &mut view);
        g.pointer_down(&touch(2, 60.0, 10.0, 0), &mut view);
        g.pointer_cancel(&touch(2, 60.0, 10.0, 5));
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(g.pointer_count(), 0);
        assert_eq!(g.pointer_up(&touch(1, 10.0, 10.0, 10), &mut view), GestureOutcome::None);

        g.pointer_down(&mouse(10.0, 10.0, 100), &mut view);
        g.pointer_cancel(&mouse(10.0, 10.0, 110));
        assert_eq!(g.pointer_up(&mouse(10.0, 10.0, 120), &mut view), GestureOutcome::None);
    }

    #[test]
    fn untracked_events_are_ignored() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());

        assert_eq!(g.pointer_move(&mouse(5.0, 5.0, 0), &mut view), GestureOutcome::None);
        assert_eq!(g.pointer_up(&mouse(5.0, 5.0, 0), &mut view), GestureOutcome::None);
        assert_eq!(g.pointer_cancel(&mouse(5.0, 5.0, 0)), GestureOutcome::None);
        assert_eq!(view.translate(), Vec2::ZERO);
    }

    #[test]
    fn wheel_steps_in_and_out_around_the_pointer() {
        let mut view = free_view();
        let mut g = GestureRecognizer::new(GestureConfig::default());
        let at = Point::new(120.0, 80.0);
        let world = view.screen_to_world(at);

        let up = WheelEvent {
            delta_y: -100.0,
            position: at,
        };
        assert_eq!(g.wheel(&up, &mut view), GestureOutcome::ViewChanged);
        assert!((view.scale() - 1.12).abs() < 1e-12);
        assert!((view.screen_to_world(at) - world).hypot() < 1e-9);

        let down = WheelEvent {
            delta_y: 3.0,
            position: at,
        };
        g.wheel(&down, &mut view);
        assert!((view.scale() - 1.0).abs() < 1e-12);

        let still = WheelEvent {
            delta_y: 0.0,
            position: at,
        };
        assert_eq!(g.wheel(&still, &mut view), GestureOutcome::None);
    }

    #[test]
    fn wheel_at_the_limit_reports_no_change() {
        let mut view = free_view();
        view.set_scale_limits(0.5, 1.0);
        let mut g = GestureRecognizer::new(GestureConfig::default());
        let up = WheelEvent {
            delta_y: -1.0,
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(g.wheel(&up, &mut view), GestureOutcome::None);
        assert_eq!(view.scale(), 1.0);
    }
}
