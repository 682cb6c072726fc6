// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use regionmap_view2d::{Viewport, ViewportState};

use crate::easing::ease_out_cubic;

/// One eased transition between two viewport states.
///
/// Sampling is a pure function of the current time, so the frame driver can
/// call [`CameraAnimation::sample`] at whatever rate the display refreshes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraAnimation {
    /// State at the moment the transition started.
    pub start: ViewportState,
    /// State the transition settles on.
    pub target: ViewportState,
    /// Start time in milliseconds.
    pub started_at: u64,
    /// Length of the transition in milliseconds.
    pub duration_ms: u64,
}

/// A sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    /// Interpolated state for this frame.
    pub state: ViewportState,
    /// `true` once the transition has reached its target.
    pub done: bool,
}

impl CameraAnimation {
    /// Creates a transition from `start` to `target` beginning at `now`.
    #[must_use]
    pub fn new(start: ViewportState, target: ViewportState, now: u64, duration_ms: u64) -> Self {
        Self {
            start,
            target,
            started_at: now,
            duration_ms,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// A zero duration is complete immediately. Times before the start read
    /// as zero progress.
    #[must_use]
    pub fn progress(&self, now: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration_ms {
            return 1.0;
        }
        elapsed as f64 / self.duration_ms as f64
    }

    /// Samples the transition at `now`.
    ///
    /// Scale and both translate components are interpolated with a cubic
    /// ease-out. The final frame returns `target` exactly.
    #[must_use]
    pub fn sample(&self, now: u64) -> CameraFrame {
        let t = self.progress(now);
        if t >= 1.0 {
            return CameraFrame {
                state: self.target,
                done: true,
            };
        }
        CameraFrame {
            state: self.start.lerp(&self.target, ease_out_cubic(t)),
            done: false,
        }
    }
}

/// Drives at most one [`CameraAnimation`] against a [`Viewport`].
///
/// Starting a new transition replaces the one in flight; the new one starts
/// from wherever the viewport is at that moment.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    active: Option<CameraAnimation>,
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition from the viewport's current state to `target`.
    ///
    /// Replaces any transition already running.
    pub fn animate_to(&mut self, view: &Viewport, target: ViewportState, now: u64, duration_ms: u64) {
        self.active = Some(CameraAnimation::new(view.state(), target, now, duration_ms));
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the transition in flight.
    #[must_use]
    pub fn current(&self) -> Option<&CameraAnimation> {
        self.active.as_ref()
    }

    /// Applies the frame for `now` to `view`.
    ///
    /// Each frame goes through [`Viewport::set_state`], so scale limits and pan
    /// limiting hold on every step. Returns the frame that was applied, or
    /// `None` when idle. The transition is dropped once its last frame is
    /// applied.
    pub fn tick(&mut self, now: u64, view: &mut Viewport) -> Option<CameraFrame> {
        let animation = self.active?;
        let frame = animation.sample(now);
        view.set_state(frame.state);
        if frame.done {
            self.active = None;
        }
        Some(frame)
    }

    /// Drops the transition in flight, leaving the viewport where it is.
    pub fn stop(&mut self) {
        self.active = None;
    }
}
