// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{ClampMode, FitMode};
use crate::state::{
    FitError, ViewportState, constrain_pan, effective_padding, fit_scale, place_bounds,
};

/// Scale/translate viewport over a projected map.
///
/// `Viewport` owns the single mutable [`ViewportState`] plus everything needed
/// to keep it valid: scale limits, the logical surface size and the world
/// bounds used for pan limiting. It can be used to:
/// - Convert points between world and screen coordinates.
/// - Pan by a screen delta and zoom around a screen anchor.
/// - Fit the world bounds (or a sub-rect) into the surface.
///
/// Every mutation leaves `min_scale <= scale <= max_scale` and re-applies the
/// configured [`ClampMode`].
#[derive(Clone, Debug)]
pub struct Viewport {
    surface: Size,
    world_bounds: Option<Rect>,
    state: ViewportState,
    min_scale: f64,
    max_scale: f64,
    default_max_scale: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
}

impl Viewport {
    /// Creates a viewport for a surface of the given logical size.
    ///
    /// - Initial scale is `1.0` with no translation.
    /// - Scale is clamped to `[1e-3, 1e3]` until limits are configured.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        Self {
            surface,
            world_bounds: None,
            state: ViewportState::IDENTITY,
            min_scale: 1e-3,
            max_scale: 1e3,
            default_max_scale: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
        }
    }

    /// Returns the logical surface size.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Sets the logical surface size and re-applies pan limiting.
    ///
    /// Scale and translation are otherwise left as they are.
    pub fn set_surface(&mut self, surface: Size) {
        if self.surface == surface {
            return;
        }
        self.surface = surface;
        self.constrain();
    }

    /// Sets optional world bounds used for pan limiting and [`Viewport::fit_world`].
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        if self.world_bounds == bounds {
            return;
        }
        self.world_bounds = bounds;
        self.constrain();
    }

    /// Returns the current world bounds, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns the current screen-space translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate
    }

    /// Returns the zoom-out floor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the zoom-in ceiling.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min_scale <= max_scale`, and the
    /// current scale is clamped into it. The maximum also becomes the floor
    /// for the ceiling derived by [`Viewport::fit_world`].
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.default_max_scale = max_scale;
        self.set_state(self.state);
    }

    /// Returns the clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the clamp mode and re-applies it.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.constrain();
        }
    }

    /// Returns the fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets how fitted content is positioned inside the surface.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Replaces the state, clamping the scale and re-applying pan limiting.
    ///
    /// This is the write path used by camera animation.
    pub fn set_state(&mut self, state: ViewportState) {
        let scale = state.scale.clamp(self.min_scale, self.max_scale);
        self.state = ViewportState::new(scale, state.translate);
        self.constrain();
    }

    /// Pans by a delta in screen space.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.state.translate += delta;
        self.constrain();
    }

    /// Multiplies the scale by `factor`, keeping `anchor` fixed on screen.
    ///
    /// The new scale is clamped into `[min_scale, max_scale]` and the
    /// translation solved so the world point under `anchor` stays there:
    /// `translate' = anchor - (anchor - translate) * (new_scale / old_scale)`.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let old_scale = self.state.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if new_scale == old_scale {
            return;
        }
        let k = new_scale / old_scale;
        let anchor = anchor.to_vec2();
        self.state = ViewportState::new(new_scale, anchor - (anchor - self.state.translate) * k);
        self.constrain();
    }

    /// Fits the world bounds into the surface with `padding` on every side.
    ///
    /// Also raises the scale ceiling to `max(configured_max, fitted_scale * 10)`
    /// so the fitted view always leaves room to zoom in. The scale floor is
    /// not derived and stays as configured.
    pub fn fit_world(&mut self, padding: f64) -> Result<ViewportState, FitError> {
        let bounds = self.world_bounds.ok_or(FitError::NoContent)?;
        let scale = fit_scale(bounds, self.surface, padding)?;
        self.max_scale = self.default_max_scale.max(scale * 10.0);
        let state = self.frame_rect(bounds, padding)?;
        self.set_state(state);
        Ok(self.state)
    }

    /// Computes, without applying it, the state that frames `rect`.
    ///
    /// The fitted scale is clamped into `[min_scale, max_scale]` and the
    /// content is then placed per the fit mode at the clamped scale. Padding
    /// that does not fit the surface is dropped, and a surface with no area
    /// frames at `min_scale`.
    pub fn frame_rect(&self, rect: Rect, padding: f64) -> Result<ViewportState, FitError> {
        let scale = fit_scale(rect, self.surface, padding)?.clamp(self.min_scale, self.max_scale);
        Ok(place_bounds(
            rect,
            self.surface,
            effective_padding(self.surface, padding),
            scale,
            self.fit_mode,
        ))
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.state.world_to_screen(pt)
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.state.screen_to_world(pt)
    }

    /// Returns the world → screen map.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.state.transform()
    }

    /// Returns the world-space rectangle currently covered by the surface.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.screen_to_world(Point::ORIGIN);
        let p1 = self.screen_to_world(Point::new(self.surface.width, self.surface.height));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport for logging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            surface: self.surface,
            world_bounds: self.world_bounds,
            visible_world_rect: self.visible_world_rect(),
            scale: self.state.scale,
            translate: self.state.translate,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            clamp_mode: self.clamp_mode,
            fit_mode: self.fit_mode,
        }
    }

    fn constrain(&mut self) {
        let ClampMode::Margin(margin) = self.clamp_mode else {
            return;
        };
        let Some(bounds) = self.world_bounds else {
            return;
        };
        self.state.translate = constrain_pan(
            bounds,
            self.state.scale,
            self.state.translate,
            self.surface,
            margin,
        );
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Logical surface size.
    pub surface: Size,
    /// World bounds used for pan limiting and fitting.
    pub world_bounds: Option<Rect>,
    /// World-space rectangle currently covered by the surface.
    pub visible_world_rect: Rect,
    /// Current uniform scale.
    pub scale: f64,
    /// Current screen-space translation.
    pub translate: Vec2,
    /// Scale floor.
    pub min_scale: f64,
    /// Scale ceiling.
    pub max_scale: f64,
    /// Pan limiting mode.
    pub clamp_mode: ClampMode,
    /// Placement used by [`Viewport::fit_world`] / [`Viewport::frame_rect`].
    pub fit_mode: FitMode,
}
