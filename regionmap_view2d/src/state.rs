// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::FitMode;

/// The affine map from world to screen space.
///
/// `screen = world * scale + translate`, applied independently on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform scale factor (screen units per world unit).
    pub scale: f64,
    /// Screen-space translation applied after scaling.
    pub translate: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportState {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a state from a scale and a screen-space translation.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Maps a world-space point to screen space.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.translate.x,
            pt.y * self.scale + self.translate.y,
        )
    }

    /// Maps a screen-space point back to world space.
    ///
    /// This is the algebraic inverse of [`ViewportState::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate.x) / self.scale,
            (pt.y - self.translate.y) / self.scale,
        )
    }

    /// Returns the world → screen map as a [`kurbo::Affine`].
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Linearly interpolates scale and translation towards `other`.
    ///
    /// `t == 0.0` yields `self`; `t == 1.0` yields `other` exactly.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return *other;
        }
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            translate: self.translate + (other.translate - self.translate) * t,
        }
    }
}

/// Reasons a rectangle cannot be fitted into the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// The bounds are empty or non-finite, typically because there is no geometry.
    #[error("no content to frame")]
    NoContent,
    /// The bounds have no extent on either axis.
    #[error("content cannot be framed in the available surface")]
    Degenerate,
    /// The surface has no area to fit into.
    #[error("surface has no area")]
    EmptySurface,
}

/// Chooses the state that shows all of `bounds` inside `surface`, leaving
/// `padding` screen units on every side.
///
/// The scale is uniform and never crops:
/// `min((W - 2*padding) / world_w, (H - 2*padding) / world_h)`. A bounds
/// rectangle with zero extent on one axis is fitted on the other axis alone.
/// A surface too small to hold `padding` on both sides is fitted without
/// padding.
///
/// Empty bounds (as produced for an empty feature set) fail with
/// [`FitError::NoContent`] instead of producing a `NaN` state. A surface with
/// no area fails with [`FitError::EmptySurface`].
pub fn fit_to_bounds(
    bounds: Rect,
    surface: Size,
    padding: f64,
    mode: FitMode,
) -> Result<ViewportState, FitError> {
    let scale = fit_scale(bounds, surface, padding)?;
    if scale <= 0.0 {
        return Err(FitError::EmptySurface);
    }
    Ok(place_bounds(
        bounds,
        surface,
        effective_padding(surface, padding),
        scale,
        mode,
    ))
}

/// Computes the translation that places `bounds` at the given `scale`.
///
/// With [`FitMode::Center`] the scaled bounds are centered in `surface`:
/// `translate = -min * scale + (surface - world * scale) / 2`.
/// With [`FitMode::AlignMin`] the minimum corner is placed at `padding`.
#[must_use]
pub fn place_bounds(
    bounds: Rect,
    surface: Size,
    padding: f64,
    scale: f64,
    mode: FitMode,
) -> ViewportState {
    let min = Vec2::new(bounds.x0, bounds.y0);
    let translate = match mode {
        FitMode::Center => {
            let free = Vec2::new(
                surface.width - bounds.width() * scale,
                surface.height - bounds.height() * scale,
            );
            -min * scale + free / 2.0
        }
        FitMode::AlignMin => -min * scale + Vec2::new(padding, padding),
    };
    ViewportState::new(scale, translate)
}

/// Padding actually applied on `surface`: zero when the requested padding
/// leaves no room on either axis.
pub(crate) fn effective_padding(surface: Size, padding: f64) -> f64 {
    if surface.width > 2.0 * padding && surface.height > 2.0 * padding {
        padding
    } else {
        0.0
    }
}

/// Uniform scale that fits `bounds` into `surface`.
///
/// Zero when the surface has no area on a constraining axis; callers clamp
/// that into their scale limits.
pub(crate) fn fit_scale(bounds: Rect, surface: Size, padding: f64) -> Result<f64, FitError> {
    if !bounds.is_finite() || bounds.x0 > bounds.x1 || bounds.y0 > bounds.y1 {
        return Err(FitError::NoContent);
    }
    let padding = effective_padding(surface, padding);
    let avail_w = (surface.width - 2.0 * padding).max(0.0);
    let avail_h = (surface.height - 2.0 * padding).max(0.0);
    let (world_w, world_h) = (bounds.width(), bounds.height());
    match (world_w > 0.0, world_h > 0.0) {
        (true, true) => Ok((avail_w / world_w).min(avail_h / world_h)),
        (true, false) => Ok(avail_w / world_w),
        (false, true) => Ok(avail_h / world_h),
        (false, false) => Err(FitError::Degenerate),
    }
}

/// Clamps `translate` so the projected `bounds` cannot retreat more than
/// `margin` screen units past any edge of `surface`.
///
/// On each axis the content's minimum edge may not pass `size - margin` and its
/// maximum edge may not pass `margin`. The clamp is immediate and idempotent.
/// Non-finite bounds leave `translate` untouched.
#[must_use]
pub fn constrain_pan(
    bounds: Rect,
    scale: f64,
    translate: Vec2,
    surface: Size,
    margin: f64,
) -> Vec2 {
    if !bounds.is_finite() {
        return translate;
    }
    let x = translate
        .x
        .min(surface.width - margin - bounds.x0 * scale)
        .max(margin - bounds.x1 * scale);
    let y = translate
        .y
        .min(surface.height - margin - bounds.y0 * scale)
        .max(margin - bounds.y1 * scale);
    Vec2::new(x, y)
}
