// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan limiting applied after every pan, zoom or state change.
///
/// Consulted by [`crate::Viewport`] whenever world bounds are known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClampMode {
    /// Do not apply any clamping; the content may be panned anywhere.
    None,
    /// Keep the projected world bounds from retreating more than this many
    /// screen units past any edge of the surface.
    ///
    /// See [`crate::constrain_pan`].
    Margin(f64),
}

impl Default for ClampMode {
    fn default() -> Self {
        Self::Margin(50.0)
    }
}

/// How fitted content is positioned inside the surface.
///
/// Consulted by [`crate::fit_to_bounds`], [`crate::Viewport::fit_world`] and
/// [`crate::Viewport::frame_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted content on both axes.
    #[default]
    Center,
    /// Place the world-space minimum corner at `(padding, padding)`.
    ///
    /// The unused space on the shorter axis is left on the far side.
    AlignMin,
}
