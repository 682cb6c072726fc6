// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use regionmap_event_state::GestureConfig;
use regionmap_view2d::FitMode;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How fitted content is placed inside the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitAlignment {
    /// Center the content; the slack axis gets equal margins.
    #[default]
    Center,
    /// Pin the content's minimum corner at the padding offset.
    AlignMin,
}

impl From<FitAlignment> for FitMode {
    fn from(alignment: FitAlignment) -> Self {
        match alignment {
            FitAlignment::Center => Self::Center,
            FitAlignment::AlignMin => Self::AlignMin,
        }
    }
}

/// Tuning for [`crate::ViewportController`].
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use regionmap::ControllerConfig;
///
/// let config = ControllerConfig::from_json_str(r#"{ "padding": 32, "fit_mode": "align_min" }"#).unwrap();
/// assert_eq!(config.padding, 32.0);
/// assert_eq!(config.zoom_step, 1.12);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Padding in screen units around the initial fit.
    pub padding: f64,
    /// Padding in screen units when framing a selected feature.
    pub selection_padding: f64,
    /// How far content may be panned past a surface edge.
    pub pan_margin: f64,
    /// Scale multiplier per wheel notch.
    pub zoom_step: f64,
    /// Zoom-out floor.
    pub min_scale: f64,
    /// Zoom-in ceiling before the initial fit raises it.
    pub default_max_scale: f64,
    /// Maximum wander in logical pixels for a tap.
    pub tap_move_threshold: f64,
    /// A press held at least this long is not a tap.
    pub tap_max_duration_ms: u64,
    /// Length of the zoom-to-feature transition.
    pub animation_duration_ms: u64,
    /// Placement of fitted content.
    pub fit_mode: FitAlignment,
    /// Feature property holding the region name.
    pub name_property: String,
    /// Status text shown when nothing is hovered or selected.
    pub idle_hint: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            padding: 20.0,
            selection_padding: 40.0,
            pan_margin: 50.0,
            zoom_step: 1.12,
            min_scale: 0.001,
            default_max_scale: 500.0,
            tap_move_threshold: 8.0,
            tap_max_duration_ms: 350,
            animation_duration_ms: 500,
            fit_mode: FitAlignment::Center,
            name_property: "name".to_string(),
            idle_hint: "Scroll to zoom, drag to pan".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Decodes and validates a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(Error::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        non_negative("padding", self.padding)?;
        non_negative("selection_padding", self.selection_padding)?;
        non_negative("pan_margin", self.pan_margin)?;
        non_negative("tap_move_threshold", self.tap_move_threshold)?;
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(invalid("zoom_step", "must be a finite number greater than 1"));
        }
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            return Err(invalid("min_scale", "must be a finite positive number"));
        }
        if !self.default_max_scale.is_finite() || self.default_max_scale < self.min_scale {
            return Err(invalid(
                "default_max_scale",
                "must be finite and not below min_scale",
            ));
        }
        if self.name_property.is_empty() {
            return Err(invalid("name_property", "must not be empty"));
        }
        Ok(())
    }

    /// The subset of settings used for gesture recognition.
    #[must_use]
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            tap_move_threshold: self.tap_move_threshold,
            tap_max_duration_ms: self.tap_max_duration_ms,
            zoom_step: self.zoom_step,
        }
    }
}

fn invalid(key: &'static str, reason: &str) -> Error {
    Error::InvalidConfig {
        key,
        reason: reason.to_string(),
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(key, "must be a finite non-negative number"))
    }
}
