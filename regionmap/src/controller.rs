// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::mem;

use kurbo::{Point, Size};
use regionmap_camera::Animator;
use regionmap_event_state::{GestureOutcome, GestureRecognizer, PointerEvent, WheelEvent};
use regionmap_geometry::{
    FeatureSet, PoiIndex, feature_bounds, feature_centroid, parse_feature_collection,
};
use regionmap_view2d::{ClampMode, Viewport, ViewportState};
use tracing::{debug, info, trace, warn};

use crate::config::ControllerConfig;
use crate::error::{Error, Result};
use crate::render::{PolygonStyle, Renderer, polygon_path};

/// Owns every piece of mutable map state: the viewport, gesture bookkeeping,
/// the camera animation, and the selection and hover.
///
/// All methods are meant to be called from one thread in event arrival
/// order. Pointer and wheel handlers, [`ViewportController::frame`] and
/// selection calls each read the latest viewport state and leave it valid.
#[derive(Debug)]
pub struct ViewportController {
    config: ControllerConfig,
    features: FeatureSet,
    pois: PoiIndex,
    view: Viewport,
    gestures: GestureRecognizer,
    animator: Animator,
    selected: Option<usize>,
    hovered: Option<usize>,
    redraw: bool,
}

impl ViewportController {
    /// Decodes both sources and fits the map into `surface`.
    ///
    /// Either source failing to decode yields [`Error::DataUnavailable`]; an
    /// empty or extentless feature set yields [`Error::NoContent`].
    pub fn load(
        geojson: &str,
        poi_json: &str,
        surface: Size,
        config: ControllerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let features = parse_feature_collection(geojson).map_err(Error::DataUnavailable)?;
        let pois = PoiIndex::from_json(poi_json).map_err(Error::DataUnavailable)?;
        info!(
            features = features.len(),
            pois = pois.len(),
            bounds = ?features.bounds(),
            "map data loaded"
        );
        Self::new(features, pois, surface, config)
    }

    /// Builds a controller over already decoded data and fits it into `surface`.
    pub fn new(
        features: FeatureSet,
        pois: PoiIndex,
        surface: Size,
        config: ControllerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut view = Viewport::new(surface);
        view.set_clamp_mode(ClampMode::Margin(config.pan_margin));
        view.set_fit_mode(config.fit_mode.into());
        view.set_scale_limits(config.min_scale, config.default_max_scale);
        view.set_world_bounds(Some(features.bounds()));
        let fitted = view.fit_world(config.padding)?;
        info!(
            scale = fitted.scale,
            min = view.min_scale(),
            max = view.max_scale(),
            "initial fit"
        );

        Ok(Self {
            gestures: GestureRecognizer::new(config.gesture()),
            config,
            features,
            pois,
            view,
            animator: Animator::new(),
            selected: None,
            hovered: None,
            redraw: true,
        })
    }

    /// Refits the whole map, dropping any camera move in flight.
    pub fn fit_all(&mut self) -> Result<ViewportState> {
        self.animator.stop();
        let state = self.view.fit_world(self.config.padding)?;
        debug!(scale = state.scale, "refit");
        self.redraw = true;
        Ok(state)
    }

    /// Updates the surface size and re-applies pan limiting.
    pub fn resize(&mut self, surface: Size) {
        self.view.set_surface(surface);
        debug!(width = surface.width, height = surface.height, "resized");
        self.redraw = true;
    }

    /// Handles a contact going down.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        let outcome = self.gestures.pointer_down(event, &mut self.view);
        self.apply(outcome, event.time);
    }

    /// Handles a pointer move.
    ///
    /// With no contact down the move only updates the hovered feature.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if self.gestures.pointer_count() == 0 {
            self.hover(event.position);
            return;
        }
        let outcome = self.gestures.pointer_move(event, &mut self.view);
        self.apply(outcome, event.time);
    }

    /// Handles a contact lifting; a recognized tap selects what is under it.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let outcome = self.gestures.pointer_up(event, &mut self.view);
        self.apply(outcome, event.time);
    }

    /// Abandons the current gesture.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) {
        let outcome = self.gestures.pointer_cancel(event);
        self.apply(outcome, event.time);
    }

    /// Zooms one wheel step around the pointer.
    pub fn wheel(&mut self, event: &WheelEvent) {
        let outcome = self.gestures.wheel(event, &mut self.view);
        if outcome == GestureOutcome::ViewChanged {
            debug!(
                scale = self.view.scale(),
                min = self.view.min_scale(),
                max = self.view.max_scale(),
                "wheel zoom"
            );
            self.redraw = true;
        }
    }

    /// Records the feature under `screen_pt` as hovered, without selecting it.
    pub fn hover(&mut self, screen_pt: Point) -> Option<usize> {
        let hit = self.features.hit_test(self.view.screen_to_world(screen_pt));
        if hit != self.hovered {
            self.hovered = hit;
            self.redraw = true;
        }
        hit
    }

    /// Selects the feature under `screen_pt` and frames it.
    ///
    /// A miss clears the selection and leaves the camera where it is.
    pub fn select_at(&mut self, screen_pt: Point, now: u64) -> Option<usize> {
        let world = self.view.screen_to_world(screen_pt);
        match self.features.hit_test(world) {
            Some(index) => {
                self.select(index, now);
                Some(index)
            }
            None => {
                self.clear_selection();
                None
            }
        }
    }

    /// Selects the first feature whose name property equals `name` and frames it.
    pub fn select_by_name(&mut self, name: &str, now: u64) -> Option<usize> {
        let index = self.features.find_by_name(&self.config.name_property, name)?;
        self.select(index, now);
        Some(index)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            debug!(feature = previous, "selection cleared");
            self.redraw = true;
        }
    }

    /// Starts a camera move that frames feature `index` with the selection
    /// padding, replacing any move in flight.
    ///
    /// Returns the target state.
    pub fn zoom_to_feature(&mut self, index: usize, now: u64) -> Result<ViewportState> {
        let feature = self
            .features
            .get(index)
            .ok_or(Error::UnknownFeature(index))?;
        let target = self
            .view
            .frame_rect(feature_bounds(feature), self.config.selection_padding)?;
        self.animator
            .animate_to(&self.view, target, now, self.config.animation_duration_ms);
        debug!(
            feature = index,
            scale = target.scale,
            duration_ms = self.config.animation_duration_ms,
            "camera move started"
        );
        self.redraw = true;
        Ok(target)
    }

    /// Advances the camera move to `now`.
    ///
    /// Returns `true` while a move is still in flight, so the host knows to
    /// schedule another frame.
    pub fn frame(&mut self, now: u64) -> bool {
        let Some(frame) = self.animator.tick(now, &mut self.view) else {
            return false;
        };
        self.redraw = true;
        trace!(
            scale = frame.state.scale,
            tx = frame.state.translate.x,
            ty = frame.state.translate.y,
            "camera frame"
        );
        if frame.done {
            debug!(scale = self.view.scale(), "camera move finished");
        }
        !frame.done
    }

    /// Issues drawing commands for the current state.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        let transform = self.view.transform();
        for (index, feature) in self.features.features().iter().enumerate() {
            let style = PolygonStyle {
                selected: self.selected == Some(index),
                hovered: self.hovered == Some(index),
            };
            for polygon in feature.geometry().polygons() {
                renderer.fill_polygon(&polygon_path(polygon, transform), style);
            }
        }

        let Some(feature) = self.selected.and_then(|i| self.features.get(i)) else {
            return;
        };
        let Some(name) = feature.name(&self.config.name_property) else {
            return;
        };
        if let Some(anchor) = feature_centroid(feature) {
            renderer.draw_label(self.view.world_to_screen(anchor), name);
        }
        if let Some(poi) = self.pois.get(name) {
            renderer.draw_marker(self.view.world_to_screen(poi.world_position()), poi);
        }
    }

    /// Returns whether a redraw was requested since the last call, clearing it.
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.redraw)
    }

    /// Text for a status readout: the hovered feature's name, else the
    /// selected feature's name, else the idle hint.
    #[must_use]
    pub fn status_text(&self) -> &str {
        [self.hovered, self.selected]
            .into_iter()
            .flatten()
            .find_map(|i| self.features.get(i)?.name(&self.config.name_property))
            .unwrap_or(self.config.idle_hint.as_str())
    }

    /// Index of the selected feature.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the hovered feature.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Returns `true` while a camera move is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    /// The loaded features.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// The loaded points of interest.
    #[must_use]
    pub fn pois(&self) -> &PoiIndex {
        &self.pois
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn apply(&mut self, outcome: GestureOutcome, now: u64) {
        match outcome {
            GestureOutcome::None => {}
            GestureOutcome::ViewChanged => self.redraw = true,
            GestureOutcome::Tap(at) => {
                self.select_at(at, now);
            }
        }
    }

    fn select(&mut self, index: usize, now: u64) {
        if self.selected != Some(index) {
            debug!(
                feature = index,
                name = self.features.get(index).and_then(|f| f.name(&self.config.name_property)),
                "selected"
            );
        }
        self.selected = Some(index);
        self.redraw = true;
        if let Err(err) = self.zoom_to_feature(index, now) {
            warn!(feature = index, %err, "selected feature cannot be framed");
        }
    }
}
