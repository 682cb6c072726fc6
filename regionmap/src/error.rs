// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error handling for the map controller.

use regionmap_geometry::SourceError;
use regionmap_view2d::FitError;
use thiserror::Error;

/// Errors surfaced by [`crate::ViewportController`].
#[derive(Debug, Error)]
pub enum Error {
    /// The geometry or point-of-interest source could not be decoded.
    ///
    /// The controller is never constructed in this case, so no input is
    /// handled until both sources load.
    #[error("map data unavailable: {0}")]
    DataUnavailable(#[source] SourceError),

    /// There is nothing to frame: the feature set is empty or has no extent.
    #[error("cannot frame content: {0}")]
    NoContent(#[from] FitError),

    /// A configuration value is out of range.
    #[error("invalid configuration value for `{key}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration document could not be decoded.
    #[error("malformed configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// A feature index outside the loaded set.
    #[error("no feature at index {0}")]
    UnknownFeature(usize),
}

/// Result type for controller operations.
pub type Result<T> = core::result::Result<T, Error>;
