// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while decoding the geometry and point-of-interest sources.

use thiserror::Error;

/// A geometry or POI source could not be decoded.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// A feature's coordinate arrays do not match its declared geometry type.
    #[error("feature {feature}: invalid coordinates: {reason}")]
    InvalidCoordinates {
        /// Index of the offending feature in the source collection.
        feature: usize,
        /// What was wrong with the coordinates.
        reason: String,
    },

    /// A POI longitude or latitude is neither decimal degrees nor `d:m:s`.
    #[error("invalid angle {0:?}: expected decimal degrees or d:m:s")]
    InvalidAngle(String),
}
