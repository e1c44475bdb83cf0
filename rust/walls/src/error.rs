// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for wall post-processing.

use thiserror::Error;

/// Result type for wall post-processing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while cleaning up wall geometry
#[derive(Error, Debug)]
pub enum Error {
    /// A wall coordinate or thickness is NaN or infinite.
    #[error("invalid wall geometry: wall {index} has non-finite {field} ({value})")]
    InvalidWallGeometry {
        index: usize,
        field: &'static str,
        value: f64,
    },

    /// A configured threshold is negative or not finite.
    #[error("invalid threshold: {name} = {value} (must be finite and >= 0)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON that is neither a wall array nor an object holding one.
    #[error("unexpected document shape: {0}")]
    UnexpectedDocument(String),
}
