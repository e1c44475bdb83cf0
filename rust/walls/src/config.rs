// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Post-processing configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default axis snapping threshold
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;
/// Default endpoint clustering distance
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 10.0;
/// Default collinear merge tolerance
pub const DEFAULT_MERGE_THRESHOLD: f64 = 5.0;

/// What to do with walls whose coordinates are NaN or infinite
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWallPolicy {
    /// Fail the whole call with `Error::InvalidWallGeometry`
    #[default]
    Reject,
    /// Drop offending walls and log a warning for each
    Skip,
}

impl InvalidWallPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Thresholds and input policy for the wall cleanup pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostProcessConfig {
    /// Maximum off-axis extent for a wall to be snapped horizontal/vertical
    pub snap_threshold: f64,
    /// Maximum distance from a cluster seed for an endpoint to join it
    pub cluster_threshold: f64,
    /// Maximum line offset and gap for two collinear walls to merge
    pub merge_threshold: f64,
    /// Handling of non-finite input
    pub invalid_walls: InvalidWallPolicy,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            cluster_threshold: DEFAULT_CLUSTER_THRESHOLD,
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            invalid_walls: InvalidWallPolicy::Reject,
        }
    }
}

impl PostProcessConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    ///
    /// - `WALL_SNAP_THRESHOLD`
    /// - `WALL_CLUSTER_THRESHOLD`
    /// - `WALL_MERGE_THRESHOLD`
    /// - `WALL_INVALID_POLICY` (`reject` or `skip`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let threshold = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        Self {
            snap_threshold: threshold("WALL_SNAP_THRESHOLD", DEFAULT_SNAP_THRESHOLD),
            cluster_threshold: threshold("WALL_CLUSTER_THRESHOLD", DEFAULT_CLUSTER_THRESHOLD),
            merge_threshold: threshold("WALL_MERGE_THRESHOLD", DEFAULT_MERGE_THRESHOLD),
            invalid_walls: lookup("WALL_INVALID_POLICY")
                .and_then(|v| InvalidWallPolicy::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Check that every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("snap_threshold", self.snap_threshold),
            ("cluster_threshold", self.cluster_threshold),
            ("merge_threshold", self.merge_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
