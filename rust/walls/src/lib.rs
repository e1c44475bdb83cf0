// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cleanup of AI-detected floor plan walls
//!
//! Vision models return walls as noisy line segments: slightly skewed,
//! with small gaps at corners and one physical wall split into several
//! fragments. This crate turns them into axis-aligned, connected geometry
//! ready for the floor plan editor:
//! 1. Axis snap: straighten nearly horizontal/vertical walls
//! 2. Endpoint clustering: join endpoints that are meant to coincide
//! 3. Collinear merge: fuse touching fragments on the same line
//!
//! # Usage
//!
//! ```rust
//! use renovo_walls::{post_process_walls, Wall};
//!
//! let raw = vec![
//!     Wall::new(0.0, 0.0, 100.0, 2.0),
//!     Wall::new(104.0, 0.0, 200.0, 2.0),
//! ];
//! let walls = post_process_walls(&raw)?;
//! assert_eq!(walls, vec![Wall::new(0.0, 1.0, 200.0, 1.0)]);
//! # Ok::<(), renovo_walls::Error>(())
//! ```

pub mod axis_snap;
pub mod collinear_merge;
pub mod config;
pub mod endpoint_cluster;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod types;
pub mod validate;

// Re-export commonly used types and functions
pub use axis_snap::{snap_to_axis, snap_wall, AxisSnap};
pub use collinear_merge::{merge_collinear_walls, try_merge};
pub use config::{
    InvalidWallPolicy, PostProcessConfig, DEFAULT_CLUSTER_THRESHOLD, DEFAULT_MERGE_THRESHOLD,
    DEFAULT_SNAP_THRESHOLD,
};
pub use endpoint_cluster::{cluster_points, snap_endpoints, EndpointClusters};
pub use error::{Error, Result};
pub use io::{parse_walls_json, WallDocument};
pub use pipeline::{
    post_process_walls, post_process_walls_report, post_process_walls_with, PostProcessResult,
    PostProcessStats,
};
pub use types::{round_half_up, Wall};
