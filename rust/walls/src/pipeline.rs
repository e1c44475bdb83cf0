// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The full cleanup pipeline: axis snap, endpoint clustering, collinear merge.

use crate::axis_snap::{snap_wall, AxisSnap};
use crate::collinear_merge::merge_collinear_walls;
use crate::config::PostProcessConfig;
use crate::endpoint_cluster::{apply_clusters, cluster_points, endpoint_arena};
use crate::error::Result;
use crate::types::Wall;
use crate::validate::screen_walls;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of the cleanup pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostProcessResult {
    /// Cleaned walls
    pub walls: Vec<Wall>,
    /// Statistics about what each stage did
    pub stats: PostProcessStats,
}

/// Statistics from the cleanup pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessStats {
    pub input_count: usize,
    pub dropped_invalid: usize,
    pub snapped_horizontal: usize,
    pub snapped_vertical: usize,
    pub endpoint_clusters: usize,
    pub merged_away: usize,
    pub output_count: usize,
}

/// Clean up raw walls with the default thresholds (5 / 10 / 5).
///
/// Fails with `Error::InvalidWallGeometry` on NaN or infinite input.
pub fn post_process_walls(walls: &[Wall]) -> Result<Vec<Wall>> {
    post_process_walls_with(walls, &PostProcessConfig::default())
}

/// Clean up raw walls with explicit thresholds and input policy
pub fn post_process_walls_with(walls: &[Wall], config: &PostProcessConfig) -> Result<Vec<Wall>> {
    post_process_walls_report(walls, config).map(|result| result.walls)
}

/// Clean up raw walls and report what each stage did.
///
/// Stages:
/// 1. Axis snap: nearly horizontal/vertical walls become exact
/// 2. Endpoint clustering: close endpoints share one coordinate
/// 3. Collinear merge: touching fragments on one line become one wall
pub fn post_process_walls_report(
    walls: &[Wall],
    config: &PostProcessConfig,
) -> Result<PostProcessResult> {
    config.validate()?;

    let mut stats = PostProcessStats {
        input_count: walls.len(),
        ..Default::default()
    };

    if walls.is_empty() {
        return Ok(PostProcessResult {
            walls: Vec::new(),
            stats,
        });
    }

    // Step 0: Screen out non-finite input
    let (walls, dropped) = screen_walls(walls, config.invalid_walls)?;
    stats.dropped_invalid = dropped;

    // Step 1: Axis snap
    let walls: Vec<Wall> = walls
        .iter()
        .map(|w| {
            let (snapped, kind) = snap_wall(w, config.snap_threshold);
            match kind {
                AxisSnap::Horizontal => stats.snapped_horizontal += 1,
                AxisSnap::Vertical => stats.snapped_vertical += 1,
                AxisSnap::Unchanged => {}
            }
            snapped
        })
        .collect();
    debug!(
        horizontal = stats.snapped_horizontal,
        vertical = stats.snapped_vertical,
        "Axis snap complete"
    );

    // Step 2: Endpoint clustering
    let clusters = cluster_points(&endpoint_arena(&walls), config.cluster_threshold);
    stats.endpoint_clusters = clusters.cluster_count();
    let walls = apply_clusters(&walls, &clusters);
    debug!(
        endpoints = walls.len() * 2,
        clusters = stats.endpoint_clusters,
        "Endpoint clustering complete"
    );

    // Step 3: Collinear merge
    let before = walls.len();
    let walls = merge_collinear_walls(&walls, config.merge_threshold);
    stats.merged_away = before - walls.len();
    stats.output_count = walls.len();
    debug!(
        input = stats.input_count,
        output = stats.output_count,
        merged_away = stats.merged_away,
        "Wall post-processing complete"
    );

    Ok(PostProcessResult { walls, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InvalidWallPolicy;
    use crate::error::Error;

    #[test]
    fn test_empty_short_circuits() {
        let result = post_process_walls_report(&[], &PostProcessConfig::default()).unwrap();
        assert!(result.walls.is_empty());
        assert_eq!(result.stats, PostProcessStats::default());
    }

    #[test]
    fn test_stats_for_noisy_room() {
        // Rectangle drawn with slightly skewed, fragmented edges
        let walls = vec![
            Wall::new(0.0, 0.0, 200.0, 2.0),
            Wall::new(202.0, 0.0, 200.0, 150.0),
            Wall::new(200.0, 150.0, 100.0, 151.0),
            Wall::new(100.0, 151.0, 0.0, 150.0),
            Wall::new(0.0, 150.0, 1.0, 0.0),
        ];
        let result = post_process_walls_report(&walls, &PostProcessConfig::default()).unwrap();

        assert_eq!(result.stats.input_count, 5);
        assert_eq!(result.stats.snapped_horizontal, 3);
        assert_eq!(result.stats.snapped_vertical, 2);
        assert_eq!(result.stats.endpoint_clusters, 5);
        assert_eq!(result.stats.merged_away, 1);
        assert_eq!(result.walls.len(), 4);
        assert_eq!(
            result.walls,
            vec![
                Wall::new(1.0, 1.0, 201.0, 1.0),
                Wall::new(201.0, 1.0, 201.0, 151.0),
                Wall::new(1.0, 151.0, 201.0, 151.0),
                Wall::new(1.0, 151.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_skip_policy_counts_dropped() {
        let walls = vec![
            Wall::new(0.0, 0.0, 100.0, 0.0),
            Wall::new(0.0, f64::NAN, 100.0, 0.0),
        ];
        let config = PostProcessConfig {
            invalid_walls: InvalidWallPolicy::Skip,
            ..Default::default()
        };
        let result = post_process_walls_report(&walls, &config).unwrap();

        assert_eq!(result.stats.dropped_invalid, 1);
        assert_eq!(result.walls, vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = PostProcessConfig {
            cluster_threshold: f64::INFINITY,
            ..Default::default()
        };
        let err = post_process_walls_with(&[Wall::new(0.0, 0.0, 1.0, 0.0)], &config).unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold { .. }));
    }
}
