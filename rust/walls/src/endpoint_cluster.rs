// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint clustering: close small gaps between wall joints.
//!
//! All endpoints are flattened into a point arena where wall `i` owns
//! indices `2i` (start) and `2i + 1` (end). Clusters are built greedily
//! around a seed point: a later point joins when it is within the
//! threshold of the *seed*, not of any other member. Chains of points that
//! are each close to their neighbour but far from the seed are split
//! across several clusters.

use crate::types::{round_half_up, Wall};
use nalgebra::Point2;
use smallvec::SmallVec;

/// Arena indices of the points belonging to one cluster
type Members = SmallVec<[usize; 4]>;

/// Result of clustering a point arena
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointClusters {
    /// Cluster id for every arena index
    pub assignment: Vec<usize>,
    /// Canonical (rounded mean) point of every cluster
    pub centers: Vec<Point2<f64>>,
}

impl EndpointClusters {
    pub fn cluster_count(&self) -> usize {
        self.centers.len()
    }

    /// Canonical point for arena index `idx`
    pub fn canonical(&self, idx: usize) -> Point2<f64> {
        self.centers[self.assignment[idx]]
    }
}

/// Flatten walls into the endpoint arena (`2i` = start, `2i + 1` = end)
pub fn endpoint_arena(walls: &[Wall]) -> Vec<Point2<f64>> {
    walls.iter().flat_map(|w| [w.start(), w.end()]).collect()
}

/// Greedy single-centre clustering of `points`.
pub fn cluster_points(points: &[Point2<f64>], threshold: f64) -> EndpointClusters {
    let mut visited = vec![false; points.len()];
    let mut assignment = vec![0; points.len()];
    let mut centers = Vec::new();

    for seed in 0..points.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut members: Members = SmallVec::new();
        members.push(seed);

        for j in (seed + 1)..points.len() {
            if !visited[j] && nalgebra::distance(&points[seed], &points[j]) <= threshold {
                visited[j] = true;
                members.push(j);
            }
        }

        let count = members.len() as f64;
        let sum_x: f64 = members.iter().map(|&m| points[m].x).sum();
        let sum_y: f64 = members.iter().map(|&m| points[m].y).sum();
        let center = Point2::new(round_half_up(sum_x / count), round_half_up(sum_y / count));

        let cluster_id = centers.len();
        for &m in &members {
            assignment[m] = cluster_id;
        }
        centers.push(center);
    }

    EndpointClusters {
        assignment,
        centers,
    }
}

/// Rebuild walls from their clustered endpoints
pub fn apply_clusters(walls: &[Wall], clusters: &EndpointClusters) -> Vec<Wall> {
    walls
        .iter()
        .enumerate()
        .map(|(i, w)| {
            Wall::from_points(
                clusters.canonical(2 * i),
                clusters.canonical(2 * i + 1),
                w.thickness,
            )
        })
        .collect()
}

/// Merge wall endpoints closer than `threshold` into shared coordinates
pub fn snap_endpoints(walls: &[Wall], threshold: f64) -> Vec<Wall> {
    let clusters = cluster_points(&endpoint_arena(walls), threshold);
    apply_clusters(walls, &clusters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_index_convention() {
        let walls = vec![Wall::new(1.0, 2.0, 3.0, 4.0), Wall::new(5.0, 6.0, 7.0, 8.0)];
        let arena = endpoint_arena(&walls);

        assert_eq!(arena.len(), 4);
        assert_eq!(arena[2], Point2::new(5.0, 6.0));
        assert_eq!(arena[3], Point2::new(7.0, 8.0));
    }

    #[test]
    fn test_gap_between_corner_walls_closed() {
        let walls = vec![
            Wall::new(0.0, 0.0, 100.0, 0.0),
            Wall::new(104.0, 3.0, 104.0, 200.0),
        ];
        let snapped = snap_endpoints(&walls, 10.0);

        // (100, 0) and (104, 3) -> (102, 1.5) -> rounded (102, 2)
        assert_eq!(snapped[0].x2, 102.0);
        assert_eq!(snapped[0].y2, 2.0);
        assert_eq!((snapped[1].x1, snapped[1].y1), (102.0, 2.0));
        // Far endpoints untouched
        assert_eq!((snapped[0].x1, snapped[0].y1), (0.0, 0.0));
        assert_eq!((snapped[1].x2, snapped[1].y2), (104.0, 200.0));
    }

    #[test]
    fn test_clustering_is_not_transitive() {
        // Each point is 8 away from the next; only the first two are within
        // 10 of the seed at x = 0.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(16.0, 0.0),
        ];
        let clusters = cluster_points(&points, 10.0);

        assert_eq!(clusters.cluster_count(), 2);
        assert_eq!(clusters.assignment, vec![0, 0, 1]);
        assert_eq!(clusters.centers[0], Point2::new(4.0, 0.0));
        assert_eq!(clusters.centers[1], Point2::new(16.0, 0.0));
    }

    #[test]
    fn test_distance_at_threshold_joins() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(6.0, 8.0)];
        let clusters = cluster_points(&points, 10.0);
        assert_eq!(clusters.cluster_count(), 1);
    }

    #[test]
    fn test_three_way_cluster_shares_one_point() {
        let walls = vec![
            Wall::new(0.0, 0.0, 100.0, 1.0),
            Wall::new(98.0, -2.0, 98.0, -100.0),
            Wall::new(101.0, 3.0, 200.0, 3.0).with_thickness(90.0),
        ];
        let snapped = snap_endpoints(&walls, 10.0);

        let joint = (snapped[0].x2, snapped[0].y2);
        assert_eq!(joint, (snapped[1].x1, snapped[1].y1));
        assert_eq!(joint, (snapped[2].x1, snapped[2].y1));
        // mean x = 299 / 3 = 99.67 -> 100, mean y = 2 / 3 -> 1
        assert_eq!(joint, (100.0, 1.0));
        assert_eq!(snapped[2].thickness, Some(90.0));
    }

    #[test]
    fn test_empty() {
        assert!(snap_endpoints(&[], 10.0).is_empty());
    }
}
