// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis snapping: straighten walls that are nearly horizontal or vertical.
//!
//! The collinear merge stage only considers exactly axis-aligned walls, so
//! small angular noise from detection has to be removed first.

use crate::types::{round_half_up, Wall};

/// Outcome of snapping a single wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSnap {
    Horizontal,
    Vertical,
    Unchanged,
}

/// Snap one wall, reporting which axis (if any) it was snapped to.
///
/// Walls with `dx == dy`, or that fall outside the threshold on both axes,
/// are left untouched.
pub fn snap_wall(wall: &Wall, threshold: f64) -> (Wall, AxisSnap) {
    let dx = wall.dx();
    let dy = wall.dy();

    if dy < threshold && dx > dy {
        let y = round_half_up((wall.y1 + wall.y2) / 2.0);
        (Wall { y1: y, y2: y, ..*wall }, AxisSnap::Horizontal)
    } else if dx < threshold && dy > dx {
        let x = round_half_up((wall.x1 + wall.x2) / 2.0);
        (Wall { x1: x, x2: x, ..*wall }, AxisSnap::Vertical)
    } else {
        (*wall, AxisSnap::Unchanged)
    }
}

/// Snap walls to horizontal/vertical if close to axis-aligned
pub fn snap_to_axis(walls: &[Wall], threshold: f64) -> Vec<Wall> {
    walls.iter().map(|w| snap_wall(w, threshold).0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_horizontal_snaps() {
        let wall = Wall::new(0.0, 10.0, 100.0, 14.0);
        let (snapped, kind) = snap_wall(&wall, 5.0);

        assert_eq!(kind, AxisSnap::Horizontal);
        assert_eq!(snapped, Wall::new(0.0, 12.0, 100.0, 12.0));
    }

    #[test]
    fn test_off_axis_beyond_threshold_unchanged() {
        let wall = Wall::new(0.0, 10.0, 100.0, 16.0);
        let (snapped, kind) = snap_wall(&wall, 5.0);

        assert_eq!(kind, AxisSnap::Unchanged);
        assert_eq!(snapped, wall);
    }

    #[test]
    fn test_near_vertical_snaps_and_rounds() {
        let wall = Wall::new(50.0, 0.0, 53.0, 200.0).with_thickness(120.0);
        let (snapped, kind) = snap_wall(&wall, 5.0);

        assert_eq!(kind, AxisSnap::Vertical);
        // (50 + 53) / 2 = 51.5 rounds up
        assert_eq!(snapped.x1, 52.0);
        assert_eq!(snapped.x2, 52.0);
        assert_eq!(snapped.thickness, Some(120.0));
    }

    #[test]
    fn test_ambiguous_walls_unchanged() {
        // Perfect diagonal
        let diagonal = Wall::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(snap_wall(&diagonal, 5.0).1, AxisSnap::Unchanged);

        // Tiny diagonal: both extents below threshold but equal
        let tiny = Wall::new(0.0, 0.0, 3.0, 3.0);
        assert_eq!(snap_wall(&tiny, 5.0), (tiny, AxisSnap::Unchanged));
    }

    #[test]
    fn test_short_wall_below_threshold_picks_dominant_axis() {
        let wall = Wall::new(0.0, 0.0, 4.0, 1.0);
        let (snapped, kind) = snap_wall(&wall, 5.0);

        assert_eq!(kind, AxisSnap::Horizontal);
        assert_eq!(snapped.y1, 1.0); // round(0.5)
        assert_eq!(snapped.y2, 1.0);
    }

    #[test]
    fn test_snap_to_axis_preserves_length_and_order() {
        let walls = vec![
            Wall::new(0.0, 0.0, 100.0, 2.0),
            Wall::new(0.0, 0.0, 60.0, 60.0),
            Wall::new(10.0, 0.0, 11.0, 80.0),
        ];
        let snapped = snap_to_axis(&walls, 5.0);

        assert_eq!(snapped.len(), 3);
        assert!(snapped[0].is_horizontal());
        assert_eq!(snapped[1], walls[1]);
        assert!(snapped[2].is_vertical());
        assert!(snap_to_axis(&[], 5.0).is_empty());
    }
}
