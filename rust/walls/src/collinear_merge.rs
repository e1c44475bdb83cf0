// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collinear merge: fuse fragments of one physical wall.
//!
//! Detection often splits a single wall into several short segments (at
//! door openings, or where the line was faint). Only exactly axis-aligned
//! walls are considered, so this runs after axis snapping.

use crate::types::{round_half_up, Wall};

/// Try to merge two walls lying on the same horizontal or vertical line.
///
/// The walls merge when their fixed coordinate differs by at most
/// `threshold` and their spans overlap or leave a gap of at most
/// `threshold`. The result covers both spans on the rounded mean line.
/// Thickness comes from `a` when set, otherwise from `b`.
pub fn try_merge(a: &Wall, b: &Wall, threshold: f64) -> Option<Wall> {
    let thickness = a.thickness.or(b.thickness);

    if a.is_horizontal() && b.is_horizontal() {
        if (a.y1 - b.y1).abs() > threshold {
            return None;
        }
        let (a_min, a_max) = span(a.x1, a.x2);
        let (b_min, b_max) = span(b.x1, b.x2);
        if !spans_touch(a_min, a_max, b_min, b_max, threshold) {
            return None;
        }
        let y = round_half_up((a.y1 + b.y1) / 2.0);
        Some(Wall {
            x1: a_min.min(b_min),
            y1: y,
            x2: a_max.max(b_max),
            y2: y,
            thickness,
        })
    } else if a.is_vertical() && b.is_vertical() {
        if (a.x1 - b.x1).abs() > threshold {
            return None;
        }
        let (a_min, a_max) = span(a.y1, a.y2);
        let (b_min, b_max) = span(b.y1, b.y2);
        if !spans_touch(a_min, a_max, b_min, b_max, threshold) {
            return None;
        }
        let x = round_half_up((a.x1 + b.x1) / 2.0);
        Some(Wall {
            x1: x,
            y1: a_min.min(b_min),
            x2: x,
            y2: a_max.max(b_max),
            thickness,
        })
    } else {
        None
    }
}

fn span(p: f64, q: f64) -> (f64, f64) {
    (p.min(q), p.max(q))
}

/// Spans overlap, or the gap between them is within `threshold`
fn spans_touch(a_min: f64, a_max: f64, b_min: f64, b_max: f64, threshold: f64) -> bool {
    b_min <= a_max + threshold && a_min <= b_max + threshold
}

/// Merge collinear, touching axis-aligned walls.
///
/// Each unused wall in input order seeds an accumulator; the remaining
/// unused walls are folded into it repeatedly until a full pass merges
/// nothing. A wall is folded into at most one accumulator.
pub fn merge_collinear_walls(walls: &[Wall], threshold: f64) -> Vec<Wall> {
    let mut merged = Vec::new();
    let mut used = vec![false; walls.len()];

    for i in 0..walls.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut current = walls[i];

        // A merge grows the accumulator, which may bring earlier-rejected
        // walls into range; rescan until nothing changes.
        let mut changed = true;
        while changed {
            changed = false;
            for j in 0..walls.len() {
                if used[j] {
                    continue;
                }
                if let Some(result) = try_merge(&current, &walls[j], threshold) {
                    current = result;
                    used[j] = true;
                    changed = true;
                }
            }
        }

        merged.push(current);
    }

    merged
}
