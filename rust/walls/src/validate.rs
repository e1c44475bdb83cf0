// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input screening for non-finite wall geometry.

use crate::config::InvalidWallPolicy;
use crate::error::{Error, Result};
use crate::types::Wall;
use tracing::warn;

/// Apply `policy` to `walls`, returning the walls that may enter the
/// pipeline and the number dropped.
pub fn screen_walls(walls: &[Wall], policy: InvalidWallPolicy) -> Result<(Vec<Wall>, usize)> {
    let mut kept = Vec::with_capacity(walls.len());
    let mut dropped = 0;

    for (index, wall) in walls.iter().enumerate() {
        let Some((field, value)) = wall.first_non_finite() else {
            kept.push(*wall);
            continue;
        };

        match policy {
            InvalidWallPolicy::Reject => {
                return Err(Error::InvalidWallGeometry {
                    index,
                    field,
                    value,
                });
            }
            InvalidWallPolicy::Skip => {
                warn!(index, field, value, "Dropping wall with non-finite geometry");
                dropped += 1;
            }
        }
    }

    Ok((kept, dropped))
}
