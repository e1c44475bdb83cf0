// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core wall types shared by every post-processing stage

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A straight wall segment as produced by floor plan extraction.
///
/// Coordinates are unit-agnostic (the web client works in millimetres).
/// `thickness` is carried through every stage and never computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Wall {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

impl Wall {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            thickness: None,
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Build a wall from two endpoints, keeping the given thickness
    pub fn from_points(start: Point2<f64>, end: Point2<f64>, thickness: Option<f64>) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            thickness,
        }
    }

    pub fn start(&self) -> Point2<f64> {
        Point2::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point2<f64> {
        Point2::new(self.x2, self.y2)
    }

    /// Absolute horizontal extent
    pub fn dx(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Absolute vertical extent
    pub fn dy(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start(), &self.end())
    }

    /// Exactly horizontal (`y1 == y2`). A zero-length wall is both
    /// horizontal and vertical.
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    /// Exactly vertical (`x1 == x2`).
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }

    /// Returns the first non-finite field as `(name, value)`, if any.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        let fields = [
            ("x1", self.x1),
            ("y1", self.y1),
            ("x2", self.x2),
            ("y2", self.y2),
        ];
        if let Some(bad) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Some(bad);
        }
        match self.thickness {
            Some(t) if !t.is_finite() => Some(("thickness", t)),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }
}

/// Round half toward positive infinity.
///
/// Matches the rounding the web client applies to wall coordinates
/// (`round(2.5) == 3`, `round(-2.5) == -2`), so results are identical on
/// both sides of the WASM boundary.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
