// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON boundary for wall lists.
//!
//! Floor plan extraction returns either a bare wall array or a document
//! with `walls` next to doors, fixtures and rooms. Only the walls are
//! touched; everything else is written back as it was read.

use crate::error::{Error, Result};
use crate::types::Wall;
use serde_json::{Map, Value};

/// Walls read from JSON, together with the document they came from
#[derive(Debug, Clone, PartialEq)]
pub struct WallDocument {
    /// Remaining keys of an extraction document; `None` for a bare array
    rest: Option<Map<String, Value>>,
    walls: Vec<Wall>,
}

impl WallDocument {
    pub fn from_walls(walls: Vec<Wall>) -> Self {
        Self { rest: None, walls }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn replace_walls(&mut self, walls: Vec<Wall>) {
        self.walls = walls;
    }

    /// Whether this came from an extraction document rather than a bare array
    pub fn is_extraction(&self) -> bool {
        self.rest.is_some()
    }

    pub fn to_value(&self) -> Result<Value> {
        let walls = serde_json::to_value(&self.walls)?;
        Ok(match &self.rest {
            Some(rest) => {
                let mut map = rest.clone();
                map.insert("walls".to_string(), walls);
                Value::Object(map)
            }
            None => walls,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}

/// Parse a wall array or an extraction document holding a `walls` array
pub fn parse_walls_json(input: &str) -> Result<WallDocument> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Array(_) => Ok(WallDocument::from_walls(serde_json::from_value(value)?)),
        Value::Object(mut map) => {
            let walls = map.remove("walls").ok_or_else(|| {
                Error::UnexpectedDocument("object has no `walls` field".to_string())
            })?;
            if !walls.is_array() {
                return Err(Error::UnexpectedDocument(
                    "`walls` field is not an array".to_string(),
                ));
            }
            Ok(WallDocument {
                rest: Some(map),
                walls: serde_json::from_value(walls)?,
            })
        }
        other => Err(Error::UnexpectedDocument(format!(
            "expected an array or object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
