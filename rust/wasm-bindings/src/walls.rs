// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WebAssembly bindings for AI floor plan wall cleanup

use crate::utils::console_warn;
use renovo_walls::{
    parse_walls_json, post_process_walls_report, PostProcessConfig, PostProcessResult, Wall,
};
use wasm_bindgen::prelude::*;

/// Clean up walls with the default thresholds.
///
/// Takes and returns a JS array of `{ x1, y1, x2, y2, thickness? }`.
#[wasm_bindgen(js_name = postProcessWalls)]
pub fn post_process_walls(walls: JsValue) -> Result<JsValue, JsError> {
    WallCleanupAPI::new().process(walls)
}

/// Clean up a JSON wall array or extraction document.
///
/// # Arguments
///
/// * `walls_json` - Wall array, or an object with a `walls` array
/// * `config_json` - Optional PostProcessConfig overrides
///
/// # Returns
///
/// JSON string of the same shape as the input with cleaned walls
#[wasm_bindgen(js_name = postProcessWallsJson)]
pub fn post_process_walls_json(
    walls_json: &str,
    config_json: Option<String>,
) -> Result<String, JsError> {
    let config = match config_json.as_deref() {
        Some(json) => parse_config(json)?,
        None => PostProcessConfig::default(),
    };
    process_document(walls_json, &config).map_err(|e| JsError::new(&e))
}

/// Wall cleanup API holding a reusable configuration
#[wasm_bindgen]
pub struct WallCleanupAPI {
    config: PostProcessConfig,
}

#[wasm_bindgen]
impl WallCleanupAPI {
    /// Create a new WallCleanupAPI instance with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: PostProcessConfig::default(),
        }
    }

    /// Set configuration from JSON; omitted fields keep their defaults
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsError> {
        self.config = parse_config(config_json)?;
        Ok(())
    }

    /// Get current configuration as JSON
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_else(|_| "{}".to_string())
    }

    /// Clean up a JS wall array, returning the cleaned array
    #[wasm_bindgen]
    pub fn process(&self, walls: JsValue) -> Result<JsValue, JsError> {
        let result = self.run(walls)?;
        serde_wasm_bindgen::to_value(&result.walls)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Clean up a JS wall array, returning `{ walls, stats }`
    #[wasm_bindgen(js_name = processWithStats)]
    pub fn process_with_stats(&self, walls: JsValue) -> Result<JsValue, JsError> {
        let result = self.run(walls)?;
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Clean up a JSON wall array or extraction document
    #[wasm_bindgen(js_name = processJson)]
    pub fn process_json(&self, walls_json: &str) -> Result<String, JsError> {
        process_document(walls_json, &self.config).map_err(|e| JsError::new(&e))
    }
}

impl WallCleanupAPI {
    fn run(&self, walls: JsValue) -> Result<PostProcessResult, JsError> {
        let walls: Vec<Wall> = serde_wasm_bindgen::from_value(walls)
            .map_err(|e| JsError::new(&format!("Invalid walls: {}", e)))?;
        let result = post_process_walls_report(&walls, &self.config)
            .map_err(|e| JsError::new(&format!("Wall post-processing error: {}", e)))?;
        warn_dropped(&result);
        Ok(result)
    }
}

impl Default for WallCleanupAPI {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_config(config_json: &str) -> Result<PostProcessConfig, JsError> {
    let config: PostProcessConfig = serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config JSON: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
    Ok(config)
}

fn process_document(walls_json: &str, config: &PostProcessConfig) -> Result<String, String> {
    let mut document =
        parse_walls_json(walls_json).map_err(|e| format!("Invalid walls JSON: {}", e))?;
    let result = post_process_walls_report(document.walls(), config)
        .map_err(|e| format!("Wall post-processing error: {}", e))?;
    warn_dropped(&result);

    document.replace_walls(result.walls);
    let value = document
        .to_value()
        .map_err(|e| format!("Serialization error: {}", e))?;
    serde_json::to_string(&value).map_err(|e| format!("Serialization error: {}", e))
}

fn warn_dropped(result: &PostProcessResult) {
    if result.stats.dropped_invalid > 0 {
        console_warn(&format!(
            "postProcessWalls: dropped {} wall(s) with non-finite geometry",
            result.stats.dropped_invalid
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renovo_walls::InvalidWallPolicy;

    #[test]
    fn test_process_document_bare_array() {
        let json = r#"[{"x1":0,"y1":0,"x2":100,"y2":2},{"x1":104,"y1":0,"x2":200,"y2":2}]"#;
        let out = process_document(json, &PostProcessConfig::default()).unwrap();
        let walls: Vec<Wall> = serde_json::from_str(&out).unwrap();

        assert_eq!(walls, vec![Wall::new(0.0, 1.0, 200.0, 1.0)]);
    }

    #[test]
    fn test_process_document_keeps_extraction_fields() {
        let json = r#"{"walls":[{"x1":0,"y1":0,"x2":100,"y2":0}],"fixtures":[{"kind":"sink"}]}"#;
        let out = process_document(json, &PostProcessConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["fixtures"][0]["kind"], "sink");
        assert_eq!(value["walls"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_process_document_errors() {
        let config = PostProcessConfig::default();
        assert!(process_document("{", &config).is_err());
        assert!(process_document(r#"{"rooms":[]}"#, &config).is_err());
    }

    #[test]
    fn test_get_config_round_trips() {
        let api = WallCleanupAPI {
            config: PostProcessConfig {
                cluster_threshold: 25.0,
                invalid_walls: InvalidWallPolicy::Skip,
                ..Default::default()
            },
        };
        let config: PostProcessConfig = serde_json::from_str(&api.get_config()).unwrap();
        assert_eq!(config, api.config);
    }
}
