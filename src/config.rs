use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

/// Canvas and styling settings for an editor instance.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub node_radius: f64,
    pub node_fill: String,
    pub node_stroke: String,
    pub node_stroke_width: f64,
    pub link_stroke: String,
    pub link_stroke_width: f64,
    pub marker_size: f64,
    /// Seeds node id generation. Unset means ids come from the OS RNG.
    pub id_seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 960.0,
            canvas_height: 720.0,
            node_radius: 60.0,
            node_fill: "#ddd".to_string(),
            node_stroke: "white".to_string(),
            node_stroke_width: 2.0,
            link_stroke: "black".to_string(),
            link_stroke_width: 2.0,
            marker_size: 6.0,
            id_seed: None,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The arrow marker is pulled back by the node radius so it ends on the circle.
    pub fn marker_ref_x(&self) -> f64 {
        self.node_radius
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvasWidth", self.canvas_width),
            ("canvasHeight", self.canvas_height),
            ("nodeRadius", self.node_radius),
            ("markerSize", self.marker_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!("expected a positive number, got {}", value),
                });
            }
        }
        for (field, value) in [
            ("nodeStrokeWidth", self.node_stroke_width),
            ("linkStrokeWidth", self.link_stroke_width),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!("expected a non-negative number, got {}", value),
                });
            }
        }
        Ok(())
    }
}
