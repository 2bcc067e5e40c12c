use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::grid::{self, DEFAULT_GRID_SIZE};
use crate::symmetry::SymmetrySettings;
use crate::tools::ToolKind;

/// Start-up settings for the editor.
/// Missing fields take their default value when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_size: usize,
    pub background: Color,
    pub paint_color: Color,
    pub tool: ToolKind,
    pub symmetry: SymmetrySettings,
    pub show_grid_lines: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            background: Color::WHITE,
            paint_color: Color::BLACK,
            tool: ToolKind::Pen,
            symmetry: SymmetrySettings::default(),
            show_grid_lines: true,
        }
    }
}

impl EditorConfig {
    /// Parses a JSON configuration and checks its values
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        grid::validate_size(self.grid_size)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::symmetry::SymmetryMode;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.paint_color, Color::BLACK);
    }

    #[test]
    fn test_partial_config() {
        let config = EditorConfig::from_json(
            r##"{
                "grid_size": 32,
                "paint_color": "#FF006E",
                "tool": "fill",
                "symmetry": { "enabled": true, "mode": "quad" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.grid_size, 32);
        assert_eq!(config.paint_color, Color::rgb(0xff, 0x00, 0x6e));
        assert_eq!(config.tool, ToolKind::Fill);
        assert!(config.symmetry.enabled);
        assert_eq!(config.symmetry.mode, SymmetryMode::Quad);
        assert!(config.show_grid_lines);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{ "grid_size": 0 }"#),
            Err(ConfigError::Invalid(GridError::InvalidSize { requested: 0, .. }))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "tool": "lasso" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{ "background": "white" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_uses_canonical_names() {
        let json = EditorConfig::default().to_json().unwrap();
        assert!(json.contains("\"#ffffff\""));
        assert!(json.contains("\"pen\""));
        assert!(json.contains("\"vertical\""));
        assert_eq!(EditorConfig::from_json(&json).unwrap(), EditorConfig::default());
    }
}
