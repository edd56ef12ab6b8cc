use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

/// Geometry constants for the tree layout. These are renderer-facing pixel
/// values; nothing here is derived from the member data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical distance between consecutive generations.
    pub generation_spacing: f32,
    /// Horizontal gap between unrelated members and between sibling groups.
    pub member_spacing: f32,
    /// Horizontal gap between members of the same sibling group.
    pub sibling_spacing: f32,
    pub node_width: f32,
    pub node_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            generation_spacing: 150.0,
            member_spacing: 100.0,
            sibling_spacing: 30.0,
            node_width: 220.0,
            node_height: 120.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("generationSpacing", self.generation_spacing),
            ("memberSpacing", self.member_spacing),
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if !self.sibling_spacing.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "siblingSpacing",
            });
        }
        if self.sibling_spacing < 0.0 {
            return Err(ConfigError::Negative {
                field: "siblingSpacing",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1200.0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    generation_spacing: Option<f32>,
    member_spacing: Option<f32>,
    sibling_spacing: Option<f32>,
    node_width: Option<f32>,
    node_height: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportConfigFile {
    width: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutConfigFile>,
    viewport: Option<ViewportConfigFile>,
}

/// Loads a JSON config file and merges it over the defaults. Strict JSON is
/// tried first, then JSON5 for hand-written files with comments or trailing
/// commas. The merged result is validated once here; the layout core trusts it.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        config.layout.validate()?;
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(&contents)?,
    };

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.generation_spacing {
            config.layout.generation_spacing = v;
        }
        if let Some(v) = layout.member_spacing {
            config.layout.member_spacing = v;
        }
        if let Some(v) = layout.sibling_spacing {
            config.layout.sibling_spacing = v;
        }
        if let Some(v) = layout.node_width {
            config.layout.node_width = v;
        }
        if let Some(v) = layout.node_height {
            config.layout.node_height = v;
        }
    }
    if let Some(viewport) = parsed.viewport
        && let Some(v) = viewport.width
    {
        config.viewport.width = v;
    }

    config.layout.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_node_width() {
        let config = LayoutConfig {
            node_width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "nodeWidth" })
        );
    }

    #[test]
    fn rejects_nan_spacing() {
        let config = LayoutConfig {
            generation_spacing: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "generationSpacing"
            })
        );
    }

    #[test]
    fn zero_sibling_spacing_is_allowed() {
        let config = LayoutConfig {
            sibling_spacing: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
