// Configuration type definitions

use serde::Deserialize;

/// Image map presentation section
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_true")]
    pub center_image: bool,
    #[serde(default)]
    pub owner_draw: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center_image: true,
            owner_draw: false,
        }
    }
}

/// Tooltip configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_true")]
    pub auto_show: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig { auto_show: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
