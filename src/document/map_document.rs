use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::area::{Area, ClickAction};
use crate::error::ImageMapError;
use crate::geometry::{ShapeKind, Size};
use crate::map::ImageMap;

/// One `[[area]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaSpec {
    pub shape: ShapeKind,
    #[serde(default)]
    pub coords: String,
    #[serde(default)]
    pub tool_tip: Option<String>,
    #[serde(default)]
    pub tab_order: u32,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub action: ClickAction,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub owner_draw: bool,
    #[serde(default)]
    pub tag: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl AreaSpec {
    pub fn to_area(&self) -> Result<Area, ImageMapError> {
        let mut area = Area::from_coordinates(self.shape, &self.coords)?;
        area.set_tool_tip(self.tool_tip.as_deref());
        area.set_tab_order(self.tab_order);
        if let Some(key) = &self.access_key {
            area.set_access_key_text(key)?;
        }
        area.set_action(self.action);
        area.set_enabled(self.enabled);
        area.set_owner_draw(self.owner_draw);
        area.set_tag(self.tag.as_deref());
        Ok(area)
    }
}

/// Parsed map document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapDocument {
    /// Explicit map width; 0 uses the extent of the areas
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub tool_tip: Option<String>,
    #[serde(default, rename = "area")]
    pub areas: Vec<AreaSpec>,
}

impl MapDocument {
    pub fn parse(text: &str) -> Result<Self, ImageMapError> {
        let document: MapDocument =
            toml::from_str(text).map_err(|e| ImageMapError::InvalidDocument(e.to_string()))?;
        if document.width < 0 || document.height < 0 {
            return Err(ImageMapError::InvalidDocument(format!(
                "map size must not be negative, got {}x{}",
                document.width, document.height
            )));
        }
        Ok(document)
    }

    pub fn load(path: &Path) -> Result<Self, ImageMapError> {
        let text = fs::read_to_string(path)?;
        let document = Self::parse(&text)?;

        #[cfg(debug_assertions)]
        log::debug!(
            "Loaded map document {:?} with {} areas",
            path,
            document.areas.len()
        );

        Ok(document)
    }

    /// Build the areas in document order
    ///
    /// Errors name the offending area by its 1-based position.
    pub fn to_areas(&self) -> Result<Vec<Area>, ImageMapError> {
        self.areas
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                spec.to_area()
                    .map_err(|e| ImageMapError::InvalidDocument(format!("area {}: {}", i + 1, e)))
            })
            .collect()
    }

    /// Build an image map
    ///
    /// The image size is the extent of the areas' bounding boxes, and an
    /// explicit `width`/`height` overrides it.
    pub fn to_map(&self) -> Result<ImageMap, ImageMapError> {
        let areas = self.to_areas()?;
        let extent = areas
            .iter()
            .map(Area::bounding_box)
            .fold(Size::default(), |size, b| {
                Size::new(size.width.max(b.right()), size.height.max(b.bottom()))
            });

        let mut map = ImageMap::with_areas(areas);
        map.set_image_size(Some(extent));
        map.set_map_size(self.width, self.height);
        map.set_tool_tip(self.tool_tip.as_deref());
        Ok(map)
    }
}
