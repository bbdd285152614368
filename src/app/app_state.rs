use std::time::Instant;

use ratatui::layout::Rect as CellRect;

use super::map_image::MapImage;
use crate::config::Config;
use crate::geometry::Point;
use crate::map::{AreaEvent, ImageMap, MapEvent};

/// Pointer state the terminal has to synthesise: crossterm reports raw
/// presses and releases but no clicks, double clicks or hover
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Area pressed on the last button down
    pub pressed: Option<usize>,
    /// Area and time of the last synthesised click
    pub last_click: Option<(usize, Instant)>,
    /// When the pointer last moved over the map
    pub last_move: Option<Instant>,
    pub hover_sent: bool,
    /// Client position of the pointer, if it is over the map
    pub position: Option<Point>,
}

pub struct App {
    pub map: ImageMap,
    pub image: MapImage,
    pub title: String,
    pub pointer: PointerTracker,
    /// Client region of the map in the last frame
    pub map_area: CellRect,
    /// Last activation, shown in the status line
    pub activity: Option<String>,
    pub warning: Option<String>,
    pub tooltip_auto_show: bool,
    pub should_quit: bool,
    needs_render: bool,
}

impl App {
    pub fn new(map: ImageMap, title: &str, config: &Config) -> Self {
        let mut map = map;
        map.set_center_image(config.map.center_image);
        map.set_owner_draw(config.map.owner_draw);
        // The map is the only control, so it starts with input focus
        map.got_focus(false);
        map.drain_events();

        let image = MapImage::from_areas(map.areas(), map.bounds());

        Self {
            map,
            image,
            title: title.to_string(),
            pointer: PointerTracker::default(),
            map_area: CellRect::default(),
            activity: None,
            warning: None,
            tooltip_auto_show: config.tooltip.auto_show,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render || self.map.should_render()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
        self.map.clear_dirty();
    }

    /// Display name of an area: its tool tip, else its number
    pub fn area_label(&self, index: usize) -> String {
        self.map
            .areas()
            .get(index)
            .and_then(|a| a.tool_tip())
            .map(str::to_string)
            .unwrap_or_else(|| format!("area #{}", index))
    }

    /// React to everything the map raised since the last call
    pub fn process_map_events(&mut self) {
        for event in self.map.drain_events() {
            match event {
                MapEvent::Click(click) => {
                    self.activity = Some(format!("Clicked {}", self.area_label(click.area_index)));
                    self.needs_render = true;
                }
                MapEvent::DoubleClick(click) => {
                    self.activity = Some(format!(
                        "Double-clicked {}",
                        self.area_label(click.area_index)
                    ));
                    self.needs_render = true;
                }
                MapEvent::AreasChanged(_) => {
                    self.image = MapImage::from_areas(self.map.areas(), self.map.bounds());
                    self.needs_render = true;
                }
                MapEvent::ToolTipChanged(_) | MapEvent::CursorChanged(_) => {
                    self.needs_render = true;
                }
                MapEvent::Area {
                    index,
                    event: event @ (AreaEvent::Enter | AreaEvent::Leave),
                    ..
                } => {
                    log::debug!("Area {} focus event {:?}", index, event);
                }
                _ => {}
            }
        }
    }
}
