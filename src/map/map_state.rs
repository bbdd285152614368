use super::map_events::{AreaEvent, MapCursor, MapEvent};
use super::viewport::Viewport;
use crate::area::{Area, AreaId};
use crate::collection::AreaCollection;
use crate::draw::{ColorMatrix, DrawState};
use crate::geometry::{Point, Size};
use crate::hit_test::HitTestCache;
use crate::navigation;

/// Interactive image map: an image plus an ordered collection of areas
///
/// Area indices are storage indices into `areas()`. Mutating the collection
/// through `areas_mut()` is picked up lazily by the next call into the map.
#[derive(Debug)]
pub struct ImageMap {
    pub(super) areas: AreaCollection,
    pub(super) hit_test: HitTestCache,
    synced_version: u64,

    image_size: Option<Size>,
    map_width: i32,
    map_height: i32,
    pub(super) viewport: Viewport,
    pub(super) center_image: bool,

    pub(super) enabled: bool,
    pub(super) owner_draw: bool,
    pub(super) has_focus: bool,
    pub(super) focused_area: Option<usize>,
    focused_id: Option<AreaId>,
    pub(super) hot_area: Option<usize>,
    hot_id: Option<AreaId>,

    tool_tip: Option<String>,
    pub(super) shown_tool_tip: Option<String>,
    pub(super) cursor: MapCursor,
    pub(super) disabled_filter: ColorMatrix,

    pub(super) events: Vec<MapEvent>,
    pub(super) dirty: bool,
}

impl Default for ImageMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageMap {
    pub fn new() -> Self {
        Self {
            areas: AreaCollection::new(),
            hit_test: HitTestCache::new(),
            synced_version: 0,
            image_size: None,
            map_width: 0,
            map_height: 0,
            viewport: Viewport::default(),
            center_image: true,
            enabled: true,
            owner_draw: false,
            has_focus: false,
            focused_area: None,
            focused_id: None,
            hot_area: None,
            hot_id: None,
            tool_tip: None,
            shown_tool_tip: None,
            cursor: MapCursor::Default,
            disabled_filter: ColorMatrix::disabled(),
            events: Vec::new(),
            dirty: true,
        }
    }

    pub fn with_areas(areas: impl IntoIterator<Item = Area>) -> Self {
        let mut map = Self::new();
        map.areas.extend(areas);
        map.sync();
        map
    }

    pub fn areas(&self) -> &AreaCollection {
        &self.areas
    }

    pub fn areas_mut(&mut self) -> &mut AreaCollection {
        &mut self.areas
    }

    /// Pick up pending collection changes
    ///
    /// Called by every entry point; hosts only need it to observe
    /// `AreasChanged` before the next input or render.
    pub fn sync(&mut self) {
        if self.areas.version() == self.synced_version {
            return;
        }
        self.synced_version = self.areas.version();

        let changes = self.areas.take_changes();
        log::debug!(
            "Area collection changed ({} notifications, version {})",
            changes.len(),
            self.synced_version
        );

        if self.hit_test.is_stale(&self.areas) {
            self.hit_test.invalidate();
        }

        // Indices follow their area across inserts and removals. An area
        // that left the collection gets no leave event: it no longer exists.
        let focused = self.focused_id.and_then(|id| self.areas.position_of(id));
        if focused != self.focused_area {
            log::debug!("Focused area moved from {:?} to {:?}", self.focused_area, focused);
            self.focused_area = focused;
            if focused.is_none() {
                self.focused_id = None;
            }
        }
        let hot = self.hot_id.and_then(|id| self.areas.position_of(id));
        if hot != self.hot_area {
            self.hot_area = hot;
            if hot.is_none() {
                self.hot_id = None;
                self.refresh_pointer_feedback();
            }
        }

        if !changes.is_empty() {
            self.events.push(MapEvent::AreasChanged(changes));
        }
        self.dirty = true;
    }

    /// Map size: the explicit width and height where set, else the image size
    pub fn bounds(&self) -> Size {
        let image = self.image_size.unwrap_or_default();
        Size::new(
            if self.map_width != 0 { self.map_width } else { image.width },
            if self.map_height != 0 { self.map_height } else { image.height },
        )
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    pub fn set_image_size(&mut self, size: Option<Size>) {
        if self.image_size != size {
            self.image_size = size;
            self.on_bounds_changed();
        }
    }

    /// Override the map size; zero means "use the image size" on that axis
    pub fn set_map_size(&mut self, width: i32, height: i32) {
        if (self.map_width, self.map_height) != (width, height) {
            self.map_width = width;
            self.map_height = height;
            self.on_bounds_changed();
        }
    }

    fn on_bounds_changed(&mut self) {
        let bounds = self.bounds();
        self.viewport.clamp_scroll(bounds);
        self.dirty = true;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_client_size(&mut self, client: Size) {
        if self.viewport.client != client {
            self.viewport.client = client;
            self.viewport.clamp_scroll(self.bounds());
            self.dirty = true;
        }
    }

    pub fn set_scroll_position(&mut self, scroll: Point) {
        let before = self.viewport.scroll;
        self.viewport.scroll = scroll;
        self.viewport.clamp_scroll(self.bounds());
        if self.viewport.scroll != before {
            self.dirty = true;
        }
    }

    /// Where the image origin sits in client coordinates
    pub fn image_offset(&self) -> Point {
        self.viewport.image_offset(self.bounds(), self.center_image)
    }

    pub fn center_image(&self) -> bool {
        self.center_image
    }

    pub fn set_center_image(&mut self, center: bool) {
        if self.center_image != center {
            self.center_image = center;
            self.dirty = true;
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.dirty = true;
        }
    }

    pub fn owner_draw(&self) -> bool {
        self.owner_draw
    }

    pub fn set_owner_draw(&mut self, owner_draw: bool) {
        if self.owner_draw != owner_draw {
            self.owner_draw = owner_draw;
            self.dirty = true;
        }
    }

    /// Filter handed to the surface when drawing a disabled map
    pub fn disabled_filter(&self) -> &ColorMatrix {
        &self.disabled_filter
    }

    pub fn set_disabled_filter(&mut self, filter: ColorMatrix) {
        self.disabled_filter = filter;
        self.dirty = true;
    }

    /// Tool tip shown when the pointer is not over an area
    pub fn tool_tip(&self) -> Option<&str> {
        self.tool_tip.as_deref()
    }

    pub fn set_tool_tip(&mut self, tool_tip: Option<&str>) {
        let tool_tip = tool_tip
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        if self.tool_tip == tool_tip {
            return;
        }
        self.tool_tip = tool_tip;
        if self.hot_area.is_none() {
            self.set_shown_tool_tip(self.tool_tip.clone());
        }
    }

    /// Tool tip currently displayed
    pub fn shown_tool_tip(&self) -> Option<&str> {
        self.shown_tool_tip.as_deref()
    }

    pub fn cursor(&self) -> MapCursor {
        self.cursor
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn focused_area(&self) -> Option<usize> {
        self.focused_area.filter(|&i| i < self.areas.len())
    }

    pub fn hot_area(&self) -> Option<usize> {
        self.hot_area.filter(|&i| i < self.areas.len())
    }

    /// The map takes part in tab navigation only while some area is selectable
    pub fn tab_stop(&self) -> bool {
        navigation::has_tab_stop(&self.areas)
    }

    /// Topmost enabled area under `point`, in image coordinates
    pub fn resolve(&mut self, point: Point) -> Option<usize> {
        self.sync();
        let bounds = self.bounds();
        self.hit_test.resolve(&self.areas, bounds, point)
    }

    /// Render state for the area at `index`
    pub fn draw_state(&self, index: usize) -> DrawState {
        let area_enabled = self.areas.get(index).is_some_and(Area::enabled);
        DrawState::for_area(
            self.enabled,
            area_enabled,
            self.has_focus,
            self.focused_area == Some(index),
            self.hot_area == Some(index),
        )
    }

    /// Render state for the container itself
    pub fn container_draw_state(&self) -> DrawState {
        DrawState::for_container(self.enabled, self.has_focus)
    }

    /// Move focus to `area`, optionally asking the host for input focus
    pub fn focus(&mut self, area: Option<usize>, set_focus: bool) {
        self.sync();
        self.apply_focus(area, set_focus);
    }

    /// Focus the first area structurally equal to `area`
    ///
    /// Returns `false` when no such area is in the collection.
    pub fn focus_area(&mut self, area: &Area, set_focus: bool) -> bool {
        self.sync();
        match self.areas.index_of(area) {
            Some(index) => {
                self.apply_focus(Some(index), set_focus);
                true
            }
            None => false,
        }
    }

    /// The host gave the map input focus
    ///
    /// Without a focused area, the first (or, when tabbing backwards, the
    /// last) selectable area in tab order takes focus.
    pub fn got_focus(&mut self, reverse: bool) {
        self.sync();
        self.has_focus = true;
        if self.focused_area.is_none() {
            let area = if reverse {
                navigation::last_selectable(&self.areas)
            } else {
                navigation::first_selectable(&self.areas)
            };
            if area.is_some() {
                self.apply_focus(area, false);
            }
        }
        self.dirty = true;
    }

    /// The host took input focus away; the focused area is remembered
    pub fn lost_focus(&mut self) {
        self.sync();
        self.has_focus = false;
        self.dirty = true;
    }

    pub(super) fn apply_focus(&mut self, area: Option<usize>, set_focus: bool) {
        let prior = self.focused_area;
        let had_focus = self.has_focus;

        if set_focus && !self.has_focus {
            self.has_focus = true;
            self.events.push(MapEvent::FocusRequested);
        }

        self.focused_area = area.filter(|&i| i < self.areas.len());
        self.focused_id = self.id_at(self.focused_area);
        self.ensure_focused_visible();

        if prior != self.focused_area {
            #[cfg(debug_assertions)]
            log::debug!("Focus moved from {:?} to {:?}", prior, self.focused_area);

            if had_focus && let Some(prior) = prior {
                self.raise(prior, AreaEvent::Leave);
            }
            if self.has_focus && let Some(current) = self.focused_area {
                self.raise(current, AreaEvent::Enter);
            }
        }
        self.dirty = true;
    }

    /// Make the area at `index` (or none) the pointer-hot area
    pub(super) fn set_hot_area(&mut self, index: Option<usize>) {
        self.hot_area = index.filter(|&i| i < self.areas.len());
        self.hot_id = self.id_at(self.hot_area);
    }

    fn id_at(&self, index: Option<usize>) -> Option<AreaId> {
        index.and_then(|i| self.areas.get(i)).map(Area::id)
    }

    /// Scroll so the focused area's bounding box is visible
    pub fn ensure_focused_visible(&mut self) {
        let Some(area) = self.focused_area.and_then(|i| self.areas.get(i)) else {
            return;
        };
        let target = area.bounding_box();
        let bounds = self.bounds();
        if self
            .viewport
            .scroll_into_view(target, bounds, self.center_image)
        {
            self.dirty = true;
        }
    }

    /// Queue an area event; disabled areas receive no events
    pub(super) fn raise(&mut self, index: usize, event: AreaEvent) {
        let Some(area) = self.areas.get(index) else {
            return;
        };
        if area.enabled() {
            self.events.push(MapEvent::Area {
                index,
                id: area.id(),
                event,
            });
        }
    }

    pub(super) fn set_cursor(&mut self, cursor: MapCursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.events.push(MapEvent::CursorChanged(cursor));
        }
    }

    pub(super) fn set_shown_tool_tip(&mut self, tool_tip: Option<String>) {
        if self.shown_tool_tip != tool_tip {
            self.shown_tool_tip = tool_tip.clone();
            self.events.push(MapEvent::ToolTipChanged(tool_tip));
        }
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<MapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether anything visible changed since the last `clear_dirty`
    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
