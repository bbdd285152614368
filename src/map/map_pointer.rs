use super::map_events::{AreaEvent, ClickEvent, MapCursor, MapEvent, MouseButton, PointerEvent};
use super::map_state::ImageMap;
use crate::area::ClickAction;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy)]
enum Press {
    Down(MouseButton),
    Up(MouseButton),
    Click,
    DoubleClick,
}

impl ImageMap {
    /// Pointer moved to `client` (client coordinates)
    ///
    /// Tracks the hot area, raising leave/enter on change and a move event
    /// on the area under the pointer.
    pub fn pointer_move(&mut self, client: Point) -> Option<usize> {
        self.sync();
        if !self.enabled {
            return None;
        }
        let point = client.relative_to(self.image_offset());
        let area = self.resolve(point);

        if area != self.hot_area {
            if let Some(old) = self.hot_area {
                self.raise(old, AreaEvent::MouseLeave);
            }
            self.set_hot_area(area);
            self.refresh_pointer_feedback();
            if let Some(new) = area {
                self.raise(new, AreaEvent::MouseEnter);
            }
            self.dirty = true;
        }

        if let Some(index) = area {
            self.raise(
                index,
                AreaEvent::MouseMove(PointerEvent {
                    position: point,
                    button: None,
                }),
            );
        }
        area
    }

    /// Pointer rested over the map
    pub fn pointer_hover(&mut self) {
        self.sync();
        if let Some(index) = self.hot_area {
            self.raise(index, AreaEvent::MouseHover);
        }
    }

    /// Pointer left the map
    pub fn pointer_exit(&mut self) {
        self.sync();
        if let Some(old) = self.hot_area {
            self.raise(old, AreaEvent::MouseLeave);
            self.set_hot_area(None);
            self.refresh_pointer_feedback();
            self.dirty = true;
        }
    }

    pub fn pointer_down(&mut self, client: Point, button: MouseButton) -> Option<usize> {
        self.press(client, Press::Down(button))
    }

    pub fn pointer_up(&mut self, client: Point, button: MouseButton) -> Option<usize> {
        self.press(client, Press::Up(button))
    }

    pub fn click(&mut self, client: Point) -> Option<usize> {
        self.press(client, Press::Click)
    }

    pub fn double_click(&mut self, client: Point) -> Option<usize> {
        self.press(client, Press::DoubleClick)
    }

    /// Hit-test a press and, for areas that fire events, focus the area and
    /// raise the area event followed by the map-level one
    fn press(&mut self, client: Point, press: Press) -> Option<usize> {
        self.sync();
        if !self.enabled {
            return None;
        }
        let point = client.relative_to(self.image_offset());
        let index = self.resolve(point)?;
        let action = self.areas.get(index)?.action();
        if action != ClickAction::FireEvent {
            return None;
        }

        self.apply_focus(Some(index), true);

        let click = ClickEvent {
            area_index: index,
            position: Some(point),
        };
        let pointer = |button| PointerEvent {
            position: point,
            button: Some(button),
        };
        let (area_event, map_event) = match press {
            Press::Down(button) => (
                AreaEvent::MouseDown(pointer(button)),
                MapEvent::MouseDown(pointer(button)),
            ),
            Press::Up(button) => (
                AreaEvent::MouseUp(pointer(button)),
                MapEvent::MouseUp(pointer(button)),
            ),
            Press::Click => (AreaEvent::Click(click), MapEvent::Click(click)),
            Press::DoubleClick => (AreaEvent::DoubleClick(click), MapEvent::DoubleClick(click)),
        };
        self.raise(index, area_event);
        self.events.push(map_event);
        self.dirty = true;
        Some(index)
    }

    /// Cursor and tool tip for the current hot area
    pub(super) fn refresh_pointer_feedback(&mut self) {
        let (cursor, tool_tip) = match self.hot_area.and_then(|i| self.areas.get(i)) {
            Some(area) => {
                let cursor = if area.action().is_actionable() {
                    MapCursor::Hand
                } else {
                    MapCursor::Inert
                };
                let tool_tip = area.tool_tip().or(self.tool_tip()).map(str::to_string);
                (cursor, tool_tip)
            }
            None => (MapCursor::Default, self.tool_tip().map(str::to_string)),
        };
        self.set_cursor(cursor);
        self.set_shown_tool_tip(tool_tip);
    }
}
