use super::map_events::{AreaEvent, ClickEvent, MapEvent};
use super::map_state::ImageMap;
use crate::navigation;

impl ImageMap {
    /// Move focus to the next (or previous) selectable area in tab order
    ///
    /// Returns `false` at either end of the order so the host can move focus
    /// on to its next control.
    pub fn process_tab(&mut self, forward: bool) -> bool {
        self.sync();
        if !self.enabled {
            return false;
        }
        let next = navigation::next_selectable(&self.areas, self.focused_area, forward);
        if next.is_some() {
            self.apply_focus(next, false);
        }
        next.is_some()
    }

    /// Arrow keys walk the tab order like Tab and Shift+Tab
    pub fn process_arrow(&mut self, forward: bool) -> bool {
        self.process_tab(forward)
    }

    /// Enter or Space clicks the focused area
    pub fn process_dialog_char(&mut self, c: char) -> bool {
        self.sync();
        if !self.enabled || !matches!(c, '\r' | '\n' | ' ') {
            return false;
        }
        let Some(index) = self.focused_area() else {
            return false;
        };
        self.click_from_keyboard(index);
        true
    }

    /// Focus and click every selectable area whose access key is `key`
    pub fn process_mnemonic(&mut self, key: char) -> bool {
        self.sync();
        if !self.enabled {
            return false;
        }
        let matches = navigation::access_key_matches(&self.areas, key);
        for &index in &matches {
            self.apply_focus(Some(index), true);
            self.click_from_keyboard(index);
        }
        !matches.is_empty()
    }

    fn click_from_keyboard(&mut self, index: usize) {
        let click = ClickEvent {
            area_index: index,
            position: None,
        };
        self.raise(index, AreaEvent::Click(click));
        self.events.push(MapEvent::Click(click));
        self.dirty = true;
    }
}
