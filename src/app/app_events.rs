use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::geometry::Point;
use crate::map::MouseButton;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
/// How long the pointer has to rest before a hover is raised
pub const HOVER_DELAY: Duration = Duration::from_millis(500);
/// Maximum gap between two clicks on one area for a double click
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse, Instant::now());
                }
                Event::Resize(_, _) => self.mark_dirty(),
                Event::FocusLost => self.map.lost_focus(),
                Event::FocusGained => self.map.got_focus(false),
                _ => {}
            }
        } else {
            self.tick(Instant::now());
        }
        self.process_map_events();
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::ALT)
            && let KeyCode::Char(c) = key.code
        {
            self.map.process_mnemonic(c);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Left | KeyCode::Up => {
                self.map.process_arrow(false);
            }
            KeyCode::Right | KeyCode::Down => {
                self.map.process_arrow(true);
            }
            KeyCode::Enter => {
                self.map.process_dialog_char('\r');
            }
            KeyCode::Char(' ') => {
                self.map.process_dialog_char(' ');
            }
            KeyCode::Char('e') => {
                let enabled = self.map.enabled();
                self.map.set_enabled(!enabled);
            }
            KeyCode::Char('o') => {
                let owner_draw = self.map.owner_draw();
                self.map.set_owner_draw(!owner_draw);
            }
            KeyCode::Char('m') => {
                let center = self.map.center_image();
                self.map.set_center_image(!center);
            }
            _ => {}
        }
    }

    /// Tab through the map, leaving and re-entering it at either end
    fn move_focus(&mut self, forward: bool) {
        if self.map.process_tab(forward) {
            return;
        }
        // No other control to move to, so focus wraps back into the map
        self.map.focus(None, false);
        self.map.got_focus(!forward);
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        let Some(client) = self.client_point(mouse.column, mouse.row) else {
            if self.pointer.position.take().is_some() {
                self.map.pointer_exit();
            }
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(client, now);
            }
            MouseEventKind::Down(button) => {
                self.pointer_moved(client, now);
                self.pointer.pressed = self.map.pointer_down(client, map_button(button));
            }
            MouseEventKind::Up(button) => {
                let released = self.map.pointer_up(client, map_button(button));
                let pressed = self.pointer.pressed.take();
                if button == CtMouseButton::Left && released.is_some() && released == pressed {
                    self.synthesise_click(client, now);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(mouse.modifiers, 1),
            MouseEventKind::ScrollUp => self.scroll_by(mouse.modifiers, -1),
            _ => {}
        }
    }

    /// Raise the hover once the pointer has rested long enough
    pub fn tick(&mut self, now: Instant) {
        if self.pointer.hover_sent {
            return;
        }
        if let Some(moved) = self.pointer.last_move
            && now.duration_since(moved) >= HOVER_DELAY
        {
            self.map.pointer_hover();
            self.pointer.hover_sent = true;
        }
    }

    fn pointer_moved(&mut self, client: Point, now: Instant) {
        if self.pointer.position != Some(client) {
            self.pointer.position = Some(client);
            self.pointer.last_move = Some(now);
            self.pointer.hover_sent = false;
            self.map.pointer_move(client);
            self.mark_dirty();
        }
    }

    fn synthesise_click(&mut self, client: Point, now: Instant) {
        let Some(index) = self.map.click(client) else {
            return;
        };
        let double = self.pointer.last_click.is_some_and(|(last, at)| {
            last == index && now.duration_since(at) <= DOUBLE_CLICK_INTERVAL
        });
        if double {
            self.map.double_click(client);
            self.pointer.last_click = None;
        } else {
            self.pointer.last_click = Some((index, now));
        }
    }

    fn scroll_by(&mut self, modifiers: KeyModifiers, step: i32) {
        let scroll = self.map.viewport().scroll;
        let target = if modifiers.contains(KeyModifiers::SHIFT) {
            Point::new(scroll.x + step, scroll.y)
        } else {
            Point::new(scroll.x, scroll.y + step)
        };
        self.map.set_scroll_position(target);
    }

    /// Client coordinates of a terminal cell, if it lies over the map
    fn client_point(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.map_area;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        inside.then(|| Point::new(i32::from(column - area.x), i32::from(row - area.y)))
    }
}

fn map_button(button: CtMouseButton) -> MouseButton {
    match button {
        CtMouseButton::Left => MouseButton::Left,
        CtMouseButton::Right => MouseButton::Right,
        CtMouseButton::Middle => MouseButton::Middle,
    }
}
