use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app_state::App;
use super::owner_draw::TerminalDrawHandler;
use super::terminal_surface::TerminalSurface;
use crate::geometry::Size;
use crate::map::MapCursor;

const KEY_HINTS: &str = "Tab move · Enter click · Alt+key access · q quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [map_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.map_area = map_area;
        self.map.set_client_size(Size::new(
            i32::from(map_area.width),
            i32::from(map_area.height),
        ));

        let mut surface = TerminalSurface::new(frame.buffer_mut(), map_area, &self.image);
        if let Err(never) = self.map.render(&mut surface, &mut TerminalDrawHandler) {
            match never {}
        }

        self.render_status_line(frame, status_area);

        if self.tooltip_auto_show {
            self.render_tooltip(frame, map_area);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let focused = match self.map.focused_area() {
            Some(index) => self.area_label(index),
            None => "none".to_string(),
        };
        let cursor = match self.map.cursor() {
            MapCursor::Default => "",
            MapCursor::Inert => " [inert]",
            MapCursor::Hand => " [link]",
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" Focus: {}{}", focused, cursor)),
        ];
        if !self.map.enabled() {
            spans.push(Span::styled(" (disabled)", Style::default().fg(Color::DarkGray)));
        }

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(
                format!(" │ {}", warning),
                Style::default().fg(Color::Yellow),
            ));
        } else if let Some(activity) = &self.activity {
            spans.push(Span::styled(
                format!(" │ {}", activity),
                Style::default().fg(Color::Green),
            ));
        } else {
            spans.push(Span::styled(
                format!(" │ {}", KEY_HINTS),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Tool tip box just below and right of the pointer, kept inside the map
    fn render_tooltip(&self, frame: &mut Frame, map_area: Rect) {
        let (Some(text), Some(pointer)) = (self.map.shown_tool_tip(), self.pointer.position) else {
            return;
        };

        let width = (text.chars().count() as u16).saturating_add(4);
        let height = 3;
        if width > map_area.width || height > map_area.height {
            return;
        }

        let x = (map_area.x + pointer.x as u16 + 1).min(map_area.right() - width);
        let y = (map_area.y + pointer.y as u16 + 1).min(map_area.bottom() - height);
        let popup = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(format!(" {} ", text)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            ),
            popup,
        );
    }
}
