//! Owner-draw callbacks for the terminal host

use std::convert::Infallible;

use ratatui::style::{Color, Modifier, Style};

use super::terminal_surface::TerminalSurface;
use crate::area::Area;
use crate::draw::{AreaDrawContext, ContainerDrawContext, DrawHandler, DrawState};
use crate::geometry::Point;

/// Draws owner-drawn maps as a dotted grid and owner-drawn areas as
/// shaded shapes whose style follows their draw state
#[derive(Debug, Default)]
pub struct TerminalDrawHandler;

fn area_style(state: DrawState) -> Style {
    match state {
        DrawState::Normal => Style::default().bg(Color::DarkGray).fg(Color::White),
        DrawState::Disabled => Style::default()
            .bg(Color::Black)
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        DrawState::Focus => Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        DrawState::HotLight => Style::default().bg(Color::Gray).fg(Color::Black),
    }
}

impl<'a> DrawHandler<TerminalSurface<'a>> for TerminalDrawHandler {
    type Error = Infallible;

    fn draw_map(
        &mut self,
        ctx: &mut ContainerDrawContext<'_, TerminalSurface<'a>>,
    ) -> Result<(), Infallible> {
        let style = match ctx.state() {
            DrawState::Disabled => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::Gray),
        };
        let offset = ctx.offset();
        let (width, height) = ctx.surface().client_size();
        for y in 0..height {
            let row: String = (0..width)
                .map(|x| if (x + y) % 4 == 0 { '·' } else { ' ' })
                .collect();
            // The grid covers the client region, not just the map
            ctx.surface()
                .put_str(Point::new(-offset.x, y - offset.y), offset, &row, style);
        }
        Ok(())
    }

    fn draw_area(
        &mut self,
        area: &Area,
        ctx: &mut AreaDrawContext<'_, TerminalSurface<'a>>,
    ) -> Result<(), Infallible> {
        let style = area_style(ctx.state());
        let offset = ctx.offset();
        ctx.surface().fill_shape(area.shape(), offset, style);
        Ok(())
    }
}
