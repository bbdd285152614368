//! `Surface` implementation over a ratatui buffer
//!
//! One map unit is one terminal cell. `area` is the client region of the
//! map inside the frame; nothing is drawn outside it.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Modifier, Style};

use super::map_image::MapImage;
use crate::draw::{ColorMatrix, Surface};
use crate::geometry::{Point, Rect, Shape, Size};

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: CellRect,
    image: &'a MapImage,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: CellRect, image: &'a MapImage) -> Self {
        Self { buf, area, image }
    }

    /// Client region size in cells
    pub fn client_size(&self) -> (i32, i32) {
        (i32::from(self.area.width), i32::from(self.area.height))
    }

    /// Restyle every cell of `shape`, keeping the symbols already drawn
    pub fn fill_shape(&mut self, shape: &Shape, offset: Point, style: Style) {
        let (columns, rows) = self.visible(shape.bounding_box(), offset);
        for y in rows {
            for x in columns.clone() {
                let p = Point::new(x, y);
                if shape.contains(p) {
                    self.restyle(p.offset(offset), style);
                }
            }
        }
    }

    /// Write `text` starting at map point `at`, clipped to the client region
    pub fn put_str(&mut self, at: Point, offset: Point, text: &str, style: Style) {
        for (i, symbol) in text.chars().enumerate() {
            let client = Point::new(at.x + i as i32, at.y).offset(offset);
            if let Some(cell) = self.cell_mut(client) {
                cell.set_char(symbol).set_style(style);
            }
        }
    }

    /// Map columns and rows of `bounds` that land inside the client region
    fn visible(&self, bounds: Rect, offset: Point) -> (Range<i32>, Range<i32>) {
        let (width, height) = self.client_size();
        let columns = bounds.left().max(0i32.saturating_sub(offset.x))
            ..bounds.right().min(width.saturating_sub(offset.x));
        let rows = bounds.top().max(0i32.saturating_sub(offset.y))
            ..bounds.bottom().min(height.saturating_sub(offset.y));
        (columns, rows)
    }

    fn restyle(&mut self, client: Point, style: Style) {
        if let Some(cell) = self.cell_mut(client) {
            cell.set_style(style);
        }
    }

    fn cell_mut(&mut self, client: Point) -> Option<&mut ratatui::buffer::Cell> {
        if client.x < 0
            || client.y < 0
            || client.x >= i32::from(self.area.width)
            || client.y >= i32::from(self.area.height)
        {
            return None;
        }
        let x = self.area.x + client.x as u16;
        let y = self.area.y + client.y as u16;
        self.buf.cell_mut((x, y))
    }
}

fn to_color(rgba: [u8; 4]) -> Color {
    Color::Rgb(rgba[0], rgba[1], rgba[2])
}

impl Surface for TerminalSurface<'_> {
    fn draw_image(&mut self, offset: Point, size: Size, filter: Option<&ColorMatrix>) {
        let (columns, rows) = self.visible(Rect::new(0, 0, size.width, size.height), offset);
        for y in rows {
            for x in columns.clone() {
                let pixel = self.image.get(Point::new(x, y)).unwrap_or_default();
                let rgba = match filter {
                    Some(matrix) => matrix.apply(pixel.rgba),
                    None => pixel.rgba,
                };
                let style = Style::default().bg(to_color(rgba)).fg(Color::White);
                if let Some(cell) = self.cell_mut(Point::new(x, y).offset(offset)) {
                    cell.set_char(pixel.symbol).set_style(style);
                }
            }
        }
    }

    /// Highlight the cells on the edge of the shape
    fn draw_focus_outline(&mut self, shape: &Shape, offset: Point) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let (columns, rows) = self.visible(shape.bounding_box(), offset);
        for y in rows {
            for x in columns.clone() {
                let p = Point::new(x, y);
                let edge = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .iter()
                    .any(|&(dx, dy)| !shape.contains(Point::new(x + dx, y + dy)));
                if shape.contains(p) && edge {
                    self.restyle(p.offset(offset), style);
                }
            }
        }
    }
}
