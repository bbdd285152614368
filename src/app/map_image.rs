//! Terminal stand-in for the map image
//!
//! The terminal has no bitmap to show, so the image is drawn from the areas
//! themselves: one cell per map unit, each area filled with a palette colour
//! and labelled with its tool tip.

use crate::area::Area;
use crate::collection::AreaCollection;
use crate::geometry::{Point, Shape, Size};

const BACKGROUND: [u8; 4] = [28, 28, 36, 255];

const PALETTE: [[u8; 4]; 6] = [
    [46, 134, 193, 255],
    [39, 174, 96, 255],
    [211, 84, 0, 255],
    [142, 68, 173, 255],
    [192, 57, 43, 255],
    [22, 160, 133, 255],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub symbol: char,
    pub rgba: [u8; 4],
}

impl Default for Pixel {
    fn default() -> Self {
        Self {
            symbol: ' ',
            rgba: BACKGROUND,
        }
    }
}

/// Tool tip text laid across one row of an area
#[derive(Debug, Clone)]
struct Label {
    origin: Point,
    symbols: Vec<char>,
}

impl Label {
    fn symbol_at(&self, p: Point) -> Option<char> {
        if p.y != self.origin.y || p.x < self.origin.x {
            return None;
        }
        let column = usize::try_from(i64::from(p.x) - i64::from(self.origin.x)).ok()?;
        self.symbols.get(column).copied()
    }
}

/// Cells are computed on demand, so memory stays proportional to the area
/// count however large the map is.
#[derive(Debug, Clone, Default)]
pub struct MapImage {
    size: Size,
    shapes: Vec<Shape>,
    labels: Vec<Label>,
}

impl MapImage {
    /// Snapshot `areas` as a `size` image, earlier areas on top
    pub fn from_areas(areas: &AreaCollection, size: Size) -> Self {
        Self {
            size: Size::new(size.width.max(0), size.height.max(0)),
            shapes: areas.iter().map(|a| a.shape().clone()).collect(),
            labels: areas
                .iter()
                .enumerate()
                .map(|(index, area)| Self::label(index, area))
                .collect(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn get(&self, p: Point) -> Option<Pixel> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.width || p.y >= self.size.height {
            return None;
        }
        let rgba = self
            .shapes
            .iter()
            .position(|shape| shape.contains(p))
            .map_or(BACKGROUND, |index| PALETTE[index % PALETTE.len()]);
        // The topmost area's text wins where labels overlap
        let symbol = self
            .labels
            .iter()
            .find_map(|label| label.symbol_at(p))
            .unwrap_or(' ');
        Some(Pixel { symbol, rgba })
    }

    /// The tool tip (or the area's number) across the middle row of its
    /// bounding box, cut off where it would leave the shape
    fn label(index: usize, area: &Area) -> Label {
        let text = match area.tool_tip() {
            Some(tip) => tip.to_string(),
            None => format!("#{}", index),
        };
        let bounds = area.bounding_box();
        let origin = Point::new(
            bounds.left().saturating_add(1),
            bounds.top().saturating_add(bounds.height / 2),
        );
        let symbols = text
            .chars()
            .zip(0..)
            .take_while(|&(_, i)| {
                origin
                    .x
                    .checked_add(i)
                    .is_some_and(|x| area.contains_point(Point::new(x, origin.y)))
            })
            .map(|(symbol, _)| symbol)
            .collect();
        Label { origin, symbols }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ShapeKind;

    fn rect(coords: &str) -> Area {
        Area::from_coordinates(ShapeKind::Rectangle, coords).unwrap()
    }

    #[test]
    fn test_areas_are_filled_in_storage_priority() {
        let areas = AreaCollection::from_areas([rect("0, 0, 4, 4"), rect("2, 2, 6, 6")]);
        let image = MapImage::from_areas(&areas, Size::new(8, 8));

        assert_eq!(image.get(Point::new(3, 3)).unwrap().rgba, PALETTE[0]);
        assert_eq!(image.get(Point::new(5, 5)).unwrap().rgba, PALETTE[1]);
        assert_eq!(image.get(Point::new(7, 7)).unwrap().rgba, BACKGROUND);
        assert_eq!(image.get(Point::new(8, 0)), None);
    }

    #[test]
    fn test_label_uses_tool_tip_and_is_clipped_to_shape() {
        let areas = AreaCollection::from_areas([rect("0, 0, 4, 3").with_tool_tip("Kitchen")]);
        let image = MapImage::from_areas(&areas, Size::new(10, 3));

        let row: String = (0..10)
            .map(|x| image.get(Point::new(x, 1)).unwrap().symbol)
            .collect();
        assert_eq!(row, " Kit      ");
    }

    #[test]
    fn test_unlabelled_area_shows_its_number() {
        let areas = AreaCollection::from_areas([rect("0, 0, 1, 1"), rect("0, 2, 5, 5")]);
        let image = MapImage::from_areas(&areas, Size::new(5, 5));

        assert_eq!(image.get(Point::new(1, 3)).unwrap().symbol, '#');
        assert_eq!(image.get(Point::new(2, 3)).unwrap().symbol, '1');
    }

    #[test]
    fn test_huge_map_is_sampled_without_a_pixel_buffer() {
        let areas = AreaCollection::from_areas([
            rect("0, 0, 70000, 40000").with_tool_tip("Estate"),
            rect("69990, 39990, 70000, 40000"),
        ]);
        let image = MapImage::from_areas(&areas, Size::new(70000, 40000));

        assert_eq!(image.size(), Size::new(70000, 40000));
        assert_eq!(image.get(Point::new(1, 20000)).unwrap().symbol, 'E');
        assert_eq!(image.get(Point::new(69995, 39995)).unwrap().rgba, PALETTE[0]);
        assert_eq!(image.get(Point::new(70000, 0)), None);
    }
}
