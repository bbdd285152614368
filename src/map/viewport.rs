use crate::geometry::{Point, Rect, Size};

/// Visible client region of the map and its scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub client: Size,
    pub scroll: Point,
}

impl Viewport {
    pub fn new(client: Size) -> Self {
        Self {
            client,
            scroll: Point::default(),
        }
    }

    /// Offset of the image origin within the client region
    ///
    /// A centred image that fits along an axis is centred on that axis and
    /// ignores the scroll position; otherwise the offset is the negated scroll.
    pub fn image_offset(&self, bounds: Size, center: bool) -> Point {
        let axis = |client: i32, extent: i32, scroll: i32| {
            if center && extent <= client {
                (client - extent) / 2
            } else {
                -scroll
            }
        };
        Point::new(
            axis(self.client.width, bounds.width, self.scroll.x),
            axis(self.client.height, bounds.height, self.scroll.y),
        )
    }

    /// Clamp `scroll` so the viewport stays within `bounds`
    pub fn clamp_scroll(&mut self, bounds: Size) {
        let max_x = (bounds.width - self.client.width).max(0);
        let max_y = (bounds.height - self.client.height).max(0);
        self.scroll = Point::new(self.scroll.x.clamp(0, max_x), self.scroll.y.clamp(0, max_y));
    }

    /// Scroll the minimum distance needed to bring `target` into view
    ///
    /// `target` is in image coordinates. Returns whether the scroll moved.
    pub fn scroll_into_view(&mut self, target: Rect, bounds: Size, center: bool) -> bool {
        if self.client.is_empty() {
            return false;
        }

        let mut target = target;
        if center && bounds.width < self.client.width {
            target.x += (self.client.width - bounds.width) / 2;
        }
        if center && bounds.height < self.client.height {
            target.y += (self.client.height - bounds.height) / 2;
        }

        let before = self.scroll;
        let mut scroll = self.scroll;
        if target.left() < scroll.x {
            scroll.x = target.left();
        }
        if target.top() < scroll.y {
            scroll.y = target.top();
        }
        if target.right() > scroll.x + self.client.width {
            scroll.x = target.right() - self.client.width;
        }
        if target.bottom() > scroll.y + self.client.height {
            scroll.y = target.bottom() - self.client.height;
        }

        self.scroll = scroll;
        self.clamp_scroll(bounds);
        self.scroll != before
    }
}
