use std::convert::Infallible;

use super::{ColorMatrix, DrawState};
use crate::area::Area;
use crate::geometry::{Point, Shape, Size};

/// Native drawing primitives supplied by the host
pub trait Surface {
    /// Draw the map image at `offset` scaled to `size`
    ///
    /// `filter` is set when the map is disabled.
    fn draw_image(&mut self, offset: Point, size: Size, filter: Option<&ColorMatrix>);

    /// Draw the default focus outline for `shape`, translated by `offset`
    fn draw_focus_outline(&mut self, shape: &Shape, offset: Point);
}

/// Payload of the container-level draw callback
///
/// `draw_focus` starts `true`: the container draws the focus outline around
/// a focused, non-owner-drawn area unless the callback clears it.
pub struct ContainerDrawContext<'a, S: ?Sized> {
    surface: &'a mut S,
    state: DrawState,
    offset: Point,
    draw_focus: bool,
}

impl<'a, S: ?Sized> ContainerDrawContext<'a, S> {
    pub fn new(surface: &'a mut S, state: DrawState, offset: Point) -> Self {
        Self {
            surface,
            state,
            offset,
            draw_focus: true,
        }
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn draw_focus(&self) -> bool {
        self.draw_focus
    }

    pub fn set_draw_focus(&mut self, draw_focus: bool) {
        self.draw_focus = draw_focus;
    }
}

/// Payload of an owner-drawn area's draw callback
///
/// `draw_focus` starts `false`: the area renders its own focus indication
/// unless the callback asks the container to draw the default outline.
pub struct AreaDrawContext<'a, S: ?Sized> {
    surface: &'a mut S,
    index: usize,
    state: DrawState,
    offset: Point,
    draw_focus: bool,
}

impl<'a, S: ?Sized> AreaDrawContext<'a, S> {
    pub fn new(surface: &'a mut S, index: usize, state: DrawState, offset: Point) -> Self {
        Self {
            surface,
            index,
            state,
            offset,
            draw_focus: false,
        }
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Storage index of the area being drawn
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn draw_focus(&self) -> bool {
        self.draw_focus
    }

    pub fn set_draw_focus(&mut self, draw_focus: bool) {
        self.draw_focus = draw_focus;
    }
}

/// Owner-draw callbacks
///
/// Errors are not masked: the first one aborts the frame and is returned
/// from `ImageMap::render`.
pub trait DrawHandler<S: ?Sized> {
    type Error;

    /// Called when the map itself is owner drawn
    fn draw_map(&mut self, _ctx: &mut ContainerDrawContext<'_, S>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every owner-drawn area, in storage order
    fn draw_area(
        &mut self,
        _area: &Area,
        _ctx: &mut AreaDrawContext<'_, S>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Handler for maps with no owner-drawn parts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOwnerDraw;

impl<S: ?Sized> DrawHandler<S> for NoOwnerDraw {
    type Error = Infallible;
}
