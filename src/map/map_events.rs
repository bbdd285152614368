//! Events raised by an image map

use crate::area::AreaId;
use crate::collection::CollectionChange;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Click or double click on an area
///
/// `position` is in image coordinates, or `None` for keyboard activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub area_index: usize,
    pub position: Option<Point>,
}

/// Pointer press, release or move over an area, in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: Option<MouseButton>,
}

/// Events delivered to a single area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaEvent {
    Click(ClickEvent),
    DoubleClick(ClickEvent),
    MouseDown(PointerEvent),
    MouseUp(PointerEvent),
    MouseEnter,
    MouseLeave,
    MouseHover,
    MouseMove(PointerEvent),
    /// The area gained keyboard focus
    Enter,
    /// The area lost keyboard focus
    Leave,
}

/// Pointer cursor to show over the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCursor {
    /// Not over any area
    #[default]
    Default,
    /// Over an area whose click action is `None`
    Inert,
    /// Over an actionable area
    Hand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// An area-level event; only raised for enabled areas
    Area {
        index: usize,
        id: AreaId,
        event: AreaEvent,
    },
    /// Map-level click, bubbled after the area's own click
    Click(ClickEvent),
    DoubleClick(ClickEvent),
    MouseDown(PointerEvent),
    MouseUp(PointerEvent),
    CursorChanged(MapCursor),
    ToolTipChanged(Option<String>),
    /// The map asks the host to give it input focus
    FocusRequested,
    /// The area collection changed since the map last looked at it
    AreasChanged(Vec<CollectionChange>),
}
