//! Image map container
//!
//! `ImageMap` owns the area collection and the interaction state derived
//! from it: the focused area, the hot (pointer) area, cursor, tool tip,
//! viewport and the owner-draw negotiation. Input comes in through the
//! pointer and keyboard entry points; everything that happened as a result
//! is queued as `MapEvent`s for the host to drain.

mod map_events;
mod map_keyboard;
mod map_pointer;
mod map_render;
mod map_state;
mod viewport;

pub use map_events::{AreaEvent, ClickEvent, MapCursor, MapEvent, MouseButton, PointerEvent};
pub use map_state::ImageMap;
pub use viewport::Viewport;
