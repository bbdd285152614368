mod app_events;
mod app_render;
mod app_state;
mod map_image;
mod owner_draw;
mod terminal_surface;




#[cfg(test)]
mod test_helpers;

// Re-export public types
pub use app_events::{DOUBLE_CLICK_INTERVAL, HOVER_DELAY};
pub use app_state::{App, PointerTracker};
pub use map_image::{MapImage, Pixel};
pub use owner_draw::TerminalDrawHandler;
pub use terminal_surface::TerminalSurface;
