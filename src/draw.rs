//! Draw negotiation between an image map and its owner-drawn parts
//!
//! The container's draw callback receives a `ContainerDrawContext` whose
//! "draw default focus outline" flag starts `true`: the container draws the
//! outline unless the callback opts out. An owner-drawn area's callback
//! receives an `AreaDrawContext` whose flag starts `false`: the area is
//! expected to render its own focus indication unless it opts in.
//!
//! Render surfaces are opaque to the engine; it only threads them through to
//! the callbacks and to the `Surface` primitives.

mod color_matrix;
mod draw_context;
mod draw_state;

pub use color_matrix::ColorMatrix;
pub use draw_context::{AreaDrawContext, ContainerDrawContext, DrawHandler, NoOwnerDraw, Surface};
pub use draw_state::DrawState;
