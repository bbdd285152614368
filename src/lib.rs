//! imagemap library - Interactive image map hot-spots
//!
//! Areas are shapes over an image, stored in an ordered collection. The
//! library resolves points to areas, walks them in tab order, tracks focus
//! and pointer state, and negotiates drawing with an owner-draw host. The
//! terminal host in `app` is one such host.

pub mod app;
pub mod area;
pub mod codec;
pub mod collection;
pub mod config;
pub mod document;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod map;
pub mod navigation;

// Re-export commonly used types for convenience
pub use area::{Area, AreaId, ClickAction};
pub use collection::AreaCollection;
pub use config::Config;
pub use document::MapDocument;
pub use error::{CoordinateError, ImageMapError};
pub use geometry::{Point, Shape, ShapeKind, Size};
pub use map::{ImageMap, MapEvent};
