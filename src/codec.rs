//! Coordinate codec
//!
//! Converts between a shape's geometry and the comma-separated integer list
//! used by `coords` attributes and coordinate editors:
//! - Rectangle / Ellipse: `left, top, right, bottom`
//! - Circle: `centerX, centerY, radius`
//! - Polygon: `x1, y1, x2, y2, ...` (at least three points)
//!
//! Numbers are parsed and formatted independent of locale.

mod coordinates;

pub use coordinates::{decode, encode};
