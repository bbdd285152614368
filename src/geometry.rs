//! Geometry module for image map hot-spots
//!
//! Integer points and rectangles in image coordinates, and the closed `Shape`
//! variant every engine switches over. Containment rules:
//! - rectangles are half-open (`left <= x < right`, `top <= y < bottom`)
//! - circles use squared distance against the squared radius
//! - ellipses use the inside-ellipse inequality on the bounding rectangle
//! - polygons use the non-zero winding rule

mod primitives;
mod shape;
mod winding;

pub use primitives::{Point, Rect, Size};
pub use shape::{Shape, ShapeKind};
