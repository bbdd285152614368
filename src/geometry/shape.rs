//! Hot-spot shapes

use std::fmt;

use serde::Deserialize;

use super::winding::winding_number;
use super::{Point, Rect};

/// The shape tag of an area, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[serde(alias = "rect")]
    Rectangle,
    Circle,
    Ellipse,
    #[serde(alias = "poly")]
    Polygon,
}

impl ShapeKind {
    /// Lower-case name as used by `shape` attributes of markup hosts
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "poly",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Polygon => "Polygon",
        };
        f.write_str(name)
    }
}

/// Geometry of a single hot-spot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Rectangle(Rect),
    Circle { center: Point, radius: i32 },
    Ellipse(Rect),
    Polygon(Vec<Point>),
}

impl Shape {
    /// Zero-sized default for a shape kind (what an empty coordinate string means)
    pub fn empty(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Shape::Rectangle(Rect::default()),
            ShapeKind::Circle => Shape::Circle {
                center: Point::default(),
                radius: 0,
            },
            ShapeKind::Ellipse => Shape::Ellipse(Rect::default()),
            ShapeKind::Polygon => Shape::Polygon(Vec::new()),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// True when the shape encloses no area and can never be hit
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Rectangle(r) | Shape::Ellipse(r) => r.is_empty(),
            Shape::Circle { radius, .. } => *radius <= 0,
            Shape::Polygon(points) => points.len() < 3,
        }
    }

    /// True when every defining value is zero, the "not yet drawn" convention
    pub fn is_unset(&self) -> bool {
        match self {
            Shape::Rectangle(r) | Shape::Ellipse(r) => *r == Rect::default(),
            Shape::Circle { center, radius } => *center == Point::default() && *radius == 0,
            Shape::Polygon(points) => points.is_empty(),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }

        match self {
            Shape::Rectangle(r) => r.contains(p),
            Shape::Circle { center, radius } => {
                let dx = (p.x as i64) - (center.x as i64);
                let dy = (p.y as i64) - (center.y as i64);
                let r = *radius as i64;
                dx * dx + dy * dy <= r * r
            }
            Shape::Ellipse(r) => ellipse_contains(r, p),
            Shape::Polygon(points) => winding_number(points, p) != 0,
        }
    }

    /// Min/max extent of the shape's defining points
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Rectangle(r) | Shape::Ellipse(r) => *r,
            Shape::Circle { center, radius } => Rect::new(
                center.x.saturating_sub(*radius),
                center.y.saturating_sub(*radius),
                radius.saturating_mul(2),
                radius.saturating_mul(2),
            ),
            Shape::Polygon(points) => {
                let Some(first) = points.first() else {
                    return Rect::default();
                };
                let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
                for p in &points[1..] {
                    left = left.min(p.x);
                    top = top.min(p.y);
                    right = right.max(p.x);
                    bottom = bottom.max(p.y);
                }
                Rect::from_corners(left, top, right, bottom)
            }
        }
    }
}

/// Inside-ellipse test on doubled coordinates so the centre stays integral
///
/// `(2px - (2x + w))^2 * h^2 + (2py - (2y + h))^2 * w^2 <= w^2 * h^2`
fn ellipse_contains(r: &Rect, p: Point) -> bool {
    let w = r.width as i128;
    let h = r.height as i128;
    let dx = 2 * (p.x as i128) - (2 * (r.x as i128) + w);
    let dy = 2 * (p.y as i128) - (2 * (r.y as i128) + h);
    dx * dx * h * h + dy * dy * w * w <= w * w * h * h
}
