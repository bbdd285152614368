use crate::error::CoordinateError;
use crate::geometry::{Point, Rect, Shape, ShapeKind};

const MIN_POLYGON_VALUES: usize = 6;

/// Decode `text` into geometry for `kind`
///
/// An empty (or all-whitespace) string yields the shape's zero-sized default.
/// Corners are not normalized; an inverted rectangle decodes as-is and simply
/// encloses no area.
pub fn decode(kind: ShapeKind, text: &str) -> Result<Shape, CoordinateError> {
    if text.trim().is_empty() {
        return Ok(Shape::empty(kind));
    }

    let tokens: Vec<&str> = text.split(',').filter(|t| !t.is_empty()).collect();

    match kind {
        ShapeKind::Rectangle | ShapeKind::Ellipse => {
            check_arity(kind, &tokens, 4)?;
            let v = parse_all(kind, &tokens)?;
            let rect = Rect::checked_from_corners(v[0], v[1], v[2], v[3]).ok_or_else(|| {
                CoordinateError::Constraint(format!(
                    "{} width and height must fit in 32-bit coordinates",
                    kind
                ))
            })?;
            Ok(if kind == ShapeKind::Rectangle {
                Shape::Rectangle(rect)
            } else {
                Shape::Ellipse(rect)
            })
        }
        ShapeKind::Circle => {
            check_arity(kind, &tokens, 3)?;
            let v = parse_all(kind, &tokens)?;
            Ok(Shape::Circle {
                center: Point::new(v[0], v[1]),
                radius: v[2],
            })
        }
        ShapeKind::Polygon => {
            if tokens.len() < MIN_POLYGON_VALUES {
                return Err(CoordinateError::Constraint(
                    "There must be at least three pairs of polygon coordinates".to_string(),
                ));
            }
            if tokens.len() % 2 != 0 {
                return Err(CoordinateError::Constraint(
                    "The number of polygon coordinates must be a multiple of two".to_string(),
                ));
            }
            let v = parse_all(kind, &tokens)?;
            Ok(Shape::Polygon(
                v.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect(),
            ))
        }
    }
}

/// Encode geometry as `", "`-separated integers
pub fn encode(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle(r) | Shape::Ellipse(r) => {
            format!("{}, {}, {}, {}", r.left(), r.top(), r.right(), r.bottom())
        }
        Shape::Circle { center, radius } => format!("{}, {}, {}", center.x, center.y, radius),
        Shape::Polygon(points) => points
            .iter()
            .map(|p| format!("{}, {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn check_arity(kind: ShapeKind, tokens: &[&str], expected: usize) -> Result<(), CoordinateError> {
    if tokens.len() != expected {
        return Err(CoordinateError::Arity {
            shape: kind,
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn parse_all(kind: ShapeKind, tokens: &[&str]) -> Result<Vec<i32>, CoordinateError> {
    tokens
        .iter()
        .map(|t| {
            t.trim().parse::<i32>().map_err(|_| CoordinateError::Format {
                shape: kind,
                token: t.trim().to_string(),
            })
        })
        .collect()
}
