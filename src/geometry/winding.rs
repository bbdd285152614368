//! Non-zero winding point-in-polygon test

use super::Point;

/// Twice the signed area of triangle `a, b, p`
///
/// Positive when `p` is left of the directed edge `a -> b`.
fn is_left(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);
    let (px, py) = (p.x as i64, p.y as i64);
    (bx - ax) * (py - ay) - (px - ax) * (by - ay)
}

/// Winding number of the closed polygon around `p`
pub(super) fn winding_number(points: &[Point], p: Point) -> i32 {
    let mut wn = 0;
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0 {
            wn -= 1;
        }
    }
    wn
}
