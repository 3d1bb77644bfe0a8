// Polygon collision detection via even-odd ray casting.

use crate::domain::state::Vec2;

/// Even-odd point-in-polygon test, scanning edges in order with the last
/// edge wrapping back to the first vertex.
///
/// Two quirks of this variant are kept as-is:
/// - A vertical edge (`p1.x == p2.x`) toggles membership unconditionally
///   when the point is in its y-range.
/// - A horizontal edge with differing x reuses the intersection abscissa
///   computed for the previous non-horizontal edge.
/// Points exactly on a vertex or edge fall wherever the parity rule puts
/// them; callers should not rely on boundary points being "inside".
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut p1 = polygon[0];
    let mut x_intersect = 0.0_f32;
    for i in 1..=n {
        let p2 = polygon[i % n];
        if point.y > p1.y.min(p2.y) && point.y <= p1.y.max(p2.y) && point.x <= p1.x.max(p2.x) {
            if p1.y != p2.y {
                x_intersect = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            }
            if p1.x == p2.x || point.x <= x_intersect {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

/// True if any corner of the subject polygon lies inside the target.
///
/// One-directional containment only: the target's corners are never tested
/// against the subject, and edge crossings without corner penetration are
/// not detected. A small polygon fully engulfed by the subject is missed.
/// Acceptable here because the obstacles are larger than the vehicle is wide.
pub fn any_corner_inside(subject: &[Vec2], target: &[Vec2]) -> bool {
    subject.iter().any(|&c| point_in_polygon(c, target))
}

/// Collision verdict for the vehicle against all static obstacles.
/// Short-circuits on the first hit.
pub fn detect(vehicle_corners: &[Vec2; 4], obstacles: &[[Vec2; 4]]) -> bool {
    obstacles
        .iter()
        .any(|o| any_corner_inside(vehicle_corners, o))
}
