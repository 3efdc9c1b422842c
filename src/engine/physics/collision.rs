// Hitbox overlap tests on parry2d bounding boxes

use crate::core::math::Rect;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::Point;

fn to_aabb(rect: &Rect) -> Aabb {
    let max = rect.max();
    Aabb::new(Point::new(rect.min.x, rect.min.y), Point::new(max.x, max.y))
}

/// Test whether an attacker's hitbox touches a defender's body box.
///
/// Bounds are inclusive on both axes, so rectangles sharing an edge overlap.
pub fn overlaps(attack_box: &Rect, body_box: &Rect) -> bool {
    to_aabb(attack_box).intersects(&to_aabb(body_box))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x, not on y
        let b = Rect::new(2.0, 10.5, 4.0, 4.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_hitbox_reaching_left() {
        // Player two's hitbox extends left of its body
        let attack = Rect::new(750.0, 290.0, 300.0, 80.0);
        let body = Rect::new(900.0, 330.0, 45.0, 100.0);
        assert!(overlaps(&attack, &body));
    }
}
