//! Overlap tests between the avatar and the rest of the field
//!
//! The avatar collides through an inset hitbox, 10 units smaller than its
//! sprite on every side. Obstacles and collectibles use their full extents.
//! All overlap checks are strict: touching edges do not count.

use glam::Vec2;

use super::state::{Avatar, Collectible, Obstacle};
use crate::consts::{HITBOX_INSET, OBSTACLE_WIDTH};
use crate::settings::Field;

/// Axis-aligned box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Strict overlap of the horizontal spans only
    #[inline]
    pub fn overlaps_x(&self, min_x: f32, max_x: f32) -> bool {
        self.max.x > min_x && self.min.x < max_x
    }
}

/// The avatar's collision box, shrunk by the inset on every side
pub fn avatar_hitbox(avatar: &Avatar) -> Rect {
    let inset = Vec2::splat(HITBOX_INSET);
    Rect {
        min: avatar.pos + inset,
        max: avatar.pos + avatar.size - inset,
    }
}

/// Does the avatar touch the solid part of an obstacle?
///
/// Horizontally the hitbox must overlap the obstacle's column; vertically
/// it must poke out of the gap band above or below.
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    let hitbox = avatar_hitbox(avatar);
    hitbox.overlaps_x(obstacle.x, obstacle.x + OBSTACLE_WIDTH)
        && (hitbox.min.y < obstacle.top || hitbox.max.y > obstacle.bottom)
}

/// Does the avatar's hitbox overlap a collectible?
pub fn touches_collectible(avatar: &Avatar, collectible: &Collectible) -> bool {
    avatar_hitbox(avatar).intersects(&Rect::new(collectible.pos, collectible.size))
}

/// Has the avatar reached the ground band or the ceiling?
pub fn out_of_bounds(avatar: &Avatar, field: &Field) -> bool {
    avatar.bottom() >= field.ground_y() || avatar.pos.y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::CollectibleKind;

    fn avatar_at(x: f32, y: f32) -> Avatar {
        Avatar {
            pos: Vec2::new(x, y),
            size: Vec2::new(50.0, 50.0),
            vel: 0.0,
        }
    }

    #[test]
    fn test_hitbox_is_inset() {
        let hitbox = avatar_hitbox(&avatar_at(80.0, 200.0));
        assert_eq!(hitbox.min, Vec2::new(90.0, 210.0));
        assert_eq!(hitbox.max, Vec2::new(120.0, 240.0));
    }

    #[test]
    fn test_rect_edges_do_not_touch() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let c = Rect::new(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Hitbox y 210..240, gap 150..300
        let obstacle = Obstacle::new(100.0, 150.0, 150.0);
        assert!(!hits_obstacle(&avatar_at(80.0, 200.0), &obstacle));
    }

    #[test]
    fn test_above_or_below_gap_collides() {
        let obstacle = Obstacle::new(100.0, 150.0, 150.0);
        // Hitbox top at 139 < 150
        assert!(hits_obstacle(&avatar_at(80.0, 129.0), &obstacle));
        // Hitbox bottom at 301 > 300
        assert!(hits_obstacle(&avatar_at(80.0, 261.0), &obstacle));
    }

    #[test]
    fn test_inset_forgives_sprite_overlap() {
        // Sprite top pokes 5 units above the gap but the hitbox doesn't
        let obstacle = Obstacle::new(100.0, 150.0, 150.0);
        assert!(!hits_obstacle(&avatar_at(80.0, 145.0), &obstacle));

        // Sprite right edge (130) is inside the column, hitbox edge (120) isn't
        let obstacle = Obstacle::new(125.0, 0.0, 10.0);
        assert!(!hits_obstacle(&avatar_at(80.0, 200.0), &obstacle));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        let obstacle = Obstacle::new(400.0, 150.0, 150.0);
        assert!(!hits_obstacle(&avatar_at(80.0, 0.0), &obstacle));
        // Column entirely behind the avatar
        let obstacle = Obstacle::new(0.0, 150.0, 150.0);
        assert!(!hits_obstacle(&avatar_at(80.0, 0.0), &obstacle));
    }

    #[test]
    fn test_collectible_overlap() {
        let avatar = avatar_at(80.0, 200.0);
        let coin = |x: f32, y: f32| {
            Collectible::new(Vec2::new(x, y), 30.0, CollectibleKind::Alpha)
        };
        assert!(touches_collectible(&avatar, &coin(100.0, 200.0)));
        // Touches the sprite but not the hitbox
        assert!(!touches_collectible(&avatar, &coin(120.0, 200.0)));
        assert!(!touches_collectible(&avatar, &coin(100.0, 240.0)));
        assert!(!touches_collectible(&avatar, &coin(60.0, 180.0)));
        assert!(touches_collectible(&avatar, &coin(61.0, 181.0)));
    }

    #[test]
    fn test_bounds() {
        let field = Field::new(800.0, 600.0).unwrap();
        assert!(!out_of_bounds(&avatar_at(80.0, 200.0), &field));
        // Bottom at 560 == ground line
        assert!(out_of_bounds(&avatar_at(80.0, 510.0), &field));
        assert!(!out_of_bounds(&avatar_at(80.0, 509.0), &field));
        assert!(out_of_bounds(&avatar_at(80.0, 0.0), &field));
        assert!(out_of_bounds(&avatar_at(80.0, -3.0), &field));
        assert!(!out_of_bounds(&avatar_at(80.0, 0.5), &field));
    }
}
