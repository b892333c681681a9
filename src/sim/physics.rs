//! Kinematics, scrolling and per-tick collision sweep
//!
//! `advance` moves everything one step and reports what happened as
//! `PhysicsEvent`s. It never touches score or status; the rules module
//! decides what the events mean.

use serde::{Deserialize, Serialize};

use super::collision::{hits_obstacle, out_of_bounds, touches_collectible};
use super::state::{Avatar, Collectible, CollectibleKind, Obstacle};
use crate::consts::{COLLECT_POINTS, PASS_POINTS};
use crate::settings::{Field, GameParams};

/// Raw outcome of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicsEvent {
    /// Avatar cleared an obstacle
    Passed { id: u32 },
    /// Avatar picked up a collectible
    Collected { id: u32, kind: CollectibleKind },
    /// Avatar hit the solid part of an obstacle
    ObstacleHit { id: u32 },
    /// Avatar reached the ground band or the ceiling
    BoundaryHit,
}

impl PhysicsEvent {
    /// Points this event is worth
    pub fn points(&self) -> u32 {
        match self {
            PhysicsEvent::Passed { .. } => PASS_POINTS,
            PhysicsEvent::Collected { .. } => COLLECT_POINTS,
            PhysicsEvent::ObstacleHit { .. } | PhysicsEvent::BoundaryHit => 0,
        }
    }

    /// Ends the round
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PhysicsEvent::ObstacleHit { .. } | PhysicsEvent::BoundaryHit
        )
    }
}

/// One explicit Euler step under constant gravity
#[inline]
pub fn integrate(avatar: &mut Avatar, params: &GameParams) {
    avatar.vel += params.gravity;
    avatar.pos.y += avatar.vel;
}

/// Flip `passed` once the obstacle's trailing edge is left of the avatar
///
/// Returns the event only on the transition, so it fires once per obstacle.
pub fn pass_event(obstacle: &mut Obstacle, avatar: &Avatar) -> Option<PhysicsEvent> {
    if obstacle.passed || obstacle.right() >= avatar.pos.x {
        return None;
    }
    obstacle.passed = true;
    Some(PhysicsEvent::Passed { id: obstacle.id })
}

/// Flip `collected` on first overlap with the avatar's hitbox
pub fn collect_event(collectible: &mut Collectible, avatar: &Avatar) -> Option<PhysicsEvent> {
    if collectible.collected || !touches_collectible(avatar, collectible) {
        return None;
    }
    collectible.collected = true;
    Some(PhysicsEvent::Collected {
        id: collectible.id,
        kind: collectible.kind,
    })
}

/// Drop entities whose trailing edge has scrolled past the left boundary
pub fn prune(obstacles: &mut Vec<Obstacle>, collectibles: &mut Vec<Collectible>) {
    obstacles.retain(|o| o.right() > 0.0);
    // Collected ones linger (drawn as absent) until they scroll off too
    collectibles.retain(|c| c.right() > 0.0);
}

/// Advance avatar and entities by one tick and collect events
///
/// Event order: obstacle hits and passes (oldest obstacle first), then
/// pickups, then the boundary check.
pub fn advance(
    avatar: &mut Avatar,
    obstacles: &mut Vec<Obstacle>,
    collectibles: &mut Vec<Collectible>,
    field: &Field,
    params: &GameParams,
) -> Vec<PhysicsEvent> {
    let mut events = Vec::new();

    integrate(avatar, params);

    for obstacle in obstacles.iter_mut() {
        obstacle.x -= params.scroll_speed;

        if hits_obstacle(avatar, obstacle) {
            events.push(PhysicsEvent::ObstacleHit { id: obstacle.id });
        }
        events.extend(pass_event(obstacle, avatar));
    }

    for collectible in collectibles.iter_mut() {
        collectible.pos.x -= params.scroll_speed;
        events.extend(collect_event(collectible, avatar));
    }

    prune(obstacles, collectibles);

    if out_of_bounds(avatar, field) {
        events.push(PhysicsEvent::BoundaryHit);
    }

    events
}
