//! Game state and core simulation types
//!
//! `World` is the entity store (avatar + ordered obstacle/collectible lists),
//! `GameState` tracks status, score and the frame counter. Both are owned by
//! the simulation loop and only mutated from inside a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Field, GameParams};

/// Round status (exactly one active at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Pre-start or post-reset, waiting for input
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Hit an obstacle or the field boundary
    Over,
    /// Reached the win score
    Won,
}

impl GameStatus {
    /// Over and Won only leave via an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Over | GameStatus::Won)
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
}

impl Avatar {
    /// Fresh avatar a third of the way down the field
    pub fn spawn(field: &Field, params: &GameParams) -> Self {
        Self {
            pos: Vec2::new(AVATAR_X, field.height / 3.0),
            size: Vec2::new(params.face_width, params.face_height),
            vel: 0.0,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Sprite rotation in radians, nose up while rising
    pub fn tilt(&self) -> f32 {
        (self.vel * 0.05).clamp(-0.5, 0.5)
    }
}

/// A vertical barrier with a passable gap band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Assigned by the store on insert
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Top of the gap
    pub top: f32,
    /// Bottom of the gap
    pub bottom: f32,
    /// Scored already
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, top: f32, gap: f32) -> Self {
        Self {
            id: 0,
            x,
            top,
            bottom: top + gap,
            passed: false,
        }
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    pub fn gap_center(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}

/// Collectible category; both score the same, the host picks cues by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Alpha,
    Beta,
}

/// A bonus-scoring item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Assigned by the store on insert
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: CollectibleKind,
    /// Stays in the list (drawn as absent) until it scrolls off
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2, edge: f32, kind: CollectibleKind) -> Self {
        Self {
            id: 0,
            pos,
            size: Vec2::splat(edge),
            kind,
            collected: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Start,
    Flap,
    Restart,
}

/// Events for the audio/visual layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Round began
    Started,
    /// Impulse applied
    Flap,
    /// Score changed
    Scored { points: u32, total: u32 },
    /// A collectible was picked up
    Collected { kind: CollectibleKind },
    /// Round lost
    Collision,
    /// Round won
    Won { score: u32 },
    /// Back to Idle
    Reset,
}

/// Score, frame counter and status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameState {
    pub score: u32,
    /// Ticks spent running this round
    pub frame: u64,
    pub status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}

/// Entity store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub avatar: Avatar,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
    /// Oldest first
    pub collectibles: Vec<Collectible>,
    next_id: u32,
}

impl World {
    pub fn new(field: &Field, params: &GameParams) -> Self {
        Self {
            avatar: Avatar::spawn(field, params),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            next_id: 1,
        }
    }

    /// Clear all entities and respawn the avatar
    pub fn reset(&mut self, field: &Field, params: &GameParams) {
        *self = Self::new(field, params);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_obstacle(&mut self, mut obstacle: Obstacle) -> u32 {
        obstacle.id = self.next_entity_id();
        self.obstacles.push(obstacle);
        obstacle.id
    }

    pub fn add_collectible(&mut self, mut collectible: Collectible) -> u32 {
        collectible.id = self.next_entity_id();
        self.collectibles.push(collectible);
        collectible.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_avatar_spawn() {
        let params = GameParams::default();
        let avatar = Avatar::spawn(&field(), &params);
        assert_eq!(avatar.pos, Vec2::new(AVATAR_X, 200.0));
        assert_eq!(avatar.size, Vec2::new(50.0, 50.0));
        assert_eq!(avatar.vel, 0.0);
        assert_eq!(avatar.bottom(), 250.0);
    }

    #[test]
    fn test_avatar_tilt_clamped() {
        let mut avatar = Avatar::spawn(&field(), &GameParams::default());
        avatar.vel = -8.0;
        assert!((avatar.tilt() + 0.4).abs() < 1e-6);
        avatar.vel = 30.0;
        assert_eq!(avatar.tilt(), 0.5);
        avatar.vel = -30.0;
        assert_eq!(avatar.tilt(), -0.5);
    }

    #[test]
    fn test_obstacle_geometry() {
        let obstacle = Obstacle::new(100.0, 120.0, 150.0);
        assert_eq!(obstacle.bottom, 270.0);
        assert_eq!(obstacle.right(), 180.0);
        assert_eq!(obstacle.gap_center(), 195.0);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_world_assigns_ids_in_order() {
        let mut world = World::new(&field(), &GameParams::default());
        let a = world.add_obstacle(Obstacle::new(800.0, 100.0, 150.0));
        let b = world.add_collectible(Collectible::new(
            Vec2::new(800.0, 300.0),
            30.0,
            CollectibleKind::Beta,
        ));
        let c = world.add_obstacle(Obstacle::new(900.0, 100.0, 150.0));
        assert!(a < b && b < c);
        assert_eq!(world.obstacles[0].id, a);
        assert_eq!(world.obstacles[1].id, c);
        assert_eq!(world.collectibles[0].id, b);
    }

    #[test]
    fn test_world_reset_clears_entities() {
        let field = field();
        let params = GameParams::default();
        let mut world = World::new(&field, &params);
        world.add_obstacle(Obstacle::new(800.0, 100.0, 150.0));
        world.avatar.vel = 5.0;
        world.avatar.pos.y = 17.0;

        world.reset(&field, &params);
        assert_eq!(world, World::new(&field, &params));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(GameStatus::Over.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::Idle.is_terminal());
        assert!(!GameStatus::Running.is_terminal());
    }
}
