//! Read-only view of a tick for the renderer

use serde::{Deserialize, Serialize};

use super::state::{Avatar, Collectible, GameState, GameStatus, Obstacle, World};
use crate::settings::{Field, GameParams};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: Field,
    pub status: GameStatus,
    pub score: u32,
    pub win_score: u32,
    pub frame: u64,
    pub avatar: Avatar,
    /// Sprite rotation (radians)
    pub avatar_tilt: f32,
    pub obstacles: Vec<Obstacle>,
    /// Includes collected items; skip those when drawing
    pub collectibles: Vec<Collectible>,
    /// Shared vertical float offset for collectibles
    pub collectible_bob: f32,
    /// Top of the ground band
    pub ground_y: f32,
}

impl Snapshot {
    pub fn capture(game: &GameState, world: &World, field: &Field, params: &GameParams) -> Self {
        Self {
            field: *field,
            status: game.status,
            score: game.score,
            win_score: params.win_score,
            frame: game.frame,
            avatar: world.avatar,
            avatar_tilt: world.avatar.tilt(),
            obstacles: world.obstacles.clone(),
            collectibles: world.collectibles.clone(),
            collectible_bob: bob_offset(game.frame),
            ground_y: field.ground_y(),
        }
    }

    /// Collectibles still on offer
    pub fn visible_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| !c.collected)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Gentle sine bob, 3 units peak
pub fn bob_offset(frame: u64) -> f32 {
    (frame as f32 * 0.1).sin() * 3.0
}
