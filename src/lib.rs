//! Gap Runner - A side-scrolling gap runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `settings`: Per-layout tuning parameters and play-field dimensions
//! - `error`: Configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Field, GameParams, LayoutClass};

/// Game configuration constants
pub mod consts {
    /// Score needed to win a round
    pub const WIN_SCORE: u32 = 5;

    /// Viewport widths at or below this use the compact layout
    pub const COMPACT_WIDTH_THRESHOLD: f32 = 768.0;

    /// Horizontal spawn position of the avatar
    pub const AVATAR_X: f32 = 80.0;
    /// Hitbox shrink applied to each side of the avatar
    pub const HITBOX_INSET: f32 = 10.0;

    /// Fixed obstacle width
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Height of the ground band at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 40.0;
    /// Margin kept between spawned geometry and the field edges
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Points for passing an obstacle
    pub const PASS_POINTS: u32 = 1;
    /// Points for collecting a collectible (either kind)
    pub const COLLECT_POINTS: u32 = 2;

    /// Nominal host cadence (display refresh)
    pub const TICK_RATE_HZ: u32 = 60;
}
