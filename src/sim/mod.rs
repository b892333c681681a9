//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host tick, no wall-clock time
//! - Injected randomness only
//! - Stable iteration order (oldest entity first)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_signal;
pub use collision::{Rect, avatar_hitbox, hits_obstacle, out_of_bounds, touches_collectible};
pub use physics::{PhysicsEvent, advance};
pub use rng::{PcgSource, RandomSource, SequenceSource};
pub use rules::{apply_physics, apply_signal, reset_round};
pub use snapshot::Snapshot;
pub use spawn::{maybe_spawn_collectible, maybe_spawn_obstacle};
pub use state::{
    Avatar, Collectible, CollectibleKind, GameEvent, GameState, GameStatus, Obstacle, Signal,
    World,
};
pub use tick::{Simulation, tick};
