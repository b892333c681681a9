//! Per-tick simulation loop
//!
//! Core game loop that advances simulation deterministically. A tick applies
//! queued host signals, then, if the round is running, spawns, advances
//! physics and folds the results into the round state, in that order.

use std::collections::VecDeque;

use super::physics::advance;
use super::rng::{PcgSource, RandomSource};
use super::rules::{apply_physics, apply_signal, reset_round};
use super::snapshot::Snapshot;
use super::spawn::{maybe_spawn_collectible, maybe_spawn_obstacle};
use super::state::{GameEvent, GameState, Signal, World};
use crate::error::ConfigError;
use crate::settings::{Field, GameParams, LayoutClass};

/// Advance the round by one tick
///
/// `signals` are applied in order before anything moves. Returns every event
/// produced this tick.
pub fn tick(
    game: &mut GameState,
    world: &mut World,
    field: &Field,
    params: &GameParams,
    rng: &mut impl RandomSource,
    signals: &[Signal],
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &signal in signals {
        events.extend(apply_signal(game, world, signal, field, params));
    }

    if !game.is_running() {
        return events;
    }

    if let Some(obstacle) = maybe_spawn_obstacle(game.frame, field, params, rng) {
        world.add_obstacle(obstacle);
    }
    if let Some(collectible) = maybe_spawn_collectible(game.frame, field, params, rng) {
        world.add_collectible(collectible);
    }

    let physics = advance(
        &mut world.avatar,
        &mut world.obstacles,
        &mut world.collectibles,
        field,
        params,
    );
    events.extend(apply_physics(game, &physics, params));

    game.frame += 1;
    events
}

/// Owns all round state; the host drives it one tick at a time
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = PcgSource> {
    game: GameState,
    world: World,
    field: Field,
    params: GameParams,
    layout: Option<LayoutClass>,
    rng: R,
    pending: VecDeque<Signal>,
}

impl Simulation<PcgSource> {
    /// Simulation with a layout's built-in parameters and a seeded RNG
    pub fn new(field: Field, layout: LayoutClass, seed: u64) -> Self {
        let params = GameParams::for_layout(layout);
        log::info!(
            "Simulation created: {}x{} field, {} layout, seed {}",
            field.width,
            field.height,
            layout.as_str(),
            seed
        );
        Self::build(field, params, Some(layout), PcgSource::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Simulation with custom parameters and randomness source
    pub fn with_params(field: Field, params: GameParams, rng: R) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::build(field, params, None, rng))
    }

    fn build(field: Field, params: GameParams, layout: Option<LayoutClass>, rng: R) -> Self {
        Self {
            game: GameState::new(),
            world: World::new(&field, &params),
            field,
            params,
            layout,
            rng,
            pending: VecDeque::new(),
        }
    }

    /// Queue a signal for the next tick
    pub fn push_signal(&mut self, signal: Signal) {
        self.pending.push_back(signal);
    }

    /// Run one tick, consuming all queued signals
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let signals: Vec<Signal> = self.pending.drain(..).collect();
        tick(
            &mut self.game,
            &mut self.world,
            &self.field,
            &self.params,
            &mut self.rng,
            &signals,
        )
    }

    /// Drop all entities and return to Idle
    pub fn reset(&mut self) {
        self.pending.clear();
        reset_round(&mut self.game, &mut self.world, &self.field, &self.params);
    }

    /// Switch to a layout's built-in parameters
    ///
    /// Takes effect immediately for spawning and physics; the avatar picks
    /// up its new size on the next reset.
    pub fn set_layout(&mut self, layout: LayoutClass) {
        if self.layout == Some(layout) {
            return;
        }
        log::info!("Layout changed to {}", layout.as_str());
        self.layout = Some(layout);
        self.params = GameParams::for_layout(layout);
    }

    /// Replace parameters with a custom validated set
    pub fn set_params(&mut self, params: GameParams) -> Result<(), ConfigError> {
        params.validate()?;
        self.layout = None;
        self.params = params;
        Ok(())
    }

    /// New play-field size (entities keep their positions)
    pub fn resize(&mut self, field: Field) {
        log::info!("Field resized to {}x{}", field.width, field.height);
        self.field = field;
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    pub fn layout(&self) -> Option<LayoutClass> {
        self.layout
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.game, &self.world, &self.field, &self.params)
    }
}
