//! Round state machine
//!
//! Idle -> Running -> (Over | Won) -> Idle. Signals from the host and
//! physics events from `advance` are the only inputs; everything returned is
//! a `GameEvent` for the audio/visual layer.

use super::physics::PhysicsEvent;
use super::state::{GameEvent, GameState, GameStatus, Signal, World};
use crate::settings::{Field, GameParams};

/// Start a new round from a fresh world: Idle, score 0, frame 0
pub fn reset_round(game: &mut GameState, world: &mut World, field: &Field, params: &GameParams) {
    world.reset(field, params);
    *game = GameState::new();
    log::info!("Round reset");
}

fn start_round(game: &mut GameState, world: &mut World, events: &mut Vec<GameEvent>) {
    world.avatar.vel = 0.0;
    game.status = GameStatus::Running;
    events.push(GameEvent::Started);
    log::info!("Round started");
}

/// Apply one host signal
pub fn apply_signal(
    game: &mut GameState,
    world: &mut World,
    signal: Signal,
    field: &Field,
    params: &GameParams,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (game.status, signal) {
        (GameStatus::Idle, Signal::Start) => start_round(game, world, &mut events),
        // A flap from Idle both starts the round and flaps
        (GameStatus::Idle, Signal::Flap) => {
            start_round(game, world, &mut events);
            world.avatar.vel = params.impulse;
            events.push(GameEvent::Flap);
        }
        (GameStatus::Running, Signal::Flap) => {
            // Absolute, not additive: repeated flaps before a tick collapse
            world.avatar.vel = params.impulse;
            events.push(GameEvent::Flap);
        }
        (GameStatus::Over, _) | (GameStatus::Won, Signal::Restart) => {
            reset_round(game, world, field, params);
            events.push(GameEvent::Reset);
        }
        (GameStatus::Idle, Signal::Restart)
        | (GameStatus::Running, Signal::Start | Signal::Restart)
        | (GameStatus::Won, Signal::Start | Signal::Flap) => {}
    }

    events
}

/// Fold one tick's physics events into score and status
///
/// All scoring events are applied first. A fatal event then ends the round
/// even if the same tick crossed the win score; otherwise the win check runs
/// once on the final tally.
pub fn apply_physics(
    game: &mut GameState,
    physics: &[PhysicsEvent],
    params: &GameParams,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !game.is_running() {
        return events;
    }

    let mut fatal = false;
    for event in physics {
        if event.is_fatal() {
            fatal = true;
            continue;
        }

        let points = event.points();
        game.score += points;
        if let PhysicsEvent::Collected { kind, .. } = event {
            events.push(GameEvent::Collected { kind: *kind });
        }
        events.push(GameEvent::Scored {
            points,
            total: game.score,
        });
        log::debug!("+{} -> {}", points, game.score);
    }

    if fatal {
        game.status = GameStatus::Over;
        events.push(GameEvent::Collision);
        log::info!("Game over at frame {} with score {}", game.frame, game.score);
    } else if game.score >= params.win_score {
        game.status = GameStatus::Won;
        events.push(GameEvent::Won { score: game.score });
        log::info!("Won at frame {} with score {}", game.frame, game.score);
    }

    events
}
