//! Idle/demo mode - a simple bot that plays the game
//!
//! Aims the avatar's center at the gap of the next obstacle it hasn't cleared
//! yet, flapping whenever it sinks too far below that line.

use super::snapshot::Snapshot;
use super::state::{GameStatus, Signal};

/// How far below the target line the avatar may sink before flapping
const FLAP_SLACK: f32 = 18.0;

/// Decide the bot's input for the next tick
pub fn autopilot_signal(snapshot: &Snapshot) -> Option<Signal> {
    match snapshot.status {
        GameStatus::Idle => return Some(Signal::Start),
        GameStatus::Running => {}
        GameStatus::Over | GameStatus::Won => return None,
    }

    let avatar = &snapshot.avatar;
    let target = snapshot
        .obstacles
        .iter()
        .find(|o| o.right() >= avatar.pos.x)
        .map(|o| o.gap_center())
        .unwrap_or(snapshot.field.height / 2.0);

    let center = avatar.pos.y + avatar.size.y * 0.5;
    // Only flap on the way down, otherwise it climbs into the ceiling
    if center > target + FLAP_SLACK && avatar.vel >= 0.0 {
        Some(Signal::Flap)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Field, GameParams, LayoutClass};
    use crate::sim::state::{GameState, Obstacle, World};
    use crate::sim::tick::Simulation;

    fn snapshot_with(status: GameStatus, avatar_y: f32, vel: f32) -> Snapshot {
        let field = Field::new(800.0, 600.0).unwrap();
        let params = GameParams::default();
        let mut world = World::new(&field, &params);
        world.avatar.pos.y = avatar_y;
        world.avatar.vel = vel;
        world.add_obstacle(Obstacle::new(300.0, 250.0, 150.0));
        let game = GameState {
            status,
            ..GameState::new()
        };
        Snapshot::capture(&game, &world, &field, &params)
    }

    #[test]
    fn test_starts_from_idle() {
        let snap = snapshot_with(GameStatus::Idle, 200.0, 0.0);
        assert_eq!(autopilot_signal(&snap), Some(Signal::Start));
    }

    #[test]
    fn test_flaps_below_gap() {
        // Gap center 325, avatar center 375
        let snap = snapshot_with(GameStatus::Running, 350.0, 1.0);
        assert_eq!(autopilot_signal(&snap), Some(Signal::Flap));

        // Already rising
        let snap = snapshot_with(GameStatus::Running, 350.0, -3.0);
        assert_eq!(autopilot_signal(&snap), None);

        // At the gap
        let snap = snapshot_with(GameStatus::Running, 300.0, 1.0);
        assert_eq!(autopilot_signal(&snap), None);
    }

    #[test]
    fn test_quiet_after_round_ends() {
        for status in [GameStatus::Over, GameStatus::Won] {
            let snap = snapshot_with(status, 500.0, 5.0);
            assert_eq!(autopilot_signal(&snap), None);
        }
    }

    #[test]
    fn test_bot_survives_opening() {
        let field = Field::new(960.0, 540.0).unwrap();
        let mut sim = Simulation::new(field, LayoutClass::Standard, 12345);
        for _ in 0..3000 {
            if let Some(signal) = autopilot_signal(&sim.snapshot()) {
                sim.push_signal(signal);
            }
            sim.tick();
            if sim.game().status.is_terminal() {
                break;
            }
        }
        assert!(sim.game().frame > 100, "bot died at frame {}", sim.game().frame);
    }
}
