//! Frame-gated obstacle and collectible spawning
//!
//! Both spawners fire on frames that are a multiple of their interval and
//! place new entities at the right edge of the field. Returned entities carry
//! id 0 until the store inserts them.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Collectible, CollectibleKind, Obstacle};
use crate::consts::SPAWN_MARGIN;
use crate::settings::{Field, GameParams};

/// Integer draw in `[0, span)`, with the span clamped to at least one unit
#[inline]
fn draw_offset(rng: &mut impl RandomSource, span: f32) -> f32 {
    (rng.next_f32() * span.max(1.0)).floor()
}

/// Spawn an obstacle on this frame if its interval elapsed
///
/// The gap's top edge lands in `[50, height / 2 + 50)`.
pub fn maybe_spawn_obstacle(
    frame: u64,
    field: &Field,
    params: &GameParams,
    rng: &mut impl RandomSource,
) -> Option<Obstacle> {
    if !frame.is_multiple_of(u64::from(params.obstacle_interval)) {
        return None;
    }

    let top = draw_offset(rng, field.height / 2.0) + SPAWN_MARGIN;
    let obstacle = Obstacle::new(field.width, top, params.gap_size);
    log::debug!(
        "frame {}: obstacle gap {}..{}",
        frame,
        obstacle.top,
        obstacle.bottom
    );
    Some(obstacle)
}

/// Spawn a collectible on this frame if its interval elapsed
///
/// Kind is a fair coin flip; y lands in `[50, height - 50)`.
pub fn maybe_spawn_collectible(
    frame: u64,
    field: &Field,
    params: &GameParams,
    rng: &mut impl RandomSource,
) -> Option<Collectible> {
    if !frame.is_multiple_of(u64::from(params.collectible_interval)) {
        return None;
    }

    let kind = if rng.next_f32() > 0.5 {
        CollectibleKind::Alpha
    } else {
        CollectibleKind::Beta
    };
    let y = draw_offset(rng, field.height - 2.0 * SPAWN_MARGIN) + SPAWN_MARGIN;
    log::debug!("frame {}: {:?} collectible at y={}", frame, kind, y);
    Some(Collectible::new(
        Vec2::new(field.width, y),
        params.coin_size,
        kind,
    ))
}
