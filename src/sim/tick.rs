//! Frame orchestrator
//!
//! `advance` is the whole game: a deterministic transition from one
//! state snapshot to the next. The scheduler (browser glue) owns the
//! wall clock and the dt clamp; nothing here retains state between
//! calls.

use glam::Vec2;

use super::state::{GameState, Projectile};
use super::{collision, drone, player};
use crate::consts::*;

/// Button snapshot sampled by the input sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    pub shoot: bool,
    pub jump: bool,
}

/// Normalized input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Movement vector, components in [-1, 1], magnitude <= 1
    pub movement: Vec2,
    pub buttons: Buttons,
}

/// Advance all projectiles by dt and cull those outside the arena
/// margin rectangle
pub fn advance_projectiles(projectiles: Vec<Projectile>, dt: f32) -> Vec<Projectile> {
    let margin = PROJECTILE_CULL_MARGIN;
    projectiles
        .into_iter()
        .map(|mut p| {
            p.position += p.velocity * dt;
            p
        })
        .filter(|p| {
            p.position.x > -margin
                && p.position.x < ARENA_WIDTH + margin
                && p.position.y > -margin
                && p.position.y < ARENA_HEIGHT + margin
        })
        .collect()
}

/// Advance the game state by one tick.
///
/// Pure over (state, input, dt): the caller swaps in the returned
/// snapshot. When paused this is the identity transition.
pub fn advance(state: &GameState, input: &InputState, dt: f32) -> GameState {
    let mut next = state.clone();
    if next.is_paused {
        return next;
    }

    // 1. Player movement and shooting
    next.player = player::advance_player(&next.player, input, dt);
    let (shooting, fired) = player::advance_shooting(next.player_shooting, dt, input.buttons.shoot);
    next.player_shooting = shooting;
    if fired {
        let id = next.next_entity_id();
        let shot = player::spawn_projectile(&next.player, id);
        next.projectiles.push(shot);
    }

    // 2. Drone movement and shooting, culling off-screen drones
    let player_snapshot = next.player.clone();
    let drones = std::mem::take(&mut next.drones);
    let mut live = Vec::with_capacity(drones.len());
    for mut d in drones {
        drone::advance_movement(&mut d, dt);
        if let Some(velocity) = drone::advance_shooting(&mut d, &player_snapshot, dt) {
            let id = next.next_entity_id();
            next.projectiles.push(drone::spawn_projectile(&d, id, velocity));
        }
        if !drone::off_screen(&d) {
            live.push(d);
        }
    }
    next.drones = live;

    // 3. Projectile integration and culling
    next.projectiles = advance_projectiles(std::mem::take(&mut next.projectiles), dt);

    // 4. Collision resolution
    let outcome = collision::resolve_collisions(
        std::mem::take(&mut next.projectiles),
        std::mem::take(&mut next.drones),
    );
    next.projectiles = outcome.projectiles;
    next.drones = outcome.drones;

    // 5. Scoring and formation bonus flags
    if !outcome.destroyed.is_empty() {
        next.score += drone::score_destroyed(
            &outcome.destroyed,
            &mut next.spawning.active_formations,
            &next.drones,
        );
    }

    // 6. Formation completion stamping and pruning
    let now_ms = next.game_time_ms();
    for formation in &mut next.spawning.active_formations {
        if !formation.is_complete && drone::formation_complete(formation, &next.drones) {
            formation.is_complete = true;
            formation.completed_at_ms = Some(now_ms);
        }
    }
    next.spawning
        .active_formations
        .retain(|f| match f.completed_at_ms {
            Some(completed) => now_ms - completed < FORMATION_GRACE_MS,
            None => true,
        });

    // 7. Formation spawning
    drone::maybe_spawn_formation(&mut next);

    // 8. Clock
    next.game_time += dt;

    next
}
