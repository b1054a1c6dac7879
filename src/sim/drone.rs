//! Drone behavior: kinds, movement patterns, shooting, formations
//!
//! Drone behavior is dispatched over `DroneKind`. Each kind owns a
//! static config (stats, projectile parameters) and a movement pattern,
//! so new kinds plug in without touching the orchestrator. Only `Scout`
//! is produced by the current spawn rule.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{
    Drone, DroneFormation, GameState, OscillationState, Player, Projectile, ProjectileOwner,
    ShootingState,
};
use crate::consts::*;

/// Drone variants. `Heavy` and `Bomber` carry configs but are not yet
/// spawned by any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneKind {
    Scout,
    Heavy,
    Bomber,
}

/// How a kind moves each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    /// Leftward drift with a sine wave around a baseline
    SineWave,
    /// Straight-line integration of velocity
    Linear,
}

/// Static per-kind stats
#[derive(Debug, Clone, Copy)]
pub struct DroneConfig {
    pub size: Vec2,
    pub health: i32,
    /// Horizontal drift speed (px/s, applied leftward)
    pub speed: f32,
    pub shoot_cooldown: f32,
    pub point_value: u64,
    pub formation_bonus: u64,
    pub amplitude: f32,
    pub frequency: f32,
    pub projectile_speed: f32,
    pub projectile_size: Vec2,
    pub projectile_damage: i32,
}

const SCOUT_CONFIG: DroneConfig = DroneConfig {
    size: Vec2::new(24.0, 19.0),
    health: 1,
    speed: 150.0,
    shoot_cooldown: 1.5,
    point_value: 100,
    formation_bonus: 500,
    amplitude: 60.0,
    frequency: 2.0,
    projectile_speed: 300.0,
    projectile_size: Vec2::new(6.0, 6.0),
    projectile_damage: 10,
};

const HEAVY_CONFIG: DroneConfig = DroneConfig {
    size: Vec2::new(40.0, 32.0),
    health: 5,
    speed: 90.0,
    shoot_cooldown: 2.5,
    point_value: 250,
    formation_bonus: 750,
    amplitude: 0.0,
    frequency: 0.0,
    projectile_speed: 250.0,
    projectile_size: Vec2::new(8.0, 8.0),
    projectile_damage: 25,
};

const BOMBER_CONFIG: DroneConfig = DroneConfig {
    size: Vec2::new(32.0, 26.0),
    health: 3,
    speed: 110.0,
    shoot_cooldown: 2.0,
    point_value: 150,
    formation_bonus: 600,
    amplitude: 0.0,
    frequency: 0.0,
    projectile_speed: 200.0,
    projectile_size: Vec2::new(10.0, 10.0),
    projectile_damage: 20,
};

impl DroneKind {
    pub const fn config(self) -> &'static DroneConfig {
        match self {
            DroneKind::Scout => &SCOUT_CONFIG,
            DroneKind::Heavy => &HEAVY_CONFIG,
            DroneKind::Bomber => &BOMBER_CONFIG,
        }
    }

    pub const fn movement_pattern(self) -> MovementPattern {
        match self {
            DroneKind::Scout => MovementPattern::SineWave,
            DroneKind::Heavy | DroneKind::Bomber => MovementPattern::Linear,
        }
    }
}

/// Build one drone of the given kind
pub fn create_drone(
    id: u32,
    kind: DroneKind,
    start_position: Vec2,
    formation_id: Option<u32>,
    formation_index: u32,
    base_y: f32,
) -> Drone {
    let config = kind.config();
    Drone {
        id,
        kind,
        position: start_position,
        velocity: Vec2::new(-config.speed, 0.0),
        size: config.size,
        health: config.health,
        max_health: config.health,
        last_player_position: Vec2::ZERO,
        shooting: ShootingState::default(),
        movement: OscillationState {
            base_y,
            oscillation_time: 0.0,
            amplitude: config.amplitude,
            frequency: config.frequency,
        },
        formation_id,
        formation_index,
        point_value: config.point_value,
    }
}

/// Spawn-rule gate: a new formation is due once the interval has elapsed
pub fn spawn_due(game_time_ms: f32, last_spawn_time_ms: f32) -> bool {
    game_time_ms - last_spawn_time_ms >= FORMATION_SPAWN_INTERVAL_MS
}

/// Run the spawn rule against the state's clock. When due, creates a
/// scout formation of 3-5 drones off-screen right, splices the members
/// into the live set, registers the formation and resets the spawn
/// clock. Returns the new formation's ID.
pub fn maybe_spawn_formation(state: &mut GameState) -> Option<u32> {
    let now_ms = state.game_time_ms();
    if !spawn_due(now_ms, state.spawning.last_spawn_time_ms) {
        return None;
    }

    state.spawning.formation_counter += 1;
    let formation_id = state.spawning.formation_counter;

    // Formation randomness comes from a seed derived per formation, so
    // the run replays exactly from (seed, inputs) without carrying a
    // generator in the state
    let formation_seed = (formation_id as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(state.seed);
    let mut rng = Pcg32::seed_from_u64(formation_seed);

    let count: u32 = rng.random_range(3..=5);
    let base_y: f32 = rng.random_range(FORMATION_BASE_Y_MIN..FORMATION_BASE_Y_MAX);
    let spawn_position = Vec2::new(FORMATION_SPAWN_X, base_y);

    let mut members = Vec::with_capacity(count as usize);
    for i in 0..count {
        let id = state.next_entity_id();
        let start = Vec2::new(FORMATION_SPAWN_X + i as f32 * FORMATION_SPACING_X, base_y);
        let mut drone = create_drone(id, DroneKind::Scout, start, Some(formation_id), i, base_y);
        // Stagger oscillation phase for visual variety
        drone.movement.oscillation_time = i as f32 * PI / 4.0;
        members.push(drone.id);
        state.drones.push(drone);
    }

    state.spawning.active_formations.push(DroneFormation {
        id: formation_id,
        kind: DroneKind::Scout,
        spawn_position,
        members,
        is_complete: false,
        completed_at_ms: None,
        bonus_awarded: false,
    });
    state.spawning.last_spawn_time_ms = now_ms;

    log::info!(
        "Spawned formation {} ({} scouts, base_y={:.0})",
        formation_id,
        count,
        base_y
    );

    Some(formation_id)
}

/// Advance one drone's position by dt
pub fn advance_movement(drone: &mut Drone, dt: f32) {
    match drone.kind.movement_pattern() {
        MovementPattern::SineWave => {
            let movement = &mut drone.movement;
            movement.oscillation_time += dt;
            let sine_offset = (movement.oscillation_time * movement.frequency).sin()
                * movement.amplitude;
            drone.position.x += drone.velocity.x * dt;
            drone.position.y = movement.base_y + sine_offset;
        }
        MovementPattern::Linear => {
            drone.position += drone.velocity * dt;
        }
    }
}

/// Advance one drone's shoot cooldown and aim at the player's current
/// position. Returns the shot velocity when the drone fires this tick.
/// A zero-distance target drops the shot; the cooldown keeps
/// accumulating so the drone retries next tick.
pub fn advance_shooting(drone: &mut Drone, player: &Player, dt: f32) -> Option<Vec2> {
    let config = drone.kind.config();

    drone.last_player_position = player.position;
    drone.shooting.time_since_last_shot += dt;

    if drone.shooting.time_since_last_shot < config.shoot_cooldown {
        return None;
    }

    let direction = player.position - drone.position;
    let distance = direction.length();
    if distance <= 0.0 {
        return None;
    }

    drone.shooting = ShootingState {
        can_shoot: false,
        time_since_last_shot: 0.0,
    };
    Some(direction / distance * config.projectile_speed)
}

/// Build the projectile for a shot decided by [`advance_shooting`]
pub fn spawn_projectile(drone: &Drone, id: u32, velocity: Vec2) -> Projectile {
    let config = drone.kind.config();
    Projectile {
        id,
        position: Vec2::new(drone.position.x, drone.position.y + drone.size.y / 2.0),
        velocity,
        size: config.projectile_size,
        damage: config.projectile_damage,
        owner: ProjectileOwner::Drone,
    }
}

/// A drone is culled once it drifts off-screen left, regardless of health
pub fn off_screen(drone: &Drone) -> bool {
    drone.position.x < DRONE_CULL_X
}

/// A formation is complete once no live drone references it
pub fn formation_complete(formation: &DroneFormation, live_drones: &[Drone]) -> bool {
    !live_drones
        .iter()
        .any(|d| d.formation_id == Some(formation.id))
}

/// Score the drones destroyed this tick.
///
/// Returns the score delta: each drone's point value, plus the
/// formation bonus when the last live member of a not-yet-awarded
/// formation died. Flips `bonus_awarded` on the formations passed in
/// (the list owned by the state under construction) - the caller
/// applies the returned delta.
pub fn score_destroyed(
    destroyed: &[Drone],
    formations: &mut [DroneFormation],
    live_drones: &[Drone],
) -> u64 {
    let mut delta = 0u64;
    for drone in destroyed {
        delta += drone.point_value;
        let Some(formation_id) = drone.formation_id else {
            continue;
        };
        let Some(formation) = formations.iter_mut().find(|f| f.id == formation_id) else {
            continue;
        };
        if formation.bonus_awarded {
            continue;
        }
        let members_alive = live_drones
            .iter()
            .any(|d| d.formation_id == Some(formation_id));
        if !members_alive {
            delta += formation.kind.config().formation_bonus;
            formation.bonus_awarded = true;
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(7)
    }

    #[test]
    fn test_spawn_due_boundary() {
        assert!(spawn_due(5000.0, 0.0));
        assert!(!spawn_due(4999.0, 0.0));
        assert!(spawn_due(12_000.0, 5000.0));
    }

    #[test]
    fn test_maybe_spawn_formation_timing() {
        let mut state = test_state();
        state.game_time = 4.999;
        assert!(maybe_spawn_formation(&mut state).is_none());
        assert!(state.drones.is_empty());

        state.game_time = 5.0;
        let id = maybe_spawn_formation(&mut state).unwrap();
        assert_eq!(id, 1);
        assert_eq!(state.spawning.active_formations.len(), 1);
        assert!((3..=5).contains(&state.drones.len()));
        // Spawn clock resets; an immediate re-check does not double-spawn
        assert!(maybe_spawn_formation(&mut state).is_none());
    }

    #[test]
    fn test_spawned_formation_shape() {
        let mut state = test_state();
        state.game_time = 6.0;
        maybe_spawn_formation(&mut state).unwrap();

        let formation = &state.spawning.active_formations[0];
        assert_eq!(formation.members.len(), state.drones.len());
        assert!(!formation.is_complete);
        assert!(!formation.bonus_awarded);

        for (i, drone) in state.drones.iter().enumerate() {
            let i = i as f32;
            assert_eq!(drone.kind, DroneKind::Scout);
            assert_eq!(drone.position.x, 850.0 + i * 80.0);
            assert!((100.0..500.0).contains(&drone.movement.base_y));
            assert_eq!(drone.velocity, Vec2::new(-150.0, 0.0));
            assert_eq!(drone.health, 1);
            assert!((drone.movement.oscillation_time - i * PI / 4.0).abs() < 1e-6);
            assert_eq!(drone.formation_id, Some(formation.id));
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let spawn = |seed| {
            let mut state = GameState::new(seed);
            state.game_time = 5.0;
            maybe_spawn_formation(&mut state).unwrap();
            (state.drones.len(), state.drones[0].movement.base_y)
        };
        assert_eq!(spawn(42), spawn(42));
    }

    #[test]
    fn test_sine_movement() {
        let mut drone = create_drone(1, DroneKind::Scout, Vec2::new(400.0, 200.0), None, 0, 200.0);
        advance_movement(&mut drone, 0.5);
        // x drifts left at 150 px/s
        assert!((drone.position.x - 362.5).abs() < 1e-4);
        // y = base + 60 * sin(2 * 0.5)
        let expected_y = 200.0 + 60.0 * (2.0f32 * 0.5).sin();
        assert!((drone.position.y - expected_y).abs() < 1e-4);
    }

    #[test]
    fn test_shooting_cooldown_and_aim() {
        let mut drone = create_drone(1, DroneKind::Scout, Vec2::new(400.0, 300.0), None, 0, 300.0);
        let player = Player::new(); // at (100, 300)

        // Below cooldown: no shot, player position still recorded
        assert!(advance_shooting(&mut drone, &player, 1.0).is_none());
        assert_eq!(drone.last_player_position, player.position);

        // Crossing 1.5s: fires straight left toward the player
        let velocity = advance_shooting(&mut drone, &player, 0.5).unwrap();
        assert!((velocity.x - -300.0).abs() < 1e-3);
        assert!(velocity.y.abs() < 1e-3);
        assert_eq!(drone.shooting.time_since_last_shot, 0.0);
        assert!(!drone.shooting.can_shoot);
    }

    #[test]
    fn test_zero_distance_shot_dropped() {
        let player = Player::new();
        let mut drone = create_drone(1, DroneKind::Scout, player.position, None, 0, 300.0);
        assert!(advance_shooting(&mut drone, &player, 2.0).is_none());
        // Cooldown keeps accumulating instead of resetting
        assert!(drone.shooting.time_since_last_shot >= 2.0);
    }

    #[test]
    fn test_drone_projectile_shape() {
        let drone = create_drone(1, DroneKind::Scout, Vec2::new(400.0, 300.0), None, 0, 300.0);
        let projectile = spawn_projectile(&drone, 9, Vec2::new(-300.0, 0.0));
        assert_eq!(projectile.position, Vec2::new(400.0, 300.0 + 19.0 / 2.0));
        assert_eq!(projectile.size, Vec2::new(6.0, 6.0));
        assert_eq!(projectile.damage, 10);
        assert_eq!(projectile.owner, ProjectileOwner::Drone);
    }

    #[test]
    fn test_off_screen_cull_rule() {
        let mut drone = create_drone(1, DroneKind::Scout, Vec2::new(-99.0, 0.0), None, 0, 0.0);
        assert!(!off_screen(&drone));
        drone.position.x = -100.1;
        assert!(off_screen(&drone));
    }

    #[test]
    fn test_formation_complete() {
        let mut state = test_state();
        state.game_time = 5.0;
        maybe_spawn_formation(&mut state).unwrap();
        let formation = state.spawning.active_formations[0].clone();

        assert!(!formation_complete(&formation, &state.drones));
        assert!(formation_complete(&formation, &[]));
    }

    #[test]
    fn test_formation_bonus_awarded_once() {
        let mut state = test_state();
        state.game_time = 5.0;
        maybe_spawn_formation(&mut state).unwrap();
        let destroyed: Vec<Drone> = std::mem::take(&mut state.drones);
        let count = destroyed.len() as u64;
        let formations = &mut state.spawning.active_formations;

        // All members destroyed at once: points + one bonus
        let delta = score_destroyed(&destroyed, formations, &[]);
        assert_eq!(delta, count * 100 + 500);
        assert!(formations[0].bonus_awarded);

        // Re-scoring an already-awarded formation adds no extra bonus
        let delta = score_destroyed(&destroyed[..1], formations, &[]);
        assert_eq!(delta, 100);
    }

    #[test]
    fn test_no_bonus_while_members_alive() {
        let mut state = test_state();
        state.game_time = 5.0;
        maybe_spawn_formation(&mut state).unwrap();
        let destroyed = vec![state.drones.remove(0)];

        let delta = score_destroyed(&destroyed, &mut state.spawning.active_formations, &state.drones);
        assert_eq!(delta, 100);
        assert!(!state.spawning.active_formations[0].bonus_awarded);
    }

    #[test]
    fn test_bonus_split_across_ticks() {
        let mut state = test_state();
        state.game_time = 5.0;
        maybe_spawn_formation(&mut state).unwrap();

        let mut total = 0u64;
        let count = state.drones.len() as u64;
        while !state.drones.is_empty() {
            let destroyed = vec![state.drones.remove(0)];
            total += score_destroyed(
                &destroyed,
                &mut state.spawning.active_formations,
                &state.drones,
            );
        }
        assert_eq!(total, count * 100 + 500);
    }
}
