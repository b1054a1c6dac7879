//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here: entities, score,
//! clocks, the entity-ID allocator and the run seed. A snapshot plus
//! an input trace replays identically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::drone::DroneKind;
use crate::consts::*;

/// Who fired a projectile. Player shots damage drones; drone shots are
/// never tested against the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Drone,
}

/// Shoot-cooldown state machine shared by player and drones.
///
/// `can_shoot` is derived bookkeeping - firing is gated purely by the
/// cooldown-elapsed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootingState {
    pub can_shoot: bool,
    pub time_since_last_shot: f32,
}

impl Default for ShootingState {
    fn default() -> Self {
        Self {
            can_shoot: true,
            time_since_last_shot: 0.0,
        }
    }
}

/// The player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Carried for the renderer/data model; movement is input-driven
    pub velocity: Vec2,
    pub size: Vec2,
    /// 0-100; no current rule decrements it
    pub health: i32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            velocity: Vec2::ZERO,
            size: Vec2::new(PLAYER_SIZE.0, PLAYER_SIZE.1),
            health: PLAYER_HEALTH,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub damage: i32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// Sine-trajectory parameters for drone movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillationState {
    /// Baseline the sine wave oscillates around
    pub base_y: f32,
    /// Accumulated time feeding the sine argument
    pub oscillation_time: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

/// An enemy drone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: u32,
    pub kind: DroneKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Last observed player position, recorded each tick for aiming
    pub last_player_position: Vec2,
    pub shooting: ShootingState,
    pub movement: OscillationState,
    /// Formation membership (weak reference by ID)
    pub formation_id: Option<u32>,
    pub formation_index: u32,
    pub point_value: u64,
}

impl Drone {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// A group of drones spawned together, tracked for the completion bonus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneFormation {
    pub id: u32,
    pub kind: DroneKind,
    pub spawn_position: Vec2,
    /// Member drone IDs captured at creation; not kept live-synced
    pub members: Vec<u32>,
    pub is_complete: bool,
    /// Stamped (game-time ms) when `is_complete` flips true
    pub completed_at_ms: Option<f32>,
    /// Guards the formation bonus against double-awarding
    pub bonus_awarded: bool,
}

/// The scrolling play field. Scroll is parked at zero in the current
/// design but stays in the data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    pub scroll_speed: f32,
    pub scroll_offset: f32,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            scroll_speed: 0.0,
            scroll_offset: 0.0,
        }
    }
}

/// Formation spawn bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneSpawnState {
    /// Game time (ms) of the last formation spawn
    pub last_spawn_time_ms: f32,
    /// Feeds formation IDs
    pub formation_counter: u32,
    /// Formations not yet decayed past their completion grace window
    pub active_formations: Vec<DroneFormation>,
}

impl Default for DroneSpawnState {
    fn default() -> Self {
        Self {
            last_spawn_time_ms: 0.0,
            formation_counter: 0,
            active_formations: Vec::new(),
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility. Formation spawns derive their RNG
    /// from (seed, formation counter), so a snapshot replays exactly.
    pub seed: u64,
    pub player: Player,
    pub drones: Vec<Drone>,
    pub projectiles: Vec<Projectile>,
    pub level: Level,
    /// Monotonically non-decreasing
    pub score: u64,
    /// Elapsed simulation time in seconds
    pub game_time: f32,
    pub is_paused: bool,
    pub player_shooting: ShootingState,
    pub spawning: DroneSpawnState,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: Player::new(),
            drones: Vec::new(),
            projectiles: Vec::new(),
            level: Level::default(),
            score: 0,
            game_time: 0.0,
            is_paused: false,
            player_shooting: ShootingState::default(),
            spawning: DroneSpawnState::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Game time in milliseconds (the spawn rule's clock)
    pub fn game_time_ms(&self) -> f32 {
        self.game_time * 1000.0
    }
}
