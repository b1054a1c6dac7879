//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No wall clock: the scheduler passes dt in
//! - Seeded RNG only, carried inside the state
//! - No rendering or platform dependencies
//!
//! One call to [`advance`] is one tick; the caller swaps the returned
//! snapshot in atomically.

pub mod aabb;
pub mod collision;
pub mod drone;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{CollisionOutcome, resolve_collisions};
pub use drone::{DroneConfig, DroneKind, MovementPattern};
pub use state::{
    Drone, DroneFormation, DroneSpawnState, GameState, Level, OscillationState, Player,
    Projectile, ProjectileOwner, ShootingState,
};
pub use tick::{Buttons, InputState, advance, advance_projectiles};
