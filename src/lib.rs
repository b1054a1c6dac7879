//! Drone Defense - a 2D side-scrolling shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Canvas-2D rendering
//! - `input`: Keyboard/gamepad sampling and combination
//! - `settings`: User preferences

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Nominal scheduler cadence (ms)
    pub const TICK_PERIOD_MS: f64 = 16.0;
    /// Ceiling on a single step's delta time (seconds) - bounds the work
    /// done after a stall such as tab backgrounding
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_SIZE: (f32, f32) = (32.0, 48.0);
    pub const PLAYER_START: (f32, f32) = (100.0, 300.0);
    pub const PLAYER_HEALTH: i32 = 100;
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.2;
    pub const PLAYER_PROJECTILE_SPEED: f32 = 500.0;
    pub const PLAYER_PROJECTILE_SIZE: (f32, f32) = (8.0, 4.0);
    pub const PLAYER_PROJECTILE_DAMAGE: i32 = 10;

    /// Projectiles are culled once they leave the arena by this margin
    pub const PROJECTILE_CULL_MARGIN: f32 = 50.0;

    /// Drones are culled once past this x (off-screen left)
    pub const DRONE_CULL_X: f32 = -100.0;

    /// Formation spawning
    pub const FORMATION_SPAWN_INTERVAL_MS: f32 = 5000.0;
    pub const FORMATION_SPAWN_X: f32 = 850.0;
    pub const FORMATION_SPACING_X: f32 = 80.0;
    pub const FORMATION_BASE_Y_MIN: f32 = 100.0;
    pub const FORMATION_BASE_Y_MAX: f32 = 500.0;
    /// Completed formations linger this long before pruning
    pub const FORMATION_GRACE_MS: f32 = 1000.0;

    /// Gamepad analog deadzone
    pub const GAMEPAD_DEADZONE: f32 = 0.2;
}
