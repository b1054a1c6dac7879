//! Canvas-2D rendering
//!
//! The renderer is a pure consumer of the simulation snapshot: flat
//! shapes and a text HUD, nothing more. Color assignment is kept
//! platform-free; the canvas half only exists on wasm32.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{DroneKind, ProjectileOwner};

/// Background fill
pub const BACKGROUND_COLOR: &str = "#1a1a2e";
/// The player ship
pub const PLAYER_COLOR: &str = "#ff4444";
/// HUD text
pub const HUD_COLOR: &str = "#ffffff";
pub const HUD_FONT: &str = "16px monospace";

/// Fill color for a drone of the given kind
pub fn drone_color(kind: DroneKind) -> &'static str {
    match kind {
        DroneKind::Scout => "#ff8800",
        DroneKind::Heavy => "#cc3333",
        DroneKind::Bomber => "#9955ff",
    }
}

/// Fill color for a projectile, by owner
pub fn projectile_color(owner: ProjectileOwner) -> &'static str {
    match owner {
        ProjectileOwner::Player => "#ffff00",
        ProjectileOwner::Drone => "#ff8800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_colors_differ() {
        assert_ne!(
            projectile_color(ProjectileOwner::Player),
            projectile_color(ProjectileOwner::Drone)
        );
    }

    #[test]
    fn test_every_kind_has_a_color() {
        for kind in [DroneKind::Scout, DroneKind::Heavy, DroneKind::Bomber] {
            assert!(drone_color(kind).starts_with('#'));
        }
    }
}
