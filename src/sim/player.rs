//! Player movement and shooting
//!
//! Movement is driven directly by the input snapshot; the velocity
//! field on [`Player`] is not integrated. The shoot cooldown is
//! edge-independent: holding the button fires every cooldown period.

use glam::Vec2;

use super::state::{Player, Projectile, ProjectileOwner, ShootingState};
use super::tick::InputState;
use crate::consts::*;

/// Integrate player movement and clamp the bounding box into the arena
pub fn advance_player(player: &Player, input: &InputState, dt: f32) -> Player {
    let mut next = player.clone();
    next.position += input.movement * PLAYER_SPEED * dt;
    next.position.x = next.position.x.clamp(0.0, ARENA_WIDTH - next.size.x);
    next.position.y = next.position.y.clamp(0.0, ARENA_HEIGHT - next.size.y);
    next
}

/// Advance the shoot cooldown. Returns the next state and whether a
/// shot fires this tick.
pub fn advance_shooting(
    state: ShootingState,
    dt: f32,
    shoot_held: bool,
) -> (ShootingState, bool) {
    let time_since_last_shot = state.time_since_last_shot + dt;
    let can_shoot = time_since_last_shot >= PLAYER_SHOOT_COOLDOWN;

    if shoot_held && can_shoot {
        (
            ShootingState {
                can_shoot: false,
                time_since_last_shot: 0.0,
            },
            true,
        )
    } else {
        (
            ShootingState {
                can_shoot,
                time_since_last_shot,
            },
            false,
        )
    }
}

/// Build the player's shot: spawned at the right edge, vertically
/// centered, flying straight right.
pub fn spawn_projectile(player: &Player, id: u32) -> Projectile {
    Projectile {
        id,
        position: Vec2::new(
            player.position.x + player.size.x,
            player.position.y + player.size.y / 2.0 - 2.0,
        ),
        velocity: Vec2::new(PLAYER_PROJECTILE_SPEED, 0.0),
        size: Vec2::new(PLAYER_PROJECTILE_SIZE.0, PLAYER_PROJECTILE_SIZE.1),
        damage: PLAYER_PROJECTILE_DAMAGE,
        owner: ProjectileOwner::Player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(x: f32, y: f32) -> InputState {
        InputState {
            movement: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_movement_integration() {
        let player = Player::new();
        let next = advance_player(&player, &input(1.0, 0.0), 0.1);
        assert!((next.position.x - 130.0).abs() < 1e-4);
        assert_eq!(next.position.y, player.position.y);
    }

    #[test]
    fn test_clamp_left_and_top() {
        let mut player = Player::new();
        player.position = Vec2::new(2.0, 1.0);
        let next = advance_player(&player, &input(-1.0, -1.0), 1.0);
        assert_eq!(next.position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_clamp_right_and_bottom() {
        let mut player = Player::new();
        player.position = Vec2::new(790.0, 590.0);
        let next = advance_player(&player, &input(1.0, 1.0), 1.0);
        assert_eq!(next.position, Vec2::new(800.0 - 32.0, 600.0 - 48.0));
    }

    #[test]
    fn test_cooldown_gates_to_one_shot() {
        // Two 0.1s updates with the button held: the shot lands exactly
        // on the tick where cumulative time crosses 0.2s.
        let state = ShootingState {
            can_shoot: false,
            time_since_last_shot: 0.0,
        };
        let (state, fired) = advance_shooting(state, 0.1, true);
        assert!(!fired);
        let (state, fired) = advance_shooting(state, 0.1, true);
        assert!(fired);
        assert_eq!(state.time_since_last_shot, 0.0);
        assert!(!state.can_shoot);
    }

    #[test]
    fn test_holding_fires_every_cooldown_period() {
        let mut state = ShootingState::default();
        let mut shots = 0;
        for _ in 0..100 {
            let (next, fired) = advance_shooting(state, 0.05, true);
            state = next;
            if fired {
                shots += 1;
            }
        }
        // 5 seconds at a 0.2s cooldown
        assert_eq!(shots, 25);
    }

    #[test]
    fn test_ready_but_not_held_does_not_fire() {
        let state = ShootingState {
            can_shoot: false,
            time_since_last_shot: 1.0,
        };
        let (state, fired) = advance_shooting(state, 0.1, false);
        assert!(!fired);
        assert!(state.can_shoot);
        assert!(state.time_since_last_shot > 1.0);
    }

    #[test]
    fn test_projectile_spawn_shape() {
        let player = Player::new(); // (100, 300), 32x48
        let projectile = spawn_projectile(&player, 5);
        assert_eq!(projectile.position, Vec2::new(132.0, 322.0));
        assert_eq!(projectile.velocity, Vec2::new(500.0, 0.0));
        assert_eq!(projectile.size, Vec2::new(8.0, 4.0));
        assert_eq!(projectile.damage, 10);
        assert_eq!(projectile.owner, ProjectileOwner::Player);
    }
}
