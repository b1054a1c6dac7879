//! Input sampling and combination
//!
//! Keyboard and gamepad each produce an [`InputState`] snapshot on
//! demand; the two combine by OR-ing buttons and summing movement,
//! clamped to unit length so diagonals and dual-source input never
//! exceed full speed. A missing device yields neutral input, never an
//! error.

pub mod gamepad;
#[cfg(target_arch = "wasm32")]
pub mod keyboard;

#[cfg(target_arch = "wasm32")]
pub use keyboard::Keyboard;

use crate::sim::{Buttons, InputState};

/// Merge two input sources into one snapshot
pub fn combine(a: InputState, b: InputState) -> InputState {
    let mut movement = a.movement + b.movement;
    let magnitude = movement.length();
    if magnitude > 1.0 {
        movement /= magnitude;
    }
    InputState {
        movement,
        buttons: Buttons {
            shoot: a.buttons.shoot || b.buttons.shoot,
            jump: a.buttons.jump || b.buttons.jump,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn moving(x: f32, y: f32) -> InputState {
        InputState {
            movement: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_buttons_or() {
        let a = InputState {
            buttons: Buttons {
                shoot: true,
                jump: false,
            },
            ..Default::default()
        };
        let b = InputState {
            buttons: Buttons {
                shoot: false,
                jump: true,
            },
            ..Default::default()
        };
        let merged = combine(a, b);
        assert!(merged.buttons.shoot);
        assert!(merged.buttons.jump);
    }

    #[test]
    fn test_diagonal_normalized() {
        let merged = combine(moving(1.0, 0.0), moving(0.0, 1.0));
        assert!((merged.movement.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sub_unit_movement_untouched() {
        let merged = combine(moving(0.3, 0.0), moving(0.0, 0.4));
        assert_eq!(merged.movement, Vec2::new(0.3, 0.4));
    }

    #[test]
    fn test_opposing_sources_cancel() {
        let merged = combine(moving(1.0, 0.0), moving(-1.0, 0.0));
        assert_eq!(merged.movement, Vec2::ZERO);
    }
}
