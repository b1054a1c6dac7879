//! Gamepad polling
//!
//! Polls the first connected gamepad through the Web Gamepad API.
//! Left stick (with deadzone) or D-pad moves; A/X/right-trigger shoot,
//! B/left-trigger jump. No gamepad connected means neutral input.

use crate::sim::InputState;

/// Rescale an axis value so the range beyond the deadzone maps back to
/// the full [-1, 1] range. Values inside the deadzone are zero.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() < deadzone {
        0.0
    } else {
        value.signum() * ((value.abs() - deadzone) / (1.0 - deadzone))
    }
}

/// Sample the first connected gamepad
#[cfg(target_arch = "wasm32")]
pub fn sample(deadzone: f32) -> InputState {
    use glam::Vec2;
    use wasm_bindgen::JsCast;

    use crate::sim::Buttons;

    let Some(window) = web_sys::window() else {
        return InputState::default();
    };
    let Ok(gamepads) = window.navigator().get_gamepads() else {
        return InputState::default();
    };
    let Some(pad) = gamepads
        .iter()
        .find_map(|g| g.dyn_into::<web_sys::Gamepad>().ok())
    else {
        return InputState::default();
    };

    let axes = pad.axes();
    let axis = |i: u32| axes.get(i).as_f64().unwrap_or(0.0) as f32;
    let mut movement = Vec2::new(
        apply_deadzone(axis(0), deadzone),
        apply_deadzone(axis(1), deadzone),
    );

    let buttons = pad.buttons();
    let pressed = |i: u32| {
        buttons
            .get(i)
            .dyn_into::<web_sys::GamepadButton>()
            .map(|b| b.pressed())
            .unwrap_or(false)
    };

    // D-pad overrides the stick
    if pressed(14) {
        movement.x = -1.0;
    }
    if pressed(15) {
        movement.x = 1.0;
    }
    if pressed(12) {
        movement.y = -1.0;
    }
    if pressed(13) {
        movement.y = 1.0;
    }

    InputState {
        movement,
        buttons: Buttons {
            shoot: pressed(0) || pressed(2) || pressed(7),
            jump: pressed(1) || pressed(6),
        },
    }
}

/// Native builds have no gamepad backend
#[cfg(not(target_arch = "wasm32"))]
pub fn sample(_deadzone: f32) -> InputState {
    InputState::default()
}
