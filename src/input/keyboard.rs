//! Keyboard state tracking
//!
//! Listens for keydown/keyup on the window and keeps a live set of
//! pressed key codes; `sample` turns that set into an input snapshot.
//! Arrows/WASD move, Space/X shoot, Z/LeftShift jump.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::sim::{Buttons, InputState};

pub struct Keyboard {
    keys: Rc<RefCell<HashSet<String>>>,
}

impl Keyboard {
    /// Attach keydown/keyup listeners to the window. The listeners live
    /// for the page lifetime.
    pub fn attach(window: &web_sys::Window) -> Self {
        let keys = Rc::new(RefCell::new(HashSet::new()));

        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                keys.borrow_mut().insert(event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let keys = keys.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                keys.borrow_mut().remove(&event.code());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Self { keys }
    }

    fn is_pressed(&self, code: &str) -> bool {
        self.keys.borrow().contains(code)
    }

    /// Snapshot the current key set as an input state
    pub fn sample(&self) -> InputState {
        let mut movement = Vec2::ZERO;
        if self.is_pressed("ArrowLeft") || self.is_pressed("KeyA") {
            movement.x = -1.0;
        }
        if self.is_pressed("ArrowRight") || self.is_pressed("KeyD") {
            movement.x = 1.0;
        }
        if self.is_pressed("ArrowUp") || self.is_pressed("KeyW") {
            movement.y = -1.0;
        }
        if self.is_pressed("ArrowDown") || self.is_pressed("KeyS") {
            movement.y = 1.0;
        }

        InputState {
            movement,
            buttons: Buttons {
                shoot: self.is_pressed("Space") || self.is_pressed("KeyX"),
                jump: self.is_pressed("KeyZ") || self.is_pressed("ShiftLeft"),
            },
        }
    }
}
