//! User preferences
//!
//! Persisted to LocalStorage on wasm32; native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::GAMEPAD_DEADZONE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the text HUD (score, health, entity counts)
    pub show_hud: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Analog stick deadzone, 0.0-0.9
    pub gamepad_deadzone: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            show_fps: true,
            gamepad_deadzone: GAMEPAD_DEADZONE,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "drone_defense_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
