//! CanvasRenderingContext2d-backed renderer

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{BACKGROUND_COLOR, HUD_COLOR, HUD_FONT, PLAYER_COLOR, drone_color, projectile_color};
use crate::Settings;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Acquire the 2D context. Failure here is fatal at startup - there
    /// is nothing to draw on.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, ARENA_WIDTH as f64, ARENA_HEIGHT as f64);
    }

    /// Draw one frame from the given snapshot
    pub fn draw(&self, state: &GameState, settings: &Settings, fps: u32) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        // Background
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, ARENA_WIDTH as f64, ARENA_HEIGHT as f64);

        // Player
        let player = &state.player;
        ctx.set_fill_style_str(PLAYER_COLOR);
        ctx.fill_rect(
            player.position.x as f64,
            player.position.y as f64,
            player.size.x as f64,
            player.size.y as f64,
        );

        // Drones: left-pointing triangles (they fly left)
        for drone in &state.drones {
            let x = drone.position.x as f64;
            let y = drone.position.y as f64;
            let w = drone.size.x as f64;
            let h = drone.size.y as f64;

            ctx.set_fill_style_str(drone_color(drone.kind));
            ctx.begin_path();
            ctx.move_to(x, y + h / 2.0);
            ctx.line_to(x + w, y);
            ctx.line_to(x + w, y + h);
            ctx.close_path();
            ctx.fill();
        }

        // Projectiles
        for projectile in &state.projectiles {
            ctx.set_fill_style_str(projectile_color(projectile.owner));
            ctx.fill_rect(
                projectile.position.x as f64,
                projectile.position.y as f64,
                projectile.size.x as f64,
                projectile.size.y as f64,
            );
        }

        // HUD
        if settings.show_hud {
            ctx.set_fill_style_str(HUD_COLOR);
            ctx.set_font(HUD_FONT);
            ctx.fill_text(&format!("Score: {}", state.score), 10.0, 30.0)?;
            ctx.fill_text(&format!("Health: {}", state.player.health), 10.0, 50.0)?;
            ctx.fill_text(&format!("Drones: {}", state.drones.len()), 10.0, 70.0)?;
            ctx.fill_text(
                &format!("Formations: {}", state.spawning.active_formations.len()),
                10.0,
                90.0,
            )?;
            if settings.show_fps {
                ctx.fill_text(&format!("{fps} fps"), ARENA_WIDTH as f64 - 70.0, 30.0)?;
            }
            if state.is_paused {
                ctx.fill_text("PAUSED", ARENA_WIDTH as f64 / 2.0 - 30.0, 30.0)?;
            }
        }

        Ok(())
    }
}
