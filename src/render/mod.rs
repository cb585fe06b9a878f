//! Canvas-2D render pass
//!
//! A read-only pass over `GameState`: scrolling background, floor line,
//! player, obstacles, HUD text, and the game-over overlay. No state
//! mutation happens here.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::Sprites;
use crate::sim::{GameState, ObstacleKind};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, sprites: Sprites) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, sprites })
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) {
        let w = state.viewport_w as f64;
        let h = state.viewport_h as f64;
        let ctx = &self.ctx;

        // Background, drawn twice for a seamless wrap
        let bg_x = state.bg_offset as f64;
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.sprites.background,
            bg_x,
            0.0,
            w,
            h,
        );
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.sprites.background,
            bg_x + w,
            0.0,
            w,
            h,
        );

        // Floor line
        ctx.set_stroke_style_str("#98fb98");
        ctx.set_line_width(4.0);
        ctx.begin_path();
        ctx.move_to(0.0, state.floor_y as f64);
        ctx.line_to(w, state.floor_y as f64);
        ctx.stroke();

        // Player
        let p = &state.player;
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.sprites.player,
            p.pos.x as f64,
            p.pos.y as f64,
            p.width as f64,
            p.height as f64,
        );

        // Obstacles
        for o in &state.obstacles {
            let sprite = match o.kind {
                ObstacleKind::Flower => &self.sprites.flower,
                ObstacleKind::Cloud => &self.sprites.cloud,
            };
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                sprite,
                o.x as f64,
                o.y as f64,
                o.width as f64,
                o.height as f64,
            );
        }

        // HUD
        ctx.set_fill_style_str("#ff69b4");
        ctx.set_font("bold 24px sans-serif");
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&format!("Score: {}", state.score), 20.0, 40.0);
        let _ = ctx.fill_text(&format!("Level: {}", state.level), 20.0, 70.0);
        let _ = ctx.fill_text(&format!("Best: {}", state.best_score), 20.0, 100.0);

        // Game-over overlay
        if state.game_over {
            ctx.set_fill_style_str("rgba(255, 192, 203, 0.85)");
            ctx.fill_rect(0.0, 0.0, w, h);
            ctx.set_fill_style_str("#ff1493");
            ctx.set_text_align("center");
            ctx.set_font("bold 48px sans-serif");
            let _ = ctx.fill_text("Game Over!", w / 2.0, h / 2.0);
            ctx.set_font("bold 24px sans-serif");
            let _ = ctx.fill_text(
                &format!("Final Score: {}", state.score),
                w / 2.0,
                h / 2.0 + 40.0,
            );
            let _ = ctx.fill_text("Press any key to restart", w / 2.0, h / 2.0 + 80.0);
        }
    }
}
