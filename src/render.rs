//! Renderer seam and scene composition.
//!
//! The simulation never draws. `draw_scene` translates a `GameState` into
//! an ordered stream of calls against the `Renderer` trait and hosts
//! rasterize and present however they like; calls cannot fail and return
//! nothing. Glyph art for text and digits is host data - only the cell
//! dimensions live here, for layout.

use crate::sim::{AlienKind, GameState};
use crate::sprites::{self, Sprite, rgb};

/// HUD glyph cell, layout only
pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;

const TEXT_BORDER: i32 = 10;

pub const CLEAR_COLOR: u32 = rgb(0, 0, 30);
pub const HUD_COLOR: u32 = rgb(255, 0, 0);
pub const PLAYER_COLOR: u32 = rgb(0, 255, 0);
pub const ALIEN_BULLET_COLOR: u32 = rgb(255, 255, 255);

pub trait Renderer {
    fn clear(&mut self, color: u32);
    /// Draw `sprite` with its bottom-left at (x, y), y growing upward.
    /// A `color` of 0 keeps the sprite's own color.
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: u32);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: u32);
    /// Digits drawn most significant first
    fn draw_number(&mut self, value: u32, x: i32, y: i32, color: u32);
    /// Fill one pixel row across the playfield (the ground line)
    fn fill_row(&mut self, y: i32, color: u32);
    fn present(&mut self);
}

/// Swallows every call. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self, _color: u32) {}
    fn draw_sprite(&mut self, _sprite: &Sprite, _x: i32, _y: i32, _color: u32) {}
    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _color: u32) {}
    fn draw_number(&mut self, _value: u32, _x: i32, _y: i32, _color: u32) {}
    fn fill_row(&mut self, _y: i32, _color: u32) {}
    fn present(&mut self) {}
}

/// Rendered width of `len` glyphs with their 1 px gaps.
fn text_width(len: i32) -> i32 {
    len * (GLYPH_WIDTH + 1)
}

fn decimal_digits(mut value: u32) -> i32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Issue one frame's draw calls: HUD, playfield, game-over overlay. Ends
/// with `present`, once, after all due simulation for the pass.
pub fn draw_scene(state: &GameState, r: &mut dyn Renderer) {
    r.clear(CLEAR_COLOR);

    // Score block on the left, numbers centered under their caption
    let score_text_w = text_width(5);
    let score_w = text_width(decimal_digits(state.score));
    r.draw_text(
        "SCORE",
        TEXT_BORDER,
        state.height - GLYPH_HEIGHT - 7,
        HUD_COLOR,
    );
    r.draw_number(
        state.score,
        TEXT_BORDER + (score_text_w / 2 - score_w / 2),
        state.height - 2 * GLYPH_HEIGHT - 12,
        HUD_COLOR,
    );

    // High score block on the right
    let high_text_w = text_width(10);
    let high_w = text_width(decimal_digits(state.high_score));
    r.draw_text(
        "HIGH SCORE",
        state.width - TEXT_BORDER - high_text_w,
        state.height - GLYPH_HEIGHT - 7,
        HUD_COLOR,
    );
    r.draw_number(
        state.high_score,
        (state.width - high_w) - (high_text_w / 2 - high_w / 2) - TEXT_BORDER,
        state.height - 2 * GLYPH_HEIGHT - 12,
        HUD_COLOR,
    );

    let level_text = format!("LEVEL {}", state.level);
    let level_w = text_width(level_text.len() as i32);
    r.draw_text(
        &level_text,
        state.width - level_w - TEXT_BORDER,
        GLYPH_HEIGHT,
        HUD_COLOR,
    );

    // A dead cannon freezes the playfield under the game-over banner
    if state.player.lives == 0 {
        r.draw_text(
            "GAME OVER",
            state.width / 2 - 30,
            state.height / 2,
            HUD_COLOR,
        );
        r.present();
        return;
    }

    // Lives counter plus one cannon icon per spare life
    r.draw_number(state.player.lives, 4, 7, HUD_COLOR);
    let mut xp = 11 + GLYPH_WIDTH;
    for _ in 1..state.player.lives {
        r.draw_sprite(&sprites::PLAYER, xp, 7, PLAYER_COLOR);
        xp += sprites::PLAYER.width + 2;
    }

    r.fill_row(16, PLAYER_COLOR);

    for (slot, alien) in state.aliens.iter().enumerate() {
        if state.death_counters[slot] == 0 {
            continue;
        }
        if alien.kind == AlienKind::Dead {
            r.draw_sprite(&sprites::ALIEN_DEATH, alien.x, alien.y, 0);
        } else {
            let sprite = state.alien_anims[alien.kind.anim_index()].current();
            r.draw_sprite(sprite, alien.x, alien.y, 0);
        }
    }

    for bullet in state.bullets.iter() {
        if bullet.dir > 0 {
            r.draw_sprite(&sprites::PLAYER_BULLET, bullet.x, bullet.y, PLAYER_COLOR);
        } else {
            r.draw_sprite(
                state.bullet_anim.current(),
                bullet.x,
                bullet.y,
                ALIEN_BULLET_COLOR,
            );
        }
    }

    r.draw_sprite(&sprites::PLAYER, state.player.x, state.player.y, PLAYER_COLOR);

    r.present();
}
