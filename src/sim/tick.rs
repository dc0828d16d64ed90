//! Per-tick simulation step.
//!
//! One call advances the whole game by 1/60 s: projectiles, the pending
//! speed-up, death counters, the formation advance and return fire, the
//! animation clocks, player movement, progression, and the player's own
//! fire input - in that order. The ordering is load-bearing; several rules
//! (the bullet short-circuit, the wave-clear speed-up) only hold in this
//! sequence.

use crate::audio::{AudioService, MARCH_VOICES, Sound};
use crate::consts::*;
use crate::sprites;

use super::collision::sprites_overlap;
use super::state::{AlienKind, GameState};

/// Input intents for a single tick. The one-shot edges are consumed by the
/// tick they are handed to; the move axis is level-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Lateral intent: presses increment/decrement, releases undo them
    pub move_axis: i32,
    pub fire: bool,
    pub reset: bool,
    pub force_game_over: bool,
}

/// Advance the game by one fixed timestep. Adapters are called synchronously
/// and must not retain anything across the call.
pub fn tick(state: &mut GameState, input: &TickInput, audio: &mut dyn AudioService) {
    if input.reset {
        state.reset_pending = true;
    }
    if input.force_game_over {
        state.player.lives = 0;
    }

    // Game over freezes the simulation. A pending reset plants the one-life
    // sentinel so the next tick runs far enough to reach the reset path.
    if state.player.lives == 0 {
        if state.reset_pending {
            state.player.lives = 1;
        }
        return;
    }

    let mut fire = input.fire;

    simulate_bullets(state, audio);

    if state.pending_speedup {
        state.pending_speedup = false;
        state.swarm.cadence /= 2;
        for anim in &mut state.alien_anims {
            anim.retime(state.swarm.cadence);
        }
    }

    // Death counters run down while the burst sprite is on screen
    for (alien, counter) in state.aliens.iter().zip(state.death_counters.iter_mut()) {
        if alien.kind == AlienKind::Dead && *counter > 0 {
            *counter -= 1;
        }
    }

    if state.swarm.timer >= state.swarm.cadence {
        advance_swarm(state, audio);
    }

    for anim in &mut state.alien_anims {
        anim.advance();
    }
    state.bullet_anim.advance();

    state.swarm.timer += 1;

    move_player(state, input.move_axis);

    if state.aliens_killed < state.aliens.len() && !state.reset_pending {
        if state.score > state.high_score {
            state.high_score = state.score;
        }
        track_bounds(state);
    } else {
        if state.reset_pending {
            state.reset_pending = false;
            state.player.lives = START_LIVES;
            state.score = 0;
            fire = false;
            state.level = 0;
        }
        state.next_wave();
    }

    if fire
        && state.bullets.try_spawn(
            state.player.x + sprites::PLAYER.width / 2,
            state.player.y + sprites::PLAYER.height,
            PLAYER_BULLET_SPEED,
        )
    {
        audio.play(Sound::PlayerShoot);
    }
}

/// One pass over the live bullets. Indexing is manual because removals swap
/// the last slot in: a swapped-in bullet is not simulated until the next
/// tick, and a hit on the player aborts the rest of the pass outright.
fn simulate_bullets(state: &mut GameState, audio: &mut dyn AudioService) {
    let mut bi = 0;
    while bi < state.bullets.len() {
        let bullet = {
            let b = state.bullets.get_mut(bi);
            b.y += b.dir;
            *b
        };
        if bullet.y >= state.height || bullet.y < sprites::PLAYER_BULLET.height {
            state.bullets.remove(bi);
            bi += 1;
            continue;
        }

        if bullet.dir < 0 {
            // Alien shot vs the player
            let hit = sprites_overlap(
                &sprites::ALIEN_BULLET_FRAMES[0],
                bullet.x,
                bullet.y,
                &sprites::PLAYER,
                state.player.x,
                state.player.y,
            );
            if hit {
                audio.play(Sound::Explosion);
                state.player.lives -= 1;
                state.bullets.remove(bi);
                // The remaining bullets skip this tick; see DESIGN.md
                // before touching.
                return;
            }
        } else {
            // Player shot vs every other bullet first. The check uses the
            // alien-shot rect regardless of the other's ownership, so close
            // player shots can annihilate each other too.
            let mut annihilated = false;
            for bj in 0..state.bullets.len() {
                if bj == bi {
                    continue;
                }
                let other = state.bullets.get(bj);
                if sprites_overlap(
                    &sprites::PLAYER_BULLET,
                    bullet.x,
                    bullet.y,
                    &sprites::ALIEN_BULLET_FRAMES[0],
                    other.x,
                    other.y,
                ) {
                    state.bullets.remove_pair(bi, bj);
                    annihilated = true;
                    break;
                }
            }
            if annihilated {
                bi += 1;
                continue;
            }

            // Then vs the swarm
            for ai in 0..state.aliens.len() {
                let kind = state.aliens[ai].kind;
                if kind == AlienKind::Dead {
                    continue;
                }
                let alien = state.aliens[ai];
                let alien_sprite = state.alien_anims[kind.anim_index()].current();
                if sprites_overlap(
                    &sprites::PLAYER_BULLET,
                    bullet.x,
                    bullet.y,
                    alien_sprite,
                    alien.x,
                    alien.y,
                ) {
                    state.score += kind.points();
                    state.aliens[ai].kill();
                    state.bullets.remove(bi);
                    state.aliens_killed += 1;
                    audio.play(Sound::AlienKilled);
                    if state.aliens_killed % SPEEDUP_KILL_INTERVAL == 0 {
                        state.pending_speedup = true;
                    }
                    break;
                }
            }
        }
        bi += 1;
    }
}

/// Shift the whole formation one step, bouncing off the tracked bounds,
/// then let one random survivor return fire. The left bounce also drops the
/// formation a row; the right bounce does not - the asymmetry is the game.
fn advance_swarm(state: &mut GameState, audio: &mut dyn AudioService) {
    audio.play(MARCH_VOICES[state.swarm.move_voice]);
    state.swarm.move_voice = (state.swarm.move_voice + 1) % MARCH_VOICES.len();
    state.swarm.timer = 0;

    if state.swarm.offset + state.swarm.dir < 0 {
        state.swarm.dir = -state.swarm.dir;
        for alien in &mut state.aliens {
            alien.y -= DESCENT_STEP;
        }
    } else if state.swarm.offset > state.swarm.max_offset - state.swarm.dir {
        state.swarm.dir = -state.swarm.dir;
    }
    state.swarm.offset += state.swarm.dir;
    for alien in &mut state.aliens {
        alien.x += state.swarm.dir;
    }

    if state.aliens_killed < state.aliens.len() {
        let shooter = state.pick_live_alien();
        let alien = state.aliens[shooter];
        let sprite = alien.kind.base_sprite();
        state.bullets.try_spawn(
            alien.x + sprite.width / 2,
            alien.y - sprites::ALIEN_BULLET_FRAMES[0].height,
            ALIEN_BULLET_SPEED,
        );
    }
}

fn move_player(state: &mut GameState, move_axis: i32) {
    let step = 2 * move_axis;
    if step == 0 {
        return;
    }
    if state.player.x + sprites::PLAYER.width + step >= state.width {
        state.player.x = state.width - sprites::PLAYER.width;
    } else if state.player.x + step <= 0 {
        state.player.x = 0;
    } else {
        state.player.x += step;
    }
}

/// Shrink-track the living formation's extent. Column-major slot order
/// means the first living slot sits in the leftmost living column and the
/// last in the rightmost; the scans have no bounds guard because the caller
/// guarantees a survivor.
fn track_bounds(state: &mut GameState) {
    let mut ai = 0;
    while state.aliens[ai].kind == AlienKind::Dead {
        ai += 1;
    }
    let min_pos = state.aliens[ai].x - state.aliens[ai].kind.death_recenter();
    if min_pos > state.swarm.offset {
        state.swarm.offset = min_pos;
    }

    let mut ai = state.aliens.len() - 1;
    while state.aliens[ai].kind == AlienKind::Dead {
        ai -= 1;
    }
    let max_pos = state.width - state.aliens[ai].x - sprites::ALIEN_DEATH.width + min_pos;
    if max_pos > state.swarm.max_offset {
        state.swarm.max_offset = max_pos;
    }

    assert!(
        state.swarm.max_offset <= state.width,
        "swarm bound {} exceeds playfield width {}",
        state.swarm.max_offset,
        state.width
    );
}
