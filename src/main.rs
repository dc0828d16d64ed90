//! Pixel Invaders entry point.
//!
//! There is no windowing stack here: the binary runs the simulation
//! headless in an attract-mode loop. A scripted pilot sweeps the cannon
//! and fires, the per-second diagnostics the cabinet would put in its
//! title bar go to the log, and the high score is persisted on the way
//! out.

use std::time::Instant;

use pixel_invaders::Session;
use pixel_invaders::audio::NullAudio;
use pixel_invaders::consts::*;
use pixel_invaders::highscore::HighScoreStore;
use pixel_invaders::input::InputState;
use pixel_invaders::render::{NullRenderer, draw_scene};
use pixel_invaders::sim::GameState;

/// Simulated seconds the attract demo runs for
const DEMO_SECONDS: u64 = 120;

/// Minimal attract pilot: sweep side to side on held keys, fire on a fixed
/// period, and feed the reset key if the demo manages to lose the game.
fn pilot(input: &mut InputState, state: &GameState, tick: u64) {
    match tick % 180 {
        0 => input.press_right(),
        90 => {
            input.release_right();
            input.press_left();
        }
        179 => input.release_left(),
        _ => {}
    }
    if tick % 45 == 7 {
        input.release_fire();
    }
    if state.player.lives == 0 && tick % 60 == 30 {
        input.release_reset();
    }
}

fn main() {
    env_logger::init();
    log::info!("pixel-invaders starting (headless attract mode)");

    let store = HighScoreStore::default();
    let mut state = GameState::new(DEFAULT_SEED);
    state.high_score = store.load();

    let mut session = Session::new(state);
    let mut input = InputState::new();
    let mut audio = NullAudio;
    let mut renderer = NullRenderer;

    let started = Instant::now();
    let ticks_per_second = TICK_RATE as u64;

    'demo: for second in 0..DEMO_SECONDS {
        let mut ticks_run = 0;
        for tick_in_second in 0..ticks_per_second {
            pilot(&mut input, &session.state, second * ticks_per_second + tick_in_second);
            ticks_run += session.advance(TICK_DT, &mut input, &mut audio);
            if input.quit_requested() {
                break 'demo;
            }
        }
        draw_scene(&session.state, &mut renderer);
        // The cabinet's title-bar line: rate, cadence, progress
        log::info!(
            "t={:>3}s updates={} cadence={} score={} level={} lives={}",
            second + 1,
            ticks_run,
            session.state.swarm.cadence,
            session.state.score,
            session.state.level,
            session.state.player.lives,
        );
    }

    store.save(session.state.high_score);
    log::info!(
        "attract mode done in {:.2?}: final score {}, high score {}",
        started.elapsed(),
        session.state.score,
        session.state.high_score,
    );
}
