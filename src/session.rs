//! Fixed-timestep driver.
//!
//! Real elapsed time accumulates as tick debt; each whole unit of debt buys
//! exactly one simulation step. A stalled frame catches up with several
//! ticks before the host redraws, a fast one may run none. Rendering is the
//! host's separate, uncapped concern.

use crate::audio::AudioService;
use crate::consts::TICK_DT;
use crate::input::InputState;
use crate::sim::{self, GameState};

pub struct Session {
    pub state: GameState,
    /// Outstanding simulation time, in ticks
    debt: f64,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self { state, debt: 0.0 }
    }

    /// Consume `elapsed` seconds of real time, running one full simulation
    /// step per unit of accumulated debt. Input is re-snapshotted between
    /// steps so one-shot edges land on a single tick even during catch-up.
    /// Returns how many ticks ran.
    pub fn advance(
        &mut self,
        elapsed: f64,
        input: &mut InputState,
        audio: &mut dyn AudioService,
    ) -> u32 {
        self.debt += elapsed / TICK_DT;
        let mut ticks = 0;
        while self.debt >= 1.0 {
            self.debt -= 1.0;
            let snapshot = input.snapshot();
            sim::tick(&mut self.state, &snapshot, audio);
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::consts::DEFAULT_SEED;

    fn new_session() -> Session {
        Session::new(GameState::new(DEFAULT_SEED))
    }

    #[test]
    fn test_debt_buys_whole_ticks_and_keeps_the_change() {
        let mut session = new_session();
        let mut input = InputState::new();
        let mut audio = NullAudio;

        assert_eq!(session.advance(2.5 * TICK_DT, &mut input, &mut audio), 2);
        // 0.5 ticks of debt carried over
        assert_eq!(session.advance(0.6 * TICK_DT, &mut input, &mut audio), 1);
        assert_eq!(session.advance(0.0, &mut input, &mut audio), 0);
    }

    #[test]
    fn test_catch_up_after_a_stall() {
        let mut session = new_session();
        let mut input = InputState::new();
        let mut audio = NullAudio;

        // A long stall is paid back as many ticks in one call
        let ticks = session.advance(30.0 * TICK_DT, &mut input, &mut audio);
        assert_eq!(ticks, 30);
        assert_eq!(session.state.swarm.timer, 30);
    }

    #[test]
    fn test_one_shot_edges_land_on_a_single_tick() {
        let mut session = new_session();
        let mut input = InputState::new();
        let mut audio = NullAudio;

        input.release_fire();
        session.advance(5.0 * TICK_DT, &mut input, &mut audio);
        // Five ticks ran but only the first saw the fire edge
        assert_eq!(session.state.bullets.len(), 1);
    }
}
