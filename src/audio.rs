//! Fire-and-forget sound effect seam.
//!
//! The simulation names sounds; hosts decide what, if anything, actually
//! plays. Playback is non-blocking and non-looping, and failures never
//! surface back into the tick.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Player cannon fires
    PlayerShoot,
    /// An alien dies
    AlienKilled,
    /// The player is hit
    Explosion,
    /// Formation march, four-voice loop
    March1,
    March2,
    March3,
    March4,
}

/// The march voices in playback order
pub const MARCH_VOICES: [Sound; 4] = [Sound::March1, Sound::March2, Sound::March3, Sound::March4];

pub trait AudioService {
    /// Start `sound`, best-effort.
    fn play(&mut self, sound: Sound);
}

/// Discards every request. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}
