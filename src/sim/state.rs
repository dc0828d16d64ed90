//! Entity model and aggregate game state.
//!
//! Everything the per-tick simulation mutates lives here, as fields of one
//! owned value passed explicitly into `tick` - no ambient globals. Aliens
//! and bullets are slots in preallocated collections; waves re-lay them in
//! place rather than reallocating.

use crate::consts::*;
use crate::sprites::{self, Sprite, SpriteAnimation};

use super::bullets::Bullets;
use super::rng::Xorshift32;

/// Alien strength tier. Encodes both the sprite set and the point value.
/// `Dead` is terminal: a slot never leaves it until the next wave layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienKind {
    Dead,
    /// Top row, 40 points
    TierA,
    /// Middle rows, 20 points
    TierB,
    /// Bottom rows, 10 points
    TierC,
}

impl AlienKind {
    /// Tier for a grid row (0 = bottom): two rows of TierC, two of TierB,
    /// TierA on top.
    pub fn from_row(row: usize) -> Self {
        match (5 - row) / 2 + 1 {
            1 => AlienKind::TierA,
            2 => AlienKind::TierB,
            _ => AlienKind::TierC,
        }
    }

    /// Points for a kill. The top tier pays a flat 40; the others fall off
    /// by ten per tier.
    pub fn points(self) -> u32 {
        match self {
            AlienKind::TierA => 40,
            AlienKind::TierB => 20,
            AlienKind::TierC => 10,
            AlienKind::Dead => 0,
        }
    }

    /// Index into `GameState::alien_anims`. Meaningless for `Dead`, which
    /// is never drawn from the tier animations.
    pub fn anim_index(self) -> usize {
        debug_assert!(self != AlienKind::Dead);
        match self {
            AlienKind::Dead | AlienKind::TierA => 0,
            AlienKind::TierB => 1,
            AlienKind::TierC => 2,
        }
    }

    /// March frames for this tier.
    pub fn frames(self) -> &'static [Sprite; 2] {
        match self {
            AlienKind::Dead | AlienKind::TierA => &sprites::TIER_A_FRAMES,
            AlienKind::TierB => &sprites::TIER_B_FRAMES,
            AlienKind::TierC => &sprites::TIER_C_FRAMES,
        }
    }

    /// First march frame; the dimension reference for layout and fire spawn.
    pub fn base_sprite(self) -> &'static Sprite {
        &self.frames()[0]
    }

    /// Horizontal shift that centers this tier's sprite under the wider
    /// death burst.
    pub fn death_recenter(self) -> i32 {
        (sprites::ALIEN_DEATH.width - self.base_sprite().width) / 2
    }
}

/// One slot in the swarm grid. Slots are never removed; `kind` goes `Dead`
/// and stays there for the rest of the wave.
#[derive(Debug, Clone, Copy)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienKind,
}

impl Alien {
    /// Kill transition: recenter under the death burst, then mark `Dead`.
    /// Kinds only ever move forward to `Dead`.
    pub fn kill(&mut self) {
        debug_assert!(self.kind != AlienKind::Dead);
        self.x -= self.kind.death_recenter();
        self.kind = AlienKind::Dead;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// 0 means game over
    pub lives: u32,
}

/// Formation kinematics. `offset` is the horizontal displacement of the
/// formation; the bounds shrink-track the living flanks as columns die.
#[derive(Debug, Clone, Copy)]
pub struct Swarm {
    pub offset: i32,
    /// Signed horizontal step per advance
    pub dir: i32,
    pub max_offset: i32,
    /// Ticks between advances; lower is faster
    pub cadence: u32,
    /// Ticks since the last advance
    pub timer: u32,
    /// Which of the four march voices plays next
    pub move_voice: usize,
}

/// Complete game state, created once and re-armed wave by wave.
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    /// 11x5 grid slots in column-major order (`col * 5 + row`)
    pub aliens: Vec<Alien>,
    /// Parallel to `aliens`: remaining ticks of death-burst visibility
    pub death_counters: Vec<u8>,
    pub bullets: Bullets,
    pub player: Player,
    pub swarm: Swarm,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Kills in the current wave
    pub aliens_killed: usize,
    /// Halve the cadence before the next advance
    pub pending_speedup: bool,
    /// Latched reset request. Survives across ticks - the game-over freeze
    /// can hold it until the reset path consumes it.
    pub reset_pending: bool,
    pub rng: Xorshift32,
    /// March animation clock per tier
    pub alien_anims: [SpriteAnimation; 3],
    pub bullet_anim: SpriteAnimation,
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        let slots = SWARM_COLS * SWARM_ROWS;
        let mut state = Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            aliens: vec![
                Alien {
                    x: 0,
                    y: 0,
                    kind: AlienKind::Dead
                };
                slots
            ],
            death_counters: vec![0; slots],
            bullets: Bullets::new(),
            player: Player {
                x: PLAYER_START_X,
                y: PLAYER_START_Y,
                lives: START_LIVES,
            },
            swarm: Swarm {
                offset: SWARM_START_OFFSET,
                dir: SWARM_START_DIR,
                max_offset: SWARM_START_MAX_OFFSET,
                cadence: START_CADENCE,
                timer: 0,
                move_voice: 0,
            },
            score: 0,
            high_score: 0,
            level: 1,
            aliens_killed: 0,
            pending_speedup: false,
            reset_pending: false,
            rng: Xorshift32::new(seed),
            alien_anims: [
                SpriteAnimation::new(&sprites::TIER_A_FRAMES, START_CADENCE),
                SpriteAnimation::new(&sprites::TIER_B_FRAMES, START_CADENCE),
                SpriteAnimation::new(&sprites::TIER_C_FRAMES, START_CADENCE),
            ],
            bullet_anim: SpriteAnimation::new(&sprites::ALIEN_BULLET_FRAMES, 5),
        };
        state.lay_out_wave();
        state
    }

    /// Place the grid for the current wave. Column-major slot order is
    /// load-bearing: the first living slot is always in the leftmost living
    /// column, which the bounds tracking scans for.
    pub fn lay_out_wave(&mut self) {
        for col in 0..SWARM_COLS {
            for row in 0..SWARM_ROWS {
                let kind = AlienKind::from_row(row);
                let slot = col * SWARM_ROWS + row;
                self.aliens[slot] = Alien {
                    x: SWARM_COL_SPACING * col as i32 + self.swarm.offset + kind.death_recenter(),
                    y: SWARM_ROW_SPACING * row as i32 + SWARM_BASE_Y,
                    kind,
                };
                self.death_counters[slot] = DEATH_TICKS;
            }
        }
    }

    /// Advance interval for a level: a steep ramp over the first eight
    /// waves, then a shallow taper, saturating at the fastest interval.
    pub fn cadence_for_level(level: u32) -> u32 {
        if level <= 8 {
            120 - level * 10
        } else if level <= 36 {
            120 - 80 - level
        } else {
            4
        }
    }

    /// Re-arm everything for the next wave. Shared by wave clear and the
    /// manual reset path (which forces `level` to 0 first so this bumps it
    /// back to 1).
    pub fn next_wave(&mut self) {
        self.pending_speedup = true;
        self.level += 1;
        self.bullets.clear();
        self.swarm.max_offset = SWARM_START_MAX_OFFSET;
        self.swarm.cadence = Self::cadence_for_level(self.level);
        self.swarm.offset = SWARM_START_OFFSET;
        self.swarm.dir = SWARM_START_DIR;
        self.swarm.timer = 0;
        self.aliens_killed = 0;
        self.lay_out_wave();
    }

    /// Uniformly pick a living alien slot by rejection sampling. Callers
    /// must ensure at least one alien is alive; with none left this would
    /// never terminate, which is a programming error rather than a runtime
    /// condition.
    pub fn pick_live_alien(&mut self) -> usize {
        debug_assert!(self.aliens_killed < self.aliens.len());
        loop {
            let draw = self.aliens.len() as f64 * self.rng.uniform();
            let slot = (draw as usize).min(self.aliens.len() - 1);
            if self.aliens[slot].kind != AlienKind::Dead {
                return slot;
            }
        }
    }
}
