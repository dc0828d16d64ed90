//! Pixel Invaders - a fixed-timestep arcade swarm shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swarm, projectiles, scoring, progression)
//! - `session`: Fixed-timestep driver decoupling simulation from rendering
//! - `render`: Renderer seam and scene composition
//! - `audio`: Fire-and-forget sound effect seam
//! - `input`: Edge-triggered input snapshots
//! - `highscore`: Persisted high score
//! - `sprites`: Shared immutable sprite and animation definitions

pub mod audio;
pub mod highscore;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;
pub mod sprites;

pub use session::Session;
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (60 ticks per second)
    pub const TICK_RATE: f64 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f64 = 1.0 / TICK_RATE;

    /// Playfield dimensions in pixels
    pub const PLAYFIELD_WIDTH: i32 = 224;
    pub const PLAYFIELD_HEIGHT: i32 = 256;

    /// Swarm grid layout
    pub const SWARM_COLS: usize = 11;
    pub const SWARM_ROWS: usize = 5;
    pub const SWARM_COL_SPACING: i32 = 16;
    pub const SWARM_ROW_SPACING: i32 = 17;
    /// y of the bottom grid row at wave start
    pub const SWARM_BASE_Y: i32 = 128;
    /// Horizontal offset of the formation at wave start
    pub const SWARM_START_OFFSET: i32 = 24;
    /// Rightmost offset the full-width formation may reach
    pub const SWARM_START_MAX_OFFSET: i32 =
        PLAYFIELD_WIDTH - SWARM_COL_SPACING * SWARM_COLS as i32 - 3;
    /// Horizontal step per advance at wave start
    pub const SWARM_START_DIR: i32 = 4;
    /// Ticks between swarm advances at wave start
    pub const START_CADENCE: u32 = 120;
    /// Vertical drop when the formation bumps the left edge
    pub const DESCENT_STEP: i32 = 8;
    /// Every this many kills the advance cadence halves
    pub const SPEEDUP_KILL_INTERVAL: usize = 15;

    /// Bullet collection capacity; spawn requests beyond it are dropped
    pub const MAX_BULLETS: usize = 128;
    pub const PLAYER_BULLET_SPEED: i32 = 2;
    pub const ALIEN_BULLET_SPEED: i32 = -2;

    pub const START_LIVES: u32 = 3;
    /// Ticks a dead alien keeps its death burst on screen
    pub const DEATH_TICKS: u8 = 10;

    pub const PLAYER_START_X: i32 = PLAYFIELD_WIDTH / 2 - 5;
    pub const PLAYER_START_Y: i32 = 32;

    /// Default RNG seed
    pub const DEFAULT_SEED: u32 = 13;
}
