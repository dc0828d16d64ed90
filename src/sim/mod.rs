//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Entities are slots in preallocated collections, flipped by value
//! - No rendering or platform dependencies; adapters come in through
//!   narrow traits and retain nothing across calls

pub mod bullets;
pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use bullets::{Bullet, Bullets};
pub use collision::sprites_overlap;
pub use rng::Xorshift32;
pub use state::{Alien, AlienKind, GameState, Player, Swarm};
pub use tick::{TickInput, tick};
