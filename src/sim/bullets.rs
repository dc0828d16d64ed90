//! Fixed-capacity unordered bullet storage.
//!
//! Removal swaps the target with the last live slot and shrinks the count:
//! O(1), but indices are not stable across removals within the same pass.
//! Any pass that removes more than one bullet must re-derive its indices
//! after each removal, or go through [`Bullets::remove_pair`], which handles
//! the cases where the doomed indices collide with the slots being swapped
//! in.

use crate::consts::MAX_BULLETS;

/// A projectile slot. `dir` sign encodes ownership (positive = player,
/// moving up; negative = alien, moving down), magnitude the per-tick speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Bullets {
    slots: Vec<Bullet>,
}

impl Bullets {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(MAX_BULLETS),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, i: usize) -> Bullet {
        self.slots[i]
    }

    pub fn get_mut(&mut self, i: usize) -> &mut Bullet {
        &mut self.slots[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter()
    }

    /// Spawn if there is room. A full collection drops the request; that is
    /// the expected steady state under heavy fire, not an error.
    pub fn try_spawn(&mut self, x: i32, y: i32, dir: i32) -> bool {
        if self.slots.len() >= MAX_BULLETS {
            return false;
        }
        self.slots.push(Bullet { x, y, dir });
        true
    }

    /// O(1) removal; the former last bullet now lives at `i`.
    pub fn remove(&mut self, i: usize) {
        self.slots.swap_remove(i);
    }

    /// Remove two bullets in a single compaction step. Filling both holes
    /// from the tail only works when neither doomed index is itself in the
    /// tail, so the three cases below are distinct.
    pub fn remove_pair(&mut self, a: usize, b: usize) {
        assert_ne!(a, b);
        let last = self.slots.len() - 1;
        if b == last {
            self.slots[a] = self.slots[last - 1];
        } else if a == last {
            self.slots[b] = self.slots[last - 1];
        } else {
            self.slots[a.min(b)] = self.slots[last];
            self.slots[a.max(b)] = self.slots[last - 1];
        }
        self.slots.truncate(last - 1);
    }
}
