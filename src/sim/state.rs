//! World state: the asteroid collection and its collision flags
//!
//! The asteroid array and the flag array are parallel; `colliding[i]` is true
//! iff asteroid `i` overlapped at least one other asteroid during the most
//! recent tick. The arrays have equal length at every point outside an
//! in-progress mutation.

use rand::Rng;

use super::asteroid::Asteroid;
use super::polygon::Polygon;
use crate::array::{ArrayError, DynArray};
use crate::config::SimConfig;

/// Everything the simulation mutates per tick
#[derive(Debug, Default)]
pub struct WorldState {
    pub(crate) asteroids: DynArray<Asteroid>,
    pub(crate) colliding: DynArray<bool>,
    /// While paused, ticks stop integrating motion
    pub paused: bool,
    /// Half-extent of the reflective bounding square
    pub bound: f32,
}

impl WorldState {
    /// An empty world with the given bounding half-extent
    pub fn new(bound: f32) -> Self {
        Self {
            asteroids: DynArray::new(),
            colliding: DynArray::new(),
            paused: false,
            bound,
        }
    }

    /// Build a world populated with randomly spawned asteroids
    pub fn populate(config: &SimConfig, rng: &mut impl Rng) -> Result<Self, ArrayError> {
        let mut state = Self::new(config.world_bound);
        state.asteroids.reserve(config.asteroid_count)?;
        state.colliding.reserve(config.asteroid_count)?;
        for _ in 0..config.asteroid_count {
            state.push_asteroid(Asteroid::random(config, rng)?)?;
        }
        Ok(state)
    }

    /// Add an asteroid, keeping the flag array parallel. On failure the
    /// world is unchanged.
    pub fn push_asteroid(&mut self, asteroid: Asteroid) -> Result<(), ArrayError> {
        self.asteroids.push(asteroid)?;
        if let Err(err) = self.colliding.push(false) {
            self.asteroids.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Number of asteroids
    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    /// The asteroids in creation order
    pub fn asteroids(&self) -> &[Asteroid] {
        self.asteroids.as_slice()
    }

    /// Mutable access to one asteroid (scenario setup)
    pub fn asteroid_mut(&mut self, index: usize) -> Option<&mut Asteroid> {
        self.asteroids.get_mut(index)
    }

    /// Collision flags from the most recent tick, parallel to `asteroids()`
    pub fn collision_flags(&self) -> &[bool] {
        self.colliding.as_slice()
    }

    /// Visit every asteroid in creation order with its world polygon and
    /// collision flag. This is the read path renderers use.
    pub fn for_each(&self, mut visit: impl FnMut(&Polygon, bool)) {
        for (asteroid, &hit) in self.asteroids.iter().zip(self.colliding.iter()) {
            visit(asteroid.world(), hit);
        }
    }
}
