//! Threaded simulation driver
//!
//! `Simulation` owns the world behind a mutex and ticks it from an
//! `IntervalThread`. An external renderer reads a consistent snapshot through
//! `for_each_asteroid` at whatever cadence it likes; reader and tick thread
//! serialize exclusively through the state lock, so a mid-tick world is never
//! observable. Construction is staged: the world is fully built before the
//! driver thread starts.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::array::ArrayError;
use crate::clock::{Clock, MonotonicClock};
use crate::config::SimConfig;
use crate::interval::IntervalThread;
use crate::sim::{tick, Polygon, WorldState};

/// Failure modes when bringing a simulation up
#[derive(Debug, Error)]
pub enum SimError {
    #[error("world allocation failed: {0}")]
    Alloc(#[from] ArrayError),
    #[error("failed to spawn tick thread: {0}")]
    Spawn(#[from] std::io::Error),
}

struct Inner {
    state: Mutex<WorldState>,
    clock: Box<dyn Clock>,
    /// Timestamp of the previous tick. Guarded by its own narrow lock so the
    /// tick thread reads elapsed time without touching the state lock.
    last_tick: Mutex<Option<Duration>>,
}

impl Inner {
    /// Seconds since the previous call; zero on the first tick
    fn elapsed_secs(&self) -> f32 {
        let now = self.clock.now();
        let mut last = self.last_tick.lock().expect("tick timestamp lock poisoned");
        let dt = match *last {
            Some(previous) => now.saturating_sub(previous),
            None => Duration::ZERO,
        };
        *last = Some(now);
        dt.as_secs_f32()
    }
}

/// A running simulation: world state plus the thread ticking it
pub struct Simulation {
    inner: Arc<Inner>,
    driver: Option<IntervalThread>,
}

impl Simulation {
    /// Spawn a randomly populated simulation on the monotonic system clock
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!(
            "creating simulation: {} asteroids, seed {seed}, tick every {}ms",
            config.asteroid_count, config.tick_interval_ms
        );
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = WorldState::populate(config, &mut rng)?;
        Self::start(state, config, Box::new(MonotonicClock::new()))
    }

    /// Start ticking an already-built world on an injected clock.
    ///
    /// This is the staged-construction entry point: the world handed in is
    /// complete, so the first tick can never observe partial state. It also
    /// lets tests run seeded worlds on a manual clock.
    pub fn start(
        state: WorldState,
        config: &SimConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SimError> {
        let inner = Arc::new(Inner {
            state: Mutex::new(state),
            clock,
            last_tick: Mutex::new(None),
        });

        let worker = Arc::clone(&inner);
        let driver = IntervalThread::spawn(
            "sim-tick",
            Duration::from_millis(config.tick_interval_ms),
            move || {
                let dt = worker.elapsed_secs();
                let mut state = worker.state.lock().expect("simulation state lock poisoned");
                tick(&mut state, dt);
            },
        )?;

        Ok(Self {
            inner,
            driver: Some(driver),
        })
    }

    /// Visit every asteroid under the lock, in creation order, with its
    /// world polygon and collision flag. The sole read path for renderers.
    pub fn for_each_asteroid(&self, visit: impl FnMut(&Polygon, bool)) {
        let state = self.inner.state.lock().expect("simulation state lock poisoned");
        state.for_each(visit);
    }

    /// Flip the pause state; returns the new value
    pub fn toggle_pause(&self) -> bool {
        let mut state = self.inner.state.lock().expect("simulation state lock poisoned");
        state.paused = !state.paused;
        debug!("simulation {}", if state.paused { "paused" } else { "resumed" });
        state.paused
    }

    pub fn is_paused(&self) -> bool {
        self.inner.state.lock().expect("simulation state lock poisoned").paused
    }

    /// Number of asteroids in the world
    pub fn asteroid_count(&self) -> usize {
        self.inner.state.lock().expect("simulation state lock poisoned").len()
    }

    /// Stop the tick thread and join it. Idempotent; no tick runs after this
    /// returns. Also invoked on drop.
    pub fn stop(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            driver.stop();
            debug!("simulation stopped");
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.stop();
    }
}
