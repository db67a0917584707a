//! Asteroid Field - a concurrent 2D rigid-body drift simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, polygon geometry, SAT collision)
//! - `array`: Growable contiguous buffer backing all simulation collections
//! - `simulation`: Threaded driver that ticks the world on a fixed interval
//! - `interval`: Reusable fixed-interval worker thread
//! - `clock`: Injectable monotonic time source
//! - `config`: Data-driven simulation parameters

pub mod array;
pub mod clock;
pub mod config;
pub mod interval;
pub mod sim;
pub mod simulation;

pub use array::{ArrayError, DynArray};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::SimConfig;
pub use interval::IntervalThread;
pub use simulation::{SimError, Simulation};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default interval between simulation ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 7;

    /// Half-extent of the reflective bounding square
    pub const WORLD_BOUND: f32 = 5.0;
    /// Half-extent of the square asteroids spawn within
    pub const SPAWN_EXTENT: f32 = 5.0;

    /// Circumscribed radius of a freshly generated asteroid
    pub const ASTEROID_RADIUS: f32 = 1.0;
    /// Vertex count range for generated asteroids (inclusive)
    pub const MIN_VERTICES: u32 = 3;
    pub const MAX_VERTICES: u32 = 10;

    /// Spawn speed range, units/second (uniform in ±MAX_SPEED per axis)
    pub const MAX_SPEED: f32 = 4.0;
    /// Spawn spin range, radians/second (uniform in ±MAX_SPIN)
    pub const MAX_SPIN: f32 = 4.0;

    /// Default asteroid count for the demo binary
    pub const DEFAULT_ASTEROIDS: usize = 12;
}

/// Rotate a vector counter-clockwise by `theta` radians
#[inline]
pub fn rotate(v: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Counter-clockwise perpendicular of a vector
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Projection of `u` onto `v` (the component of `u` along `v`)
#[inline]
pub fn project(u: Vec2, v: Vec2) -> Vec2 {
    v * (u.dot(v) / v.length_squared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_perp_is_ccw() {
        assert_eq!(perp(Vec2::X), Vec2::Y);
        assert_eq!(perp(Vec2::Y), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_project_onto_axis() {
        let p = project(Vec2::new(3.0, 4.0), Vec2::X * 10.0);
        assert!((p.x - 3.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }
}
