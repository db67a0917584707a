//! Rigid body kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kinematic state of a rigid body: linear and angular position, velocity,
/// and acceleration. Mass is carried for future response work but plays no
/// part in collision detection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Orientation in radians, counter-clockwise
    pub angle: f32,
    /// Angular velocity, radians/second
    pub angular_velocity: f32,
    /// Angular acceleration, radians/second²
    pub angular_acceleration: f32,
    pub mass: f32,
}

impl RigidBody {
    /// A body at the origin with zeroed motion
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the body by one explicit Euler step of `dt` seconds:
    /// accelerations feed velocities, velocities feed positions.
    pub fn advance(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.angular_velocity += self.angular_acceleration * dt;
        self.angle += self.angular_velocity * dt;
    }
}
