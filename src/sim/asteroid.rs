//! Asteroid entity: a rigid body carrying a polygon shape
//!
//! The shape is fixed in body-local space at creation; a second polygon
//! caches the vertices transformed into world space and is rebuilt on every
//! advance so collision tests and readers never transform on the fly.

use glam::Vec2;
use rand::Rng;

use super::body::RigidBody;
use super::polygon::Polygon;
use crate::array::ArrayError;
use crate::config::SimConfig;

/// A drifting convex polygonal body
#[derive(Debug)]
pub struct Asteroid {
    pub body: RigidBody,
    /// Body-local shape, fixed at creation
    shape: Polygon,
    /// Shape transformed into world space, rebuilt each advance
    world: Polygon,
}

impl Asteroid {
    /// Wrap a body-local shape in a fresh asteroid with zeroed motion
    pub fn new(shape: Polygon) -> Result<Self, ArrayError> {
        let world = shape.try_clone()?;
        let mut asteroid = Self {
            body: RigidBody::new(),
            shape,
            world,
        };
        asteroid.refresh_world();
        Ok(asteroid)
    }

    /// Spawn an asteroid with a random regular shape, position uniform in the
    /// spawn square, and uniform linear and angular velocity.
    pub fn random(config: &SimConfig, rng: &mut impl Rng) -> Result<Self, ArrayError> {
        let shape = Polygon::random_regular(config.asteroid_radius, rng)?;
        let mut asteroid = Self::new(shape)?;

        let extent = config.spawn_extent;
        let speed = config.max_speed;
        asteroid.body.position = Vec2::new(
            rng.random_range(-extent..=extent),
            rng.random_range(-extent..=extent),
        );
        asteroid.body.velocity = Vec2::new(
            rng.random_range(-speed..=speed),
            rng.random_range(-speed..=speed),
        );
        asteroid.body.angular_velocity = rng.random_range(-config.max_spin..=config.max_spin);

        asteroid.refresh_world();
        Ok(asteroid)
    }

    /// Integrate the body by `dt` seconds and rebuild the world-space cache
    pub fn advance(&mut self, dt: f32) {
        self.body.advance(dt);
        self.refresh_world();
    }

    /// The body-local shape
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    /// The world-space vertex cache
    pub fn world(&self) -> &Polygon {
        &self.world
    }

    fn refresh_world(&mut self) {
        self.world
            .set_transformed_from(&self.shape, self.body.angle, self.body.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_world_cache_tracks_body() {
        let shape = Polygon::from_vertices(&[Vec2::X, Vec2::Y, Vec2::new(-1.0, -1.0)]).unwrap();
        let mut asteroid = Asteroid::new(shape).unwrap();
        asteroid.body.velocity = Vec2::new(2.0, 0.0);
        asteroid.advance(1.0);

        // No rotation: world vertices are local plus position.
        let world = asteroid.world().vertices();
        assert!((world[0] - Vec2::new(3.0, 0.0)).length() < 1e-5);
        assert!((world[1] - Vec2::new(2.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_world_cache_rotates() {
        let shape = Polygon::from_vertices(&[Vec2::X, Vec2::Y, Vec2::new(-1.0, -1.0)]).unwrap();
        let mut asteroid = Asteroid::new(shape).unwrap();
        asteroid.body.angular_velocity = std::f32::consts::FRAC_PI_2;
        asteroid.advance(1.0);

        // Quarter turn maps the x-axis vertex onto the y axis.
        let world = asteroid.world().vertices();
        assert!((world[0] - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_random_spawn_is_within_configured_ranges() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..20 {
            let asteroid = Asteroid::random(&config, &mut rng).unwrap();
            let p = asteroid.body.position;
            assert!(p.x.abs() <= config.spawn_extent && p.y.abs() <= config.spawn_extent);
            let v = asteroid.body.velocity;
            assert!(v.x.abs() <= config.max_speed && v.y.abs() <= config.max_speed);
            assert!(asteroid.body.angular_velocity.abs() <= config.max_spin);
            assert_eq!(asteroid.shape().len(), asteroid.world().len());
        }
    }
}
