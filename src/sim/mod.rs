//! Deterministic simulation core
//!
//! All world logic lives here and is pure: fixed-step updates, injected RNG,
//! stable creation-order iteration, no threads and no platform dependencies.
//! The threaded driver around this module is `crate::simulation`.

pub mod asteroid;
pub mod body;
pub mod polygon;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use body::RigidBody;
pub use polygon::{GeometryError, Polygon};
pub use state::WorldState;
pub use tick::tick;
