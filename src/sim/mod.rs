//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One fixed physics step per update call
//! - Stable iteration order (list order, never hash order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    AsteroidPlan, circles_collide, find_bullet_target, find_ship_hit, fragment,
    fragment_directions,
};
pub use state::{Asteroid, Bullet, Ship, Turn, Wave};
pub use tick::{FrameInput, WaveEvent};
