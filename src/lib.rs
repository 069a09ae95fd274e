//! Planetoids - a single-wave asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, per-frame update, collisions)
//! - `game`: Match lifecycle state machine driving the simulation
//! - `renderer`: Drawable shapes handed to the rendering collaborator
//! - `input`: Held-key snapshot from the input collaborator
//! - `level`: Level description (initial ship/asteroid placement)
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::LoadError;
pub use game::{Game, MatchState};
pub use level::{AsteroidSize, LevelData};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 1280.0;
    pub const GAME_HEIGHT: f32 = 720.0;
    /// How far past an edge a body may drift before wrapping to the other side
    pub const DEAD_ZONE: f32 = 64.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 32.0;
    pub const SHIP_IMPULSE: f32 = 0.25;
    /// Degrees per frame
    pub const SHIP_TURN_RATE: f32 = 5.0;
    pub const SHIP_MAX_SPEED: f32 = 10.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Minimum frames between two shots
    pub const BULLET_RATE: u32 = 10;

    /// Asteroid defaults, by size
    pub const SMALL_RADIUS: f32 = 20.0;
    pub const MEDIUM_RADIUS: f32 = 40.0;
    pub const LARGE_RADIUS: f32 = 60.0;
    pub const SMALL_SPEED: f32 = 4.0;
    pub const MEDIUM_SPEED: f32 = 3.0;
    pub const LARGE_SPEED: f32 = 2.0;

    /// Points for shooting an asteroid, by size
    pub const SMALL_POINTS: u64 = 100;
    pub const MEDIUM_POINTS: u64 = 50;
    pub const LARGE_POINTS: u64 = 20;
}

/// Unit vector pointing at `degrees` (counter-clockwise from +x)
#[inline]
pub fn facing_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Normalize an angle to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let a = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Toroidal wrap of one coordinate with a dead-zone margin.
///
/// A value may travel up to `dead_zone` past either edge of `[0, extent]`
/// before it is moved to the opposite side by `extent + 2 * dead_zone`.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32, dead_zone: f32) -> f32 {
    let span = extent + 2.0 * dead_zone;
    if value < -dead_zone {
        value + span
    } else if value > extent + dead_zone {
        value - span
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_cardinal_angles() {
        assert!((facing_from_degrees(0.0) - Vec2::X).length() < 1e-6);
        assert!((facing_from_degrees(90.0) - Vec2::Y).length() < 1e-6);
        assert!((facing_from_degrees(180.0) + Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_normalize_degrees_half_open() {
        assert_eq!(normalize_degrees(365.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        let tiny = normalize_degrees(-1e-7);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_rotate_degrees_third_turns() {
        let v = Vec2::new(2.0, 0.0);
        let r = rotate_degrees(v, 120.0);
        assert!((r.length() - 2.0).abs() < 1e-5);
        assert!((r.angle_to(v).to_degrees() + 120.0).abs() < 1e-3);
        let back = rotate_degrees(rotate_degrees(v, 240.0), 120.0);
        assert!((back - v).length() < 1e-4);
    }

    #[test]
    fn test_wrap_coordinate() {
        assert_eq!(wrap_coordinate(100.0, 1000.0, 50.0), 100.0);
        // Inside the dead zone: no wrap yet
        assert_eq!(wrap_coordinate(-49.0, 1000.0, 50.0), -49.0);
        assert_eq!(wrap_coordinate(1049.0, 1000.0, 50.0), 1049.0);
        // Past the dead zone
        assert_eq!(wrap_coordinate(-51.0, 1000.0, 50.0), 1049.0);
        assert_eq!(wrap_coordinate(1051.0, 1000.0, 50.0), -49.0);
    }
}
