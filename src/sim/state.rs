//! Bodies and wave state
//!
//! Everything the simulation mutates per frame lives here. Bodies integrate
//! their own motion; the [`Wave`] owns all of them exclusively.

use glam::Vec2;

use crate::{facing_from_degrees, normalize_degrees};
use crate::level::{AsteroidSize, LevelData, ShipSpec};
use crate::tuning::Tuning;

/// Rotation direction for [`Ship::turn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise (angle increases)
    Left,
    /// Clockwise (angle decreases)
    Right,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    /// Degrees in [0, 360)
    angle: f32,
    /// Always the unit vector at `angle`
    facing: Vec2,
    vel: Vec2,
}

impl Ship {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        let angle = normalize_degrees(angle);
        Self {
            pos,
            angle,
            facing: facing_from_degrees(angle),
            vel: Vec2::ZERO,
        }
    }

    /// Spawn at a level's start placement
    pub fn spawn(spec: &ShipSpec) -> Self {
        Self::new(spec.position, spec.angle)
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Rotate by one frame's worth of turn rate
    pub fn turn(&mut self, dir: Turn, tuning: &Tuning) {
        let delta = match dir {
            Turn::Left => tuning.ship_turn_rate,
            Turn::Right => -tuning.ship_turn_rate,
        };
        self.angle = normalize_degrees(self.angle + delta);
        self.facing = facing_from_degrees(self.angle);
    }

    /// Push along the facing; speed is rescaled (not clamped per axis) to the max
    pub fn apply_thrust(&mut self, tuning: &Tuning) {
        self.vel += self.facing * tuning.ship_impulse;
        if self.vel.length() > tuning.ship_max_speed {
            self.vel = self.vel.normalize_or_zero() * tuning.ship_max_speed;
        }
    }

    /// Integrate one frame and wrap around the playfield
    pub fn advance(&mut self, tuning: &Tuning) {
        self.pos = tuning.wrap(self.pos + self.vel);
    }

    /// Tip of the ship, where bullets spawn
    pub fn nose(&self, tuning: &Tuning) -> Vec2 {
        self.pos + self.facing * tuning.ship_radius
    }

    /// Direction used to scatter fragments when the ship rams an asteroid:
    /// the velocity if moving, otherwise the facing
    pub fn collision_vector(&self) -> Vec2 {
        if self.vel == Vec2::ZERO {
            self.facing
        } else {
            self.vel
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    vel: Vec2,
    size: AsteroidSize,
    radius: f32,
}

impl Asteroid {
    /// `direction` need not be unit length; a zero direction gives a
    /// stationary asteroid
    pub fn new(size: AsteroidSize, pos: Vec2, direction: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: direction.normalize_or_zero() * tuning.asteroid_speed(size),
            size,
            radius: tuning.asteroid_radius(size),
        }
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Integrate one frame and wrap around the playfield
    pub fn advance(&mut self, tuning: &Tuning) {
        self.pos = tuning.wrap(self.pos + self.vel);
    }
}

/// A shot fired from the ship's nose
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    vel: Vec2,
    radius: f32,
}

impl Bullet {
    /// Fire from the ship's nose along its facing
    pub fn fire(ship: &Ship, tuning: &Tuning) -> Self {
        Self {
            pos: ship.nose(tuning),
            vel: ship.facing() * tuning.bullet_speed,
            radius: tuning.bullet_radius,
        }
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Straight-line motion, no wraparound
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Past the playfield edge by more than its own radius
    pub fn is_expired(&self, tuning: &Tuning) -> bool {
        tuning.is_out_of_bounds(self.pos, self.radius)
    }
}

/// One attempt at a level: ship, asteroids, bullets, lives
#[derive(Debug, Clone)]
pub struct Wave {
    pub(crate) tuning: Tuning,
    /// Kept for respawning the ship
    pub(crate) level: LevelData,
    /// `None` while destroyed and awaiting a respawn
    pub(crate) ship: Option<Ship>,
    pub(crate) asteroids: Vec<Asteroid>,
    pub(crate) bullets: Vec<Bullet>,
    /// Frames since the last shot
    pub(crate) fire_cooldown: u32,
    pub(crate) lives: u32,
    pub(crate) score: u64,
    /// Simulated frames
    pub(crate) frame: u64,
    /// Wall-clock seconds fed in by the driver
    pub(crate) elapsed: f32,
}

impl Wave {
    pub fn new(level: LevelData, tuning: Tuning) -> Self {
        let ship = Ship::spawn(&level.ship);
        let asteroids = level
            .asteroids
            .iter()
            .map(|a| Asteroid::new(a.size, a.position, a.direction, &tuning))
            .collect::<Vec<_>>();

        log::info!("Wave loaded with {} asteroids", asteroids.len());

        Self {
            lives: tuning.ship_lives,
            tuning,
            level,
            ship: Some(ship),
            asteroids,
            bullets: Vec::new(),
            fire_cooldown: 0,
            score: 0,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Respawn the ship at the level start. Asteroids, bullets and lives are untouched.
    pub fn reset(&mut self) {
        self.ship = Some(Ship::spawn(&self.level.ship));
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Ship alive, lives left, nothing left to shoot
    pub fn is_cleared(&self) -> bool {
        self.asteroids.is_empty() && self.ship.is_some() && self.lives > 0
    }
}
