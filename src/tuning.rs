//! Data-driven game balance
//!
//! Every field defaults to the compile-time constant in [`crate::consts`].
//! A tuning file only needs to name the values it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LoadError;
use crate::level::AsteroidSize;
use crate::wrap_coordinate;

/// Runtime-tunable physics and gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub game_width: f32,
    pub game_height: f32,
    pub dead_zone: f32,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_impulse: f32,
    /// Degrees per frame
    pub ship_turn_rate: f32,
    pub ship_max_speed: f32,
    pub ship_lives: u32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Frames between shots
    pub bullet_rate: u32,

    // === Asteroids ===
    pub small_radius: f32,
    pub medium_radius: f32,
    pub large_radius: f32,
    pub small_speed: f32,
    pub medium_speed: f32,
    pub large_speed: f32,

    // === Scoring ===
    pub small_points: u64,
    pub medium_points: u64,
    pub large_points: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            dead_zone: DEAD_ZONE,

            ship_radius: SHIP_RADIUS,
            ship_impulse: SHIP_IMPULSE,
            ship_turn_rate: SHIP_TURN_RATE,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_lives: SHIP_LIVES,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_rate: BULLET_RATE,

            small_radius: SMALL_RADIUS,
            medium_radius: MEDIUM_RADIUS,
            large_radius: LARGE_RADIUS,
            small_speed: SMALL_SPEED,
            medium_speed: MEDIUM_SPEED,
            large_speed: LARGE_SPEED,

            small_points: SMALL_POINTS,
            medium_points: MEDIUM_POINTS,
            large_points: LARGE_POINTS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning overrides from JSON text
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from '{}'", path.display());
        Ok(tuning)
    }

    /// Every distance, speed and rate must be positive and finite
    pub fn validate(&self) -> Result<(), LoadError> {
        let positive = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("ship_radius", self.ship_radius),
            ("ship_impulse", self.ship_impulse),
            ("ship_turn_rate", self.ship_turn_rate),
            ("ship_max_speed", self.ship_max_speed),
            ("bullet_radius", self.bullet_radius),
            ("bullet_speed", self.bullet_speed),
            ("small_radius", self.small_radius),
            ("medium_radius", self.medium_radius),
            ("large_radius", self.large_radius),
            ("small_speed", self.small_speed),
            ("medium_speed", self.medium_speed),
            ("large_speed", self.large_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LoadError::invalid(name, "must be positive and finite"));
            }
        }
        if !(self.dead_zone.is_finite() && self.dead_zone >= 0.0) {
            return Err(LoadError::invalid("dead_zone", "must be non-negative and finite"));
        }
        if self.ship_lives == 0 {
            return Err(LoadError::invalid("ship_lives", "must be at least 1"));
        }
        if self.bullet_rate == 0 {
            return Err(LoadError::invalid("bullet_rate", "must be at least 1"));
        }
        Ok(())
    }

    pub fn asteroid_radius(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Small => self.small_radius,
            AsteroidSize::Medium => self.medium_radius,
            AsteroidSize::Large => self.large_radius,
        }
    }

    pub fn asteroid_speed(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Small => self.small_speed,
            AsteroidSize::Medium => self.medium_speed,
            AsteroidSize::Large => self.large_speed,
        }
    }

    pub fn asteroid_points(&self, size: AsteroidSize) -> u64 {
        match size {
            AsteroidSize::Small => self.small_points,
            AsteroidSize::Medium => self.medium_points,
            AsteroidSize::Large => self.large_points,
        }
    }

    /// Wrap a position around the playfield (x by width, y by height)
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            wrap_coordinate(pos.x, self.game_width, self.dead_zone),
            wrap_coordinate(pos.y, self.game_height, self.dead_zone),
        )
    }

    /// True once a body of `radius` is fully outside the playfield
    pub fn is_out_of_bounds(&self, pos: Vec2, radius: f32) -> bool {
        pos.x < -radius
            || pos.x > self.game_width + radius
            || pos.y < -radius
            || pos.y > self.game_height + radius
    }
}
