//! Level descriptions
//!
//! A level places the ship and the initial asteroids. It is read once when a
//! wave loads and kept by the wave so the ship can respawn at its start.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Built-in level used when no file is supplied
pub const DEFAULT_LEVEL_JSON: &str = include_str!("../levels/default.json");

/// Asteroid size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    /// Size of the fragments this asteroid breaks into, if any
    pub fn smaller(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Small => None,
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Large => Some(AsteroidSize::Medium),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Small => "small",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Large => "large",
        }
    }
}

/// Ship start placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub position: Vec2,
    /// Degrees, counter-clockwise from +x
    pub angle: f32,
}

/// One asteroid's initial placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSpec {
    pub size: AsteroidSize,
    pub position: Vec2,
    /// Travel direction; need not be unit length. `[0, 0]` means stationary.
    pub direction: Vec2,
}

/// A complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub ship: ShipSpec,
    pub asteroids: Vec<AsteroidSpec>,
}

impl LevelData {
    /// Parse and validate a level from JSON text
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let level: LevelData = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read a level file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level '{}' ({} asteroids)",
            path.display(),
            level.asteroids.len()
        );
        Ok(level)
    }

    /// The level bundled with the crate
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_json(DEFAULT_LEVEL_JSON)
    }

    /// Reject values that would poison the simulation (overflowed floats)
    pub fn validate(&self) -> Result<(), LoadError> {
        if !self.ship.position.is_finite() {
            return Err(LoadError::invalid("ship.position", "must be finite"));
        }
        if !self.ship.angle.is_finite() {
            return Err(LoadError::invalid("ship.angle", "must be finite"));
        }
        for (i, asteroid) in self.asteroids.iter().enumerate() {
            if !asteroid.position.is_finite() {
                return Err(LoadError::invalid(
                    format!("asteroids[{}].position", i),
                    "must be finite",
                ));
            }
            if !asteroid.direction.is_finite() {
                return Err(LoadError::invalid(
                    format!("asteroids[{}].direction", i),
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}
