//! Drawable descriptors for game objects
//!
//! Bodies do not know how to draw themselves. Each one is turned into a
//! [`Drawable`]: a position, an orientation and a [`Shape`] value.

use glam::Vec2;

use crate::level::AsteroidSize;
use crate::sim::{Asteroid, Bullet, Ship, Wave};

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [0.85, 0.9, 1.0, 1.0];
    pub const ASTEROID_SMALL: [f32; 4] = [0.75, 0.65, 0.55, 1.0];
    pub const ASTEROID_MEDIUM: [f32; 4] = [0.6, 0.5, 0.4, 1.0];
    pub const ASTEROID_LARGE: [f32; 4] = [0.45, 0.38, 0.3, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD: [f32; 4] = [0.6, 0.8, 0.6, 1.0];
}

/// Text role, which the surface maps to a font and size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Message,
    Hud,
}

/// What to draw at a drawable's position
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ship { radius: f32 },
    Asteroid { size: AsteroidSize, radius: f32 },
    Bullet { radius: f32 },
    Text { text: String, style: TextStyle },
}

/// A pre-positioned shape for the rendering surface
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    /// Center (bodies) or anchor (text)
    pub pos: Vec2,
    /// Degrees, counter-clockwise from +x
    pub angle: f32,
    pub color: [f32; 4],
    pub shape: Shape,
}

impl Drawable {
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

pub fn ship(ship: &Ship, radius: f32) -> Drawable {
    Drawable {
        pos: ship.pos,
        angle: ship.angle(),
        color: colors::SHIP,
        shape: Shape::Ship { radius },
    }
}

pub fn asteroid(asteroid: &Asteroid) -> Drawable {
    let color = match asteroid.size() {
        AsteroidSize::Small => colors::ASTEROID_SMALL,
        AsteroidSize::Medium => colors::ASTEROID_MEDIUM,
        AsteroidSize::Large => colors::ASTEROID_LARGE,
    };
    Drawable {
        pos: asteroid.pos,
        angle: 0.0,
        color,
        shape: Shape::Asteroid {
            size: asteroid.size(),
            radius: asteroid.radius(),
        },
    }
}

pub fn bullet(bullet: &Bullet) -> Drawable {
    // Oriented along travel so a surface can stretch it into a streak
    let angle = bullet.vel().y.atan2(bullet.vel().x).to_degrees();
    Drawable {
        pos: bullet.pos,
        angle,
        color: colors::BULLET,
        shape: Shape::Bullet {
            radius: bullet.radius(),
        },
    }
}

pub fn text(text: impl Into<String>, pos: Vec2, style: TextStyle) -> Drawable {
    let color = match style {
        TextStyle::Hud => colors::HUD,
        TextStyle::Title | TextStyle::Message => colors::TEXT,
    };
    Drawable {
        pos,
        angle: 0.0,
        color,
        shape: Shape::Text {
            text: text.into(),
            style,
        },
    }
}

/// Ship (if alive), then asteroids, then bullets, in list order
pub fn wave_bodies(wave: &Wave) -> Vec<Drawable> {
    let mut out = Vec::with_capacity(1 + wave.asteroids().len() + wave.bullets().len());
    if let Some(s) = wave.ship() {
        out.push(ship(s, wave.tuning().ship_radius));
    }
    out.extend(wave.asteroids().iter().map(asteroid));
    out.extend(wave.bullets().iter().map(bullet));
    out
}
