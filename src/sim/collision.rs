//! Collision detection and fragmentation
//!
//! Collision scans never mutate the body lists they walk. A scan yields an
//! index, the hit is turned into an [`AsteroidPlan`], and the plan is applied
//! before the next scan so later scans see the fragments it inserted.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};
use crate::rotate_degrees;
use crate::tuning::Tuning;

/// Fragment launch angles relative to the impact direction (degrees)
pub const FRAGMENT_ANGLES: [f32; 3] = [0.0, 120.0, 240.0];

/// Two circles collide when their centers are no further apart than the sum of radii
#[inline]
pub fn circles_collide(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) <= a_radius + b_radius
}

/// Unit launch directions for the three fragments of an impact.
///
/// A zero impact vector gives zero directions (stationary fragments).
pub fn fragment_directions(impact: Vec2) -> [Vec2; 3] {
    let dir = impact.normalize_or_zero();
    FRAGMENT_ANGLES.map(|angle| rotate_degrees(dir, angle))
}

/// Fragments replacing `asteroid` after an impact along `impact`.
///
/// Small asteroids leave nothing. Larger ones split into three of the next
/// size down, each offset from the old center by its own radius along its
/// launch direction.
pub fn fragment(asteroid: &Asteroid, impact: Vec2, tuning: &Tuning) -> Vec<Asteroid> {
    let Some(size) = asteroid.size().smaller() else {
        return Vec::new();
    };
    let radius = tuning.asteroid_radius(size);
    fragment_directions(impact)
        .into_iter()
        .map(|dir| Asteroid::new(size, asteroid.pos + dir * radius, dir, tuning))
        .collect()
}

/// Index of the first asteroid the bullet touches, if any
pub fn find_bullet_target(bullet: &Bullet, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_collide(bullet.pos, bullet.radius(), a.pos, a.radius()))
}

/// Index of the first asteroid touching the ship, if any
pub fn find_ship_hit(ship: &Ship, asteroids: &[Asteroid], tuning: &Tuning) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_collide(ship.pos, tuning.ship_radius, a.pos, a.radius()))
}

/// Deferred removal/replacement of asteroids
#[derive(Debug, Default)]
pub struct AsteroidPlan {
    /// (index of destroyed asteroid, fragments to put in its place)
    replacements: Vec<(usize, Vec<Asteroid>)>,
}

impl AsteroidPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the asteroid at `index` for removal, with optional fragments
    pub fn destroy(&mut self, index: usize, fragments: Vec<Asteroid>) {
        self.replacements.push((index, fragments));
    }

    /// Rebuild the asteroid list; fragments take the destroyed asteroid's slot
    pub fn apply(mut self, asteroids: &mut Vec<Asteroid>) {
        if self.replacements.is_empty() {
            return;
        }
        self.replacements.sort_by_key(|(index, _)| *index);

        let mut pending = self.replacements.into_iter().peekable();
        let old = std::mem::take(asteroids);
        asteroids.reserve(old.len() + 2 * pending.len());

        for (i, asteroid) in old.into_iter().enumerate() {
            match pending.next_if(|(index, _)| *index == i) {
                Some((_, fragments)) => asteroids.extend(fragments),
                None => asteroids.push(asteroid),
            }
        }
    }
}

/// Remove bullets by index (indices need not be sorted)
pub fn remove_bullets(bullets: &mut Vec<Bullet>, indices: &[usize]) {
    let mut dead = vec![false; bullets.len()];
    for &i in indices {
        dead[i] = true;
    }
    let mut i = 0;
    bullets.retain(|_| {
        let keep = !dead[i];
        i += 1;
        keep
    });
}
