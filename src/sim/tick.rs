//! Per-frame wave update
//!
//! Physics advances exactly one fixed step per call. Elapsed time is only
//! recorded for pacing and never integrated.

use glam::Vec2;

use super::collision::{
    AsteroidPlan, find_bullet_target, find_ship_hit, fragment, remove_bullets,
};
use super::state::{Bullet, Turn, Wave};
use crate::level::AsteroidSize;

/// Held keys for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Start/continue key (edge detection happens in the match controller)
    pub start: bool,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveEvent {
    BulletFired { pos: Vec2 },
    /// A bullet destroyed an asteroid
    AsteroidDestroyed {
        size: AsteroidSize,
        pos: Vec2,
        points: u64,
    },
    /// A destroyed asteroid left fragments behind
    AsteroidSplit { size: AsteroidSize, pos: Vec2 },
    ShipDestroyed { pos: Vec2, lives_left: u32 },
}

impl Wave {
    /// Advance the wave by one frame.
    ///
    /// Does nothing while the ship is absent.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<WaveEvent> {
        let mut events = Vec::new();
        let Some(ship) = self.ship.as_mut() else {
            return events;
        };

        self.frame += 1;
        self.elapsed += dt;
        self.fire_cooldown = self.fire_cooldown.saturating_add(1);

        if input.left {
            ship.turn(Turn::Left, &self.tuning);
        }
        if input.right {
            ship.turn(Turn::Right, &self.tuning);
        }
        if input.thrust {
            ship.apply_thrust(&self.tuning);
        }
        ship.advance(&self.tuning);

        for asteroid in &mut self.asteroids {
            asteroid.advance(&self.tuning);
        }

        if input.fire && self.fire_cooldown >= self.tuning.bullet_rate {
            let bullet = Bullet::fire(ship, &self.tuning);
            events.push(WaveEvent::BulletFired { pos: bullet.pos });
            self.bullets.push(bullet);
            self.fire_cooldown = 0;
        }

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        let tuning = &self.tuning;
        self.bullets.retain(|b| !b.is_expired(tuning));

        self.resolve_bullet_hits(&mut events);
        self.resolve_ship_hit(&mut events);

        events
    }

    /// Bullets destroy (or split) the first asteroid they touch.
    ///
    /// Bullets are resolved in order against the live list, so a later
    /// bullet can hit fragments an earlier one just created.
    fn resolve_bullet_hits(&mut self, events: &mut Vec<WaveEvent>) {
        let mut spent = Vec::new();
        for (b, bullet) in self.bullets.iter().enumerate() {
            let Some(index) = find_bullet_target(bullet, &self.asteroids) else {
                continue;
            };

            let asteroid = &self.asteroids[index];
            let points = self.tuning.asteroid_points(asteroid.size());
            self.score = self.score.saturating_add(points);
            events.push(WaveEvent::AsteroidDestroyed {
                size: asteroid.size(),
                pos: asteroid.pos,
                points,
            });

            let fragments = fragment(asteroid, bullet.vel(), &self.tuning);
            if !fragments.is_empty() {
                log::debug!(
                    "Bullet split {} asteroid at ({:.1}, {:.1})",
                    asteroid.size().as_str(),
                    asteroid.pos.x,
                    asteroid.pos.y
                );
                events.push(WaveEvent::AsteroidSplit {
                    size: asteroid.size(),
                    pos: asteroid.pos,
                });
            }

            let mut plan = AsteroidPlan::new();
            plan.destroy(index, fragments);
            plan.apply(&mut self.asteroids);
            spent.push(b);
        }

        if !spent.is_empty() {
            remove_bullets(&mut self.bullets, &spent);
        }
    }

    /// The first asteroid touching the ship destroys it and breaks apart
    fn resolve_ship_hit(&mut self, events: &mut Vec<WaveEvent>) {
        let Some(ship) = self.ship.as_ref() else {
            return;
        };
        let Some(index) = find_ship_hit(ship, &self.asteroids, &self.tuning) else {
            return;
        };

        let asteroid = &self.asteroids[index];
        let fragments = fragment(asteroid, ship.collision_vector(), &self.tuning);
        if !fragments.is_empty() {
            events.push(WaveEvent::AsteroidSplit {
                size: asteroid.size(),
                pos: asteroid.pos,
            });
        }

        self.lives = self.lives.saturating_sub(1);
        log::debug!(
            "Ship destroyed by {} asteroid, {} lives left",
            asteroid.size().as_str(),
            self.lives
        );
        events.push(WaveEvent::ShipDestroyed {
            pos: ship.pos,
            lives_left: self.lives,
        });

        let mut plan = AsteroidPlan::new();
        plan.destroy(index, fragments);
        plan.apply(&mut self.asteroids);
        self.ship = None;
    }
}
