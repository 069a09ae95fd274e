//! Whole-match scenarios driven through the public API.
//!
//! Each test builds a tiny level, feeds held keys frame by frame and checks
//! the match state, lives and asteroid count the player would see.

use glam::Vec2;
use planetoids::game::{CONTINUE_TEXT, LOSS_TEXT, Outcome, WIN_TEXT};
use planetoids::input::{Key, KeyState};
use planetoids::level::{AsteroidSize, AsteroidSpec, LevelData, ShipSpec};
use planetoids::renderer::{DrawList, Shape};
use planetoids::sim::WaveEvent;
use planetoids::{Game, MatchState, Tuning};

const DT: f32 = 1.0 / 60.0;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ship parked mid-field facing +x
fn level(asteroids: Vec<AsteroidSpec>) -> LevelData {
    LevelData {
        ship: ShipSpec {
            position: Vec2::new(640.0, 360.0),
            angle: 0.0,
        },
        asteroids,
    }
}

fn asteroid(size: AsteroidSize, x: f32, y: f32, dx: f32, dy: f32) -> AsteroidSpec {
    AsteroidSpec {
        size,
        position: Vec2::new(x, y),
        direction: Vec2::new(dx, dy),
    }
}

/// New game after one frame with the start key pressed
fn started(level: LevelData) -> Game {
    let mut game = Game::new(level, Tuning::default());
    game.update(&KeyState::new().with(Key::Start), DT);
    game
}

fn count_shots(events: &[WaveEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, WaveEvent::BulletFired { .. }))
        .count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// One small asteroid straight ahead of a stationary ship: shooting it clears
/// the wave and wins the match.
#[test]
fn shooting_last_small_asteroid_wins() {
    let mut game = started(level(vec![asteroid(AsteroidSize::Small, 900.0, 360.0, 0.0, 0.0)]));
    assert_eq!(game.state(), MatchState::Active);
    let fire = KeyState::new().with(Key::Fire);

    let mut max_asteroids = 1;
    for _ in 0..200 {
        game.update(&fire, DT);
        if let Some(wave) = game.wave() {
            max_asteroids = max_asteroids.max(wave.asteroid_count());
        }
        if game.state() != MatchState::Active {
            break;
        }
    }

    assert_eq!(game.state(), MatchState::Complete);
    assert_eq!(game.outcome(), Some(Outcome::Won));
    assert_eq!(game.message(), Some(WIN_TEXT));
    let wave = game.wave().expect("wave kept after completion");
    assert_eq!(wave.asteroid_count(), 0);
    assert_eq!(max_asteroids, 1, "a small asteroid must not fragment");
    assert_eq!(wave.lives(), 3);
}

/// A large asteroid drifting into a stationary ship destroys it and splits
/// into three mediums; the match pauses.
#[test]
fn large_asteroid_ramming_ship_pauses_match() {
    let mut game = started(level(vec![asteroid(AsteroidSize::Large, 900.0, 360.0, -1.0, 0.0)]));
    assert_eq!(game.state(), MatchState::Active);

    for _ in 0..300 {
        game.update(&KeyState::new(), DT);
        if game.state() != MatchState::Active {
            break;
        }
    }

    assert_eq!(game.state(), MatchState::Paused);
    assert_eq!(game.message(), Some(CONTINUE_TEXT));
    let wave = game.wave().expect("wave");
    assert!(!wave.has_ship());
    assert_eq!(wave.lives(), 2);
    assert_eq!(wave.asteroid_count(), 3);
    assert!(wave.asteroids().iter().all(|a| a.size() == AsteroidSize::Medium));

    // Paused: nothing moves
    let before: Vec<Vec2> = wave.asteroids().iter().map(|a| a.pos).collect();
    game.update(&KeyState::new(), DT);
    let after: Vec<Vec2> = game.wave().expect("wave").asteroids().iter().map(|a| a.pos).collect();
    assert_eq!(before, after);
}

/// Losing every life ends the match with the loss message.
#[test]
fn running_out_of_lives_loses() {
    let mine = asteroid(AsteroidSize::Small, 640.0, 360.0, 0.0, 0.0);
    let mut game = started(level(vec![mine.clone(), mine.clone(), mine]));
    assert_eq!(game.state(), MatchState::Paused);

    for _ in 0..10 {
        game.update(&KeyState::new(), DT);
        if game.state() == MatchState::Complete {
            break;
        }
        game.update(&KeyState::new().with(Key::Start), DT);
    }

    assert_eq!(game.state(), MatchState::Complete);
    assert_eq!(game.outcome(), Some(Outcome::Lost));
    assert_eq!(game.message(), Some(LOSS_TEXT));
    assert_eq!(game.wave().map(|w| w.lives()), Some(0));
}

/// Holding fire for fewer frames than the fire rate yields at most one shot;
/// holding for the fire rate twice yields exactly two.
#[test]
fn fire_rate_gates_bullets() {
    let rate = Tuning::default().bullet_rate as usize;
    let fire = KeyState::new().with(Key::Fire);
    let field = || level(vec![asteroid(AsteroidSize::Large, 100.0, 100.0, 0.0, 0.0)]);

    let mut short = started(field());
    let mut shots = 0;
    for _ in 0..rate - 1 {
        shots += count_shots(&short.update(&fire, DT));
    }
    assert!(shots <= 1);

    // Start and fire pressed together: the loading frame already counts down
    let mut long = Game::new(field(), Tuning::default());
    long.update(&KeyState::new().with(Key::Start).with(Key::Fire), DT);
    let mut shots = 0;
    for _ in 0..2 * rate - 1 {
        shots += count_shots(&long.update(&fire, DT));
    }
    assert_eq!(shots, 2);
    assert_eq!(long.wave().map(|w| w.bullets().len()), Some(2));
}

/// Holding start across many frames on the title screen loads exactly once.
#[test]
fn held_start_key_triggers_one_load() {
    let mut game = Game::new(
        level(vec![asteroid(AsteroidSize::Large, 100.0, 100.0, 0.0, 0.0)]),
        Tuning::default(),
    );
    let start = KeyState::new().with(Key::Start);
    for _ in 0..12 {
        game.update(&start, DT);
    }
    assert_eq!(game.state(), MatchState::Active);
    // A second load would have rebuilt the wave and reset its frame counter
    assert_eq!(game.wave().map(|w| w.frame()), Some(12));
}

/// Continue respawns the ship at its level start without touching the rest
#[test]
fn continue_respawns_ship_only() {
    let mut game = started(level(vec![
        asteroid(AsteroidSize::Small, 660.0, 360.0, 0.0, 0.0),
        asteroid(AsteroidSize::Large, 100.0, 650.0, 0.0, 0.0),
    ]));
    assert_eq!(game.state(), MatchState::Paused);
    assert_eq!(game.wave().map(|w| w.asteroid_count()), Some(1));

    game.update(&KeyState::new(), DT);
    game.update(&KeyState::new().with(Key::Start), DT);
    assert_eq!(game.state(), MatchState::Active);
    let wave = game.wave().expect("wave");
    let ship = wave.ship().expect("respawned");
    assert_eq!(ship.pos, Vec2::new(640.0, 360.0));
    assert_eq!(ship.angle(), 0.0);
    assert_eq!(wave.lives(), 2);
    assert_eq!(wave.asteroid_count(), 1);
}

/// Draw order: text, then ship, asteroids and bullets, then the HUD line
#[test]
fn draw_order_while_active() {
    let mut game = started(level(vec![asteroid(AsteroidSize::Large, 100.0, 100.0, 0.0, 0.0)]));
    assert_eq!(game.state(), MatchState::Active);
    let fire = KeyState::new().with(Key::Fire);
    for _ in 0..12 {
        game.update(&fire, DT);
    }

    let mut list = DrawList::new();
    game.draw(&mut list);
    let kinds: Vec<&'static str> = list
        .items
        .iter()
        .map(|d| match d.shape {
            Shape::Ship { .. } => "ship",
            Shape::Asteroid { .. } => "asteroid",
            Shape::Bullet { .. } => "bullet",
            Shape::Text { .. } => "text",
        })
        .collect();
    assert_eq!(kinds, vec!["ship", "asteroid", "bullet", "text"]);
}

/// The bundled level loads and plays
#[test]
fn builtin_level_plays() {
    let mut game = Game::with_default_level().expect("builtin level");
    game.update(&KeyState::new().with(Key::Start), DT);
    assert_eq!(game.state(), MatchState::Active);
    for _ in 0..60 {
        game.update(&KeyState::new().with(Key::Left), DT);
    }
    assert!(game.wave().is_some_and(|w| w.asteroid_count() > 0));
}
