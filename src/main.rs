//! Planetoids entry point
//!
//! Headless native driver: loads a level (and optional tuning), then plays
//! the match with a scripted pilot at a fixed frame rate and reports how it
//! ended. A bad level file is fatal. A bad tuning file falls back to the
//! defaults.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use planetoids::input::{Key, KeyState};
use planetoids::renderer::DrawList;
use planetoids::sim::WaveEvent;
use planetoids::{Game, LevelData, LoadError, MatchState, Tuning};

/// Fixed frame time handed to the game (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "planetoids")]
#[command(about = "Play one Planetoids wave headlessly with a scripted pilot")]
struct Args {
    /// Level description (JSON); the built-in level when omitted
    level: Option<PathBuf>,
    /// Tuning overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Give up after this many frames (default: three minutes at 60 Hz)
    #[arg(long, default_value_t = 60 * 180)]
    max_frames: u32,
}

fn load(args: &Args) -> Result<Game, LoadError> {
    let level = match &args.level {
        Some(path) => LevelData::load(path)?,
        None => LevelData::builtin()?,
    };
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).unwrap_or_else(|err| {
            log::warn!("{}; using default tuning", err);
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    Ok(Game::new(level, tuning))
}

/// Spin and shoot. Start is tapped (pressed on one frame, released on the
/// next) whenever the match is waiting for it.
fn pilot(game: &Game, frame: u32, keys: &mut KeyState) {
    keys.release_all();
    match game.state() {
        MatchState::Inactive | MatchState::Paused => {
            if frame % 2 == 0 {
                keys.press(Key::Start);
            }
        }
        MatchState::Active => {
            keys.press(Key::Fire);
            keys.press(Key::Left);
            if frame % 90 < 10 {
                keys.press(Key::Up);
            }
        }
        _ => {}
    }
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Planetoids (headless) starting...");

    let args = Args::parse();
    let mut game = match load(&args) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut keys = KeyState::new();
    let mut canvas = DrawList::new();
    let mut shots = 0u32;
    let mut frame = 0u32;

    while frame < args.max_frames && game.state() != MatchState::Complete {
        pilot(&game, frame, &mut keys);
        let events = game.update(&keys, FRAME_DT);
        shots += events
            .iter()
            .filter(|e| matches!(e, WaveEvent::BulletFired { .. }))
            .count() as u32;

        canvas.clear();
        game.draw(&mut canvas);
        frame += 1;
    }

    let (lives, score, asteroids) = game
        .wave()
        .map_or((0, 0, 0), |w| (w.lives(), w.score(), w.asteroid_count()));
    println!("state:     {:?}", game.state());
    println!("outcome:   {:?}", game.outcome());
    println!("frames:    {}", frame);
    println!("play time: {:.1}s", game.play_time());
    println!("shots:     {}", shots);
    println!("score:     {}", score);
    println!("lives:     {}", lives);
    println!("asteroids: {}", asteroids);
    println!("drawables: {}", canvas.items.len());

    ExitCode::SUCCESS
}
