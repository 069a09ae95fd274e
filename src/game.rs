//! Match controller
//!
//! Top-level state machine around a single [`Wave`]:
//!
//! ```text
//! Inactive --start--> Loading --> Active --ship lost--> Paused --start--> Continue --> Active
//!                                   |                     |
//!                                   +--cleared--> Complete <--no lives--+
//! Complete --start--> Inactive
//! ```
//!
//! Loading and Continue are transient: they pass straight through to Active
//! within the same update.

use glam::Vec2;

use crate::error::LoadError;
use crate::input::InputSource;
use crate::level::LevelData;
use crate::renderer::{Canvas, TextStyle, shapes};
use crate::sim::{FrameInput, Wave, WaveEvent};
use crate::tuning::Tuning;

pub const TITLE_TEXT: &str = "Planetoids";
pub const START_TEXT: &str = "Press S to Start";
pub const CONTINUE_TEXT: &str = "Press S to Continue";
pub const WIN_TEXT: &str = "Congratulations!";
pub const LOSS_TEXT: &str = "Better luck next time!";

/// Vertical gap between the title and the message under it
const TITLE_OFFSET: f32 = 80.0;
/// HUD inset from the top-left corner
const HUD_MARGIN: f32 = 24.0;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Title screen, no wave
    Inactive,
    /// Building a fresh wave (one update at most)
    Loading,
    /// Normal play
    Active,
    /// Ship destroyed, waiting for the player to continue
    Paused,
    /// Respawning the ship (one update at most)
    Continue,
    /// Won or lost; no more simulation
    Complete,
}

/// How a completed match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The whole game: match state, the live wave and on-screen text
#[derive(Debug, Clone)]
pub struct Game {
    state: MatchState,
    wave: Option<Wave>,
    level: LevelData,
    tuning: Tuning,
    title: Option<String>,
    message: Option<String>,
    outcome: Option<Outcome>,
    /// Start key held on the previous update (for edge detection)
    start_held: bool,
}

impl Game {
    /// A game on the title screen that will play `level` with `tuning`
    pub fn new(level: LevelData, tuning: Tuning) -> Self {
        Self {
            state: MatchState::Inactive,
            wave: None,
            level,
            tuning,
            title: Some(TITLE_TEXT.to_string()),
            message: Some(START_TEXT.to_string()),
            outcome: None,
            start_held: false,
        }
    }

    /// A game on the built-in level with default tuning
    pub fn with_default_level() -> Result<Self, LoadError> {
        Ok(Self::new(LevelData::builtin()?, Tuning::default()))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn wave(&self) -> Option<&Wave> {
        self.wave.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Seconds of play fed to the current wave
    pub fn play_time(&self) -> f32 {
        self.wave.as_ref().map_or(0.0, Wave::elapsed)
    }

    /// Advance one frame.
    ///
    /// Returns the wave events of the frame (empty unless the wave ran).
    pub fn update(&mut self, source: &impl InputSource, dt: f32) -> Vec<WaveEvent> {
        let input = FrameInput::poll(source);
        // Start acts on the press, not the hold. Each press drives at most one transition.
        let mut pressed = input.start && !self.start_held;
        self.start_held = input.start;

        let mut events = Vec::new();
        loop {
            match self.state {
                MatchState::Inactive => {
                    if !pressed {
                        break;
                    }
                    pressed = false;
                    self.enter(MatchState::Loading);
                }
                MatchState::Loading => {
                    self.wave = Some(Wave::new(self.level.clone(), self.tuning.clone()));
                    self.enter(MatchState::Active);
                }
                MatchState::Active => {
                    self.message = None;
                    let Some(wave) = self.wave.as_mut() else {
                        // Active always owns a wave; recover by reloading
                        self.enter(MatchState::Loading);
                        continue;
                    };
                    events = wave.update(&input, dt);
                    if !wave.has_ship() {
                        pressed = false;
                        self.enter(MatchState::Paused);
                        continue;
                    }
                    if wave.is_cleared() {
                        self.finish(Outcome::Won);
                    }
                    break;
                }
                MatchState::Paused => {
                    let lives = self.wave.as_ref().map_or(0, Wave::lives);
                    if lives == 0 {
                        self.finish(Outcome::Lost);
                        break;
                    }
                    self.message = Some(CONTINUE_TEXT.to_string());
                    if !pressed {
                        break;
                    }
                    pressed = false;
                    self.enter(MatchState::Continue);
                }
                MatchState::Continue => {
                    if let Some(wave) = self.wave.as_mut() {
                        wave.reset();
                    }
                    self.enter(MatchState::Active);
                    self.message = None;
                    break;
                }
                MatchState::Complete => {
                    if pressed {
                        self.return_to_title();
                    }
                    break;
                }
            }
        }
        events
    }

    /// Hand this frame's drawables to the canvas: text first, then the wave
    /// bodies while active, then the HUD line.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let center = Vec2::new(self.tuning.game_width / 2.0, self.tuning.game_height / 2.0);

        if let Some(title) = &self.title {
            canvas.draw(shapes::text(title.as_str(), center, TextStyle::Title));
        }
        if let Some(message) = &self.message {
            let pos = if self.title.is_some() {
                center - Vec2::new(0.0, TITLE_OFFSET)
            } else {
                center
            };
            canvas.draw(shapes::text(message.as_str(), pos, TextStyle::Message));
        }

        let Some(wave) = &self.wave else {
            return;
        };
        if self.state == MatchState::Active {
            for item in shapes::wave_bodies(wave) {
                canvas.draw(item);
            }
        }
        let hud = format!("Lives {}   Score {}", wave.lives(), wave.score());
        let hud_pos = Vec2::new(HUD_MARGIN, self.tuning.game_height - HUD_MARGIN);
        canvas.draw(shapes::text(hud, hud_pos, TextStyle::Hud));
    }

    fn enter(&mut self, next: MatchState) {
        log::info!("Match state {:?} -> {:?}", self.state, next);
        if next != MatchState::Inactive {
            self.title = None;
        }
        self.state = next;
    }

    fn finish(&mut self, outcome: Outcome) {
        let text = match outcome {
            Outcome::Won => WIN_TEXT,
            Outcome::Lost => LOSS_TEXT,
        };
        if let Some(wave) = &self.wave {
            log::info!(
                "Match {:?} after {} frames, score {}",
                outcome,
                wave.frame(),
                wave.score()
            );
        }
        self.message = Some(text.to_string());
        self.outcome = Some(outcome);
        self.enter(MatchState::Complete);
    }

    fn return_to_title(&mut self) {
        self.enter(MatchState::Inactive);
        self.wave = None;
        self.outcome = None;
        self.title = Some(TITLE_TEXT.to_string());
        self.message = Some(START_TEXT.to_string());
    }
}
