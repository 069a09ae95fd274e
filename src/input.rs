//! Input collaborator seam
//!
//! An [`InputSource`] only reports which keys are held right now. Turning a
//! held key into a press is the match controller's job.

use crate::sim::FrameInput;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Fire,
    Start,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Left, Key::Right, Key::Up, Key::Fire, Key::Start];
}

/// Anything that can report held keys
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// In-memory held-key set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: [bool; Key::ALL.len()],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`KeyState::press`]
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held[key as usize] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key as usize] = false;
    }

    pub fn release_all(&mut self) {
        self.held = [false; Key::ALL.len()];
    }
}

impl InputSource for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held[key as usize]
    }
}

impl FrameInput {
    /// Snapshot every key the game reads
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.is_key_down(Key::Left),
            right: source.is_key_down(Key::Right),
            thrust: source.is_key_down(Key::Up),
            fire: source.is_key_down(Key::Fire),
            start: source.is_key_down(Key::Start),
        }
    }
}
