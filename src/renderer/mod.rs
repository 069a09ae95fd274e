//! Rendering seam
//!
//! The core never touches pixels. Once per frame it hands an ordered
//! sequence of [`Drawable`]s to a [`Canvas`].

pub mod shapes;

pub use shapes::{Drawable, Shape, TextStyle};

/// The rendering collaborator
pub trait Canvas {
    /// Called once per drawable, in draw order
    fn draw(&mut self, item: Drawable);
}

/// In-memory canvas that records one frame's drawables
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub items: Vec<Drawable>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().filter_map(|d| d.text()).collect()
    }

    pub fn count(&self, pred: impl Fn(&Shape) -> bool) -> usize {
        self.items.iter().filter(|d| pred(&d.shape)).count()
    }
}

impl Canvas for DrawList {
    fn draw(&mut self, item: Drawable) {
        self.items.push(item);
    }
}
