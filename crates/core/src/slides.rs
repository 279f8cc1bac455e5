//! Keyboard slide navigation for presentation pages.
//!
//! Exactly one slide carries the "current" marker. Arrow keys move the
//! marker to a neighbouring slide; at either end of the deck they do nothing.

/// Key code of the left arrow.
pub const KEY_LEFT: u32 = 37;
/// Key code of the right arrow.
pub const KEY_RIGHT: u32 = 39;

/// CSS class marking the visible slide.
pub const CURRENT_CLASS: &str = "current";

/// Navigation keys the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Previous slide.
    Back,
    /// Next slide.
    Forward,
}

impl NavKey {
    /// Map a keyboard key code. Other keys keep their default behaviour.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_LEFT => Some(Self::Back),
            KEY_RIGHT => Some(Self::Forward),
            _ => None,
        }
    }
}

/// A move of the current marker from one slide index to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Position within a deck of sibling slides.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    count: usize,
    current: Option<usize>,
}

impl SlideDeck {
    /// Create a deck of `count` slides with the first one current.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: if count > 0 { Some(0) } else { None },
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of the current slide.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move to the next slide, if there is one.
    pub fn forward(&mut self) -> Option<Transition> {
        let from = self.current?;
        if from + 1 >= self.count {
            return None;
        }
        self.move_to(from, from + 1)
    }

    /// Move to the previous slide, if there is one.
    pub fn back(&mut self) -> Option<Transition> {
        let from = self.current?;
        let to = from.checked_sub(1)?;
        self.move_to(from, to)
    }

    /// Apply a navigation key.
    pub fn navigate(&mut self, key: NavKey) -> Option<Transition> {
        match key {
            NavKey::Back => self.back(),
            NavKey::Forward => self.forward(),
        }
    }

    fn move_to(&mut self, from: usize, to: usize) -> Option<Transition> {
        self.current = Some(to);
        Some(Transition { from, to })
    }
}
