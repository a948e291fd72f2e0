//! Keyboard and window-close state folded into per-frame `TickInput`
//!
//! Arrow keys are level-triggered (held state). "Any key" is
//! edge-triggered: set by a fresh key press, cleared once a frame consumes
//! it. Auto-repeat presses do not count as fresh.

use crate::sim::TickInput;

/// Platform-neutral key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Other,
}

/// Accumulates input events between frames
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    left: bool,
    right: bool,
    pressed: bool,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key, repeat: bool) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Other => {}
        }
        if !repeat {
            self.pressed = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Other => {}
        }
    }

    /// Window close requested; sticky until the game quits
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Focus lost: release held keys so the paddle doesn't keep sliding
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Snapshot for the next frame, consuming the key-press edge
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            any_key: self.pressed,
            quit: self.quit,
        };
        self.pressed = false;
        input
    }

    /// A key press or quit request is waiting to be consumed
    pub fn has_pending_event(&self) -> bool {
        self.pressed || self.quit
    }
}
