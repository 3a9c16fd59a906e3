//! Input device that logs instead of injecting.

use game_core::Key;
use runtime::{InputDevice, MouseButton};

/// Counts and traces every input effect.
#[derive(Debug, Default)]
pub struct LoggingDevice {
    pointer: (i32, i32),
    pub moves: u32,
    pub key_presses: u32,
    pub clicks: u32,
}

impl LoggingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    pub fn total(&self) -> u32 {
        self.moves + self.key_presses + self.clicks
    }
}

impl InputDevice for LoggingDevice {
    fn move_pointer(&mut self, x: i32, y: i32) {
        tracing::trace!(x, y, "pointer move");
        self.pointer = (x, y);
        self.moves += 1;
    }

    fn press_key(&mut self, key: Key) {
        tracing::trace!(%key, "key press");
        self.key_presses += 1;
    }

    fn click(&mut self, button: MouseButton) {
        tracing::trace!(%button, x = self.pointer.0, y = self.pointer.1, "click");
        self.clicks += 1;
    }
}
