//! Concrete input operations.

use std::time::Duration;

use game_core::Key;

use super::{HidOperation, InputDevice, MouseButton};

/// Moves the pointer to absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseDisplacement {
    pub x: i32,
    pub y: i32,
    delay: Duration,
}

impl MouseDisplacement {
    pub const fn new(x: i32, y: i32, delay: Duration) -> Self {
        Self { x, y, delay }
    }
}

impl HidOperation for MouseDisplacement {
    fn execute(&self, device: &mut dyn InputDevice) {
        device.move_pointer(self.x, self.y);
    }

    fn base_delay(&self) -> Duration {
        self.delay
    }
}

/// Presses a key, typically the one bound to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    delay: Duration,
}

impl KeyPress {
    pub const fn new(key: Key, delay: Duration) -> Self {
        Self { key, delay }
    }
}

impl HidOperation for KeyPress {
    fn execute(&self, device: &mut dyn InputDevice) {
        device.press_key(self.key);
    }

    fn base_delay(&self) -> Duration {
        self.delay
    }
}

/// Clicks a mouse button at the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseClick {
    pub button: MouseButton,
    delay: Duration,
}

impl MouseClick {
    pub const fn new(button: MouseButton, delay: Duration) -> Self {
        Self { button, delay }
    }
}

impl HidOperation for MouseClick {
    fn execute(&self, device: &mut dyn InputDevice) {
        device.click(self.button);
    }

    fn base_delay(&self) -> Duration {
        self.delay
    }
}
