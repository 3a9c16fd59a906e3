//! Low-level input operations and their timing.
//!
//! An [`HidOperation`] is the smallest executable input effect: it performs
//! one effect on an [`InputDevice`] and reports how long to pause afterwards.
//! [`OperationRunner`] executes sequences of operations, pausing after each
//! one for a [`DelayPolicy`]-derived, randomly extended delay.

pub mod delay;
pub mod operations;
pub mod runner;

use std::time::Duration;

use game_core::Key;

pub use delay::DelayPolicy;
pub use operations::{KeyPress, MouseClick, MouseDisplacement};
pub use runner::OperationRunner;

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
}

/// Device that injects input into the game client.
///
/// Implementations own their error handling; the runner treats every call as
/// infallible.
pub trait InputDevice {
    /// Moves the pointer to absolute screen coordinates.
    fn move_pointer(&mut self, x: i32, y: i32);

    /// Presses and releases a key.
    fn press_key(&mut self, key: Key);

    /// Presses and releases a mouse button at the current pointer position.
    fn click(&mut self, button: MouseButton);
}

impl<D: InputDevice + ?Sized> InputDevice for &mut D {
    fn move_pointer(&mut self, x: i32, y: i32) {
        (**self).move_pointer(x, y);
    }

    fn press_key(&mut self, key: Key) {
        (**self).press_key(key);
    }

    fn click(&mut self, button: MouseButton) {
        (**self).click(button);
    }
}

/// One atomic input effect plus the pause that follows it.
pub trait HidOperation: Send {
    /// Performs the effect on `device`.
    fn execute(&self, device: &mut dyn InputDevice);

    /// Base pause after the effect, before random extension.
    fn base_delay(&self) -> Duration;
}

/// Blanket implementation for boxed operations.
///
/// This allows heterogeneous `Vec<Box<dyn HidOperation>>` sequences to be
/// handed to the runner.
impl HidOperation for Box<dyn HidOperation> {
    #[inline]
    fn execute(&self, device: &mut dyn InputDevice) {
        (**self).execute(device)
    }

    #[inline]
    fn base_delay(&self) -> Duration {
        (**self).base_delay()
    }
}
