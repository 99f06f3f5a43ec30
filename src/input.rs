//! Keyboard state as the game sees it: four directional flags.

use bitflags::bitflags;
use tracing::trace;

use crate::entity::direction::Direction;

/// Browser-style keycodes for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

bitflags! {
    /// Which arrow keys are currently held.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyState: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl KeyState {
    /// The flag driven by `keycode`, if it is an arrow key.
    pub fn from_keycode(keycode: u32) -> Option<KeyState> {
        match keycode {
            KEY_UP => Some(KeyState::UP),
            KEY_DOWN => Some(KeyState::DOWN),
            KEY_LEFT => Some(KeyState::LEFT),
            KEY_RIGHT => Some(KeyState::RIGHT),
            _ => None,
        }
    }

    /// Sets the flag for a pressed key. Returns whether the key was handled.
    pub fn key_down(&mut self, keycode: u32) -> bool {
        match KeyState::from_keycode(keycode) {
            Some(flag) => {
                self.insert(flag);
                trace!(keycode, state = ?self, "Key down");
                true
            }
            None => false,
        }
    }

    /// Clears the flag for a released key. Returns whether the key was handled.
    pub fn key_up(&mut self, keycode: u32) -> bool {
        match KeyState::from_keycode(keycode) {
            Some(flag) => {
                self.remove(flag);
                trace!(keycode, state = ?self, "Key up");
                true
            }
            None => false,
        }
    }

    /// The requested direction. When several keys are held, up wins over
    /// down, down over left, and left over right.
    pub fn direction(&self) -> Option<Direction> {
        [
            (KeyState::UP, Direction::Up),
            (KeyState::DOWN, Direction::Down),
            (KeyState::LEFT, Direction::Left),
            (KeyState::RIGHT, Direction::Right),
        ]
        .into_iter()
        .find(|(flag, _)| self.contains(*flag))
        .map(|(_, direction)| direction)
    }
}
