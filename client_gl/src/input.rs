//! Keyboard state for both paddles on one keyboard

use game_core::{PaddleInput, Side};
use winit::event::VirtualKeyCode;

/// Held keys. Left paddle uses W/S, right paddle the arrow keys.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyState {
    left: PaddleInput,
    right: PaddleInput,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Returns false for keys that don't steer a paddle.
    pub fn handle_key(&mut self, key: VirtualKeyCode, pressed: bool) -> bool {
        match key {
            VirtualKeyCode::W => self.left.up = pressed,
            VirtualKeyCode::S => self.left.down = pressed,
            VirtualKeyCode::Up => self.right.up = pressed,
            VirtualKeyCode::Down => self.right.down = pressed,
            _ => return false,
        }
        true
    }

    pub fn input(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Drop everything held, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
