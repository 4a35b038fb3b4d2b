//! # Input Module
//!
//! Keyboard polling for the demo loops.

pub mod commands;

pub use commands::*;

use macroquad::prelude::*;

/// Input handler for the demo loops.
///
/// Movement reads held keys every frame rather than press edges, so holding
/// an arrow key moves continuously.
pub struct InputHandler {
    /// Whether Escape ends the demo
    pub escape_quits: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.escape_quits);
    /// ```
    pub fn new() -> Self {
        Self { escape_quits: true }
    }

    /// Snapshot of the arrow keys currently held.
    pub fn direction(&self) -> Direction {
        Direction::from_keys(
            is_key_down(KeyCode::Up),
            is_key_down(KeyCode::Down),
            is_key_down(KeyCode::Left),
            is_key_down(KeyCode::Right),
        )
    }

    /// Polls the frame's input.
    pub fn poll(&self) -> PlayerInput {
        if self.escape_quits && is_key_pressed(KeyCode::Escape) {
            return PlayerInput::Quit;
        }

        let direction = self.direction();
        if direction.is_idle() {
            PlayerInput::Idle
        } else {
            PlayerInput::Move(direction)
        }
    }
}

/// Player input for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Move by the held arrow keys
    Move(Direction),
    /// Nothing relevant held
    Idle,
    /// Close the demo
    Quit,
}
