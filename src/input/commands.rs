//! # Direction Mapping
//!
//! Turns the set of held arrow keys into a movement vector.

use macroquad::math::{vec2, Vec2};

/// Held-key snapshot reduced to a screen-space direction.
///
/// Screen coordinates grow right and down, so `down` is `+y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direction {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Direction {
    /// Creates a direction from the four arrow key states.
    pub fn from_keys(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Unnormalized movement vector. Each axis is -1, 0 or 1; opposite keys cancel.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold::Direction;
    ///
    /// let dir = Direction::from_keys(true, false, false, true);
    /// assert_eq!(dir.to_vec2(), macroquad::math::vec2(1.0, -1.0));
    /// ```
    pub fn to_vec2(self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        vec2(axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Returns true when no movement results.
    pub fn is_idle(self) -> bool {
        self.to_vec2() == Vec2::ZERO
    }
}
