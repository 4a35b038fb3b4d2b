//! # Movable Ball State

use crate::config::BallConfig;
use crate::input::Direction;
use macroquad::prelude::{vec2, Color, Vec2, MAROON};

/// State of the movable ball demo.
#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    /// Circle center in screen pixels
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Pixels moved per frame per held key
    pub speed: f32,
    /// Screen size to keep the circle inside, `None` lets it leave the screen
    pub bounds: Option<Vec2>,
}

impl BallState {
    /// Starting position used by the demo.
    pub const START: Vec2 = Vec2::new(400.0, 300.0);

    /// Creates the ball at its starting position.
    pub fn new(config: &BallConfig) -> Self {
        let bounds = config.clamp_to_window.then(|| {
            vec2(config.window.width as f32, config.window.height as f32)
        });

        let mut ball = Self {
            position: Self::START,
            radius: config.radius,
            color: MAROON,
            speed: config.speed,
            bounds,
        };
        ball.clamp();
        ball
    }

    /// Moves the ball one frame's worth in `direction`.
    pub fn step(&mut self, direction: Direction) {
        self.position += direction.to_vec2() * self.speed;
        self.clamp();
    }

    /// Updates the clamp area, e.g. after a window resize.
    pub fn set_bounds(&mut self, bounds: Option<Vec2>) {
        self.bounds = bounds;
        self.clamp();
    }

    fn clamp(&mut self) {
        if let Some(bounds) = self.bounds {
            self.position.x = clamp_axis(self.position.x, self.radius, bounds.x);
            self.position.y = clamp_axis(self.position.y, self.radius, bounds.y);
        }
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::new(&BallConfig::default())
    }
}

/// Clamps a center coordinate so a circle of `radius` fits in `[0, extent]`.
/// A circle wider than the extent is centered.
fn clamp_axis(value: f32, radius: f32, extent: f32) -> f32 {
    if extent <= 2.0 * radius {
        extent * 0.5
    } else {
        value.clamp(radius, extent - radius)
    }
}
