//! # Demo Scenes
//!
//! The per-demo frame loops. Each iteration polls input, advances state,
//! draws, then paces the frame until the window closes or Escape is pressed.

use crate::config::{BallConfig, CubeConfig};
use crate::game::{BallState, CubeState};
use crate::input::{InputHandler, PlayerInput};
use crate::rendering::{cube_camera, draw_cube, draw_fps_at, FrameLimiter, HudText, RAYWHITE};
use crate::ScaffoldResult;
use log::{debug, info};
use macroquad::prelude::*;

/// Hint shown by the ball demo.
pub const BALL_HINT: &str = "Arrow keys to move";

/// The rotating cube demo.
pub struct CubeScene {
    cube: CubeState,
    camera: Camera3D,
    input_handler: InputHandler,
    limiter: FrameLimiter,
}

impl CubeScene {
    /// Line logged when the demo starts.
    pub fn startup_message() -> String {
        format!("Core version: {}", crate::version())
    }

    pub fn new(config: &CubeConfig) -> Self {
        Self {
            cube: CubeState::new(config),
            camera: cube_camera(),
            input_handler: InputHandler::new(),
            limiter: FrameLimiter::new(config.window.target_fps),
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.cube
    }

    /// Runs the scene loop until the demo exits.
    pub async fn run(&mut self) -> ScaffoldResult<()> {
        info!(
            "Cube scene running (size {}, {} deg/frame)",
            self.cube.size, self.cube.step_deg
        );

        loop {
            if self.input_handler.poll() == PlayerInput::Quit {
                info!("Quit requested");
                break;
            }

            self.cube.advance();
            self.render();

            self.limiter.wait();
            next_frame().await;
        }

        info!("Cube scene ended");
        Ok(())
    }

    fn render(&self) {
        clear_background(BLACK);
        draw_cube(&self.camera, &self.cube);
        draw_fps_at(10.0, 10.0);
    }
}

/// The movable ball demo.
pub struct BallScene {
    ball: BallState,
    clamp_to_window: bool,
    hint: HudText,
    input_handler: InputHandler,
    limiter: FrameLimiter,
}

impl BallScene {
    /// Line logged when the demo starts.
    pub fn startup_message() -> String {
        "Starting ball demo".to_string()
    }

    pub fn new(config: &BallConfig) -> Self {
        Self {
            ball: BallState::new(config),
            clamp_to_window: config.clamp_to_window,
            hint: HudText::new(BALL_HINT, 10.0, 10.0, 20.0, DARKGRAY),
            input_handler: InputHandler::new(),
            limiter: FrameLimiter::new(config.window.target_fps),
        }
    }

    pub fn state(&self) -> &BallState {
        &self.ball
    }

    /// Runs the scene loop until the demo exits.
    pub async fn run(&mut self) -> ScaffoldResult<()> {
        info!(
            "Ball scene running (radius {}, speed {})",
            self.ball.radius, self.ball.speed
        );

        loop {
            match self.input_handler.poll() {
                PlayerInput::Quit => {
                    info!("Quit requested");
                    break;
                }
                PlayerInput::Move(direction) => {
                    self.ball.step(direction);
                    debug!("Ball at {:?}", self.ball.position);
                }
                PlayerInput::Idle => {}
            }

            if self.clamp_to_window {
                self.ball
                    .set_bounds(Some(vec2(screen_width(), screen_height())));
            }

            self.render();

            self.limiter.wait();
            next_frame().await;
        }

        info!("Ball scene ended");
        Ok(())
    }

    fn render(&self) {
        clear_background(RAYWHITE);
        draw_circle(
            self.ball.position.x,
            self.ball.position.y,
            self.ball.radius,
            self.ball.color,
        );
        self.hint.draw();
        draw_fps_at(10.0, 40.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_scene_initial_state() {
        let scene = CubeScene::new(&CubeConfig::default());
        assert_eq!(scene.state().rotation_deg, 0.0);
        assert_eq!(scene.camera.position, vec3(5.0, 5.0, 5.0));
        assert_eq!(scene.limiter.frame_time().unwrap().as_micros(), 16_666);
        assert!(!scene.limiter.is_started());
    }

    #[test]
    fn test_startup_messages() {
        assert_eq!(CubeScene::startup_message(), "Core version: 0.0.1");
        assert!(!BallScene::startup_message().contains(crate::VERSION));
    }

    #[test]
    fn test_ball_scene_initial_state() {
        let scene = BallScene::new(&BallConfig::default());
        assert_eq!(scene.state().position, vec2(400.0, 300.0));
        assert_eq!(scene.hint.text, BALL_HINT);
        assert!(!scene.clamp_to_window);
    }
}
