//! # Display Management
//!
//! Camera setup, mesh drawing and frame pacing for the demo loops.

use crate::game::CubeState;
use macroquad::prelude::*;
use std::time::Duration;

/// Off-white background of the ball demo.
pub const RAYWHITE: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);

/// Vertical field of view of the cube demo, in degrees.
pub const CAMERA_FOVY_DEG: f32 = 45.0;

/// Fixed perspective camera looking at the origin from `(5, 5, 5)`.
pub fn cube_camera() -> Camera3D {
    Camera3D {
        position: vec3(5.0, 5.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        fovy: CAMERA_FOVY_DEG.to_radians(),
        projection: Projection::Perspective,
        ..Default::default()
    }
}

/// Draws the cube with `camera` active, then restores the 2D camera.
pub fn draw_cube(camera: &Camera3D, cube: &CubeState) {
    set_camera(camera);
    draw_mesh(&cube.mesh());
    set_default_camera();
}

/// Caps the loop rate by sleeping out the rest of each frame.
///
/// macroquad paces frames with vsync only, so this supplies the explicit cap
/// a fixed-rate loop needs. Time comes from macroquad's clock, which every
/// macroquad target provides; the clock is first read on the first `wait`.
#[derive(Debug)]
pub struct FrameLimiter {
    frame_time: Option<Duration>,
    /// `get_time()` seconds when the current frame began
    frame_start: Option<f64>,
}

impl FrameLimiter {
    /// Creates a limiter for `target_fps`; `0` disables the cap.
    pub fn new(target_fps: u32) -> Self {
        let frame_time = (target_fps > 0).then(|| Duration::from_secs(1) / target_fps);
        Self {
            frame_time,
            frame_start: None,
        }
    }

    /// Target duration of one frame, if capped.
    pub fn frame_time(&self) -> Option<Duration> {
        self.frame_time
    }

    /// Whether a frame has been started.
    pub fn is_started(&self) -> bool {
        self.frame_start.is_some()
    }

    /// Time left in the frame after `elapsed` has been spent.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_time
            .and_then(|frame| frame.checked_sub(elapsed))
            .filter(|left| !left.is_zero())
    }

    /// Time left in the current frame at clock reading `now` (seconds).
    /// Nothing is owed before the first frame starts.
    pub fn remaining_at(&self, now: f64) -> Option<Duration> {
        let start = self.frame_start?;
        self.remaining(Duration::from_secs_f64((now - start).max(0.0)))
    }

    /// Marks the start of a frame at clock reading `now` (seconds).
    pub fn start_frame_at(&mut self, now: f64) {
        self.frame_start = Some(now);
    }

    /// Sleeps until the frame budget is used up, then starts the next frame.
    ///
    /// Browsers cannot block, so on wasm32 pacing is left to the host's
    /// animation frames.
    pub fn wait(&mut self) {
        if let Some(left) = self.remaining_at(get_time()) {
            #[cfg(not(target_arch = "wasm32"))]
            std::thread::sleep(left);
            #[cfg(target_arch = "wasm32")]
            let _ = left;
        }
        self.start_frame_at(get_time());
    }
}
