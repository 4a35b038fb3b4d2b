//! # Rotating Cube State

use crate::config::CubeConfig;
use crate::utils::{cube_mesh, default_spin_axis, wrap_degrees};
use macroquad::prelude::{Color, Mesh, Vec3, MAROON};

/// State of the rotating cube demo.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    /// Current rotation in degrees, always within `[0, 360)`
    pub rotation_deg: f32,
    /// Degrees added per frame
    pub step_deg: f32,
    /// Edge length in world units
    pub size: f32,
    /// Rotation axis, need not be normalized
    pub axis: Vec3,
    pub color: Color,
}

impl CubeState {
    /// Creates the cube at zero rotation.
    pub fn new(config: &CubeConfig) -> Self {
        Self {
            rotation_deg: 0.0,
            step_deg: config.step_deg,
            size: config.size,
            axis: default_spin_axis(),
            color: MAROON,
        }
    }

    /// Advances the rotation by one frame.
    pub fn advance(&mut self) {
        self.rotation_deg = wrap_degrees(self.rotation_deg + self.step_deg);
    }

    /// Geometry for the current frame.
    pub fn mesh(&self) -> Mesh {
        cube_mesh(self.size, self.axis, self.rotation_deg, self.color)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new(&CubeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unrotated() {
        let cube = CubeState::default();
        assert_eq!(cube.rotation_deg, 0.0);
        assert_eq!(cube.step_deg, 1.0);
        assert_eq!(cube.size, 2.0);
    }

    #[test]
    fn test_advance_adds_one_degree() {
        let mut cube = CubeState::default();
        cube.advance();
        cube.advance();
        assert!((cube.rotation_deg - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_full_turn_wraps() {
        let mut cube = CubeState::default();
        for _ in 0..360 {
            cube.advance();
        }
        assert!(cube.rotation_deg < 1e-3 || cube.rotation_deg > 360.0 - 1e-3);
        for _ in 0..90 {
            cube.advance();
        }
        assert!((cube.rotation_deg - 90.0).abs() < 1e-2);
    }

    #[test]
    fn test_negative_step_spins_backwards() {
        let config = CubeConfig {
            step_deg: -5.0,
            ..CubeConfig::default()
        };
        let mut cube = CubeState::new(&config);
        cube.advance();
        assert!((cube.rotation_deg - 355.0).abs() < 1e-4);
    }
}
