//! Frame-by-frame behavior of the demo state, driven without a window.

use macroquad::prelude::vec2;
use scaffold::{BallConfig, BallState, CubeConfig, CubeState, Direction};

#[test]
fn test_cube_spins_one_degree_per_frame() {
    let mut cube = CubeState::new(&CubeConfig::default());
    for _ in 0..45 {
        cube.advance();
    }
    assert!((cube.rotation_deg - 45.0).abs() < 1e-4);
}

#[test]
fn test_cube_mesh_follows_rotation() {
    let mut cube = CubeState::new(&CubeConfig::default());
    let before = cube.mesh();
    cube.advance();
    let after = cube.mesh();

    let moved = before
        .vertices
        .iter()
        .zip(after.vertices.iter())
        .any(|(a, b)| (a.position - b.position).length() > 1e-4);
    assert!(moved);
}

#[test]
fn test_ball_moves_with_held_keys() {
    let mut ball = BallState::new(&BallConfig::default());
    let right_and_down = Direction::from_keys(false, true, false, true);

    for _ in 0..10 {
        ball.step(right_and_down);
    }
    assert_eq!(ball.position, vec2(440.0, 340.0));

    let left = Direction::from_keys(false, false, true, false);
    for _ in 0..10 {
        ball.step(left);
    }
    assert_eq!(ball.position, vec2(400.0, 340.0));
}

#[test]
fn test_clamped_ball_hugs_top_right_corner() {
    let config = BallConfig {
        clamp_to_window: true,
        ..BallConfig::default()
    };
    let mut ball = BallState::new(&config);
    let up_right = Direction::from_keys(true, false, false, true);
    for _ in 0..500 {
        ball.step(up_right);
    }
    assert_eq!(ball.position, vec2(750.0, 50.0));
}
