//! # Demo Geometry
//!
//! Angle wrapping and the shaded cube mesh drawn by the cube demo.

use macroquad::prelude::{vec2, vec3, Color, Mesh, Quat, Vec3, Vertex};

/// Per-face brightness so a flat-colored cube still reads as a solid.
const FACE_SHADES: [f32; 6] = [1.0, 0.85, 0.7, 0.9, 0.75, 0.6];

/// Face normals paired with two in-plane axes.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Scales the RGB channels of `color`, leaving alpha untouched.
pub fn shade(color: Color, factor: f32) -> Color {
    Color::new(
        (color.r * factor).clamp(0.0, 1.0),
        (color.g * factor).clamp(0.0, 1.0),
        (color.b * factor).clamp(0.0, 1.0),
        color.a,
    )
}

/// Corner positions of an axis-aligned cube centered on the origin, four per face.
pub fn cube_corners(size: f32) -> Vec<Vec3> {
    let h = size * 0.5;
    FACES
        .iter()
        .flat_map(|&(n, u, v)| {
            [
                (n - u - v) * h,
                (n + u - v) * h,
                (n + u + v) * h,
                (n - u + v) * h,
            ]
        })
        .collect()
}

/// Builds a cube of edge `size` rotated by `angle_deg` about `axis`.
///
/// Returns 24 vertices (four per face, so each face can carry its own shade)
/// and 36 indices. A zero axis leaves the cube unrotated.
pub fn cube_mesh(size: f32, axis: Vec3, angle_deg: f32, color: Color) -> Mesh {
    let rotation = match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, angle_deg.to_radians()),
        None => Quat::IDENTITY,
    };

    let uvs = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
    let corners = cube_corners(size);

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (face, quad) in corners.chunks_exact(4).enumerate() {
        let face_color = shade(color, FACE_SHADES[face]);
        let base = vertices.len() as u16;
        for (corner, uv) in quad.iter().zip(uvs) {
            vertices.push(Vertex::new2(rotation * *corner, uv, face_color));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

/// The axis the cube demo spins around.
pub fn default_spin_axis() -> Vec3 {
    vec3(1.0, 1.0, 0.0)
}
