//! Backface culling and perspective projection onto the character grid

use crate::math::{calculate_normal, dot, Vec2, Vec3};

/// Fixed view direction used for the visibility test
pub const CAMERA_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Face normal of a camera-space triangle
pub fn face_normal(triangle: &[Vec3; 3]) -> Vec3 {
    calculate_normal(triangle[0], triangle[1], triangle[2])
}

/// A triangle is drawn only when its normal points against the view
/// direction. Edge-on faces (dot product of zero) are culled too.
pub fn is_front_facing(camera: Vec3, normal: Vec3) -> bool {
    dot(camera, normal) < 0.0
}

/// Perspective-divides a camera-space point and centers it on a
/// `columns` x `rows` grid, rounding to whole cells.
///
/// Returns `None` for a point at zero depth or one that lands on a
/// non-finite coordinate.
pub fn project(v: Vec3, columns: usize, rows: usize) -> Option<Vec2> {
    if v.z == 0.0 {
        return None;
    }
    let screen = Vec2::new(
        (v.x / v.z + columns as f64 / 2.0).round(),
        (v.y / v.z + rows as f64 / 2.0).round(),
    );
    screen.is_finite().then_some(screen)
}

/// Projects all three corners, or none of them
pub fn project_triangle(
    triangle: &[Vec3; 3],
    columns: usize,
    rows: usize,
) -> Option<[Vec2; 3]> {
    Some([
        project(triangle[0], columns, rows)?,
        project(triangle[1], columns, rows)?,
        project(triangle[2], columns, rows)?,
    ])
}
