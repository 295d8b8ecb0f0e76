use crate::math::{rotate_x, rotate_y, rotate_z, Vec3};
use std::f64::consts::TAU;

/// Distance the model is pushed along the view axis
pub const CAMERA_DISTANCE: f64 = 8.0;
/// Vertical scale from model units to grid cells (before the perspective divide)
pub const SCALE: f64 = 66.0;
/// Character cells are taller than wide; x gets this much more scale than y
pub const CELL_ASPECT: f64 = 2.5;

/// Rotation around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Advance by delta amounts, keeping every angle in `[0, 2π)`
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x = (self.x + dx).rem_euclid(TAU);
        self.y = (self.y + dy).rem_euclid(TAU);
        self.z = (self.z + dz).rem_euclid(TAU);
    }
}

/// Model-to-camera transform: rotate, push away from the viewer, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub distance: f64,
    pub scale: f64,
    pub aspect: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            scale: SCALE,
            aspect: CELL_ASPECT,
        }
    }
}

impl Transform {
    /// Transforms one vertex into camera space.
    ///
    /// Rotation order is X, then Y, then Z.
    pub fn apply(&self, vertex: Vec3, rotation: &Rotation) -> Vec3 {
        let v = rotate_x(vertex, rotation.x);
        let v = rotate_y(v, rotation.y);
        let v = rotate_z(v, rotation.z);
        Vec3::new(
            v.x * self.scale * self.aspect,
            v.y * self.scale,
            v.z + self.distance,
        )
    }

    /// Transforms a triangle's corners; the input is taken by value so the
    /// mesh it came from is never touched.
    pub fn apply_triangle(&self, triangle: [Vec3; 3], rotation: &Rotation) -> [Vec3; 3] {
        triangle.map(|vertex| self.apply(vertex, rotation))
    }
}
