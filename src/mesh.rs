use crate::error::ConfigError;
use crate::math::Vec3;

/// Cube corners
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0), // 0
    Vec3::new(-1.0, 1.0, -1.0),  // 1
    Vec3::new(1.0, 1.0, -1.0),   // 2
    Vec3::new(1.0, -1.0, -1.0),  // 3
    Vec3::new(1.0, 1.0, 1.0),    // 4
    Vec3::new(1.0, -1.0, 1.0),   // 5
    Vec3::new(-1.0, -1.0, 1.0),  // 6
    Vec3::new(-1.0, 1.0, 1.0),   // 7
];

/// Cube faces, two triangles each, all wound the same way
pub const CUBE_TRIANGLES: [[usize; 3]; 12] = [
    // front
    [0, 1, 2],
    [0, 2, 3],
    // right
    [3, 2, 4],
    [3, 4, 5],
    // back
    [5, 4, 7],
    [5, 7, 6],
    // left
    [6, 7, 1],
    [6, 1, 0],
    // top
    [6, 0, 3],
    [6, 3, 5],
    // bottom
    [1, 7, 4],
    [1, 4, 2],
];

/// Immutable triangle mesh: a vertex table plus index triples into it
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<[usize; 3]>,
}

impl Mesh {
    /// Builds a mesh, rejecting any triangle whose indices fall outside the
    /// vertex table.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[usize; 3]>) -> Result<Self, ConfigError> {
        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(ConfigError::InvalidMesh {
                    triangle,
                    index,
                    vertices: vertices.len(),
                });
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// The unit cube centered on the origin (corners at ±1)
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            triangles: CUBE_TRIANGLES.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Copies out the three corner positions of a triangle
    pub fn triangle(&self, index: usize) -> Option<[Vec3; 3]> {
        let [a, b, c] = *self.triangles.get(index)?;
        Some([self.vertices[a], self.vertices[b], self.vertices[c]])
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::cube()
    }
}
