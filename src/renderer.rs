//! Per-frame pipeline: transform, cull, project, rasterize.

use crate::error::ConfigError;
use crate::framebuffer::FrameBuffer;
use crate::graphics::{draw_line, draw_triangle};
use crate::math::{Vec2, Vec3};
use crate::mesh::Mesh;
use crate::projection::{
    face_normal, is_front_facing, project_triangle, CAMERA_DIRECTION,
};
use crate::transform::{Rotation, Transform};

/// Symbols handed out to visible triangles in draw order
pub const DEFAULT_PALETTE: &str = "$$**..--@@##";

/// How visible triangles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Filled,
    /// Triangle outlines only
    Wireframe,
}

/// Everything the renderer needs to be built
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub columns: usize,
    pub rows: usize,
    pub palette: String,
    pub transform: Transform,
    pub mode: RenderMode,
}

impl RenderSettings {
    /// Default cube view on a grid of the given size
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            palette: DEFAULT_PALETTE.to_string(),
            transform: Transform::default(),
            mode: RenderMode::default(),
        }
    }
}

/// Owns the mesh and the frame buffer; draws one frame per call
#[derive(Debug, Clone)]
pub struct Renderer {
    mesh: Mesh,
    palette: Vec<char>,
    camera: Vec3,
    transform: Transform,
    mode: RenderMode,
    frame: FrameBuffer,
}

impl Renderer {
    pub fn new(settings: &RenderSettings) -> Result<Self, ConfigError> {
        Self::with_mesh(settings, Mesh::cube())
    }

    pub fn with_mesh(settings: &RenderSettings, mesh: Mesh) -> Result<Self, ConfigError> {
        let palette: Vec<char> = settings.palette.chars().collect();
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let frame = FrameBuffer::new(settings.columns, settings.rows)?;

        Ok(Self {
            mesh,
            palette,
            camera: CAMERA_DIRECTION,
            transform: settings.transform,
            mode: settings.mode,
            frame,
        })
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Clears the frame buffer and draws the mesh at the given rotation.
    ///
    /// The n-th triangle that survives culling gets `palette[n % len]`, so a
    /// face's symbol depends on what else is visible this frame.
    pub fn render_frame(&mut self, rotation: Rotation) -> &FrameBuffer {
        self.frame.clear();

        let mut drawn = 0;
        for index in 0..self.mesh.triangles().len() {
            let Some(points) = self.visible_projection(index, &rotation) else {
                continue;
            };
            let symbol = self.palette[drawn % self.palette.len()];
            drawn += 1;

            let [a, b, c] = points;
            match self.mode {
                RenderMode::Filled => draw_triangle(&mut self.frame, a, b, c, symbol),
                RenderMode::Wireframe => {
                    draw_line(&mut self.frame, a, b, symbol);
                    draw_line(&mut self.frame, b, c, symbol);
                    draw_line(&mut self.frame, c, a, symbol);
                }
            }
        }

        &self.frame
    }

    /// Indices of the triangles that pass the backface test at this rotation
    pub fn visible_triangles(&self, rotation: Rotation) -> Vec<usize> {
        (0..self.mesh.triangles().len())
            .filter(|&index| self.visible_projection(index, &rotation).is_some())
            .collect()
    }

    /// Transforms, culls and projects one triangle. `None` means it is not
    /// drawn this frame: facing away, edge-on, or at zero depth.
    fn visible_projection(&self, index: usize, rotation: &Rotation) -> Option<[Vec2; 3]> {
        let base = self.mesh.triangle(index)?;
        let transformed = self.transform.apply_triangle(base, rotation);
        if !is_front_facing(self.camera, face_normal(&transformed)) {
            return None;
        }
        let projected = project_triangle(&transformed, self.frame.columns(), self.frame.rows());
        if projected.is_none() {
            log::trace!("triangle {} has a vertex at zero depth, skipped", index);
        }
        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_front_face_only_at_rest() {
        let renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
        assert_eq!(renderer.visible_triangles(Rotation::default()), vec![0, 1]);
    }

    #[test]
    fn test_turned_cube_shows_two_faces() {
        let renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
        // An eighth of a turn about Y brings the +x face round to the viewer.
        let visible = renderer.visible_triangles(Rotation::new(0.0, FRAC_PI_4, 0.0));
        assert_eq!(visible, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_palette_counts_visible_triangles() {
        let mut settings = RenderSettings::new(40, 20);
        settings.palette = "ab".to_string();
        let mut renderer = Renderer::new(&settings).unwrap();
        let frame = renderer.render_frame(Rotation::default());

        // Triangle 0 covers the left-bottom half, triangle 1 the right-top half.
        assert_eq!(frame.get(17, 2), Some('a'));
        assert_eq!(frame.get(2, 37), Some('b'));
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let mut settings = RenderSettings::new(40, 20);
        settings.palette.clear();
        assert_eq!(
            Renderer::new(&settings).unwrap_err(),
            ConfigError::EmptyPalette
        );
    }

    #[test]
    fn test_wireframe_draws_less_than_filled() {
        let mut renderer = Renderer::new(&RenderSettings::new(40, 20)).unwrap();
        let rotation = Rotation::new(0.3, 0.5, 0.1);
        let filled = renderer.render_frame(rotation).filled_cells();

        renderer.set_mode(RenderMode::Wireframe);
        assert_eq!(renderer.mode(), RenderMode::Wireframe);
        let outline = renderer.render_frame(rotation).filled_cells();

        assert!(outline > 0);
        assert!(outline < filled);
    }
}
