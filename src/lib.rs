//! Rotating 3D cube drawn with text characters.
//!
//! Each frame the cube mesh is rotated, culled against a fixed camera
//! direction, perspective-projected onto a character grid and scan-converted
//! into a [`FrameBuffer`], which the binary then flushes to the terminal.

pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod graphics;
pub mod input;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod renderer;
pub mod state;
pub mod transform;

pub use error::ConfigError;
pub use framebuffer::FrameBuffer;
pub use renderer::{RenderMode, RenderSettings, Renderer};
pub use transform::Rotation;
