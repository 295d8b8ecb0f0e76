//! Command line configuration.

use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::renderer::{RenderMode, RenderSettings, DEFAULT_PALETTE};
use crate::transform::{Transform, CAMERA_DISTANCE, CELL_ASPECT, SCALE};

/// A rotating 3D cube drawn with text characters
#[derive(Debug, Clone, Parser)]
#[command(name = "textcube", version, about)]
pub struct Args {
    /// Grid width in characters (defaults to the terminal width)
    #[arg(long, requires = "rows")]
    pub columns: Option<u16>,

    /// Grid height in characters (defaults to the terminal height)
    #[arg(long, requires = "columns")]
    pub rows: Option<u16>,

    /// Frames per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Radians added to each axis every frame
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub step: f64,

    /// Symbols given to visible triangles in draw order
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Distance from the camera to the cube center
    #[arg(long, default_value_t = CAMERA_DISTANCE, allow_negative_numbers = true)]
    pub distance: f64,

    /// Cells per model unit, vertically
    #[arg(long, default_value_t = SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// Horizontal stretch for non-square character cells
    #[arg(long, default_value_t = CELL_ASPECT, allow_negative_numbers = true)]
    pub aspect: f64,

    /// Draw triangle outlines instead of filled faces
    #[arg(long)]
    pub wireframe: bool,

    /// Show the debug overlay from the start
    #[arg(long)]
    pub debug: bool,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,
}

impl Args {
    /// Grid size as `(columns, rows)`: the command line if given, the
    /// terminal otherwise.
    pub fn surface_size(&self) -> Result<(usize, usize), ConfigError> {
        match (self.columns, self.rows) {
            (Some(columns), Some(rows)) => Ok((columns as usize, rows as usize)),
            _ => terminal_size(),
        }
    }

    pub fn transform(&self) -> Result<Transform, ConfigError> {
        check("distance", self.distance, |v| v.is_finite())?;
        check("scale", self.scale, |v| v.is_finite() && v > 0.0)?;
        check("aspect", self.aspect, |v| v.is_finite() && v > 0.0)?;
        Ok(Transform {
            distance: self.distance,
            scale: self.scale,
            aspect: self.aspect,
        })
    }

    /// Validates everything and resolves the grid size
    pub fn render_settings(&self) -> Result<RenderSettings, ConfigError> {
        check("step", self.step, |v| v.is_finite())?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let transform = self.transform()?;
        let (columns, rows) = self.surface_size()?;
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptySurface { columns, rows });
        }

        Ok(RenderSettings {
            columns,
            rows,
            palette: self.palette.clone(),
            transform,
            mode: if self.wireframe {
                RenderMode::Wireframe
            } else {
                RenderMode::Filled
            },
        })
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps))
    }
}

/// Queries the terminal for its size as `(columns, rows)`
pub fn terminal_size() -> Result<(usize, usize), ConfigError> {
    let size = termsize::get().ok_or(ConfigError::SizeUnavailable)?;
    Ok((size.cols as usize, size.rows as usize))
}

fn check(
    name: &'static str,
    value: f64,
    valid: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if valid(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
