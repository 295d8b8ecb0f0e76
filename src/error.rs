use std::fmt;

/// Startup configuration failures. None of these can be recovered from; the
/// renderer refuses to start without a valid target.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The output surface size could not be queried
    SizeUnavailable,
    /// The output surface has a zero dimension
    EmptySurface { columns: usize, rows: usize },
    /// The symbol palette has no characters
    EmptyPalette,
    /// A triangle refers to a vertex that does not exist
    InvalidMesh {
        triangle: usize,
        index: usize,
        vertices: usize,
    },
    /// A numeric setting is out of range
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeUnavailable => write!(
                f,
                "could not determine the terminal size (pass --columns and --rows)"
            ),
            ConfigError::EmptySurface { columns, rows } => {
                write!(f, "output surface {}x{} has no cells", columns, rows)
            }
            ConfigError::EmptyPalette => write!(f, "symbol palette is empty"),
            ConfigError::InvalidMesh {
                triangle,
                index,
                vertices,
            } => write!(
                f,
                "triangle {} refers to vertex {} but the mesh has {} vertices",
                triangle, index, vertices
            ),
            ConfigError::InvalidParameter { name, value } => {
                write!(f, "invalid value {} for {}", value, name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
