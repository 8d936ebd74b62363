//! Error types for maze loading, solving and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Position;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The entry row or the exit row contains no node
    ///
    /// Raised before any traversal starts. An image with no open pixels
    /// reports row 0.
    EmptyMaze {
        /// Row that was expected to hold the entry or the exit
        row: u32,
    },

    /// Traversal backtracked past the entry without reaching the exit
    NoPathFound {
        /// Last node reached before the final retreat
        furthest: Position,
        /// Number of nodes visited during the search
        explored: usize,
    },

    /// A pixel query fell outside the oracle's declared bounds
    ///
    /// Extraction and connectivity only ask about in-bounds pixels, so this
    /// signals an oracle that contradicts its own dimensions.
    MalformedOracle {
        /// Offending position
        position: Position,
        /// Dimensions declared by the oracle as (width, height)
        dimensions: (u32, u32),
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyMaze { row } => {
                write!(f, "No entry or exit node found in row {row}")
            }
            Self::NoPathFound { furthest, explored } => {
                write!(
                    f,
                    "No path to the exit; furthest node reached was {furthest} after exploring {explored} nodes"
                )
            }
            Self::MalformedOracle {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Pixel query at {position} is outside the {}x{} field",
                    dimensions.0, dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a CLI target that cannot be processed
pub fn invalid_target(path: &std::path::Path, reason: &str) -> MazeError {
    MazeError::InvalidParameter {
        parameter: "target",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
