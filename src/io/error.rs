//! Error types for the sampling, tiling and export stages

use std::fmt;
use std::path::PathBuf;

/// Every way a conversion run can fail
#[derive(Debug)]
pub enum TruchetError {
    /// The source image could not be opened or decoded
    ImageLoad {
        /// File that was read
        path: PathBuf,
        /// Decoder failure
        source: image::ImageError,
    },

    /// Source image cannot hold a single tile cell
    ///
    /// Occurs when either image dimension is smaller than the cell length,
    /// which would otherwise produce an empty luminance matrix.
    ImageTooSmall {
        /// Source image width in pixels
        width: usize,
        /// Source image height in pixels
        height: usize,
        /// Requested cell side length in pixels
        length: usize,
    },

    /// Pattern tag outside the four known tile patterns
    InvalidPattern {
        /// The rejected tag
        tag: String,
    },

    /// A configuration value or command-line argument is out of range
    InvalidParameter {
        /// Parameter name as the user would write it
        parameter: &'static str,
        /// Rejected value, already formatted
        value: String,
        /// Accepted range or rule
        reason: String,
    },

    /// The rendered raster could not be encoded or written
    ImageExport {
        /// Destination file
        path: PathBuf,
        /// Encoder failure
        source: image::ImageError,
    },

    /// Rasterization could not be carried out
    Render {
        /// Rendering step that failed
        operation: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Reading a directory or writing an output file failed
    FileSystem {
        /// File or directory being accessed
        path: PathBuf,
        /// Short verb phrase for the access
        operation: &'static str,
        /// OS failure
        source: std::io::Error,
    },
}

impl fmt::Display for TruchetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot read image '{}': {source}", path.display())
            }
            Self::ImageTooSmall {
                width,
                height,
                length,
            } => write!(
                f,
                "Image of {width}x{height} pixels is smaller than one {length}x{length} cell"
            ),
            Self::InvalidPattern { tag } => {
                write!(f, "Unknown tile pattern '{tag}' (expected A, B, C or D)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Bad value '{value}' for {parameter}: {reason}"),
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write raster '{}': {source}", path.display())
            }
            Self::Render { operation, reason } => {
                write!(f, "Rendering failed during {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Cannot {operation} '{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for TruchetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageTooSmall { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidParameter { .. }
            | Self::Render { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TruchetError>;

/// Build an [`TruchetError::InvalidParameter`] from displayable parts
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TruchetError {
    TruchetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build a [`TruchetError::Render`]
pub fn render_error(operation: &'static str, reason: &impl ToString) -> TruchetError {
    TruchetError::Render {
        operation,
        reason: reason.to_string(),
    }
}

/// Build a [`TruchetError::FileSystem`] for an access to `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TruchetError {
    TruchetError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
