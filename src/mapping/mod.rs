//! Conversion from cell luminance to tile shape parameters

/// Piecewise-linear luminance to center response curve
pub mod center;

pub use center::{CenterMatrix, center_for_intensity, map_centers};
