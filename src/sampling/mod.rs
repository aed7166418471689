//! Luminance sampling over a regular grid of image cells
//!
//! This module contains:
//! - The raster abstraction the sampler reads from
//! - Image-space to drawing-space cell coordinate conversion
//! - Mean intensity aggregation per cell

/// Image-space and drawing-space cell index conversion
pub mod coordinates;
/// Per-cell mean intensity aggregation
pub mod luminance;
/// Pixel-accessible intensity rasters
pub mod raster;

pub use luminance::{LuminanceMatrix, sample_luminance};
pub use raster::IntensitySource;
