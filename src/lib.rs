//! Truchet tile illustrations from greyscale images
//!
//! The pipeline samples image luminance on a regular grid, maps each cell to a
//! tile center through a piecewise-linear response curve, builds one polygon
//! per cell in a checkerboard of tile patterns, and exports the result as a
//! raster image and an SVG file.

#![forbid(unsafe_code)]

/// Composition of the pipeline stages
pub mod algorithm;
/// Tile templates, polygons and grid assembly
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Luminance to tile center mapping
pub mod mapping;
/// Grid luminance sampling over rasters
pub mod sampling;

pub use algorithm::pipeline::{PipelineOutput, run_pipeline};
pub use io::configuration::{PipelineConfig, RenderConfig};
pub use io::error::{Result, TruchetError};
