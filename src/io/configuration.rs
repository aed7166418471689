//! Pipeline constants and runtime configuration defaults

use crate::geometry::tiling::PatternStrategy;
use crate::io::error::{Result, invalid_parameter};

// Response curve calibration for 8-bit intensities
/// Largest intensity of the source range
pub const MAX_INTENSITY: f64 = 255.0;
/// Normalized intensity at or below which a cell counts as fully dark
pub const DARK_THRESHOLD: f64 = 0.25;
/// Normalized intensity at or above which a cell counts as fully bright
pub const BRIGHT_THRESHOLD: f64 = 0.75;
/// Smallest center a cell can be assigned (fully bright)
pub const MIN_CENTER: f64 = 0.25;
/// Largest center a cell can be assigned (fully dark)
pub const MAX_CENTER: f64 = 0.75;

// Default values for configurable parameters
/// Default tile cell side length in pixels
pub const DEFAULT_TILE_LENGTH: usize = 2;
/// Default raster pixels per canvas unit
pub const DEFAULT_RASTER_SCALE: f64 = 4.0;
/// Default polygon outline width in canvas units
pub const DEFAULT_OUTLINE_WIDTH: f64 = 0.1;

// Output settings
/// Suffix added to output file stems
pub const OUTPUT_SUFFIX: &str = "_truchet";
/// Extension of the vector output
pub const VECTOR_EXTENSION: &str = "svg";
/// Input extensions picked up when the target is a directory
pub const INPUT_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of steps reported per processed file
pub const PIPELINE_STEPS: usize = 5;

/// Raster formats the exporter can write
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RasterFormat {
    /// Lossless PNG
    #[default]
    Png,
    /// Baseline JPEG (RGB, no alpha)
    #[value(alias = "jpeg")]
    Jpg,
}

impl RasterFormat {
    /// File extension written for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

/// Parameters of the sampling and tiling stages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Side length of one tile cell in source pixels
    pub length: usize,
    /// Rule assigning a tile pattern to each cell
    pub strategy: PatternStrategy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_TILE_LENGTH,
            strategy: PatternStrategy::Checkerboard,
        }
    }
}

impl PipelineConfig {
    /// Check that the configuration can drive the pipeline
    ///
    /// # Errors
    ///
    /// Returns an error if the cell length is zero
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(invalid_parameter(
                "length",
                &self.length,
                &"cell length must be positive",
            ));
        }
        Ok(())
    }
}

/// Parameters of the export stage
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Raster pixels per canvas unit
    pub raster_scale: f64,
    /// Outline width in canvas units, drawn in the fill colour
    pub outline_width: f64,
    /// Format of the raster output
    pub raster_format: RasterFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            raster_scale: DEFAULT_RASTER_SCALE,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            raster_format: RasterFormat::default(),
        }
    }
}

impl RenderConfig {
    /// Check that the configuration produces a drawable raster
    ///
    /// # Errors
    ///
    /// Returns an error if the raster scale is not a positive finite number
    /// or the outline width is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if !self.raster_scale.is_finite() || self.raster_scale <= 0.0 {
            return Err(invalid_parameter(
                "raster_scale",
                &self.raster_scale,
                &"must be a positive finite number",
            ));
        }
        if !self.outline_width.is_finite() || self.outline_width < 0.0 {
            return Err(invalid_parameter(
                "outline_width",
                &self.outline_width,
                &"must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}
