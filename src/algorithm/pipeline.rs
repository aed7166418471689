//! Straight-line composition of the sampling, mapping and tiling stages

use log::debug;

use crate::geometry::tiling::{TilingResult, assemble_tiling_with};
use crate::io::configuration::PipelineConfig;
use crate::io::error::Result;
use crate::mapping::{CenterMatrix, map_centers};
use crate::sampling::{IntensitySource, LuminanceMatrix, sample_luminance};

/// Steps of processing one input file, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    /// Decoding the source image
    Load,
    /// Averaging cell intensities
    Sample,
    /// Mapping luminance to centers
    Map,
    /// Building tile polygons
    Tile,
    /// Writing raster and vector output
    Export,
}

impl PipelineStage {
    /// Number of steps completed once this stage has started
    pub const fn position(self) -> usize {
        match self {
            Self::Load => 0,
            Self::Sample => 1,
            Self::Map => 2,
            Self::Tile => 3,
            Self::Export => 4,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Sample => "sample",
            Self::Map => "map",
            Self::Tile => "tile",
            Self::Export => "export",
        }
    }
}

/// Every intermediate product of one pipeline run
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Mean intensity per cell
    pub luminance: LuminanceMatrix,
    /// Tile center per cell
    pub centers: CenterMatrix,
    /// Generated polygons and canvas
    pub tiling: TilingResult,
}

/// Run the full pipeline and keep the intermediate matrices
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation
/// - The source is smaller than one cell
pub fn run_pipeline_detailed<S: IntensitySource + ?Sized>(
    source: &S,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    run_pipeline_observed(source, config, |_| {})
}

/// Run the full pipeline, reporting each stage to `on_stage` as it starts
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation
/// - The source is smaller than one cell
pub fn run_pipeline_observed<S, F>(
    source: &S,
    config: &PipelineConfig,
    mut on_stage: F,
) -> Result<PipelineOutput>
where
    S: IntensitySource + ?Sized,
    F: FnMut(PipelineStage),
{
    config.validate()?;

    on_stage(PipelineStage::Sample);
    let luminance = sample_luminance(source, config.length)?;

    on_stage(PipelineStage::Map);
    let centers = map_centers(&luminance);

    on_stage(PipelineStage::Tile);
    let tiling = assemble_tiling_with(&centers, config.length as f64, config.strategy);

    debug!(
        "Pipeline produced {} tiles with {:?} strategy",
        tiling.polygons.len(),
        config.strategy
    );

    Ok(PipelineOutput {
        luminance,
        centers,
        tiling,
    })
}

/// Run the full pipeline, returning only the tiling
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation
/// - The source is smaller than one cell
pub fn run_pipeline<S: IntensitySource + ?Sized>(
    source: &S,
    config: &PipelineConfig,
) -> Result<TilingResult> {
    run_pipeline_detailed(source, config).map(|output| output.tiling)
}
