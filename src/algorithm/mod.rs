/// Stage composition from raster to tiling
pub mod pipeline;
