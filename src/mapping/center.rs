//! Piecewise-linear response curve from cell intensity to tile center
//!
//! Dark cells push the curve vertex toward the far corner of the tile and
//! bright cells pull it toward the near corner. The midband ramps linearly
//! between the two, so the center always stays inside
//! [`MIN_CENTER`]..=[`MAX_CENTER`] and no generated polygon degenerates.

use log::debug;
use ndarray::Array2;

use crate::io::configuration::{
    BRIGHT_THRESHOLD, DARK_THRESHOLD, MAX_CENTER, MAX_INTENSITY, MIN_CENTER,
};
use crate::sampling::LuminanceMatrix;

/// Tile centers indexed `[column, row]` in drawing space
pub type CenterMatrix = Array2<f64>;

/// Map one 8-bit calibrated intensity to a tile center
///
/// Intensities at or below a quarter of the range give [`MAX_CENTER`],
/// intensities at or above three quarters give [`MIN_CENTER`], and the
/// midband interpolates linearly through `0.5` at half intensity. A NaN
/// intensity counts as dark.
pub fn center_for_intensity(intensity: f64) -> f64 {
    let unit = intensity / MAX_INTENSITY;
    let ramp = if unit.is_nan() || unit <= DARK_THRESHOLD {
        0.0
    } else if unit >= BRIGHT_THRESHOLD {
        1.0
    } else {
        (unit - DARK_THRESHOLD) / (BRIGHT_THRESHOLD - DARK_THRESHOLD)
    };
    (MAX_CENTER - MIN_CENTER).mul_add(1.0 - ramp, MIN_CENTER)
}

/// Map a whole luminance matrix to a center matrix of the same shape
pub fn map_centers(luminance: &LuminanceMatrix) -> CenterMatrix {
    let centers = luminance.mapv(center_for_intensity);
    debug!(
        "Mapped {}x{} luminance matrix to centers",
        centers.nrows(),
        centers.ncols()
    );
    centers
}
